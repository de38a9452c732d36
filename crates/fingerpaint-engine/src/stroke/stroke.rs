use serde::{Deserialize, Serialize};

use crate::coords::NormalizedPoint;
use crate::error::{Error, Result};
use crate::paint::Rgb;

/// How a stroke should be drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderKind {
    /// A tap: one point, drawn as a filled circle.
    Dot(NormalizedPoint),
    /// Two or more points, drawn as the smoothed path.
    Path,
}

/// One painted stroke: its recorded points in order plus its color.
///
/// Invariant: holds at least one point. Only the recorder appends points, and
/// only while the gesture is live; a finished stroke is never mutated.
///
/// Serialized as `{ "points": [{ "x", "y" }, ..], "color": <packed rgb> }`;
/// decoding an empty point list fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StrokeRecord", into = "StrokeRecord")]
pub struct Stroke {
    points: Vec<NormalizedPoint>,
    color: Rgb,
}

#[derive(Serialize, Deserialize)]
struct StrokeRecord {
    points: Vec<NormalizedPoint>,
    color: Rgb,
}

impl Stroke {
    /// Starts a stroke at `first`.
    #[inline]
    pub fn new(first: NormalizedPoint, color: Rgb) -> Self {
        Self { points: vec![first], color }
    }

    /// Builds a stroke from a persisted point list.
    ///
    /// # Errors
    /// [`Error::EmptyStroke`] if `points` is empty.
    pub fn from_points(points: Vec<NormalizedPoint>, color: Rgb) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyStroke);
        }
        Ok(Self { points, color })
    }

    #[inline]
    pub fn points(&self) -> &[NormalizedPoint] {
        &self.points
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn first_point(&self) -> NormalizedPoint {
        self.points[0]
    }

    #[inline]
    pub fn last_point(&self) -> NormalizedPoint {
        self.points[self.points.len() - 1]
    }

    #[inline]
    pub fn render_kind(&self) -> RenderKind {
        if self.points.len() == 1 {
            RenderKind::Dot(self.first_point())
        } else {
            RenderKind::Path
        }
    }

    #[inline]
    pub(crate) fn push_point(&mut self, point: NormalizedPoint) {
        self.points.push(point);
    }
}

impl TryFrom<StrokeRecord> for Stroke {
    type Error = Error;

    fn try_from(record: StrokeRecord) -> Result<Self> {
        Stroke::from_points(record.points, record.color)
    }
}

impl From<Stroke> for StrokeRecord {
    fn from(stroke: Stroke) -> Self {
        StrokeRecord { points: stroke.points, color: stroke.color }
    }
}
