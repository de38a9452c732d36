use super::{FinishedStroke, Stroke};

/// Finished strokes of one drawing surface, oldest first.
///
/// Each entry keeps the geometry built while it was recorded so redraws do
/// not recompute it. Only the strokes are persisted; [`restore`](Self::restore)
/// rebuilds geometry from their point lists.
#[derive(Debug, Default, Clone)]
pub struct CompletedStrokeLog {
    entries: Vec<FinishedStroke>,
}

impl CompletedStrokeLog {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, finished: FinishedStroke) {
        self.entries.push(finished);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in paint order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &FinishedStroke> {
        self.entries.iter()
    }

    #[inline]
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.entries.iter().map(|e| &e.stroke)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Persistable copy of every stroke, in paint order.
    pub fn snapshot(&self) -> Vec<Stroke> {
        self.strokes().cloned().collect()
    }

    /// Replaces the log with `strokes`, rebuilding their geometry.
    pub fn restore(&mut self, strokes: Vec<Stroke>) {
        self.entries = strokes.into_iter().map(FinishedStroke::rebuilt).collect();
        log::debug!("restored {} strokes", self.entries.len());
    }
}
