use thiserror::Error;

/// Engine-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the engine.
///
/// Most variants are caller-contract violations: the host drove a component
/// in a way it must not (extending a stroke that was never started, mixing an
/// empty set of colors). Numeric drift is never an error; it is clamped.
#[derive(Debug, Error)]
pub enum Error {
    /// `extend_stroke` / `end_stroke` called while no gesture is active.
    #[error("no stroke is being recorded")]
    NoActiveStroke,

    /// `mix_colors` called with zero colors.
    #[error("cannot mix an empty set of colors")]
    EmptyColorSet,

    /// A stroke was built or decoded without any points.
    #[error("stroke has no points")]
    EmptyStroke,

    /// The palette already holds its maximum number of colors.
    #[error("palette is full ({max} colors)")]
    PaletteFull { max: usize },

    /// The palette refused to remove an entry.
    #[error("cannot remove palette entry {index}: {reason}")]
    RemoveRefused { index: usize, reason: &'static str },

    /// A palette index did not refer to an existing entry.
    #[error("palette index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A persisted palette state could not be restored.
    #[error("invalid palette state: {0}")]
    InvalidPaletteState(String),

    /// Session snapshot (de)serialization failed.
    #[error("session snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
