//! Saved session state.
//!
//! The host decides when and where to store it (bundle, file, preferences);
//! this module only defines the shape and the JSON encoding.

mod snapshot;

pub use snapshot::SessionSnapshot;
