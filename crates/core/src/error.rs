//! Error types for the timeline domain.

use thiserror::Error;

/// Result type alias for timeline operations.
pub type Result<T> = std::result::Result<T, TimelineError>;

/// Errors that can occur while building or driving a timeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// A timeline needs at least one entry.
    #[error("Timeline must contain at least one entry")]
    Empty,

    /// Decade labels identify entries and must be unique.
    #[error("Duplicate decade '{0}' in timeline")]
    DuplicateDecade(String),

    /// The modal only enlarges still images.
    #[error("Entry '{decade}' is video-backed and cannot be enlarged")]
    NotAnImage { decade: String },
}
