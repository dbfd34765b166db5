//! Error types for drishti.

use thiserror::Error;

/// Drishti error type.
///
/// The interpolation variants signal a violated construction invariant:
/// upstream stages only ever ask a segment for lengths at angles the
/// segment is known to span. They abort the current recomputation; callers
/// should discard the frame and retry with corrected input.
#[derive(Error, Debug)]
pub enum DrishtiError {
    #[error("polar segment has no angular range")]
    NoAngularRange,

    #[error("angle {angle} outside segment span ({start}, {end})")]
    AngleOutOfRange {
        angle: f64,
        start: f64,
        end: f64,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DrishtiError {
    fn from(e: serde_json::Error) -> Self {
        DrishtiError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for DrishtiError {
    fn from(e: toml::de::Error) -> Self {
        DrishtiError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DrishtiError>;
