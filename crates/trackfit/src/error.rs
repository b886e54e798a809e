//! Errors raised by the projection engine.

use std::fmt;

/// Malformed-input failures. None of these are transient; callers should
/// surface them instead of drawing a blank or garbled track.
#[derive(Clone, Debug, PartialEq)]
pub enum ProjectionError {
    /// No points to bound.
    EmptyInput,
    /// Zero-size extent on an axis the strategy has to divide by.
    DegenerateExtent { reason: String },
    /// Margin fraction outside `(0, 1]`, or one that leaves no drawable pixels.
    InvalidMargin { margin: f64 },
}

impl ProjectionError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateExtent {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "track segment has no points"),
            Self::DegenerateExtent { reason } => write!(f, "degenerate track extent: {reason}"),
            Self::InvalidMargin { margin } => {
                write!(f, "invalid margin fraction {margin} (expected 0 < margin <= 1)")
            }
        }
    }
}

impl std::error::Error for ProjectionError {}
