//! Error type shared by all sketch operations.

/// Failures surfaced by sketch construction and the derived transforms.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SketchError {
    /// A stroke was opened after all declared stroke slots were used.
    #[error("stroke limit exceeded (sketch holds at most {capacity} strokes)")]
    StrokeLimitExceeded { capacity: usize },
    /// The operation needs at least one point.
    #[error("sketch has no points")]
    EmptySketch,
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    /// Input geometry that would make the result NaN or infinite.
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },
}

impl SketchError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }
}
