use thiserror::Error;

/// Errors returned while building a [`Shape`](crate::Shape).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// The tag does not name any known shape.
    #[error("unknown type of shape `{0}`")]
    UnknownKind(String),

    /// The size is negative, infinite or NaN.
    #[error("invalid shape size {0}, expected a finite non-negative number")]
    InvalidSize(f64),
}
