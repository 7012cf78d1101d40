use thiserror::Error;

/// Top-level error type for polygon labelling.
#[derive(Debug, Error)]
pub enum PolylabelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised when a polygon violates its structural preconditions.
///
/// Ring index `0` is the exterior; holes are numbered from `1`.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("ring {ring} has no edges")]
    EmptyRing { ring: usize },

    #[error("ring {ring} has a non-finite coordinate at vertex {index}")]
    NonFiniteCoordinate { ring: usize, index: usize },
}

/// Errors related to search parameters.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("precision must be positive and finite, got {0}")]
    InvalidPrecision(f64),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`PolylabelError`].
pub type Result<T> = std::result::Result<T, PolylabelError>;
