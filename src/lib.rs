pub mod operand;
pub mod ops;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Type Construction Error: {0}")]
    TypeConstructionError(String),
    #[error("Dimension Mismatch Error: expected {expected}, found {found}")]
    DimensionMismatchError { expected: usize, found: usize },
    #[error("Index Error: index {index} out of range for dimension {dimension}")]
    IndexError { index: isize, dimension: usize },
    #[error("Unsupported Operand Error: {0}")]
    UnsupportedOperandError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// Coordinate type of every [`Vector`].
pub type Scalar = f64;

// Re-export main types for convenience
pub use operand::{Operand, Product};
pub use utils::{approx_eq, generate_random_vectors, is_orthogonal, random_vectors};
pub use vector::{Vector, MAX_DIMENSION};
