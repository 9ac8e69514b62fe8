//! Single-entry multiplication over vector and scalar operands.
//!
//! [`Vector::dot`] and [`Vector::scale`] are the direct forms. `multiply`
//! exists for callers whose right-hand side is only known at runtime, such as
//! an operand decoded from JSON.

use crate::vector::json_kind;
use crate::{Result, Scalar, Vector, VectorError};
use serde_json::Value;

/// Right-hand side of a multiplication.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Vector(Vector),
    Scalar(Scalar),
}

/// Result of a multiplication: a dot product or a scaled vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    Scalar(Scalar),
    Vector(Vector),
}

impl Operand {
    /// Reversed-operand form, `operand * vector`.
    ///
    /// Scalar multiplication commutes and so does the dot product, so this is
    /// the same as `vector.multiply(self)`.
    pub fn multiply_vector(&self, vector: &Vector) -> Result<Product> {
        vector.multiply(self)
    }
}

impl Product {
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Product::Scalar(value) => Some(*value),
            Product::Vector(_) => None,
        }
    }

    pub fn into_vector(self) -> Option<Vector> {
        match self {
            Product::Vector(vector) => Some(vector),
            Product::Scalar(_) => None,
        }
    }
}

impl Vector {
    /// Dot product against a vector operand, scaling against a scalar one.
    pub fn multiply(&self, operand: &Operand) -> Result<Product> {
        match operand {
            Operand::Vector(other) => self.dot(other).map(Product::Scalar),
            Operand::Scalar(factor) => Ok(Product::Vector(self.scale(*factor))),
        }
    }
}

impl From<Vector> for Operand {
    fn from(vector: Vector) -> Self {
        Operand::Vector(vector)
    }
}

impl From<Scalar> for Operand {
    fn from(value: Scalar) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Scalar(value.into())
    }
}

impl TryFrom<&Value> for Operand {
    type Error = VectorError;

    /// Numbers become scalars and arrays of numbers become vectors; every other
    /// value is an unsupported operand.
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Operand::Scalar).ok_or_else(|| {
                unsupported(format!("number {} is not representable as a scalar", n))
            }),
            Value::Array(items) => {
                let coords: Option<Vec<Scalar>> = items.iter().map(Value::as_f64).collect();
                coords
                    .map(|coords| Operand::Vector(Vector::from_vec(coords)))
                    .ok_or_else(|| unsupported("array holds a non-numeric element".to_string()))
            }
            other => Err(unsupported(format!(
                "cannot multiply a vector by {}",
                json_kind(other)
            ))),
        }
    }
}

impl TryFrom<Value> for Operand {
    type Error = VectorError;

    fn try_from(value: Value) -> Result<Self> {
        Operand::try_from(&value)
    }
}

fn unsupported(message: String) -> VectorError {
    log::debug!("multiply rejected: {}", message);
    VectorError::UnsupportedOperandError(message)
}
