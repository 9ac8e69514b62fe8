//! Fixed-dimension numeric vectors.

use crate::{Result, Scalar, VectorError};
use ndarray::{Array1, Ix1};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Largest dimension a vector may have: the coordinate buffer's byte size
/// must fit in `isize`.
pub const MAX_DIMENSION: usize = isize::MAX as usize / std::mem::size_of::<Scalar>();

/// An ordered, fixed-length sequence of coordinates.
///
/// The dimension is set at construction and never changes afterwards. Every
/// operation that produces a vector allocates a new one; only [`Vector::set`]
/// and `IndexMut` write into an existing vector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Scalar>", into = "Vec<Scalar>")]
pub struct Vector {
    data: Array1<Scalar>,
}

impl Vector {
    /// Creates a vector of dimension `dimension` with every coordinate 0.
    ///
    /// Panics if `dimension` exceeds [`MAX_DIMENSION`]; [`Vector::from_json`]
    /// is the checked form.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            data: Array1::zeros(dimension),
        }
    }

    pub fn from_vec(data: Vec<Scalar>) -> Self {
        Self {
            data: Array1::from_vec(data),
        }
    }

    /// Copies any sequence of values that convert losslessly into [`Scalar`].
    ///
    /// ```
    /// use vector_space::Vector;
    ///
    /// let v = Vector::from_values([1i32, 2, 3]);
    /// assert_eq!(v.to_string(), "<1, 2, 3>");
    /// ```
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Self::from_vec(values.into_iter().map(Into::into).collect())
    }

    /// Builds a vector from a dynamically typed value.
    ///
    /// A non-negative integer is taken as a dimension and yields a zero vector;
    /// an array of numbers yields those coordinates in order. Anything else is
    /// rejected up front with [`VectorError::TypeConstructionError`], so a
    /// vector never holds a non-numeric coordinate. Dimensions above
    /// [`MAX_DIMENSION`] are rejected the same way.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => match n.as_u64() {
                Some(dimension) => match usize::try_from(dimension) {
                    Ok(dimension) if dimension <= MAX_DIMENSION => Ok(Self::zeros(dimension)),
                    _ => Err(construction_error(format!(
                        "dimension {} exceeds the maximum of {}",
                        dimension, MAX_DIMENSION
                    ))),
                },
                None => Err(construction_error(format!(
                    "dimension must be a non-negative integer, got {}",
                    n
                ))),
            },
            Value::Array(items) => {
                let mut coords = Vec::with_capacity(items.len());
                for (position, item) in items.iter().enumerate() {
                    match item.as_f64() {
                        Some(coord) => coords.push(coord),
                        None => {
                            return Err(construction_error(format!(
                                "element {} is not numeric: {}",
                                position, item
                            )))
                        }
                    }
                }
                Ok(Self::from_vec(coords))
            }
            other => Err(construction_error(format!(
                "expected a dimension or a sequence of numbers, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Parses JSON text and hands the result to [`Vector::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.dimension()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns coordinate `index`; negative indices count back from the end.
    pub fn get(&self, index: isize) -> Result<Scalar> {
        let position = self.resolve_index(index)?;
        Ok(self.data[position])
    }

    /// Replaces coordinate `index`; negative indices count back from the end.
    pub fn set(&mut self, index: isize, value: Scalar) -> Result<()> {
        let position = self.resolve_index(index)?;
        self.data[position] = value;
        Ok(())
    }

    pub fn as_array(&self) -> &Array1<Scalar> {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<Scalar> {
        self.data.to_vec()
    }

    pub fn into_vec(self) -> Vec<Scalar> {
        self.data.into_raw_vec()
    }

    pub fn iter(&self) -> ndarray::iter::Iter<'_, Scalar, Ix1> {
        self.data.iter()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.require_same_dimension("add", other)?;
        Ok(Self {
            data: &self.data + &other.data,
        })
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.require_same_dimension("subtract", other)?;
        Ok(Self {
            data: &self.data - &other.data,
        })
    }

    pub fn negate(&self) -> Vector {
        Self {
            data: self.data.mapv(|coord| -coord),
        }
    }

    /// Sum of the pairwise coordinate products.
    pub fn dot(&self, other: &Vector) -> Result<Scalar> {
        self.require_same_dimension("dot", other)?;
        Ok(self.data.dot(&other.data))
    }

    pub fn scale(&self, factor: Scalar) -> Vector {
        Self {
            data: self.data.mapv(|coord| coord * factor),
        }
    }

    /// Standard 3-D cross product. Both operands must have dimension 3.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        for operand in [self, other] {
            if operand.dimension() != 3 {
                return Err(dimension_mismatch("cross", 3, operand.dimension()));
            }
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Self::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Lexicographic comparison over coordinates.
    ///
    /// Yields `Ok(None)` when a NaN coordinate decides the comparison.
    pub fn lexicographic_cmp(&self, other: &Vector) -> Result<Option<Ordering>> {
        self.require_same_dimension("compare", other)?;
        Ok(self.data.iter().partial_cmp(other.data.iter()))
    }

    pub fn less_than(&self, other: &Vector) -> Result<bool> {
        self.require_same_dimension("compare", other)?;
        Ok(self.data.iter().lt(other.data.iter()))
    }

    pub fn less_equal(&self, other: &Vector) -> Result<bool> {
        self.require_same_dimension("compare", other)?;
        Ok(self.data.iter().le(other.data.iter()))
    }

    pub fn greater_than(&self, other: &Vector) -> Result<bool> {
        other.less_than(self)
    }

    pub fn greater_equal(&self, other: &Vector) -> Result<bool> {
        other.less_equal(self)
    }

    fn resolve_index(&self, index: isize) -> Result<usize> {
        let dimension = self.dimension();
        let position = if index < 0 {
            dimension.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize).filter(|&position| position < dimension)
        };
        position.ok_or_else(|| {
            log::debug!("index {} rejected for dimension {}", index, dimension);
            VectorError::IndexError { index, dimension }
        })
    }

    fn require_same_dimension(&self, operation: &str, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(dimension_mismatch(
                operation,
                self.dimension(),
                other.dimension(),
            ));
        }
        Ok(())
    }
}

fn dimension_mismatch(operation: &str, expected: usize, found: usize) -> VectorError {
    log::debug!(
        "{} rejected: expected dimension {}, found {}",
        operation,
        expected,
        found
    );
    VectorError::DimensionMismatchError { expected, found }
}

fn construction_error(message: String) -> VectorError {
    log::debug!("vector construction rejected: {}", message);
    VectorError::TypeConstructionError(message)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (position, coord) in self.data.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            // Adding 0.0 turns -0.0 into 0.0.
            write!(f, "{}", coord + 0.0)?;
        }
        write!(f, ">")
    }
}

impl TryFrom<&Value> for Vector {
    type Error = VectorError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl From<Vec<Scalar>> for Vector {
    fn from(data: Vec<Scalar>) -> Self {
        Self::from_vec(data)
    }
}

impl From<&[Scalar]> for Vector {
    fn from(data: &[Scalar]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

impl<const N: usize> From<[Scalar; N]> for Vector {
    fn from(data: [Scalar; N]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

impl From<Vector> for Vec<Scalar> {
    fn from(vector: Vector) -> Self {
        vector.into_vec()
    }
}

impl FromIterator<Scalar> for Vector {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = ndarray::iter::Iter<'a, Scalar, Ix1>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl IntoIterator for Vector {
    type Item = Scalar;
    type IntoIter = std::vec::IntoIter<Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Unchecked access: panics out of range and takes no negative indices.
/// [`Vector::get`] and [`Vector::set`] are the checked forms.
impl std::ops::Index<usize> for Vector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl std::ops::IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
