//! Operator notation over the named [`Vector`] operations.
//!
//! Operators that can fail on a dimension mismatch (`+`, `-`, and `*` between
//! two vectors) produce a [`Result`] rather than panicking. There is no
//! `PartialOrd`: ordering goes through [`Vector::less_than`] and friends, which
//! report a dimension mismatch instead of answering `false`.

use crate::{Result, Scalar, Vector};
use std::ops::{Add, Mul, Neg, Sub};

impl Add<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: &Vector) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl Add for Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: Vector) -> Self::Output {
        Vector::add(&self, &rhs)
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: &Vector) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Sub for Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: Vector) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

// Vector * Vector is the dot product.
impl Mul<&Vector> for &Vector {
    type Output = Result<Scalar>;

    fn mul(self, rhs: &Vector) -> Self::Output {
        self.dot(rhs)
    }
}

impl Mul for Vector {
    type Output = Result<Scalar>;

    fn mul(self, rhs: Vector) -> Self::Output {
        self.dot(&rhs)
    }
}

impl Mul<Scalar> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: Scalar) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Scalar> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Scalar) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<&Vector> for Scalar {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Mul<Vector> for Scalar {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

// Integer scalars, for `&v * 2` and `2 * &v`.
impl Mul<i32> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: i32) -> Vector {
        self.scale(rhs.into())
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i32) -> Vector {
        self.scale(rhs.into())
    }
}

impl Mul<&Vector> for i32 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs.scale(self.into())
    }
}

impl Mul<Vector> for i32 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self.into())
    }
}
