use proptest::prelude::*;
use vector_space::{vector::Vector, VectorError};

const MAX_COORD: i32 = 100;

/// Vectors of integral coordinates, so sums and products stay exact.
fn vector_of(dimension: usize) -> BoxedStrategy<Vector> {
    prop::collection::vec(-MAX_COORD..=MAX_COORD, dimension)
        .prop_map(Vector::from_values)
        .boxed()
}

/// Two vectors sharing one dimension.
fn same_dimension_pair() -> impl Strategy<Value = (Vector, Vector)> {
    (0..8usize).prop_flat_map(|d| (vector_of(d), vector_of(d)))
}

fn same_dimension_triple() -> impl Strategy<Value = (Vector, Vector, Vector)> {
    (0..8usize).prop_flat_map(|d| (vector_of(d), vector_of(d), vector_of(d)))
}

fn mismatched_pair() -> impl Strategy<Value = (Vector, Vector)> {
    (0..8usize, 1..4usize).prop_flat_map(|(d, extra)| (vector_of(d), vector_of(d + extra)))
}

proptest! {
    #[test]
    fn test_addition_laws((a, b) in same_dimension_pair()) {
        prop_assert_eq!((&a + &b).unwrap(), (&b + &a).unwrap());
        prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a.clone());
        prop_assert_eq!(-(-&a), a);
    }

    #[test]
    fn test_addition_is_associative((a, b, c) in same_dimension_triple()) {
        let left = a.add(&b).unwrap().add(&c).unwrap();
        let right = a.add(&b.add(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn test_cross_product_laws(a in vector_of(3), b in vector_of(3)) {
        let ab = a.cross(&b).unwrap();
        prop_assert_eq!(ab.clone(), -b.cross(&a).unwrap());
        prop_assert_eq!(a.dot(&ab).unwrap(), 0.0);
        prop_assert_eq!(b.dot(&ab).unwrap(), 0.0);
    }

    #[test]
    fn test_scalar_multiplication(a in (0..8usize).prop_flat_map(vector_of), s in -50..=50i32) {
        let s = f64::from(s);
        let scaled = &a * s;
        prop_assert_eq!(s * &a, scaled.clone());
        prop_assert_eq!(scaled.dimension(), a.dimension());
        for j in 0..a.dimension() {
            prop_assert_eq!(scaled[j], a[j] * s);
        }
    }

    #[test]
    fn test_mismatched_dimensions((a, b) in mismatched_pair()) {
        let is_mismatch = |r: Result<_, VectorError>| {
            matches!(r, Err(VectorError::DimensionMismatchError { .. }))
        };
        prop_assert!(is_mismatch(a.add(&b).map(|_| ())));
        prop_assert!(is_mismatch(a.subtract(&b).map(|_| ())));
        prop_assert!(is_mismatch(a.dot(&b).map(|_| ())));
        prop_assert!(is_mismatch(a.less_than(&b).map(|_| ())));
        prop_assert!(a != b);
    }

    #[test]
    fn test_ordering_matches_coordinate_order((a, b) in same_dimension_pair()) {
        let expected = a.to_vec() < b.to_vec();
        prop_assert_eq!(a.less_than(&b).unwrap(), expected);
        prop_assert_eq!(a.less_equal(&b).unwrap(), a.to_vec() <= b.to_vec());
        prop_assert_eq!(a.less_equal(&b).unwrap(), a.less_than(&b).unwrap() || a == b);
    }

    #[test]
    fn test_negative_indexing(a in (1..8usize).prop_flat_map(vector_of)) {
        let d = a.dimension() as isize;
        for j in 0..d {
            prop_assert_eq!(a.get(j - d).unwrap(), a.get(j).unwrap());
        }
        let out_of_range = matches!(a.get(d), Err(VectorError::IndexError { .. }));
        prop_assert!(out_of_range);
        let out_of_range = matches!(a.get(-d - 1), Err(VectorError::IndexError { .. }));
        prop_assert!(out_of_range);
    }
}
