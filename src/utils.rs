use crate::{Result, Scalar, Vector};
use rand::Rng;

/// Generates `num` vectors of dimension `dim` with coordinates in `[-1, 1)`.
pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();
    random_vectors(&mut rng, dim, num)
}

/// Like [`generate_random_vectors`], drawing from the supplied generator so
/// that seeded runs are reproducible.
pub fn random_vectors<R: Rng + ?Sized>(rng: &mut R, dim: usize, num: usize) -> Vec<Vector> {
    (0..num)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect()
}

/// Coordinate-wise comparison within `tolerance`.
///
/// Vectors of different dimension are never approximately equal.
pub fn approx_eq(a: &Vector, b: &Vector, tolerance: Scalar) -> bool {
    a.dimension() == b.dimension()
        && a.iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).abs() <= tolerance)
}

/// Checks that `candidate` is orthogonal to `vector` within `tolerance`.
pub fn is_orthogonal(vector: &Vector, candidate: &Vector, tolerance: Scalar) -> Result<bool> {
    Ok(vector.dot(candidate)?.abs() <= tolerance)
}
