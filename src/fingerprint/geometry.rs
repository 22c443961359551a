//! Vector geometry on `[f64; 3]` coordinates.

use super::error::Error;

#[inline]
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn norm(v: [f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

#[inline]
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    norm(sub(a, b))
}

/// Angle between two vectors, in radians within `[0, π]`.
///
/// # Errors
///
/// Returns [`Error::DegenerateGeometry`] if either vector has zero (or
/// non-finite) length.
pub fn angle(v1: [f64; 3], v2: [f64; 3]) -> Result<f64, Error> {
    let n1 = norm(v1);
    let n2 = norm(v2);
    if !(n1 > 0.0 && n1.is_finite() && n2 > 0.0 && n2.is_finite()) {
        return Err(Error::degenerate(format!(
            "cannot measure an angle with a zero-length vector ({:?}, {:?})",
            v1, v2
        )));
    }
    let cos = (dot(v1, v2) / (n1 * n2)).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Mean position of a set of points.
///
/// # Errors
///
/// Returns [`Error::DegenerateGeometry`] for an empty set.
pub fn centroid<I>(points: I) -> Result<[f64; 3], Error>
where
    I: IntoIterator<Item = [f64; 3]>,
{
    let mut sum = [0.0; 3];
    let mut count = 0usize;
    for p in points {
        sum[0] += p[0];
        sum[1] += p[1];
        sum[2] += p[2];
        count += 1;
    }
    if count == 0 {
        return Err(Error::degenerate("centroid of an empty point set"));
    }
    let n = count as f64;
    Ok([sum[0] / n, sum[1] / n, sum[2] / n])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn orthogonal_vectors_are_ninety_degrees() {
        let a = angle([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]).unwrap();
        assert!(approx_eq(a.to_degrees(), 90.0, 1e-9));
    }

    #[test]
    fn identical_vectors_are_zero_degrees() {
        let a = angle([0.3, -1.2, 2.0], [0.3, -1.2, 2.0]).unwrap();
        assert!(approx_eq(a.to_degrees(), 0.0, 1e-6));
    }

    #[test]
    fn opposite_vectors_are_one_eighty_degrees() {
        let a = angle([1.0, 2.0, 3.0], [-2.0, -4.0, -6.0]).unwrap();
        assert!(approx_eq(a.to_degrees(), 180.0, 1e-6));
    }

    #[test]
    fn magnitude_does_not_matter() {
        let a = angle([10.0, 0.0, 0.0], [0.5, 0.5, 0.0]).unwrap();
        assert!(approx_eq(a.to_degrees(), 45.0, 1e-9));
    }

    #[test]
    fn zero_vector_is_degenerate() {
        let err = angle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry(_)));
        assert!(angle([1.0, 0.0, 0.0], [0.0; 3]).is_err());
    }

    #[test]
    fn centroid_of_points() {
        let c = centroid([[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 3.0, 0.0]]).unwrap();
        assert!(approx_eq(c[0], 1.0, 1e-12));
        assert!(approx_eq(c[1], 1.0, 1e-12));
        assert!(approx_eq(c[2], 0.0, 1e-12));
    }

    #[test]
    fn centroid_of_nothing_is_degenerate() {
        assert!(centroid(std::iter::empty()).is_err());
    }

    #[test]
    fn distance_between_points() {
        assert!(approx_eq(distance([1.0, 2.0, 3.0], [4.0, 6.0, 3.0]), 5.0, 1e-12));
    }
}
