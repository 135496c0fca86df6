//! Small vector helpers shared by the descent solvers.

/// Returns the Euclidean norm of `v`: the square root of the sum of squares.
///
/// Returns `0.0` for the zero vector.
///
/// ```
/// use slope_solvers::vector::euclidean_norm;
///
/// assert_eq!(euclidean_norm(&[3.0, 4.0]), 5.0);
/// ```
#[must_use]
pub fn euclidean_norm(v: &[f64]) -> f64 {
    v.iter().map(|c| c * c).sum::<f64>().sqrt()
}

/// Scales `v` to unit length.
///
/// Returns `None` when the norm is zero or not finite, since no direction can
/// be derived from such a vector.
#[must_use]
pub fn unit_direction<const N: usize>(v: &[f64; N]) -> Option<[f64; N]> {
    let norm = euclidean_norm(v);
    if norm == 0.0 || !norm.is_finite() {
        return None;
    }
    Some(v.map(|c| c / norm))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn norm_of_three_four_is_five() {
        assert_relative_eq!(euclidean_norm(&[3.0, 4.0]), 5.0);
    }

    #[test]
    fn norm_of_zero_vector_is_zero() {
        assert_eq!(euclidean_norm(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn norm_ignores_sign() {
        assert_relative_eq!(euclidean_norm(&[-1.0, 2.0, -2.0]), 3.0);
    }

    #[test]
    fn unit_direction_has_unit_norm() {
        let gradients = [[0.0, -1.0, 0.0], [3.0, 4.0, 12.0], [1e-8, -2e-8, 5e-9]];

        for g in gradients {
            let s = unit_direction(&g).expect("nonzero gradient");
            assert_relative_eq!(euclidean_norm(&s), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn unit_direction_keeps_orientation() {
        let s = unit_direction(&[3.0, 4.0]).unwrap();

        assert_relative_eq!(s[0], 0.6);
        assert_relative_eq!(s[1], 0.8);
    }

    #[test]
    fn unit_direction_of_zero_is_none() {
        assert!(unit_direction(&[0.0; 4]).is_none());
        assert!(unit_direction(&[f64::NAN, 1.0]).is_none());
    }
}
