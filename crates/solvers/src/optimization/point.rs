use thiserror::Error;

/// The initial point does not have the problem's number of variables.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("initial point has {actual} coordinates, expected {expected}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Copies a caller's initial point into a fixed-size array.
pub(crate) fn point_from_slice<const N: usize>(
    initial_point: &[f64],
) -> Result<[f64; N], DimensionMismatch> {
    initial_point.try_into().map_err(|_| DimensionMismatch {
        expected: N,
        actual: initial_point.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_length_is_copied() {
        let source = vec![1.0, 2.0, 3.0];
        let point: [f64; 3] = point_from_slice(&source).unwrap();

        assert_eq!(point, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let result = point_from_slice::<3>(&[1.0, 2.0]);

        assert_eq!(
            result,
            Err(DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }
}
