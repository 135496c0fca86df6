/// Restricts `f` to the ray `t ↦ point - t · direction`.
///
/// The returned closure owns copies of `point` and `direction` and builds a
/// fresh trial point for every evaluation.
pub fn restrict<F, E, const N: usize>(
    f: F,
    point: [f64; N],
    direction: [f64; N],
) -> impl Fn(f64) -> Result<f64, E>
where
    F: Fn(&[f64; N]) -> Result<f64, E>,
{
    move |t| {
        let trial: [f64; N] = std::array::from_fn(|i| point[i] - t * direction[i]);
        f(&trial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    #[test]
    fn moves_against_direction() {
        let first = |x: &[f64; 2]| Ok::<_, Infallible>(x[0]);
        let second = |x: &[f64; 2]| Ok::<_, Infallible>(x[1]);

        let g_first = restrict(first, [1.0, 2.0], [0.6, 0.8]);
        let g_second = restrict(second, [1.0, 2.0], [0.6, 0.8]);

        assert_relative_eq!(g_first(0.0).unwrap(), 1.0);
        assert_relative_eq!(g_first(5.0).unwrap(), -2.0);
        assert_relative_eq!(g_second(5.0).unwrap(), -2.0);
    }
}
