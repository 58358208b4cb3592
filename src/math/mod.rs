pub mod hull_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Z component of `(a - o) x (b - o)`.
///
/// Positive when `o -> a -> b` turns counter-clockwise.
#[must_use]
pub fn cross_2d(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Mean of the finite values in `values`, or `None` if there are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn finite_mean(values: &[f64]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_sign_follows_turn() {
        let o = Point2::new(0.0, 0.0);
        let a = Point2::new(1.0, 0.0);
        assert!(cross_2d(&o, &a, &Point2::new(1.0, 1.0)) > 0.0);
        assert!(cross_2d(&o, &a, &Point2::new(1.0, -1.0)) < 0.0);
        assert!(cross_2d(&o, &a, &Point2::new(2.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn finite_mean_skips_nan() {
        let mean = finite_mean(&[1.0, f64::NAN, 3.0]);
        assert_eq!(mean, Some(2.0));
    }

    #[test]
    fn finite_mean_of_nothing() {
        assert_eq!(finite_mean(&[]), None);
        assert_eq!(finite_mean(&[f64::NAN]), None);
    }
}
