use crate::math::finite_mean;

/// Stretches elevations about a fixed reference mean.
///
/// `z' = (z - mean) * factor + mean`. The mean comes from the grid and is
/// reused for borehole elevations so both stay consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalExaggeration {
    mean: f64,
    factor: f64,
}

impl VerticalExaggeration {
    #[must_use]
    pub fn new(mean: f64, factor: f64) -> Self {
        Self { mean, factor }
    }

    /// Uses the mean of the finite values in `field` as the reference.
    ///
    /// Returns `None` when `field` has no finite value.
    #[must_use]
    pub fn about_mean_of(field: &[f64], factor: f64) -> Option<Self> {
        finite_mean(field).map(|mean| Self::new(mean, factor))
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn apply(&self, z: f64) -> f64 {
        (z - self.mean) * self.factor + self.mean
    }

    #[must_use]
    pub fn apply_all(&self, field: &[f64]) -> Vec<f64> {
        field.iter().map(|&z| self.apply(z)).collect()
    }
}
