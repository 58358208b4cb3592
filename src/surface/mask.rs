use super::grid::GridLayout;
use crate::math::hull_2d::{points_in_hull, ConvexHull};

/// Marks grid nodes that fall inside the survey hull.
#[derive(Debug)]
pub struct DomainMask<'a> {
    hull: &'a ConvexHull,
    tolerance: f64,
}

impl<'a> DomainMask<'a> {
    #[must_use]
    pub fn new(hull: &'a ConvexHull, tolerance: f64) -> Self {
        Self { hull, tolerance }
    }

    /// One flag per node of `layout`, in storage order.
    #[must_use]
    pub fn execute(&self, layout: &GridLayout) -> Vec<bool> {
        let mask = points_in_hull(self.hull, &layout.nodes(), self.tolerance);
        tracing::debug!(
            valid = mask.iter().filter(|v| **v).count(),
            total = mask.len(),
            "domain mask computed"
        );
        mask
    }
}
