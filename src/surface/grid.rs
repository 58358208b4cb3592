use crate::error::{InterpolationError, Result};
use crate::math::Point2;

/// Axis-aligned planar bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    /// Smallest bounds containing every point, `None` for an empty slice.
    #[must_use]
    pub fn of_points(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min: *first,
            max: *first,
        };
        Some(points.iter().fold(init, |b, p| Self {
            min: Point2::new(b.min.x.min(p.x), b.min.y.min(p.y)),
            max: Point2::new(b.max.x.max(p.x), b.max.y.max(p.y)),
        }))
    }

    /// Grows each side by `fraction` of the extent along that axis.
    #[must_use]
    pub fn buffered(&self, fraction: f64) -> Self {
        let dx = (self.max.x - self.min.x) * fraction;
        let dy = (self.max.y - self.min.y) * fraction;
        Self {
            min: Point2::new(self.min.x - dx, self.min.y - dy),
            max: Point2::new(self.max.x + dx, self.max.y + dy),
        }
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Node positions of a rectilinear grid.
///
/// Node `(i, j)` sits at `(xs[i], ys[j])`. Per-node arrays are stored
/// row-major with `i` as the row.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl GridLayout {
    /// `resolution` nodes per axis spanning `bounds`.
    #[must_use]
    pub fn over(bounds: &Bounds, resolution: usize) -> Self {
        Self {
            xs: linspace(bounds.min.x, bounds.max.x, resolution),
            ys: linspace(bounds.min.y, bounds.max.y, resolution),
        }
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Shape as `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.xs.len(), self.ys.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every node position in storage order.
    #[must_use]
    pub fn nodes(&self) -> Vec<Point2> {
        self.xs
            .iter()
            .flat_map(|&x| self.ys.iter().map(move |&y| Point2::new(x, y)))
            .collect()
    }
}

/// Interpolated, exaggerated and masked elevation grid.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationGrid {
    layout: GridLayout,
    z: Vec<f64>,
    valid_mask: Vec<bool>,
}

impl InterpolationGrid {
    /// # Errors
    ///
    /// Returns `InterpolationError::GridShape` if `z` or `valid_mask` does
    /// not have one entry per node.
    pub fn new(layout: GridLayout, z: Vec<f64>, valid_mask: Vec<bool>) -> Result<Self> {
        let nodes = layout.len();
        for (what, values) in [("elevations", z.len()), ("mask flags", valid_mask.len())] {
            if values != nodes {
                return Err(InterpolationError::GridShape {
                    what,
                    nodes,
                    values,
                }
                .into());
            }
        }
        Ok(Self {
            layout,
            z,
            valid_mask,
        })
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    #[must_use]
    pub fn valid_mask(&self) -> &[bool] {
        &self.valid_mask
    }

    #[must_use]
    pub fn elevation(&self, i: usize, j: usize) -> f64 {
        self.z[i * self.layout.ys.len() + j]
    }

    #[must_use]
    pub fn is_valid(&self, i: usize, j: usize) -> bool {
        self.valid_mask[i * self.layout.ys.len() + j]
    }

    /// Number of nodes inside the survey hull.
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid_mask.iter().filter(|v| **v).count()
    }

    /// `x[i][j]`, matching the layout of [`InterpolationGrid::masked_z_rows`].
    #[must_use]
    pub fn x_rows(&self) -> Vec<Vec<f64>> {
        let ny = self.layout.ys.len();
        self.layout.xs.iter().map(|&x| vec![x; ny]).collect()
    }

    /// `y[i][j]`, matching the layout of [`InterpolationGrid::masked_z_rows`].
    #[must_use]
    pub fn y_rows(&self) -> Vec<Vec<f64>> {
        self.layout.xs.iter().map(|_| self.layout.ys.clone()).collect()
    }

    /// Elevations by row, `None` where the node is masked out.
    #[must_use]
    pub fn masked_z_rows(&self) -> Vec<Vec<Option<f64>>> {
        let ny = self.layout.ys.len();
        self.z
            .chunks(ny.max(1))
            .zip(self.valid_mask.chunks(ny.max(1)))
            .map(|(z, mask)| {
                z.iter()
                    .zip(mask)
                    .map(|(&z, &valid)| valid.then_some(z))
                    .collect()
            })
            .collect()
    }

    /// `(min, max)` over finite elevations of all nodes, masked or not.
    #[must_use]
    pub fn z_extent(&self) -> Option<(f64, f64)> {
        self.z
            .iter()
            .filter(|z| z.is_finite())
            .fold(None, |acc, &z| match acc {
                None => Some((z, z)),
                Some((lo, hi)) => Some((lo.min(z), hi.max(z))),
            })
    }
}
