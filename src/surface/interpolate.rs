use spade::{
    DelaunayTriangulation, FloatTriangulation, HasPosition, Point2 as SpadePoint2, Triangulation,
};

use super::grid::GridLayout;
use super::scale::ScaledSurveyPoint;
use crate::error::{InterpolationError, Result};
use crate::math::hull_2d::ConvexHull;
use crate::math::Point2;

/// Triangulation vertex carrying its surveyed elevation.
#[derive(Debug, Clone, Copy)]
struct SurveyVertex {
    position: SpadePoint2<f64>,
    elevation: f64,
}

impl HasPosition for SurveyVertex {
    type Scalar = f64;

    fn position(&self) -> SpadePoint2<f64> {
        self.position
    }
}

/// Piecewise-linear elevation field over a Delaunay triangulation of the
/// survey points.
///
/// Points sharing a position keep the elevation of the last one inserted.
#[derive(Debug)]
pub struct SurfaceInterpolator {
    triangulation: DelaunayTriangulation<SurveyVertex>,
    fill_value: f64,
}

impl SurfaceInterpolator {
    /// Triangulates the scaled survey points.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::NoElevations` for an empty input,
    /// `TooFewPoints` when fewer than 3 distinct positions remain,
    /// `Collinear` when all positions lie on one line, and
    /// `InvalidCoordinate` when spade rejects a position.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(points: &[ScaledSurveyPoint]) -> Result<Self> {
        if points.is_empty() {
            return Err(InterpolationError::NoElevations.into());
        }
        if points.len() < 3 {
            return Err(InterpolationError::TooFewPoints {
                count: points.len(),
            }
            .into());
        }

        let mut triangulation = DelaunayTriangulation::<SurveyVertex>::new();
        for p in points {
            let vertex = SurveyVertex {
                position: SpadePoint2::new(p.position.x, p.position.y),
                elevation: p.elevation,
            };
            triangulation.insert(vertex).map_err(|_| {
                InterpolationError::InvalidCoordinate {
                    x: p.position.x,
                    y: p.position.y,
                }
            })?;
        }

        if triangulation.num_vertices() < 3 {
            return Err(InterpolationError::TooFewPoints {
                count: triangulation.num_vertices(),
            }
            .into());
        }
        if triangulation.all_vertices_on_line() {
            return Err(InterpolationError::Collinear.into());
        }

        let fill_value =
            points.iter().map(|p| p.elevation).sum::<f64>() / points.len() as f64;

        tracing::debug!(
            vertices = triangulation.num_vertices(),
            triangles = triangulation.num_inner_faces(),
            fill_value,
            "survey triangulated"
        );

        Ok(Self {
            triangulation,
            fill_value,
        })
    }

    /// Mean of all input elevations, used outside the triangulation.
    #[must_use]
    pub fn fill_value(&self) -> f64 {
        self.fill_value
    }

    /// Convex hull of the triangulation, the domain where `sample` is
    /// defined.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::HullDegeneracy` if the hull encloses no area.
    pub fn hull(&self) -> Result<ConvexHull> {
        ConvexHull::from_triangulation(&self.triangulation)
    }

    /// Linear estimate at `p`, `None` outside the triangulated hull.
    #[must_use]
    pub fn sample(&self, p: &Point2) -> Option<f64> {
        self.triangulation
            .barycentric()
            .interpolate(|v| v.data().elevation, SpadePoint2::new(p.x, p.y))
    }

    /// Estimates at many points, keeping undefined results.
    #[must_use]
    pub fn sample_all(&self, points: &[Point2]) -> Vec<Option<f64>> {
        let barycentric = self.triangulation.barycentric();
        points
            .iter()
            .map(|p| barycentric.interpolate(|v| v.data().elevation, SpadePoint2::new(p.x, p.y)))
            .collect()
    }

    /// Estimates at every node of `layout`, with the fill value outside
    /// the hull.
    #[must_use]
    pub fn grid(&self, layout: &GridLayout) -> Vec<f64> {
        self.sample_all(&layout.nodes())
            .into_iter()
            .map(|z| z.unwrap_or(self.fill_value))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::BorelogError;
    use crate::surface::grid::Bounds;

    fn pt(x: f64, y: f64, z: f64) -> ScaledSurveyPoint {
        ScaledSurveyPoint {
            position: Point2::new(x, y),
            elevation: z,
        }
    }

    /// Samples of the plane `z = 2x + 3y + 1`.
    fn plane() -> Vec<ScaledSurveyPoint> {
        [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (4.0, 6.0)]
            .iter()
            .map(|&(x, y)| pt(x, y, 2.0 * x + 3.0 * y + 1.0))
            .collect()
    }

    #[test]
    fn reproduces_a_plane_inside_the_hull() {
        let interp = SurfaceInterpolator::new(&plane()).unwrap();
        let z = interp.sample(&Point2::new(2.5, 7.5)).unwrap();
        assert_relative_eq!(z, 2.0 * 2.5 + 3.0 * 7.5 + 1.0, epsilon = 1e-9);
    }

    #[test]
    fn hits_vertices_exactly() {
        let interp = SurfaceInterpolator::new(&plane()).unwrap();
        assert_relative_eq!(interp.sample(&Point2::new(10.0, 0.0)).unwrap(), 21.0, epsilon = 1e-9);
    }

    #[test]
    fn undefined_outside_the_hull() {
        let interp = SurfaceInterpolator::new(&plane()).unwrap();
        assert_eq!(interp.sample(&Point2::new(-1.0, 5.0)), None);
        let all = interp.sample_all(&[Point2::new(5.0, 5.0), Point2::new(20.0, 20.0)]);
        assert!(all[0].is_some());
        assert!(all[1].is_none());
    }

    #[test]
    fn grid_fills_outside_with_mean() {
        let points = plane();
        let interp = SurfaceInterpolator::new(&points).unwrap();
        let mean = points.iter().map(|p| p.elevation).sum::<f64>() / 5.0;
        assert_relative_eq!(interp.fill_value(), mean);

        let bounds = Bounds {
            min: Point2::new(-5.0, -5.0),
            max: Point2::new(15.0, 15.0),
        };
        let layout = GridLayout::over(&bounds, 5);
        let z = interp.grid(&layout);
        assert_eq!(z.len(), 25);
        // (-5, -5) is outside, (5, 5) is inside.
        assert_relative_eq!(z[0], mean);
        assert_relative_eq!(z[2 * 5 + 2], 26.0, epsilon = 1e-9);
    }

    #[test]
    fn constant_field_fills_with_the_constant() {
        let points: Vec<_> = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]
            .iter()
            .map(|&(x, y)| pt(x, y, 7.0))
            .collect();
        let interp = SurfaceInterpolator::new(&points).unwrap();
        assert_relative_eq!(interp.fill_value(), 7.0);
        assert_relative_eq!(interp.sample(&Point2::new(0.2, 0.2)).unwrap(), 7.0);
    }

    #[test]
    fn too_few_points() {
        let err = SurfaceInterpolator::new(&[pt(0.0, 0.0, 1.0), pt(1.0, 1.0, 2.0)]).unwrap_err();
        assert!(matches!(
            err,
            BorelogError::Interpolation(InterpolationError::TooFewPoints { count: 2 })
        ));
    }

    #[test]
    fn duplicates_do_not_count_as_distinct() {
        let err = SurfaceInterpolator::new(&[
            pt(0.0, 0.0, 1.0),
            pt(0.0, 0.0, 2.0),
            pt(1.0, 1.0, 3.0),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            BorelogError::Interpolation(InterpolationError::TooFewPoints { count: 2 })
        ));
    }

    #[test]
    fn collinear_points() {
        let err = SurfaceInterpolator::new(&[
            pt(0.0, 0.0, 1.0),
            pt(1.0, 1.0, 2.0),
            pt(2.0, 2.0, 3.0),
            pt(3.0, 3.0, 4.0),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            BorelogError::Interpolation(InterpolationError::Collinear)
        ));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(
            SurfaceInterpolator::new(&[]).unwrap_err(),
            BorelogError::Interpolation(InterpolationError::NoElevations)
        ));
    }

    #[test]
    fn hull_matches_the_interpolation_domain() {
        let interp = SurfaceInterpolator::new(&plane()).unwrap();
        let hull = interp.hull().unwrap();
        assert_relative_eq!(hull.area(), 100.0, epsilon = 1e-9);
        for i in -2..=12 {
            for j in -2..=12 {
                let p = Point2::new(f64::from(i) + 0.5, f64::from(j) + 0.5);
                assert_eq!(hull.contains(&p, 1e-12), interp.sample(&p).is_some(), "{p:?}");
            }
        }
    }
}
