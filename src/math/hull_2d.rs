use spade::{DelaunayTriangulation, HasPosition, Point2 as SpadePoint2, Triangulation};

use super::{cross_2d, Point2, Vector2};
use crate::error::{GeometryError, InterpolationError, Result};

/// Half-plane `normal . p + offset <= 0`, with a unit outward `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub normal: Vector2,
    pub offset: f64,
}

impl HalfPlane {
    /// Builds the half-plane to the left of the directed edge `a -> b`.
    ///
    /// Returns `None` for a zero-length edge.
    #[must_use]
    pub fn left_of(a: &Point2, b: &Point2) -> Option<Self> {
        let d = b - a;
        let normal = Vector2::new(d.y, -d.x).try_normalize(0.0)?;
        Some(Self {
            normal,
            offset: -normal.dot(&a.coords),
        })
    }

    /// Signed distance from the boundary line, positive outside.
    #[must_use]
    pub fn signed_distance(&self, p: &Point2) -> f64 {
        self.normal.dot(&p.coords) + self.offset
    }
}

/// Convex hull of a planar point set.
///
/// Vertices are stored counter-clockwise. Points lying on a hull edge are
/// kept as vertices.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    vertices: Vec<Point2>,
    half_planes: Vec<HalfPlane>,
}

impl ConvexHull {
    /// Triangulates `points` and takes the hull of the result.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::HullDegeneracy` when the points do not span an
    /// area (fewer than 3 distinct points, or all collinear), and
    /// `InterpolationError::InvalidCoordinate` for a point spade rejects.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        let mut triangulation = DelaunayTriangulation::<SpadePoint2<f64>>::new();
        for p in points {
            triangulation
                .insert(SpadePoint2::new(p.x, p.y))
                .map_err(|_| InterpolationError::InvalidCoordinate { x: p.x, y: p.y })?;
        }
        Self::from_triangulation(&triangulation)
    }

    /// Reads the hull edges of an existing triangulation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::HullDegeneracy` if the triangulation has no
    /// inner face.
    pub fn from_triangulation<T>(triangulation: &T) -> Result<Self>
    where
        T: Triangulation,
        T::Vertex: HasPosition<Scalar = f64>,
    {
        if triangulation.all_vertices_on_line() || triangulation.convex_hull_size() < 3 {
            return Err(GeometryError::HullDegeneracy {
                vertices: triangulation.num_vertices(),
            }
            .into());
        }

        let mut vertices: Vec<Point2> = triangulation
            .convex_hull()
            .map(|edge| {
                let p = edge.from().position();
                Point2::new(p.x, p.y)
            })
            .collect();
        if signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }

        let n = vertices.len();
        let half_planes = (0..n)
            .filter_map(|i| HalfPlane::left_of(&vertices[i], &vertices[(i + 1) % n]))
            .collect();

        Ok(Self {
            vertices,
            half_planes,
        })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn half_planes(&self) -> &[HalfPlane] {
        &self.half_planes
    }

    /// Tests whether `p` satisfies every half-plane within `tolerance`.
    #[must_use]
    pub fn contains(&self, p: &Point2, tolerance: f64) -> bool {
        self.half_planes
            .iter()
            .all(|h| h.signed_distance(p) <= tolerance)
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices)
    }
}

/// Hull membership for a batch of points, in input order.
#[must_use]
pub fn points_in_hull(hull: &ConvexHull, points: &[Point2], tolerance: f64) -> Vec<bool> {
    points.iter().map(|p| hull.contains(p, tolerance)).collect()
}

/// Signed polygon area, positive for counter-clockwise order.
fn signed_area(ring: &[Point2]) -> f64 {
    let Some(first) = ring.first() else {
        return 0.0;
    };
    ring.windows(2)
        .map(|w| cross_2d(first, &w[0], &w[1]))
        .sum::<f64>()
        * 0.5
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BorelogError;
    use crate::math::TOLERANCE;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ]
    }

    #[test]
    fn square_hull_drops_interior_points() {
        let hull = ConvexHull::from_points(&square()).unwrap();
        // (1, 0) lies on the bottom edge and stays a vertex.
        assert_eq!(hull.vertices().len(), 5);
        assert_eq!(hull.half_planes().len(), 5);
        assert!(!hull.vertices().contains(&Point2::new(1.0, 1.0)));
        assert!((hull.area() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn hull_is_counter_clockwise() {
        let hull = ConvexHull::from_points(&square()).unwrap();
        assert!(hull.area() > 0.0);
    }

    #[test]
    fn membership_inside_outside_and_boundary() {
        let hull = ConvexHull::from_points(&square()).unwrap();
        let tol = 1e-12;
        assert!(hull.contains(&Point2::new(1.0, 1.5), tol));
        assert!(hull.contains(&Point2::new(2.0, 1.0), tol));
        assert!(hull.contains(&Point2::new(0.0, 0.0), tol));
        assert!(!hull.contains(&Point2::new(2.1, 1.0), tol));
        assert!(!hull.contains(&Point2::new(-0.5, -0.5), tol));
    }

    #[test]
    fn batched_membership_keeps_order() {
        let hull = ConvexHull::from_points(&square()).unwrap();
        let probes = [
            Point2::new(1.0, 1.0),
            Point2::new(3.0, 1.0),
            Point2::new(0.5, 1.9),
        ];
        assert_eq!(points_in_hull(&hull, &probes, 1e-12), vec![true, false, true]);
    }

    #[test]
    fn clockwise_input_still_yields_inward_half_planes() {
        let pts = [
            Point2::new(0.0, 4.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        let hull = ConvexHull::from_points(&pts).unwrap();
        assert!(hull.area() > 0.0);
        assert!(hull.contains(&Point2::new(2.0, 2.0), 1e-12));
        assert!(!hull.contains(&Point2::new(2.0, 5.0), 1e-12));
    }

    #[test]
    fn non_finite_point_is_rejected() {
        let mut pts = square();
        pts.push(Point2::new(f64::NAN, 0.0));
        assert!(ConvexHull::from_points(&pts).is_err());
    }

    #[test]
    fn half_plane_signed_distance() {
        let h = HalfPlane::left_of(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0)).unwrap();
        assert!((h.signed_distance(&Point2::new(0.5, -3.0)) - 3.0).abs() < TOLERANCE);
        assert!((h.signed_distance(&Point2::new(0.5, 2.0)) + 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
        ];
        let err = ConvexHull::from_points(&pts).unwrap_err();
        assert!(matches!(
            err,
            BorelogError::Geometry(GeometryError::HullDegeneracy { vertices: 4 })
        ));
    }

    #[test]
    fn duplicated_points_are_degenerate() {
        let pts = [Point2::new(1.0, 1.0); 5];
        let err = ConvexHull::from_points(&pts).unwrap_err();
        assert!(matches!(
            err,
            BorelogError::Geometry(GeometryError::HullDegeneracy { vertices: 1 })
        ));
    }
}
