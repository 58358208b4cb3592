use crate::input::{BoreholeLocation, SurfacePoint};
use crate::math::Point2;

/// A survey point after horizontal scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSurveyPoint {
    pub position: Point2,
    pub elevation: f64,
}

/// A borehole collar after horizontal scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledBorehole {
    pub id: String,
    pub position: Point2,
}

/// Multiplies both planar coordinates by `factor`.
#[must_use]
pub fn scale_planar(easting: f64, northing: f64, factor: f64) -> Point2 {
    Point2::new(easting * factor, northing * factor)
}

/// Applies horizontal exaggeration to survey points and boreholes alike.
///
/// Both sets go through the same factor so boreholes keep their exact
/// position relative to the surface.
#[derive(Debug, Clone, Copy)]
pub struct ScaleCoordinates {
    factor: f64,
}

impl ScaleCoordinates {
    #[must_use]
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    #[must_use]
    pub fn survey(&self, points: &[SurfacePoint]) -> Vec<ScaledSurveyPoint> {
        points
            .iter()
            .map(|p| ScaledSurveyPoint {
                position: scale_planar(p.easting, p.northing, self.factor),
                elevation: p.elevation,
            })
            .collect()
    }

    #[must_use]
    pub fn boreholes(&self, boreholes: &[BoreholeLocation]) -> Vec<ScaledBorehole> {
        boreholes
            .iter()
            .map(|b| ScaledBorehole {
                id: b.id.clone(),
                position: scale_planar(b.easting, b.northing, self.factor),
            })
            .collect()
    }
}
