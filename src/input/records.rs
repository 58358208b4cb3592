/// One surveyed ground point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub easting: f64,
    pub northing: f64,
    pub elevation: f64,
}

/// Planar position of a borehole collar.
#[derive(Debug, Clone, PartialEq)]
pub struct BoreholeLocation {
    /// Unique within the boreholes table.
    pub id: String,
    pub easting: f64,
    pub northing: f64,
}

/// A depth range in one borehole with a single soil classification.
///
/// `from_depth <= to_depth` is assumed, not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct StratigraphyInterval {
    pub borehole_id: String,
    pub from_depth: f64,
    pub to_depth: f64,
    /// `None` when the soil type cell is empty.
    pub soil_type: Option<String>,
}

impl StratigraphyInterval {
    #[must_use]
    pub fn new(borehole_id: &str, from_depth: f64, to_depth: f64, soil_type: Option<&str>) -> Self {
        Self {
            borehole_id: borehole_id.to_owned(),
            from_depth,
            to_depth,
            soil_type: soil_type.map(str::to_owned),
        }
    }
}
