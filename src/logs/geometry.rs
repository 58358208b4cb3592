use std::collections::{BTreeMap, HashMap};

use crate::diagnostics::{Diagnostics, Warning};
use crate::input::StratigraphyInterval;
use crate::math::Point2;
use crate::soil::{Rgb, SoilColorRegistry};

/// A borehole placed on the exaggerated surface.
#[derive(Debug, Clone, PartialEq)]
pub struct BoreholeAnchor {
    pub id: String,
    /// Scaled collar position.
    pub position: Point2,
    /// Exaggerated surface elevation, `None` outside the surveyed hull.
    pub surface_elevation: Option<f64>,
}

/// One vertical log segment, from `z_top` down to `z_bottom`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSegment {
    pub borehole_id: String,
    pub position: Point2,
    pub z_top: f64,
    pub z_bottom: f64,
    pub soil_type: Option<String>,
    pub color: Rgb,
}

/// Converts stratigraphy depths into elevation segments under each borehole.
///
/// Boreholes are processed in id order. Intervals keep their table order
/// within a borehole.
#[derive(Debug)]
pub struct BuildLogs<'a> {
    anchors: &'a [BoreholeAnchor],
    registry: &'a SoilColorRegistry,
    v_exaggeration: f64,
}

impl<'a> BuildLogs<'a> {
    #[must_use]
    pub fn new(
        anchors: &'a [BoreholeAnchor],
        registry: &'a SoilColorRegistry,
        v_exaggeration: f64,
    ) -> Self {
        Self {
            anchors,
            registry,
            v_exaggeration,
        }
    }

    /// Emits one segment per interval of every located borehole.
    ///
    /// A borehole id with no anchor yields a single
    /// [`Warning::UnmatchedBorehole`] and no segments. An anchor without a
    /// surface elevation yields no segments; its warning is raised where the
    /// anchor is built.
    pub fn execute(
        &self,
        intervals: &[StratigraphyInterval],
        diagnostics: &mut Diagnostics,
    ) -> Vec<LogSegment> {
        let anchors: HashMap<&str, &BoreholeAnchor> =
            self.anchors.iter().map(|a| (a.id.as_str(), a)).collect();

        let mut groups: BTreeMap<&str, Vec<&StratigraphyInterval>> = BTreeMap::new();
        for interval in intervals {
            groups
                .entry(interval.borehole_id.as_str())
                .or_default()
                .push(interval);
        }

        let mut segments = Vec::with_capacity(intervals.len());
        for (id, group) in groups {
            let Some(anchor) = anchors.get(id) else {
                diagnostics.push(Warning::UnmatchedBorehole(id.to_owned()));
                continue;
            };
            let Some(surface) = anchor.surface_elevation else {
                continue;
            };
            segments.extend(group.into_iter().map(|interval| LogSegment {
                borehole_id: anchor.id.clone(),
                position: anchor.position,
                z_top: surface - interval.from_depth * self.v_exaggeration,
                z_bottom: surface - interval.to_depth * self.v_exaggeration,
                soil_type: interval.soil_type.clone(),
                color: self.registry.color_or_black(interval.soil_type.as_deref()),
            }));
        }
        tracing::debug!(segments = segments.len(), "borehole logs built");
        segments
    }
}
