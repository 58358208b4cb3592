use super::colorscale::turbo_colorscale;
use super::figure::{
    AspectRatio, Axis, ColorBar, Figure, Font, Layout, Legend, Line, Marker, Mode, Scatter3dTrace,
    SceneLayout, SurfaceTrace, Title, Trace,
};
use crate::pipeline::SurveyModel;
use crate::soil::Rgb;

/// Visual parameters of the rendered scene.
#[derive(Debug, Clone, Copy)]
pub struct SceneStyle {
    /// Height of borehole markers above the surface.
    pub marker_offset: f64,
    /// Height of borehole labels above the surface.
    pub label_offset: f64,
    pub marker_size: f64,
    pub label_size: f64,
    /// Line width of log segments and soil legend entries.
    pub log_width: f64,
    /// Number of stops in the elevation colorscale.
    pub colorscale_steps: usize,
    /// Fraction of the elevation span added above and below the z range.
    pub z_margin: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            marker_offset: 0.25,
            label_offset: 1.0,
            marker_size: 12.0,
            label_size: 20.0,
            log_width: 20.0,
            colorscale_steps: 20,
            z_margin: 0.1,
        }
    }
}

/// Composes a model into a figure.
///
/// Trace order: surface, borehole markers, one label per borehole, one
/// legend entry per soil type, then the log segments.
#[derive(Debug)]
pub struct AssembleScene<'a> {
    model: &'a SurveyModel,
    style: SceneStyle,
}

impl<'a> AssembleScene<'a> {
    #[must_use]
    pub fn new(model: &'a SurveyModel, style: SceneStyle) -> Self {
        Self { model, style }
    }

    #[must_use]
    pub fn execute(&self) -> Figure {
        let mut data = vec![self.surface_trace(), self.marker_trace()];
        data.extend(self.label_traces());
        data.extend(self.legend_traces());
        data.extend(self.log_traces());
        Figure {
            data,
            layout: self.layout(),
        }
    }

    fn surface_trace(&self) -> Trace {
        let grid = &self.model.grid;
        Trace::Surface(SurfaceTrace {
            x: grid.x_rows(),
            y: grid.y_rows(),
            z: grid.masked_z_rows(),
            colorscale: turbo_colorscale(self.style.colorscale_steps),
            showscale: true,
            colorbar: ColorBar {
                title: Title::new("Elevation (m)"),
                len: 0.5,
                x: 1.1,
            },
            name: "Ground Surface".to_owned(),
        })
    }

    /// Boreholes that sit on the surface, as `(id, x, y, z)`.
    fn located(&self) -> impl Iterator<Item = (&str, f64, f64, f64)> + '_ {
        self.model.boreholes.iter().filter_map(|b| {
            b.surface_elevation
                .map(|z| (b.id.as_str(), b.position.x, b.position.y, z))
        })
    }

    fn marker_trace(&self) -> Trace {
        let (mut x, mut y, mut z) = (Vec::new(), Vec::new(), Vec::new());
        for (_, bx, by, bz) in self.located() {
            x.push(Some(bx));
            y.push(Some(by));
            z.push(Some(bz + self.style.marker_offset));
        }
        let mut trace = Scatter3dTrace::new(Mode::Markers, x, y, z);
        trace.marker = Some(Marker {
            size: self.style.marker_size,
            color: Rgb::RED,
        });
        trace.name = Some("Boreholes".to_owned());
        trace.showlegend = true;
        Trace::Scatter3d(trace)
    }

    fn label_traces(&self) -> Vec<Trace> {
        self.located()
            .map(|(id, x, y, z)| {
                let mut trace = Scatter3dTrace::new(
                    Mode::Text,
                    vec![Some(x)],
                    vec![Some(y)],
                    vec![Some(z + self.style.label_offset)],
                );
                trace.text = Some(vec![id.to_owned()]);
                trace.textfont = Some(Font {
                    size: self.style.label_size,
                    color: Rgb::BLACK,
                });
                Trace::Scatter3d(trace)
            })
            .collect()
    }

    /// Invisible entries that only put each soil color in the legend.
    fn legend_traces(&self) -> Vec<Trace> {
        self.model
            .registry
            .iter()
            .map(|entry| {
                let mut trace = Scatter3dTrace::new(Mode::Lines, vec![None], vec![None], vec![None]);
                trace.line = Some(Line {
                    color: entry.color,
                    width: self.style.log_width,
                });
                trace.name = Some(entry.soil_type.clone());
                trace.showlegend = true;
                Trace::Scatter3d(trace)
            })
            .collect()
    }

    fn log_traces(&self) -> Vec<Trace> {
        self.model
            .segments
            .iter()
            .map(|s| {
                let (x, y) = (s.position.x, s.position.y);
                let mut trace = Scatter3dTrace::new(
                    Mode::Lines,
                    vec![Some(x), Some(x)],
                    vec![Some(y), Some(y)],
                    vec![Some(s.z_top), Some(s.z_bottom)],
                );
                trace.line = Some(Line {
                    color: s.color,
                    width: self.style.log_width,
                });
                Trace::Scatter3d(trace)
            })
            .collect()
    }

    /// Vertical range covering the surface, the collars and the deepest log.
    #[must_use]
    pub fn z_range(&self) -> Option<[f64; 2]> {
        let collars = self.located().map(|(_, _, _, z)| z);
        let bottoms = self.model.segments.iter().map(|s| s.z_bottom.min(s.z_top));
        let (mut lo, mut hi) = self.model.grid.z_extent()?;
        for z in collars.chain(bottoms).filter(|z| z.is_finite()) {
            lo = lo.min(z);
            hi = hi.max(z);
        }
        let span = hi - lo;
        let margin = if span > 0.0 {
            span * self.style.z_margin
        } else {
            1.0
        };
        Some([lo - margin, hi + margin])
    }

    fn layout(&self) -> Layout {
        let config = &self.model.config;
        let (h, v) = (config.h_exaggeration, config.v_exaggeration);
        Layout {
            title: Title::new(format!(
                "3D Ground Model (Horizontal \u{d7}{h:?}, Vertical \u{d7}{v:?})"
            )),
            scene: SceneLayout {
                xaxis: Axis {
                    title: Title::new("Easting"),
                    range: None,
                },
                yaxis: Axis {
                    title: Title::new("Northing"),
                    range: None,
                },
                zaxis: Axis {
                    title: Title::new("Elevation (m)"),
                    range: self.z_range(),
                },
                aspectmode: "manual",
                aspectratio: AspectRatio { x: h, y: h, z: 1.0 },
            },
            legend: Legend {
                x: 0.0,
                y: 0.5,
                title: Title::new("Soil Types & Boreholes"),
            },
        }
    }
}
