use serde::Serialize;

use crate::soil::Rgb;

/// Plotly figure document.
///
/// Field names follow plotly.js so the JSON can be passed to `Plotly.newPlot`
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Surface(SurfaceTrace),
    Scatter3d(Scatter3dTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceTrace {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    /// `None` renders as a gap.
    pub z: Vec<Vec<Option<f64>>>,
    pub colorscale: Vec<(f64, Rgb)>,
    pub showscale: bool,
    pub colorbar: ColorBar,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
    pub len: f64,
    pub x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Markers,
    Lines,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter3dTrace {
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub z: Vec<Option<f64>>,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub showlegend: bool,
}

impl Scatter3dTrace {
    /// A trace with the given mode and coordinates and no styling.
    #[must_use]
    pub fn new(mode: Mode, x: Vec<Option<f64>>, y: Vec<Option<f64>>, z: Vec<Option<f64>>) -> Self {
        Self {
            x,
            y,
            z,
            mode,
            marker: None,
            line: None,
            text: None,
            textfont: None,
            name: None,
            showlegend: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub size: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub color: Rgb,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub scene: SceneLayout,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub aspectmode: &'static str,
    pub aspectratio: AspectRatio,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectRatio {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub title: Title,
}
