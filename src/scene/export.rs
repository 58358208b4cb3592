use std::fs;
use std::path::Path;

use super::figure::Figure;
use crate::error::{ExportError, Result};

/// Where the standalone page is written when no path is given.
pub const DEFAULT_EXPORT_PATH: &str = "borelog_model.html";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Serializes the figure as JSON.
///
/// # Errors
///
/// Returns `ExportError::Json` if serialization fails.
pub fn figure_json(figure: &Figure) -> Result<String> {
    serde_json::to_string(figure).map_err(|e| ExportError::Json(e).into())
}

/// Renders a self-contained page that draws the figure with plotly.js.
///
/// # Errors
///
/// Returns `ExportError::Json` if serialization fails.
pub fn render_html(figure: &Figure) -> Result<String> {
    let data = script_safe(&serde_json::to_string(&figure.data).map_err(ExportError::Json)?);
    let layout = script_safe(&serde_json::to_string(&figure.layout).map_err(ExportError::Json)?);
    let title = escape_html(&figure.layout.title.text);
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
<style>html, body, #scene {{ width: 100%; height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="scene"></div>
<script>
Plotly.newPlot("scene", {data}, {layout}, {{"responsive": true}});
</script>
</body>
</html>
"#
    ))
}

/// Writes the page to `path`, replacing any previous export.
///
/// # Errors
///
/// Returns `ExportError::Io` if the file cannot be written.
pub fn write_html(figure: &Figure, path: &Path) -> Result<()> {
    write(path, &render_html(figure)?)
}

/// Writes the raw figure JSON to `path`.
///
/// # Errors
///
/// Returns `ExportError::Io` if the file cannot be written.
pub fn write_json(figure: &Figure, path: &Path) -> Result<()> {
    write(path, &figure_json(figure)?)
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| {
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Keeps JSON from closing the surrounding script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
