use std::path::PathBuf;

use thiserror::Error;

use crate::input::Dataset;

/// Top-level error type for the borelog pipeline.
#[derive(Debug, Error)]
pub enum BorelogError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised while reading and validating the input tables.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{dataset} is missing columns: {}", .missing.join(", "))]
    Schema {
        dataset: Dataset,
        missing: Vec<&'static str>,
    },

    #[error("{dataset} row {row}: column `{column}` has invalid value {value:?}")]
    InvalidValue {
        dataset: Dataset,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Boreholes CSV lists borehole `{0}` more than once")]
    DuplicateBorehole(String),

    #[error("cannot open {dataset} at {}: {source}", .path.display())]
    Open {
        dataset: Dataset,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {dataset}: {source}")]
    Read {
        dataset: Dataset,
        #[source]
        source: csv::Error,
    },
}

/// Errors raised when the survey points cannot support a linear surface.
#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("at least 3 distinct survey points are required for interpolation, found {count}")]
    TooFewPoints { count: usize },

    #[error("survey points are collinear, the surface cannot be triangulated")]
    Collinear,

    #[error("surface dataset contains no usable elevation values")]
    NoElevations,

    #[error("survey point ({x}, {y}) cannot be triangulated")]
    InvalidCoordinate { x: f64, y: f64 },

    #[error("grid has {nodes} nodes but {values} {what} were supplied")]
    GridShape {
        what: &'static str,
        nodes: usize,
        values: usize,
    },
}

/// Errors related to planar geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("survey hull encloses no area ({vertices} distinct positions, all collinear or too few)")]
    HullDegeneracy { vertices: usize },
}

/// Errors in run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {parameter} = {value}: {reason}")]
    Invalid {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid soil color {0:?}, expected LABEL=R,G,B")]
    SoilColor(String),
}

/// Errors raised while writing the scene artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize figure: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`BorelogError`].
pub type Result<T> = std::result::Result<T, BorelogError>;
