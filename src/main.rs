//! borelog CLI - 3D ground surface with borehole logs.
//!
//! Reads a surface survey, borehole collars and borehole stratigraphy from
//! CSV files and writes an interactive plotly page.
//!
//! ```text
//! borelog surface.csv boreholes.csv details.csv
//! borelog surface.csv boreholes.csv details.csv --v-exaggeration 3 -o site.html
//! RUST_LOG=borelog=debug borelog ...
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use borelog::config::ModelConfig;
use borelog::input::InputPaths;
use borelog::pipeline::{self, ExportTargets};
use borelog::scene::DEFAULT_EXPORT_PATH;
use borelog::soil::{SoilColor, SoilPalette};

/// Interactive 3D ground surface with borehole logs.
///
/// Required columns:
/// surface `Easting`, `Northing`, `Elevation`;
/// boreholes `BH ID`, `Easting`, `Northing`;
/// details `BH`, `FROM`, `TO`, `SOIL TYPE`.
#[derive(Parser)]
#[command(name = "borelog")]
#[command(author, version, about)]
struct Cli {
    /// Surface CSV (ground points).
    surface: PathBuf,

    /// Boreholes CSV (locations).
    boreholes: PathBuf,

    /// Borehole details CSV (stratigraphy).
    details: PathBuf,

    /// Standalone HTML page to write. Overwritten on every run.
    #[arg(short, long, default_value = DEFAULT_EXPORT_PATH)]
    output: PathBuf,

    /// Also write the raw plotly figure JSON here.
    #[arg(long)]
    figure_json: Option<PathBuf>,

    /// Horizontal exaggeration applied to eastings and northings.
    #[arg(long, default_value = "2.0")]
    h_exaggeration: f64,

    /// Vertical exaggeration applied to elevation relief and depths.
    #[arg(long, default_value = "1.0")]
    v_exaggeration: f64,

    /// Grid nodes per axis.
    #[arg(long, default_value = "100")]
    grid_resolution: usize,

    /// Fraction of the survey extent added around the grid.
    #[arg(long, default_value = "0.05")]
    buffer: f64,

    /// Tolerance for the convex hull membership test.
    #[arg(long, default_value = "1e-12")]
    hull_tolerance: f64,

    /// Add or replace a soil color, e.g. `PEAT=101,67,33`. Repeatable.
    #[arg(long = "soil-color", value_name = "LABEL=R,G,B")]
    soil_colors: Vec<SoilColor>,
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for borelog.
    // Override with RUST_LOG env var (e.g. RUST_LOG=borelog=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("borelog=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let config = ModelConfig {
        h_exaggeration: cli.h_exaggeration,
        v_exaggeration: cli.v_exaggeration,
        grid_resolution: cli.grid_resolution,
        buffer: cli.buffer,
        hull_tolerance: cli.hull_tolerance,
    };

    let mut palette = SoilPalette::builtin();
    for SoilColor { label, color } in &cli.soil_colors {
        palette.insert(label, *color);
    }

    let paths = InputPaths {
        surface: cli.surface,
        boreholes: cli.boreholes,
        stratigraphy: cli.details,
    };
    let targets = ExportTargets {
        html: cli.output,
        figure_json: cli.figure_json,
    };

    match pipeline::run(&paths, config, &palette, &targets) {
        Ok(report) => {
            tracing::info!(
                warnings = report.warnings.len(),
                "model generated, open {} in a browser",
                targets.html.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
