use std::path::PathBuf;

use crate::config::ModelConfig;
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{InterpolationError, Result};
use crate::input::{InputPaths, SurveyTables};
use crate::logs::{BoreholeAnchor, BuildLogs, LogSegment};
use crate::math::Point2;
use crate::scene::{self, AssembleScene, Figure, SceneStyle};
use crate::soil::{SoilColorRegistry, SoilPalette};
use crate::surface::{
    Bounds, DomainMask, GridLayout, InterpolationGrid, ScaleCoordinates, SurfaceInterpolator,
    VerticalExaggeration,
};

/// Everything derived from one set of input tables.
#[derive(Debug, Clone)]
pub struct SurveyModel {
    pub config: ModelConfig,
    pub registry: SoilColorRegistry,
    pub grid: InterpolationGrid,
    pub boreholes: Vec<BoreholeAnchor>,
    pub segments: Vec<LogSegment>,
    /// Grid mean used as the vertical exaggeration reference.
    pub reference_elevation: f64,
}

/// Runs the compute stages on validated tables.
#[derive(Debug)]
pub struct BuildModel<'a> {
    config: ModelConfig,
    palette: &'a SoilPalette,
}

impl<'a> BuildModel<'a> {
    #[must_use]
    pub fn new(config: ModelConfig, palette: &'a SoilPalette) -> Self {
        Self { config, palette }
    }

    /// Builds the model. Warnings go to `diagnostics`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unusable parameters, `InterpolationError`
    /// when the survey cannot be triangulated, and `GeometryError` when its
    /// hull is degenerate.
    pub fn execute(
        &self,
        tables: &SurveyTables,
        diagnostics: &mut Diagnostics,
    ) -> Result<SurveyModel> {
        let config = self.config;
        config.validate()?;

        let registry =
            SoilColorRegistry::from_intervals(&tables.intervals, self.palette, diagnostics);

        let scale = ScaleCoordinates::new(config.h_exaggeration);
        let survey = scale.survey(&tables.surface);
        let boreholes = scale.boreholes(&tables.boreholes);
        let positions: Vec<Point2> = survey.iter().map(|p| p.position).collect();

        let interpolator = SurfaceInterpolator::new(&survey)?;
        let bounds = Bounds::of_points(&positions).ok_or(InterpolationError::NoElevations)?;
        let layout = GridLayout::over(&bounds.buffered(config.buffer), config.grid_resolution);
        let raw_z = interpolator.grid(&layout);

        let exaggeration = VerticalExaggeration::about_mean_of(&raw_z, config.v_exaggeration)
            .ok_or(InterpolationError::NoElevations)?;
        let z = exaggeration.apply_all(&raw_z);

        let collar_positions: Vec<Point2> = boreholes.iter().map(|b| b.position).collect();
        let anchors: Vec<BoreholeAnchor> = boreholes
            .into_iter()
            .zip(interpolator.sample_all(&collar_positions))
            .map(|(borehole, elevation)| {
                if elevation.is_none() {
                    diagnostics.push(Warning::BoreholeOutsideSurface(borehole.id.clone()));
                }
                BoreholeAnchor {
                    id: borehole.id,
                    position: borehole.position,
                    surface_elevation: elevation.map(|z| exaggeration.apply(z)),
                }
            })
            .collect();

        let hull = interpolator.hull()?;
        let mask = DomainMask::new(&hull, config.hull_tolerance).execute(&layout);
        let grid = InterpolationGrid::new(layout, z, mask)?;

        let segments = BuildLogs::new(&anchors, &registry, config.v_exaggeration)
            .execute(&tables.intervals, diagnostics);

        tracing::info!(
            survey_points = survey.len(),
            boreholes = anchors.len(),
            segments = segments.len(),
            valid_nodes = grid.valid_count(),
            "model built"
        );

        Ok(SurveyModel {
            config,
            registry,
            grid,
            boreholes: anchors,
            segments,
            reference_elevation: exaggeration.mean(),
        })
    }
}

/// Files written after a successful run.
#[derive(Debug, Clone)]
pub struct ExportTargets {
    /// Standalone interactive page, overwritten each run.
    pub html: PathBuf,
    /// Optional raw figure JSON.
    pub figure_json: Option<PathBuf>,
}

impl Default for ExportTargets {
    fn default() -> Self {
        Self {
            html: PathBuf::from(scene::DEFAULT_EXPORT_PATH),
            figure_json: None,
        }
    }
}

/// Outcome of a full run.
#[derive(Debug)]
pub struct RunReport {
    pub model: SurveyModel,
    pub figure: Figure,
    pub warnings: Vec<Warning>,
}

/// Reads the inputs, builds the model, assembles the figure and writes the
/// exports. Any error halts the run before later stages.
///
/// # Errors
///
/// Returns the first fatal error of any stage.
pub fn run(
    paths: &InputPaths,
    config: ModelConfig,
    palette: &SoilPalette,
    targets: &ExportTargets,
) -> Result<RunReport> {
    config.validate()?;
    let mut diagnostics = Diagnostics::new();
    let tables = SurveyTables::open(paths, &mut diagnostics)?;
    let model = BuildModel::new(config, palette).execute(&tables, &mut diagnostics)?;
    let figure = AssembleScene::new(&model, SceneStyle::default()).execute();

    scene::write_html(&figure, &targets.html)?;
    tracing::info!(path = %targets.html.display(), "scene exported");
    if let Some(path) = &targets.figure_json {
        scene::write_json(&figure, path)?;
        tracing::info!(path = %path.display(), "figure JSON exported");
    }

    Ok(RunReport {
        model,
        figure,
        warnings: diagnostics.into_warnings(),
    })
}
