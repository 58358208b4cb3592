use crate::error::{ConfigError, Result};

/// Largest accepted `grid_resolution`.
pub const MAX_GRID_RESOLUTION: usize = 10_000;

/// Parameters controlling scaling, interpolation and masking.
#[derive(Debug, Clone, Copy)]
pub struct ModelConfig {
    /// Factor applied to every easting and northing.
    pub h_exaggeration: f64,
    /// Factor applied to elevation deviations from the mean, and to depths.
    pub v_exaggeration: f64,
    /// Number of grid nodes along each axis.
    pub grid_resolution: usize,
    /// Fraction of the survey extent added on each side of the grid.
    pub buffer: f64,
    /// Slack allowed when testing hull membership.
    pub hull_tolerance: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            h_exaggeration: 2.0,
            v_exaggeration: 1.0,
            grid_resolution: 100,
            buffer: 0.05,
            hull_tolerance: 1e-12,
        }
    }
}

impl ModelConfig {
    /// Checks every parameter for a usable value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending parameter.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<()> {
        positive("h_exaggeration", self.h_exaggeration)?;
        positive("v_exaggeration", self.v_exaggeration)?;
        non_negative("buffer", self.buffer)?;
        non_negative("hull_tolerance", self.hull_tolerance)?;
        if self.grid_resolution < 2 {
            return Err(ConfigError::Invalid {
                parameter: "grid_resolution",
                value: self.grid_resolution as f64,
                reason: "at least 2 nodes per axis are required",
            }
            .into());
        }
        if self.grid_resolution > MAX_GRID_RESOLUTION {
            return Err(ConfigError::Invalid {
                parameter: "grid_resolution",
                value: self.grid_resolution as f64,
                reason: "at most 10000 nodes per axis are supported",
            }
            .into());
        }
        Ok(())
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            parameter,
            value,
            reason: "must be a finite positive number",
        }
        .into())
    }
}

fn non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            parameter,
            value,
            reason: "must be a finite non-negative number",
        }
        .into())
    }
}
