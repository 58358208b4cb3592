use std::fmt;

/// A condition that does not halt the pipeline but is reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Soil label absent from the palette; drawn in black.
    UnrecognizedSoilType(String),
    /// Stratigraphy references a borehole with no location record.
    UnmatchedBorehole(String),
    /// Borehole lies outside the surveyed hull, so it has no surface elevation.
    BoreholeOutsideSurface(String),
    /// Surface rows dropped because a numeric field was empty.
    IncompleteSurfaceRows(usize),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedSoilType(label) => {
                write!(f, "soil type '{label}' not predefined, using black")
            }
            Self::UnmatchedBorehole(id) => {
                write!(f, "borehole {id} missing coordinates, skipped")
            }
            Self::BoreholeOutsideSurface(id) => {
                write!(f, "borehole {id} lies outside the surveyed surface, skipped")
            }
            Self::IncompleteSurfaceRows(count) => {
                write!(f, "{count} surface rows with empty values were ignored")
            }
        }
    }
}

/// Ordered collection of warnings emitted by one run.
///
/// Every pushed warning is also logged at WARN level.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn push(&mut self, warning: Warning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Returns the warnings in emission order.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consumes the collection, returning the warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
