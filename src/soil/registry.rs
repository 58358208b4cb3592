use super::palette::{Rgb, SoilPalette};
use crate::diagnostics::{Diagnostics, Warning};
use crate::input::StratigraphyInterval;

/// Color assigned to one soil type observed in the stratigraphy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoilColorEntry {
    pub soil_type: String,
    pub color: Rgb,
}

/// Colors for exactly the soil types present in a dataset, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SoilColorRegistry {
    entries: Vec<SoilColorEntry>,
}

impl SoilColorRegistry {
    /// Builds the registry for `labels`, ignoring repeats.
    ///
    /// Labels missing from `palette` get [`Rgb::BLACK`] and one
    /// [`Warning::UnrecognizedSoilType`] each.
    pub fn build<'a, I>(labels: I, palette: &SoilPalette, diagnostics: &mut Diagnostics) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries: Vec<SoilColorEntry> = Vec::new();
        for label in labels {
            if entries.iter().any(|e| e.soil_type == label) {
                continue;
            }
            let color = palette.get(label).unwrap_or_else(|| {
                diagnostics.push(Warning::UnrecognizedSoilType(label.to_owned()));
                Rgb::BLACK
            });
            entries.push(SoilColorEntry {
                soil_type: label.to_owned(),
                color,
            });
        }
        tracing::debug!(soil_types = entries.len(), "soil color registry built");
        Self { entries }
    }

    /// Builds the registry from the non-null soil types of `intervals`.
    pub fn from_intervals(
        intervals: &[StratigraphyInterval],
        palette: &SoilPalette,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        Self::build(
            intervals.iter().filter_map(|i| i.soil_type.as_deref()),
            palette,
            diagnostics,
        )
    }

    #[must_use]
    pub fn get(&self, soil_type: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|e| e.soil_type == soil_type)
            .map(|e| e.color)
    }

    /// Color for an interval's soil type, black when null or unregistered.
    #[must_use]
    pub fn color_or_black(&self, soil_type: Option<&str>) -> Rgb {
        soil_type.and_then(|s| self.get(s)).unwrap_or(Rgb::BLACK)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SoilColorEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
