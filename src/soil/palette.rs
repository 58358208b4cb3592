use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ConfigError;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Self = Self([0, 0, 0]);
    pub const RED: Self = Self([255, 0, 0]);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb({r},{g},{b})")
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Built-in soil classification colors.
const BUILTIN: [(&str, Rgb); 17] = [
    ("SM-ML", Rgb::new(255, 255, 0)),
    ("SC", Rgb::new(210, 180, 140)),
    ("CI", Rgb::new(0, 128, 0)),
    ("SM/SM-ML", Rgb::new(255, 215, 0)),
    ("ROCK", Rgb::new(139, 69, 19)),
    ("SM", Rgb::new(255, 255, 224)),
    ("GP-GM", Rgb::new(128, 128, 128)),
    ("CH", Rgb::new(0, 100, 0)),
    ("ML-SM", Rgb::new(255, 192, 203)),
    ("CL", Rgb::new(135, 206, 250)),
    ("GM", Rgb::new(169, 169, 169)),
    ("GC", Rgb::new(112, 128, 144)),
    ("ML", Rgb::new(255, 228, 181)),
    ("SP", Rgb::new(255, 222, 173)),
    ("CHAR", Rgb::new(47, 79, 79)),
    ("SOIL", Rgb::new(255, 255, 0)),
    ("RM", Rgb::new(128, 128, 128)),
];

/// Soil label to color lookup. Labels match case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct SoilPalette {
    entries: Vec<(String, Rgb)>,
}

impl SoilPalette {
    /// The standard palette of 17 soil classifications.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(label, color)| ((*label).to_owned(), *color))
                .collect(),
        }
    }

    /// Adds `label`, replacing its color if already present.
    pub fn insert(&mut self, label: &str, color: Rgb) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((label.to_owned(), color)),
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
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

/// A palette override parsed from `LABEL=R,G,B`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoilColor {
    pub label: String,
    pub color: Rgb,
}

impl FromStr for SoilColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::SoilColor(s.to_owned());
        let (label, rgb) = s.rsplit_once('=').ok_or_else(invalid)?;
        let label = label.trim();
        let channels = rgb
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        match (label.is_empty(), channels.as_slice()) {
            (false, &[r, g, b]) => Ok(Self {
                label: label.to_owned(),
                color: Rgb::new(r, g, b),
            }),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_all_classifications() {
        let palette = SoilPalette::builtin();
        assert_eq!(palette.len(), 17);
        assert_eq!(palette.get("CL"), Some(Rgb::new(135, 206, 250)));
        assert_eq!(palette.get("ROCK"), Some(Rgb::new(139, 69, 19)));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let palette = SoilPalette::builtin();
        assert_eq!(palette.get("cl"), None);
    }

    #[test]
    fn insert_replaces_existing() {
        let mut palette = SoilPalette::builtin();
        palette.insert("CL", Rgb::new(1, 2, 3));
        palette.insert("PEAT", Rgb::new(60, 40, 20));
        assert_eq!(palette.len(), 18);
        assert_eq!(palette.get("CL"), Some(Rgb::new(1, 2, 3)));
        assert_eq!(palette.get("PEAT"), Some(Rgb::new(60, 40, 20)));
    }

    #[test]
    fn rgb_formats_as_css() {
        assert_eq!(Rgb::new(135, 206, 250).to_string(), "rgb(135,206,250)");
        assert_eq!(serde_json::to_string(&Rgb::BLACK).unwrap(), "\"rgb(0,0,0)\"");
    }

    #[test]
    fn parses_override() {
        let parsed: SoilColor = "SM/SM-ML=10, 20,30".parse().unwrap();
        assert_eq!(parsed.label, "SM/SM-ML");
        assert_eq!(parsed.color, Rgb::new(10, 20, 30));
    }

    #[test]
    fn rejects_bad_override() {
        assert!("CL".parse::<SoilColor>().is_err());
        assert!("CL=1,2".parse::<SoilColor>().is_err());
        assert!("CL=1,2,300".parse::<SoilColor>().is_err());
        assert!("=1,2,3".parse::<SoilColor>().is_err());
    }
}
