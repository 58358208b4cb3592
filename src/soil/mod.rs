mod palette;
mod registry;

pub use palette::{Rgb, SoilColor, SoilPalette};
pub use registry::{SoilColorEntry, SoilColorRegistry};
