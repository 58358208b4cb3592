mod exaggerate;
mod grid;
mod interpolate;
mod mask;
mod scale;

pub use exaggerate::VerticalExaggeration;
pub use grid::{linspace, Bounds, GridLayout, InterpolationGrid};
pub use interpolate::SurfaceInterpolator;
pub use mask::DomainMask;
pub use scale::{scale_planar, ScaleCoordinates, ScaledBorehole, ScaledSurveyPoint};
