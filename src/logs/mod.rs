mod geometry;

pub use geometry::{BoreholeAnchor, BuildLogs, LogSegment};
