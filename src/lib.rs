pub mod config;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod logs;
pub mod math;
pub mod pipeline;
pub mod scene;
pub mod soil;
pub mod surface;

pub use error::{BorelogError, Result};
