mod assemble;
mod colorscale;
mod export;
pub mod figure;

pub use assemble::{AssembleScene, SceneStyle};
pub use colorscale::{turbo, turbo_colorscale};
pub use export::{figure_json, render_html, write_html, write_json, DEFAULT_EXPORT_PATH};
pub use figure::Figure;
