mod reader;
mod records;
mod schema;

pub use reader::{InputPaths, SurveyTables};
pub use records::{BoreholeLocation, StratigraphyInterval, SurfacePoint};
pub use schema::{ColumnIndex, Dataset};
