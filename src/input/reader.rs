use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord, Trim};

use super::records::{BoreholeLocation, StratigraphyInterval, SurfacePoint};
use super::schema::{ColumnIndex, Dataset};
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{InputError, Result};

/// Locations of the three input files.
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub surface: PathBuf,
    pub boreholes: PathBuf,
    pub stratigraphy: PathBuf,
}

/// The validated contents of the three input tables.
#[derive(Debug, Clone, Default)]
pub struct SurveyTables {
    pub surface: Vec<SurfacePoint>,
    pub boreholes: Vec<BoreholeLocation>,
    pub intervals: Vec<StratigraphyInterval>,
}

impl SurveyTables {
    /// Opens and reads the three files named by `paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be opened, or for any condition
    /// listed on [`SurveyTables::from_readers`].
    pub fn open(paths: &InputPaths, diagnostics: &mut Diagnostics) -> Result<Self> {
        let surface = open_file(Dataset::Surface, &paths.surface)?;
        let boreholes = open_file(Dataset::Boreholes, &paths.boreholes)?;
        let stratigraphy = open_file(Dataset::Stratigraphy, &paths.stratigraphy)?;
        Self::from_readers(surface, boreholes, stratigraphy, diagnostics)
    }

    /// Reads the three tables from any byte sources.
    ///
    /// All header rows are checked, in the order surface, boreholes,
    /// stratigraphy, before any data row is parsed. The first table with
    /// missing columns stops the read.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Schema` for missing columns,
    /// `InputError::InvalidValue` for unparseable numbers,
    /// `InputError::DuplicateBorehole` for a repeated borehole id, and
    /// `InputError::Read` for malformed CSV.
    pub fn from_readers<S, B, T>(
        surface: S,
        boreholes: B,
        stratigraphy: T,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self>
    where
        S: io::Read,
        B: io::Read,
        T: io::Read,
    {
        let mut surface = csv_reader(surface);
        let mut boreholes = csv_reader(boreholes);
        let mut stratigraphy = csv_reader(stratigraphy);

        let surface_cols = resolve_columns(Dataset::Surface, &mut surface)?;
        let borehole_cols = resolve_columns(Dataset::Boreholes, &mut boreholes)?;
        let strat_cols = resolve_columns(Dataset::Stratigraphy, &mut stratigraphy)?;

        let surface = read_surface(&surface_cols, &mut surface, diagnostics)?;
        let boreholes = read_boreholes(&borehole_cols, &mut boreholes)?;
        let intervals = read_intervals(&strat_cols, &mut stratigraphy)?;

        tracing::debug!(
            surface = surface.len(),
            boreholes = boreholes.len(),
            intervals = intervals.len(),
            "input tables read"
        );

        Ok(Self {
            surface,
            boreholes,
            intervals,
        })
    }
}

fn open_file(dataset: Dataset, path: &Path) -> Result<File> {
    File::open(path).map_err(|source| {
        InputError::Open {
            dataset,
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn csv_reader<R: io::Read>(source: R) -> Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(source)
}

fn resolve_columns<R: io::Read>(dataset: Dataset, reader: &mut Reader<R>) -> Result<ColumnIndex> {
    let headers = reader
        .headers()
        .map_err(|source| InputError::Read { dataset, source })?;
    ColumnIndex::resolve(dataset, headers)
}

/// Iterates data records with their 1-based row numbers.
fn rows<'a, R: io::Read>(
    columns: &'a ColumnIndex,
    reader: &'a mut Reader<R>,
) -> impl Iterator<Item = Result<(usize, StringRecord)>> + 'a {
    reader.records().enumerate().map(move |(i, record)| {
        record
            .map(|r| (i + 1, r))
            .map_err(|source| {
                InputError::Read {
                    dataset: columns.dataset(),
                    source,
                }
                .into()
            })
    })
}

fn read_surface<R: io::Read>(
    columns: &ColumnIndex,
    reader: &mut Reader<R>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<SurfacePoint>> {
    let mut points = Vec::new();
    let mut incomplete = 0;
    for row in rows(columns, reader) {
        let (row, record) = row?;
        let easting = columns.number(&record, 0, row)?;
        let northing = columns.number(&record, 1, row)?;
        let elevation = columns.number(&record, 2, row)?;
        match (easting, northing, elevation) {
            (Some(easting), Some(northing), Some(elevation)) => points.push(SurfacePoint {
                easting,
                northing,
                elevation,
            }),
            _ => incomplete += 1,
        }
    }
    if incomplete > 0 {
        diagnostics.push(Warning::IncompleteSurfaceRows(incomplete));
    }
    Ok(points)
}

fn read_boreholes<R: io::Read>(
    columns: &ColumnIndex,
    reader: &mut Reader<R>,
) -> Result<Vec<BoreholeLocation>> {
    let mut boreholes = Vec::new();
    let mut seen = HashSet::new();
    for row in rows(columns, reader) {
        let (row, record) = row?;
        let id = columns.field(&record, 0).to_owned();
        let easting = columns.required_number(&record, 1, row)?;
        let northing = columns.required_number(&record, 2, row)?;
        if !seen.insert(id.clone()) {
            return Err(InputError::DuplicateBorehole(id).into());
        }
        boreholes.push(BoreholeLocation {
            id,
            easting,
            northing,
        });
    }
    Ok(boreholes)
}

fn read_intervals<R: io::Read>(
    columns: &ColumnIndex,
    reader: &mut Reader<R>,
) -> Result<Vec<StratigraphyInterval>> {
    let mut intervals = Vec::new();
    for row in rows(columns, reader) {
        let (row, record) = row?;
        let soil = columns.field(&record, 3);
        intervals.push(StratigraphyInterval {
            borehole_id: columns.field(&record, 0).to_owned(),
            from_depth: columns.required_number(&record, 1, row)?,
            to_depth: columns.required_number(&record, 2, row)?,
            soil_type: (!soil.is_empty()).then(|| soil.to_owned()),
        });
    }
    Ok(intervals)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::BorelogError;

    const SURFACE: &str = "Easting,Northing,Elevation\n0,0,10\n10,0,12\n0,10,11\n";
    const BOREHOLES: &str = "BH ID,Easting,Northing\nBH1,2,2\nBH2,5,1\n";
    const DETAILS: &str = "BH,FROM,TO,SOIL TYPE\nBH1,0,2,CL\nBH1,2,5,SM\nBH2,0,1,\n";

    fn read(surface: &str, boreholes: &str, details: &str) -> (Result<SurveyTables>, Diagnostics) {
        let mut diag = Diagnostics::new();
        let tables = SurveyTables::from_readers(
            surface.as_bytes(),
            boreholes.as_bytes(),
            details.as_bytes(),
            &mut diag,
        );
        (tables, diag)
    }

    #[test]
    fn reads_all_tables() {
        let (tables, diag) = read(SURFACE, BOREHOLES, DETAILS);
        let tables = tables.unwrap();
        assert_eq!(tables.surface.len(), 3);
        assert_eq!(tables.boreholes[1].id, "BH2");
        assert_eq!(tables.intervals.len(), 3);
        assert_eq!(tables.intervals[0], StratigraphyInterval::new("BH1", 0.0, 2.0, Some("CL")));
        assert_eq!(tables.intervals[2].soil_type, None);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn first_failing_dataset_is_reported_alone() {
        let (tables, _) = read(
            SURFACE,
            "BH ID,Easting\nBH1,2\n",
            "BH,FROM,SOIL TYPE\nBH1,0,CL\n",
        );
        match tables.unwrap_err() {
            BorelogError::Input(InputError::Schema { dataset, missing }) => {
                assert_eq!(dataset, Dataset::Boreholes);
                assert_eq!(missing, vec!["Northing"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn schema_is_checked_before_values() {
        let (tables, _) = read(
            "Easting,Northing,Elevation\nx,0,1\n",
            BOREHOLES,
            "BH,FROM,TO\n",
        );
        assert!(matches!(
            tables.unwrap_err(),
            BorelogError::Input(InputError::Schema {
                dataset: Dataset::Stratigraphy,
                ..
            })
        ));
    }

    #[test]
    fn incomplete_surface_rows_are_dropped_with_one_warning() {
        let surface = "Easting,Northing,Elevation\n0,0,10\n1,,3\n2,2,\n10,0,12\n0,10,11\n";
        let (tables, diag) = read(surface, BOREHOLES, DETAILS);
        assert_eq!(tables.unwrap().surface.len(), 3);
        assert_eq!(diag.warnings(), &[Warning::IncompleteSurfaceRows(2)]);
    }

    #[test]
    fn duplicate_borehole_id_is_fatal() {
        let (tables, _) = read(SURFACE, "BH ID,Easting,Northing\nA,0,0\nA,1,1\n", DETAILS);
        assert!(matches!(
            tables.unwrap_err(),
            BorelogError::Input(InputError::DuplicateBorehole(id)) if id == "A"
        ));
    }

    #[test]
    fn non_numeric_depth_is_fatal() {
        let (tables, _) = read(SURFACE, BOREHOLES, "BH,FROM,TO,SOIL TYPE\nBH1,zero,2,CL\n");
        assert!(matches!(
            tables.unwrap_err(),
            BorelogError::Input(InputError::InvalidValue {
                dataset: Dataset::Stratigraphy,
                row: 1,
                column: "FROM",
                ..
            })
        ));
    }

    #[test]
    fn extra_columns_and_padding_are_tolerated() {
        let surface = "Id, Easting , Northing,Elevation,Note\np, 0 ,0,10,a\nq,10,0,12,b\nr,0,10,11,c\n";
        let (tables, _) = read(surface, BOREHOLES, DETAILS);
        let tables = tables.unwrap();
        assert_relative_eq!(tables.surface[0].elevation, 10.0);
        assert_relative_eq!(tables.surface[1].easting, 10.0);
    }

    #[test]
    fn missing_file_is_reported_with_dataset() {
        let paths = InputPaths {
            surface: PathBuf::from("/nonexistent/surface.csv"),
            boreholes: PathBuf::from("/nonexistent/bh.csv"),
            stratigraphy: PathBuf::from("/nonexistent/details.csv"),
        };
        let err = SurveyTables::open(&paths, &mut Diagnostics::new()).unwrap_err();
        assert!(matches!(
            err,
            BorelogError::Input(InputError::Open {
                dataset: Dataset::Surface,
                ..
            })
        ));
    }
}
