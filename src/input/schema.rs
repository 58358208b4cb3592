use std::fmt;

use csv::StringRecord;

use crate::error::{InputError, Result};

/// The three tables a model is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Ground survey points.
    Surface,
    /// Borehole collar locations.
    Boreholes,
    /// Borehole stratigraphy intervals.
    Stratigraphy,
}

impl Dataset {
    /// Columns that must appear in the header row, in reporting order.
    #[must_use]
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Self::Surface => &["Easting", "Northing", "Elevation"],
            Self::Boreholes => &["BH ID", "Easting", "Northing"],
            Self::Stratigraphy => &["BH", "FROM", "TO", "SOIL TYPE"],
        }
    }

    /// Human-facing label used in messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Surface => "Surface CSV",
            Self::Boreholes => "Boreholes CSV",
            Self::Stratigraphy => "BH Details CSV",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Positions of a dataset's required columns within its header row.
///
/// Indices follow the order of [`Dataset::required_columns`].
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    dataset: Dataset,
    positions: Vec<usize>,
}

impl ColumnIndex {
    /// Resolves the required columns of `dataset` against `headers`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Schema` listing every required column that is
    /// absent from `headers`.
    pub fn resolve(dataset: Dataset, headers: &StringRecord) -> Result<Self> {
        let required = dataset.required_columns();
        let mut positions = Vec::with_capacity(required.len());
        let mut missing = Vec::new();
        for &column in required {
            match headers.iter().position(|h| h == column) {
                Some(pos) => positions.push(pos),
                None => missing.push(column),
            }
        }
        if !missing.is_empty() {
            return Err(InputError::Schema { dataset, missing }.into());
        }
        Ok(Self { dataset, positions })
    }

    #[must_use]
    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    /// Returns the trimmed field for required column `slot`.
    #[must_use]
    pub fn field<'r>(&self, record: &'r StringRecord, slot: usize) -> &'r str {
        record.get(self.positions[slot]).unwrap_or("").trim()
    }

    /// Parses required column `slot` as a number, `None` when the field is empty.
    ///
    /// `row` is the 1-based data row used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidValue` for a field that is not a finite
    /// number.
    pub fn number(&self, record: &StringRecord, slot: usize, row: usize) -> Result<Option<f64>> {
        let raw = self.field(record, slot);
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(self.invalid(slot, row, raw)),
        }
    }

    /// Like [`ColumnIndex::number`], but an empty field is also an error.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidValue` for an empty or non-numeric field.
    pub fn required_number(&self, record: &StringRecord, slot: usize, row: usize) -> Result<f64> {
        self.number(record, slot, row)?
            .ok_or_else(|| self.invalid(slot, row, ""))
    }

    fn invalid(&self, slot: usize, row: usize, raw: &str) -> crate::error::BorelogError {
        InputError::InvalidValue {
            dataset: self.dataset,
            row,
            column: self.dataset.required_columns()[slot],
            value: raw.to_owned(),
        }
        .into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BorelogError;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn resolves_columns_in_any_order() {
        let index = ColumnIndex::resolve(
            Dataset::Surface,
            &headers(&["Elevation", "Id", "Northing", "Easting"]),
        )
        .unwrap();
        let record = StringRecord::from(vec!["12.5", "p1", "200", "100"]);
        assert_eq!(index.number(&record, 0, 1).unwrap(), Some(100.0));
        assert_eq!(index.number(&record, 1, 1).unwrap(), Some(200.0));
        assert_eq!(index.number(&record, 2, 1).unwrap(), Some(12.5));
    }

    #[test]
    fn reports_exactly_the_missing_columns() {
        let err = ColumnIndex::resolve(Dataset::Stratigraphy, &headers(&["BH", "TO"])).unwrap_err();
        match err {
            BorelogError::Input(InputError::Schema { dataset, missing }) => {
                assert_eq!(dataset, Dataset::Stratigraphy);
                assert_eq!(missing, vec!["FROM", "SOIL TYPE"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn schema_message_names_dataset() {
        let err = ColumnIndex::resolve(Dataset::Boreholes, &headers(&["Easting", "Northing"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Boreholes CSV is missing columns: BH ID");
    }

    #[test]
    fn column_names_are_case_sensitive() {
        assert!(ColumnIndex::resolve(
            Dataset::Surface,
            &headers(&["easting", "Northing", "Elevation"])
        )
        .is_err());
    }

    #[test]
    fn empty_and_invalid_numbers() {
        let index =
            ColumnIndex::resolve(Dataset::Surface, &headers(&["Easting", "Northing", "Elevation"]))
                .unwrap();
        let record = StringRecord::from(vec!["", "abc", "inf"]);
        assert_eq!(index.number(&record, 0, 3).unwrap(), None);
        assert!(index.required_number(&record, 0, 3).is_err());
        let err = index.number(&record, 1, 3).unwrap_err();
        assert!(matches!(
            err,
            BorelogError::Input(InputError::InvalidValue {
                row: 3,
                column: "Northing",
                ..
            })
        ));
        assert!(index.number(&record, 2, 3).is_err());
    }
}
