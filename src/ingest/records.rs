/// Record builder: assembles parallel columns into a `Dataset`.
///
/// The source table is laid out column-wise (all names, then all months, …).
/// `build_dataset` checks that every column has one entry per name, runs the
/// damage column through the normalizer, and zips the i-th entry of each
/// column into the i-th `HurricaneRecord`.

use chrono::Month;
use log::warn;

use crate::ingest::damage::convert_damages;
use crate::model::{Dataset, DatasetError, HurricaneRecord};

/// Borrowed view of the seven parallel input columns.
#[derive(Debug, Clone, Copy)]
pub struct RawColumns<'a> {
    pub names: &'a [&'a str],
    pub months: &'a [&'a str],
    pub years: &'a [i32],
    pub max_sustained_winds: &'a [u16],
    pub areas_affected: &'a [&'a [&'a str]],
    pub damages: &'a [&'a str],
    pub deaths: &'a [u32],
}

impl RawColumns<'_> {
    /// Number of hurricanes, as defined by the name column.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Fails with `InvalidInput` on the first column whose length differs
    /// from the name column.
    pub fn validate_lengths(&self) -> Result<(), DatasetError> {
        let expected = self.len();
        let columns = [
            ("months", self.months.len()),
            ("years", self.years.len()),
            ("max_sustained_winds", self.max_sustained_winds.len()),
            ("areas_affected", self.areas_affected.len()),
            ("damages", self.damages.len()),
            ("deaths", self.deaths.len()),
        ];

        for (column, found) in columns {
            if found != expected {
                return Err(DatasetError::InvalidInput { column, expected, found });
            }
        }
        Ok(())
    }
}

/// Parses a full English month name ("October"); chrono also accepts the
/// three-letter abbreviation and ignores case.
pub fn parse_month(name: &str, raw: &str) -> Result<Month, DatasetError> {
    raw.parse::<Month>().map_err(|_| DatasetError::InvalidMonth {
        name: name.to_string(),
        value: raw.to_string(),
    })
}

/// Builds a `Dataset` with one record per index of the input columns.
///
/// A name that appears twice overwrites the earlier record (keeping its
/// position); this is logged but not treated as an error.
pub fn build_dataset(columns: &RawColumns<'_>) -> Result<Dataset, DatasetError> {
    columns.validate_lengths()?;
    let damages = convert_damages(columns.damages)?;

    let mut dataset = Dataset::new();
    for (i, &name) in columns.names.iter().enumerate() {
        let record = HurricaneRecord {
            name: name.to_string(),
            month: parse_month(name, columns.months[i])?,
            year: columns.years[i],
            max_sustained_wind_kt: columns.max_sustained_winds[i],
            areas_affected: columns.areas_affected[i]
                .iter()
                .map(|area| area.to_string())
                .collect(),
            damage: damages[i],
            deaths: columns.deaths[i],
        };

        if dataset.insert(record).is_some() {
            warn!("Duplicate hurricane name '{}' at row {} overwrites the earlier record", name, i);
        }
    }

    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
