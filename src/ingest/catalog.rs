/// Hurricane catalog loader - parses a hurricanes.toml file
///
/// Lets the same analysis run over an edited or extended table without
/// recompiling. Each `[[hurricane]]` table holds one row, with damage in the
/// same "100M" / "1.42B" / "Damages not recorded" notation as the embedded
/// table. Rows are transposed into columns and sent through
/// `build_dataset`, so they get exactly the same validation.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::ingest::records::{RawColumns, build_dataset};
use crate::model::{Dataset, DatasetError};

/// One `[[hurricane]]` row as written in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub month: String,
    pub year: i32,
    pub max_sustained_wind: u16,
    pub areas_affected: Vec<String>,
    pub damage: String,
    pub deaths: u32,
}

/// Root structure for TOML parsing
#[derive(Debug, Deserialize)]
struct Catalog {
    #[serde(default)]
    hurricane: Vec<CatalogEntry>,
}

/// Parses catalog text into its rows without building records.
pub fn parse_catalog(contents: &str) -> Result<Vec<CatalogEntry>, toml::de::Error> {
    let catalog: Catalog = toml::from_str(contents)?;
    Ok(catalog.hurricane)
}

/// Builds a `Dataset` from catalog rows, in file order.
pub fn build_from_entries(entries: &[CatalogEntry]) -> Result<Dataset, DatasetError> {
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    let months: Vec<&str> = entries.iter().map(|e| e.month.as_str()).collect();
    let years: Vec<i32> = entries.iter().map(|e| e.year).collect();
    let winds: Vec<u16> = entries.iter().map(|e| e.max_sustained_wind).collect();
    let area_lists: Vec<Vec<&str>> = entries
        .iter()
        .map(|e| e.areas_affected.iter().map(String::as_str).collect())
        .collect();
    let areas: Vec<&[&str]> = area_lists.iter().map(Vec::as_slice).collect();
    let damages: Vec<&str> = entries.iter().map(|e| e.damage.as_str()).collect();
    let deaths: Vec<u32> = entries.iter().map(|e| e.deaths).collect();

    build_dataset(&RawColumns {
        names: &names,
        months: &months,
        years: &years,
        max_sustained_winds: &winds,
        areas_affected: &areas,
        damages: &damages,
        deaths: &deaths,
    })
}

/// Loads and builds a dataset from a catalog file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_catalog(&contents).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    build_from_entries(&entries)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
