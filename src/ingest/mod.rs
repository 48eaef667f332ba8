/// Dataset ingestion: from raw columns or a catalog file to a `Dataset`.
///
/// Submodules:
/// - `damage`  - "1.42B" / "100M" / sentinel → `DamageValue`
/// - `records` - parallel columns → `Dataset`
/// - `catalog` - hurricanes.toml rows → `Dataset`

pub mod catalog;
pub mod damage;
pub mod records;

#[cfg(test)]
pub(crate) mod fixtures;

use log::info;
use std::fmt;
use std::path::PathBuf;

use crate::hurricanes;
use crate::model::{Dataset, DatasetError};

/// Where the records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// The literal table compiled into the binary.
    Embedded,
    /// A hurricanes.toml catalog on disk.
    Catalog(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Embedded => write!(f, "embedded table"),
            DatasetSource::Catalog(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads and validates the dataset from `source`.
pub fn load_dataset(source: &DatasetSource) -> Result<Dataset, DatasetError> {
    let dataset = match source {
        DatasetSource::Embedded => hurricanes::load_embedded()?,
        DatasetSource::Catalog(path) => catalog::load_catalog(path)?,
    };
    info!("Loaded {} hurricanes from {}", dataset.len(), source);
    Ok(dataset)
}
