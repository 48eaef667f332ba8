/// Test fixtures: hand-built records and small datasets.
///
/// The embedded 34-row table exercises the real data; these helpers build
/// synthetic records for edge cases the real table never hits (ties,
/// duplicate names, all-unrecorded damage, repeated areas).

use chrono::Month;

use crate::model::{DamageValue, Dataset, HurricaneRecord};

/// A September record with a fixed 150 kt wind and the given fields.
pub(crate) fn record(
    name: &str,
    year: i32,
    areas: &[&str],
    damage: DamageValue,
    deaths: u32,
) -> HurricaneRecord {
    HurricaneRecord {
        name: name.to_string(),
        month: Month::September,
        year,
        max_sustained_wind_kt: 150,
        areas_affected: areas.iter().map(|a| a.to_string()).collect(),
        damage,
        deaths,
    }
}

/// Builds a dataset from records, in the given order.
pub(crate) fn dataset_of(records: Vec<HurricaneRecord>) -> Dataset {
    let mut dataset = Dataset::new();
    for r in records {
        dataset.insert(r);
    }
    dataset
}
