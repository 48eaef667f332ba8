/// Superlative finders: most affected area, deadliest and costliest hurricane.
///
/// Each finder is a single forward scan keeping a running maximum that
/// starts at zero and is only replaced on a strictly greater value. The
/// first maximal entry in iteration order therefore wins ties, and entries
/// whose value is zero are never selected.

use serde::Serialize;

use crate::analysis::groupings::AreaTally;
use crate::model::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MostAffectedArea<'a> {
    pub area: &'a str,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadliestHurricane<'a> {
    pub name: &'a str,
    pub deaths: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostliestHurricane<'a> {
    pub name: &'a str,
    pub damage_usd: f64,
}

/// The area listed by the most hurricanes. Ties go to the area tallied
/// first. `None` only for an empty tally.
pub fn most_affected_area(tally: &AreaTally) -> Option<MostAffectedArea<'_>> {
    let mut best: Option<MostAffectedArea<'_>> = None;
    let mut max_count = 0;

    for (area, count) in tally.iter() {
        if count > max_count {
            max_count = count;
            best = Some(MostAffectedArea { area, count });
        }
    }

    best
}

/// The hurricane with the most deaths. Ties go to the earlier record.
/// `None` if no hurricane has a positive death toll.
pub fn most_deadly_hurricane(dataset: &Dataset) -> Option<DeadliestHurricane<'_>> {
    let mut best: Option<DeadliestHurricane<'_>> = None;
    let mut max_deaths = 0;

    for record in dataset.iter() {
        if record.deaths > max_deaths {
            max_deaths = record.deaths;
            best = Some(DeadliestHurricane {
                name: &record.name,
                deaths: record.deaths,
            });
        }
    }

    best
}

/// The hurricane with the greatest recorded damage. Records with
/// unrecorded damage are skipped entirely, so an all-unrecorded dataset
/// yields `None`.
pub fn most_costly_hurricane(dataset: &Dataset) -> Option<CostliestHurricane<'_>> {
    let mut best: Option<CostliestHurricane<'_>> = None;
    let mut max_damage = 0.0;

    for record in dataset.iter() {
        let Some(damage_usd) = record.damage.amount() else {
            continue;
        };
        if damage_usd > max_damage {
            max_damage = damage_usd;
            best = Some(CostliestHurricane {
                name: &record.name,
                damage_usd,
            });
        }
    }

    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
