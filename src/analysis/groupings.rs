/// Year and area grouping utilities.
///
/// `group_by_year` reorganizes the dataset into per-year lists, making it
/// convenient to ask "which hurricanes hit in 2005?" without filtering the
/// full table every time. `count_affected_areas` tallies how many
/// hurricanes listed each area.
///
/// Both structures iterate in first-encounter order so that anything
/// scanning them (the most-affected-area finder in particular) breaks ties
/// the same way on every run.

use crate::model::{Dataset, HurricaneRecord, OrderedMap};

// ---------------------------------------------------------------------------
// Year index
// ---------------------------------------------------------------------------

/// Hurricanes grouped by year, in dataset order within each year.
#[derive(Debug, Clone)]
pub struct YearIndex<'a> {
    years: OrderedMap<i32, Vec<&'a HurricaneRecord>>,
}

impl<'a> YearIndex<'a> {
    /// Hurricanes recorded in `year`, or `None` if there were none.
    pub fn get(&self, year: i32) -> Option<&[&'a HurricaneRecord]> {
        self.years.get(&year).map(Vec::as_slice)
    }

    /// Number of distinct years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &[&'a HurricaneRecord])> {
        self.years.iter().map(|(year, records)| (*year, records.as_slice()))
    }
}

/// Groups every record under its year, creating the year's entry on first
/// encounter.
pub fn group_by_year(dataset: &Dataset) -> YearIndex<'_> {
    let mut years: OrderedMap<i32, Vec<&HurricaneRecord>> = OrderedMap::new();

    for record in dataset.iter() {
        years.get_or_insert_with(record.year, Vec::new).push(record);
    }

    YearIndex { years }
}

// ---------------------------------------------------------------------------
// Area tally
// ---------------------------------------------------------------------------

/// Number of hurricanes that listed each area, in first-tallied order.
#[derive(Debug, Clone, Default)]
pub struct AreaTally {
    counts: OrderedMap<String, usize>,
}

impl AreaTally {
    pub fn get(&self, area: &str) -> Option<usize> {
        self.counts.get(area).copied()
    }

    /// Number of distinct areas.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. total (hurricane, area) memberships.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(area, count)| (area.as_str(), *count))
    }
}

/// Counts every (hurricane, area) membership.
///
/// An area a single hurricane lists twice is counted twice; the tally
/// counts listings, not distinct hurricanes.
pub fn count_affected_areas(dataset: &Dataset) -> AreaTally {
    let mut counts: OrderedMap<String, usize> = OrderedMap::new();

    for record in dataset.iter() {
        for area in &record.areas_affected {
            *counts.get_or_insert_with(area.clone(), || 0) += 1;
        }
    }

    AreaTally { counts }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
