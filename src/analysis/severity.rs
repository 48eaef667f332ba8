/// Mortality and damage severity ratings.
///
/// Both ratings share one bucketing rule: a hurricane lands in the first
/// tier whose upper bound is greater than or equal to its metric, scanning
/// tiers 0 through 4 in order; anything above tier 4's bound lands in the
/// unbounded tier 5. Bounds are inclusive, so a damage of exactly 1e9 USD is
/// tier 2, not tier 3.
///
/// Hurricanes with unrecorded damage are placed in damage tier 0 by policy,
/// not by comparison.

use crate::model::{Dataset, DamageValue, HurricaneRecord};

/// Number of tiers, 0 through 5.
pub const TIER_COUNT: usize = 6;

/// Tier assigned to hurricanes whose damage was never recorded.
pub const UNRECORDED_DAMAGE_TIER: usize = 0;

/// Ascending, inclusive upper bounds for tiers 0–4. Tier 5 is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityScale {
    bounds: [f64; TIER_COUNT - 1],
}

impl SeverityScale {
    /// Deaths: 0, 100, 500, 1000, 10000, unbounded.
    pub const MORTALITY: SeverityScale = SeverityScale {
        bounds: [0.0, 100.0, 500.0, 1_000.0, 10_000.0],
    };

    /// Damage in USD: 0, 100M, 1B, 10B, 50B, unbounded.
    pub const DAMAGE: SeverityScale = SeverityScale {
        bounds: [0.0, 1e8, 1e9, 1e10, 5e10],
    };

    /// Builds a scale from raw bounds. Ordering is not checked here; see
    /// `config::validate_scale`.
    pub fn new(bounds: [f64; TIER_COUNT - 1]) -> Self {
        SeverityScale { bounds }
    }

    pub fn bounds(&self) -> &[f64; TIER_COUNT - 1] {
        &self.bounds
    }

    /// Inclusive upper bound of `tier`, or `None` for the unbounded top tier
    /// (and for out-of-range tiers).
    pub fn upper_bound(&self, tier: usize) -> Option<f64> {
        self.bounds.get(tier).copied()
    }

    /// First tier whose bound is >= `metric`.
    pub fn tier_for(&self, metric: f64) -> usize {
        self.bounds
            .iter()
            .position(|&bound| metric <= bound)
            .unwrap_or(TIER_COUNT - 1)
    }
}

/// Hurricanes partitioned into the six tiers, dataset order within each.
#[derive(Debug, Clone)]
pub struct SeverityRating<'a> {
    tiers: [Vec<&'a HurricaneRecord>; TIER_COUNT],
}

impl<'a> SeverityRating<'a> {
    /// Hurricanes in `tier`; empty for out-of-range tiers.
    pub fn tier(&self, tier: usize) -> &[&'a HurricaneRecord] {
        self.tiers.get(tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The tier holding the hurricane named `name`, if rated.
    pub fn tier_of(&self, name: &str) -> Option<usize> {
        self.tiers
            .iter()
            .position(|records| records.iter().any(|r| r.name == name))
    }

    /// Total number of rated hurricanes across all tiers.
    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[&'a HurricaneRecord])> {
        self.tiers.iter().enumerate().map(|(tier, records)| (tier, records.as_slice()))
    }
}

/// Places every record in the tier chosen by `tier_of`.
fn rate_by<'a>(
    dataset: &'a Dataset,
    tier_of: impl Fn(&HurricaneRecord) -> usize,
) -> SeverityRating<'a> {
    let mut tiers: [Vec<&'a HurricaneRecord>; TIER_COUNT] = std::array::from_fn(|_| Vec::new());

    for record in dataset.iter() {
        let tier = tier_of(record).min(TIER_COUNT - 1);
        tiers[tier].push(record);
    }

    SeverityRating { tiers }
}

/// Rates hurricanes by death toll.
pub fn rate_by_mortality<'a>(dataset: &'a Dataset, scale: &SeverityScale) -> SeverityRating<'a> {
    rate_by(dataset, |record| scale.tier_for(f64::from(record.deaths)))
}

/// Rates hurricanes by recorded damage; unrecorded damage goes to tier 0.
pub fn rate_by_damage<'a>(dataset: &'a Dataset, scale: &SeverityScale) -> SeverityRating<'a> {
    rate_by(dataset, |record| match record.damage {
        DamageValue::Recorded(usd) => scale.tier_for(usd),
        DamageValue::Unrecorded => UNRECORDED_DAMAGE_TIER,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hurricanes::load_embedded;
    use crate::ingest::fixtures::{dataset_of, record};

    fn names<'a>(records: &[&'a HurricaneRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    // --- Scale boundaries ----------------------------------------------------

    #[test]
    fn test_mortality_bounds_are_inclusive() {
        let scale = SeverityScale::MORTALITY;
        assert_eq!(scale.tier_for(0.0), 0);
        assert_eq!(scale.tier_for(1.0), 1);
        assert_eq!(scale.tier_for(100.0), 1);
        assert_eq!(scale.tier_for(101.0), 2);
        assert_eq!(scale.tier_for(500.0), 2);
        assert_eq!(scale.tier_for(1_000.0), 3);
        assert_eq!(scale.tier_for(10_000.0), 4);
        assert_eq!(scale.tier_for(10_001.0), 5);
    }

    #[test]
    fn test_damage_bounds_are_inclusive() {
        let scale = SeverityScale::DAMAGE;
        assert_eq!(scale.tier_for(1e8), 1);
        assert_eq!(scale.tier_for(1e9), 2);
        assert_eq!(scale.tier_for(1.42e9), 3);
        assert_eq!(scale.tier_for(1e10), 3);
        assert_eq!(scale.tier_for(5e10), 4);
        assert_eq!(scale.tier_for(5.0000001e10), 5);
    }

    #[test]
    fn test_upper_bound_of_top_tier_is_unbounded() {
        assert_eq!(SeverityScale::DAMAGE.upper_bound(4), Some(5e10));
        assert_eq!(SeverityScale::DAMAGE.upper_bound(5), None);
    }

    // --- Embedded table ------------------------------------------------------

    #[test]
    fn test_camille_tiers() {
        // 259 deaths <= 500 -> mortality tier 2; 1.42e9 USD > 1e9 -> damage tier 3.
        let dataset = load_embedded().unwrap();
        let mortality = rate_by_mortality(&dataset, &SeverityScale::MORTALITY);
        let damage = rate_by_damage(&dataset, &SeverityScale::DAMAGE);

        assert_eq!(mortality.tier_of("Camille"), Some(2));
        assert_eq!(damage.tier_of("Camille"), Some(3));
    }

    #[test]
    fn test_exact_boundary_damages_in_embedded_table() {
        let dataset = load_embedded().unwrap();
        let damage = rate_by_damage(&dataset, &SeverityScale::DAMAGE);

        // "100M" sits exactly on tier 1's bound, "10B" exactly on tier 3's.
        assert_eq!(damage.tier_of("San Felipe II Okeechobee"), Some(1));
        assert_eq!(damage.tier_of("Hugo"), Some(3));
    }

    #[test]
    fn test_mortality_rating_of_embedded_table() {
        let dataset = load_embedded().unwrap();
        let rating = rate_by_mortality(&dataset, &SeverityScale::MORTALITY);

        assert!(rating.tier(0).is_empty());
        assert_eq!(rating.tier(1).len(), 12);
        assert_eq!(rating.tier(2).len(), 12);
        assert_eq!(names(rating.tier(3)), vec!["New England", "Beulah", "Matthew"]);
        assert_eq!(
            names(rating.tier(4)),
            vec!["San Felipe II Okeechobee", "Cuba II", "Janet", "David", "Katrina", "Maria"]
        );
        assert_eq!(names(rating.tier(5)), vec!["Mitch"]);
    }

    #[test]
    fn test_damage_rating_of_embedded_table() {
        let dataset = load_embedded().unwrap();
        let rating = rate_by_damage(&dataset, &SeverityScale::DAMAGE);

        assert_eq!(
            names(rating.tier(0)),
            vec!["Cuba I", "Bahamas", "Labor Day", "Anita"]
        );
        assert_eq!(rating.tier(1).len(), 8);
        assert_eq!(
            names(rating.tier(2)),
            vec!["New England", "Carla", "Beulah", "Felix"]
        );
        assert_eq!(rating.tier(3).len(), 9);
        assert_eq!(rating.tier(4).len(), 6);
        assert_eq!(names(rating.tier(5)), vec!["Katrina", "Irma", "Maria"]);
    }

    #[test]
    fn test_ratings_partition_the_dataset() {
        let dataset = load_embedded().unwrap();
        for rating in [
            rate_by_mortality(&dataset, &SeverityScale::MORTALITY),
            rate_by_damage(&dataset, &SeverityScale::DAMAGE),
        ] {
            assert_eq!(rating.len(), dataset.len());
            for name in dataset.names() {
                let hits = rating
                    .iter()
                    .filter(|(_, records)| records.iter().any(|r| r.name == name))
                    .count();
                assert_eq!(hits, 1, "{} should be in exactly one tier", name);
            }
        }
    }

    // --- Policy cases --------------------------------------------------------

    #[test]
    fn test_unrecorded_damage_is_tier_zero_not_compared() {
        let dataset = dataset_of(vec![
            record("Unknown", 2000, &[], DamageValue::Unrecorded, 9000),
            record("Zero", 2001, &[], DamageValue::Recorded(0.0), 0),
        ]);
        let rating = rate_by_damage(&dataset, &SeverityScale::DAMAGE);

        assert_eq!(names(rating.tier(0)), vec!["Unknown", "Zero"]);
    }

    #[test]
    fn test_custom_scale_shifts_tiers() {
        let dataset = dataset_of(vec![record("Mid", 2000, &[], DamageValue::Unrecorded, 50)]);
        let scale = SeverityScale::new([0.0, 10.0, 20.0, 30.0, 40.0]);

        assert_eq!(rate_by_mortality(&dataset, &scale).tier_of("Mid"), Some(5));
    }

    #[test]
    fn test_out_of_range_tier_is_empty() {
        let dataset = load_embedded().unwrap();
        let rating = rate_by_mortality(&dataset, &SeverityScale::MORTALITY);
        assert!(rating.tier(TIER_COUNT).is_empty());
        assert_eq!(rating.tier_of("Nobody"), None);
    }
}
