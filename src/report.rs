/// Report rendering.
///
/// `AnalysisReport` runs every analysis over one dataset and renders the
/// results either as human-readable text (the default CLI output) or as a
/// single JSON document. Rendering never fails; all validation happened
/// when the `Dataset` and `AnalysisConfig` were built.

use serde_json::{Value, json};
use std::fmt::Write;

use crate::analysis::groupings::{AreaTally, YearIndex, count_affected_areas, group_by_year};
use crate::analysis::severity::{SeverityRating, SeverityScale, rate_by_damage, rate_by_mortality};
use crate::analysis::superlatives::{
    CostliestHurricane, DeadliestHurricane, MostAffectedArea, most_affected_area,
    most_costly_hurricane, most_deadly_hurricane,
};
use crate::config::AnalysisConfig;
use crate::model::{DAMAGES_NOT_RECORDED, DamageValue, Dataset, HurricaneRecord};

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Amounts at or above this are printed in scientific notation.
const MAX_GROUPED_USD: f64 = 1e15;

/// Formats a dollar amount with thousands separators: "$1,420,000,000".
/// Cents are shown only when non-zero. Amounts of $1e15 or more fall back to
/// scientific notation ("$1e40").
pub fn format_usd(usd: f64) -> String {
    if usd >= MAX_GROUPED_USD {
        return format!("${:e}", usd);
    }

    let cents = (usd * 100.0).round() as u128;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match cents % 100 {
        0 => format!("${}", grouped),
        frac => format!("${}.{:02}", grouped, frac),
    }
}

pub fn format_damage(damage: &DamageValue) -> String {
    match damage {
        DamageValue::Recorded(usd) => format_usd(*usd),
        DamageValue::Unrecorded => DAMAGES_NOT_RECORDED.to_string(),
    }
}

fn join_names(records: &[&HurricaneRecord]) -> String {
    if records.is_empty() {
        return "(none)".to_string();
    }
    records
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

/// One-line summary of a record.
pub fn render_record_line(record: &HurricaneRecord) -> String {
    format!(
        "{} ({} {}): {} kt, {} deaths, damage {}; areas: {}",
        record.name,
        record.month.name(),
        record.year,
        record.max_sustained_wind_kt,
        record.deaths,
        format_damage(&record.damage),
        record.areas_affected.join(", ")
    )
}

/// Multi-line detail block for a single hurricane lookup.
pub fn render_record(record: &HurricaneRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", record.name);
    let _ = writeln!(out, "  Date:               {} {}", record.month.name(), record.year);
    let _ = writeln!(out, "  Max sustained wind: {} kt", record.max_sustained_wind_kt);
    let _ = writeln!(out, "  Deaths:             {}", record.deaths);
    let _ = writeln!(out, "  Damage:             {}", format_damage(&record.damage));
    let _ = writeln!(out, "  Areas affected:     {}", record.areas_affected.join(", "));
    out
}

/// Hurricanes for a single year lookup.
pub fn render_year(year: i32, records: Option<&[&HurricaneRecord]>) -> String {
    match records {
        Some(records) if !records.is_empty() => {
            let mut out = format!("Hurricanes in {}:\n", year);
            for record in records {
                let _ = writeln!(out, "  {}", render_record_line(record));
            }
            out
        }
        _ => format!("No hurricanes recorded in {}.\n", year),
    }
}

// ---------------------------------------------------------------------------
// Full analysis
// ---------------------------------------------------------------------------

/// Every derived summary of one dataset.
pub struct AnalysisReport<'a> {
    dataset: &'a Dataset,
    config: AnalysisConfig,
    by_year: YearIndex<'a>,
    area_tally: AreaTally,
    mortality: SeverityRating<'a>,
    damage: SeverityRating<'a>,
}

impl<'a> AnalysisReport<'a> {
    pub fn build(dataset: &'a Dataset, config: &AnalysisConfig) -> Self {
        AnalysisReport {
            dataset,
            config: *config,
            by_year: group_by_year(dataset),
            area_tally: count_affected_areas(dataset),
            mortality: rate_by_mortality(dataset, &config.mortality),
            damage: rate_by_damage(dataset, &config.damage),
        }
    }

    pub fn most_affected_area(&self) -> Option<MostAffectedArea<'_>> {
        most_affected_area(&self.area_tally)
    }

    pub fn deadliest(&self) -> Option<DeadliestHurricane<'a>> {
        most_deadly_hurricane(self.dataset)
    }

    pub fn costliest(&self) -> Option<CostliestHurricane<'a>> {
        most_costly_hurricane(self.dataset)
    }

    /// All nine reports as text, in pipeline order.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        section(&mut out, "Damages");
        for (i, record) in self.dataset.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}: {}", i + 1, record.name, format_damage(&record.damage));
        }

        section(&mut out, "Hurricanes");
        for record in self.dataset.iter() {
            let _ = writeln!(out, "  {}", render_record_line(record));
        }

        section(&mut out, "Hurricanes by year");
        for (year, records) in self.by_year.iter() {
            let _ = writeln!(out, "  {}: {}", year, join_names(records));
        }

        section(&mut out, "Areas affected");
        for (area, count) in self.area_tally.iter() {
            let _ = writeln!(out, "  {}: {}", area, count);
        }

        section(&mut out, "Most affected area");
        match self.most_affected_area() {
            Some(m) => {
                let _ = writeln!(
                    out,
                    "The area most affected by hurricanes is {} with {} occurrences.",
                    m.area, m.count
                );
            }
            None => out.push_str("No affected areas recorded.\n"),
        }

        section(&mut out, "Deadliest hurricane");
        match self.deadliest() {
            Some(d) => {
                let _ = writeln!(out, "The most deadly hurricane is {} with {} deaths.", d.name, d.deaths);
            }
            None => out.push_str("No deadly hurricane found.\n"),
        }

        section(&mut out, "Mortality rating");
        render_rating(&mut out, &self.mortality, &self.config.mortality, |b| {
            format!("{} deaths", b)
        });

        section(&mut out, "Costliest hurricane");
        match self.costliest() {
            Some(c) => {
                let _ = writeln!(
                    out,
                    "The most costly hurricane is {} with damages amounting to {}.",
                    c.name,
                    format_usd(c.damage_usd)
                );
            }
            None => out.push_str("No costliest hurricane found.\n"),
        }

        section(&mut out, "Damage rating");
        render_rating(&mut out, &self.damage, &self.config.damage, format_usd);
        let _ = writeln!(out, "  (tier 0 also holds hurricanes with damages not recorded)");

        out
    }

    /// The full analysis as one JSON document.
    pub fn to_json(&self) -> Value {
        let by_year: Vec<Value> = self
            .by_year
            .iter()
            .map(|(year, records)| {
                json!({
                    "year": year,
                    "hurricanes": records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
                })
            })
            .collect();

        let area_counts: Vec<Value> = self
            .area_tally
            .iter()
            .map(|(area, count)| json!({ "area": area, "count": count }))
            .collect();

        json!({
            "damages": self.dataset.iter().map(|r| r.damage).collect::<Vec<_>>(),
            "hurricanes": self.dataset,
            "by_year": by_year,
            "area_counts": area_counts,
            "most_affected_area": self.most_affected_area(),
            "deadliest": self.deadliest(),
            "mortality_rating": rating_json(&self.mortality, &self.config.mortality),
            "costliest": self.costliest(),
            "damage_rating": rating_json(&self.damage, &self.config.damage),
        })
    }
}

fn render_rating(
    out: &mut String,
    rating: &SeverityRating<'_>,
    scale: &SeverityScale,
    describe_bound: impl Fn(f64) -> String,
) {
    let mut previous: Option<f64> = None;
    for (tier, records) in rating.iter() {
        let range = match scale.upper_bound(tier) {
            Some(bound) => format!("<= {}", describe_bound(bound)),
            None => format!("> {}", describe_bound(previous.unwrap_or(0.0))),
        };
        let _ = writeln!(out, "  Tier {} ({}): {}", tier, range, join_names(records));
        previous = scale.upper_bound(tier).or(previous);
    }
}

fn rating_json(rating: &SeverityRating<'_>, scale: &SeverityScale) -> Vec<Value> {
    rating
        .iter()
        .map(|(tier, records)| {
            json!({
                "tier": tier,
                "upper_bound": scale.upper_bound(tier),
                "hurricanes": records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
