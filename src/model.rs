/// HurricaneRecord, DamageValue, Dataset, DatasetError
/// core data structures and error handling
///
/// Core data types for the hurricane statistics crate.
///
/// This module defines the shared domain model imported by all other modules.
/// Apart from the insertion-ordered map that backs every order-sensitive
/// mapping, it contains no analysis logic and no I/O.

use chrono::Month;
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Damage figures
// ---------------------------------------------------------------------------

/// Sentinel text used by the source table when no damage figure exists.
pub const DAMAGES_NOT_RECORDED: &str = "Damages not recorded";

/// Suffix multiplier for millions of US dollars ("100M").
pub const MILLION_SUFFIX: char = 'M';

/// Suffix multiplier for billions of US dollars ("1.42B").
pub const BILLION_SUFFIX: char = 'B';

/// Monetary damage caused by a hurricane, in US dollars.
///
/// `Unrecorded` is distinct from a recorded amount of zero: it means the
/// source table had no figure at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageValue {
    Recorded(f64),
    Unrecorded,
}

impl DamageValue {
    /// The recorded amount in USD, or `None` for `Unrecorded`.
    pub fn amount(&self) -> Option<f64> {
        match self {
            DamageValue::Recorded(usd) => Some(*usd),
            DamageValue::Unrecorded => None,
        }
    }

    pub fn is_recorded(&self) -> bool {
        matches!(self, DamageValue::Recorded(_))
    }
}

/// Recorded amounts serialize as plain numbers; `Unrecorded` serializes as
/// the sentinel text so JSON consumers see the same marker as the source.
impl Serialize for DamageValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DamageValue::Recorded(usd) => serializer.serialize_f64(*usd),
            DamageValue::Unrecorded => serializer.serialize_str(DAMAGES_NOT_RECORDED),
        }
    }
}

// ---------------------------------------------------------------------------
// Record type
// ---------------------------------------------------------------------------

/// One historical hurricane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HurricaneRecord {
    pub name: String,
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
    pub year: i32,
    pub max_sustained_wind_kt: u16,
    /// In source listing order; an area listed twice stays listed twice.
    pub areas_affected: Vec<String>,
    pub damage: DamageValue,
    pub deaths: u32,
}

fn serialize_month<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month.name())
}

// ---------------------------------------------------------------------------
// Insertion-ordered map
// ---------------------------------------------------------------------------

/// A map that iterates in first-insertion order.
///
/// Tie-breaks in the superlative finders depend on iteration order, so every
/// mapping whose order is observable is built on this rather than `HashMap`.
/// Re-inserting an existing key replaces the value but keeps the key's
/// original position.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    positions: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        OrderedMap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.positions.get(&key) {
            Some(&idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns a mutable reference to the value under `key`, inserting the
    /// result of `default` at the end of the order on first encounter.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let idx = match self.positions.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.positions.insert(key.clone(), idx);
                self.entries.push((key, default()));
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// All hurricane records keyed by name, in original listing order.
///
/// Name uniqueness is assumed rather than validated: inserting a record
/// whose name already exists overwrites the earlier record in place
/// (last write wins, first position kept).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: OrderedMap<String, HurricaneRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, returning the record it overwrote, if any.
    pub fn insert(&mut self, record: HurricaneRecord) -> Option<HurricaneRecord> {
        self.records.insert(record.name.clone(), record)
    }

    /// Looks up a hurricane by its exact name.
    pub fn get(&self, name: &str) -> Option<&HurricaneRecord> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &HurricaneRecord> {
        self.records.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Structural defects found while building a `Dataset`.
///
/// Any of these is fatal at startup; once a `Dataset` exists, the analysis
/// functions never fail.
#[derive(Debug)]
pub enum DatasetError {
    /// A parallel input column does not have one entry per hurricane name.
    InvalidInput {
        column: &'static str,
        expected: usize,
        found: usize,
    },
    /// A damage entry is neither the sentinel nor a number suffixed 'M'/'B'.
    MalformedDamageString { index: usize, value: String },
    /// A month column entry is not a calendar month name.
    InvalidMonth { name: String, value: String },
    /// The dataset file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The dataset file is not valid TOML or is missing fields.
    Parse { path: PathBuf, source: toml::de::Error },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::InvalidInput { column, expected, found } => write!(
                f,
                "Invalid input: column '{}' has {} entries, expected {}",
                column, found, expected
            ),
            DatasetError::MalformedDamageString { index, value } => write!(
                f,
                "Malformed damage string at position {}: '{}' (expected '{}' or a number suffixed with '{}' or '{}')",
                index, value, DAMAGES_NOT_RECORDED, MILLION_SUFFIX, BILLION_SUFFIX
            ),
            DatasetError::InvalidMonth { name, value } => {
                write!(f, "Invalid month for hurricane {}: '{}'", name, value)
            }
            DatasetError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            DatasetError::Parse { path, source } => {
                write!(f, "Failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io { source, .. } => Some(source),
            DatasetError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
