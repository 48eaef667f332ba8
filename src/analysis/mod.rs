/// Descriptive statistics over the hurricane dataset.
///
/// Submodules:
/// - `groupings`    - per-year index and per-area tally
/// - `superlatives` - most affected area, deadliest and costliest hurricane
/// - `severity`     - mortality and damage tier ratings

pub mod groupings;
pub mod severity;
pub mod superlatives;
