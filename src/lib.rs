/// hurricane_stats: descriptive statistics over historical Atlantic hurricanes.
///
/// # Module structure
///
/// ```text
/// hurricane_stats
/// ├── model       - shared data types (HurricaneRecord, DamageValue, Dataset, DatasetError, …)
/// ├── hurricanes  - the embedded 34-row hurricane table
/// ├── config      - severity scale configuration loader (analysis.toml)
/// ├── logging     - env_logger setup and diagnostic summaries
/// ├── ingest
/// │   ├── damage  - "1.42B" / "100M" / sentinel → DamageValue
/// │   ├── records - parallel columns → Dataset
/// │   ├── catalog - hurricanes.toml rows → Dataset
/// │   └── fixtures (test only) - hand-built records for edge cases
/// ├── analysis
/// │   ├── groupings    - year index and affected-area tally
/// │   ├── superlatives - most affected area, deadliest, costliest
/// │   └── severity     - mortality and damage tier ratings
/// └── report      - text and JSON rendering of the full analysis
/// ```

/// Public modules
pub mod analysis;
pub mod config;
pub mod hurricanes;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod report;
