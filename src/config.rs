/// Analysis configuration loader - parses analysis.toml
///
/// Keeps the severity tier bounds out of the code, so a different
/// mortality or damage scale can be tried without recompiling. Either
/// section may be omitted; a missing section keeps the default scale.
///
/// ```toml
/// [mortality]
/// bounds = [0, 100, 500, 1000, 10000]
///
/// [damage]
/// bounds = [0, 1e8, 1e9, 1e10, 5e10]
/// ```

use log::debug;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::severity::{SeverityScale, TIER_COUNT};

/// Severity scales used by the rating reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    pub mortality: SeverityScale,
    pub damage: SeverityScale,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mortality: SeverityScale::MORTALITY,
            damage: SeverityScale::DAMAGE,
        }
    }
}

/// One `[mortality]` or `[damage]` section.
#[derive(Debug, Clone, Deserialize)]
struct ScaleSection {
    bounds: [f64; TIER_COUNT - 1],
}

/// Root configuration structure for TOML parsing
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    mortality: Option<ScaleSection>,
    damage: Option<ScaleSection>,
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The file is not valid TOML, or a section has the wrong shape.
    Parse(toml::de::Error),
    /// A bound is negative, NaN or infinite.
    InvalidBound { scale: &'static str, bound: f64 },
    /// Bounds are not strictly ascending.
    UnorderedBounds { scale: &'static str, bounds: Vec<f64> },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "Failed to parse analysis config: {}", e),
            ConfigError::InvalidBound { scale, bound } => write!(
                f,
                "Invalid {} bound {}: bounds must be finite and non-negative",
                scale, bound
            ),
            ConfigError::UnorderedBounds { scale, bounds } => write!(
                f,
                "{} bounds must be strictly ascending, got {:?}",
                scale, bounds
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Checks that `bounds` are finite, non-negative and strictly ascending.
pub fn validate_scale(scale: &'static str, bounds: &[f64]) -> Result<(), ConfigError> {
    if let Some(&bound) = bounds.iter().find(|b| !b.is_finite() || **b < 0.0) {
        return Err(ConfigError::InvalidBound { scale, bound });
    }
    if bounds.windows(2).any(|w| w[0] >= w[1]) {
        return Err(ConfigError::UnorderedBounds {
            scale,
            bounds: bounds.to_vec(),
        });
    }
    Ok(())
}

fn scale_from(
    name: &'static str,
    section: Option<ScaleSection>,
    default: SeverityScale,
) -> Result<SeverityScale, ConfigError> {
    match section {
        Some(section) => {
            validate_scale(name, &section.bounds)?;
            Ok(SeverityScale::new(section.bounds))
        }
        None => Ok(default),
    }
}

/// Parses analysis configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<AnalysisConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(contents).map_err(ConfigError::Parse)?;
    let defaults = AnalysisConfig::default();

    Ok(AnalysisConfig {
        mortality: scale_from("mortality", file.mortality, defaults.mortality)?,
        damage: scale_from("damage", file.damage, defaults.damage)?,
    })
}

/// Loads analysis configuration from a file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AnalysisConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&contents)?;
    debug!(
        "Analysis config from {}: mortality {:?}, damage {:?}",
        path.display(),
        config.mortality.bounds(),
        config.damage.bounds()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_standard_scales() {
        let config = AnalysisConfig::default();
        assert_eq!(config.mortality.bounds(), &[0.0, 100.0, 500.0, 1_000.0, 10_000.0]);
        assert_eq!(config.damage.bounds(), &[0.0, 1e8, 1e9, 1e10, 5e10]);
    }

    #[test]
    fn test_shipped_config_equals_defaults() {
        let config = load_config("analysis.toml").expect("analysis.toml should load");
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), AnalysisConfig::default());
    }

    #[test]
    fn test_partial_config_overrides_one_scale() {
        let config = parse_config("[mortality]\nbounds = [0, 10, 50, 100, 1000]\n").unwrap();

        assert_eq!(config.mortality.bounds(), &[0.0, 10.0, 50.0, 100.0, 1000.0]);
        assert_eq!(config.damage, SeverityScale::DAMAGE);
    }

    #[test]
    fn test_float_bounds_parse() {
        let config = parse_config("[damage]\nbounds = [0.0, 1e7, 1e8, 1e9, 1e10]\n").unwrap();
        assert_eq!(config.damage.upper_bound(1), Some(1e7));
    }

    #[test]
    fn test_unordered_bounds_rejected() {
        let err = parse_config("[damage]\nbounds = [0, 1e9, 1e8, 1e10, 5e10]\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedBounds { scale: "damage", .. }));
    }

    #[test]
    fn test_duplicate_bounds_rejected() {
        let err = parse_config("[mortality]\nbounds = [0, 100, 100, 1000, 10000]\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedBounds { scale: "mortality", .. }));
    }

    #[test]
    fn test_negative_bound_rejected() {
        let err = parse_config("[mortality]\nbounds = [-1, 100, 500, 1000, 10000]\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBound { scale: "mortality", .. }));
    }

    #[test]
    fn test_infinite_bound_rejected() {
        let err = parse_config("[damage]\nbounds = [0, 1e8, 1e9, 1e10, inf]\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBound { scale: "damage", .. }));
    }

    #[test]
    fn test_wrong_number_of_bounds_is_parse_error() {
        let err = parse_config("[damage]\nbounds = [0, 1e8, 1e9]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config("no_such_analysis.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
