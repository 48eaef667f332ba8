/// Logging setup for the hurricane statistics CLI.
///
/// Diagnostics (where the data came from, how many records were built,
/// duplicate-name overwrites, config overrides) go through the `log`
/// facade to stderr, leaving stdout for the reports themselves. `RUST_LOG`
/// overrides the level picked from the command-line flags.

use log::{LevelFilter, debug, info};

use crate::analysis::severity::SeverityScale;
use crate::config::AnalysisConfig;
use crate::model::Dataset;

/// Level for the given verbosity flags. `quiet` wins over `verbose`.
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init_logger(verbose: bool, quiet: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {:?}", level_for(verbose, quiet));
}

/// Log the scales the rating reports will use.
pub fn log_config_info(config: &AnalysisConfig) {
    let describe = |scale: &SeverityScale| {
        scale
            .bounds()
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    info!("Mortality tier bounds: {}", describe(&config.mortality));
    info!("Damage tier bounds (USD): {}", describe(&config.damage));
}

/// Log a one-line summary of the loaded dataset.
pub fn log_dataset_summary(dataset: &Dataset) {
    let recorded = dataset.iter().filter(|r| r.damage.is_recorded()).count();
    info!(
        "Dataset: {} hurricanes, {} with recorded damage, {} without",
        dataset.len(),
        recorded,
        dataset.len() - recorded
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_selection() {
        assert_eq!(level_for(false, false), LevelFilter::Warn);
        assert_eq!(level_for(true, false), LevelFilter::Debug);
        assert_eq!(level_for(false, true), LevelFilter::Error);
        assert_eq!(level_for(true, true), LevelFilter::Error, "quiet should win");
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        init_logger(false, false);
        init_logger(true, false);
    }
}
