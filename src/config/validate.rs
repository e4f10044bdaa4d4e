// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PipedagError, Result};

/// Longest accepted `[watch].debounce_ms`.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::PipedagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.validation, raw.watch))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_thresholds(cfg)?;
    validate_watch(cfg)?;
    Ok(())
}

fn validate_thresholds(cfg: &RawConfigFile) -> Result<()> {
    let v = &cfg.validation;
    if v.large_graph_threshold < v.min_nodes {
        return Err(PipedagError::ConfigError(format!(
            "[validation].large_graph_threshold ({}) must be >= min_nodes ({})",
            v.large_graph_threshold, v.min_nodes
        )));
    }
    Ok(())
}

fn validate_watch(cfg: &RawConfigFile) -> Result<()> {
    if cfg.watch.debounce_ms > MAX_DEBOUNCE_MS {
        return Err(PipedagError::ConfigError(format!(
            "[watch].debounce_ms must be <= {} (got {})",
            MAX_DEBOUNCE_MS, cfg.watch.debounce_ms
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::{ValidationSection, WatchSection};

    #[test]
    fn defaults_pass() {
        assert!(ConfigFile::try_from(RawConfigFile::default()).is_ok());
    }

    #[test]
    fn threshold_below_minimum_is_rejected() {
        let raw = RawConfigFile {
            validation: ValidationSection {
                min_nodes: 5,
                large_graph_threshold: 3,
                ..ValidationSection::default()
            },
            watch: WatchSection::default(),
        };
        match ConfigFile::try_from(raw) {
            Err(PipedagError::ConfigError(msg)) => {
                assert!(msg.contains("large_graph_threshold (3)"));
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn long_debounce_is_rejected() {
        let raw = RawConfigFile {
            validation: ValidationSection::default(),
            watch: WatchSection { debounce_ms: 60_000 },
        };
        assert!(matches!(
            ConfigFile::try_from(raw),
            Err(PipedagError::ConfigError(_))
        ));
    }
}
