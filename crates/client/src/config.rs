//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings the `tower` binary takes from the environment rather than the
/// command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Game rules file (`config.toml` format). `None` plays with the defaults.
    pub config_path: Option<PathBuf>,
    /// `tracing` filter directives, e.g. `info` or `tower_runtime=debug`.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            log_filter: Self::DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl CliConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TOWER_CONFIG` - Path to the game rules TOML file
    /// - `TOWER_LOG` - Log filter directives (default: `info`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = read_non_empty(&lookup, "TOWER_CONFIG") {
            config.config_path = Some(PathBuf::from(path));
        }
        if let Some(filter) = read_non_empty(&lookup, "TOWER_LOG") {
            config.log_filter = filter;
        }

        config
    }
}

fn read_non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(CliConfig::from_lookup(lookup(&[])), CliConfig::default());
        assert_eq!(CliConfig::default().log_filter, "info");
    }

    #[test]
    fn reads_both_variables() {
        let config = CliConfig::from_lookup(lookup(&[
            ("TOWER_CONFIG", "data/config.toml"),
            ("TOWER_LOG", "tower_runtime=debug"),
        ]));
        assert_eq!(config.config_path, Some(PathBuf::from("data/config.toml")));
        assert_eq!(config.log_filter, "tower_runtime=debug");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = CliConfig::from_lookup(lookup(&[("TOWER_CONFIG", "  "), ("TOWER_LOG", "")]));
        assert_eq!(config, CliConfig::default());
    }
}
