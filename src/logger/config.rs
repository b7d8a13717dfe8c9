/// Logger configuration: minimum level and per-tag debug switches
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Messages above this level are dropped
    pub min_level: LogLevel,
    /// Tags with debug output enabled (lowercase keys, "all" enables every tag)
    pub debug_tags: HashSet<String>,
    /// Disable ANSI colors
    pub plain: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            plain: false,
        }
    }
}

impl LoggerConfig {
    /// Build from command-line switches. `quiet` wins over `verbose`.
    pub fn from_flags(verbose: bool, quiet: bool, debug_tags: &[String]) -> Self {
        let min_level = if quiet {
            LogLevel::Warning
        } else if verbose {
            LogLevel::Verbose
        } else if !debug_tags.is_empty() {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };

        Self {
            min_level,
            debug_tags: debug_tags.iter().map(|t| t.trim().to_lowercase()).collect(),
            plain: false,
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

pub fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.min_level == LogLevel::Verbose
        || config.debug_tags.contains("all")
        || config.debug_tags.contains(&tag.to_debug_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        let config = LoggerConfig::from_flags(false, false, &[]);
        assert_eq!(config.min_level, LogLevel::Info);

        let config = LoggerConfig::from_flags(true, false, &[]);
        assert_eq!(config.min_level, LogLevel::Verbose);

        let config = LoggerConfig::from_flags(true, true, &["RPC".to_string()]);
        assert_eq!(config.min_level, LogLevel::Warning);
        assert!(config.debug_tags.contains("rpc"));
    }

    #[test]
    fn test_debug_gate_per_tag() {
        let config = LoggerConfig::from_flags(false, false, &["security".to_string()]);
        assert!(is_debug_enabled_for_tag(&config, &LogTag::Security));
        assert!(!is_debug_enabled_for_tag(&config, &LogTag::Rpc));

        let config = LoggerConfig::from_flags(false, false, &["all".to_string()]);
        assert!(is_debug_enabled_for_tag(&config, &LogTag::Rpc));
    }
}
