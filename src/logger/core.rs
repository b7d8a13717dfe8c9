/// Level/tag filtering in front of the formatter
use super::config::{get_logger_config, is_debug_enabled_for_tag, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Filtering rules:
/// 1. Errors are always shown
/// 2. Anything above the minimum level is dropped
/// 3. Debug additionally requires debug mode for that tag (or --verbose)
pub fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug {
        return is_debug_enabled_for_tag(config, tag);
    }

    true
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();
    if !should_log(&config, &tag, level) {
        return;
    }

    super::format::format_and_log(&tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_filters() {
        let config = LoggerConfig::default();
        assert!(should_log(&config, &LogTag::Security, LogLevel::Error));
        assert!(should_log(&config, &LogTag::Security, LogLevel::Warning));
        assert!(should_log(&config, &LogTag::Security, LogLevel::Info));
        assert!(!should_log(&config, &LogTag::Security, LogLevel::Debug));
        assert!(!should_log(&config, &LogTag::Security, LogLevel::Verbose));
    }

    #[test]
    fn test_quiet_still_shows_errors() {
        let config = LoggerConfig::from_flags(false, true, &[]);
        assert!(should_log(&config, &LogTag::Rpc, LogLevel::Error));
        assert!(should_log(&config, &LogTag::Rpc, LogLevel::Warning));
        assert!(!should_log(&config, &LogTag::Rpc, LogLevel::Info));
    }

    #[test]
    fn test_debug_only_for_enabled_tag() {
        let config = LoggerConfig::from_flags(false, false, &["pool".to_string()]);
        assert!(should_log(&config, &LogTag::Pool, LogLevel::Debug));
        assert!(!should_log(&config, &LogTag::Rpc, LogLevel::Debug));
        assert!(!should_log(&config, &LogTag::Pool, LogLevel::Verbose));
    }
}
