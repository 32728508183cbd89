use std::sync::OnceLock;

use desktop_types::{ConfigError, DesktopConfig};
use dioxus_logger::tracing::{warn, Level};

const BUILTIN_DESKTOP_CONFIG_TOML: &str = include_str!("../config/desktop.toml");

static DESKTOP_CONFIG: OnceLock<DesktopConfig> = OnceLock::new();

pub fn parse_builtin_config() -> Result<DesktopConfig, ConfigError> {
    DesktopConfig::from_toml_str(BUILTIN_DESKTOP_CONFIG_TOML)
}

/// Set the configuration every widget reads. Only the first call wins.
pub fn install_desktop_config(config: DesktopConfig) {
    if DESKTOP_CONFIG.set(config).is_err() {
        warn!("Desktop config already installed; keeping the first one");
    }
}

pub fn desktop_config() -> &'static DesktopConfig {
    DESKTOP_CONFIG
        .get_or_init(|| DesktopConfig::from_toml_str_or_default(BUILTIN_DESKTOP_CONFIG_TOML))
}

pub fn log_level(config: &DesktopConfig) -> Level {
    config.log_level.parse().unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_matches_defaults() {
        let config = parse_builtin_config().expect("built-in config should parse");
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn log_level_falls_back_to_info() {
        let mut config = DesktopConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(log_level(&config), Level::DEBUG);

        config.log_level = "chatty".to_string();
        assert_eq!(log_level(&config), Level::INFO);
    }
}
