//! Desktop configuration.
//!
//! Every section is optional in TOML; omitted keys fall back to the values the
//! desktop ships with. Parsing never touches the filesystem or environment,
//! callers hand in the document text.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};
use crate::media::Track;
use crate::popover::PopoverPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse desktop config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid desktop config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub log_level: String,
    pub window: WindowConfig,
    pub clock: ClockConfig,
    pub popovers: PopoverConfig,
    pub launcher: LauncherConfig,
    pub music: MusicConfig,
    pub layout: LayoutConfig,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            clock: ClockConfig::default(),
            popovers: PopoverConfig::default(),
            launcher: LauncherConfig::default(),
            music: MusicConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DesktopConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `content`, falling back to defaults when it is unusable.
    pub fn from_toml_str_or_default(content: &str) -> Self {
        Self::from_toml_str(content).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Unusable desktop config; using built-in defaults");
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.min_width <= 0 || window.min_height <= 0 {
            return Err(invalid("window.min_width", "minimum size must be positive"));
        }
        if window.default_width < window.min_width || window.default_height < window.min_height
        {
            return Err(invalid(
                "window.default_width",
                format!(
                    "default size {}x{} is below the minimum {}x{}",
                    window.default_width,
                    window.default_height,
                    window.min_width,
                    window.min_height
                ),
            ));
        }
        if window.maximized_width < window.min_width
            || window.maximized_height < window.min_height
        {
            return Err(invalid(
                "window.maximized_width",
                "maximized size is below the minimum size",
            ));
        }
        if self.clock.tick_interval_ms == 0 {
            return Err(invalid("clock.tick_interval_ms", "must be non-zero"));
        }
        check_strftime("clock.time_format", &self.clock.time_format)?;
        check_strftime("clock.date_format", &self.clock.date_format)?;
        if self.launcher.tile_count == 0 {
            return Err(invalid("launcher.tile_count", "needs at least one tile"));
        }
        if self.launcher.columns == 0 {
            return Err(invalid("launcher.columns", "needs at least one column"));
        }
        if self.music.volume > 100 {
            return Err(invalid("music.volume", "must be within 0..=100"));
        }
        if self.layout.top_bar_height < 0 {
            return Err(invalid("layout.top_bar_height", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_strftime(field: &'static str, format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid(field, format!("unsupported format string {format:?}")));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub default_width: i32,
    pub default_height: i32,
    pub cascade_step_x: i32,
    pub origin_y: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub maximized_width: i32,
    pub maximized_height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_width: 400,
            default_height: 300,
            cascade_step_x: 100,
            origin_y: 100,
            min_width: 200,
            min_height: 150,
            maximized_width: 800,
            maximized_height: 600,
        }
    }
}

impl WindowConfig {
    pub fn default_size(&self) -> Size {
        Size::new(self.default_width, self.default_height)
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    pub fn maximized_size(&self) -> Size {
        Size::new(self.maximized_width, self.maximized_height)
    }

    /// Opening position for the window that lands at `index` in the collection.
    pub fn cascade_position(&self, index: usize) -> Point {
        let index = i32::try_from(index).unwrap_or(i32::MAX);
        Point::new(self.cascade_step_x.saturating_mul(index), self.origin_y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub tick_interval_ms: u32,
    pub time_format: String,
    pub date_format: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            time_format: "%I:%M %p".to_string(),
            date_format: "%A, %b %-d".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopoverConfig {
    pub policy: PopoverPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub tile_count: usize,
    pub columns: usize,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            tile_count: 6,
            columns: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicConfig {
    pub album_art: String,
    pub volume: u8,
    pub tracks: Vec<Track>,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            album_art: "album-art.jpg".to_string(),
            volume: 70,
            tracks: vec![
                Track::new("Neon Horizon", "Synthwave Collective"),
                Track::new("Midnight Drive", "Chrome Pulse"),
                Track::new("Orbit", "Violet Signal"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub top_bar_height: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { top_bar_height: 48 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DesktopConfig::from_toml_str("").unwrap();
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = DesktopConfig::from_toml_str(
            r#"
            log_level = "debug"

            [window]
            default_width = 640

            [popovers]
            policy = "exclusive"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.window.default_width, 640);
        assert_eq!(config.window.default_height, 300);
        assert_eq!(config.popovers.policy, PopoverPolicy::Exclusive);
        assert_eq!(config.launcher, LauncherConfig::default());
    }

    #[test]
    fn rejects_default_below_minimum() {
        let err = DesktopConfig::from_toml_str(
            r#"
            [window]
            default_width = 100
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "window.default_width",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_tick_interval() {
        let err = DesktopConfig::from_toml_str("[clock]\ntick_interval_ms = 0").unwrap_err();
        assert!(err.to_string().contains("clock.tick_interval_ms"));
    }

    #[test]
    fn rejects_bad_strftime() {
        let err = DesktopConfig::from_toml_str("[clock]\ntime_format = \"%Q\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "clock.time_format",
                ..
            }
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = DesktopConfig::from_toml_str("[window\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unusable_document_falls_back_to_defaults() {
        let config = DesktopConfig::from_toml_str_or_default("[launcher]\ncolumns = 0");
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn cascade_offsets_by_index() {
        let window = WindowConfig::default();
        assert_eq!(window.cascade_position(0), Point::new(0, 100));
        assert_eq!(window.cascade_position(3), Point::new(300, 100));
    }

    #[test]
    fn tracks_parse_from_tables() {
        let config = DesktopConfig::from_toml_str(
            r#"
            [[music.tracks]]
            title = "Solar Wind"
            artist = "Aux"
            "#,
        )
        .unwrap();
        assert_eq!(config.music.tracks, vec![Track::new("Solar Wind", "Aux")]);
    }
}
