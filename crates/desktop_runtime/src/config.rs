//! Window manager configuration embedded at build time from `config/window_manager.toml`.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Position, Size};

include!(concat!(env!("OUT_DIR"), "/window_manager_config_generated.rs"));

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPolicy {
    /// Top-left of the first window.
    pub origin: Position,
    /// Offset added per already-open window so new windows don't fully overlap.
    pub stagger_step: i32,
    /// The stagger restarts at `origin` after this many steps.
    pub stagger_wrap: u32,
}

impl PlacementPolicy {
    pub fn position_for(&self, open_window_count: usize) -> Position {
        let wrap = self.stagger_wrap.max(1) as usize;
        let step = (open_window_count % wrap) as i32 * self.stagger_step;
        self.origin.offset(step, step)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowManagerConfig {
    pub schema_version: u32,
    /// Z0. Window z-indices are allocated strictly above this value.
    pub z_index_base: u32,
    pub title_bar_height: i32,
    pub taskbar_height: i32,
    /// Pixels of a dragged window that must remain inside the viewport.
    pub min_visible: i32,
    pub icon_stagger_ms: u32,
    pub placement: PlacementPolicy,
    pub default_size: Size,
    pub min_size: Size,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            z_index_base: 100,
            title_bar_height: 32,
            taskbar_height: 40,
            min_visible: 48,
            icon_stagger_ms: 60,
            placement: PlacementPolicy {
                origin: Position::new(100, 100),
                stagger_step: 30,
                stagger_wrap: 10,
            },
            default_size: Size::new(800, 600),
            min_size: Size::new(300, 200),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window manager config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("window manager config schema mismatch: expected {expected} found {found}")]
    SchemaMismatch { expected: u32, found: u32 },
    #[error("minimum window size must be positive, got {width}x{height}")]
    NonPositiveMinimum { width: i32, height: i32 },
    #[error("minimum window height {min_height} does not clear the {title_bar_height}px title bar")]
    MinHeightBelowTitleBar {
        min_height: i32,
        title_bar_height: i32,
    },
    #[error("default window size {default:?} is below the minimum {min:?}")]
    DefaultBelowMinimum { default: Size, min: Size },
    #[error("stagger wrap must be at least 1")]
    ZeroStaggerWrap,
}

impl WindowManagerConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != CONFIG_SCHEMA_VERSION {
            return Err(ConfigError::SchemaMismatch {
                expected: CONFIG_SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        if self.min_size.width <= 0 || self.min_size.height <= 0 {
            return Err(ConfigError::NonPositiveMinimum {
                width: self.min_size.width,
                height: self.min_size.height,
            });
        }
        if self.min_size.height <= self.title_bar_height {
            return Err(ConfigError::MinHeightBelowTitleBar {
                min_height: self.min_size.height,
                title_bar_height: self.title_bar_height,
            });
        }
        if self.default_size.width < self.min_size.width
            || self.default_size.height < self.min_size.height
        {
            return Err(ConfigError::DefaultBelowMinimum {
                default: self.default_size,
                min: self.min_size,
            });
        }
        if self.placement.stagger_wrap == 0 {
            return Err(ConfigError::ZeroStaggerWrap);
        }
        Ok(())
    }

    /// Returns the embedded configuration, falling back to defaults if it fails validation.
    pub fn load() -> Self {
        match Self::from_json(WINDOW_MANAGER_CONFIG_JSON) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("{err}; using built-in window manager defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let embedded = WindowManagerConfig::from_json(WINDOW_MANAGER_CONFIG_JSON)
            .expect("embedded config is valid");
        assert_eq!(embedded, WindowManagerConfig::default());
    }

    #[test]
    fn placement_staggers_and_wraps() {
        let placement = WindowManagerConfig::default().placement;
        assert_eq!(placement.position_for(0), Position::new(100, 100));
        assert_eq!(placement.position_for(2), Position::new(160, 160));
        assert_eq!(placement.position_for(10), Position::new(100, 100));
    }

    #[test]
    fn rejects_default_size_below_minimum() {
        let mut config = WindowManagerConfig::default();
        config.default_size = Size::new(200, 600);
        let raw = serde_json::to_string(&config).unwrap();

        let err = WindowManagerConfig::from_json(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::DefaultBelowMinimum { .. }));
    }

    #[test]
    fn rejects_minimum_height_that_hides_content_under_title_bar() {
        let mut config = WindowManagerConfig::default();
        config.min_size = Size::new(300, 32);
        config.default_size = Size::new(800, 600);
        let raw = serde_json::to_string(&config).unwrap();

        let err = WindowManagerConfig::from_json(&raw).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MinHeightBelowTitleBar {
                min_height: 32,
                title_bar_height: 32
            }
        ));
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let mut value = serde_json::to_value(WindowManagerConfig::default()).unwrap();
        value["schema_version"] = json!(7);

        let err = WindowManagerConfig::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::SchemaMismatch {
                expected: 1,
                found: 7
            }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = WindowManagerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
