//! Configuration Management
//!
//! Handles loading, saving, and validating the estimator configuration.
//! Supports both JSON and TOML formats, chosen by file extension.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use kitchenkit_core::constants::{
    DEFAULT_PER_WALL_MAX_FT, DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH, DEFAULT_WARDROBE_MAX_WIDTH_FT,
    DEFAULT_WARDROBE_WIDTH_FT, LINEAR_MIN_WALL_FT, VIEW_PADDING,
};
use kitchenkit_core::{Shape, ValidationIssue, WallKey};
use kitchenkit_designer::EstimatorState;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Viewport the 2D plan is fitted into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Fraction of each dimension kept free on every side
    pub padding_ratio: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEW_WIDTH,
            height: DEFAULT_VIEW_HEIGHT,
            padding_ratio: VIEW_PADDING,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of pretty text
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Starting inputs for a fresh estimator.
///
/// Shape and finish are free text and go through the same normalisation as
/// user input. Lengths are in feet, keyed by wall (`A`, `B`, `C`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateDefaults {
    pub shape: String,
    pub finish: String,
    pub lengths: BTreeMap<String, f64>,
    pub per_wall_max_ft: f64,
    pub wardrobe_width_ft: f64,
    pub wardrobe_max_width_ft: f64,
    pub wardrobe_finish: String,
}

impl Default for EstimateDefaults {
    fn default() -> Self {
        Self {
            shape: Shape::Linear.to_string(),
            finish: "essential".to_string(),
            lengths: BTreeMap::new(),
            per_wall_max_ft: DEFAULT_PER_WALL_MAX_FT,
            wardrobe_width_ft: DEFAULT_WARDROBE_WIDTH_FT,
            wardrobe_max_width_ft: DEFAULT_WARDROBE_MAX_WIDTH_FT,
            wardrobe_finish: "essential".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Plan viewport
    pub viewport: ViewportSettings,
    /// Log output
    pub logging: LoggingSettings,
    /// Estimator starting state
    pub defaults: EstimateDefaults,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => {
            let ext = other.unwrap_or("<none>").to_string();
            Err(ConfigError::UnsupportedFormat(ext).into())
        }
    }
}

fn out_of_range(key: &str, value: f64) -> SettingsResult<()> {
    Err(ConfigError::out_of_range(key, value).into())
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<platform config dir>/kitchenkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform("no configuration directory".to_string())
        })?;
        path.push("kitchenkit");
        path.push("config.toml");
        Ok(path)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, or defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| SettingsError::SaveError(e.to_string()))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let viewport = &self.viewport;
        if !is_positive(viewport.width) {
            return out_of_range("viewport.width", viewport.width);
        }
        if !is_positive(viewport.height) {
            return out_of_range("viewport.height", viewport.height);
        }
        if !(0.0..0.5).contains(&viewport.padding_ratio) {
            return out_of_range("viewport.padding_ratio", viewport.padding_ratio);
        }

        let defaults = &self.defaults;
        let wall_max = defaults.per_wall_max_ft;
        if wall_max.is_nan() || wall_max < LINEAR_MIN_WALL_FT {
            return out_of_range("defaults.per_wall_max_ft", wall_max);
        }
        let wardrobe_max = defaults.wardrobe_max_width_ft;
        if wardrobe_max.is_nan() || wardrobe_max < 0.0 {
            return out_of_range("defaults.wardrobe_max_width_ft", wardrobe_max);
        }
        for key in defaults.lengths.keys() {
            if key.parse::<WallKey>().is_err() {
                return Err(SettingsError::InvalidSetting {
                    key: format!("defaults.lengths.{}", key),
                    reason: "expected wall A, B or C".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Seed an estimator from the defaults section.
    ///
    /// Values pass through the estimator's setters, so anything out of range
    /// is clamped. The adjustments are returned rather than treated as errors.
    pub fn apply_to(&self, state: &mut EstimatorState) -> Vec<ValidationIssue> {
        let d = &self.defaults;
        let mut issues = Vec::new();

        issues.extend(state.set_per_wall_max(d.per_wall_max_ft).err());
        issues.extend(state.set_shape(&d.shape).err());
        issues.extend(state.set_finish(&d.finish).err());
        for (key, feet) in &d.lengths {
            match key.parse::<WallKey>() {
                Ok(key) => issues.extend(state.set_length(key, *feet).err()),
                Err(e) => warn!("Skipping length default: {}", e),
            }
        }
        issues.extend(state.set_wardrobe_max_width(d.wardrobe_max_width_ft).err());
        issues.extend(state.set_wardrobe_width(d.wardrobe_width_ft).err());
        issues.extend(state.set_wardrobe_finish(&d.wardrobe_finish).err());

        issues
    }

    /// A fresh estimator seeded from this configuration.
    pub fn estimator(&self) -> EstimatorState {
        let mut state = EstimatorState::new();
        self.apply_to(&mut state);
        state
    }
}
