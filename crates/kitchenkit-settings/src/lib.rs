//! KitchenKit Settings Crate
//!
//! Handles the configuration file: viewport size, log output and the
//! starting state of a fresh estimator.

pub mod config;
pub mod error;

pub use config::{Config, EstimateDefaults, LoggingSettings, ViewportSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
