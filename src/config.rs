//! Engine configuration
//!
//! Single-file configuration for the motion engine: tick rate, planner
//! thresholds and the nominal per-step durations. Every field has a default,
//! so an empty file (or `EngineConfig::default()`) yields a working engine.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Engine configuration schema.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Interpolation tick interval in milliseconds (~60 Hz nominal).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Below this planar distance no navigate step is planned, in units.
    #[serde(default = "default_nav_threshold")]
    pub nav_threshold: f32,
    /// Navigate duration per unit of distance, in milliseconds.
    #[serde(default = "default_nav_ms_per_unit")]
    pub nav_ms_per_unit: f32,
    /// Walking stride period in milliseconds; footstep cadence is constant
    /// regardless of navigate distance.
    #[serde(default = "default_stride_period_ms")]
    pub stride_period_ms: u64,
    /// Vertical bob amplitude while walking, in units.
    #[serde(default = "default_walk_bob")]
    pub walk_bob: f32,
    /// How far the figure descends over a full squat, in units.
    #[serde(default = "default_squat_descent")]
    pub squat_descent: f32,
    #[serde(default = "default_align_ms")]
    pub align_ms: u64,
    #[serde(default = "default_squat_ms")]
    pub squat_ms: u64,
    #[serde(default = "default_reach_ms")]
    pub reach_ms: u64,
    #[serde(default = "default_grasp_ms")]
    pub grasp_ms: u64,
    #[serde(default = "default_lift_ms")]
    pub lift_ms: u64,
    #[serde(default = "default_drop_ms")]
    pub drop_ms: u64,
    #[serde(default = "default_stand_ms")]
    pub stand_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    16
}

fn default_nav_threshold() -> f32 {
    0.5
}

fn default_nav_ms_per_unit() -> f32 {
    900.0
}

fn default_stride_period_ms() -> u64 {
    600
}

fn default_walk_bob() -> f32 {
    0.04
}

fn default_squat_descent() -> f32 {
    0.35
}

fn default_align_ms() -> u64 {
    400
}

fn default_squat_ms() -> u64 {
    700
}

fn default_reach_ms() -> u64 {
    500
}

fn default_grasp_ms() -> u64 {
    200
}

fn default_lift_ms() -> u64 {
    800
}

fn default_drop_ms() -> u64 {
    200
}

fn default_stand_ms() -> u64 {
    700
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            nav_threshold: default_nav_threshold(),
            nav_ms_per_unit: default_nav_ms_per_unit(),
            stride_period_ms: default_stride_period_ms(),
            walk_bob: default_walk_bob(),
            squat_descent: default_squat_descent(),
            align_ms: default_align_ms(),
            squat_ms: default_squat_ms(),
            reach_ms: default_reach_ms(),
            grasp_ms: default_grasp_ms(),
            lift_ms: default_lift_ms(),
            drop_ms: default_drop_ms(),
            stand_ms: default_stand_ms(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.stride_period_ms == 0 {
            return Err(ConfigError::Invalid(
                "stride_period_ms must be greater than 0".to_string(),
            ));
        }
        if self.nav_threshold < 0.0 {
            return Err(ConfigError::Invalid(
                "nav_threshold must not be negative".to_string(),
            ));
        }
        if self.nav_ms_per_unit <= 0.0 {
            return Err(ConfigError::Invalid(
                "nav_ms_per_unit must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The interpolation tick interval as a duration.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
