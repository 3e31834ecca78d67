//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use shepard_core::{
    DEFAULT_AMPLITUDE_SCALE, DEFAULT_BASE_FREQUENCY, DEFAULT_DYNAMIC_RANGE, DEFAULT_OVERTONES,
    DEFAULT_PERIOD_SECS, DEFAULT_SAMPLE_RATE, Shape, SynthParams, Warp,
};
use std::path::Path;

use crate::error::ConfigError;

/// Synthesis preset.
///
/// Every field except `name` has a default, so a preset file only needs the
/// values it changes.
///
/// # TOML Format
///
/// ```toml
/// name = "Slow Shepard"
/// description = "Ten-second loop from A1"
/// sample_rate = 48000
/// period_secs = 10.0
/// base_frequency = 55.0
/// overtones = [1, 2, 4, 8, 16]
/// dynamic_range = 1000.0
/// warp = "smoothstep"
/// shape = "sine"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Loop length in seconds.
    #[serde(default = "default_period_secs")]
    pub period_secs: f64,

    /// Base frequency F0 in Hz.
    #[serde(default = "default_base_frequency")]
    pub base_frequency: f64,

    /// Overtone multipliers, strictly ascending.
    #[serde(default = "default_overtones")]
    pub overtones: Vec<u32>,

    /// Dynamic range ratio D.
    #[serde(default = "default_dynamic_range")]
    pub dynamic_range: f64,

    /// Time-warp strategy for the loop-seam correction.
    #[serde(default)]
    pub warp: Warp,

    /// Oscillator shape.
    #[serde(default)]
    pub shape: Shape,

    /// Integer multiplier applied before quantizing.
    #[serde(default = "default_amplitude_scale")]
    pub amplitude_scale: f64,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_period_secs() -> f64 {
    DEFAULT_PERIOD_SECS
}

fn default_base_frequency() -> f64 {
    DEFAULT_BASE_FREQUENCY
}

fn default_overtones() -> Vec<u32> {
    DEFAULT_OVERTONES.to_vec()
}

fn default_dynamic_range() -> f64 {
    DEFAULT_DYNAMIC_RANGE
}

fn default_amplitude_scale() -> f64 {
    DEFAULT_AMPLITUDE_SCALE
}

impl Preset {
    /// Create a preset with default synthesis values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: DEFAULT_SAMPLE_RATE,
            period_secs: DEFAULT_PERIOD_SECS,
            base_frequency: DEFAULT_BASE_FREQUENCY,
            overtones: default_overtones(),
            dynamic_range: DEFAULT_DYNAMIC_RANGE,
            warp: Warp::default(),
            shape: Shape::default(),
            amplitude_scale: DEFAULT_AMPLITUDE_SCALE,
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the overtone multipliers.
    pub fn with_overtones(mut self, overtones: impl IntoIterator<Item = u32>) -> Self {
        self.overtones = overtones.into_iter().collect();
        self
    }

    /// Set the dynamic range ratio.
    pub fn with_dynamic_range(mut self, ratio: f64) -> Self {
        self.dynamic_range = ratio;
        self
    }

    /// Set the warp strategy.
    pub fn with_warp(mut self, warp: Warp) -> Self {
        self.warp = warp;
        self
    }

    /// Set the oscillator shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the amplitude multiplier.
    pub fn with_amplitude_scale(mut self, scale: f64) -> Self {
        self.amplitude_scale = scale;
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the preset into synthesis parameters.
    pub fn to_params(&self) -> Result<SynthParams, ConfigError> {
        SynthParams::builder()
            .sample_rate(self.sample_rate)
            .period_secs(self.period_secs)
            .base_frequency(self.base_frequency)
            .overtones(self.overtones.iter().copied())
            .dynamic_range(self.dynamic_range)
            .warp(self.warp)
            .shape(self.shape)
            .amplitude_scale(self.amplitude_scale)
            .build()
            .map_err(|source| ConfigError::InvalidPreset {
                name: self.name.clone(),
                source,
            })
    }
}
