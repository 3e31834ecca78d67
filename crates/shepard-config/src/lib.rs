//! Configuration and preset management for Shepard loop synthesis.
//!
//! # Features
//!
//! - **Preset System**: Load and save synthesis presets from TOML files
//! - **Factory Presets**: Built-in configurations, including the single-tone
//!   special cases of the overtone stack
//! - **Lookup**: Resolve a preset by factory name or file path
//!
//! # Example
//!
//! ```rust,no_run
//! use shepard_config::{Preset, find_preset};
//! use shepard_core::Warp;
//!
//! // Resolve a factory preset or a file on disk
//! let preset = find_preset("shepard").unwrap();
//!
//! // Customize and save
//! let slow = Preset {
//!     name: "slow".to_string(),
//!     period_secs: 20.0,
//!     warp: Warp::Smoothstep,
//!     ..preset
//! };
//! slow.save("slow.toml").unwrap();
//!
//! let params = slow.to_params().unwrap();
//! ```

mod error;
mod preset;

/// Factory presets bundled with the library.
pub mod factory_presets;

use std::path::Path;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_presets, get_factory_preset, is_factory_preset,
};
pub use preset::Preset;

/// Resolve a preset by factory name, falling back to a TOML file path.
pub fn find_preset(name_or_path: &str) -> Result<Preset, ConfigError> {
    if let Some(preset) = get_factory_preset(name_or_path) {
        return Ok(preset);
    }

    let path = Path::new(name_or_path);
    if path.exists() {
        return Preset::load(path);
    }

    Err(ConfigError::PresetNotFound(name_or_path.to_string()))
}
