//! CLI command implementations.

pub mod common;
pub mod envelope;
pub mod generate;
pub mod info;
pub mod presets;
