//! Shared CLI helpers used across multiple commands.

use clap::ValueEnum;
use shepard_config::{Preset, find_preset};
use shepard_core::{Shape, Warp};

/// Warp strategies for CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliWarp {
    /// Stretch the whole loop by the correction factor
    Uniform,
    /// Ease the correction in toward the end of the loop
    Smoothstep,
}

impl From<CliWarp> for Warp {
    fn from(w: CliWarp) -> Self {
        match w {
            CliWarp::Uniform => Warp::Uniform,
            CliWarp::Smoothstep => Warp::Smoothstep,
        }
    }
}

/// Oscillator shapes for CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliShape {
    /// Piecewise-linear triangle
    Triangle,
    /// Pure sine
    Sine,
}

impl From<CliShape> for Shape {
    fn from(s: CliShape) -> Self {
        match s {
            CliShape::Triangle => Shape::Triangle,
            CliShape::Sine => Shape::Sine,
        }
    }
}

/// Overtone multipliers given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OvertoneList(pub Vec<u32>);

/// Parse a comma-separated overtone list (e.g. `1,2,4,8`) for clap's
/// `value_parser`.
pub fn parse_overtones(s: &str) -> Result<OvertoneList, String> {
    let overtones = s
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u32>()
                .map_err(|_| format!("Invalid overtone '{}' (expected a positive integer)", part))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OvertoneList(overtones))
}

/// Load a preset by factory name or path.
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    find_preset(name).map_err(|e| {
        anyhow::anyhow!(
            "{}. Use 'shepard presets list' to see available presets.",
            e
        )
    })
}
