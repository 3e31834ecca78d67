//! Preset management commands.
//!
//! Provides commands to list, show and export synthesis presets.

use clap::{Args, Subcommand};
use shepard_config::{Preset, factory_presets, is_factory_preset};
use shepard_core::Synthesizer;
use std::path::PathBuf;

use super::common::load_preset;

/// List, show and export presets.
#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List factory presets
    List,

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,
    },

    /// Write a preset to a TOML file for customization
    Export {
        /// Preset name or path
        name: String,

        /// Destination TOML file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the presets command.
pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List => list_presets(),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Export { name, path, force } => export_preset(&name, path, force),
    }
}

fn list_presets() -> anyhow::Result<()> {
    println!("Factory Presets:");
    println!("================");
    for preset in factory_presets() {
        let desc = preset.description.as_deref().unwrap_or("");
        println!("  {:14} - {}", preset.name, desc);
    }
    println!();
    println!("  Export one for editing with: shepard presets export <name> <file.toml>");

    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {}", desc);
        println!();
    }

    let source = if is_factory_preset(name) {
        "factory"
    } else {
        "file"
    };
    println!("Source:          {}", source);
    println!("Sample rate:     {} Hz", preset.sample_rate);
    println!("Period:          {} s", preset.period_secs);
    println!("Base frequency:  {} Hz", preset.base_frequency);
    println!("Overtones:       {}", format_overtones(&preset.overtones));
    println!("Dynamic range:   {}:1", preset.dynamic_range);
    println!("Warp:            {}", preset.warp.name());
    println!("Shape:           {}", preset.shape.name());
    println!("Amplitude scale: {:e}", preset.amplitude_scale);

    // Values can be valid TOML and still fail to close the loop
    match build_synth(&preset) {
        Ok(synth) => {
            let correction = synth.correction();
            println!(
                "Loop:            {} cycles ({:+.3} cents)",
                correction.target_cycles(),
                correction.cents()
            );
        }
        Err(e) => println!("Loop:            invalid ({})", e),
    }

    Ok(())
}

fn build_synth(preset: &Preset) -> anyhow::Result<Synthesizer> {
    Ok(Synthesizer::new(preset.to_params()?)?)
}

fn export_preset(name: &str, path: PathBuf, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "'{}' already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let preset = load_preset(name)?;
    preset.save(&path)?;

    println!("Exported preset '{}' to {}", preset.name, path.display());
    Ok(())
}

fn format_overtones(overtones: &[u32]) -> String {
    overtones
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overtones_joined_with_commas() {
        assert_eq!(format_overtones(&[1, 2, 4, 8]), "1, 2, 4, 8");
        assert_eq!(format_overtones(&[1]), "1");
    }
}
