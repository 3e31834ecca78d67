//! Loop rendering command.

use super::common::{CliShape, CliWarp, OvertoneList, load_preset, parse_overtones};
use clap::{Args, ValueEnum};
use shepard_core::Synthesizer;
use shepard_io::{DEFAULT_HEADROOM_DB, ExportFormat, ExportOptions, export};
use std::path::PathBuf;

/// Output containers for CLI
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliFormat {
    /// Mono integer PCM WAV
    #[default]
    Wav,
    /// Headerless little-endian 32-bit PCM
    Raw,
}

impl From<CliFormat> for ExportFormat {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Wav => ExportFormat::Wav,
            CliFormat::Raw => ExportFormat::Raw,
        }
    }
}

/// Render a loop and write it to disk.
#[derive(Args)]
pub struct GenerateArgs {
    /// Output file (default: timestamped name in --dir)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Factory preset name or path to a preset TOML file
    #[arg(short, long, default_value = "shepard")]
    preset: String,

    /// Base frequency in Hz
    #[arg(long)]
    freq: Option<f64>,

    /// Loop length in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Sample rate
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Overtone multipliers (comma-separated, e.g., "1,2,4,8")
    #[arg(long, value_parser = parse_overtones)]
    overtones: Option<OvertoneList>,

    /// Dynamic range ratio (1000 = 60 dB)
    #[arg(long)]
    dynamic_range: Option<f64>,

    /// Loop-seam correction strategy
    #[arg(long, value_enum)]
    warp: Option<CliWarp>,

    /// Oscillator shape
    #[arg(long, value_enum)]
    shape: Option<CliShape>,

    /// Headroom below full scale in dB
    #[arg(long, default_value_t = DEFAULT_HEADROOM_DB)]
    headroom: f64,

    /// Write samples as rendered, without normalizing
    #[arg(long)]
    no_normalize: bool,

    /// Output container
    #[arg(long, value_enum, default_value = "wav")]
    format: CliFormat,

    /// WAV bit depth (16, 24 or 32)
    #[arg(long, default_value = "32")]
    bits: u16,

    /// Directory for generated file names
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Print the synthesis report as JSON instead of text
    #[arg(long)]
    report_json: bool,
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let mut preset = load_preset(&args.preset)?;
    if let Some(freq) = args.freq {
        preset.base_frequency = freq;
    }
    if let Some(duration) = args.duration {
        preset.period_secs = duration;
    }
    if let Some(sample_rate) = args.sample_rate {
        preset.sample_rate = sample_rate;
    }
    if let Some(OvertoneList(overtones)) = args.overtones {
        preset.overtones = overtones;
    }
    if let Some(range) = args.dynamic_range {
        preset.dynamic_range = range;
    }
    if let Some(warp) = args.warp {
        preset.warp = warp.into();
    }
    if let Some(shape) = args.shape {
        preset.shape = shape.into();
    }

    let params = preset.to_params()?;
    tracing::info!(
        preset = %preset.name,
        base_hz = params.base_frequency(),
        sample_rate = params.sample_rate(),
        samples = params.period_samples(),
        overtones = ?params.overtones(),
        warp = params.warp().name(),
        shape = params.shape().name(),
        "generating loop"
    );

    let synth = Synthesizer::new(params)?;
    let waveform = synth.render();
    let report = synth.report();

    let options = ExportOptions {
        format: args.format.into(),
        headroom_db: (!args.no_normalize).then_some(args.headroom),
        bits_per_sample: args.bits,
        output: args.output,
        directory: args.dir,
    };
    let path = export(&waveform, &options)?;

    if args.report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Rendered Shepard loop:");
        println!(
            "  {} Hz base, {} overtone(s), {:.2}s at {} Hz",
            synth.params().base_frequency(),
            synth.params().overtones().len(),
            waveform.duration_secs(),
            waveform.sample_rate()
        );
        println!("  {}", report);
        println!("Wrote {} samples to {}", waveform.len(), path.display());
    }

    Ok(())
}
