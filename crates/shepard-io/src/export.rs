//! Normalize, name and write a rendered loop.

use crate::Result;
use crate::pcm::{normalize, pack_pcm_le};
use crate::wav::{WavSpec, write_wav};
use shepard_core::Waveform;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default headroom left below full scale when normalizing.
pub const DEFAULT_HEADROOM_DB: f64 = 10.0;

/// Container written by [`export`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Mono integer PCM WAV.
    #[default]
    Wav,
    /// Headerless little-endian PCM.
    Raw,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Wav => "wav",
            ExportFormat::Raw => "pcm",
        }
    }
}

/// Options for [`export`].
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output container.
    pub format: ExportFormat,
    /// Headroom below full scale in dB; `None` writes the samples as rendered.
    pub headroom_db: Option<f64>,
    /// Bit depth of WAV output (16, 24 or 32). Raw output is always 32-bit.
    pub bits_per_sample: u16,
    /// Explicit output path. When unset a timestamped name is generated in
    /// `directory`.
    pub output: Option<PathBuf>,
    /// Directory for generated names.
    pub directory: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Wav,
            headroom_db: Some(DEFAULT_HEADROOM_DB),
            bits_per_sample: Waveform::BITS_PER_SAMPLE,
            output: None,
            directory: PathBuf::from("."),
        }
    }
}

/// Seconds since the Unix epoch, or 0 if the clock is before it.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Name encoding sample width in bytes, rate, duration and timestamp.
///
/// ```rust
/// use shepard_io::output_file_name;
///
/// assert_eq!(
///     output_file_name(4, 48000, 5.0, 1700000000, "wav"),
///     "shepard_w=4_r=48000_d=5.0_t=1700000000.wav"
/// );
/// ```
pub fn output_file_name(
    width_bytes: u16,
    sample_rate: u32,
    duration_secs: f64,
    timestamp: u64,
    extension: &str,
) -> String {
    format!(
        "shepard_w={}_r={}_d={:?}_t={}.{}",
        width_bytes, sample_rate, duration_secs, timestamp, extension
    )
}

/// Write headerless little-endian 32-bit PCM.
pub fn write_raw<P: AsRef<Path>>(path: P, samples: &[i32]) -> Result<()> {
    std::fs::write(path, pack_pcm_le(samples))?;
    Ok(())
}

/// Normalize `waveform` and write it according to `options`.
///
/// Returns the path written.
pub fn export(waveform: &Waveform, options: &ExportOptions) -> Result<PathBuf> {
    let samples = match options.headroom_db {
        Some(headroom) => normalize(waveform.samples(), headroom)?,
        None => waveform.samples().to_vec(),
    };

    let bits = match options.format {
        ExportFormat::Wav => options.bits_per_sample,
        ExportFormat::Raw => Waveform::BITS_PER_SAMPLE,
    };

    let path = match &options.output {
        Some(path) => path.clone(),
        None => options.directory.join(output_file_name(
            bits / 8,
            waveform.sample_rate(),
            waveform.duration_secs(),
            unix_timestamp(),
            options.format.extension(),
        )),
    };

    match options.format {
        ExportFormat::Wav => write_wav(
            &path,
            &samples,
            WavSpec {
                sample_rate: waveform.sample_rate(),
                bits_per_sample: bits,
            },
        )?,
        ExportFormat::Raw => write_raw(&path, &samples)?,
    }

    tracing::info!(path = %path.display(), samples = samples.len(), bits, "exported loop");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_keeps_fractional_duration() {
        assert_eq!(
            output_file_name(2, 44100, 2.5, 42, "pcm"),
            "shepard_w=2_r=44100_d=2.5_t=42.pcm"
        );
    }

    #[test]
    fn extensions() {
        assert_eq!(ExportFormat::Wav.extension(), "wav");
        assert_eq!(ExportFormat::Raw.extension(), "pcm");
    }

    #[test]
    fn timestamp_is_after_2020() {
        assert!(unix_timestamp() > 1_577_836_800);
    }
}
