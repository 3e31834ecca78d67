//! Mono integer WAV reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// True for IEEE float data, false for integer PCM.
    pub is_float: bool,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = reader.len() as u64; // total across all channels
    let num_frames = total_samples / spec.channels as u64;
    let duration_secs = num_frames as f64 / spec.sample_rate as f64;

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        is_float: spec.sample_format == SampleFormat::Float,
    })
}

/// Mono integer PCM format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample: 16, 24 or 32.
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl WavSpec {
    fn to_hound(self) -> Result<hound::WavSpec> {
        if !matches!(self.bits_per_sample, 16 | 24 | 32) {
            return Err(Error::UnsupportedBitDepth(self.bits_per_sample));
        }
        Ok(hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format: SampleFormat::Int,
        })
    }

    /// Right shift taking a full-scale 32-bit sample to this bit depth.
    fn shift(self) -> u32 {
        32 - self.bits_per_sample as u32
    }
}

/// Write full-scale 32-bit samples to a mono WAV file.
///
/// At 16 and 24 bits the low bits are dropped with an arithmetic shift, so
/// full scale maps to full scale at every depth.
///
/// # Example
/// ```ignore
/// let samples = vec![0i32; 48000]; // 1 second of silence
/// write_wav("loop.wav", &samples, WavSpec::default())?;
/// ```
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[i32], spec: WavSpec) -> Result<()> {
    let hound_spec = spec.to_hound()?;
    let shift = spec.shift();
    let mut writer = WavWriter::create(path, hound_spec)?;

    for &sample in samples {
        writer.write_sample(sample >> shift)?;
    }

    writer.finalize()?;
    Ok(())
}

/// Read a mono integer WAV file, scaling samples back up to 32-bit full
/// scale.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<i32>, WavSpec)> {
    let reader = WavReader::open(path)?;
    let hspec = reader.spec();
    if hspec.channels != 1 {
        return Err(Error::UnsupportedLayout(format!(
            "{} channels (expected mono)",
            hspec.channels
        )));
    }
    if hspec.sample_format != SampleFormat::Int {
        return Err(Error::UnsupportedLayout("float samples".to_string()));
    }

    let spec = WavSpec {
        sample_rate: hspec.sample_rate,
        bits_per_sample: hspec.bits_per_sample,
    };
    spec.to_hound()?;
    let shift = spec.shift();

    let samples = reader
        .into_samples::<i32>()
        .map(|s| s.map(|v| v << shift))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok((samples, spec))
}
