//! Immutable synthesis parameters.

use crate::envelope::Envelope;
use crate::error::{Result, SynthError};
use crate::oscillator::Shape;
use crate::phase::Warp;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 48000;
/// Default loop length in seconds.
pub const DEFAULT_PERIOD_SECS: f64 = 5.0;
/// Default base frequency F0 in Hz. The loop rises one octave from here.
pub const DEFAULT_BASE_FREQUENCY: f64 = 220.0;
/// Default overtone multipliers.
pub const DEFAULT_OVERTONES: [u32; 4] = [1, 2, 4, 8];
/// Default dynamic range ratio (1000:1, roughly 60 dB).
pub const DEFAULT_DYNAMIC_RANGE: f64 = 1000.0;
/// Default integer multiplier applied before quantizing each sample.
pub const DEFAULT_AMPLITUDE_SCALE: f64 = 1e8;

/// Configuration for one synthesis run.
///
/// Constructed through [`SynthParams::builder`], which enforces every
/// invariant up front; once built the value cannot be changed, so a
/// synthesizer never sees an inconsistent configuration.
///
/// # Example
///
/// ```rust
/// use shepard_core::{SynthParams, Warp};
///
/// let params = SynthParams::builder()
///     .base_frequency(220.0)
///     .period_secs(5.0)
///     .overtones([1, 2, 4, 8])
///     .warp(Warp::Smoothstep)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.period_samples(), 240_000);
/// assert_eq!(params.max_overtone(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SynthParams {
    sample_rate: u32,
    period_samples: usize,
    base_frequency: f64,
    overtones: Vec<u32>,
    dynamic_range: f64,
    warp: Warp,
    shape: Shape,
    amplitude_scale: f64,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            period_samples: (DEFAULT_SAMPLE_RATE as f64 * DEFAULT_PERIOD_SECS) as usize,
            base_frequency: DEFAULT_BASE_FREQUENCY,
            overtones: DEFAULT_OVERTONES.to_vec(),
            dynamic_range: DEFAULT_DYNAMIC_RANGE,
            warp: Warp::Uniform,
            shape: Shape::Triangle,
            amplitude_scale: DEFAULT_AMPLITUDE_SCALE,
        }
    }
}

impl SynthParams {
    /// Start a builder populated with the defaults.
    pub fn builder() -> SynthParamsBuilder {
        SynthParamsBuilder::default()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Loop length in samples; also the length of the rendered waveform.
    pub fn period_samples(&self) -> usize {
        self.period_samples
    }

    /// Loop length in seconds.
    pub fn period_secs(&self) -> f64 {
        self.period_samples as f64 / self.sample_rate as f64
    }

    /// Base frequency F0 in Hz.
    pub fn base_frequency(&self) -> f64 {
        self.base_frequency
    }

    /// Overtone multipliers, strictly ascending.
    pub fn overtones(&self) -> &[u32] {
        &self.overtones
    }

    /// Largest overtone multiplier (Pmax).
    pub fn max_overtone(&self) -> u32 {
        // Non-empty by construction.
        self.overtones.last().copied().unwrap_or(1)
    }

    /// Dynamic range ratio D.
    pub fn dynamic_range(&self) -> f64 {
        self.dynamic_range
    }

    /// Time-warp strategy used for phase correction.
    pub fn warp(&self) -> Warp {
        self.warp
    }

    /// Oscillator shape for each overtone.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Multiplier applied to the overtone sum before rounding.
    pub fn amplitude_scale(&self) -> f64 {
        self.amplitude_scale
    }

    /// The amplitude envelope these parameters describe.
    pub fn envelope(&self) -> Envelope {
        Envelope::new(self.base_frequency, self.max_overtone(), self.dynamic_range)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Period {
    Samples(usize),
    Secs(f64),
}

/// Builder for [`SynthParams`].
#[derive(Debug, Clone)]
pub struct SynthParamsBuilder {
    sample_rate: u32,
    period: Period,
    base_frequency: f64,
    overtones: Vec<u32>,
    dynamic_range: f64,
    warp: Warp,
    shape: Shape,
    amplitude_scale: f64,
}

impl Default for SynthParamsBuilder {
    fn default() -> Self {
        let defaults = SynthParams::default();
        Self {
            sample_rate: defaults.sample_rate,
            period: Period::Secs(DEFAULT_PERIOD_SECS),
            base_frequency: defaults.base_frequency,
            overtones: defaults.overtones,
            dynamic_range: defaults.dynamic_range,
            warp: defaults.warp,
            shape: defaults.shape,
            amplitude_scale: defaults.amplitude_scale,
        }
    }
}

impl SynthParamsBuilder {
    /// Set the sample rate in Hz.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the loop length in samples.
    pub fn period_samples(mut self, samples: usize) -> Self {
        self.period = Period::Samples(samples);
        self
    }

    /// Set the loop length in seconds. Resolved to
    /// `round(sample_rate * secs)` samples at build time.
    pub fn period_secs(mut self, secs: f64) -> Self {
        self.period = Period::Secs(secs);
        self
    }

    /// Set the base frequency F0 in Hz.
    pub fn base_frequency(mut self, hz: f64) -> Self {
        self.base_frequency = hz;
        self
    }

    /// Set the overtone multipliers. Must be positive and strictly ascending.
    pub fn overtones(mut self, overtones: impl IntoIterator<Item = u32>) -> Self {
        self.overtones = overtones.into_iter().collect();
        self
    }

    /// Set the dynamic range ratio D (e.g. 1000 for 60 dB).
    pub fn dynamic_range(mut self, ratio: f64) -> Self {
        self.dynamic_range = ratio;
        self
    }

    /// Set the time-warp strategy.
    pub fn warp(mut self, warp: Warp) -> Self {
        self.warp = warp;
        self
    }

    /// Set the oscillator shape.
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the integer amplitude multiplier.
    pub fn amplitude_scale(mut self, scale: f64) -> Self {
        self.amplitude_scale = scale;
        self
    }

    /// Validate and freeze the parameters.
    pub fn build(self) -> Result<SynthParams> {
        if self.sample_rate == 0 {
            return Err(SynthError::ZeroSampleRate);
        }

        let period_samples = match self.period {
            Period::Samples(n) => n,
            Period::Secs(secs) => {
                if !secs.is_finite() || secs <= 0.0 {
                    return Err(SynthError::InvalidPeriodSecs(secs));
                }
                (self.sample_rate as f64 * secs).round() as usize
            }
        };
        if period_samples == 0 {
            return Err(SynthError::ZeroPeriod);
        }

        if !self.base_frequency.is_finite() || self.base_frequency <= 0.0 {
            return Err(SynthError::InvalidBaseFrequency(self.base_frequency));
        }

        validate_overtones(&self.overtones)?;

        if !self.dynamic_range.is_finite() || self.dynamic_range < 1.0 {
            return Err(SynthError::InvalidDynamicRange(self.dynamic_range));
        }

        let headroom = i32::MAX as f64 / self.overtones.len() as f64;
        if !self.amplitude_scale.is_finite()
            || self.amplitude_scale <= 0.0
            || self.amplitude_scale > headroom
        {
            return Err(SynthError::InvalidAmplitudeScale {
                scale: self.amplitude_scale,
                overtones: self.overtones.len(),
            });
        }

        Ok(SynthParams {
            sample_rate: self.sample_rate,
            period_samples,
            base_frequency: self.base_frequency,
            overtones: self.overtones,
            dynamic_range: self.dynamic_range,
            warp: self.warp,
            shape: self.shape,
            amplitude_scale: self.amplitude_scale,
        })
    }
}

fn validate_overtones(overtones: &[u32]) -> Result<()> {
    if overtones.is_empty() {
        return Err(SynthError::EmptyOvertones);
    }
    if overtones.contains(&0) {
        return Err(SynthError::ZeroOvertone);
    }
    if overtones.windows(2).any(|w| w[0] >= w[1]) {
        return Err(SynthError::UnsortedOvertones(overtones.to_vec()));
    }
    Ok(())
}
