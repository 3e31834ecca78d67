//! Shepard-tone loop synthesizer.

use core::fmt;

use crate::envelope::Envelope;
use crate::error::Result;
use crate::oscillator::Shape;
use crate::params::SynthParams;
use crate::phase::{PhaseCorrection, Warp, base_coefficient};

/// Samples rendered per parallel work item.
#[cfg(feature = "parallel")]
const CHUNK_SIZE: usize = 4096;

/// Rendered loop: mono signed 32-bit samples plus the metadata an exporter
/// needs.
///
/// Produced once by [`Synthesizer::render`]; there are no mutating accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
    samples: Vec<i32>,
    sample_rate: u32,
}

impl Waveform {
    /// Bit depth of every sample.
    pub const BITS_PER_SAMPLE: u16 = 32;

    /// The samples, in time order.
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bit depth of every sample.
    pub fn bits_per_sample(&self) -> u16 {
        Self::BITS_PER_SAMPLE
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> u32 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Serialize as little-endian 32-bit PCM.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    /// Take ownership of the samples.
    pub fn into_samples(self) -> Vec<i32> {
        self.samples
    }
}

/// Diagnostic summary of one synthesis run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SynthReport {
    /// Base coefficient `C`.
    pub coefficient: f64,
    /// Time-correction exponent `x*`.
    pub time_factor: f64,
    /// Pitch deviation of the correction in cents.
    pub cents: f64,
    /// Whole cycles of the fundamental the loop contains.
    pub target_cycles: f64,
    /// Phase of the fundamental at the last sample.
    pub final_phase: f64,
    /// Claimed frequency of the fundamental at the last sample.
    pub final_frequency: f64,
    /// Phase of the fundamental at the loop seam, one sample past the end.
    pub seam_phase: f64,
    /// Number of samples rendered.
    pub period_samples: usize,
    /// Warp strategy used.
    pub warp: Warp,
    /// Oscillator shape used.
    pub shape: Shape,
}

impl fmt::Display for SynthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "final phase {:.6}, final freq {:.4} Hz, seam phase {:.6} ({} cycles), \
             time factor {:.9}, pitch off by {:+.6} cents",
            self.final_phase,
            self.final_frequency,
            self.seam_phase,
            self.target_cycles,
            self.time_factor,
            self.cents
        )
    }
}

/// Renders the Shepard loop described by a [`SynthParams`].
///
/// The phase correction is solved in [`Synthesizer::new`], so a synthesizer
/// that exists can always render. Every sample is a closed-form function of
/// its index; nothing is carried from one sample to the next.
///
/// # Example
///
/// ```rust
/// use shepard_core::{SynthParams, Synthesizer};
///
/// let params = SynthParams::builder().period_secs(0.5).build().unwrap();
/// let synth = Synthesizer::new(params).unwrap();
/// let waveform = synth.render();
///
/// assert_eq!(waveform.len(), 24_000);
/// assert_eq!(waveform.samples()[0], 0);
/// ```
#[derive(Debug, Clone)]
pub struct Synthesizer {
    params: SynthParams,
    envelope: Envelope,
    correction: PhaseCorrection,
}

impl Synthesizer {
    /// Prepare a synthesis run, solving the loop-seam correction.
    ///
    /// Fails with [`SynthError::PhaseCorrectionOutOfRange`](crate::SynthError)
    /// when no exponent in `(0.9, 1.1)` closes the loop.
    pub fn new(params: SynthParams) -> Result<Self> {
        let coefficient = base_coefficient(
            params.base_frequency(),
            params.period_samples(),
            params.sample_rate(),
        );
        let correction = PhaseCorrection::solve(coefficient)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            coefficient,
            exponent = correction.exponent(),
            cycles = correction.target_cycles(),
            "phase correction solved"
        );

        Ok(Self {
            envelope: params.envelope(),
            params,
            correction,
        })
    }

    /// Parameters this synthesizer renders.
    pub fn params(&self) -> &SynthParams {
        &self.params
    }

    /// Amplitude envelope in use.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Solved phase correction.
    pub fn correction(&self) -> &PhaseCorrection {
        &self.correction
    }

    /// Normalized time of sample `t`.
    #[inline]
    fn normalized_time(&self, t: usize) -> f64 {
        t as f64 / self.params.period_samples() as f64
    }

    /// Phase of the fundamental, in cycles, at sample `t`.
    #[inline]
    pub fn phase_at(&self, t: usize) -> f64 {
        let t0 = self.normalized_time(t);
        let warped = self.params.warp().apply(t0, self.correction.exponent());
        self.correction.phase(warped)
    }

    /// Claimed instantaneous frequency of the fundamental at sample `t`.
    ///
    /// Uses uncorrected time: the correction only dithers timing.
    #[inline]
    pub fn frequency_at(&self, t: usize) -> f64 {
        self.params.base_frequency() * self.normalized_time(t).exp2()
    }

    /// Unscaled overtone sum at sample `t`.
    ///
    /// Defined for every `t`, including indices past the end of the loop,
    /// which is how the seam can be inspected.
    pub fn mix_at(&self, t: usize) -> f64 {
        let phase = self.phase_at(t);
        let frequency = self.frequency_at(t);
        let shape = self.params.shape();

        self.params
            .overtones()
            .iter()
            .map(|&p| {
                let p = p as f64;
                shape.eval(phase * p) * self.envelope.amplitude(frequency * p)
            })
            .sum()
    }

    /// Quantized sample at `t`. Rounds half away from zero.
    #[inline]
    pub fn sample_at(&self, t: usize) -> i32 {
        (self.mix_at(t) * self.params.amplitude_scale()).round() as i32
    }

    /// Render the full loop.
    pub fn render(&self) -> Waveform {
        let n = self.params.period_samples();
        let mut samples = vec![0i32; n];
        self.fill(&mut samples);

        #[cfg(feature = "tracing")]
        {
            let report = self.report();
            tracing::info!(
                final_phase = report.final_phase,
                final_freq = report.final_frequency,
                time_factor = report.time_factor,
                cents = report.cents,
                "rendered {} samples",
                n
            );
        }

        Waveform {
            samples,
            sample_rate: self.params.sample_rate(),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn fill(&self, out: &mut [i32]) {
        for (t, sample) in out.iter_mut().enumerate() {
            *sample = self.sample_at(t);
        }
    }

    #[cfg(feature = "parallel")]
    fn fill(&self, out: &mut [i32]) {
        use rayon::prelude::*;

        out.par_chunks_mut(CHUNK_SIZE)
            .enumerate()
            .for_each(|(chunk, slice)| {
                let start = chunk * CHUNK_SIZE;
                for (i, sample) in slice.iter_mut().enumerate() {
                    *sample = self.sample_at(start + i);
                }
            });
    }

    /// Diagnostic summary for this run.
    pub fn report(&self) -> SynthReport {
        let last = self.params.period_samples() - 1;
        SynthReport {
            coefficient: self.correction.coefficient(),
            time_factor: self.correction.exponent(),
            cents: self.correction.cents(),
            target_cycles: self.correction.target_cycles(),
            final_phase: self.phase_at(last),
            final_frequency: self.frequency_at(last),
            seam_phase: self.correction.end_phase(self.params.warp()),
            period_samples: self.params.period_samples(),
            warp: self.params.warp(),
            shape: self.params.shape(),
        }
    }
}

/// Render the loop for `params` in one call.
pub fn synthesize(params: SynthParams) -> Result<Waveform> {
    Ok(Synthesizer::new(params)?.render())
}
