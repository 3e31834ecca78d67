//! Error types for parameter validation and synthesis.

use thiserror::Error;

/// Errors raised while building [`SynthParams`](crate::SynthParams) or
/// preparing a synthesis run.
///
/// Synthesis is a pure function of its parameters, so every variant is
/// deterministic: the same input fails the same way every time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    /// Sample rate was zero.
    #[error("sample rate must be greater than zero")]
    ZeroSampleRate,

    /// Loop period resolved to zero samples.
    #[error("loop period must be at least one sample")]
    ZeroPeriod,

    /// Loop period given in seconds was not a finite positive number.
    #[error("loop period must be a finite positive number of seconds, got {0}")]
    InvalidPeriodSecs(f64),

    /// Base frequency was zero, negative or not finite.
    #[error("base frequency must be a finite positive number of Hz, got {0}")]
    InvalidBaseFrequency(f64),

    /// Overtone set was empty.
    #[error("overtone set must contain at least one multiplier")]
    EmptyOvertones,

    /// Overtone set contained a zero multiplier.
    #[error("overtone multipliers must be positive integers")]
    ZeroOvertone,

    /// Overtone set was not strictly ascending.
    #[error("overtone multipliers must be strictly ascending, got {0:?}")]
    UnsortedOvertones(Vec<u32>),

    /// Dynamic range ratio was below 1 or not finite.
    #[error("dynamic range must be a finite ratio >= 1, got {0}")]
    InvalidDynamicRange(f64),

    /// Amplitude multiplier was non-positive, not finite, or large enough
    /// that a full-scale sum of every overtone overflows an `i32` sample.
    #[error("amplitude multiplier {scale} is invalid for {overtones} overtone(s)")]
    InvalidAmplitudeScale {
        /// The rejected multiplier.
        scale: f64,
        /// Number of overtones that would be summed.
        overtones: usize,
    },

    /// The phase-correction search left the (0.9, 1.1) bracket. The
    /// parameters are far outside the regime where a seamless loop can be
    /// produced by nudging the time axis.
    #[error(
        "phase correction out of range for coefficient {coefficient}: \
         x_down={x_down}, x_up={x_up} (both must lie in (0.9, 1.1))"
    )]
    PhaseCorrectionOutOfRange {
        /// Base coefficient `C` the search started from.
        coefficient: f64,
        /// Candidate exponent rounding the cycle count down.
        x_down: f64,
        /// Candidate exponent rounding the cycle count up.
        x_up: f64,
    },
}

/// Convenience result type for synthesis operations.
pub type Result<T> = core::result::Result<T, SynthError>;
