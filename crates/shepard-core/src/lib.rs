//! Shepard Core - loop synthesis for the Shepard-tone illusion
//!
//! A Shepard tone seems to rise in pitch forever. It is built from
//! octave-spaced overtones that all glide up one octave per loop while a
//! frequency-dependent envelope fades them in at the bottom of the stack and
//! out at the top. When the loop wraps, every overtone has moved into the
//! slot its upper neighbour started in, and the seam is inaudible.
//!
//! # Core Components
//!
//! - [`SynthParams`] - Immutable, validated configuration
//! - [`Envelope`] - Frequency-to-amplitude shaping with dB-linear fades
//! - [`PhaseCorrection`] / [`Warp`] - Time-axis nudge that closes the loop on
//!   a whole number of cycles
//! - [`Shape`] - Per-overtone oscillator shape (triangle or sine)
//! - [`Synthesizer`] / [`Waveform`] - Sample loop and its rendered output
//!
//! ```rust
//! use shepard_core::{Shape, SynthParams, Synthesizer, Warp};
//!
//! let params = SynthParams::builder()
//!     .sample_rate(48000)
//!     .period_secs(1.0)
//!     .base_frequency(220.0)
//!     .overtones([1, 2, 4, 8])
//!     .dynamic_range(1000.0)
//!     .warp(Warp::Smoothstep)
//!     .shape(Shape::Sine)
//!     .build()?;
//!
//! let synth = Synthesizer::new(params)?;
//! let waveform = synth.render();
//! let report = synth.report();
//!
//! assert_eq!(waveform.len(), 48000);
//! assert!((report.seam_phase - report.target_cycles).abs() < 1e-6);
//! # Ok::<(), shepard_core::SynthError>(())
//! ```
//!
//! # Features
//!
//! - `tracing` - log the phase correction and a render summary
//! - `parallel` - render the sample loop on a rayon pool; output is identical
//! - `serde` - derive serde traits for [`Warp`], [`Shape`] and [`SynthReport`]

pub mod envelope;
pub mod error;
pub mod oscillator;
pub mod params;
pub mod phase;
pub mod synth;

pub use envelope::Envelope;
pub use error::{Result, SynthError};
pub use oscillator::Shape;
pub use params::{
    DEFAULT_AMPLITUDE_SCALE, DEFAULT_BASE_FREQUENCY, DEFAULT_DYNAMIC_RANGE, DEFAULT_OVERTONES,
    DEFAULT_PERIOD_SECS, DEFAULT_SAMPLE_RATE, SynthParams, SynthParamsBuilder,
};
pub use phase::{CORRECTION_BRACKET, PhaseCorrection, Warp, base_coefficient};
pub use synth::{SynthReport, Synthesizer, Waveform, synthesize};
