//! Per-overtone oscillator shapes.
//!
//! Shapes are evaluated from an absolute phase measured in cycles, not from
//! a running accumulator: the synthesizer computes the phase of every sample
//! in closed form, so each sample can be produced independently.

use core::f64::consts::TAU;

/// Oscillator shape for each overtone.
///
/// Both shapes have period 1 (in cycles), odd symmetry about phase 0 and
/// range `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Shape {
    /// Piecewise-linear triangle. Adds odd harmonics falling 12 dB per octave
    /// but needs no transcendental function.
    #[default]
    Triangle,
    /// `sin(2π·phase)`.
    Sine,
}

impl Shape {
    /// Evaluate the shape at `phase` cycles.
    #[inline]
    pub fn eval(self, phase: f64) -> f64 {
        let p = wrap_phase(phase);
        match self {
            Shape::Triangle => triangle(p),
            Shape::Sine => (TAU * p).sin(),
        }
    }

    /// Lower-case name, as used in presets and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Sine => "sine",
        }
    }
}

/// Fractional part of `phase`, in `[0, 1)`.
#[inline]
fn wrap_phase(phase: f64) -> f64 {
    let r = phase - phase.floor();
    // floor() can leave exactly 1.0 for tiny negative inputs
    if r >= 1.0 { 0.0 } else { r }
}

/// Triangle through (0, 0), (0.25, 1), (0.75, -1), (1, 0).
#[inline]
fn triangle(p: f64) -> f64 {
    if p < 0.25 {
        4.0 * p
    } else if p < 0.75 {
        2.0 - 4.0 * p
    } else {
        4.0 * p - 4.0
    }
}
