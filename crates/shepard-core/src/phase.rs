//! Closed-form phase of the octave sweep and the loop-seam correction.
//!
//! The fundamental's frequency doubles once per loop, `f(t) = F0 · 2^t` for
//! normalized time `t ∈ [0, 1)`. Integrating over the period gives the phase
//! in cycles
//!
//! ```text
//! φ(t) = C · (2^t - 1),    C = F0 · N / (SR · ln 2)
//! ```
//!
//! For the loop to close without a click, `φ(1)` has to be a whole number of
//! cycles. In general `C` is not an integer, so the time axis is stretched by
//! an exponent `x* ≈ 1` chosen so that `C · (2^x* - 1)` is. The stretch is a
//! timing change of a few parts per million to a few parts per thousand; the
//! envelope still reads the uncorrected time.

use crate::error::{Result, SynthError};

/// Open interval the correction exponent must fall in.
pub const CORRECTION_BRACKET: (f64, f64) = (0.9, 1.1);

/// Base coefficient `C = F0 · N / (SR · ln 2)`.
pub fn base_coefficient(base_frequency: f64, period_samples: usize, sample_rate: u32) -> f64 {
    base_frequency * period_samples as f64 / (sample_rate as f64 * core::f64::consts::LN_2)
}

/// How the correction exponent is spread over the loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Warp {
    /// `t' = t · x*`. The whole loop runs at the same slightly shifted rate.
    #[default]
    Uniform,
    /// `t' = t + (3 - 2t)·t²·(x* - 1)`. The correction is eased in with a
    /// smoothstep, so the pitch rate right after the seam is untouched and
    /// the stretch accumulates toward the end of the loop.
    Smoothstep,
}

impl Warp {
    /// Map normalized time `t0` to corrected time for exponent `exponent`.
    ///
    /// Both strategies map 0 to 0 and 1 to `exponent`.
    #[inline]
    pub fn apply(self, t0: f64, exponent: f64) -> f64 {
        match self {
            Warp::Uniform => t0 * exponent,
            Warp::Smoothstep => t0 + (3.0 - 2.0 * t0) * t0 * t0 * (exponent - 1.0),
        }
    }

    /// Lower-case name, as used in presets and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Warp::Uniform => "uniform",
            Warp::Smoothstep => "smoothstep",
        }
    }
}

/// Solved loop-seam correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseCorrection {
    coefficient: f64,
    exponent: f64,
    target_cycles: f64,
    x_down: f64,
    x_up: f64,
}

impl PhaseCorrection {
    /// Find `x*` near 1 with `C · (2^x* - 1)` integral.
    ///
    /// Both neighbours `floor(C)` and `ceil(C)` are tried. Because the
    /// correction scales time rather than shifting it, the candidates are
    /// compared as ratios: `x_up` wins when `x_up < 1 / x_down`.
    pub fn solve(coefficient: f64) -> Result<Self> {
        let y_up = coefficient.ceil();
        let y_down = coefficient.floor();
        let x_up = (y_up / coefficient + 1.0).log2();
        let x_down = (y_down / coefficient + 1.0).log2();

        let (lo, hi) = CORRECTION_BRACKET;
        let in_bracket = |x: f64| lo < x && x < hi;
        if !in_bracket(x_up) || !in_bracket(x_down) {
            return Err(SynthError::PhaseCorrectionOutOfRange {
                coefficient,
                x_down,
                x_up,
            });
        }

        let (exponent, target_cycles) = if x_up < 1.0 / x_down {
            (x_up, y_up)
        } else {
            (x_down, y_down)
        };

        Ok(Self {
            coefficient,
            exponent,
            target_cycles,
            x_down,
            x_up,
        })
    }

    /// Base coefficient `C`.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Chosen correction exponent `x*`.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Whole number of fundamental cycles the loop is solved to contain.
    pub fn target_cycles(&self) -> f64 {
        self.target_cycles
    }

    /// Both bracket candidates as `(x_down, x_up)`.
    pub fn candidates(&self) -> (f64, f64) {
        (self.x_down, self.x_up)
    }

    /// Pitch deviation introduced by the correction, in cents.
    pub fn cents(&self) -> f64 {
        1200.0 * self.exponent.log2()
    }

    /// Phase in cycles at warped time `t`.
    #[inline]
    pub fn phase(&self, t: f64) -> f64 {
        self.coefficient * (t.exp2() - 1.0)
    }

    /// Phase at the end of the loop under `warp`.
    pub fn end_phase(&self, warp: Warp) -> f64 {
        self.phase(warp.apply(1.0, self.exponent))
    }
}
