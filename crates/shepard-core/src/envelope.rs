//! Frequency-to-amplitude envelope for the rising overtone stack.
//!
//! Every overtone walks up one octave per loop. The envelope fades a partial
//! in over the bottom octave `[F0, 2·F0)`, holds it at full level, and fades
//! it out over the top octave `[Fmax/2, Fmax)` with `Fmax = 2·Pmax·F0`. By the
//! time a partial has left the top of the stack its neighbour below has
//! taken its place, which is what makes the rise sound endless.
//!
//! The fades are linear in dB across one octave. Starting from
//! `level_db(f) = -range_db · (1 - log2(f/F0))` and converting back to linear
//! amplitude gives the power law `(f/F0)^log2(D) / D`.
//!
//! ```text
//!  amplitude
//!    1 ┤        ┌──────────────┐
//!      │       ╱                ╲
//!      │      ╱                  ╲
//!  1/D ┤─────┘                    └─────
//!    0 ┼─────┬────┬──────────┬────┬─────► f
//!           F0  2·F0      Fmax/2  Fmax
//! ```

/// Amplitude envelope over frequency.
///
/// Bands are closed on the lower edge and open on the upper edge. If the fade
/// bands overlap (a single-overtone stack, where `Fmax/2 == F0`), the fade-in
/// governs.
///
/// # Example
///
/// ```rust
/// use shepard_core::Envelope;
///
/// let env = Envelope::new(220.0, 8, 1000.0);
/// assert_eq!(env.amplitude(100.0), 0.0);
/// assert_eq!(env.amplitude(440.0), 1.0);
/// assert_eq!(env.amplitude(1760.0), 1.0);
/// assert_eq!(env.amplitude(3520.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    base: f64,
    max: f64,
    range: f64,
    range_log2: f64,
}

impl Envelope {
    /// Build the envelope for base frequency `base_hz`, largest overtone
    /// multiplier `max_overtone` and dynamic range ratio `dynamic_range`.
    pub fn new(base_hz: f64, max_overtone: u32, dynamic_range: f64) -> Self {
        Self {
            base: base_hz,
            max: 2.0 * max_overtone as f64 * base_hz,
            range: dynamic_range,
            range_log2: dynamic_range.log2(),
        }
    }

    /// Lower edge F0 of the audible band.
    pub fn base_frequency(&self) -> f64 {
        self.base
    }

    /// Upper edge Fmax of the audible band (exclusive).
    pub fn max_frequency(&self) -> f64 {
        self.max
    }

    /// Dynamic range ratio D.
    pub fn dynamic_range(&self) -> f64 {
        self.range
    }

    /// Amplitude weight in `[0, 1]` for a partial at `frequency` Hz.
    #[inline]
    pub fn amplitude(&self, frequency: f64) -> f64 {
        if frequency < self.base || frequency >= self.max {
            return 0.0;
        }
        if frequency < 2.0 * self.base {
            return self.fade(frequency / self.base);
        }
        if frequency >= self.max / 2.0 {
            return self.fade(self.max / frequency);
        }
        1.0
    }

    /// `factor ∈ [1, 2]` mapped onto `[1/D, 1]`.
    ///
    /// Evaluated as `2^(log2(D)·(log2(factor) - 1))`, which equals
    /// `factor^log2(D) / D` and is exactly 1 at `factor == 2`.
    #[inline]
    fn fade(&self, factor: f64) -> f64 {
        (self.range_log2 * (factor.log2() - 1.0)).exp2()
    }
}
