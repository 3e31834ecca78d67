//! Property-based tests for the envelope, the phase correction and
//! parameter validation, using proptest for randomized inputs.

use proptest::prelude::*;
use shepard_core::{Envelope, PhaseCorrection, SynthParams, Warp};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The envelope never leaves [0, 1] for any frequency, base or range.
    #[test]
    fn envelope_in_unit_range(
        base in 20.0f64..2000.0,
        max_overtone in 1u32..64,
        range in 1.0f64..1e6,
        frequency in 0.0f64..300_000.0,
    ) {
        let env = Envelope::new(base, max_overtone, range);
        let a = env.amplitude(frequency);
        prop_assert!((0.0..=1.0).contains(&a), "amplitude {} at {} Hz", a, frequency);
    }

    /// Silence below F0 and at or above Fmax.
    #[test]
    fn envelope_silent_outside_band(
        base in 20.0f64..2000.0,
        max_overtone in 1u32..64,
        range in 1.0f64..1e6,
        below in 0.0f64..1.0,
        above in 1.0f64..10.0,
    ) {
        let env = Envelope::new(base, max_overtone, range);
        prop_assert_eq!(env.amplitude(base * below * 0.999), 0.0);
        prop_assert_eq!(env.amplitude(env.max_frequency() * above), 0.0);
    }

    /// Non-decreasing through the fade-in octave.
    #[test]
    fn fade_in_monotonic(
        range in 1.0f64..1e6,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let env = Envelope::new(220.0, 8, range);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let f_lo = 220.0 * (1.0 + lo);
        let f_hi = 220.0 * (1.0 + hi);
        prop_assert!(env.amplitude(f_lo) <= env.amplitude(f_hi));
    }

    /// Non-increasing through the fade-out octave.
    #[test]
    fn fade_out_monotonic(
        range in 1.0f64..1e6,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let env = Envelope::new(220.0, 8, range);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let f_lo = 1760.0 * (1.0 + lo);
        let f_hi = 1760.0 * (1.0 + hi);
        prop_assert!(env.amplitude(f_lo) >= env.amplitude(f_hi));
    }

    /// Whenever the solver accepts a coefficient, the loop closes on a
    /// neighbouring integer under both warps.
    #[test]
    fn accepted_correction_closes_loop(c in 10.0f64..1e6) {
        let pc = PhaseCorrection::solve(c).unwrap();
        let x = pc.exponent();
        prop_assert!(0.9 < x && x < 1.1);
        prop_assert!(pc.target_cycles() == c.floor() || pc.target_cycles() == c.ceil());
        for warp in [Warp::Uniform, Warp::Smoothstep] {
            let end = pc.end_phase(warp);
            prop_assert!(
                (end - pc.target_cycles()).abs() < 1e-9 * c.max(1.0),
                "{:?}: end phase {} for C={}", warp, end, c
            );
        }
    }

    /// Below a handful of cycles the bracket cannot be met.
    #[test]
    fn tiny_coefficient_rejected(c in 0.01f64..4.0) {
        prop_assert!(PhaseCorrection::solve(c).is_err());
    }

    /// Any ascending set of positive multipliers is accepted and its last
    /// element is Pmax.
    #[test]
    fn ascending_overtones_accepted(
        set in prop::collection::btree_set(1u32..128, 1..8),
    ) {
        let overtones: Vec<u32> = set.into_iter().collect();
        let params = SynthParams::builder()
            .overtones(overtones.clone())
            .build()
            .unwrap();
        prop_assert_eq!(params.max_overtone(), *overtones.last().unwrap());
        prop_assert_eq!(params.overtones(), overtones.as_slice());
    }
}
