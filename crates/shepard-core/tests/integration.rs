//! Integration tests for shepard-core.
//!
//! Tests cover output length, the loop seam, envelope scenarios, the
//! degenerate single-tone stack, determinism and configuration failures.

use shepard_core::{
    Envelope, Shape, SynthError, SynthParams, Synthesizer, Warp, base_coefficient, synthesize,
};

fn reference_params() -> SynthParams {
    SynthParams::builder()
        .sample_rate(48000)
        .period_secs(5.0)
        .base_frequency(220.0)
        .overtones([1, 2, 4, 8])
        .dynamic_range(1000.0)
        .build()
        .unwrap()
}

fn all_variants() -> Vec<(Warp, Shape)> {
    vec![
        (Warp::Uniform, Shape::Triangle),
        (Warp::Uniform, Shape::Sine),
        (Warp::Smoothstep, Shape::Triangle),
        (Warp::Smoothstep, Shape::Sine),
    ]
}

// ---------------------------------------------------------------------------
// 1. Output length
// ---------------------------------------------------------------------------

#[test]
fn reference_loop_has_240000_samples() {
    let waveform = synthesize(reference_params()).unwrap();
    assert_eq!(waveform.len(), 240_000);
    assert_eq!(waveform.sample_rate(), 48000);
}

#[test]
fn length_is_rate_times_duration() {
    for (sr, secs) in [(44100u32, 1.0), (48000, 2.5), (96000, 0.5), (22050, 3.0)] {
        let params = SynthParams::builder()
            .sample_rate(sr)
            .period_secs(secs)
            .build()
            .unwrap();
        let waveform = synthesize(params).unwrap();
        assert_eq!(
            waveform.len(),
            (sr as f64 * secs) as usize,
            "sr={sr} secs={secs}"
        );
    }
}

// ---------------------------------------------------------------------------
// 2. Loop seam
// ---------------------------------------------------------------------------

#[test]
fn seam_phase_lands_on_bracketing_integer() {
    for (warp, shape) in all_variants() {
        let params = SynthParams::builder()
            .warp(warp)
            .shape(shape)
            .build()
            .unwrap();
        let c = base_coefficient(220.0, 240_000, 48000);
        let synth = Synthesizer::new(params).unwrap();

        let n = synth.params().period_samples();
        let seam = synth.phase_at(n);
        let nearest = seam.round();
        assert!((seam - nearest).abs() < 1e-6, "{warp:?}: seam phase {seam}");
        assert!(
            nearest == c.ceil() || nearest == c.floor(),
            "{warp:?}: {nearest} does not bracket {c}"
        );
        assert_eq!(nearest, synth.correction().target_cycles());
    }
}

#[test]
fn sample_past_the_end_matches_first_sample() {
    for (warp, shape) in all_variants() {
        let params = SynthParams::builder()
            .warp(warp)
            .shape(shape)
            .build()
            .unwrap();
        let synth = Synthesizer::new(params).unwrap();
        let waveform = synth.render();
        let n = waveform.len();

        let wrapped = synth.sample_at(n);
        assert!(
            (wrapped - waveform.samples()[0]).abs() <= 1,
            "{warp:?}/{shape:?}: {wrapped} vs {}",
            waveform.samples()[0]
        );
    }
}

#[test]
fn loop_continues_smoothly_across_seam() {
    for (warp, shape) in all_variants() {
        for period in [48_000usize, 240_000] {
            let params = SynthParams::builder()
                .warp(warp)
                .shape(shape)
                .period_samples(period)
                .build()
                .unwrap();
            let synth = Synthesizer::new(params).unwrap();

            let step = (synth.sample_at(1) - synth.sample_at(0)).abs();
            assert!(step > 0);
            for k in 1..=4 {
                let after_seam = synth.sample_at(period + k);
                let at_start = synth.sample_at(k);
                let err = (after_seam - at_start).abs();
                assert!(
                    err < step / 100,
                    "{warp:?}/{shape:?} N={period} k={k}: err {err} vs step {step}"
                );
            }
        }
    }
}

#[test]
fn correction_exponent_stays_in_bracket() {
    let cases = [
        (220.0, 48000u32, 5.0),
        (110.0, 44100, 3.0),
        (55.0, 48000, 10.0),
        (27.5, 96000, 2.0),
        (440.0, 22050, 0.5),
    ];
    for (f0, sr, secs) in cases {
        let params = SynthParams::builder()
            .base_frequency(f0)
            .sample_rate(sr)
            .period_secs(secs)
            .build()
            .unwrap();
        let synth = Synthesizer::new(params).unwrap();
        let x = synth.correction().exponent();
        assert!(0.9 < x && x < 1.1, "f0={f0} sr={sr} secs={secs}: x={x}");
    }
}

#[test]
fn out_of_bracket_parameters_are_rejected() {
    // C = 1 / ln 2: the cycle count cannot be rounded without a 25% stretch
    let params = SynthParams::builder()
        .base_frequency(1.0)
        .period_secs(1.0)
        .build()
        .unwrap();
    match Synthesizer::new(params.clone()) {
        Err(SynthError::PhaseCorrectionOutOfRange { coefficient, .. }) => {
            assert!((coefficient - 1.0 / std::f64::consts::LN_2).abs() < 1e-12);
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
    assert!(synthesize(params).is_err());
}

// ---------------------------------------------------------------------------
// 3. Envelope scenarios
// ---------------------------------------------------------------------------

#[test]
fn reference_envelope_scenario() {
    let env = reference_params().envelope();
    assert_eq!(env.max_frequency(), 3520.0);
    assert!(env.amplitude(220.0) <= 1.0 / 1000.0 + 1e-15);
    assert_eq!(env.amplitude(440.0), 1.0);
    assert_eq!(env.amplitude(1759.0), 1.0);
    assert_eq!(env.amplitude(1760.0), 1.0);
    assert_eq!(env.amplitude(3520.0), 0.0);
    assert!(env.amplitude(3519.999) < 0.0011);
}

#[test]
fn envelope_weights_stay_bounded_across_the_loop() {
    // Two overtones always sit in the flat band; the crossfading pair at the
    // ends of the stack adds between 0.06 and 1 + 1/D.
    let params = reference_params();
    let env = params.envelope();
    for i in 0..=100 {
        let f = 220.0 * (i as f64 / 100.0).exp2();
        let total: f64 = params
            .overtones()
            .iter()
            .map(|&p| env.amplitude(f * p as f64))
            .sum();
        assert!((2.0..=3.0 + 1e-3 + 1e-9).contains(&total), "f={f}: {total}");
    }
}

// ---------------------------------------------------------------------------
// 4. Degenerate single-tone stack
// ---------------------------------------------------------------------------

#[test]
fn single_overtone_unit_range_is_flat_in_band() {
    let params = SynthParams::builder()
        .overtones([1])
        .dynamic_range(1.0)
        .period_secs(1.0)
        .build()
        .unwrap();
    let env = params.envelope();
    assert_eq!(env, Envelope::new(220.0, 1, 1.0));
    assert_eq!(env.amplitude(219.9), 0.0);
    assert_eq!(env.amplitude(220.0), 1.0);
    assert_eq!(env.amplitude(330.0), 1.0);
    assert_eq!(env.amplitude(440.0), 0.0);

    let waveform = synthesize(params).unwrap();
    assert_eq!(waveform.len(), 48000);
    // A bare triangle at full scale
    assert!(waveform.peak() <= 100_000_000);
    assert!(waveform.peak() > 95_000_000);
}

// ---------------------------------------------------------------------------
// 5. Determinism and parameter independence
// ---------------------------------------------------------------------------

#[test]
fn identical_params_give_identical_bytes() {
    let a = synthesize(reference_params()).unwrap();
    let b = synthesize(reference_params()).unwrap();
    assert_eq!(a.to_le_bytes(), b.to_le_bytes());
}

#[test]
fn independent_runs_do_not_interfere() {
    let low = SynthParams::builder()
        .base_frequency(110.0)
        .period_secs(1.0)
        .build()
        .unwrap();
    let high = SynthParams::builder()
        .base_frequency(440.0)
        .period_secs(1.0)
        .build()
        .unwrap();

    let low_first = synthesize(low.clone()).unwrap();
    let _ = synthesize(high.clone()).unwrap();
    let low_again = synthesize(low).unwrap();
    assert_eq!(low_first, low_again);
    assert_ne!(low_first, synthesize(high).unwrap());
}

#[test]
fn warp_choice_changes_output() {
    let uniform = synthesize(reference_params()).unwrap();
    let smooth = synthesize(
        SynthParams::builder()
            .warp(Warp::Smoothstep)
            .build()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(uniform.len(), smooth.len());
    assert_eq!(uniform.samples()[0], smooth.samples()[0]);
    assert_ne!(uniform, smooth);
}
