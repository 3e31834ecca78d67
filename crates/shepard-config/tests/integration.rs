//! Integration tests for shepard-config preset resolution and rendering.

use shepard_config::{ConfigError, Preset, factory_presets, find_preset};
use shepard_core::{Shape, Synthesizer, Warp};
use tempfile::TempDir;

#[test]
fn find_factory_preset_by_name() {
    let preset = find_preset("sine-smooth").unwrap();
    assert_eq!(preset.shape, Shape::Sine);
    assert_eq!(preset.warp, Warp::Smoothstep);
}

#[test]
fn find_preset_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        "name = \"custom\"\nbase_frequency = 110.0\novertones = [1, 2, 4, 8, 16]\n",
    )
    .unwrap();

    let preset = find_preset(path.to_str().unwrap()).unwrap();
    assert_eq!(preset.name, "custom");
    let params = preset.to_params().unwrap();
    assert_eq!(params.base_frequency(), 110.0);
    assert_eq!(params.envelope().max_frequency(), 2.0 * 16.0 * 110.0);
}

#[test]
fn unknown_preset_is_not_found() {
    let err = find_preset("no-such-preset").unwrap_err();
    assert!(matches!(err, ConfigError::PresetNotFound(ref n) if n == "no-such-preset"));
}

#[test]
fn factory_presets_render_seamless_loops() {
    for preset in factory_presets() {
        let preset = Preset {
            period_secs: 0.5,
            ..preset
        };
        let synth = Synthesizer::new(preset.to_params().unwrap()).unwrap();
        let waveform = synth.render();
        assert_eq!(waveform.len(), 24_000, "{}", preset.name);

        let report = synth.report();
        assert!(
            (report.seam_phase - report.target_cycles).abs() < 1e-6,
            "{}: seam {} vs {}",
            preset.name,
            report.seam_phase,
            report.target_cycles
        );
    }
}

#[test]
fn exported_toml_reloads_identically() {
    let dir = TempDir::new().unwrap();
    for preset in factory_presets() {
        let path = dir.path().join(format!("{}.toml", preset.name));
        preset.save(&path).unwrap();
        assert_eq!(Preset::load(&path).unwrap(), preset);
    }
}
