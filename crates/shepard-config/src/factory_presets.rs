//! Factory presets bundled with the library.
//!
//! The first three reproduce the configurations the synthesizer grew out of,
//! as parameterizations of the general overtone stack:
//!
//! | Name | Overtones | Shape | Warp | D | Scale |
//! |------|-----------|-------|------|---|-------|
//! | `shepard` | 1, 2, 4, 8 | triangle | uniform | 1000 | 1e8 |
//! | `sine-smooth` | 1 | sine | smoothstep | 1 | 1e6 |
//! | `single-tone` | 1 | triangle | uniform | 1 | 1e8 |
//! | `shepard-sine` | 1, 2, 4, 8 | sine | smoothstep | 1000 | 1e8 |

use shepard_core::{Shape, Warp};

use crate::preset::Preset;

/// Names of every factory preset, in listing order.
pub const FACTORY_PRESET_NAMES: &[&str] = &["shepard", "sine-smooth", "single-tone", "shepard-sine"];

/// All factory presets.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESET_NAMES
        .iter()
        .filter_map(|name| get_factory_preset(name))
        .collect()
}

/// Look up a factory preset by name.
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    let preset = match name {
        "shepard" => Preset::new("shepard")
            .with_description("Endless rise: four triangle partials over 60 dB fades"),
        "sine-smooth" => Preset::new("sine-smooth")
            .with_description("Single sine glide with the seam correction eased in")
            .with_overtones([1])
            .with_dynamic_range(1.0)
            .with_shape(Shape::Sine)
            .with_warp(Warp::Smoothstep)
            .with_amplitude_scale(1e6),
        "single-tone" => Preset::new("single-tone")
            .with_description("Single triangle glide, no envelope")
            .with_overtones([1])
            .with_dynamic_range(1.0),
        "shepard-sine" => Preset::new("shepard-sine")
            .with_description("Endless rise with pure sine partials and smoothstep seam")
            .with_shape(Shape::Sine)
            .with_warp(Warp::Smoothstep),
        _ => return None,
    };
    Some(preset)
}

/// True if `name` is a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    FACTORY_PRESET_NAMES.contains(&name)
}
