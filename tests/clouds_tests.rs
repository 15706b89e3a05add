// Host-side tests for cloud placement and per-frame cloud motion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
    pub mod clouds {
        include!("../src/core/clouds.rs");
    }
}

use glam::DVec2;
use site::clouds::*;
use site::parallax::ScrollState;

fn sprite() -> CloudSprite {
    CloudSprite {
        position: DVec2::new(20.0, 30.0),
        size: 0.02,
        parallax: 0.25,
        wobble_amplitude: 4.0,
        wobble_phase: 0.0,
        variant: 2,
    }
}

#[test]
fn count_scales_with_width_but_has_a_floor() {
    let config = CloudConfig::default();
    assert_eq!(config.count_for_width(0.0), 5);
    assert_eq!(config.count_for_width(1280.0), 5);
    assert_eq!(config.count_for_width(8_000.0), 8);
    assert_eq!(config.count_for_width(12_345.0), 12);
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let config = CloudConfig::default();
    assert_eq!(config.generate(1920.0), config.generate(1920.0));

    let other = CloudConfig {
        seed: 7,
        ..CloudConfig::default()
    };
    assert_ne!(config.generate(8_000.0), other.generate(8_000.0));
}

#[test]
fn sprites_keep_clear_of_the_sun() {
    for seed in 0..50 {
        let config = CloudConfig {
            seed,
            ..CloudConfig::default()
        };
        for sprite in config.generate(6_000.0) {
            let d = sprite.position.distance(config.sun_center);
            assert!(d >= config.sun_exclusion_radius, "seed {seed}: sprite at {d}");
        }
    }
}

#[test]
fn sprites_stay_inside_bounds() {
    let config = CloudConfig::default();
    let sprites = config.generate(8_000.0);
    assert!(!sprites.is_empty());
    assert!(sprites.len() <= config.count_for_width(8_000.0));
    for s in &sprites {
        assert!((0.0..100.0).contains(&s.position.x));
        assert!((config.top_margin..100.0).contains(&s.position.y));
        assert!((1..=config.variants).contains(&s.variant));
        assert!((s.size - config.base_size).abs() <= config.size_variation + 1e-12);
        assert!((0.15..=0.35).contains(&s.parallax));
        assert!(s.wobble_amplitude >= 0.8 * config.wobble_size_x - 1e-12);
        assert!(s.wobble_amplitude <= 2.0 * config.wobble_size_x + 1e-12);
    }
}

#[test]
fn layer_fades_out_over_span() {
    let config = CloudConfig::default();
    assert_eq!(config.opacity_at(0.0), 1.0);
    assert_eq!(config.opacity_at(150.0), 0.5);
    assert_eq!(config.opacity_at(300.0), 0.0);
    assert_eq!(config.opacity_at(900.0), 0.0);
}

#[test]
fn frame_moves_up_with_scroll_and_wobbles_in_time() {
    let config = CloudConfig::default();
    let s = sprite();
    let state = ScrollState::new(100.0, 1000.0, 800.0);

    let at_rest = s.frame(&config, &state, 0.0);
    assert_eq!(at_rest.offset.x, 0.0);
    assert_eq!(at_rest.offset.y, -25.0);
    assert!((at_rest.opacity - 2.0 / 3.0).abs() < 1e-12);

    // A quarter period later the wobble is at its peak.
    let quarter = std::f64::consts::FRAC_PI_2 / config.speed;
    let peak = s.frame(&config, &state, quarter);
    assert!((peak.offset.x - 4.0).abs() < 1e-9);
    assert_eq!(peak.offset.y, at_rest.offset.y);
}

#[test]
fn frame_scale_caps_sizing_width() {
    let config = CloudConfig::default();
    let s = sprite();
    let wide = s.frame(&config, &ScrollState::new(0.0, 2_560.0, 900.0), 0.0);
    let capped = s.frame(&config, &ScrollState::new(0.0, 1_400.0, 900.0), 0.0);
    let narrow = s.frame(&config, &ScrollState::new(0.0, 700.0, 900.0), 0.0);
    assert_eq!(wide.scale, capped.scale);
    assert!((capped.scale - 0.28).abs() < 1e-12);
    assert!(narrow.scale < capped.scale);
}

#[test]
fn css_strings() {
    let s = sprite();
    assert_eq!(
        s.placement_css(),
        "top:30%;left:20%;transform:translate(-50%,-50%);transform-origin:center;"
    );
    let frame = CloudFrame {
        offset: DVec2::new(1.5, -20.0),
        scale: 0.5,
        opacity: 1.0,
    };
    assert_eq!(
        frame.css_transform(),
        "translate(-50%, -50%) translateX(1.5px) translateY(-20px) scale(0.5)"
    );
}

#[test]
fn field_regenerates_only_on_large_width_changes() {
    let mut field = CloudField::new(CloudConfig::default(), 1_200.0);
    let before = field.sprites.clone();

    assert!(!field.needs_regeneration(1_299.0));
    assert!(!field.needs_regeneration(1_101.0));
    assert!(!field.resize(1_250.0));
    assert_eq!(field.generated_width, 1_200.0);
    assert_eq!(field.sprites, before);

    assert!(field.needs_regeneration(1_100.0));
    assert!(field.resize(1_300.0));
    assert_eq!(field.generated_width, 1_300.0);

    // Measured from the last generation, not the initial width.
    assert!(!field.resize(1_380.0));
    assert!(field.resize(1_200.0));
}
