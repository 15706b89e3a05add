// Host-side tests for the gallery track and its ping-pong auto-scroll.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod html {
        include!("../src/core/html.rs");
    }
    pub mod gallery {
        include!("../src/core/gallery.rs");
    }
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use site::gallery::*;

#[test]
fn image_paths_are_one_based() {
    assert_eq!(
        image_paths(2),
        vec![
            "assets/images/gallery/gallery1.jpeg".to_string(),
            "assets/images/gallery/gallery2.jpeg".to_string(),
        ]
    );
    assert!(image_paths(0).is_empty());
}

#[test]
fn track_repeats_one_shuffled_order() {
    let mut rng = StdRng::seed_from_u64(1);
    let track = build_track(5, &mut rng);
    assert_eq!(track.len(), 5 * TRACK_REPEATS);

    let first = &track[..5];
    for chunk in track.chunks(5) {
        assert_eq!(chunk, first);
    }
    let mut sorted = first.to_vec();
    sorted.sort();
    assert_eq!(sorted, image_paths(5));
}

#[test]
fn empty_gallery_builds_empty_track() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(build_track(0, &mut rng).is_empty());
    assert_eq!(render_track(&[], "x"), "");
}

#[test]
fn render_escapes_alt_text() {
    let html = render_track(&["a.jpeg".to_string()], "LYMINA \"live\"");
    assert_eq!(
        html,
        "<div class=\"gallery-item\"><img src=\"a.jpeg\" alt=\"LYMINA &quot;live&quot;\" loading=\"lazy\"></div>"
    );
}

#[test]
fn ping_pong_reverses_at_the_end() {
    let mut pp = PingPong::new(100.0, 0.0);
    pp.set_extent(300.0, 100.0);
    assert_eq!(pp.step(1.0), 100.0);
    assert!(pp.is_forward());
    assert_eq!(pp.step(1.5), 200.0);
    assert!(!pp.is_forward());
    assert_eq!(pp.step(0.5), 150.0);
}

#[test]
fn ping_pong_dwells_before_reversing() {
    let mut pp = PingPong::new(100.0, 0.5);
    pp.set_extent(300.0, 100.0);
    pp.step(2.0);
    assert_eq!(pp.offset(), 200.0);
    assert_eq!(pp.step(0.25), 200.0);
    assert_eq!(pp.step(0.5), 175.0);
}

#[test]
fn ping_pong_turns_again_at_zero() {
    let mut pp = PingPong::new(50.0, 0.0);
    pp.set_extent(150.0, 100.0);
    pp.step(1.0);
    assert!(!pp.is_forward());
    assert_eq!(pp.step(5.0), 0.0);
    assert!(pp.is_forward());
}

#[test]
fn ping_pong_idles_without_overflow() {
    let mut pp = PingPong::new(100.0, 0.0);
    pp.set_extent(80.0, 100.0);
    assert_eq!(pp.step(1.0), 0.0);
    assert_eq!(pp.step(1.0), 0.0);
}

#[test]
fn shrinking_extent_clamps_offset() {
    let mut pp = PingPong::new(100.0, 0.0);
    pp.set_extent(500.0, 100.0);
    pp.step(3.0);
    assert_eq!(pp.offset(), 300.0);
    pp.set_extent(250.0, 100.0);
    assert_eq!(pp.offset(), 150.0);
}
