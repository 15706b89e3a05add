// Host-side tests for the load/reveal state of decorative elements.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod visibility {
        include!("../src/core/visibility.rs");
    }
}

use site::visibility::*;

#[test]
fn reveal_happens_once() {
    let mut v = Visibility::default();
    assert!(!v.is_visible());
    assert!(v.reveal(Reveal::TimeoutFallback));
    assert!(!v.reveal(Reveal::AssetLoaded));
    assert_eq!(v, Visibility::Visible(Reveal::TimeoutFallback));
}

#[test]
fn fade_gate_holds_opacity_during_fade_in() {
    let mut gate = FadeGate::default();
    assert!(!gate.drives_transform());
    assert!(!gate.drives_opacity());

    assert!(gate.begin_fade(Reveal::AssetLoaded));
    assert!(gate.drives_transform());
    assert!(!gate.drives_opacity());

    gate.finish_fade();
    assert!(gate.drives_opacity());
}

#[test]
fn fade_cannot_finish_before_reveal() {
    let mut gate = FadeGate::default();
    gate.finish_fade();
    assert!(!gate.drives_opacity());
    assert!(!gate.drives_transform());
}

#[test]
fn immediate_reveal_hands_opacity_to_scroll() {
    let mut gate = FadeGate::default();
    assert!(gate.reveal_immediately(Reveal::AssetLoaded));
    assert!(gate.drives_opacity());
    assert!(gate.drives_transform());
}

#[test]
fn late_timeout_does_not_restart_fade() {
    let mut gate = FadeGate::default();
    gate.begin_fade(Reveal::AssetLoaded);
    gate.finish_fade();
    assert!(!gate.begin_fade(Reveal::TimeoutFallback));
    assert!(gate.drives_opacity());
    assert!(gate.drives_transform());
}

#[test]
fn grain_settles_on_first_event() {
    let mut load = GrainLoad::default();
    assert_eq!(load.settle(GrainEvent::CanPlayThrough), Some(Reveal::AssetLoaded));
    assert_eq!(load.settle(GrainEvent::Timeout), None);

    let mut load = GrainLoad::default();
    assert_eq!(load.settle(GrainEvent::Error), None);
}

#[test]
fn grain_error_after_timeout_still_removes_overlay() {
    let mut load = GrainLoad::default();
    assert_eq!(load.settle(GrainEvent::Timeout), Some(Reveal::TimeoutFallback));
    assert!(load.failed());
    assert!(!load.failed());
    // A removed overlay is never faded in.
    assert!(!load.playable());
    assert!(!load.is_shown());
}

#[test]
fn grain_timeout_does_not_count_as_shown() {
    let mut load = GrainLoad::default();
    load.settle(GrainEvent::Timeout);
    assert!(!load.is_shown());

    // Becoming playable later shows it exactly once.
    assert!(load.playable());
    assert!(load.is_shown());
    assert!(!load.playable());
}
