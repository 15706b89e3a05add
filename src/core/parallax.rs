// Scroll-position to visual-property mapping for the hero section.
//
// Every function here is a pure function of [`ScrollState`] and an
// immutable config. The web layer turns the returned frames into inline
// style strings.

use super::constants::*;
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

/// Scroll offset and viewport size, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl ScrollState {
    /// Negative offsets (rubber-band overscroll) are treated as 0.
    pub fn new(scroll_y: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y: scroll_y.max(0.0),
            viewport_width,
            viewport_height,
        }
    }
}

/// Ease-out from `start` to `end` as `scroll_y` goes from 0 to `threshold`.
///
/// Follows a quarter sine, so the approach slows near `end`. Offsets past
/// `threshold` return exactly `end`.
pub fn interpolate(start: f64, end: f64, scroll_y: f64, threshold: f64) -> f64 {
    let progress = (scroll_y / threshold).min(1.0);
    if progress >= 1.0 {
        return end;
    }
    start + (end - start) * (progress * FRAC_PI_2).sin()
}

#[derive(Clone, Debug)]
pub struct SunConfig {
    pub initial_scale: f64,
    pub max_scale: f64,
    pub wobble_amplitude_x: f64,
    pub wobble_speed_x: f64,
    pub wobble_amplitude_y: f64,
    pub wobble_speed_y: f64,
    pub up_movement: f64,
    pub scale_threshold: f64,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            initial_scale: SUN_INITIAL_SCALE,
            max_scale: SUN_MAX_SCALE,
            wobble_amplitude_x: SUN_WOBBLE_AMPLITUDE_X,
            wobble_speed_x: SUN_WOBBLE_SPEED_X,
            wobble_amplitude_y: SUN_WOBBLE_AMPLITUDE_Y,
            wobble_speed_y: SUN_WOBBLE_SPEED_Y,
            up_movement: SUN_UP_MOVEMENT,
            scale_threshold: SCALE_THRESHOLD_PX,
        }
    }
}

/// Resolved sun placement for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunFrame {
    pub translate: DVec2,
    pub scale: f64,
}

impl SunConfig {
    pub fn scale_at(&self, scroll_y: f64) -> f64 {
        interpolate(
            self.initial_scale,
            self.max_scale,
            scroll_y,
            self.scale_threshold,
        )
        .min(self.max_scale)
    }

    pub fn frame(&self, state: &ScrollState) -> SunFrame {
        let y = state.scroll_y;
        let wobble_x = (y / self.wobble_speed_x).sin() * self.wobble_amplitude_x * state.viewport_width;
        let wobble_y = (y / self.wobble_speed_y).cos() * self.wobble_amplitude_y * state.viewport_width;
        let drift = (-500.0 / (y + 100.0) + 5.0) * self.up_movement * state.viewport_height;
        SunFrame {
            translate: DVec2::new(wobble_x, wobble_y + drift),
            scale: self.scale_at(y),
        }
    }
}

impl SunFrame {
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

#[derive(Clone, Debug)]
pub struct LogoConfig {
    pub start_x: f64,
    pub start_y: f64,
    pub start_scale: f64,
    pub end_scale: f64,
    pub scroll_factor: f64,
    pub opacity_start: f64,
    pub opacity_end: f64,
    pub threshold: f64,
    pub skip_fade_scroll: f64,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            start_x: LOGO_START_X,
            start_y: LOGO_START_Y,
            start_scale: LOGO_START_SCALE,
            end_scale: LOGO_END_SCALE,
            scroll_factor: LOGO_SCROLL_FACTOR,
            opacity_start: LOGO_OPACITY_START,
            opacity_end: LOGO_OPACITY_END,
            threshold: SCALE_THRESHOLD_PX,
            skip_fade_scroll: LOGO_SKIP_FADE_SCROLL_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoFrame {
    pub translate: DVec2,
    pub scale: f64,
    pub opacity: f64,
}

impl LogoConfig {
    pub fn opacity_at(&self, scroll_y: f64) -> f64 {
        interpolate(self.opacity_start, self.opacity_end, scroll_y, self.threshold)
            .max(self.opacity_end)
    }

    pub fn scale_at(&self, scroll_y: f64) -> f64 {
        interpolate(self.start_scale, self.end_scale, scroll_y, self.threshold).min(self.end_scale)
    }

    /// Whether the logo should appear at its scroll-driven opacity right away
    /// instead of playing the load fade-in.
    pub fn skips_fade_in(&self, scroll_y: f64) -> bool {
        scroll_y > self.skip_fade_scroll
    }

    pub fn frame(&self, state: &ScrollState) -> LogoFrame {
        let y = state.scroll_y;
        LogoFrame {
            translate: DVec2::new(
                self.start_x * state.viewport_width,
                self.start_y * state.viewport_height - y * self.scroll_factor,
            ),
            scale: self.scale_at(y),
            opacity: self.opacity_at(y),
        }
    }
}

impl LogoFrame {
    pub fn css_transform(&self) -> String {
        format!(
            "translateY({}px) translateX({}px) scale({})",
            self.translate.y, self.translate.x, self.scale
        )
    }
}

/// Film-grain video overlay. Has no scroll dependence.
#[derive(Clone, Debug)]
pub struct GrainConfig {
    pub target_opacity: f64,
    pub playback_rate: f64,
    pub fade_in_sec: f64,
}

impl Default for GrainConfig {
    fn default() -> Self {
        Self {
            target_opacity: GRAIN_TARGET_OPACITY,
            playback_rate: GRAIN_PLAYBACK_RATE,
            fade_in_sec: GRAIN_FADE_IN_SEC,
        }
    }
}

impl GrainConfig {
    /// Inline style for the overlay element before it has loaded.
    pub fn css_text(&self) -> String {
        format!(
            "position:fixed;top:50%;left:50%;transform:translate(-50%,-50%);\
             min-width:100%;min-height:100%;width:auto;height:auto;object-fit:cover;\
             pointer-events:none;z-index:-1;opacity:0;mix-blend-mode:screen;\
             transition:opacity {}s ease-in",
            self.fade_in_sec
        )
    }
}

/// CSS `transition` value for an opacity fade of `seconds`.
pub fn opacity_transition(seconds: f64) -> String {
    format!("opacity {}s ease-in", seconds)
}
