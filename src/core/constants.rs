// Shared tuning constants for the scroll-driven effects.

// Easing
pub const SCALE_THRESHOLD_PX: f64 = 500.0; // scroll distance over which sun/logo reach their end values

// Sun
pub const SUN_INITIAL_SCALE: f64 = 2.5;
pub const SUN_MAX_SCALE: f64 = 3.5;
pub const SUN_WOBBLE_AMPLITUDE_X: f64 = 0.01; // fraction of viewport width
pub const SUN_WOBBLE_SPEED_X: f64 = 1000.0; // px of scroll per radian
pub const SUN_WOBBLE_AMPLITUDE_Y: f64 = 0.03;
pub const SUN_WOBBLE_SPEED_Y: f64 = 650.0;
pub const SUN_UP_MOVEMENT: f64 = 0.02; // fraction of viewport height

// Band logo
pub const LOGO_START_X: f64 = 0.005; // fraction of viewport width
pub const LOGO_START_Y: f64 = 0.15; // fraction of viewport height
pub const LOGO_START_SCALE: f64 = 1.7;
pub const LOGO_END_SCALE: f64 = 2.5;
pub const LOGO_SCROLL_FACTOR: f64 = 0.5;
pub const LOGO_OPACITY_START: f64 = 0.95;
pub const LOGO_OPACITY_END: f64 = 0.0;
pub const LOGO_SKIP_FADE_SCROLL_PX: f64 = 100.0; // loaded below this offset: no fade-in animation

// Background color
pub const BG_CHANGE_THRESHOLD_PX: f64 = 300.0;
pub const BG_TRANSITION_SPAN_PX: f64 = 500.0;

// Clouds
pub const CLOUD_SEED: u64 = 38;
pub const CLOUD_BASE_SIZE: f64 = 0.02; // relative to viewport width
pub const CLOUD_SIZE_VARIATION: f64 = 0.0005;
pub const CLOUD_DENSITY: f64 = 0.001; // clouds per px of viewport width
pub const CLOUD_MIN_COUNT: usize = 5;
pub const CLOUD_MIN_DISTANCE: f64 = 15.0; // viewport %
pub const CLOUD_SUN_EXCLUSION_RADIUS: f64 = 22.0; // viewport %
pub const CLOUD_TOP_MARGIN: f64 = 10.0; // viewport %
pub const CLOUD_PLACEMENT_ATTEMPTS: usize = 40;
pub const CLOUD_SPEED: f64 = 0.0015; // radians per ms of animation time
pub const CLOUD_WOBBLE_SIZE_X: f64 = 3.0;
pub const CLOUD_VARIANTS: u32 = 3;
pub const CLOUD_FADE_SPAN_PX: f64 = 300.0;
pub const CLOUD_SIZING_WIDTH_CAP: f64 = 1400.0;
pub const CLOUD_REGENERATE_WIDTH_DELTA: f64 = 100.0;

// Grain overlay
pub const GRAIN_TARGET_OPACITY: f64 = 0.2;
pub const GRAIN_PLAYBACK_RATE: f64 = 0.24;

// Fade-in durations (seconds)
pub const CLOUDS_FADE_IN_SEC: f64 = 2.0;
pub const SUN_FADE_IN_SEC: f64 = 1.0;
pub const LOGO_FADE_IN_SEC: f64 = 2.0;
pub const GRAIN_FADE_IN_SEC: f64 = 0.4;
