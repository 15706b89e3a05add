// Seeded cloud sprite field.
//
// Sprites are placed once per page load (or after a large viewport width
// change) and never move in layout; only their transform follows scroll
// and animation time.

use super::constants::*;
use super::parallax::ScrollState;
use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

#[derive(Clone, Debug)]
pub struct CloudConfig {
    pub seed: u64,
    pub base_size: f64,
    pub size_variation: f64,
    pub density: f64,
    pub min_count: usize,
    pub min_distance: f64,
    pub sun_center: DVec2,
    pub sun_exclusion_radius: f64,
    pub top_margin: f64,
    pub placement_attempts: usize,
    pub speed: f64,
    pub wobble_size_x: f64,
    pub variants: u32,
    pub fade_span: f64,
    pub sizing_width_cap: f64,
    pub regenerate_width_delta: f64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            seed: CLOUD_SEED,
            base_size: CLOUD_BASE_SIZE,
            size_variation: CLOUD_SIZE_VARIATION,
            density: CLOUD_DENSITY,
            min_count: CLOUD_MIN_COUNT,
            min_distance: CLOUD_MIN_DISTANCE,
            sun_center: DVec2::new(50.0, 50.0),
            sun_exclusion_radius: CLOUD_SUN_EXCLUSION_RADIUS,
            top_margin: CLOUD_TOP_MARGIN,
            placement_attempts: CLOUD_PLACEMENT_ATTEMPTS,
            speed: CLOUD_SPEED,
            wobble_size_x: CLOUD_WOBBLE_SIZE_X,
            variants: CLOUD_VARIANTS,
            fade_span: CLOUD_FADE_SPAN_PX,
            sizing_width_cap: CLOUD_SIZING_WIDTH_CAP,
            regenerate_width_delta: CLOUD_REGENERATE_WIDTH_DELTA,
        }
    }
}

/// One placed cloud. `position` is in viewport percent (0..100).
#[derive(Clone, Debug, PartialEq)]
pub struct CloudSprite {
    pub position: DVec2,
    pub size: f64,
    pub parallax: f64,
    pub wobble_amplitude: f64,
    pub wobble_phase: f64,
    /// 1-based texture index.
    pub variant: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudFrame {
    pub offset: DVec2,
    pub scale: f64,
    pub opacity: f64,
}

impl CloudConfig {
    pub fn count_for_width(&self, viewport_width: f64) -> usize {
        ((viewport_width * self.density).floor().max(0.0) as usize).max(self.min_count)
    }

    /// Place sprites for a viewport of the given width.
    ///
    /// Each candidate is re-rolled (up to `placement_attempts` times) while it
    /// sits within `min_distance` of the sun center or of an earlier sprite;
    /// candidates still inside the sun exclusion radius are dropped, so the
    /// result may hold fewer sprites than `count_for_width`.
    pub fn generate(&self, viewport_width: f64) -> Vec<CloudSprite> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let count = self.count_for_width(viewport_width);
        let mut sprites: Vec<CloudSprite> = Vec::with_capacity(count);

        for _ in 0..count {
            let mut candidate;
            let mut attempts = 0;
            loop {
                candidate = DVec2::new(
                    rng.gen::<f64>() * 100.0,
                    self.top_margin + rng.gen::<f64>() * (100.0 - self.top_margin),
                );
                attempts += 1;
                let crowded = candidate.distance(self.sun_center) < self.min_distance
                    || sprites
                        .iter()
                        .any(|s| candidate.distance(s.position) < self.min_distance);
                if attempts >= self.placement_attempts || !crowded {
                    break;
                }
            }

            if candidate.distance(self.sun_center) < self.sun_exclusion_radius {
                continue;
            }

            let variant = 1 + (rng.gen::<f64>() * self.variants as f64) as u32;
            let size = self.base_size + (rng.gen::<f64>() - 0.5) * 2.0 * self.size_variation;
            let parallax = 0.15 + rng.gen::<f64>() * 0.2;
            let wobble_amplitude = (0.8 + rng.gen::<f64>() * 1.2) * self.wobble_size_x;
            let wobble_phase = rng.gen::<f64>() * TAU;
            sprites.push(CloudSprite {
                position: candidate,
                size,
                parallax,
                wobble_amplitude,
                wobble_phase,
                variant: variant.min(self.variants),
            });
        }
        sprites
    }

    /// Layer opacity: fades out linearly over the first `fade_span` px.
    pub fn opacity_at(&self, scroll_y: f64) -> f64 {
        (1.0 - scroll_y / self.fade_span).max(0.0)
    }
}

impl CloudSprite {
    pub fn frame(&self, config: &CloudConfig, state: &ScrollState, time_ms: f64) -> CloudFrame {
        let wobble = (time_ms * config.speed + self.wobble_phase).sin() * self.wobble_amplitude;
        let sizing_width = state.viewport_width.min(config.sizing_width_cap);
        CloudFrame {
            offset: DVec2::new(wobble, -state.scroll_y * self.parallax),
            scale: self.size * sizing_width * 0.01,
            opacity: config.opacity_at(state.scroll_y),
        }
    }

    /// Static placement style applied once when the sprite element is created.
    pub fn placement_css(&self) -> String {
        format!(
            "top:{}%;left:{}%;transform:translate(-50%,-50%);transform-origin:center;",
            self.position.y, self.position.x
        )
    }
}

impl CloudFrame {
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) translateX({}px) translateY({}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

/// Sprite set plus the viewport width it was generated for.
#[derive(Clone, Debug)]
pub struct CloudField {
    pub config: CloudConfig,
    pub sprites: Vec<CloudSprite>,
    pub generated_width: f64,
}

impl CloudField {
    pub fn new(config: CloudConfig, viewport_width: f64) -> Self {
        let sprites = config.generate(viewport_width);
        Self {
            config,
            sprites,
            generated_width: viewport_width,
        }
    }

    pub fn needs_regeneration(&self, viewport_width: f64) -> bool {
        (viewport_width - self.generated_width).abs() >= self.config.regenerate_width_delta
    }

    /// Regenerate if the width moved far enough. Returns whether it did.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        if !self.needs_regeneration(viewport_width) {
            return false;
        }
        self.sprites = self.config.generate(viewport_width);
        self.generated_width = viewport_width;
        true
    }
}
