use super::html::escape;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of times the shuffled image list is repeated so a CSS marquee
/// never shows a gap while looping.
pub const TRACK_REPEATS: usize = 3;

pub fn image_paths(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("assets/images/gallery/gallery{}.jpeg", i))
        .collect()
}

/// Shuffle `count` gallery images and repeat them [`TRACK_REPEATS`] times.
pub fn build_track<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    let mut paths = image_paths(count);
    paths.shuffle(rng);
    let mut track = Vec::with_capacity(paths.len() * TRACK_REPEATS);
    for _ in 0..TRACK_REPEATS {
        track.extend(paths.iter().cloned());
    }
    track
}

pub fn render_track(paths: &[String], alt: &str) -> String {
    let alt = escape(alt);
    paths
        .iter()
        .map(|path| {
            format!(
                "<div class=\"gallery-item\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>",
                escape(path),
                alt
            )
        })
        .collect()
}

/// Back-and-forth horizontal auto-scroll.
///
/// `offset` travels between 0 and `max_offset` at `speed` px/s, waits
/// `dwell_sec` at each end, then reverses.
#[derive(Clone, Debug)]
pub struct PingPong {
    offset: f64,
    max_offset: f64,
    speed: f64,
    dwell_sec: f64,
    dwell_left: f64,
    forward: bool,
}

impl PingPong {
    pub fn new(speed: f64, dwell_sec: f64) -> Self {
        Self {
            offset: 0.0,
            max_offset: 0.0,
            speed: speed.abs(),
            dwell_sec: dwell_sec.max(0.0),
            dwell_left: 0.0,
            forward: true,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Update the scrollable extent from content and viewport widths.
    pub fn set_extent(&mut self, content_width: f64, viewport_width: f64) {
        self.max_offset = (content_width - viewport_width).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Advance by `dt_sec` and return the new offset.
    pub fn step(&mut self, dt_sec: f64) -> f64 {
        if self.max_offset <= 0.0 {
            self.offset = 0.0;
            return self.offset;
        }
        let mut remaining = dt_sec.max(0.0);
        if self.dwell_left > 0.0 {
            let waited = remaining.min(self.dwell_left);
            self.dwell_left -= waited;
            remaining -= waited;
        }
        if remaining <= 0.0 {
            return self.offset;
        }
        let delta = self.speed * remaining;
        if self.forward {
            self.offset += delta;
            if self.offset >= self.max_offset {
                self.offset = self.max_offset;
                self.turn();
            }
        } else {
            self.offset -= delta;
            if self.offset <= 0.0 {
                self.offset = 0.0;
                self.turn();
            }
        }
        self.offset
    }

    fn turn(&mut self) {
        self.forward = !self.forward;
        self.dwell_left = self.dwell_sec;
    }
}
