pub const HIDE_AFTER_PX: f64 = 100.0;
pub const SHOW_WITHIN_PX: f64 = 300.0;
pub const ALWAYS_SHOW_PX: f64 = 10.0;

/// Auto-hide state for the floating social bar.
///
/// Hides when scrolling down past [`HIDE_AFTER_PX`], reappears only when
/// scrolling up inside the top [`SHOW_WITHIN_PX`], and is always shown
/// within [`ALWAYS_SHOW_PX`] of the top.
#[derive(Clone, Copy, Debug, Default)]
pub struct SocialBar {
    last_y: f64,
    hidden: bool,
}

impl SocialBar {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y.max(0.0),
            hidden: false,
        }
    }

    /// Feed the current scroll offset and return whether the bar is hidden.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        if scroll_y > self.last_y && scroll_y > HIDE_AFTER_PX {
            self.hidden = true;
        } else if scroll_y < self.last_y && scroll_y < SHOW_WITHIN_PX {
            self.hidden = false;
        }
        if scroll_y < ALWAYS_SHOW_PX {
            self.hidden = false;
        }
        self.last_y = scroll_y.max(0.0);
        self.hidden
    }
}
