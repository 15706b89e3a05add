/// Why an element became visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    AssetLoaded,
    TimeoutFallback,
}

/// Load state of a decorative element. `Loading -> Visible` happens at
/// most once per page lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Loading,
    Visible(Reveal),
}

impl Visibility {
    /// Returns `true` only for the call that performs the transition.
    pub fn reveal(&mut self, reason: Reveal) -> bool {
        match self {
            Visibility::Loading => {
                *self = Visibility::Visible(reason);
                true
            }
            Visibility::Visible(_) => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible(_))
    }
}

/// Tracks whether scroll updates may drive an element's opacity.
///
/// While the load fade-in plays, the transition owns opacity and scroll
/// handlers must leave it alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FadeGate {
    visibility: Visibility,
    fade_complete: bool,
}

impl FadeGate {
    /// Asset is ready; the fade-in starts now.
    pub fn begin_fade(&mut self, reason: Reveal) -> bool {
        self.visibility.reveal(reason)
    }

    /// Asset is ready and the fade-in is skipped.
    pub fn reveal_immediately(&mut self, reason: Reveal) -> bool {
        let changed = self.visibility.reveal(reason);
        self.fade_complete = true;
        changed
    }

    pub fn finish_fade(&mut self) {
        if self.visibility.is_visible() {
            self.fade_complete = true;
        }
    }

    pub fn drives_opacity(&self) -> bool {
        self.visibility.is_visible() && self.fade_complete
    }

    pub fn drives_transform(&self) -> bool {
        self.visibility.is_visible()
    }
}

/// Browser events that end the grain overlay's load race.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrainEvent {
    CanPlayThrough,
    Error,
    Timeout,
}

/// Load state of the grain overlay.
///
/// The first event settles initialization. An error removes the overlay
/// whenever it arrives, even after the timeout already settled, and the
/// overlay only counts as shown once it actually became playable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrainLoad {
    settled: bool,
    shown: bool,
    removed: bool,
}

impl GrainLoad {
    /// Feed the first event of the race. Returns the reveal reason for the
    /// initialization sequence, or `None` when the video failed first.
    pub fn settle(&mut self, event: GrainEvent) -> Option<Reveal> {
        if self.settled {
            return None;
        }
        self.settled = true;
        match event {
            GrainEvent::CanPlayThrough => Some(Reveal::AssetLoaded),
            GrainEvent::Timeout => Some(Reveal::TimeoutFallback),
            GrainEvent::Error => None,
        }
    }

    /// Video is playable. Returns `true` when its opacity should be raised.
    pub fn playable(&mut self) -> bool {
        if self.removed || self.shown {
            return false;
        }
        self.shown = true;
        true
    }

    /// Video failed. Returns `true` when the element should be removed.
    pub fn failed(&mut self) -> bool {
        if self.removed {
            return false;
        }
        self.removed = true;
        self.shown = false;
        true
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}
