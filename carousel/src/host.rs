//! Seams between the engine and its surroundings: the rendered track and time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// The rendered track the carousel slides along.
///
/// The engine never lays anything out itself. It tells the host when slide
/// transitions must be suppressed and when pending style changes have to be
/// flushed, so that ring rotations stay invisible.
pub trait TrackHost {
    /// Current track width in pixels.
    fn width(&self) -> f32;

    /// Enable or disable the slide transition.
    fn set_transition(&mut self, _enabled: bool) {}

    /// Synchronously apply pending layout/style changes.
    fn force_layout(&mut self) {}

    /// Route all further events of this pointer to the track.
    fn capture_pointer(&mut self, _pointer_id: u64) {}

    /// Undo [`TrackHost::capture_pointer`].
    fn release_pointer(&mut self, _pointer_id: u64) {}
}

/// A headless track with a fixed width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTrack {
    pub width: f32,
}

impl FixedTrack {
    pub fn new(width: f32) -> Self {
        Self { width }
    }
}

impl TrackHost for FixedTrack {
    fn width(&self) -> f32 {
        self.width
    }
}

/// Monotonic time source for gesture timing.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
