//! Turning one pointer's down/up stream into swipe, tap or long-press.

use std::time::Duration;

use log::trace;

use crate::config::GestureConfig;
use crate::scheduler::Direction;

/// Kind of device behind a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Pen,
    Touch,
    /// Anything else. Never selects.
    Other,
}

/// A pointer event on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u64,
    /// Horizontal position in pixels.
    pub client_x: f32,
    pub pointer_type: PointerType,
}

impl PointerEvent {
    pub fn new(pointer_id: u64, client_x: f32, pointer_type: PointerType) -> Self {
        Self {
            pointer_id,
            client_x,
            pointer_type,
        }
    }

    pub fn mouse(client_x: f32) -> Self {
        Self::new(1, client_x, PointerType::Mouse)
    }

    pub fn touch(client_x: f32) -> Self {
        Self::new(1, client_x, PointerType::Touch)
    }

    pub fn pen(client_x: f32) -> Self {
        Self::new(1, client_x, PointerType::Pen)
    }
}

/// What a finished gesture asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing: too short, cancelled, or an unknown device.
    None,
    /// A swipe. Dragging left moves forward.
    Navigate(Direction),
    /// A tap or long-press on the slide that was in view at pointer-down.
    Select { ring_position: usize },
}

/// State held while a pointer is down.
#[derive(Debug, Clone, Copy)]
struct ActiveGesture {
    pointer_id: u64,
    start_x: f32,
    started_at: Duration,
    initial_ring_index: usize,
    navigation_triggered: bool,
}

/// Single-pointer gesture state machine: idle → down → idle.
#[derive(Debug, Default)]
pub struct PointerGestureInterpreter {
    config: GestureConfig,
    active: Option<ActiveGesture>,
}

impl PointerGestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// True between pointer-down and pointer-up/cancel.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Pointer currently captured, if any.
    pub fn active_pointer(&self) -> Option<u64> {
        self.active.map(|gesture| gesture.pointer_id)
    }

    /// Start tracking a pointer. A later down replaces an earlier one.
    ///
    /// Returns the pointer that was replaced, so its capture can be released.
    pub fn pointer_down(
        &mut self,
        event: PointerEvent,
        now: Duration,
        current_index: usize,
    ) -> Option<u64> {
        let replaced = self
            .active
            .map(|gesture| gesture.pointer_id)
            .filter(|&id| id != event.pointer_id);
        self.active = Some(ActiveGesture {
            pointer_id: event.pointer_id,
            start_x: event.client_x,
            started_at: now,
            initial_ring_index: current_index,
            navigation_triggered: false,
        });
        trace!(
            "Pointer {} down at x={} on position {}",
            event.pointer_id, event.client_x, current_index
        );
        replaced
    }

    /// Finish the gesture and classify it.
    pub fn pointer_up(
        &mut self,
        event: PointerEvent,
        now: Duration,
        track_width: f32,
    ) -> GestureOutcome {
        let Some(mut gesture) = self.active else {
            return GestureOutcome::None;
        };
        if gesture.pointer_id != event.pointer_id {
            trace!("Ignoring up from uncaptured pointer {}", event.pointer_id);
            return GestureOutcome::None;
        }
        self.active = None;

        let dx = event.client_x - gesture.start_x;
        let threshold = self.config.swipe_threshold(track_width);

        let mut outcome = GestureOutcome::None;
        if dx <= -threshold {
            outcome = GestureOutcome::Navigate(Direction::Forward);
            gesture.navigation_triggered = true;
        } else if dx >= threshold {
            outcome = GestureOutcome::Navigate(Direction::Backward);
            gesture.navigation_triggered = true;
        }

        if gesture.navigation_triggered {
            trace!("Pointer {} swiped dx={} (threshold {})", event.pointer_id, dx, threshold);
            return outcome;
        }

        let elapsed = now.saturating_sub(gesture.started_at);
        let moved_far = dx.abs() > self.config.move_tolerance_px;
        let selects = match event.pointer_type {
            PointerType::Touch => !moved_far && elapsed >= self.config.long_press_duration(),
            PointerType::Mouse | PointerType::Pen => !moved_far,
            PointerType::Other => false,
        };

        trace!(
            "Pointer {} released: dx={}, elapsed={:?}, selects={}",
            event.pointer_id, dx, elapsed, selects
        );

        if selects {
            GestureOutcome::Select {
                ring_position: gesture.initial_ring_index,
            }
        } else {
            GestureOutcome::None
        }
    }

    /// Abandon the gesture. Returns the pointer that was being tracked.
    pub fn pointer_cancel(&mut self) -> Option<u64> {
        self.active.take().map(|gesture| gesture.pointer_id)
    }
}
