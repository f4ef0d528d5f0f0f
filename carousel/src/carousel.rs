//! The carousel engine.
//!
//! [`Carousel`] wires the slide ring, navigation scheduler, gesture
//! interpreter and selection state together behind one command surface.
//! Every command is total: invalid input is logged and ignored.

use std::sync::Arc;

use log::{debug, info, trace};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::{CarouselConfig, ConfigError};
use crate::gesture::{GestureOutcome, PointerEvent, PointerGestureInterpreter};
use crate::host::{Clock, SystemClock, TrackHost};
use crate::item::CarouselItem;
use crate::keyboard::{Key, KeyCommand, KeyScope, KeyboardListener};
use crate::ring::{Slide, SlideRing, TrackState};
use crate::scheduler::{CommitHandle, Direction, NavigationScheduler};
use crate::selection::{SelectionChange, SelectionState};
use crate::selector::{ThumbnailSelector, visible_thumbnail_indexes};

/// An endlessly looping carousel over a list of items.
pub struct Carousel<T, H> {
    config: CarouselConfig,
    items: Vec<Arc<T>>,
    track: TrackState<T>,
    scheduler: NavigationScheduler,
    gestures: PointerGestureInterpreter,
    selection: SelectionState<T>,
    keyboard: KeyboardListener,
    host: H,
    clock: Box<dyn Clock>,
    torn_down: bool,
}

impl<T, H> std::fmt::Debug for Carousel<T, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("items", &self.items.len())
            .field("ring", &self.track.ring().item_indexes())
            .field("current_index", &self.track.current_index())
            .field("selected", &self.selection.selected())
            .field("animating", &self.scheduler.is_animating())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl<T: CarouselItem, H: TrackHost> Carousel<T, H> {
    /// Create a carousel with default configuration and the system clock.
    pub fn new(items: Vec<T>, host: H) -> Self {
        Self::build(items, host, CarouselConfig::default(), Box::new(SystemClock::new()))
    }

    /// Create a carousel with a validated configuration and a custom clock.
    pub fn with_config(
        items: Vec<T>,
        host: H,
        config: CarouselConfig,
        clock: impl Clock + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(items, host, config, Box::new(clock)))
    }

    fn build(items: Vec<T>, host: H, config: CarouselConfig, clock: Box<dyn Clock>) -> Self {
        let mut keyboard = KeyboardListener::new();
        keyboard.subscribe();

        let mut carousel = Self {
            gestures: PointerGestureInterpreter::new(config.gestures.clone()),
            config,
            items: Vec::new(),
            track: TrackState::default(),
            scheduler: NavigationScheduler::new(),
            selection: SelectionState::new(),
            keyboard,
            host,
            clock,
            torn_down: false,
        };
        carousel.set_items(items);
        carousel
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Replace the item list.
    ///
    /// Pending navigation is discarded, the ring is rebuilt without animation
    /// so the previously viewed item stays in view (clamped if the list
    /// shrank). A selection that fell out of range is cleared; one still in
    /// range is re-sent to subscribers with its new item.
    pub fn set_items(&mut self, items: Vec<T>) {
        if self.torn_down {
            return;
        }
        let previous_item = self.track.current_item_index();
        self.items = items.into_iter().map(Arc::new).collect();

        self.scheduler.cancel();
        self.track.rebuild(&mut self.host, &self.items, previous_item);
        self.selection.reconcile(&self.items);

        debug!(
            "Rebuilt ring for {} items, viewing item {:?} at position {}",
            self.items.len(),
            self.track.current_item_index(),
            self.track.current_index()
        );
    }

    pub fn items(&self) -> &[Arc<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub fn next(&mut self) {
        self.navigate(Direction::Forward);
    }

    pub fn prev(&mut self) {
        self.navigate(Direction::Backward);
    }

    fn navigate(&mut self, direction: Direction) {
        if self.torn_down {
            return;
        }
        self.scheduler.enqueue(direction, &mut self.track, &mut self.host);
    }

    /// Navigate to a ring position.
    pub fn go_to(&mut self, position: usize) {
        if self.torn_down {
            return;
        }
        self.scheduler.go_to(position, &mut self.track, &mut self.host);
    }

    /// Navigate to a logical item.
    pub fn go_to_item(&mut self, item_index: usize) {
        if self.torn_down {
            return;
        }
        self.scheduler
            .go_to_item(item_index, &mut self.track, &mut self.host);
    }

    /// Commit the prepared step, if any. Call once per host loop turn.
    pub fn run_pending(&mut self) -> bool {
        self.scheduler.run_pending(&mut self.track, &mut self.host)
    }

    /// Run turns until nothing is pending. Returns the number of commits.
    pub fn settle(&mut self) -> usize {
        let mut commits = 0;
        while self.run_pending() {
            commits += 1;
        }
        commits
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    pub fn pending_commit(&self) -> Option<CommitHandle> {
        self.scheduler.pending_handle()
    }

    /// Steps waiting behind the one in flight.
    pub fn queued_steps(&self) -> usize {
        self.scheduler.queued()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select a logical item. Out-of-range indices are ignored.
    pub fn select(&mut self, item_index: usize) {
        if self.torn_down {
            return;
        }
        self.selection.select(item_index, &self.items);
    }

    /// Receive a [`SelectionChange`] for every selection.
    pub fn subscribe(&mut self) -> UnboundedReceiver<SelectionChange<T>> {
        self.selection.subscribe()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn selection_pulse(&self) -> u64 {
        self.selection.pulse()
    }

    /// The selected item, if the selection is valid.
    pub fn selection(&self) -> Option<SelectionChange<T>> {
        let index = self.selection.selected()?;
        let item = self.items.get(index)?;
        Some(SelectionChange {
            index,
            item: Arc::clone(item),
        })
    }

    pub fn is_selected(&self, item_index: usize) -> bool {
        self.selection.is_selected(item_index)
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    pub fn pointer_down(&mut self, event: PointerEvent) {
        if self.torn_down {
            return;
        }
        let now = self.clock.now();
        if let Some(replaced) = self
            .gestures
            .pointer_down(event, now, self.track.current_index())
        {
            self.host.release_pointer(replaced);
        }
        self.host.capture_pointer(event.pointer_id);
    }

    pub fn pointer_up(&mut self, event: PointerEvent) {
        if self.torn_down || self.gestures.active_pointer() != Some(event.pointer_id) {
            return;
        }
        let now = self.clock.now();
        let outcome = self.gestures.pointer_up(event, now, self.host.width());
        self.host.release_pointer(event.pointer_id);

        match outcome {
            GestureOutcome::Navigate(direction) => self.navigate(direction),
            GestureOutcome::Select { ring_position } => {
                if let Some(item_index) = self.track.ring().item_at(ring_position) {
                    self.select(item_index);
                }
            }
            GestureOutcome::None => {}
        }
    }

    pub fn pointer_cancel(&mut self) {
        if let Some(pointer_id) = self.gestures.pointer_cancel() {
            trace!("Pointer {} cancelled", pointer_id);
            self.host.release_pointer(pointer_id);
        }
    }

    /// Handle a key. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: Key, scope: KeyScope) -> bool {
        let Some(command) = self.keyboard.resolve(key, scope) else {
            return false;
        };
        match command {
            KeyCommand::Next => self.next(),
            KeyCommand::Prev => self.prev(),
            KeyCommand::SelectCurrent => {
                if let Some(item_index) = self.current_item_index() {
                    self.select(item_index);
                }
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Thumbnails
    // -------------------------------------------------------------------------

    pub fn selector(&self) -> ThumbnailSelector<'_, T> {
        ThumbnailSelector::new(
            &self.items,
            self.current_item_index(),
            self.selection.selected(),
            self.selection.pulse(),
        )
    }

    /// Follow a target produced by the [`ThumbnailSelector`].
    pub fn navigate_to(&mut self, target: Option<usize>) {
        if let Some(item_index) = target {
            self.go_to_item(item_index);
        }
    }

    pub fn visible_thumbnail_indexes(&self) -> Vec<usize> {
        visible_thumbnail_indexes(self.items.len(), self.current_item_index())
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    pub fn current_index(&self) -> usize {
        self.track.current_index()
    }

    pub fn current_item_index(&self) -> Option<usize> {
        self.track.current_item_index()
    }

    pub fn is_current_item(&self, item_index: usize) -> bool {
        self.current_item_index() == Some(item_index)
    }

    pub fn ring(&self) -> &SlideRing<T> {
        self.track.ring()
    }

    pub fn slides(&self) -> impl Iterator<Item = &Slide<T>> {
        self.track.ring().iter()
    }

    pub fn is_transition_enabled(&self) -> bool {
        self.track.transition_enabled()
    }

    /// Horizontal track offset, as a percentage of one slide width.
    pub fn track_offset_percent(&self) -> i64 {
        -(self.track.current_index() as i64) * 100
    }

    /// Id of the slide in view, for `aria-activedescendant`.
    pub fn active_descendant_id(&self) -> Option<&str> {
        self.track.current_slide().map(|slide| slide.id.as_str())
    }

    pub fn aria_label(&self) -> Option<&str> {
        self.config.aria_label.as_deref()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Release everything the carousel holds on to.
    ///
    /// The pending commit and queue are dropped (the last committed position
    /// stands), the keyboard listener is removed and subscribers are closed.
    /// Every later command is ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.scheduler.cancel();
        self.pointer_cancel();
        self.keyboard.unsubscribe();
        self.selection.close();
        self.torn_down = true;
        info!("Carousel torn down at position {}", self.track.current_index());
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl<T, H> Drop for Carousel<T, H> {
    fn drop(&mut self) {
        self.scheduler.cancel();
        self.selection.close();
    }
}
