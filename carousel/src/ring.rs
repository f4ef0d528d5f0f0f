//! The slide ring: a rotation of the item list used to fake an endless loop.
//!
//! A carousel animates by sliding the track one slot left or right, so there
//! always has to be a real, rendered neighbour on both sides of the slide in
//! view. Instead of duplicating slides, the ring keeps exactly one slide per
//! item and rotates the sequence whenever the view reaches either end.

use std::collections::VecDeque;
use std::sync::Arc;

use log::trace;

use crate::host::TrackHost;

/// One rendered slot of the ring.
#[derive(Debug)]
pub struct Slide<T> {
    /// Stable id, derived from the logical index.
    pub id: String,
    pub image: Arc<T>,
    /// Position of the item in the caller's list.
    pub item_index: usize,
}

impl<T> Clone for Slide<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            image: Arc::clone(&self.image),
            item_index: self.item_index,
        }
    }
}

/// Ordered slides, one per item.
#[derive(Debug)]
pub struct SlideRing<T> {
    slides: VecDeque<Slide<T>>,
}

impl<T> Default for SlideRing<T> {
    fn default() -> Self {
        Self {
            slides: VecDeque::new(),
        }
    }
}

impl<T> SlideRing<T> {
    /// Build the initial ring.
    ///
    /// With more than one item the last item is moved to the front, so the
    /// first item starts at position 1 with a real predecessor before it.
    pub fn build(items: &[Arc<T>]) -> Self {
        let mut slides: VecDeque<Slide<T>> = items
            .iter()
            .enumerate()
            .map(|(index, image)| Slide {
                id: format!("slide-{index}"),
                image: Arc::clone(image),
                item_index: index,
            })
            .collect();

        if slides.len() > 1 {
            slides.rotate_right(1);
        }

        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Slide<T>> {
        self.slides.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide<T>> {
        self.slides.iter()
    }

    /// Logical indices in ring order.
    pub fn item_indexes(&self) -> Vec<usize> {
        self.slides.iter().map(|slide| slide.item_index).collect()
    }

    /// Logical index of the slide at a ring position.
    pub fn item_at(&self, position: usize) -> Option<usize> {
        self.slides.get(position).map(|slide| slide.item_index)
    }

    /// Ring position of a logical item.
    pub fn position_of(&self, item_index: usize) -> Option<usize> {
        self.slides
            .iter()
            .position(|slide| slide.item_index == item_index)
    }

    /// Position the view rests on after a rebuild.
    pub fn anchor(&self) -> usize {
        if self.slides.len() > 1 { 1 } else { 0 }
    }

    /// Rotate so `previous_item` (clamped to the ring) lands on the anchor.
    ///
    /// Returns the position the view should show, which is always the anchor.
    /// When the item cannot be found the order is left untouched.
    pub fn align(&mut self, previous_item: Option<usize>) -> usize {
        let len = self.slides.len();
        if len == 0 {
            return 0;
        }

        let anchor = self.anchor();
        let desired = previous_item.map_or(0, |item| item.min(len - 1));
        let Some(found) = self.position_of(desired) else {
            return anchor;
        };

        let rotation = normalize_index(found as isize - anchor as isize, len);
        if rotation != 0 {
            trace!("Aligning ring: item {} rotated left by {}", desired, rotation);
            self.slides.rotate_left(rotation);
        }
        anchor
    }

    /// Move the first slide to the end.
    pub fn rotate_forward(&mut self) {
        if self.slides.len() > 1 {
            self.slides.rotate_left(1);
        }
    }

    /// Move the last slide to the front.
    pub fn rotate_backward(&mut self) {
        if self.slides.len() > 1 {
            self.slides.rotate_right(1);
        }
    }
}

/// Wrap a possibly negative index into `0..len`. Returns 0 for an empty range.
pub fn normalize_index(value: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    value.rem_euclid(len as isize) as usize
}

/// What the renderer reads: the ring, the position in view and whether moves
/// between positions are animated.
#[derive(Debug)]
pub struct TrackState<T> {
    pub(crate) ring: SlideRing<T>,
    pub(crate) current_index: usize,
    pub(crate) transition_enabled: bool,
}

impl<T> Default for TrackState<T> {
    fn default() -> Self {
        Self {
            ring: SlideRing::default(),
            current_index: 0,
            transition_enabled: true,
        }
    }
}

impl<T> TrackState<T> {
    pub fn ring(&self) -> &SlideRing<T> {
        &self.ring
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> Option<&Slide<T>> {
        self.ring.get(self.current_index)
    }

    pub fn current_item_index(&self) -> Option<usize> {
        self.current_slide().map(|slide| slide.item_index)
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    /// Mutate ring and index without any visible motion.
    ///
    /// Transition is switched off, the change applied, layout flushed so the
    /// host commits the un-animated state, and only then is transition turned
    /// back on.
    pub(crate) fn relayout(
        &mut self,
        host: &mut dyn TrackHost,
        mutate: impl FnOnce(&mut SlideRing<T>, &mut usize),
    ) {
        self.set_transition(host, false);
        mutate(&mut self.ring, &mut self.current_index);
        host.force_layout();
        self.set_transition(host, true);
    }

    pub(crate) fn set_transition(&mut self, host: &mut dyn TrackHost, enabled: bool) {
        self.transition_enabled = enabled;
        host.set_transition(enabled);
    }

    /// Replace the ring, keeping `previous_item` in view.
    pub(crate) fn rebuild(
        &mut self,
        host: &mut dyn TrackHost,
        items: &[Arc<T>],
        previous_item: Option<usize>,
    ) {
        let mut ring = SlideRing::build(items);
        let index = ring.align(previous_item);
        self.relayout(host, move |slot, current| {
            *slot = ring;
            *current = index;
        });
    }
}
