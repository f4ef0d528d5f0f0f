//! Thumbnail strip model.
//!
//! The strip shows up to three thumbnails around the current item and has
//! its own previous/next buttons. It never navigates by itself: every action
//! yields a target logical index, or nothing when the target is already in
//! view.

use std::sync::Arc;

use crate::item::CarouselItem;
use crate::ring::normalize_index;

/// Logical indices of the thumbnails to show around `current`.
///
/// All items when there are three or fewer, otherwise previous, current and
/// next (wrapping). Falls back to the first three when nothing is in view.
pub fn visible_thumbnail_indexes(count: usize, current: Option<usize>) -> Vec<usize> {
    if count <= 3 {
        return (0..count).collect();
    }
    let Some(current) = current else {
        return vec![0, 1, 2];
    };
    let prev = normalize_index(current as isize - 1, count);
    let next = normalize_index(current as isize + 1, count);
    vec![prev, current, next]
}

/// Read-only view of the carousel shaped for the thumbnail strip.
#[derive(Debug)]
pub struct ThumbnailSelector<'a, T> {
    images: &'a [Arc<T>],
    visible: Vec<usize>,
    current: Option<usize>,
    selected: Option<usize>,
    pulse: u64,
}

impl<'a, T: CarouselItem> ThumbnailSelector<'a, T> {
    pub fn new(
        images: &'a [Arc<T>],
        current: Option<usize>,
        selected: Option<usize>,
        pulse: u64,
    ) -> Self {
        Self {
            images,
            visible: visible_thumbnail_indexes(images.len(), current),
            current,
            selected,
            pulse,
        }
    }

    pub fn visible_indexes(&self) -> &[usize] {
        &self.visible
    }

    pub fn selection_pulse(&self) -> u64 {
        self.pulse
    }

    pub fn go_previous(&self) -> Option<usize> {
        let current = self.current?;
        self.navigate(current as isize - 1)
    }

    pub fn go_next(&self) -> Option<usize> {
        let current = self.current?;
        self.navigate(current as isize + 1)
    }

    /// Target for a thumbnail click. Negative and oversized indices wrap.
    pub fn navigate(&self, index: isize) -> Option<usize> {
        if self.images.is_empty() {
            return None;
        }
        let target = normalize_index(index, self.images.len());
        if Some(target) == self.current {
            return None;
        }
        Some(target)
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Thumbnail locator, falling back to the full image.
    pub fn thumbnail_src(&self, index: usize) -> &str {
        match self.images.get(index) {
            Some(image) => image.thumbnail_src().unwrap_or_else(|| image.src()),
            None => "",
        }
    }

    pub fn image_label(&self, index: usize) -> String {
        image_label(self.images.get(index).map(|image| &**image), index)
    }
}

/// Label of an item, or `Photo <n>` (1-based) when it has none.
pub fn image_label<T: CarouselItem>(item: Option<&T>, index: usize) -> String {
    item.and_then(|item| item.label())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Photo {}", index + 1))
}
