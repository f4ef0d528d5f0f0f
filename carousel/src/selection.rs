//! Selection state: which item the user picked, as opposed to which is in view.

use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Emitted every time an item is selected, including repeat selections.
#[derive(Debug)]
pub struct SelectionChange<T> {
    pub index: usize,
    pub item: Arc<T>,
}

impl<T> Clone for SelectionChange<T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            item: Arc::clone(&self.item),
        }
    }
}

/// Selected logical index plus a pulse counter and the listeners to notify.
#[derive(Debug)]
pub struct SelectionState<T> {
    selected: Option<usize>,
    pulse: u64,
    subscribers: Vec<UnboundedSender<SelectionChange<T>>>,
}

impl<T> Default for SelectionState<T> {
    fn default() -> Self {
        Self {
            selected: None,
            pulse: 0,
            subscribers: Vec::new(),
        }
    }
}

impl<T> SelectionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Incremented on every selection, so re-selecting is observable.
    pub fn pulse(&self) -> u64 {
        self.pulse
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Register a listener for [`SelectionChange`]s.
    pub fn subscribe(&mut self) -> UnboundedReceiver<SelectionChange<T>> {
        let (tx, rx) = unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Select an item. Out-of-range indices are ignored.
    ///
    /// Returns true when the selection was applied.
    pub fn select(&mut self, index: usize, items: &[Arc<T>]) -> bool {
        let Some(item) = items.get(index) else {
            debug!("Ignoring selection of {} outside list of {}", index, items.len());
            return false;
        };

        self.selected = Some(index);
        self.pulse += 1;
        debug!("Selected item {} (pulse {})", index, self.pulse);

        let change = SelectionChange {
            index,
            item: Arc::clone(item),
        };
        self.notify(change);
        true
    }

    /// Re-resolve the selection against a replaced list.
    ///
    /// A selection that still points into `items` is re-sent with the new
    /// item, without touching the pulse. One that fell out of range is
    /// cleared silently.
    pub fn reconcile(&mut self, items: &[Arc<T>]) {
        let Some(index) = self.selected else {
            return;
        };
        let Some(item) = items.get(index) else {
            debug!("Clearing selection {} after list shrank to {}", index, items.len());
            self.selected = None;
            return;
        };
        debug!("Selection {} now resolves to a replaced item", index);
        self.notify(SelectionChange {
            index,
            item: Arc::clone(item),
        });
    }

    // Receivers that were dropped are forgotten.
    fn notify(&mut self, change: SelectionChange<T>) {
        self.subscribers
            .retain(|tx| tx.send(change.clone()).is_ok());
    }

    /// Close every subscription.
    pub fn close(&mut self) {
        self.subscribers.clear();
    }
}
