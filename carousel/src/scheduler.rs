//! Serialized, one-slot-at-a-time navigation.
//!
//! Every navigation request, whatever its source, is broken down into single
//! steps. A step runs in two phases: it is prepared immediately (wrapping the
//! ring if the view sits on the boundary) and committed on the next turn of
//! the host loop, once the host has had a chance to apply the prepared,
//! un-animated layout. Steps that arrive while a commit is outstanding wait in
//! a FIFO queue.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::host::TrackHost;
use crate::ring::{TrackState, normalize_index};

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn offset(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Identifies one scheduled commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommitHandle(u64);

/// A prepared step waiting for its commit turn.
#[derive(Debug, Clone, Copy)]
struct PendingCommit {
    handle: CommitHandle,
    target: usize,
}

/// Shortest path between two indices on a cycle of `len`.
///
/// Returns `None` when the indices are equal. Ties go forward.
pub fn shortest_path(from: usize, to: usize, len: usize) -> Option<(Direction, usize)> {
    if len == 0 {
        return None;
    }
    let forward = normalize_index(to as isize - from as isize, len);
    let backward = normalize_index(from as isize - to as isize, len);
    if forward == 0 {
        return None;
    }
    if forward <= backward {
        Some((Direction::Forward, forward))
    } else {
        Some((Direction::Backward, backward))
    }
}

/// Queue of navigation steps and the commit currently in flight.
#[derive(Debug, Default)]
pub struct NavigationScheduler {
    queue: VecDeque<Direction>,
    pending: Option<PendingCommit>,
    next_handle: u64,
}

impl NavigationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a prepared step has not been committed yet.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_handle(&self) -> Option<CommitHandle> {
        self.pending.map(|pending| pending.handle)
    }

    /// Steps waiting behind the one in flight.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Request one step. Runs now when idle, otherwise queues.
    pub fn enqueue<T>(
        &mut self,
        direction: Direction,
        track: &mut TrackState<T>,
        host: &mut dyn TrackHost,
    ) {
        if track.len() <= 1 {
            return;
        }
        if self.is_animating() {
            trace!("Queueing {:?} step behind pending commit", direction);
            self.queue.push_back(direction);
            return;
        }
        self.step(direction, track, host);
    }

    pub fn enqueue_steps<T>(
        &mut self,
        direction: Direction,
        steps: usize,
        track: &mut TrackState<T>,
        host: &mut dyn TrackHost,
    ) {
        for _ in 0..steps {
            self.enqueue(direction, track, host);
        }
    }

    /// Navigate to a ring position along the shorter way round.
    pub fn go_to<T>(
        &mut self,
        position: usize,
        track: &mut TrackState<T>,
        host: &mut dyn TrackHost,
    ) {
        let len = track.len();
        if position >= len {
            debug!("Ignoring go_to({}) outside ring of {}", position, len);
            return;
        }
        if let Some((direction, steps)) = shortest_path(track.current_index(), position, len) {
            self.enqueue_steps(direction, steps, track, host);
        }
    }

    /// Navigate to a logical item along the shorter way round.
    pub fn go_to_item<T>(
        &mut self,
        item_index: usize,
        track: &mut TrackState<T>,
        host: &mut dyn TrackHost,
    ) {
        let total = track.len();
        if item_index >= total {
            debug!("Ignoring go_to_item({}) outside list of {}", item_index, total);
            return;
        }
        let Some(current) = track.current_item_index() else {
            return;
        };
        if let Some((direction, steps)) = shortest_path(current, item_index, total) {
            self.enqueue_steps(direction, steps, track, host);
        }
    }

    /// Prepare one step: wrap if needed, then schedule the index commit.
    fn step<T>(
        &mut self,
        direction: Direction,
        track: &mut TrackState<T>,
        host: &mut dyn TrackHost,
    ) {
        let total = track.len();
        if total <= 1 {
            return;
        }

        let current = track.current_index();
        let at_boundary = match direction {
            Direction::Forward => current == total - 1,
            Direction::Backward => current == 0,
        };

        if at_boundary {
            trace!("Wrapping ring {:?} at position {}", direction, current);
            track.relayout(host, |ring, index| match direction {
                Direction::Forward => {
                    ring.rotate_forward();
                    *index = normalize_index(*index as isize - 1, ring.len());
                }
                Direction::Backward => {
                    ring.rotate_backward();
                    *index = normalize_index(*index as isize + 1, ring.len());
                }
            });
        }

        let target = normalize_index(track.current_index() as isize + direction.offset(), total);
        let handle = CommitHandle(self.next_handle);
        self.next_handle += 1;
        self.pending = Some(PendingCommit { handle, target });
        trace!("Scheduled commit {:?} -> position {}", handle, target);
    }

    /// Run the outstanding commit, if any, then start the next queued step.
    ///
    /// Returns true when a commit happened.
    pub fn run_pending<T>(&mut self, track: &mut TrackState<T>, host: &mut dyn TrackHost) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        track.set_transition(host, true);
        track.current_index = pending.target;
        trace!("Committed {:?} at position {}", pending.handle, pending.target);

        if let Some(direction) = self.queue.pop_front() {
            self.step(direction, track, host);
        }
        true
    }

    /// Drop the queue and the commit in flight.
    pub fn cancel(&mut self) {
        if self.pending.is_some() || !self.queue.is_empty() {
            debug!(
                "Cancelling navigation: pending={:?}, queued={}",
                self.pending_handle(),
                self.queue.len()
            );
        }
        self.pending = None;
        self.queue.clear();
    }
}
