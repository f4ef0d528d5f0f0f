//! The demo event loop.

use std::time::{Duration, Instant};

use carousel::{
    Carousel, CarouselImage, CommitHandle, KeyScope, SelectionChange, SystemClock, image_label,
};
use crossterm::{event::EventStream, terminal};
use futures::StreamExt;
use log::{debug, error, info};
use tokio::time::sleep_until;

use crate::error::TuiError;
use crate::input::{Input, convert_event};
use crate::manifest::Manifest;
use crate::terminal::TerminalGuard;
use crate::track::TerminalTrack;
use crate::view::{self, Status};

pub type DemoCarousel = Carousel<CarouselImage, TerminalTrack>;

/// Deferred commits run one frame after the step that scheduled them.
const FRAME: Duration = Duration::from_millis(16);

/// Demo state that lives outside the carousel.
#[derive(Debug)]
pub struct AppState {
    images: Vec<CarouselImage>,
    shown: usize,
    focused: bool,
    height: u16,
    last_event: Option<String>,
}

impl AppState {
    pub fn new(images: Vec<CarouselImage>, height: u16) -> Self {
        Self {
            shown: images.len(),
            images,
            focused: true,
            height,
            last_event: None,
        }
    }

    pub fn status(&self) -> Status<'_> {
        Status {
            focused: self.focused,
            last_event: self.last_event.as_deref(),
            height: self.height,
        }
    }

    fn scope(&self) -> KeyScope {
        if self.focused {
            KeyScope::focused()
        } else {
            KeyScope::outside()
        }
    }

    pub fn record_selection(&mut self, change: &SelectionChange<CarouselImage>) {
        info!("Selection event: item {} ({})", change.index, change.item.src);
        self.last_event = Some(format!(
            "Selection event: {} (#{})",
            image_label(Some(&*change.item), change.index),
            change.index + 1
        ));
    }

    /// Apply one input. Returns false when the demo should exit.
    pub fn apply(&mut self, carousel: &mut DemoCarousel, input: Input) -> bool {
        match input {
            Input::Quit => return false,
            Input::Key(key) => {
                if !carousel.handle_key(key, self.scope()) {
                    debug!("Unhandled key {:?}", key);
                }
            }
            Input::ToggleFocus => self.focused = !self.focused,
            Input::DropLast => {
                self.shown = self.shown.saturating_sub(1);
                carousel.set_items(self.images[..self.shown].to_vec());
            }
            Input::Restore => {
                self.shown = self.images.len();
                carousel.set_items(self.images.clone());
            }
            Input::Jump(index) => {
                if index < carousel.len() {
                    let target = carousel.selector().navigate(index as isize);
                    carousel.navigate_to(target);
                }
            }
            Input::ThumbnailPrevious => {
                let target = carousel.selector().go_previous();
                carousel.navigate_to(target);
            }
            Input::ThumbnailNext => {
                let target = carousel.selector().go_next();
                carousel.navigate_to(target);
            }
            Input::PointerDown(event) => {
                self.focused = true;
                carousel.pointer_down(event);
            }
            Input::PointerUp(event) => carousel.pointer_up(event),
            Input::PointerCancel => carousel.pointer_cancel(),
            Input::Resize { width, height } => {
                carousel.host_mut().resize(width);
                self.height = height;
            }
        }
        true
    }
}

/// Deadline for the pending commit, fixed when the commit is first seen.
#[derive(Debug, Default)]
pub struct CommitTimer {
    armed: Option<(CommitHandle, Instant)>,
}

impl CommitTimer {
    /// When the pending commit (if any) is due. The deadline of a commit
    /// does not move however often this is asked.
    pub fn deadline(&mut self, pending: Option<CommitHandle>, now: Instant) -> Option<Instant> {
        let Some(handle) = pending else {
            self.armed = None;
            return None;
        };
        match self.armed {
            Some((armed, at)) if armed == handle => Some(at),
            _ => {
                let at = now + FRAME;
                self.armed = Some((handle, at));
                Some(at)
            }
        }
    }
}

/// Sleep until a deadline, or wait forever if None.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

pub async fn run(manifest: Manifest) -> Result<(), TuiError> {
    let (columns, height) = terminal::size()?;
    let track = TerminalTrack::new(columns, manifest.cell_width_px);
    let mut carousel = DemoCarousel::with_config(
        manifest.images.clone(),
        track,
        manifest.carousel,
        SystemClock::new(),
    )?;
    let mut selections = carousel.subscribe();
    let mut state = AppState::new(manifest.images, height);

    let mut guard = TerminalGuard::new()?;
    let mut events = EventStream::new();
    info!("Carousel ready: {:?}", carousel);

    let mut timer = CommitTimer::default();
    let mut redraw = true;
    loop {
        while let Ok(change) = selections.try_recv() {
            state.record_selection(&change);
            redraw = true;
        }
        if redraw {
            view::draw(guard.stdout(), &carousel, state.status())?;
            redraw = false;
        }

        let deadline = timer.deadline(carousel.pending_commit(), Instant::now());
        let event = tokio::select! {
            event = events.next() => event,
            _ = sleep_until_optional(deadline) => {
                carousel.run_pending();
                redraw = true;
                continue;
            }
        };

        let event = match event {
            Some(Ok(event)) => event,
            Some(Err(e)) => {
                error!("Event stream error: {}", e);
                continue;
            }
            None => break,
        };
        // Mouse motion and other ignored events leave the screen as it is.
        let Some(input) = convert_event(event, carousel.host(), view::track_rows()) else {
            continue;
        };
        if !state.apply(&mut carousel, input) {
            break;
        }
        redraw = true;
    }

    carousel.teardown();
    info!("Carousel closed");
    Ok(())
}
