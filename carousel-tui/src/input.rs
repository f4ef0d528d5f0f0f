//! Event handling - convert crossterm events to demo inputs.

use std::ops::Range;

use carousel::{Key, PointerEvent, PointerType};
use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use log::trace;

use crate::track::TerminalTrack;

/// Terminal mice report a single pointer.
const MOUSE_POINTER_ID: u64 = 0;

/// Everything the demo reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Key routed to the carousel.
    Key(Key),
    Quit,
    ToggleFocus,
    /// Drop the last image from the list.
    DropLast,
    /// Restore the full image list.
    Restore,
    /// Jump to a logical item through the thumbnail strip.
    Jump(usize),
    ThumbnailPrevious,
    ThumbnailNext,
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    PointerCancel,
    Resize { width: u16, height: u16 },
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

/// Convert a crossterm KeyEvent to an input
pub fn convert_key_event(event: KeyEvent) -> Option<Input> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }

    let input = match convert_key(event.code)? {
        Key::Char('q') | Key::Escape => Input::Quit,
        Key::Tab => Input::ToggleFocus,
        Key::Char('-') => Input::DropLast,
        Key::Char('+') | Key::Char('=') => Input::Restore,
        Key::Char('[') => Input::ThumbnailPrevious,
        Key::Char(']') => Input::ThumbnailNext,
        Key::Char(c @ '1'..='9') => Input::Jump(c as usize - '1' as usize),
        key => Input::Key(key),
    };
    Some(input)
}

/// Convert a crossterm MouseEvent to an input.
///
/// Presses only count inside the track rows. Releases count anywhere, since
/// the pointer is captured once pressed.
pub fn convert_mouse_event(
    event: MouseEvent,
    track: &TerminalTrack,
    track_rows: Range<u16>,
) -> Option<Input> {
    let pointer = PointerEvent::new(
        MOUSE_POINTER_ID,
        track.column_to_x(event.column),
        PointerType::Mouse,
    );

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) if track_rows.contains(&event.row) => {
            Some(Input::PointerDown(pointer))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(Input::PointerUp(pointer)),
        // Any other button while dragging abandons the gesture.
        MouseEventKind::Down(MouseButton::Right | MouseButton::Middle)
            if track.captured().is_some() =>
        {
            Some(Input::PointerCancel)
        }
        _ => None,
    }
}

/// Convert a crossterm Event to an input
pub fn convert_event(
    event: CrosstermEvent,
    track: &TerminalTrack,
    track_rows: Range<u16>,
) -> Option<Input> {
    let input = match event {
        CrosstermEvent::Key(key_event) => convert_key_event(key_event),
        CrosstermEvent::Mouse(mouse_event) => convert_mouse_event(mouse_event, track, track_rows),
        CrosstermEvent::Resize(width, height) => Some(Input::Resize { width, height }),
        CrosstermEvent::FocusLost => Some(Input::PointerCancel),
        _ => None,
    };
    if let Some(input) = &input {
        trace!("Input: {:?}", input);
    }
    input
}
