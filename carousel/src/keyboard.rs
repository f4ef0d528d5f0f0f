//! Keyboard input for the carousel.

use log::trace;

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Space,
    Enter,
    Escape,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Where a key event was aimed.
///
/// Keys reach the carousel only when it has focus or its container is the
/// event target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyScope {
    pub focused: bool,
    pub container_targeted: bool,
}

impl KeyScope {
    pub fn focused() -> Self {
        Self {
            focused: true,
            container_targeted: false,
        }
    }

    pub fn container() -> Self {
        Self {
            focused: false,
            container_targeted: true,
        }
    }

    pub fn outside() -> Self {
        Self::default()
    }

    pub fn reaches_carousel(&self) -> bool {
        self.focused || self.container_targeted
    }
}

/// A carousel command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Next,
    Prev,
    SelectCurrent,
}

impl KeyCommand {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Right => Some(KeyCommand::Next),
            Key::Left => Some(KeyCommand::Prev),
            Key::Enter | Key::Space | Key::Char(' ') => Some(KeyCommand::SelectCurrent),
            _ => None,
        }
    }
}

/// Key listener tied to the lifetime of one carousel.
///
/// Subscribed when the carousel is created, unsubscribed on teardown. While
/// unsubscribed every key is passed through untouched.
#[derive(Debug, Default)]
pub struct KeyboardListener {
    subscribed: bool,
}

impl KeyboardListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if already subscribed.
    pub fn subscribe(&mut self) -> bool {
        if self.subscribed {
            return false;
        }
        trace!("Keyboard listener subscribed");
        self.subscribed = true;
        true
    }

    /// Returns false if not subscribed.
    pub fn unsubscribe(&mut self) -> bool {
        if !self.subscribed {
            return false;
        }
        trace!("Keyboard listener unsubscribed");
        self.subscribed = false;
        true
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Map a key to a command, honouring subscription and scope.
    pub fn resolve(&self, key: Key, scope: KeyScope) -> Option<KeyCommand> {
        if !self.subscribed || !scope.reaches_carousel() {
            return None;
        }
        KeyCommand::from_key(key)
    }
}
