//! Input sampling: logical buttons, key bindings, and the event source seam.
//!
//! Physical keys arrive from the presentation backend as [`InputEvent`]s.
//! The controller folds them through a [`KeyBindings`] table into the
//! [`InputState`] snapshot screens read each frame. The binding table is
//! plain data passed in at construction; there is no ambient global.

use std::collections::HashMap;

use crate::error::FrontendError;

/// Backend-agnostic identity of a physical key.
///
/// Presentation backends translate their native key events into this
/// type; the runtime never sees backend key codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

bitflags::bitflags! {
    /// Logical game buttons a screen can query.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        const LEFT    = 1 << 0;
        const RIGHT   = 1 << 1;
        const UP      = 1 << 2;
        const DOWN    = 1 << 3;
        const JUMP    = 1 << 4;
        const ACTION  = 1 << 5;
        const CONFIRM = 1 << 6;
    }
}

/// Key-to-button table, passed explicitly to the controller at boot.
///
/// One key maps to at most one button set; unbound keys are ignored by
/// the snapshot (screens never observe them).
#[derive(Clone, Debug)]
pub struct KeyBindings {
    table: HashMap<Key, Buttons>,
}

impl KeyBindings {
    /// Empty table. Useful for screens driven purely by timeouts.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Bind `key` to `buttons`, replacing any previous binding.
    pub fn bind(mut self, key: Key, buttons: Buttons) -> Self {
        self.table.insert(key, buttons);
        self
    }

    /// Buttons asserted by the given set of held keys.
    pub fn buttons_for<'a>(&self, held: impl IntoIterator<Item = &'a Key>) -> Buttons {
        held.into_iter()
            .filter_map(|key| self.table.get(key))
            .fold(Buttons::empty(), |acc, b| acc | *b)
    }
}

impl Default for KeyBindings {
    /// Arrow keys for directions, `a` jump, `s` action, Enter confirm.
    fn default() -> Self {
        Self::empty()
            .bind(Key::Left, Buttons::LEFT)
            .bind(Key::Right, Buttons::RIGHT)
            .bind(Key::Up, Buttons::UP)
            .bind(Key::Down, Buttons::DOWN)
            .bind(Key::Char('a'), Buttons::JUMP)
            .bind(Key::Char('s'), Buttons::ACTION)
            .bind(Key::Enter, Buttons::CONFIRM)
    }
}

/// Last-sampled input snapshot handed to the active screen each frame.
///
/// Refreshed on every key-down and key-up event. An empty snapshot is
/// normal idle state, not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    buttons: Buttons,
}

impl InputState {
    /// Snapshot with nothing held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Snapshot with the given buttons held. Intended for tests and
    /// scripted playback.
    pub fn holding(buttons: Buttons) -> Self {
        Self { buttons }
    }

    /// True if every button in `buttons` is currently held.
    pub fn pressed(&self, buttons: Buttons) -> bool {
        self.buttons.contains(buttons)
    }

    /// True if nothing is held.
    pub fn is_idle(&self) -> bool {
        self.buttons.is_empty()
    }
}

/// One OS-level event delivered by the presentation backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// The process was asked to shut down (window close, Ctrl-C, ...).
    Quit,
}

/// Pending-event drain, called once per loop iteration.
///
/// Implementations must deliver every event queued since the previous
/// drain, in arrival order, and never block waiting for new ones.
pub trait EventSource {
    fn drain<F>(&mut self, sink: F) -> Result<(), FrontendError>
    where
        F: FnMut(InputEvent);
}
