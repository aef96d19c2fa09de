//! Crossterm event pump implementing the runtime's [`EventSource`].
//!
//! Drains every pending terminal event without blocking, once per frame.
//! Key presses and releases map onto the runtime's backend-agnostic
//! [`Key`]; Esc and Ctrl-C become the quit signal.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use screenplay_core::{EventSource, FrontendError, InputEvent, Key};

/// Non-blocking drain over the crossterm event queue.
///
/// Terminals without the kitty keyboard protocol never report key
/// releases, which would leave every tapped key held forever. For those,
/// the pump synthesizes the release on the *following* drain, so a tap
/// registers as held for exactly one frame.
pub struct CrosstermEvents {
    synthesize_release: bool,
    pending_release: Vec<Key>,
}

impl CrosstermEvents {
    /// `release_events` is the negotiation result from terminal init.
    pub fn new(release_events: bool) -> Self {
        Self {
            synthesize_release: !release_events,
            pending_release: Vec::new(),
        }
    }

    fn flush_owed<F>(&mut self, sink: &mut F)
    where
        F: FnMut(InputEvent),
    {
        for key in self.pending_release.drain(..) {
            sink(InputEvent::KeyUp(key));
        }
    }

    fn translate(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Escape),
            _ => None,
        }
    }
}

impl EventSource for CrosstermEvents {
    fn drain<F>(&mut self, mut sink: F) -> Result<(), FrontendError>
    where
        F: FnMut(InputEvent),
    {
        // Releases owed from the previous drain fire before new input.
        self.flush_owed(&mut sink);

        while event::poll(Duration::ZERO).map_err(FrontendError::from)? {
            let Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) = event::read().map_err(FrontendError::from)?
            else {
                // Resizes are picked up by the presenter each frame.
                continue;
            };

            let is_quit = code == KeyCode::Esc
                || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL));
            if is_quit && kind == KeyEventKind::Press {
                sink(InputEvent::Quit);
                continue;
            }

            let Some(key) = Self::translate(code) else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    sink(InputEvent::KeyDown(key));
                    if self.synthesize_release {
                        self.pending_release.push(key);
                    }
                }
                KeyEventKind::Release => sink(InputEvent::KeyUp(key)),
                KeyEventKind::Repeat => {}
            }
        }

        Ok(())
    }
}
