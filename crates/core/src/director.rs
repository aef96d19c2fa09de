//! The controller driving the per-frame loop and screen transitions.
//!
//! One [`Director`] owns the whole show: the screen registry (built once,
//! never mutated afterward), the active screen, the last-sampled input
//! snapshot, and the frame pacing. Per frame it drains pending events,
//! performs at most one transition, advances the active screen, presents,
//! and waits out the remaining frame budget.

use std::collections::{HashMap, HashSet};

use crate::error::ControlError;
use crate::frontend::Frontend;
use crate::input::{EventSource, InputEvent, InputState, Key, KeyBindings};
use crate::screen::{Screen, ScreenId};
use crate::session::SessionData;
use crate::time::{FrameClock, Ticks, frame_budget};

/// Loop rate the director throttles to unless configured otherwise.
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Singleton driver of the screen state machine.
///
/// Invariants, enforced by [`DirectorBuilder`] and the transition path:
/// the registry is never empty, exactly one screen is active at any time,
/// and the active id is always a valid registry key.
pub struct Director<S> {
    screens: HashMap<ScreenId, Box<dyn Screen<S>>>,
    active: ScreenId,
    bindings: KeyBindings,
    held: HashSet<Key>,
    input: InputState,
    now: Ticks,
    target_fps: u32,
    quit: bool,
}

impl<S> Director<S> {
    pub fn builder() -> DirectorBuilder<S> {
        DirectorBuilder::new()
    }

    /// Identifier of the currently active screen.
    pub fn active(&self) -> ScreenId {
        self.active
    }

    /// Last-sampled input snapshot.
    pub fn input(&self) -> InputState {
        self.input
    }

    /// True once the quit signal has been observed; [`run`](Self::run)
    /// returns at the next loop-top check.
    pub fn is_done(&self) -> bool {
        self.quit
    }

    /// Apply one input event to the controller state.
    ///
    /// Key events refresh the held-key set and re-derive the button
    /// snapshot through the binding table, so the snapshot is current
    /// after every key-down and key-up. A quit event sets the terminal
    /// flag; the frame in progress still completes.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                tracing::info!("quit requested");
                self.quit = true;
            }
            InputEvent::KeyDown(key) => {
                self.held.insert(key);
                self.refresh_input();
            }
            InputEvent::KeyUp(key) => {
                self.held.remove(&key);
                self.refresh_input();
            }
        }
    }

    fn refresh_input(&mut self) {
        self.input = InputState::holding(self.bindings.buttons_for(self.held.iter()));
    }

    /// Drain all pending events from `events`. Called once per frame.
    pub fn pump<E: EventSource>(&mut self, events: &mut E) -> Result<(), ControlError> {
        events.drain(|event| self.handle_event(event))?;
        Ok(())
    }

    /// Per-frame dispatch: transition if the active screen is done, then
    /// advance the (possibly just-switched) active screen exactly once.
    pub fn advance_frame(&mut self, surface: &mut S, now: Ticks) -> Result<(), ControlError> {
        self.now = now;
        if self.active_screen().is_done() {
            self.transition()?;
        }

        let input = self.input;
        let screen = self
            .screens
            .get_mut(&self.active)
            .expect("active screen is always a valid registry key");
        screen.update(surface, &input, now);
        Ok(())
    }

    /// Retire the active screen and activate its successor.
    ///
    /// The session record moves atomically: `cleanup` on the outgoing
    /// screen releases it, `startup` on the incoming screen receives it.
    /// An unregistered successor is a fatal configuration error.
    fn transition(&mut self) -> Result<(), ControlError> {
        let from = self.active;
        let target = self.active_screen().next_screen();
        if !self.screens.contains_key(&target) {
            return Err(ControlError::UnknownScreen { target, from });
        }

        let session = self
            .screens
            .get_mut(&from)
            .expect("active screen is always a valid registry key")
            .cleanup();
        let incoming = self
            .screens
            .get_mut(&target)
            .expect("transition target presence checked above");
        incoming.startup(self.now, session);
        self.active = target;

        tracing::info!(from = %from, to = %target, "screen transition");
        Ok(())
    }

    /// Drive the main loop until the quit signal is observed.
    ///
    /// Each iteration: drain events, advance the active screen, present
    /// the frame, then block until the frame budget elapses. The throttle
    /// wait is the only suspension point; the quit flag is checked once
    /// per iteration, so an in-progress frame always completes.
    pub fn run<F, E, C>(
        &mut self,
        frontend: &mut F,
        events: &mut E,
        clock: &mut C,
    ) -> Result<(), ControlError>
    where
        F: Frontend<Surface = S>,
        E: EventSource,
        C: FrameClock,
    {
        let budget = frame_budget(self.target_fps);
        tracing::debug!(fps = self.target_fps, budget, "main loop started");

        while !self.quit {
            let frame_start = clock.now();
            self.pump(events)?;
            self.advance_frame(frontend.surface(), frame_start)?;
            frontend.present()?;
            clock.wait_until(frame_start + budget);
        }

        tracing::debug!("main loop stopped");
        Ok(())
    }

    fn active_screen(&self) -> &dyn Screen<S> {
        self.screens
            .get(&self.active)
            .expect("active screen is always a valid registry key")
            .as_ref()
    }
}

/// Fail-fast builder for [`Director`].
///
/// The registry is sealed at `build` time: screens cannot be added or
/// removed afterward. `build` validates the wiring and performs the
/// initial activation, so the start screen's `startup` has run before
/// the first frame.
pub struct DirectorBuilder<S> {
    screens: HashMap<ScreenId, Box<dyn Screen<S>>>,
    start: Option<ScreenId>,
    bindings: KeyBindings,
    session: SessionData,
    target_fps: u32,
}

impl<S> DirectorBuilder<S> {
    pub fn new() -> Self {
        Self {
            screens: HashMap::new(),
            start: None,
            bindings: KeyBindings::default(),
            session: SessionData::default(),
            target_fps: DEFAULT_TARGET_FPS,
        }
    }

    /// Register `screen` under `id`, replacing any previous registration.
    pub fn screen(mut self, id: ScreenId, screen: impl Screen<S> + 'static) -> Self {
        self.screens.insert(id, Box::new(screen));
        self
    }

    /// Select the initial active screen (required).
    pub fn start(mut self, id: ScreenId) -> Self {
        self.start = Some(id);
        self
    }

    /// Key-binding table used to derive button snapshots.
    pub fn bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Session record handed to the start screen. Defaults to
    /// [`SessionData::default`].
    pub fn session(mut self, session: SessionData) -> Self {
        self.session = session;
        self
    }

    /// Loop rate cap. Defaults to [`DEFAULT_TARGET_FPS`].
    pub fn target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    /// Validate the wiring and activate the start screen.
    ///
    /// # Errors
    ///
    /// - [`ControlError::NoScreens`] if nothing was registered
    /// - [`ControlError::NoStart`] if no start screen was selected
    /// - [`ControlError::UnknownStart`] if the start id is unregistered
    pub fn build(self) -> Result<Director<S>, ControlError> {
        if self.screens.is_empty() {
            return Err(ControlError::NoScreens);
        }
        let start = self.start.ok_or(ControlError::NoStart)?;

        let mut screens = self.screens;
        let first = screens
            .get_mut(&start)
            .ok_or(ControlError::UnknownStart { start })?;
        first.startup(Ticks::ZERO, self.session);
        tracing::info!(screen = %start, "initial screen activated");

        Ok(Director {
            screens,
            active: start,
            bindings: self.bindings,
            held: HashSet::new(),
            input: InputState::idle(),
            now: Ticks::ZERO,
            target_fps: self.target_fps,
            quit: false,
        })
    }
}

impl<S> Default for DirectorBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
