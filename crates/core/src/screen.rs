//! The screen lifecycle contract.
//!
//! A screen is one exclusive application mode. The [`Director`] activates
//! it with [`Screen::startup`], drives [`Screen::update`] once per frame,
//! and retires it with [`Screen::cleanup`] when the screen reports it is
//! done. The same instance may go through that cycle many times over the
//! life of the process.
//!
//! [`Director`]: crate::director::Director

use std::fmt;

use crate::input::InputState;
use crate::session::SessionData;
use crate::time::Ticks;

/// Registry identifier of a screen.
///
/// Consumers define their ids as constants and wire the transition graph
/// through them; the runtime treats them as opaque keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ScreenId(&'static str);

impl ScreenId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One exclusive application mode, generic over the drawing surface `S`.
///
/// The contract, enforced by the director:
///
/// - `startup` runs before any `update` and must fully (re)initialize all
///   per-activation state; nothing is assumed to survive from a previous
///   activation. The session record enters here by value.
/// - `update` runs exactly once per frame while active, repaints the
///   whole surface, and flags completion via the done/next pair at the
///   exit condition. The director never calls `update` on a screen whose
///   done flag it has observed; it transitions first.
/// - `cleanup` runs exactly once per activation, clears the done flag so
///   the instance can be reactivated, and returns the session record.
pub trait Screen<S> {
    /// Activate the screen. Called every time it becomes active.
    fn startup(&mut self, now: Ticks, session: SessionData);

    /// Advance one frame and repaint `surface`.
    fn update(&mut self, surface: &mut S, input: &InputState, now: Ticks);

    /// Retire the screen, handing the session record back.
    fn cleanup(&mut self) -> SessionData;

    /// True once this activation's exit condition has been reached.
    fn is_done(&self) -> bool;

    /// Successor to activate when done.
    fn next_screen(&self) -> ScreenId;
}

/// Blanket implementation for boxed screens.
///
/// Lets `Box<dyn Screen<S>>` itself implement [`Screen`], so registries
/// and decorators can hold heterogeneous screens uniformly.
impl<S> Screen<S> for Box<dyn Screen<S>> {
    fn startup(&mut self, now: Ticks, session: SessionData) {
        (**self).startup(now, session)
    }

    fn update(&mut self, surface: &mut S, input: &InputState, now: Ticks) {
        (**self).update(surface, input, now)
    }

    fn cleanup(&mut self) -> SessionData {
        (**self).cleanup()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn next_screen(&self) -> ScreenId {
        (**self).next_screen()
    }
}

/// Per-activation bookkeeping every concrete screen embeds.
///
/// Owns the activation timestamp, the done/next pair, and the session
/// record for the duration of the activation, so the reset-on-cleanup
/// and ownership-handoff rules are written in one place.
///
/// # Panics
///
/// The session accessors and [`end`](Self::end) panic when called outside
/// an activation (before `begin`, or after `end`). That is a lifecycle
/// contract violation by the caller, a wiring bug rather than a runtime
/// condition.
#[derive(Debug)]
pub struct Lifecycle {
    started_at: Ticks,
    done: bool,
    next: ScreenId,
    session: Option<SessionData>,
}

impl Lifecycle {
    /// Bookkeeping with a default successor.
    pub fn new(next: ScreenId) -> Self {
        Self {
            started_at: Ticks::ZERO,
            done: false,
            next,
            session: None,
        }
    }

    /// Start an activation: record the timestamp, clear the done flag,
    /// take ownership of the session record.
    pub fn begin(&mut self, now: Ticks, session: SessionData) {
        self.started_at = now;
        self.done = false;
        self.session = Some(session);
    }

    /// Flag completion and route to `next`.
    pub fn finish(&mut self, next: ScreenId) {
        self.next = next;
        self.done = true;
    }

    /// End the activation: clear the done flag and release the session
    /// record for handoff.
    pub fn end(&mut self) -> SessionData {
        self.done = false;
        self.session
            .take()
            .expect("lifecycle ended outside an activation")
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn next(&self) -> ScreenId {
        self.next
    }

    pub fn started_at(&self) -> Ticks {
        self.started_at
    }

    /// Ticks elapsed in this activation.
    pub fn elapsed(&self, now: Ticks) -> u64 {
        now.since(self.started_at)
    }

    pub fn session(&self) -> &SessionData {
        self.session
            .as_ref()
            .expect("session read outside an activation")
    }

    pub fn session_mut(&mut self) -> &mut SessionData {
        self.session
            .as_mut()
            .expect("session written outside an activation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOMEWHERE: ScreenId = ScreenId::new("somewhere");
    const ELSEWHERE: ScreenId = ScreenId::new("elsewhere");

    #[test]
    fn begin_finish_end_cycle() {
        let mut lc = Lifecycle::new(SOMEWHERE);
        assert!(!lc.is_done());

        lc.begin(Ticks::new(100), SessionData::default());
        assert_eq!(lc.started_at(), Ticks::new(100));
        assert_eq!(lc.elapsed(Ticks::new(350)), 250);

        lc.finish(ELSEWHERE);
        assert!(lc.is_done());
        assert_eq!(lc.next(), ELSEWHERE);

        let session = lc.end();
        assert_eq!(session, SessionData::default());
        // Done is cleared so the same instance can be reactivated.
        assert!(!lc.is_done());
    }

    #[test]
    fn reactivation_clears_done_and_retimes() {
        let mut lc = Lifecycle::new(SOMEWHERE);
        lc.begin(Ticks::ZERO, SessionData::default());
        lc.finish(SOMEWHERE);
        let session = lc.end();

        lc.begin(Ticks::new(5_000), session);
        assert!(!lc.is_done());
        assert_eq!(lc.elapsed(Ticks::new(5_001)), 1);
    }

    #[test]
    fn session_mutations_survive_handoff() {
        let mut lc = Lifecycle::new(SOMEWHERE);
        lc.begin(Ticks::ZERO, SessionData::default());
        lc.session_mut().score = 777;
        lc.finish(SOMEWHERE);
        assert_eq!(lc.end().score, 777);
    }

    #[test]
    #[should_panic(expected = "outside an activation")]
    fn end_before_begin_is_a_contract_violation() {
        let mut lc = Lifecycle::new(SOMEWHERE);
        let _ = lc.end();
    }
}
