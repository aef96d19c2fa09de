//! Time units and the injectable frame clock.
//!
//! The controller never reads the wall clock directly. It asks a
//! [`FrameClock`] for the current [`Ticks`] once per frame and hands the
//! same clock the end-of-frame deadline to wait out. Production code uses
//! [`SystemClock`]; tests drive [`ManualClock`] and never sleep.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

/// Time units per second. One tick is a millisecond.
pub const TICKS_PER_SECOND: u64 = 1_000;

/// Monotonic time measured in abstract time units since some origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticks(pub u64);

impl Ticks {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Elapsed units since `earlier`, clamped at zero if `earlier` is in
    /// the future.
    pub fn since(self, earlier: Ticks) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Ticks {
    type Output = Ticks;
    fn add(self, rhs: u64) -> Ticks {
        Ticks(self.0 + rhs)
    }
}

impl std::ops::Sub<u64> for Ticks {
    type Output = Ticks;
    fn sub(self, rhs: u64) -> Ticks {
        Ticks(self.0.saturating_sub(rhs))
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-frame budget for a target rate, in ticks. 60 FPS gives 16.
pub fn frame_budget(target_fps: u32) -> u64 {
    TICKS_PER_SECOND / u64::from(target_fps.max(1))
}

/// Source of frame timestamps and the end-of-frame throttle wait.
///
/// `wait_until` blocks the calling thread until `deadline`; it is the
/// only suspension point in the main loop. Implementations already past
/// the deadline return immediately.
pub trait FrameClock {
    /// Current time in ticks since the clock's origin.
    fn now(&self) -> Ticks;

    /// Block until `now() >= deadline`.
    fn wait_until(&mut self, deadline: Ticks);
}

/// Wall-clock implementation backed by [`Instant`].
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now(&self) -> Ticks {
        Ticks::new(self.origin.elapsed().as_millis() as u64)
    }

    fn wait_until(&mut self, deadline: Ticks) {
        let now = self.now();
        if deadline > now {
            thread::sleep(Duration::from_millis(deadline.since(now)));
        }
    }
}

/// Deterministic clock for tests and headless simulation.
///
/// Time moves only when told to: `advance` steps it explicitly and
/// `wait_until` jumps straight to the deadline instead of sleeping.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Ticks,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Ticks) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ticks: u64) {
        self.now = self.now + ticks;
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Ticks {
        self.now
    }

    fn wait_until(&mut self, deadline: Ticks) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_clamps_at_zero() {
        assert_eq!(Ticks::new(500).since(Ticks::new(200)), 300);
        assert_eq!(Ticks::new(200).since(Ticks::new(500)), 0);
    }

    #[test]
    fn frame_budget_for_common_rates() {
        assert_eq!(frame_budget(60), 16);
        assert_eq!(frame_budget(30), 33);
        // Degenerate rate is clamped instead of dividing by zero.
        assert_eq!(frame_budget(0), 1_000);
    }

    #[test]
    fn manual_clock_waits_by_jumping() {
        let mut clock = ManualClock::new();
        clock.advance(10);
        assert_eq!(clock.now(), Ticks::new(10));

        clock.wait_until(Ticks::new(26));
        assert_eq!(clock.now(), Ticks::new(26));

        // A deadline already in the past leaves time untouched.
        clock.wait_until(Ticks::new(5));
        assert_eq!(clock.now(), Ticks::new(26));
    }
}
