//! Frame-paced screen state machine runtime.
//!
//! An interactive application is a set of mutually-exclusive screens
//! (menu, level, game-over, ...) driven by a single cooperative loop.
//! This crate owns the lifecycle contract every screen honors and the
//! controller that enforces it; concrete screens, asset loading, and
//! presentation backends live with the consumer.
//!
//! # Architecture
//!
//! - [`Screen`]: lifecycle contract (startup / per-frame update / cleanup)
//! - [`Director`]: owns the screen registry, the active screen, the input
//!   snapshot, and the main loop
//! - [`SessionData`]: the cross-screen record, owned by exactly one screen
//!   at a time and handed over by value at transitions
//! - [`FrameClock`] / [`EventSource`] / [`Frontend`]: injectable seams for
//!   time, input, and presentation, so the loop runs deterministically
//!   under test
//!
//! The loop is single-threaded: sample input, advance the active screen,
//! present, then block until the frame budget elapses. The throttle wait
//! is the only suspension point.

pub mod director;
pub mod error;
pub mod frontend;
pub mod input;
pub mod screen;
pub mod session;
pub mod time;

// Re-export core types for ergonomic API
pub use director::{Director, DirectorBuilder};
pub use error::{ControlError, FrontendError};
pub use frontend::Frontend;
pub use input::{Buttons, EventSource, InputEvent, InputState, Key, KeyBindings};
pub use screen::{Lifecycle, Screen, ScreenId};
pub use session::{ExtraKey, ExtraValue, Extras, PlayerCharacter, SessionData};
pub use time::{FrameClock, ManualClock, SystemClock, Ticks, frame_budget};
