//! Error types for the screen runtime.
//!
//! Configuration errors (unknown identifiers, empty registry) are wiring
//! bugs: they abort loudly with the offending identifier and are never
//! retried. Backend failures from the presentation layer are wrapped and
//! propagated out of the loop unchanged.

use crate::screen::ScreenId;

/// Errors surfaced by the director while wiring or driving screens.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// A transition named a screen that was never registered.
    #[error("no screen registered under id `{target}` (transition from `{from}`)")]
    UnknownScreen { target: ScreenId, from: ScreenId },

    /// The configured start screen is not in the registry.
    #[error("start screen `{start}` is not registered")]
    UnknownStart { start: ScreenId },

    /// No start screen was selected at build time.
    #[error("no start screen selected")]
    NoStart,

    /// The registry was empty at build time.
    #[error("no screens registered; the registry must never be empty")]
    NoScreens,

    /// The presentation or input backend failed.
    #[error(transparent)]
    Frontend(#[from] FrontendError),
}

/// Failure reported by a presentation or input backend.
#[derive(Debug, thiserror::Error)]
#[error("frontend failure: {0}")]
pub struct FrontendError(#[source] Box<dyn std::error::Error + Send + Sync>);

impl FrontendError {
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }
}

impl From<std::io::Error> for FrontendError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err)
    }
}
