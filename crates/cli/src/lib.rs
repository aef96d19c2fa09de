//! Terminal demo game built on the screenplay runtime.
//!
//! This crate is a consumer of `screenplay-core`: it supplies the
//! presentation backend (a ratatui buffer presented over crossterm), the
//! event pump, and the concrete screens wired into the demo's transition
//! graph (main menu, loading card, playfield, game-over card).

pub mod config;
pub mod events;
pub mod hud;
pub mod logging;
pub mod presenter;
pub mod screens;
pub mod terminal;
