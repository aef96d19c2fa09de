//! Concrete screens and the demo's transition graph.
//!
//! The graph cycles and only the external quit signal leaves it:
//!
//! ```text
//! main-menu -> loading -> playfield -> loading      (run cleared or life lost)
//!     ^                       |
//!     '----- game-over <-----'                      (lives exhausted)
//! ```

pub mod interstitial;
pub mod menu;
pub mod playfield;

pub use interstitial::Interstitial;
pub use menu::MainMenu;
pub use playfield::Playfield;

use screenplay_core::ScreenId;

pub const MAIN_MENU: ScreenId = ScreenId::new("main-menu");
pub const LOADING: ScreenId = ScreenId::new("loading");
pub const PLAYFIELD: ScreenId = ScreenId::new("playfield");
pub const GAME_OVER: ScreenId = ScreenId::new("game-over");
