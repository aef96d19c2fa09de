//! Demo game entry point.
use anyhow::Result;

use screenplay_cli::{
    config::CliConfig,
    events::CrosstermEvents,
    logging,
    presenter::TuiPresenter,
    screens::{self, Interstitial, MainMenu, Playfield},
    terminal,
};
use screenplay_core::{Director, KeyBindings, SystemClock};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    logging::init(config.log_dir.as_deref())?;

    let mut director = Director::builder()
        .screen(screens::MAIN_MENU, MainMenu::new())
        .screen(screens::LOADING, Interstitial::loading())
        .screen(screens::PLAYFIELD, Playfield::new())
        .screen(screens::GAME_OVER, Interstitial::game_over())
        .start(screens::MAIN_MENU)
        .bindings(KeyBindings::default())
        .target_fps(config.target_fps)
        .build()?;

    let (tui, release_events) = terminal::init()?;
    let _guard = terminal::TerminalGuard;

    let mut frontend = TuiPresenter::new(tui)?;
    let mut events = CrosstermEvents::new(release_events);
    let mut clock = SystemClock::new();

    let result = director.run(&mut frontend, &mut events, &mut clock);

    drop(_guard);
    result?;
    Ok(())
}
