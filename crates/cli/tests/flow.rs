//! Whole-graph flow: the unattended demo cycles and never stalls.

use ratatui::{buffer::Buffer, layout::Rect};
use screenplay_cli::screens::{self, Interstitial, MainMenu, Playfield};
use screenplay_core::{Director, ScreenId, Ticks};

#[test]
fn unattended_demo_cycles_through_every_screen() {
    let mut director = Director::builder()
        .screen(screens::MAIN_MENU, MainMenu::new())
        .screen(screens::LOADING, Interstitial::loading())
        .screen(screens::PLAYFIELD, Playfield::new())
        .screen(screens::GAME_OVER, Interstitial::game_over())
        .start(screens::MAIN_MENU)
        .build()
        .unwrap();

    let mut surface = Buffer::empty(Rect::new(0, 0, 80, 24));
    let mut visited: Vec<ScreenId> = vec![director.active()];

    // Simulated idle frames at the 60 FPS cadence. With no input the
    // menu auto-advances, every run times out, and three lost lives
    // reach the game-over card and come back around to the menu.
    for frame in 0..7_000u64 {
        director
            .advance_frame(&mut surface, Ticks::new(frame * 16))
            .unwrap();
        if visited.last() != Some(&director.active()) {
            visited.push(director.active());
        }
    }

    let expected = [
        screens::MAIN_MENU,
        screens::LOADING,
        screens::PLAYFIELD,
        screens::LOADING,
        screens::PLAYFIELD,
        screens::LOADING,
        screens::PLAYFIELD,
        screens::GAME_OVER,
        screens::MAIN_MENU,
    ];
    assert!(
        visited.len() >= expected.len(),
        "visited only {visited:?}"
    );
    assert_eq!(&visited[..expected.len()], &expected);
}
