//! Menu contract tests: selection, reset-on-confirm, idle auto-advance.
//!
//! Screens are driven directly against an off-screen buffer; no terminal
//! or wall clock is involved.

use ratatui::{buffer::Buffer, layout::Rect};
use screenplay_cli::screens::{
    self, Interstitial, MainMenu,
    interstitial::{GAME_OVER_DURATION, LOADING_DURATION},
    menu::IDLE_TIMEOUT,
};
use screenplay_core::{
    Buttons, InputState, PlayerCharacter, Screen, SessionData, Ticks,
};

fn surface() -> Buffer {
    Buffer::empty(Rect::new(0, 0, 80, 24))
}

fn idle() -> InputState {
    InputState::idle()
}

fn holding(buttons: Buttons) -> InputState {
    InputState::holding(buttons)
}

#[test]
fn menu_times_out_after_the_idle_threshold() {
    let mut menu = MainMenu::new();
    menu.startup(Ticks::ZERO, SessionData::default());

    for t in [1, 250, IDLE_TIMEOUT - 1] {
        menu.update(&mut surface(), &idle(), Ticks::new(t));
        assert!(!menu.is_done(), "done too early at t={t}");
    }

    menu.update(&mut surface(), &idle(), Ticks::new(IDLE_TIMEOUT));
    assert!(menu.is_done());
    assert_eq!(menu.next_screen(), screens::LOADING);
}

#[test]
fn timeout_counts_from_activation_not_from_zero() {
    let mut menu = MainMenu::new();
    menu.startup(Ticks::new(5_000), SessionData::default());

    menu.update(&mut surface(), &idle(), Ticks::new(5_000 + IDLE_TIMEOUT - 1));
    assert!(!menu.is_done());

    menu.update(&mut surface(), &idle(), Ticks::new(5_000 + IDLE_TIMEOUT));
    assert!(menu.is_done());
}

#[test]
fn down_then_confirm_selects_the_alternate_character() {
    let mut menu = MainMenu::new();
    menu.startup(Ticks::ZERO, SessionData::default());

    menu.update(&mut surface(), &holding(Buttons::DOWN), Ticks::new(10));
    assert!(!menu.is_done());

    menu.update(&mut surface(), &holding(Buttons::CONFIRM), Ticks::new(20));
    assert!(menu.is_done());
    assert_eq!(menu.next_screen(), screens::LOADING);

    let session = menu.cleanup();
    assert_eq!(session.player, PlayerCharacter::Warden);
}

#[test]
fn up_from_the_alternate_selection_reverts_the_identity() {
    let mut menu = MainMenu::new();
    menu.startup(Ticks::ZERO, SessionData::default());

    menu.update(&mut surface(), &holding(Buttons::DOWN), Ticks::new(10));
    menu.update(&mut surface(), &idle(), Ticks::new(20));
    menu.update(&mut surface(), &holding(Buttons::UP), Ticks::new(30));
    menu.update(&mut surface(), &holding(Buttons::CONFIRM), Ticks::new(40));

    let session = menu.cleanup();
    assert_eq!(session.player, PlayerCharacter::Scout);
}

#[test]
fn confirm_resets_run_statistics_but_keeps_top_score_and_player() {
    let mut carried = SessionData::default();
    carried.coins = 31;
    carried.score = 5_500;
    carried.lives = 1;
    carried.top_score = 8_000;
    carried.level = 3;
    carried.player = PlayerCharacter::Warden;

    let mut menu = MainMenu::new();
    menu.startup(Ticks::ZERO, carried);
    menu.update(&mut surface(), &holding(Buttons::CONFIRM), Ticks::new(10));

    let session = menu.cleanup();
    assert_eq!(session.coins, 0);
    assert_eq!(session.score, 0);
    assert_eq!(session.lives, SessionData::STARTING_LIVES);
    assert_eq!(session.level, SessionData::STARTING_LEVEL);
    assert_eq!(session.top_score, 8_000);
    assert_eq!(session.player, PlayerCharacter::Warden);
}

#[test]
fn idle_timeout_does_not_wipe_progress() {
    let mut carried = SessionData::default();
    carried.score = 5_500;
    carried.lives = 2;

    let mut menu = MainMenu::new();
    menu.startup(Ticks::ZERO, carried);
    menu.update(&mut surface(), &idle(), Ticks::new(IDLE_TIMEOUT));
    assert!(menu.is_done());

    // Re-entering the menu mid-session must not silently reset anything.
    let session = menu.cleanup();
    assert_eq!(session.score, 5_500);
    assert_eq!(session.lives, 2);
}

#[test]
fn menu_lifecycle_repeats_identically() {
    let mut menu = MainMenu::new();

    menu.startup(Ticks::ZERO, SessionData::default());
    menu.update(&mut surface(), &idle(), Ticks::new(IDLE_TIMEOUT));
    assert!(menu.is_done());
    let session = menu.cleanup();
    assert!(!menu.is_done());

    // Second activation, shifted in time, behaves the same.
    menu.startup(Ticks::new(60_000), session);
    menu.update(&mut surface(), &idle(), Ticks::new(60_000 + IDLE_TIMEOUT - 1));
    assert!(!menu.is_done());
    menu.update(&mut surface(), &idle(), Ticks::new(60_000 + IDLE_TIMEOUT));
    assert!(menu.is_done());
}

#[test]
fn loading_card_routes_to_the_playfield_after_its_duration() {
    let mut card = Interstitial::loading();
    card.startup(Ticks::ZERO, SessionData::default());

    card.update(&mut surface(), &idle(), Ticks::new(LOADING_DURATION - 1));
    assert!(!card.is_done());

    card.update(&mut surface(), &idle(), Ticks::new(LOADING_DURATION));
    assert!(card.is_done());
    assert_eq!(card.next_screen(), screens::PLAYFIELD);
}

#[test]
fn game_over_card_routes_back_to_the_menu() {
    let mut card = Interstitial::game_over();
    card.startup(Ticks::ZERO, SessionData::default());

    card.update(&mut surface(), &idle(), Ticks::new(GAME_OVER_DURATION));
    assert!(card.is_done());
    assert_eq!(card.next_screen(), screens::MAIN_MENU);
}
