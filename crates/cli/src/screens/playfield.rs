//! Minimal demo level: a one-row track with pickups under a run timer.
//!
//! No physics and no collision: movement is a column index and pickups
//! collect by standing on them (coins) or jumping under them (gems).
//! What the screen is here to exercise is the session record: every
//! field gets written across a run.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use screenplay_core::{
    Buttons, ExtraKey, ExtraValue, InputState, Lifecycle, PlayerCharacter, Screen, ScreenId,
    SessionData, Ticks,
};

use super::{GAME_OVER, LOADING};
use crate::hud;

/// Length of one run in ticks.
pub const RUN_DURATION: u64 = 30_000;

/// Abstract track length; render maps it onto the terminal width.
const TRACK_LEN: u16 = 64;
/// Minimum ticks between movement steps while a direction is held.
const STEP_INTERVAL: u64 = 60;

const COIN_SCORE: u32 = 150;
const GEM_SCORE: u32 = 300;
const CLEAR_BONUS: u32 = 500;

pub struct Playfield {
    lifecycle: Lifecycle,
    player: u16,
    coins: Vec<u16>,
    gems: Vec<u16>,
    last_step: Ticks,
}

impl Playfield {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::new(LOADING),
            player: TRACK_LEN / 2,
            coins: Vec::new(),
            gems: Vec::new(),
            last_step: Ticks::ZERO,
        }
    }

    /// Pickup layout for a level. Deterministic: the same level always
    /// plays the same track.
    fn seed_track(level: u32) -> (Vec<u16>, Vec<u16>) {
        let shift = (level as u16 * 5) % TRACK_LEN;
        let coins = (0..6).map(|i| (shift + 3 + i * 9) % TRACK_LEN).collect();
        let gems = (0..3).map(|i| (shift + 7 + i * 19) % TRACK_LEN).collect();
        (coins, gems)
    }

    fn step(&mut self, input: &InputState, now: Ticks) {
        if now.since(self.last_step) < STEP_INTERVAL {
            return;
        }
        let mut moved = false;
        if input.pressed(Buttons::LEFT) && self.player > 0 {
            self.player -= 1;
            moved = true;
        } else if input.pressed(Buttons::RIGHT) && self.player < TRACK_LEN - 1 {
            self.player += 1;
            moved = true;
        }
        if moved {
            self.last_step = now;
        }
    }

    fn collect(&mut self, input: &InputState) {
        let player = self.player;
        let session = self.lifecycle.session_mut();

        if let Some(i) = self.coins.iter().position(|&c| c == player) {
            self.coins.remove(i);
            session.coins += 1;
            session.score += COIN_SCORE;
        }

        if input.pressed(Buttons::JUMP) {
            if let Some(i) = self.gems.iter().position(|&g| g == player) {
                self.gems.remove(i);
                session.coins += 1;
                session.score += GEM_SCORE;
            }
        }
    }

    fn close_run(&mut self, run_time: u64, next: ScreenId) {
        let session = self.lifecycle.session_mut();
        session.record_run_score();
        session.extras.set(
            ExtraKey::LastRunDuration,
            ExtraValue::Duration(Ticks::new(run_time)),
        );
        self.lifecycle.finish(next);
    }

    fn render(&self, surface: &mut Buffer, now: Ticks) {
        let area = surface.area;
        if area.height < 5 || area.width < 10 {
            return;
        }

        hud::render(self.lifecycle.session(), Rect { height: 1, ..area }, surface);

        let remaining = RUN_DURATION.saturating_sub(self.lifecycle.elapsed(now)) / 1_000;
        Paragraph::new(Line::from(vec![
            Span::styled("TIME LEFT ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{remaining:02}"), Style::default().fg(Color::White)),
        ]))
        .render(Rect { y: area.y + 1, height: 1, ..area }, surface);

        let ground = area.bottom() - 2;
        for x in area.left()..area.right() {
            if let Some(cell) = surface.cell_mut((x, ground + 1)) {
                cell.set_char('=').set_fg(Color::DarkGray);
            }
        }

        for &coin in &self.coins {
            if let Some(cell) = surface.cell_mut((track_to_x(area, coin), ground)) {
                cell.set_char('o').set_fg(Color::Yellow);
            }
        }
        for &gem in &self.gems {
            if let Some(cell) = surface.cell_mut((track_to_x(area, gem), ground - 1)) {
                cell.set_char('*').set_fg(Color::Magenta);
            }
        }

        let player_color = match self.lifecycle.session().player {
            PlayerCharacter::Scout => Color::Cyan,
            PlayerCharacter::Warden => Color::Green,
        };
        if let Some(cell) = surface.cell_mut((track_to_x(area, self.player), ground)) {
            cell.set_char('@').set_fg(player_color);
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen<Buffer> for Playfield {
    fn startup(&mut self, now: Ticks, session: SessionData) {
        let (coins, gems) = Self::seed_track(session.level);
        self.coins = coins;
        self.gems = gems;
        self.player = TRACK_LEN / 2;
        self.last_step = now;
        self.lifecycle.begin(now, session);
    }

    fn update(&mut self, surface: &mut Buffer, input: &InputState, now: Ticks) {
        self.lifecycle.session_mut().elapsed = now;
        self.step(input, now);
        self.collect(input);
        self.render(surface, now);

        let run_time = self.lifecycle.elapsed(now);
        if self.coins.is_empty() && self.gems.is_empty() {
            let session = self.lifecycle.session_mut();
            session.score += CLEAR_BONUS;
            session.level += 1;
            self.close_run(run_time, LOADING);
        } else if run_time >= RUN_DURATION {
            let session = self.lifecycle.session_mut();
            session.lives = session.lives.saturating_sub(1);
            let next = if session.lives == 0 { GAME_OVER } else { LOADING };
            self.close_run(run_time, next);
        }
    }

    fn cleanup(&mut self) -> SessionData {
        self.lifecycle.end()
    }

    fn is_done(&self) -> bool {
        self.lifecycle.is_done()
    }

    fn next_screen(&self) -> ScreenId {
        self.lifecycle.next()
    }
}

fn track_to_x(area: Rect, pos: u16) -> u16 {
    let playable = area.width.saturating_sub(2).max(1);
    area.left() + 1 + (u32::from(pos) * u32::from(playable) / u32::from(TRACK_LEN)) as u16
}
