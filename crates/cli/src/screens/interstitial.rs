//! Timed interstitial cards: the loading screen and the game-over screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use screenplay_core::{
    ExtraKey, ExtraValue, InputState, Lifecycle, Screen, ScreenId, SessionData, Ticks,
};

use super::{MAIN_MENU, PLAYFIELD};

/// How long the loading card stays up, in ticks.
pub const LOADING_DURATION: u64 = 2_000;
/// How long the game-over card stays up, in ticks.
pub const GAME_OVER_DURATION: u64 = 3_000;

/// Full-screen card shown for a fixed duration, then routed onward.
///
/// Input is ignored; the card exists to pace the flow, exactly like the
/// load and game-over cards it models.
pub struct Interstitial {
    lifecycle: Lifecycle,
    caption: &'static str,
    color: Color,
    duration: u64,
    successor: ScreenId,
    show_last_run: bool,
}

impl Interstitial {
    pub fn new(caption: &'static str, duration: u64, successor: ScreenId) -> Self {
        Self {
            lifecycle: Lifecycle::new(successor),
            caption,
            color: Color::White,
            duration,
            successor,
            show_last_run: false,
        }
    }

    /// The card between the menu (or a lost life) and the playfield.
    pub fn loading() -> Self {
        let mut card = Self::new("GET READY", LOADING_DURATION, PLAYFIELD);
        card.color = Color::Cyan;
        card
    }

    /// The card shown when the last life is gone.
    pub fn game_over() -> Self {
        let mut card = Self::new("GAME OVER", GAME_OVER_DURATION, MAIN_MENU);
        card.color = Color::Red;
        card.show_last_run = true;
        card
    }

    fn render(&self, surface: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(surface.area);

        let session = self.lifecycle.session();
        let mut lines = vec![Line::from(Span::styled(
            self.caption,
            Style::default()
                .fg(self.color)
                .add_modifier(Modifier::BOLD),
        ))];

        if self.show_last_run {
            lines.push(Line::from(Span::styled(
                format!("final score {:06}", session.score),
                Style::default().fg(Color::White),
            )));
            if let Some(ExtraValue::Duration(run)) =
                session.extras.get(ExtraKey::LastRunDuration)
            {
                lines.push(Line::from(Span::styled(
                    format!("run time {}s", run.0 / 1_000),
                    Style::default().fg(Color::Gray),
                )));
            }
        } else {
            lines.push(Line::from(Span::styled(
                format!("level {}  ·  {}", session.level, session.player),
                Style::default().fg(Color::Gray),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(chunks[1], surface);
    }
}

impl Screen<Buffer> for Interstitial {
    fn startup(&mut self, now: Ticks, session: SessionData) {
        self.lifecycle.begin(now, session);
    }

    fn update(&mut self, surface: &mut Buffer, _input: &InputState, now: Ticks) {
        self.lifecycle.session_mut().elapsed = now;
        self.render(surface);

        if self.lifecycle.elapsed(now) >= self.duration {
            self.lifecycle.finish(self.successor);
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
