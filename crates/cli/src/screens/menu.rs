//! Main menu: character select, run reset on confirm, idle auto-advance.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use screenplay_core::{
    Buttons, InputState, Lifecycle, PlayerCharacter, Screen, ScreenId, SessionData, Ticks,
};

use super::LOADING;
use crate::hud;

/// Idle ticks before the menu advances on its own. An unattended menu
/// never stalls the application.
pub const IDLE_TIMEOUT: u64 = 1_000;

/// Cursor row in the character roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CursorRow {
    First,
    Second,
}

pub struct MainMenu {
    lifecycle: Lifecycle,
    cursor: CursorRow,
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::new(LOADING),
            cursor: CursorRow::First,
        }
    }

    fn update_cursor(&mut self, input: &InputState) {
        match self.cursor {
            CursorRow::First => {
                if input.pressed(Buttons::DOWN) {
                    self.cursor = CursorRow::Second;
                    self.lifecycle.session_mut().player = PlayerCharacter::Warden;
                }
            }
            CursorRow::Second => {
                if input.pressed(Buttons::UP) {
                    self.cursor = CursorRow::First;
                    self.lifecycle.session_mut().player = PlayerCharacter::Scout;
                }
            }
        }

        if input.pressed(Buttons::CONFIRM) {
            // The only path that wipes run progress: an explicit start.
            // Re-entering the menu mid-session leaves the stats alone.
            self.lifecycle.session_mut().reset_for_new_run();
            self.lifecycle.finish(LOADING);
        }
    }

    fn render(&self, surface: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // HUD strip
                Constraint::Length(5), // Title banner
                Constraint::Min(4),    // Character roster
                Constraint::Length(2), // Footer
            ])
            .split(surface.area);

        hud::render(self.lifecycle.session(), chunks[0], surface);
        render_title(chunks[1], surface);
        self.render_roster(chunks[2], surface);
        render_footer(chunks[3], surface);
    }

    fn render_roster(&self, area: Rect, surface: &mut Buffer) {
        let roster = [
            (CursorRow::First, PlayerCharacter::Scout, Color::Cyan),
            (CursorRow::Second, PlayerCharacter::Warden, Color::Green),
        ];

        let lines: Vec<Line<'static>> = roster
            .into_iter()
            .map(|(row, character, color)| {
                let selected = self.cursor == row;
                let style = if selected {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(color)
                };
                Line::from(vec![
                    Span::styled(
                        if selected { "► " } else { "  " },
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(character.to_string(), style),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Choose Character ")
                    .title_alignment(Alignment::Center),
            )
            .render(area, surface);
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen<Buffer> for MainMenu {
    fn startup(&mut self, now: Ticks, session: SessionData) {
        // Cursor rebuilds from scratch on every activation.
        self.cursor = CursorRow::First;
        self.lifecycle.begin(now, session);
    }

    fn update(&mut self, surface: &mut Buffer, input: &InputState, now: Ticks) {
        self.lifecycle.session_mut().elapsed = now;
        self.update_cursor(input);
        self.render(surface);

        if self.lifecycle.elapsed(now) >= IDLE_TIMEOUT {
            self.lifecycle.finish(LOADING);
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

fn render_title(area: Rect, surface: &mut Buffer) {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "SCREENPLAY",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "A Tiny Terminal Caper",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .render(area, surface);
}

fn render_footer(area: Rect, surface: &mut Buffer) {
    Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::styled(" Select  ", Style::default().fg(Color::Gray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Start  ", Style::default().fg(Color::Gray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .render(area, surface);
}
