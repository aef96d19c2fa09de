//! One-line status strip shared by the menu and the playfield.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use screenplay_core::SessionData;

fn field(label: &'static str, value: String, color: Color) -> [Span<'static>; 3] {
    [
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
        Span::raw("  "),
    ]
}

/// Render the status strip into `area`.
pub fn render(session: &SessionData, area: Rect, buf: &mut Buffer) {
    let seconds = session.elapsed.0 / 1_000;
    let spans: Vec<Span<'static>> = [
        field("SCORE ", format!("{:06}", session.score), Color::White),
        field("COINS ", format!("{:02}", session.coins), Color::Yellow),
        field("LIVES ", format!("{}", session.lives), Color::Red),
        field("TOP ", format!("{:06}", session.top_score), Color::Cyan),
        field("LVL ", format!("{}", session.level), Color::Green),
        field("TIME ", format!("{seconds}"), Color::Gray),
    ]
    .into_iter()
    .flatten()
    .collect();

    Paragraph::new(Line::from(spans)).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_shows_the_session_fields() {
        let mut session = SessionData::default();
        session.score = 1_234;
        session.coins = 9;

        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render(&session, area, &mut buf);

        let row: String = (0..80)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(row.contains("001234"));
        assert!(row.contains("09"));
        assert!(row.contains("LIVES"));
    }
}
