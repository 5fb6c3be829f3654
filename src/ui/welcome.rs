// Welcome screen.
// Leaf art, wordmark, subtitle and the two entry buttons on the primary
// background.

use ratatui::{prelude::*, widgets::*};

use super::widgets::{ButtonKind, centered, draw_button};
use crate::app::App;
use crate::state::{Palette, WelcomeFocus};

const SUBTITLE: &str = "Beautiful home garden solutions";
const BUTTON_WIDTH: u16 = 36;

const LEAVES: [&str; 3] = [r"  \\ | //  ", r"   \\|//   ", r"  ~~~|~~~  "];

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.primary)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Theme toggle
            Constraint::Min(0),
            Constraint::Length(3), // Leaves
            Constraint::Length(1),
            Constraint::Length(1), // Wordmark
            Constraint::Length(1), // Subtitle
            Constraint::Length(1),
            Constraint::Length(3), // Create account
            Constraint::Length(3), // Log in
            Constraint::Min(0),
        ])
        .split(area);

    let toggle = Paragraph::new(Span::styled(
        if app.theme.is_light() { "◐ t " } else { "◑ t " },
        Style::default().fg(palette.h1),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, chunks[0]);

    let leaves: Vec<Line> = LEAVES
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(palette.secondary))))
        .collect();
    frame.render_widget(
        Paragraph::new(leaves).alignment(Alignment::Center),
        chunks[2],
    );

    let wordmark = Paragraph::new(Span::styled(
        "b l o o m",
        Style::default().fg(palette.h1).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(wordmark, chunks[4]);

    let subtitle = Paragraph::new(Span::styled(
        SUBTITLE,
        Style::default().fg(palette.subtitle),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[5]);

    draw_button(
        frame,
        centered(chunks[7], BUTTON_WIDTH),
        "Create account",
        ButtonKind::Filled,
        app.welcome_focus == WelcomeFocus::CreateAccount,
        palette,
    );
    draw_button(
        frame,
        centered(chunks[8], BUTTON_WIDTH),
        "Log in",
        ButtonKind::Text,
        app.welcome_focus == WelcomeFocus::LogIn,
        palette,
    );
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::ui::tests::{app_with, render};

    #[tokio::test]
    async fn test_welcome_content() {
        let app = app_with(&Config::default());
        let text = render(&app, 60, 30);
        assert!(text.contains("b l o o m"));
        assert!(text.contains("Beautiful home garden solutions"));
        assert!(text.contains("Create account"));
        assert!(text.contains("Log in"));
    }
}
