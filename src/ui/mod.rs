// UI module for rendering the TUI.
// Picks the screen to draw from the navigation stack and frames it with the
// status line and key hints.

mod bottom_bar;
mod home;
mod image;
mod login;
mod welcome;
mod widgets;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::{Chrome, Screen, chrome_for};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let screen = app.nav.current();
    let chrome = chrome_for(screen, &palette);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Min(1),    // Screen
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_status_line(frame, app, &chrome, chunks[0]);

    match screen {
        Screen::Welcome => welcome::draw(frame, app, &palette, chunks[1]),
        Screen::Login => login::draw(frame, app, &palette, chunks[1]),
        Screen::Home => home::draw(frame, app, &palette, chunks[1]),
    }

    draw_hint_bar(frame, screen, app.nav.can_go_back(), &chrome, chunks[2]);
}

/// App name, navigation trail and active theme.
fn draw_status_line(frame: &mut Frame, app: &App, chrome: &Chrome, area: Rect) {
    let style = Style::default().fg(chrome.status_fg).bg(chrome.status_bg);

    let mut spans = vec![Span::styled(
        " bloom ",
        style.add_modifier(Modifier::BOLD),
    )];
    let trail = app.nav.trail();
    for (i, title) in trail.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", style.add_modifier(Modifier::DIM)));
        }
        let item_style = if i == trail.len() - 1 {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        };
        spans.push(Span::styled(*title, item_style));
    }

    let theme = if app.theme.is_light() { "light " } else { "dark " };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(theme.len() as u16)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), chunks[0]);
    frame.render_widget(
        Paragraph::new(theme)
            .alignment(Alignment::Right)
            .style(style.add_modifier(Modifier::DIM)),
        chunks[1],
    );
}

/// Draw the key hints for the current screen.
fn draw_hint_bar(frame: &mut Frame, screen: Screen, can_go_back: bool, chrome: &Chrome, area: Rect) {
    let key = Style::default()
        .fg(chrome.hint_fg)
        .add_modifier(Modifier::BOLD);
    let label = Style::default()
        .fg(chrome.hint_fg)
        .add_modifier(Modifier::DIM);

    let pairs: &[(&str, &str)] = match screen {
        Screen::Welcome => &[
            ("←→", "Focus"),
            ("↵", "Select"),
            ("t", "Theme"),
        ],
        Screen::Login => &[("Tab", "Next field"), ("↵", "Continue")],
        Screen::Home => &[
            ("Tab", "Section"),
            ("←→", "Move"),
            ("↑↓", "Garden"),
            ("Space", "Check"),
            ("/", "Search"),
            ("1-4", "Page"),
            ("t", "Theme"),
        ],
    };

    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (k, l) in pairs {
        spans.push(Span::styled(format!(" {} ", k), key));
        spans.push(Span::styled(format!("{} ", l), label));
    }
    spans.push(Span::styled(" Esc ", key));
    spans.push(Span::styled(if can_go_back { "Back" } else { "Quit" }, label));

    let hints = Paragraph::new(Line::from(spans)).style(Style::default().bg(chrome.hint_bg));
    frame.render_widget(hints, area);
}
