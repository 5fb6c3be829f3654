// Login screen.
// Email and password fields, the terms notice and the log in button.

use ratatui::{prelude::*, widgets::*};

use super::widgets::{ButtonKind, centered, draw_button, draw_text_field};
use crate::app::App;
use crate::state::{LoginFocus, Palette};

const FORM_WIDTH: u16 = 48;

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(3), // Terms
            Constraint::Length(3), // Button
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Log in with email",
        Style::default().fg(palette.h1).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let login = &app.login;
    draw_text_field(
        frame,
        centered(chunks[3], FORM_WIDTH),
        "Email address",
        &login.email.display(),
        login.focus == LoginFocus::Email,
        palette,
    );
    draw_text_field(
        frame,
        centered(chunks[4], FORM_WIDTH),
        "Password (8+ characters)",
        &login.password.display(),
        login.focus == LoginFocus::Password,
        palette,
    );

    let body = Style::default().fg(palette.body2);
    let link = body.add_modifier(Modifier::UNDERLINED);
    let terms = Paragraph::new(Line::from(vec![
        Span::styled("By clicking below you agree to our ", body),
        Span::styled("Terms of Use", link),
        Span::styled(" and consent to our ", body),
        Span::styled("Privacy Policy", link),
        Span::styled(".", body),
    ]))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(terms, centered(chunks[5], FORM_WIDTH));

    draw_button(
        frame,
        centered(chunks[6], FORM_WIDTH),
        "Log in",
        ButtonKind::Filled,
        login.focus == LoginFocus::Button,
        palette,
    );
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::state::Screen;
    use crate::ui::tests::{app_with, render};

    #[tokio::test]
    async fn test_password_is_masked() {
        let mut app = app_with(&Config::default());
        app.nav.push(Screen::Login);
        for c in "ivy@example.com".chars() {
            app.login.type_char(c);
        }
        app.login.focus = app.login.focus.next();
        for c in "sunflower".chars() {
            app.login.type_char(c);
        }

        let text = render(&app, 60, 30);
        assert!(text.contains("Log in with email"));
        assert!(text.contains("ivy@example.com"));
        assert!(text.contains("•••••••••"));
        assert!(!text.contains("sunflower"));
        assert!(text.contains("Terms of Use"));
    }
}
