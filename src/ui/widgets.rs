// Shared form widgets.
// Buttons and outlined text fields styled from the palette.

use ratatui::{prelude::*, widgets::*};

use crate::state::Palette;

/// Button fill style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Solid button background.
    Filled,
    /// Text only, on whatever is behind it.
    Text,
}

/// Draw a full-width button. Focused buttons get a highlighted border.
pub fn draw_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    kind: ButtonKind,
    focused: bool,
    palette: &Palette,
) {
    let (fg, bg) = match kind {
        ButtonKind::Filled => (palette.button_text1, Some(palette.button_background)),
        ButtonKind::Text => (palette.button_text2, None),
    };

    let mut style = Style::default().fg(fg);
    if let Some(bg) = bg {
        style = style.bg(bg);
    }

    let border_style = if focused {
        Style::default()
            .fg(palette.button_background)
            .add_modifier(Modifier::BOLD)
    } else {
        match bg {
            Some(bg) => Style::default().fg(bg),
            None => Style::default().fg(palette.primary),
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(style);

    let mut text_style = style.add_modifier(Modifier::BOLD);
    if focused {
        text_style = text_style.add_modifier(Modifier::UNDERLINED);
    }

    let button = Paragraph::new(Span::styled(label.to_string(), text_style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

/// Draw an outlined text field with its label in the border.
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    palette: &Palette,
) {
    let border_style = if focused {
        Style::default().fg(palette.button_background)
    } else {
        Style::default().fg(palette.divider).add_modifier(Modifier::DIM)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", label))
        .title_style(Style::default().fg(palette.body1));

    let mut spans = vec![Span::styled(
        value.to_string(),
        Style::default().fg(palette.body1),
    )];
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default().fg(palette.button_background),
        ));
    }

    let field = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(field, area);
}

/// Horizontally centre a box of `width` inside `area`.
pub fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        let area = Rect::new(2, 1, 40, 5);
        assert_eq!(centered(area, 20), Rect::new(12, 1, 20, 5));
        assert_eq!(centered(area, 100), area);
    }
}
