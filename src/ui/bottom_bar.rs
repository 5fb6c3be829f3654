// Bottom navigation bar for the home screen.
// One tab per page, the selected page highlighted.

use ratatui::{prelude::*, widgets::*};

use crate::state::{HomePage, Palette};

fn icon(page: HomePage) -> &'static str {
    match page {
        HomePage::Home => "⌂",
        HomePage::Favorites => "♡",
        HomePage::Profile => "◉",
        HomePage::Cart => "▣",
    }
}

/// Draw the page tabs along the bottom of the home screen.
pub fn draw_bottom_bar(frame: &mut Frame, selected: HomePage, palette: &Palette, area: Rect) {
    let titles: Vec<Line> = HomePage::ALL
        .iter()
        .map(|page| {
            let style = if *page == selected {
                Style::default()
                    .fg(palette.caption)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(palette.body1)
                    .add_modifier(Modifier::DIM)
            };
            Line::from(Span::styled(
                format!("{} {} {}", page.index() + 1, icon(*page), page.title()),
                style,
            ))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.divider)),
        )
        .style(Style::default().bg(palette.primary))
        .select(selected.index())
        .highlight_style(Style::default().fg(palette.caption))
        .divider(Span::raw("  "));

    frame.render_widget(tabs, area);
}
