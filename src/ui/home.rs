// Home screen.
// Search field, theme card row and the garden checklist, with the page
// tabs underneath.

use ratatui::{prelude::*, widgets::*};

use super::bottom_bar::draw_bottom_bar;
use super::image::ImageView;
use super::widgets::draw_text_field;
use crate::app::App;
use crate::state::home::{GARDEN_IMAGE_SIZE, THEME_IMAGE_SIZE};
use crate::state::{HomeFocus, HomePage, HomeState, Palette};

const CARD_IMAGE_WIDTH: u16 = THEME_IMAGE_SIZE.0 as u16;
const CARD_IMAGE_HEIGHT: u16 = (THEME_IMAGE_SIZE.1 / 2) as u16;
const CARD_WIDTH: u16 = CARD_IMAGE_WIDTH + 2;
const CARD_HEIGHT: u16 = CARD_IMAGE_HEIGHT + 3;
const CARD_GAP: u16 = 1;

const ROW_IMAGE_WIDTH: u16 = GARDEN_IMAGE_SIZE.0 as u16;
const ROW_HEIGHT: u16 = (GARDEN_IMAGE_SIZE.1 / 2) as u16;

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(area);

    let home = &app.home;
    match home.page {
        HomePage::Home => draw_home_page(frame, home, app.tick, palette, chunks[0]),
        page => draw_empty_page(frame, page, palette, chunks[0]),
    }

    draw_bottom_bar(frame, home.page, palette, chunks[1]);
}

fn draw_empty_page(frame: &mut Frame, page: HomePage, palette: &Palette, area: Rect) {
    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    let text = Paragraph::new(Span::styled(
        page.title(),
        Style::default().fg(palette.h2).add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(text, middle);
}

fn draw_home_page(frame: &mut Frame, home: &HomeState, tick: usize, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Length(1), // Themes header
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1), // Garden header
            Constraint::Min(0),    // Garden rows
        ])
        .split(area);

    draw_text_field(
        frame,
        chunks[0],
        "Search",
        home.search.value(),
        home.focus == HomeFocus::Search,
        palette,
    );

    frame.render_widget(section_header("Browse themes", palette), chunks[1]);
    draw_theme_cards(frame, home, tick, palette, chunks[2]);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(chunks[4]);
    frame.render_widget(section_header("Design your home garden", palette), header[0]);
    frame.render_widget(
        Paragraph::new(Span::styled("≡", Style::default().fg(palette.h1))),
        header[1],
    );

    draw_garden(frame, home, tick, palette, chunks[5]);
}

fn section_header<'a>(title: &'a str, palette: &Palette) -> Paragraph<'a> {
    Paragraph::new(Span::styled(
        title,
        Style::default().fg(palette.h1).add_modifier(Modifier::BOLD),
    ))
}

/// First index of a window of `fit` items that keeps `cursor` visible.
fn window_start(cursor: usize, fit: usize) -> usize {
    if fit == 0 {
        return 0;
    }
    cursor.saturating_sub(fit - 1)
}

fn draw_theme_cards(
    frame: &mut Frame,
    home: &HomeState,
    tick: usize,
    palette: &Palette,
    area: Rect,
) {
    let fit = usize::from((area.width + CARD_GAP) / (CARD_WIDTH + CARD_GAP));
    let start = window_start(home.theme_cursor, fit);
    let focused = home.focus == HomeFocus::Themes;

    for (slot_index, (index, (plant, slot))) in home
        .theme_cards()
        .enumerate()
        .skip(start)
        .take(fit)
        .enumerate()
    {
        let x = area.x + slot_index as u16 * (CARD_WIDTH + CARD_GAP);
        let card = Rect::new(x, area.y, CARD_WIDTH, area.height.min(CARD_HEIGHT));

        let selected = index == home.theme_cursor;
        let border_style = if selected && focused {
            Style::default()
                .fg(palette.button_background)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.divider)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(palette.surface));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CARD_IMAGE_HEIGHT), Constraint::Length(1)])
            .split(inner);
        frame.render_widget(ImageView::new(slot.state(), palette).tick(tick), parts[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(
                plant.name,
                Style::default().fg(palette.h2).add_modifier(Modifier::BOLD),
            )),
            parts[1],
        );
    }
}

fn draw_garden(frame: &mut Frame, home: &HomeState, tick: usize, palette: &Palette, area: Rect) {
    let rows = home.garden_rows();
    if rows.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No plants match your search",
            Style::default().fg(palette.body2).add_modifier(Modifier::DIM),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let fit = usize::from(area.height / ROW_HEIGHT);
    let start = window_start(home.garden_cursor, fit);
    let focused = home.focus == HomeFocus::Garden;

    for (line, (row, (plant_index, plant, slot))) in
        rows.iter().enumerate().skip(start).take(fit).enumerate()
    {
        let y = area.y + line as u16 * ROW_HEIGHT;
        let row_area = Rect::new(area.x, y, area.width, ROW_HEIGHT);
        let selected = focused && row == home.garden_cursor;

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(ROW_IMAGE_WIDTH),
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(4),
            ])
            .split(row_area);

        frame.render_widget(ImageView::new(slot.state(), palette).tick(tick), cols[0]);

        let mut name_style = Style::default().fg(palette.h2).add_modifier(Modifier::BOLD);
        if selected {
            name_style = name_style.add_modifier(Modifier::UNDERLINED);
        }
        let marker = if selected { "› " } else { "" };
        let text = vec![
            Line::from(Span::styled(format!("{}{}", marker, plant.name), name_style)),
            Line::from(Span::styled(
                plant.description,
                Style::default().fg(palette.body1),
            )),
            Line::default(),
            Line::from(Span::styled(
                "─".repeat(usize::from(cols[2].width)),
                Style::default().fg(palette.divider),
            )),
        ];
        frame.render_widget(Paragraph::new(text), cols[2]);

        let checkbox = if home.is_checked(*plant_index) {
            Span::styled(
                "[x]",
                Style::default()
                    .fg(palette.secondary)
                    .bg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("[ ]", Style::default().fg(palette.body1))
        };
        frame.render_widget(
            Paragraph::new(checkbox).alignment(Alignment::Right),
            Rect::new(cols[3].x, cols[3].y, cols[3].width, 1),
        );
    }
}
