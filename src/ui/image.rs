// Image view widget.
// Draws a slot's state: a spinner, the decoded bitmap in half blocks,
// or the error placeholder.

use ratatui::{prelude::*, widgets::*};

use crate::image::{DecodedImage, ImageLoadState};
use crate::state::Palette;

pub const ERROR_TEXT: &str = "Could not load image";
const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Renders an [`ImageLoadState`] into its area.
pub struct ImageView<'a> {
    state: &'a ImageLoadState,
    palette: &'a Palette,
    tick: usize,
}

impl<'a> ImageView<'a> {
    pub fn new(state: &'a ImageLoadState, palette: &'a Palette) -> Self {
        Self {
            state,
            palette,
            tick: 0,
        }
    }

    /// Animation step for the loading spinner.
    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }
}

fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

impl Widget for ImageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        match self.state {
            ImageLoadState::Loading => {
                Paragraph::new(spinner_frame(self.tick))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(self.palette.caption))
                    .render(middle_row(area), buf);
            }
            ImageLoadState::Error => {
                Block::default()
                    .style(Style::default().bg(self.palette.surface))
                    .render(area, buf);
                Paragraph::new(ERROR_TEXT)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .style(
                        Style::default()
                            .fg(self.palette.caption)
                            .bg(self.palette.surface),
                    )
                    .render(area, buf);
            }
            ImageLoadState::Loaded { image } => render_half_blocks(image, area, buf),
        }
    }
}

fn middle_row(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height / 2, area.width, 1)
}

/// Two image rows per cell: upper pixel as foreground of '▀', lower pixel
/// as background. The image is sampled nearest-neighbour to fit.
fn render_half_blocks(image: &DecodedImage, area: Rect, buf: &mut Buffer) {
    if image.width == 0 || image.height == 0 {
        return;
    }
    let rows = u32::from(area.height) * 2;
    let cols = u32::from(area.width);

    for cy in 0..area.height {
        for cx in 0..area.width {
            let ix = u32::from(cx) * image.width / cols;
            let top = u32::from(cy) * 2 * image.height / rows;
            let bottom = (u32::from(cy) * 2 + 1) * image.height / rows;

            let (Some(upper), Some(lower)) = (image.pixel(ix, top), image.pixel(ix, bottom)) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                cell.set_symbol("▀")
                    .set_fg(Color::Rgb(upper[0], upper[1], upper[2]))
                    .set_bg(Color::Rgb(lower[0], lower[1], lower[2]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn render_state(state: &ImageLoadState, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        ImageView::new(state, &Palette::LIGHT).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_error_placeholder() {
        let buf = render_state(&ImageLoadState::Error, 24, 3);
        let text = crate::ui::tests::buffer_text(&buf);
        assert!(text.contains(ERROR_TEXT));
    }

    #[test]
    fn test_loaded_half_blocks() {
        // 1x2 image: red on top, blue below
        let image = DecodedImage::new(1, 2, vec![255, 0, 0, 255, 0, 0, 255, 255]);
        let state = ImageLoadState::Loaded {
            image: Arc::new(image),
        };
        let buf = render_state(&state, 2, 1);

        let cell = buf.cell((1, 0)).unwrap();
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_loading_spinner_turns() {
        let area = Rect::new(0, 0, 5, 3);
        let mut frames = Vec::new();
        for tick in 0..3 {
            let mut buf = Buffer::empty(area);
            ImageView::new(&ImageLoadState::Loading, &Palette::LIGHT)
                .tick(tick)
                .render(area, &mut buf);
            let text = crate::ui::tests::buffer_text(&buf);
            let middle = text.lines().nth(1).unwrap().to_string();
            assert!(middle.contains(spinner_frame(tick)));
            frames.push(middle);
        }
        assert_ne!(frames[0], frames[1]);
        assert_ne!(frames[1], frames[2]);
        assert_eq!(spinner_frame(SPINNER.len()), spinner_frame(0));
    }
}
