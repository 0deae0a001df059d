//! Marquee widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use std::time::Instant;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::LogoLoopState;

/// Renders a [`LogoLoopState`] at a point in time
pub struct LogoLoop<'a> {
    state: &'a LogoLoopState,
    now: Instant,
    style: Style,
    item_style: Style,
}

impl<'a> LogoLoop<'a> {
    pub fn new(state: &'a LogoLoopState, now: Instant) -> Self {
        Self {
            state,
            now,
            style: Style::default(),
            item_style: Style::default(),
        }
    }

    /// Background style of the strip
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn item_style(mut self, style: Style) -> Self {
        self.item_style = style;
        self
    }

    fn render_horizontal(&self, area: Rect, buf: &mut Buffer, offset: i64) {
        let y = area.y + area.height / 2;
        let gap = i64::from(self.state.config().gap);
        let right = i64::from(area.right());

        let mut cursor = i64::from(area.x) + offset;
        for item in self.state.track() {
            if cursor >= right {
                break;
            }
            draw_clipped(buf, area, cursor, y, &item.label, self.item_style);
            cursor += item.label.width() as i64 + gap;
        }
    }

    fn render_vertical(&self, area: Rect, buf: &mut Buffer, offset: i64) {
        let gap = i64::from(self.state.config().gap);
        let top = i64::from(area.y);
        let bottom = i64::from(area.bottom());

        let mut row = top + offset;
        for item in self.state.track() {
            if row >= bottom {
                break;
            }
            if row >= top {
                let width = item.label.width().min(usize::from(area.width)) as u16;
                let x = area.x + (area.width - width) / 2;
                buf.set_stringn(
                    x,
                    row as u16,
                    &item.label,
                    usize::from(area.width),
                    self.item_style,
                );
            }
            row += 1 + gap;
        }
    }

    /// Fade both leading and trailing edges towards the fade colour
    fn render_fade(&self, area: Rect, buf: &mut Buffer) {
        let config = self.state.config();
        let horizontal = config.direction.is_horizontal();
        let length = if horizontal { area.width } else { area.height };
        let width = config.fade_width.min(length / 2);

        for step in 0..width {
            // Outer half takes the fade colour, inner half is only dimmed
            let outer = step < width.div_ceil(2);
            let near = step;
            let far = length - 1 - step;

            for along in [near, far] {
                let cells: Vec<(u16, u16)> = if horizontal {
                    (area.y..area.bottom()).map(|y| (area.x + along, y)).collect()
                } else {
                    (area.x..area.right()).map(|x| (x, area.y + along)).collect()
                };
                for position in cells {
                    let cell = &mut buf[position];
                    if outer {
                        cell.set_fg(config.fade_color);
                    } else {
                        cell.modifier.insert(Modifier::DIM);
                    }
                }
            }
        }
    }
}

impl Widget for LogoLoop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        buf.set_style(area, self.style);

        let offset = self.state.offset_at(self.now).round() as i64;
        if self.state.config().direction.is_horizontal() {
            self.render_horizontal(area, buf, offset);
        } else {
            self.render_vertical(area, buf, offset);
        }

        if self.state.config().fade {
            self.render_fade(area, buf);
        }
    }
}

/// Draw `text` starting at column `x` (which may lie left of `area`), clipped to `area`
fn draw_clipped(buf: &mut Buffer, area: Rect, x: i64, y: u16, text: &str, style: Style) {
    let left = i64::from(area.x);
    let right = i64::from(area.right());
    let mut cursor = x;

    for ch in text.chars() {
        let width = ch.width().unwrap_or(0) as i64;
        if width == 0 {
            continue;
        }
        if cursor >= right {
            break;
        }
        if cursor >= left && cursor + width <= right {
            buf[(cursor as u16, y)].set_char(ch).set_style(style);
        }
        cursor += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo_loop::{LogoItem, LogoLoopConfig, LoopDirection};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn state(direction: LoopDirection) -> LogoLoopState {
        let items = vec![LogoItem::new("a", "AB"), LogoItem::new("c", "CD")];
        let config = LogoLoopConfig {
            speed: 1.0,
            gap: 1,
            fade: false,
            direction,
            settle: Duration::ZERO,
            ..LogoLoopConfig::default()
        };
        LogoLoopState::new(items, config, Instant::now())
    }

    #[test]
    fn test_renders_track_from_offset_zero() {
        let state = state(LoopDirection::Left);
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);

        LogoLoop::new(&state, Instant::now()).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "AB CD AB C");
    }

    #[test]
    fn test_renders_shifted_track() {
        let t0 = Instant::now();
        let mut state = state(LoopDirection::Left);
        state.on_layout(state.measure(), t0);
        // U = 6 cells at 1 cell/s: one second in, the strip moved one cell left
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);

        LogoLoop::new(&state, t0 + Duration::from_secs(1)).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "B CD AB ");
    }

    #[test]
    fn test_renders_vertical_track() {
        let state = state(LoopDirection::Up);
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);

        LogoLoop::new(&state, Instant::now()).render(area, &mut buf);
        assert_eq!(row(&buf, 0), " AB ");
        assert_eq!(row(&buf, 1), "    ");
        assert_eq!(row(&buf, 2), " CD ");
    }

    #[test]
    fn test_fade_colours_edges() {
        let mut state = state(LoopDirection::Left);
        let mut config = state.config().clone();
        config.fade = true;
        config.fade_width = 2;
        config.fade_color = ratatui::style::Color::Blue;
        state = LogoLoopState::new(state.items().to_vec(), config, Instant::now());

        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        LogoLoop::new(&state, Instant::now()).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, ratatui::style::Color::Blue);
        assert_eq!(buf[(9, 0)].fg, ratatui::style::Color::Blue);
        assert!(buf[(1, 0)].modifier.contains(Modifier::DIM));
        assert_eq!(buf[(5, 0)].fg, ratatui::style::Color::Reset);
    }

    #[test]
    fn test_empty_area_is_noop() {
        let state = state(LoopDirection::Left);
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));
        LogoLoop::new(&state, Instant::now()).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(row(&buf, 0), "     ");
    }
}
