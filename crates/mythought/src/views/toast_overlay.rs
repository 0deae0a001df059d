//! Toast overlay, stacked in the top-right corner

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::state::AppState;
use crate::view_models::ToastStackViewModel;

const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 4;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = ToastStackViewModel::from_state(state);
    if vm.is_empty() {
        return;
    }

    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + 1).max(area.x);
    let mut y = area.y + 1;

    for card in &vm.cards {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(card.accent))
            .title(Line::from(vec![
                Span::styled(format!(" {} ", card.icon), Style::default().fg(card.accent)),
                Span::styled(
                    format!("{} ", card.title),
                    card.body_style.add_modifier(Modifier::BOLD),
                ),
            ]))
            .style(vm.background);

        let body = Paragraph::new(card.description.clone().unwrap_or_default())
            .style(card.body_style)
            .wrap(Wrap { trim: true })
            .block(block);

        f.render_widget(Clear, rect);
        f.render_widget(body, rect);
        y += TOAST_HEIGHT;
    }
}
