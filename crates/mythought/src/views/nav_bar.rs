//! Navigation bar: page tabs on the left, theme on the right

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::ViewId;
use crate::state::AppState;

const PAGES: [ViewId; 2] = [ViewId::Home, ViewId::Services];

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let active = state.active_view.view_id();

    let mut spans = vec![Span::styled(
        " MyThought ",
        Style::default()
            .fg(theme.bg_primary)
            .bg(theme.accent_primary)
            .add_modifier(Modifier::BOLD),
    )];
    for (index, page) in PAGES.iter().enumerate() {
        let style = if *page == active {
            theme.panel_title().add_modifier(Modifier::UNDERLINED)
        } else {
            theme.muted()
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{} {}", index + 1, page.title()), style));
    }

    let left = Paragraph::new(Line::from(spans)).style(theme.panel_background());
    f.render_widget(left, area);

    let right = Line::from(vec![
        Span::styled(format!("{} ", theme.mode), theme.muted()),
        Span::styled("[t]", theme.key_hint()),
        Span::raw(" "),
    ])
    .right_aligned();
    f.render_widget(right, area);
}
