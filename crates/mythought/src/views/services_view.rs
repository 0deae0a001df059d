//! Services page: an intro followed by one card per vertical. Cards fade
//! and slide in as they scroll into view.

use mythought_motion::RevealStyle;
use mythought_theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::content::{self, Vertical, CARD_HEIGHT, INTRO_HEIGHT, VERTICALS};
use crate::scene::Scene;
use crate::state::AppState;
use crate::views::{View, ViewId};

#[derive(Debug, Clone)]
pub struct ServicesView;

impl ServicesView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ServicesView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ServicesView {
    fn view_id(&self) -> ViewId {
        ViewId::Services
    }

    fn render(&self, state: &AppState, scene: &Scene, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let scroll = i32::from(state.services_scroll);

        render_at(
            f,
            area,
            -scroll,
            INTRO_HEIGHT,
            Paragraph::new(intro_lines(theme)),
        );

        for (index, vertical) in VERTICALS.iter().enumerate() {
            let style = scene.reveal_style(vertical.id);
            if let Some(look) = CardLook::from_reveal(style) {
                let top = i32::from(content::card_top(index)) - scroll + look.offset;
                render_at(f, area, top, CARD_HEIGHT, card(vertical, theme, look));
            }
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

/// How a card is drawn for a given reveal state; terminals have no alpha,
/// so opacity is quantised into hidden, dim and normal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardLook {
    dim: bool,
    offset: i32,
}

impl CardLook {
    fn from_reveal(style: RevealStyle) -> Option<Self> {
        if style.opacity < 0.3 {
            return None;
        }
        Some(Self {
            dim: style.opacity < 0.7,
            offset: style.offset.round() as i32,
        })
    }
}

fn intro_lines(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("What we do", theme.section_header())),
        Line::from(Span::styled(
            "Seven practices, one studio. Scroll to explore.",
            theme.muted(),
        )),
        Line::from(vec![
            Span::styled("j/k", theme.key_hint()),
            Span::styled(" scroll  ", theme.key_description()),
            Span::styled("space", theme.key_hint()),
            Span::styled(" page  ", theme.key_description()),
            Span::styled("tab", theme.key_hint()),
            Span::styled(" home", theme.key_description()),
        ]),
    ]
}

fn card<'a>(vertical: &'a Vertical, theme: &Theme, look: CardLook) -> Paragraph<'a> {
    let mut lines = vec![
        Line::from(Span::styled(vertical.tagline, theme.text())),
        Line::from(""),
    ];
    lines.extend(vertical.highlights.iter().map(|highlight| {
        Line::from(vec![
            Span::styled("  ▸ ", Style::default().fg(theme.accent_secondary)),
            Span::styled(*highlight, theme.text()),
        ])
    }));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border())
        .title(Span::styled(
            format!(" {} ", vertical.title),
            theme.panel_title(),
        ))
        .style(theme.panel_background());

    let mut paragraph = Paragraph::new(lines).block(block);
    if look.dim {
        paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
    }
    paragraph
}

/// Draw `widget` as if its top row were at `top` (relative to `area`),
/// clipping whatever falls outside
fn render_at(f: &mut Frame, area: Rect, top: i32, height: u16, widget: Paragraph) {
    let area_height = i32::from(area.height);
    let bottom = top + i32::from(height);
    if bottom <= 0 || top >= area_height {
        return;
    }

    let clip_top = (-top).max(0);
    let visible_top = top.max(0);
    let visible_height = bottom.min(area_height) - visible_top;

    let rect = Rect {
        x: area.x + 1,
        y: area.y + visible_top as u16,
        width: area.width.saturating_sub(2),
        height: visible_height as u16,
    };
    // Paragraph scrolling only shifts the content, borders stay put
    if clip_top > 0 {
        f.render_widget(widget.scroll((clip_top as u16, 0)), rect);
    } else {
        f.render_widget(widget, rect);
    }
}
