use figlet_rs::FIGfont;
use mythought_motion::LogoLoop;
use mythought_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::scene::Scene;
use crate::state::AppState;
use crate::view_models::HomeViewModel;
use crate::views::{View, ViewId};

const BRAND: &str = "MyThought";
const TAGLINE: &str = "Strategy, design and engineering studio";

/// Landing page: hero, counter demo, theme controls, notifications, partner marquee
#[derive(Debug, Clone)]
pub struct HomeView;

impl HomeView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for HomeView {
    fn view_id(&self) -> ViewId {
        ViewId::Home
    }

    fn render(&self, state: &AppState, scene: &Scene, area: Rect, f: &mut Frame) {
        let vm = HomeViewModel::from_state(state);
        let theme = &state.theme;

        let hero = hero_lines(theme);
        let hero_height = hero.len() as u16 + 1;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(hero_height),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        f.render_widget(Paragraph::new(hero).alignment(Alignment::Center), rows[0]);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(25),
                Constraint::Percentage(45),
            ])
            .split(rows[1]);

        render_counter(&vm, theme, panels[0], f);
        render_theme(&vm, theme, panels[1], f);
        render_notifications(&vm, theme, panels[2], f);
        render_marquee(theme, scene, rows[2], f);
        render_hints(theme, rows[3], f);
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

/// FIGlet brand name with the tagline underneath
fn hero_lines(theme: &Theme) -> Vec<Line<'static>> {
    let figure: Vec<String> = match FIGfont::standard() {
        Ok(font) => font
            .convert(BRAND)
            .map(|figure| figure.to_string().lines().map(String::from).collect())
            .unwrap_or_else(|| vec![BRAND.to_string()]),
        Err(e) => {
            log::warn!("FIGlet font unavailable: {}", e);
            vec![BRAND.to_string()]
        }
    };

    let mut lines: Vec<Line<'static>> = figure
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            Line::from(Span::styled(
                line,
                Style::default()
                    .fg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(Span::styled(TAGLINE, theme.muted())));
    lines
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border())
        .title(Span::styled(format!(" {} ", title), theme.panel_title()))
        .style(theme.panel_background())
}

fn render_counter(vm: &HomeViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut lines = vec![
        Line::from(Span::styled(vm.counter_value.clone(), vm.counter_style)),
        Line::from(""),
    ];
    lines.extend(vm.stats.iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{:<13}", label), theme.muted()),
            Span::styled(value.clone(), theme.text()),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("+", theme.key_hint()),
        Span::styled(" up  ", theme.key_description()),
        Span::styled("-", vm.decrement_hint_style),
        Span::styled(" down  ", theme.key_description()),
        Span::styled("r", theme.key_hint()),
        Span::styled(" reset", theme.key_description()),
    ]));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel("Counter", theme)),
        area,
    );
}

fn render_theme(vm: &HomeViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut lines = vec![
        Line::from(Span::styled(vm.theme_label.clone(), theme.section_header())),
        Line::from(""),
    ];
    lines.extend(vm.theme_modes.iter().map(|(mode, active)| {
        let marker = if *active { "●" } else { "○" };
        let style = if *active { theme.text() } else { theme.muted() };
        Line::from(Span::styled(format!("{} {}", marker, mode), style))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("t", theme.key_hint()),
        Span::styled(" random  ", theme.key_description()),
        Span::styled("l", theme.key_hint()),
        Span::styled("/", theme.key_description()),
        Span::styled("d", theme.key_hint()),
        Span::styled(" pick", theme.key_description()),
    ]));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel("Theme", theme)),
        area,
    );
}

fn render_notifications(vm: &HomeViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let lines: Vec<Line> = if vm.notifications.is_empty() {
        vec![Line::from(Span::styled("No notifications", theme.muted()))]
    } else {
        vm.notifications
            .iter()
            .map(|n| {
                let mut spans = vec![
                    Span::raw(format!("{} ", n.emoji)),
                    Span::styled(n.title.clone(), n.title_style),
                ];
                if let Some(message) = &n.message {
                    spans.push(Span::styled(format!(": {}", message), theme.muted()));
                }
                Line::from(spans)
            })
            .collect()
    };

    let title = format!("Notifications ({})", vm.notifications.len());
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(&title, theme)),
        area,
    );
}

fn render_marquee(theme: &Theme, scene: &Scene, area: Rect, f: &mut Frame) {
    let block = panel("Trusted by", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    scene.set_marquee_area(inner);
    f.render_widget(
        LogoLoop::new(scene.marquee(), scene.now())
            .style(theme.panel_background())
            .item_style(
                Style::default()
                    .fg(theme.accent_secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        inner,
    );
}

fn render_hints(theme: &Theme, area: Rect, f: &mut Frame) {
    let hints = [
        ("n", "notify"),
        ("x", "dismiss oldest"),
        ("c", "clear"),
        ("tab", "services"),
        ("q", "quit"),
    ];
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(format!(" {}", key), theme.key_hint()),
                Span::styled(format!(" {} ", description), theme.key_description()),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
