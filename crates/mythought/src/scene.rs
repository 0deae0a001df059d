//! Motion host
//!
//! The marquee and the scroll choreography are independent of the store:
//! they run on measurement and time only. The scene owns both, feeds them
//! the current instant once per frame and tears the reveal down whenever the
//! services page is left.

use std::cell::Cell;
use std::time::{Duration, Instant};

use mythought_config::{AppConfig, MarqueeConfig, RevealConfig};
use mythought_motion::{
    LogoItem, LogoLoopConfig, LogoLoopState, LoopDirection, PageNode, RevealHandle,
    RevealOptions, RevealStyle, ScrollChoreographer, Selector, Viewport,
};
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;

use crate::content;
use crate::state::AppState;
use crate::views::{ViewId, NAV_HEIGHT};

pub fn marquee_config(config: &MarqueeConfig) -> LogoLoopConfig {
    let direction = config.direction.parse().unwrap_or_else(|_| {
        log::warn!("Unknown marquee direction {:?}, using left", config.direction);
        LoopDirection::default()
    });
    let fade_color = config.fade_color.parse().unwrap_or_else(|_| {
        log::warn!("Invalid marquee fade colour {:?}", config.fade_color);
        Color::Black
    });

    LogoLoopConfig {
        speed: config.speed,
        hover_speed: config.hover_speed,
        direction,
        gap: config.gap,
        fade: config.fade,
        fade_color,
        fade_width: config.fade_width,
        settle: Duration::from_millis(config.settle_ms),
    }
}

pub fn reveal_options(config: &RevealConfig) -> RevealOptions {
    RevealOptions {
        selector: Selector::parse(&config.selector),
        stagger: Duration::from_millis(config.stagger_ms),
        once: config.once,
        start: config.start.clamp(0.0, 1.0),
        duration: Duration::from_millis(config.duration_ms),
        distance: config.distance,
    }
}

pub struct Scene {
    now: Instant,
    marquee: LogoLoopState,
    /// Where the marquee was last drawn, for hover hit-testing
    marquee_area: Cell<Rect>,
    document: PageNode,
    choreographer: ScrollChoreographer,
    reveal_options: RevealOptions,
    reveal: Option<RevealHandle>,
}

impl Scene {
    pub fn new(config: &AppConfig, logos: Vec<LogoItem>, now: Instant) -> Self {
        Self {
            now,
            marquee: LogoLoopState::new(logos, marquee_config(&config.marquee), now),
            marquee_area: Cell::new(Rect::default()),
            document: content::services_document(),
            choreographer: ScrollChoreographer::new(),
            reveal_options: reveal_options(&config.reveal),
            reveal: None,
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn marquee(&self) -> &LogoLoopState {
        &self.marquee
    }

    pub fn set_marquee_area(&self, area: Rect) {
        self.marquee_area.set(area);
    }

    /// Advance to `now` for the state about to be drawn in a frame of `area`
    pub fn sync(&mut self, state: &AppState, area: Rect, now: Instant) {
        self.now = now;
        self.marquee.on_layout(self.marquee.measure(), now);

        let on_services = state.active_view.view_id() == ViewId::Services;
        match (on_services, self.reveal.is_some()) {
            (true, false) => {
                self.reveal = Some(self.choreographer.reveal(
                    &self.document,
                    Some(content::SERVICES_ROOT),
                    self.reveal_options.clone(),
                ));
            }
            (false, true) => {
                // Leaving the page tears the reveal down; coming back replays it
                self.reveal = None;
            }
            _ => {}
        }

        if on_services {
            let viewport = Viewport::new(
                state.services_scroll,
                area.height.saturating_sub(NAV_HEIGHT),
            );
            self.choreographer.update(viewport, now);
        }
    }

    /// Style of a services card, fully visible when it is not tracked
    pub fn reveal_style(&self, node_id: &str) -> RevealStyle {
        self.choreographer
            .style_of(node_id, self.now)
            .unwrap_or(RevealStyle::VISIBLE)
    }

    pub fn reveal_active(&self) -> bool {
        self.reveal.is_some()
    }

    /// Pointer moved to (`column`, `row`)
    pub fn on_pointer(&mut self, column: u16, row: u16, now: Instant) {
        let hovered = self.marquee_area.get().contains(Position::new(column, row));
        self.marquee.set_hovered(hovered, now);
    }

    /// Terminal resized: cached measurements are stale
    pub fn on_resize(&mut self, now: Instant) {
        log::debug!("Terminal resized, re-measuring marquee");
        self.marquee.invalidate(now);
    }
}
