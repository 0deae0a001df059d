//! Marquee state: items, measurement and the running loop.

use ratatui::style::Color;
use std::time::{Duration, Instant};
use strum::{Display, EnumString};
use unicode_width::UnicodeWidthStr;

use super::animation::LoopAnimation;

/// Number of back-to-back copies of the item list in the rendered track
pub const COPIES: usize = 3;

/// Direction of travel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LoopDirection {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl LoopDirection {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Start and end offset for one unit of travel
    pub fn travel(self, unit: f64) -> (f64, f64) {
        match self {
            Self::Left | Self::Up => (0.0, -unit),
            Self::Right | Self::Down => (-unit, 0.0),
        }
    }
}

/// A single logo in the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoItem {
    pub id: String,
    pub label: String,
}

impl LogoItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Cells the item occupies along the axis of travel (without gap)
    pub fn extent(&self, direction: LoopDirection) -> usize {
        if direction.is_horizontal() {
            self.label.width()
        } else {
            1
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoLoopConfig {
    /// Cells per second; only the magnitude is used, `direction` decides polarity
    pub speed: f64,
    /// Speed while hovered, `None` keeps `speed`
    pub hover_speed: Option<f64>,
    pub direction: LoopDirection,
    /// Cells between two items
    pub gap: u16,
    pub fade: bool,
    pub fade_color: Color,
    pub fade_width: u16,
    /// Layout settle delay before the first measurement is trusted
    pub settle: Duration,
}

impl Default for LogoLoopConfig {
    fn default() -> Self {
        Self {
            speed: 12.0,
            hover_speed: None,
            direction: LoopDirection::Left,
            gap: 4,
            fade: true,
            fade_color: Color::Black,
            fade_width: 3,
            settle: Duration::from_millis(100),
        }
    }
}

/// State of one marquee
#[derive(Debug, Clone)]
pub struct LogoLoopState {
    items: Vec<LogoItem>,
    config: LogoLoopConfig,
    hovered: bool,
    mounted_at: Instant,
    /// Measured extent of one copy, `None` until measured
    unit: Option<f64>,
    /// Running loop, `None` while stopped or unmeasured
    animation: Option<LoopAnimation>,
    /// Offset held while no loop is running
    resting_offset: f64,
}

impl LogoLoopState {
    pub fn new(items: Vec<LogoItem>, config: LogoLoopConfig, now: Instant) -> Self {
        Self {
            items,
            config,
            hovered: false,
            mounted_at: now,
            unit: None,
            animation: None,
            resting_offset: 0.0,
        }
    }

    pub fn items(&self) -> &[LogoItem] {
        &self.items
    }

    pub fn config(&self) -> &LogoLoopConfig {
        &self.config
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Measured extent of one copy of the items
    pub fn unit_extent(&self) -> Option<f64> {
        self.unit
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_some()
    }

    /// The rendered track: the item list repeated [`COPIES`] times
    pub fn track(&self) -> impl Iterator<Item = &LogoItem> + '_ {
        self.items.iter().cycle().take(self.items.len() * COPIES)
    }

    /// Extent of the whole rendered track along the axis of travel
    pub fn measure(&self) -> f64 {
        let direction = self.config.direction;
        let gap = usize::from(self.config.gap);
        self.track()
            .map(|item| item.extent(direction) + gap)
            .sum::<usize>() as f64
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.mounted_at) >= self.config.settle
    }

    /// Feed a measurement of the whole track.
    ///
    /// Ignored before the settle delay has passed. A zero measurement of a
    /// non-empty list means layout is not ready yet and is ignored as well.
    pub fn on_layout(&mut self, measured_track: f64, now: Instant) {
        if !self.is_settled(now) {
            return;
        }
        if measured_track <= 0.0 && !self.items.is_empty() {
            log::trace!("Marquee measured 0 cells, waiting for layout");
            return;
        }

        let unit = measured_track / COPIES as f64;
        if self.unit == Some(unit) {
            return;
        }

        log::debug!("Marquee unit extent {:?} -> {}", self.unit, unit);
        self.unit = Some(unit);
        self.restart(now);
    }

    /// Drop the measurement (e.g. after a terminal resize); the strip holds
    /// its position until the next [`on_layout`](Self::on_layout).
    pub fn invalidate(&mut self, now: Instant) {
        self.resting_offset = self.offset_at(now);
        self.animation = None;
        self.unit = None;
    }

    /// Speed currently in effect
    pub fn active_speed(&self) -> f64 {
        let speed = if self.hovered {
            self.config.hover_speed.unwrap_or(self.config.speed)
        } else {
            self.config.speed
        };
        speed.abs()
    }

    /// Time for one unit of travel, `None` when the strip stands still
    pub fn loop_duration(&self) -> Option<Duration> {
        let unit = self.unit?;
        let speed = self.active_speed();
        if unit <= 0.0 || speed <= 0.0 || !speed.is_finite() {
            return None;
        }
        Duration::try_from_secs_f64(unit / speed).ok()
    }

    /// Offset along the axis of travel at `now`
    pub fn offset_at(&self, now: Instant) -> f64 {
        self.animation
            .map(|animation| animation.offset_at(now))
            .unwrap_or(self.resting_offset)
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.restart(now);
        }
    }

    pub fn set_speed(&mut self, speed: f64, now: Instant) {
        if self.config.speed != speed {
            self.config.speed = speed;
            self.restart(now);
        }
    }

    pub fn set_hover_speed(&mut self, hover_speed: Option<f64>, now: Instant) {
        if self.config.hover_speed != hover_speed {
            self.config.hover_speed = hover_speed;
            self.restart(now);
        }
    }

    /// Change direction. Switching axis changes what "extent" means, so the
    /// strip is re-measured from a zero offset.
    pub fn set_direction(&mut self, direction: LoopDirection, now: Instant) {
        if self.config.direction == direction {
            return;
        }
        let axis_changed = self.config.direction.is_horizontal() != direction.is_horizontal();
        self.config.direction = direction;
        if axis_changed {
            self.animation = None;
            self.unit = None;
            self.resting_offset = 0.0;
        } else {
            self.restart(now);
        }
    }

    pub fn set_items(&mut self, items: Vec<LogoItem>, now: Instant) {
        self.items = items;
        self.invalidate(now);
    }

    fn restart(&mut self, now: Instant) {
        let current = self.offset_at(now);
        match (self.unit, self.loop_duration()) {
            (Some(unit), Some(period)) => {
                let (from, to) = self.config.direction.travel(unit);
                self.animation = Some(LoopAnimation::resume_from(from, to, period, now, current));
            }
            _ => {
                self.resting_offset = current;
                self.animation = None;
            }
        }
    }
}
