//! Trigger registry and tweening.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use super::page::PageNode;
use super::selector::Selector;

/// Visual state of a revealed node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// 0.0 (invisible) ..= 1.0 (fully visible)
    pub opacity: f32,
    /// Rows the node is pushed down from its resting position
    pub offset: f32,
}

impl RevealStyle {
    pub const VISIBLE: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset: 0.0,
    };

    pub fn hidden(distance: u16) -> Self {
        Self {
            opacity: 0.0,
            offset: f32::from(distance),
        }
    }

    pub fn is_visible(&self) -> bool {
        *self == Self::VISIBLE
    }

    pub fn is_hidden(&self) -> bool {
        self.opacity == 0.0
    }

    fn lerp(self, to: RevealStyle, t: f32) -> RevealStyle {
        RevealStyle {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset: self.offset + (to.offset - self.offset) * t,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub selector: Selector,
    /// Delay added per matched node index
    pub stagger: Duration,
    /// Stay revealed after the first trigger
    pub once: bool,
    /// Trigger line as a fraction of the viewport height
    pub start: f64,
    pub duration: Duration,
    /// Offset of the hidden state in rows
    pub distance: u16,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: Selector::default(),
            stagger: Duration::from_millis(80),
            once: true,
            start: 0.85,
            duration: Duration::from_millis(600),
            distance: 2,
        }
    }
}

/// Visible window of the scrollable document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_top: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(scroll_top: u16, height: u16) -> Self {
        Self { scroll_top, height }
    }

    fn trigger_line(&self, start: f64) -> f64 {
        f64::from(self.scroll_top) + start * f64::from(self.height)
    }
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: RevealStyle,
    to: RevealStyle,
    start: Instant,
    duration: Duration,
}

impl Tween {
    fn value_at(&self, now: Instant) -> RevealStyle {
        if now <= self.start {
            return self.from;
        }
        let elapsed = now.duration_since(self.start).as_secs_f32();
        let total = self.duration.as_secs_f32();
        if total <= 0.0 || elapsed >= total {
            return self.to;
        }
        self.from.lerp(self.to, ease_out_cubic(elapsed / total))
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug)]
struct Trigger {
    node_id: String,
    top: u16,
    index: usize,
    revealed: bool,
    hidden: RevealStyle,
    tween: Option<Tween>,
}

impl Trigger {
    fn style_at(&self, now: Instant) -> RevealStyle {
        self.tween
            .map(|tween| tween.value_at(now))
            .unwrap_or(self.hidden)
    }

    fn animate_to(&mut self, to: RevealStyle, delay: Duration, duration: Duration, now: Instant) {
        self.tween = Some(Tween {
            from: self.style_at(now),
            to,
            start: now + delay,
            duration,
        });
    }
}

#[derive(Debug)]
struct RevealGroup {
    options: RevealOptions,
    triggers: Vec<Trigger>,
}

type Groups = RefCell<BTreeMap<u64, RevealGroup>>;

/// Owns every active reveal; feed it the viewport each frame.
#[derive(Debug, Default)]
pub struct ScrollChoreographer {
    groups: Rc<Groups>,
    next_id: Cell<u64>,
}

impl ScrollChoreographer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every node under `root` (the whole `document` when `None`)
    /// that matches `options.selector`. All of them start hidden.
    pub fn reveal(
        &self,
        document: &PageNode,
        root: Option<&str>,
        options: RevealOptions,
    ) -> RevealHandle {
        let scope = match root {
            None => Some(document),
            Some(id) => document.find(id),
        };
        if scope.is_none() {
            log::warn!("Reveal root {:?} not found, nothing to animate", root);
        }

        let hidden = RevealStyle::hidden(options.distance);
        let triggers: Vec<Trigger> = scope
            .map(|scope| scope.descendants())
            .unwrap_or_default()
            .into_iter()
            .filter(|node| options.selector.matches(node))
            .enumerate()
            .map(|(index, node)| Trigger {
                node_id: node.id.clone(),
                top: node.top,
                index,
                revealed: false,
                hidden,
                tween: None,
            })
            .collect();

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        log::debug!("Reveal #{} tracks {} nodes", id, triggers.len());

        self.groups
            .borrow_mut()
            .insert(id, RevealGroup { options, triggers });

        RevealHandle {
            id,
            groups: Rc::downgrade(&self.groups),
        }
    }

    /// Evaluate every trigger against the viewport.
    pub fn update(&self, viewport: Viewport, now: Instant) {
        let mut groups = self.groups.borrow_mut();
        for group in groups.values_mut() {
            let options = &group.options;
            let line = viewport.trigger_line(options.start);

            for trigger in &mut group.triggers {
                let in_zone = f64::from(trigger.top) <= line;

                if in_zone && !trigger.revealed {
                    trigger.revealed = true;
                    let delay = options.stagger * trigger.index as u32;
                    trigger.animate_to(RevealStyle::VISIBLE, delay, options.duration, now);
                } else if !in_zone && trigger.revealed && !options.once {
                    trigger.revealed = false;
                    let hidden = trigger.hidden;
                    trigger.animate_to(hidden, Duration::ZERO, options.duration, now);
                }
            }
        }
    }

    /// Current style of a tracked node, `None` if no reveal tracks it
    pub fn style_of(&self, node_id: &str, now: Instant) -> Option<RevealStyle> {
        let groups = self.groups.borrow();
        groups
            .values()
            .flat_map(|group| group.triggers.iter())
            .find(|trigger| trigger.node_id == node_id)
            .map(|trigger| trigger.style_at(now))
    }

    /// Number of triggers across all live reveals
    pub fn active_triggers(&self) -> usize {
        self.groups
            .borrow()
            .values()
            .map(|group| group.triggers.len())
            .sum()
    }
}

/// Keeps one reveal alive; dropping it releases the reveal's triggers.
#[derive(Debug)]
pub struct RevealHandle {
    id: u64,
    groups: Weak<Groups>,
}

impl RevealHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Release the triggers now
    pub fn release(self) {}
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        if let Some(groups) = self.groups.upgrade() {
            if let Ok(mut groups) = groups.try_borrow_mut() {
                groups.remove(&self.id);
                log::debug!("Reveal #{} released", self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DURATION: Duration = Duration::from_millis(600);
    const STAGGER: Duration = Duration::from_millis(80);

    /// Three marked cards at rows 10, 30 and 50 plus one unmarked node
    fn document() -> PageNode {
        PageNode::new("page", 0, 80)
            .with_child(
                PageNode::new("services", 5, 60)
                    .with_child(PageNode::new("card-a", 10, 5).with_class("reveal-marker"))
                    .with_child(PageNode::new("card-b", 30, 5).with_class("reveal-marker"))
                    .with_child(PageNode::new("plain", 40, 5)),
            )
            .with_child(PageNode::new("card-c", 50, 5).with_class("reveal-marker"))
    }

    fn options(once: bool) -> RevealOptions {
        RevealOptions {
            once,
            ..RevealOptions::default()
        }
    }

    #[test]
    fn test_marked_nodes_start_hidden() {
        let choreographer = ScrollChoreographer::new();
        let _handle = choreographer.reveal(&document(), None, options(true));
        let now = Instant::now();

        assert_eq!(choreographer.active_triggers(), 3);
        assert_eq!(choreographer.style_of("card-a", now), Some(RevealStyle::hidden(2)));
        assert_eq!(choreographer.style_of("plain", now), None);
    }

    #[test]
    fn test_node_reveals_after_crossing_threshold() {
        let choreographer = ScrollChoreographer::new();
        let _handle = choreographer.reveal(&document(), None, options(true));
        let t0 = Instant::now();

        // Trigger line at 0 + 0.85 * 20 = 17: only card-a (row 10) is in
        choreographer.update(Viewport::new(0, 20), t0);

        let midway = choreographer.style_of("card-a", t0 + DURATION / 2).unwrap();
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);
        assert_eq!(
            choreographer.style_of("card-a", t0 + DURATION),
            Some(RevealStyle::VISIBLE)
        );
        assert_eq!(
            choreographer.style_of("card-b", t0 + DURATION),
            Some(RevealStyle::hidden(2))
        );
    }

    #[test]
    fn test_reveal_is_staggered_by_index() {
        let choreographer = ScrollChoreographer::new();
        let _handle = choreographer.reveal(&document(), None, options(true));
        let t0 = Instant::now();

        // Everything is in the zone at once
        choreographer.update(Viewport::new(40, 40), t0);

        // card-c has index 2: still waiting out its delay right after the trigger
        assert_eq!(
            choreographer.style_of("card-c", t0 + STAGGER),
            Some(RevealStyle::hidden(2))
        );
        assert_eq!(
            choreographer.style_of("card-a", t0 + DURATION),
            Some(RevealStyle::VISIBLE)
        );
        assert!(!choreographer
            .style_of("card-c", t0 + DURATION)
            .unwrap()
            .is_visible());
        assert_eq!(
            choreographer.style_of("card-c", t0 + STAGGER * 2 + DURATION),
            Some(RevealStyle::VISIBLE)
        );
    }

    #[test]
    fn test_reverses_and_replays_when_not_once() {
        let choreographer = ScrollChoreographer::new();
        let _handle = choreographer.reveal(&document(), None, options(false));
        let t0 = Instant::now();

        // card-b sits at row 30; line = 20 + 17 = 37
        choreographer.update(Viewport::new(20, 20), t0);
        let shown_at = t0 + STAGGER + DURATION;
        assert_eq!(choreographer.style_of("card-b", shown_at), Some(RevealStyle::VISIBLE));

        // Scroll back: line = 17, card-b leaves the zone
        choreographer.update(Viewport::new(0, 20), shown_at);
        assert_eq!(
            choreographer.style_of("card-b", shown_at + DURATION),
            Some(RevealStyle::hidden(2))
        );

        // Re-enter: plays again identically
        let again = shown_at + DURATION;
        choreographer.update(Viewport::new(20, 20), again);
        assert_eq!(
            choreographer.style_of("card-b", again + STAGGER),
            Some(RevealStyle::hidden(2))
        );
        assert_eq!(
            choreographer.style_of("card-b", again + STAGGER + DURATION),
            Some(RevealStyle::VISIBLE)
        );
    }

    #[test]
    fn test_once_stays_revealed() {
        let choreographer = ScrollChoreographer::new();
        let _handle = choreographer.reveal(&document(), None, options(true));
        let t0 = Instant::now();

        choreographer.update(Viewport::new(20, 20), t0);
        choreographer.update(Viewport::new(0, 20), t0 + Duration::from_secs(1));
        assert_eq!(
            choreographer.style_of("card-b", t0 + Duration::from_secs(3)),
            Some(RevealStyle::VISIBLE)
        );
    }

    #[test]
    fn test_root_limits_scope() {
        let choreographer = ScrollChoreographer::new();
        let _handle = choreographer.reveal(&document(), Some("services"), options(true));

        assert_eq!(choreographer.active_triggers(), 2);
        assert_eq!(choreographer.style_of("card-c", Instant::now()), None);
    }

    #[test]
    fn test_missing_root_tracks_nothing() {
        let choreographer = ScrollChoreographer::new();
        let _handle = choreographer.reveal(&document(), Some("nope"), options(true));
        assert_eq!(choreographer.active_triggers(), 0);
    }

    #[test]
    fn test_dropping_handle_releases_triggers() {
        let choreographer = ScrollChoreographer::new();
        let first = choreographer.reveal(&document(), None, options(true));
        let second = choreographer.reveal(&document(), Some("services"), options(false));
        assert_eq!(choreographer.active_triggers(), 5);

        drop(first);
        assert_eq!(choreographer.active_triggers(), 2);

        second.release();
        assert_eq!(choreographer.active_triggers(), 0);
        assert_eq!(choreographer.style_of("card-a", Instant::now()), None);
    }

    #[test]
    fn test_handle_outliving_choreographer_is_harmless() {
        let choreographer = ScrollChoreographer::new();
        let handle = choreographer.reveal(&document(), None, options(true));
        drop(choreographer);
        drop(handle);
    }
}
