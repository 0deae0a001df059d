//! One-shot timers
//!
//! Auto-removal of notifications and auto-dismissal of toasts are modelled as
//! one-shot timers. A [`Scheduler`] owns its timers and hands back the
//! payloads of expired ones when polled; polling happens on every
//! `GlobalAction::Tick`. Time comes from an injectable [`Clock`] so tests can
//! step it by hand.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to; clones share the same time
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Identifies a scheduled timer for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Timer<T> {
    /// `None` when the deadline lies beyond what `Instant` can represent
    deadline: Option<Instant>,
    payload: T,
}

/// Set of pending one-shot timers carrying a payload of type `T`
pub struct Scheduler<T> {
    clock: Arc<dyn Clock>,
    next_handle: u64,
    timers: BTreeMap<TimerHandle, Timer<T>>,
}

impl<T> Scheduler<T> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            next_handle: 0,
            timers: BTreeMap::new(),
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Fire `payload` once `delay` has elapsed
    ///
    /// A delay too large to represent yields a timer that stays pending until
    /// cancelled.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        let deadline = self.clock.now().checked_add(delay);
        if deadline.is_none() {
            log::warn!("Timer delay {:?} is out of range, timer never fires", delay);
        }
        self.timers.insert(handle, Timer { deadline, payload });
        handle
    }

    /// Cancel a pending timer, returning its payload if it had not fired yet
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        self.timers.remove(&handle).map(|timer| timer.payload)
    }

    /// Cancel every pending timer
    pub fn clear(&mut self) -> usize {
        let cancelled = self.timers.len();
        self.timers.clear();
        cancelled
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Remove and return the payloads of all expired timers, earliest deadline first
    pub fn fire_due(&mut self) -> Vec<T> {
        let now = self.clock.now();
        let mut due: Vec<(Instant, TimerHandle)> = self
            .timers
            .iter()
            .filter_map(|(handle, timer)| timer.deadline.map(|deadline| (deadline, *handle)))
            .filter(|(deadline, _)| *deadline <= now)
            .collect();
        due.sort();

        due.into_iter()
            .filter_map(|(_, handle)| self.timers.remove(&handle))
            .map(|timer| timer.payload)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scheduler() -> (Scheduler<&'static str>, ManualClock) {
        let clock = ManualClock::new();
        (Scheduler::new(Arc::new(clock.clone())), clock)
    }

    #[test]
    fn test_nothing_fires_before_deadline() {
        let (mut scheduler, clock) = scheduler();
        scheduler.schedule(Duration::from_millis(100), "a");

        clock.advance(Duration::from_millis(99));
        assert!(scheduler.fire_due().is_empty());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let (mut scheduler, clock) = scheduler();
        scheduler.schedule(Duration::from_millis(300), "late");
        scheduler.schedule(Duration::from_millis(100), "early");
        scheduler.schedule(Duration::from_millis(100), "early-second");

        clock.advance(Duration::from_millis(300));
        assert_eq!(scheduler.fire_due(), vec!["early", "early-second", "late"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_fired_timer_does_not_fire_again() {
        let (mut scheduler, clock) = scheduler();
        scheduler.schedule(Duration::from_millis(10), "once");

        clock.advance(Duration::from_millis(10));
        assert_eq!(scheduler.fire_due(), vec!["once"]);
        clock.advance(Duration::from_secs(1));
        assert!(scheduler.fire_due().is_empty());
    }

    #[test]
    fn test_cancel() {
        let (mut scheduler, clock) = scheduler();
        let handle = scheduler.schedule(Duration::from_millis(10), "a");
        scheduler.schedule(Duration::from_millis(10), "b");

        assert_eq!(scheduler.cancel(handle), Some("a"));
        assert_eq!(scheduler.cancel(handle), None);

        clock.advance(Duration::from_millis(10));
        assert_eq!(scheduler.fire_due(), vec!["b"]);
    }

    #[test]
    fn test_clear() {
        let (mut scheduler, clock) = scheduler();
        scheduler.schedule(Duration::from_millis(10), "a");
        scheduler.schedule(Duration::from_millis(20), "b");

        assert_eq!(scheduler.clear(), 2);
        clock.advance(Duration::from_secs(1));
        assert!(scheduler.fire_due().is_empty());
    }

    #[test]
    fn test_out_of_range_delay_stays_pending() {
        let (mut scheduler, clock) = scheduler();
        let handle = scheduler.schedule(Duration::MAX, "forever");
        scheduler.schedule(Duration::from_millis(10), "soon");

        clock.advance(Duration::from_secs(60 * 60 * 24 * 365));
        assert_eq!(scheduler.fire_due(), vec!["soon"]);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.cancel(handle), Some("forever"));
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let before = other.now();
        clock.advance(Duration::from_secs(2));
        assert_eq!(other.now() - before, Duration::from_secs(2));
    }
}
