// SPDX-License-Identifier: MPL-2.0
//! Deferred-callback queue shared by every timed state machine.
//!
//! The page widgets never block: anything that has to happen "later"
//! (transition delays, auto-dismiss, autoplay, overlay timeouts) is pushed
//! here as a typed event with an absolute deadline. The owner drains due
//! events from its `tick` handler.
//!
//! Events fire in deadline order. Two events with the same deadline fire
//! in the order they were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// Handle to a scheduled event, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<E> {
    deadline: Instant,
    id: TimerId,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.id == other.id
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    // Reversed so the max-heap pops the earliest deadline first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Min-heap of pending timers keyed by deadline.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    pending: BinaryHeap<Entry<E>>,
    next_id: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: BinaryHeap::new(),
            next_id: 0,
        }
    }

    /// Schedules `event` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: Instant, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry {
            deadline,
            id,
            event,
        });
        id
    }

    /// Schedules `event` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) -> TimerId {
        self.schedule_at(now + delay, event)
    }

    /// Cancels a pending timer. Returns `false` if it already fired or never existed.
    ///
    /// Linear in the number of pending timers: the heap is scanned and
    /// rebuilt. Callers keep only a handful of timers alive at once.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.id != id);
        self.pending.len() != before
    }

    /// Pops the earliest timer whose deadline is at or before `now`.
    ///
    /// Returns the deadline alongside the event so callers can schedule
    /// follow-up timers relative to when the event was due rather than
    /// when the host happened to tick.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, E)> {
        if self.pending.peek()?.deadline > now {
            return None;
        }
        self.pending.pop().map(|entry| (entry.deadline, entry.event))
    }

    /// Deadline of the next pending timer, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.peek().map(|entry| entry.deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, ms(100), "enter");

        assert!(scheduler.pop_due(start + ms(99)).is_none());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn fires_in_deadline_order_not_insertion_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, ms(5000), "remove");
        scheduler.schedule(start, ms(100), "enter");
        scheduler.schedule(start, ms(500), "detach");

        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(start + ms(10_000)))
            .map(|(_, event)| event)
            .collect();
        assert_eq!(fired, vec!["enter", "detach", "remove"]);
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, ms(100), 1);
        scheduler.schedule(start, ms(100), 2);
        scheduler.schedule(start, ms(100), 3);

        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(start + ms(100)))
            .map(|(_, event)| event)
            .collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn pop_due_reports_the_timer_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, ms(100), ());

        let (deadline, ()) = scheduler.pop_due(start + ms(450)).unwrap();
        assert_eq!(deadline, start + ms(100));
    }

    #[test]
    fn cancel_removes_only_the_target() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let keep = scheduler.schedule(start, ms(10), "keep");
        let drop = scheduler.schedule(start, ms(20), "drop");

        assert!(scheduler.cancel(drop));
        assert!(!scheduler.cancel(drop));
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.next_deadline(), Some(start + ms(10)));
        assert!(!scheduler.cancel(TimerId(keep.0 + 100)));
    }

    #[test]
    fn cancel_keeps_deadline_order_of_the_rest() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let ids: Vec<_> = (0..8u64)
            .rev()
            .map(|i| scheduler.schedule(start, ms(10 * (i + 1)), i))
            .collect();
        assert!(scheduler.cancel(ids[3]));
        assert!(scheduler.cancel(ids[7]));

        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(start + ms(1000)))
            .map(|(_, event)| event)
            .collect();
        assert_eq!(fired, vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn clear_empties_the_queue() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, ms(1), ());
        scheduler.clear();
        assert!(scheduler.is_empty());
        assert!(scheduler.next_deadline().is_none());
    }
}
