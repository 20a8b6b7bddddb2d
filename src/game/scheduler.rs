//! Time source and the ordered task queue shared by ticks and spawn events.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock measured from its creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: std::rc::Rc<std::cell::Cell<Duration>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug)]
struct Entry<T> {
    at: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.at, self.seq).cmp(&(other.at, other.seq))
    }
}

/// One-shot tasks keyed by fire time. Tasks sharing a fire time run in the
/// order they were scheduled.
#[derive(Debug)]
pub struct TaskQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, at: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { at, seq, task }));
    }

    /// Pop the earliest task if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, T)> {
        match self.heap.peek() {
            Some(Reverse(entry)) if entry.at <= now => {
                self.heap.pop().map(|Reverse(entry)| (entry.at, entry.task))
            }
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn next_fire_time(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse(entry)| entry.at)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_tasks_pop_in_fire_time_order() {
        let mut queue = TaskQueue::new();
        queue.schedule(ms(300), "late");
        queue.schedule(ms(100), "early");
        queue.schedule(ms(200), "middle");

        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(ms(1_000)).map(|(_, t)| t)).collect();
        assert_eq!(order, vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let mut queue = TaskQueue::new();
        for i in 0..3 {
            queue.schedule(ms(10_000), i);
        }
        assert_eq!(queue.pop_due(ms(10_000)), Some((ms(10_000), 0)));
        assert_eq!(queue.pop_due(ms(10_000)), Some((ms(10_000), 1)));
        assert_eq!(queue.pop_due(ms(10_000)), Some((ms(10_000), 2)));
    }

    #[test]
    fn test_future_tasks_are_not_due() {
        let mut queue = TaskQueue::new();
        queue.schedule(ms(100), ());
        assert!(queue.pop_due(ms(99)).is_none());
        assert_eq!(queue.next_fire_time(), Some(ms(100)));
        assert_eq!(queue.len(), 1);
        assert!(queue.pop_due(ms(100)).is_some());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let observer = clock.clone();
        clock.advance(ms(40));
        clock.advance(ms(2));
        assert_eq!(observer.now(), ms(42));
        clock.set(ms(5));
        assert_eq!(observer.now(), ms(5));
    }
}
