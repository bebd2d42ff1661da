/// Cancellable timer queue
///
/// Stands in for browser timers. Time is a logical offset from the moment the
/// scheduler was created; the owner moves it forward explicitly, so tests can
/// step through animations without sleeping and the interactive runtime can
/// map wall-clock time onto it.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle returned for every scheduled task, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Single-threaded timer queue ordered by deadline, then by scheduling order
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), T>,
    deadlines: HashMap<u64, Duration>,
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time zero
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Current logical time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once `delay` has elapsed from now
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;

        let deadline = self.now + delay;
        self.queue.insert((deadline, seq), task);
        self.deadlines.insert(seq, deadline);

        TimerHandle(seq)
    }

    /// Cancel a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.queue.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    /// Cancel every handle in `handles`, returning how many were still pending
    pub fn cancel_all(&mut self, handles: impl IntoIterator<Item = TimerHandle>) -> usize {
        handles
            .into_iter()
            .filter(|handle| self.cancel(*handle))
            .count()
    }

    /// Check whether a task is still waiting to fire
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    /// Number of tasks waiting to fire
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the earliest pending task
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Remove the earliest task due at or before `until`, moving the clock to
    /// its deadline. Callers fire the task and call again; tasks scheduled
    /// while firing are picked up by the same drain if they fall due.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, T)> {
        let (deadline, seq) = *self.queue.keys().next()?;
        if deadline > until {
            return None;
        }

        let task = self.queue.remove(&(deadline, seq))?;
        self.deadlines.remove(&seq);
        if deadline > self.now {
            self.now = deadline;
        }

        Some((TimerHandle(seq), task))
    }

    /// Move the clock to `until` once due tasks have been drained
    pub fn settle(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
