//! Deferred tasks on a logical clock.
//!
//! Nothing here reads wall-clock time or spawns threads. The owner advances
//! the clock and runs whatever comes due, so a whole game stays on one
//! thread and tests can fast-forward.

use std::time::Duration;

/// Work that runs some time after it was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Let the opponent play its reply.
    OpponentMove,
    /// Hide the hint identified by `token`.
    ClearHint { token: u64 },
}

/// A queued task. `epoch` is the owner's game epoch when it was queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub due: Duration,
    pub epoch: u64,
    pub task: Task,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: Duration,
    queue: Vec<Scheduled>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the logical clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to come due `delay` from now. Returns the due time.
    pub fn schedule(&mut self, delay: Duration, epoch: u64, task: Task) -> Duration {
        let due = self.now + delay;
        self.queue.push(Scheduled {
            due,
            epoch,
            task,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        due
    }

    /// Move the clock forward and hand back every task now due, earliest
    /// first. Tasks due at the same time keep their queueing order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Scheduled> {
        self.now += elapsed;
        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) = self.queue.drain(..).partition(|t| t.due <= now);
        self.queue = rest;
        due.sort_by_key(|t| (t.due, t.seq));
        due
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.iter().map(|t| t.due).min()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
