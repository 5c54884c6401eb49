//! Virtual clock and timer queue for the game machine.
//!
//! Every timer carries the generation of the session that scheduled it, so a
//! timer left over from an earlier game can be recognized and dropped.

use crate::models::color::Color;
use std::time::Duration;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Lead-in after "start game" elapsed: play round 1.
    LeadIn,
    /// Post-round pause elapsed: extend and replay.
    NextRound,
    /// A playback gap elapsed: pull the next step.
    Resume,
    /// A flash hold elapsed: clear the light, then resume playback if asked.
    Release { color: Color, resume: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub due: Duration,
    pub generation: u64,
    pub event: TimerEvent,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    queue: Vec<Scheduled>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queues `event` to fire `after` from the current clock.
    pub fn schedule(&mut self, after: Duration, generation: u64, event: TimerEvent) {
        self.queue.push(Scheduled {
            due: self.now + after,
            generation,
            event,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Pops the earliest timer due at or before `until` and moves the clock
    /// to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<Scheduled> {
        let (idx, _) = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= until)
            .min_by_key(|(_, s)| (s.due, s.seq))?;

        let timer = self.queue.swap_remove(idx);
        self.now = self.now.max(timer.due);
        Some(timer)
    }

    /// Moves the clock forward once every due timer has fired.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
