//! Dispersed interval processing
//!
//! Some per-entity work (AI re-planning, pathfinding refresh, ambient
//! effects) only needs to run once every few seconds. Running it for every
//! entity on the same frame causes a spike, so instead each interval the
//! whole live set is queued and a small quota is drained every tick.
//!
//! Per tick:
//! 1. the processing window grows by `delta`
//! 2. up to `quota` queued ids are updated, oldest first
//! 3. the interval timer grows by `delta`; once it reaches the interval the
//!    window is reset to the elapsed time, the quota is re-estimated and the
//!    current live set is appended to the queue
//!
//! The quota is `round((live + still queued) / interval)`, at least 1. It
//! assumes roughly one tick per second of interval, so with fast ticks the
//! queue drains early, and with a growing live set or coarse quota the queue
//! can grow from pass to pass. That backlog is accepted: ids only leave the
//! queue by being processed.

use std::collections::VecDeque;
use std::fmt;

use super::Entity;

/// Per-entity work driven by a [`DispersedScheduler`]
pub trait DispersedSystem<Id> {
    /// `window` is the time covered by the current pass, in seconds
    fn update(&mut self, entity: Id, window: f32);
}

impl<Id, F: FnMut(Id, f32)> DispersedSystem<Id> for F {
    fn update(&mut self, entity: Id, window: f32) {
        self(entity, window)
    }
}

/// Error type for scheduler configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchedulerError {
    /// Interval must be finite and greater than zero
    InvalidInterval(f32),
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::InvalidInterval(v) => {
                write!(f, "invalid interval {}: must be a positive number of seconds", v)
            }
        }
    }
}

impl std::error::Error for SchedulerError {}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Number of entities updated
    pub processed: usize,
    /// The interval elapsed and the live set was queued
    pub rolled_over: bool,
}

/// Spreads processing of every live entity over an interval
#[derive(Debug, Clone)]
pub struct DispersedScheduler<Id = Entity> {
    queue: VecDeque<Id>,
    /// Interval in seconds
    interval: f32,
    timer: f32,
    /// Time covered by the pass currently being drained
    window: f32,
    /// Entities updated per tick
    quota: usize,
}

fn validate_interval(interval: f32) -> Result<f32, SchedulerError> {
    if interval.is_finite() && interval > 0.0 {
        Ok(interval)
    } else {
        Err(SchedulerError::InvalidInterval(interval))
    }
}

impl<Id: Copy> DispersedScheduler<Id> {
    /// The first tick always rolls over, so the live set is queued right away.
    pub fn new(interval: f32) -> Result<Self, SchedulerError> {
        let interval = validate_interval(interval)?;
        Ok(Self {
            queue: VecDeque::new(),
            interval,
            timer: interval,
            window: 0.0,
            quota: 1,
        })
    }

    /// Advance by `delta` seconds. `live` is the current live set in
    /// processing order; it is only read on rollover.
    pub fn tick<S>(&mut self, delta: f32, live: &[Id], system: &mut S) -> TickReport
    where
        S: DispersedSystem<Id> + ?Sized,
    {
        let mut report = TickReport::default();

        self.window += delta;
        while report.processed < self.quota {
            let Some(entity) = self.queue.pop_front() else {
                break;
            };
            system.update(entity, self.window);
            report.processed += 1;
        }

        self.timer += delta;
        if self.timer >= self.interval {
            self.window = self.timer;
            self.timer %= self.interval;

            let pending = (live.len() + self.queue.len()) as f32;
            self.quota = ((pending / self.interval).round() as usize).max(1);
            self.queue.extend(live.iter().copied());
            report.rolled_over = true;

            log::debug!(
                "dispersed rollover: window {:.3}s, {} queued, {} per tick",
                self.window,
                self.queue.len(),
                self.quota
            );
        }

        report
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Takes effect at the next rollover; the running timer is kept as is.
    pub fn set_interval(&mut self, interval: f32) -> Result<(), SchedulerError> {
        self.interval = validate_interval(interval)?;
        Ok(())
    }

    pub fn quota(&self) -> usize {
        self.quota
    }

    /// Number of queued entities
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Time since the last rollover
    pub fn timer(&self) -> f32 {
        self.timer
    }
}
