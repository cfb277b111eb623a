//! Round Robin Dispatch Policy.
//!
//! Keeps a FIFO ready queue. The process at the front runs for
//! `min(remaining, quantum)` ticks without interruption. When the slice ends,
//! processes that arrived during it join the queue first; the process that
//! just ran goes behind them if it still needs time.

use std::collections::VecDeque;

use super::{Dispatch, DispatchPolicy};
use crate::common::Tick;
use crate::sched::process::Job;

/// Round Robin Policy state.
#[derive(Debug, Clone)]
pub struct RoundRobinPolicy {
    /// Ready queue of job indices; the front runs next.
    queue: VecDeque<usize>,
    /// Time slice in ticks.
    quantum: Tick,
}

impl RoundRobinPolicy {
    /// Creates a Round Robin policy with an empty ready queue.
    ///
    /// A zero quantum is raised to one tick so every dispatch makes progress;
    /// configurations reject it earlier.
    pub fn new(quantum: Tick) -> Self {
        Self {
            queue: VecDeque::new(),
            quantum: quantum.max(1),
        }
    }

    /// Effective time slice in ticks.
    pub const fn quantum(&self) -> Tick {
        self.quantum
    }
}

impl DispatchPolicy for RoundRobinPolicy {
    fn admit(&mut self, job: usize) {
        self.queue.push_back(job);
    }

    fn select(&mut self, now: Tick, jobs: &[Job]) -> Option<Dispatch> {
        while let Some(index) = self.queue.pop_front() {
            let job = &jobs[index];
            if job.is_ready(now) {
                return Some(Dispatch {
                    job: index,
                    ticks: job.remaining.min(self.quantum),
                });
            }
        }
        None
    }

    fn release(&mut self, job: usize, finished: bool) {
        if !finished {
            self.queue.push_back(job);
        }
    }
}
