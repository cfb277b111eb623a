//! Preemptive Priority Dispatch Policy.
//!
//! Runs the ready process with the lowest priority value for a single tick,
//! then decides again, so a more urgent arrival preempts the running process
//! at the next tick boundary. Equal priorities go to the process submitted
//! first. A process without a priority ranks below every prioritized one.

use super::{Dispatch, DispatchPolicy, min_ready_by};
use crate::common::Tick;
use crate::sched::process::Job;

/// Priority Policy. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPolicy;

impl DispatchPolicy for PriorityPolicy {
    fn select(&mut self, now: Tick, jobs: &[Job]) -> Option<Dispatch> {
        min_ready_by(now, jobs, |job| {
            (job.process.priority.unwrap_or(i64::MAX), job.order)
        })
        .map(|index| Dispatch {
            job: index,
            ticks: 1,
        })
    }
}
