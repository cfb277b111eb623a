//! First Come First Served (FCFS) Dispatch Policy.
//!
//! Runs ready processes in arrival order, each to completion. Processes that
//! arrive at the same tick run in the order they were submitted.

use super::{Dispatch, DispatchPolicy, min_ready_by};
use crate::common::Tick;
use crate::sched::process::Job;

/// FCFS Policy. Stateless; the order is fully determined by the jobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsPolicy;

impl DispatchPolicy for FcfsPolicy {
    fn select(&mut self, now: Tick, jobs: &[Job]) -> Option<Dispatch> {
        min_ready_by(now, jobs, |job| (job.process.arrival, job.order)).map(|index| Dispatch {
            job: index,
            ticks: jobs[index].remaining,
        })
    }
}
