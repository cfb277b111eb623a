//! Shortest Job First (SJF) Dispatch Policy, non-preemptive.
//!
//! Among the ready processes, runs the one with the smallest original burst
//! to completion. Ties go to the earliest arrival, then submission order.
//! A short job arriving mid-run waits for the current job to finish.

use super::{Dispatch, DispatchPolicy, min_ready_by};
use crate::common::Tick;
use crate::sched::process::Job;

/// SJF Policy. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfPolicy;

impl DispatchPolicy for SjfPolicy {
    fn select(&mut self, now: Tick, jobs: &[Job]) -> Option<Dispatch> {
        min_ready_by(now, jobs, |job| {
            (job.process.burst, job.process.arrival, job.order)
        })
        .map(|index| Dispatch {
            job: index,
            ticks: jobs[index].remaining,
        })
    }
}
