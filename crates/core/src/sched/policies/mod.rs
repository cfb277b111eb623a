//! CPU Dispatch Policies.
//!
//! Implements the algorithms that pick which ready process runs next and for
//! how many ticks before the scheduler asks again.
//!
//! # Policies
//!
//! - `Fcfs`: First Come First Served, run to completion.
//! - `Sjf`: Shortest Job First (non-preemptive), run to completion.
//! - `Priority`: Preemptive priority, re-evaluated every tick.
//! - `RoundRobin`: FIFO ready queue with a fixed quantum.

/// First Come First Served dispatch policy.
pub mod fcfs;

/// Preemptive priority dispatch policy.
pub mod priority;

/// Round Robin dispatch policy.
pub mod round_robin;

/// Shortest Job First dispatch policy.
pub mod sjf;

pub use fcfs::FcfsPolicy;
pub use priority::PriorityPolicy;
pub use round_robin::RoundRobinPolicy;
pub use sjf::SjfPolicy;

use crate::common::Tick;
use crate::config::DispatchPolicyKind;
use crate::sched::process::Job;

/// A dispatch decision: run job `job` for `ticks` ticks without interruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Index of the chosen job in the scheduler's job list.
    pub job: usize,
    /// Ticks to execute before the next decision; always at least one.
    pub ticks: Tick,
}

/// Trait for CPU dispatch policies.
///
/// The scheduler admits jobs as their arrival time is reached, asks for a
/// decision whenever the CPU is free, and releases the job once its slice
/// has executed.
pub trait DispatchPolicy {
    /// Notifies the policy that job `job` has arrived.
    ///
    /// Jobs arriving together are admitted in arrival order, then list order.
    fn admit(&mut self, _job: usize) {}

    /// Chooses the next job among those ready at `now`.
    ///
    /// Returns `None` when no job is ready.
    fn select(&mut self, now: Tick, jobs: &[Job]) -> Option<Dispatch>;

    /// Hands a job back after its slice; `finished` when it has no time left.
    ///
    /// Called after any arrivals during the slice have been admitted.
    fn release(&mut self, _job: usize, _finished: bool) {}
}

/// Policy state for one run, one variant per [`DispatchPolicyKind`].
#[derive(Debug, Clone)]
pub enum Dispatcher {
    /// FCFS selection.
    Fcfs(FcfsPolicy),
    /// SJF selection.
    Sjf(SjfPolicy),
    /// Priority selection.
    Priority(PriorityPolicy),
    /// Round Robin ready queue.
    RoundRobin(RoundRobinPolicy),
}

impl Dispatcher {
    /// Creates fresh policy state; `quantum` is only read by Round Robin.
    pub fn new(kind: DispatchPolicyKind, quantum: Tick) -> Self {
        match kind {
            DispatchPolicyKind::Fcfs => Self::Fcfs(FcfsPolicy),
            DispatchPolicyKind::Sjf => Self::Sjf(SjfPolicy),
            DispatchPolicyKind::Priority => Self::Priority(PriorityPolicy),
            DispatchPolicyKind::RoundRobin => Self::RoundRobin(RoundRobinPolicy::new(quantum)),
        }
    }
}

impl DispatchPolicy for Dispatcher {
    fn admit(&mut self, job: usize) {
        match self {
            Self::Fcfs(p) => p.admit(job),
            Self::Sjf(p) => p.admit(job),
            Self::Priority(p) => p.admit(job),
            Self::RoundRobin(p) => p.admit(job),
        }
    }

    fn select(&mut self, now: Tick, jobs: &[Job]) -> Option<Dispatch> {
        match self {
            Self::Fcfs(p) => p.select(now, jobs),
            Self::Sjf(p) => p.select(now, jobs),
            Self::Priority(p) => p.select(now, jobs),
            Self::RoundRobin(p) => p.select(now, jobs),
        }
    }

    fn release(&mut self, job: usize, finished: bool) {
        match self {
            Self::Fcfs(p) => p.release(job, finished),
            Self::Sjf(p) => p.release(job, finished),
            Self::Priority(p) => p.release(job, finished),
            Self::RoundRobin(p) => p.release(job, finished),
        }
    }
}

/// Index of the ready job with the smallest `key`.
///
/// Keys must end in [`Job::order`] so that no two jobs compare equal.
pub(crate) fn min_ready_by<K, F>(now: Tick, jobs: &[Job], key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Job) -> K,
{
    jobs.iter()
        .enumerate()
        .filter(|(_, job)| job.is_ready(now))
        .min_by_key(|(_, job)| key(job))
        .map(|(index, _)| index)
}
