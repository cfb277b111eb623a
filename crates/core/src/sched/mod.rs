//! Single-CPU Process Scheduler.
//!
//! This module drives a set of processes through one simulated CPU. It:
//! 1. **Admits** processes to the active dispatch policy as their arrival tick is reached.
//! 2. **Dispatches** the policy's choice for the slice length it requests.
//! 3. **Skips idle time** by jumping straight to the next arrival when nothing is ready.
//! 4. **Records** a coalesced Gantt chart and per-process timing.
//!
//! The scheduler clones the submitted processes into private [`Job`]s; the
//! caller's list is never modified.

/// Process, job, segment and result types plus the caller-owned process table.
pub mod process;

/// Dispatch policy implementations (FCFS, SJF, Priority, Round Robin).
pub mod policies;

pub use process::{Job, Process, ProcessResult, ProcessTable, ScheduleSegment};

use serde::Serialize;
use tracing::{debug, trace, warn};

use self::policies::{Dispatch, DispatchPolicy, Dispatcher};
use crate::common::Tick;
use crate::config::{DispatchPolicyKind, SchedulingConfig};
use crate::stats::{self, ScheduleSummary};

/// Output of a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    /// Policy that produced the schedule.
    pub policy: DispatchPolicyKind,
    /// Round Robin quantum; `None` for other policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Tick>,
    /// Gantt chart: maximal runs of consecutive ticks, in time order. Idle
    /// periods appear as gaps between segments.
    pub gantt: Vec<ScheduleSegment>,
    /// Per-process timing, in submission order.
    pub processes: Vec<ProcessResult>,
}

impl ScheduleResult {
    /// Tick at which the last process completed.
    pub fn makespan(&self) -> Tick {
        self.gantt.last().map_or(0, ScheduleSegment::end)
    }

    /// Ticks the CPU spent running processes.
    pub fn busy_ticks(&self) -> Tick {
        self.gantt.iter().map(|s| s.duration).sum()
    }

    /// Ticks the CPU spent idle before the makespan.
    pub fn idle_ticks(&self) -> Tick {
        self.makespan() - self.busy_ticks()
    }

    /// Total ticks executed by process `id` across all segments.
    pub fn executed_ticks(&self, id: &str) -> Tick {
        self.gantt
            .iter()
            .filter(|s| s.process_id == id)
            .map(|s| s.duration)
            .sum()
    }

    /// Timing for process `id`.
    pub fn result_for(&self, id: &str) -> Option<&ProcessResult> {
        self.processes.iter().find(|r| r.id == id)
    }

    /// Averages and utilization for this schedule.
    pub fn summary(&self) -> ScheduleSummary {
        stats::schedule_summary(self)
    }
}

/// CPU scheduler for one dispatch policy.
///
/// The scheduler holds only its parameters; every [`run`](Self::run) starts
/// at tick zero with fresh policy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessScheduler {
    policy: DispatchPolicyKind,
    quantum: Tick,
}

impl ProcessScheduler {
    /// Creates a scheduler; `quantum` is only used by Round Robin.
    pub const fn new(policy: DispatchPolicyKind, quantum: Tick) -> Self {
        Self { policy, quantum }
    }

    /// Creates a scheduler from the scheduling section of a configuration.
    pub const fn from_config(config: &SchedulingConfig) -> Self {
        Self::new(config.policy, config.quantum)
    }

    /// Active dispatch policy.
    pub const fn policy(&self) -> DispatchPolicyKind {
        self.policy
    }

    /// Schedules `processes` to completion.
    ///
    /// Processes are assumed valid (positive burst, unique ids). An empty list
    /// yields an empty schedule. The number of decisions is bounded by the
    /// number of dispatches plus the number of distinct arrival ticks; idle
    /// stretches cost one step each regardless of length.
    pub fn run(&self, processes: &[Process]) -> ScheduleResult {
        debug!(
            policy = %self.policy,
            quantum = self.quantum,
            processes = processes.len(),
            "starting schedule"
        );

        let mut jobs: Vec<Job> = processes
            .iter()
            .enumerate()
            .map(|(order, p)| Job::new(p, order))
            .collect();

        let mut arrivals: Vec<usize> = (0..jobs.len()).collect();
        arrivals.sort_by_key(|&i| (jobs[i].process.arrival, i));
        let mut admitted = 0;

        let mut dispatcher = Dispatcher::new(self.policy, self.quantum);
        let mut gantt: Vec<ScheduleSegment> = Vec::new();
        let mut unfinished = jobs.len();
        let mut now: Tick = 0;

        admit_arrivals(&mut dispatcher, &jobs, &arrivals, &mut admitted, now);

        while unfinished > 0 {
            let Some(Dispatch { job: index, ticks }) = dispatcher.select(now, &jobs) else {
                let Some(&next) = arrivals.get(admitted) else {
                    warn!(unfinished, now, "no ready process and no pending arrival");
                    break;
                };
                now = now.max(jobs[next].process.arrival);
                trace!(now, "cpu idle; jumping to next arrival");
                admit_arrivals(&mut dispatcher, &jobs, &arrivals, &mut admitted, now);
                continue;
            };

            let job = &mut jobs[index];
            let slice = ticks.min(job.remaining);
            trace!(process = %job.process.id, now, slice, "dispatch");
            push_segment(&mut gantt, &job.process.id, now, slice);

            if job.start.is_none() {
                job.start = Some(now);
            }
            job.remaining -= slice;
            now += slice;

            let finished = job.remaining == 0;
            if finished {
                job.finish = Some(now);
                unfinished -= 1;
            }

            admit_arrivals(&mut dispatcher, &jobs, &arrivals, &mut admitted, now);
            dispatcher.release(index, finished);
        }

        debug!(policy = %self.policy, makespan = now, segments = gantt.len(), "schedule complete");

        ScheduleResult {
            policy: self.policy,
            quantum: self.policy.uses_quantum().then_some(self.quantum.max(1)),
            gantt,
            processes: jobs.iter().map(ProcessResult::from_job).collect(),
        }
    }
}

/// Admits every not-yet-admitted job whose arrival is at or before `now`.
///
/// `arrivals` is sorted by arrival tick then submission order, so jobs are
/// admitted in that order.
fn admit_arrivals(
    dispatcher: &mut Dispatcher,
    jobs: &[Job],
    arrivals: &[usize],
    admitted: &mut usize,
    now: Tick,
) {
    while let Some(&index) = arrivals.get(*admitted) {
        if jobs[index].process.arrival > now {
            break;
        }
        dispatcher.admit(index);
        *admitted += 1;
    }
}

/// Appends `ticks` of `id` starting at `start`, extending the last segment
/// when it is the same process and contiguous.
fn push_segment(gantt: &mut Vec<ScheduleSegment>, id: &str, start: Tick, ticks: Tick) {
    if let Some(last) = gantt.last_mut() {
        if last.process_id == id && last.end() == start {
            last.duration += ticks;
            return;
        }
    }
    gantt.push(ScheduleSegment {
        process_id: id.to_string(),
        start,
        duration: ticks,
    });
}

/// Runs a single schedule; shorthand for [`ProcessScheduler::run`].
pub fn run(processes: &[Process], policy: DispatchPolicyKind, quantum: Tick) -> ScheduleResult {
    ProcessScheduler::new(policy, quantum).run(processes)
}

/// Schedules the same processes under every dispatch policy.
///
/// Results are returned in [`DispatchPolicyKind::ALL`] order.
pub fn compare(processes: &[Process], quantum: Tick) -> Vec<ScheduleResult> {
    DispatchPolicyKind::ALL
        .iter()
        .map(|&policy| run(processes, policy, quantum))
        .collect()
}
