//! Process records, schedule output types, and the caller-owned process table.

use serde::{Deserialize, Serialize};

use crate::common::{Result, SimError, Tick};

/// A CPU-bound process submitted for scheduling.
///
/// Records are validated before they reach the scheduler (see
/// [`ProcessSpec`](crate::input::ProcessSpec)), so `id` is non-empty and
/// `burst` is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique, non-empty identifier.
    pub id: String,
    /// Tick at which the process becomes ready.
    pub arrival: Tick,
    /// Total CPU ticks required.
    pub burst: Tick,
    /// Scheduling priority; lower is more urgent. Only Priority scheduling reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: impl Into<String>, arrival: Tick, burst: Tick) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Scheduler-private working copy of a [`Process`].
///
/// Dispatch policies read jobs to make their decisions; only the scheduler
/// mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Clone of the submitted process.
    pub process: Process,
    /// Position in the submitted list; the final tie-breaker everywhere.
    pub order: usize,
    /// CPU ticks still owed.
    pub remaining: Tick,
    /// Tick of the first executed tick, once dispatched.
    pub start: Option<Tick>,
    /// Tick just after the last executed tick, once complete.
    pub finish: Option<Tick>,
}

impl Job {
    /// Creates the working copy of `process` at list position `order`.
    pub fn new(process: &Process, order: usize) -> Self {
        Self {
            process: process.clone(),
            order,
            remaining: process.burst,
            start: None,
            finish: None,
        }
    }

    /// Whether the job has arrived by `now` and still needs CPU time.
    pub const fn is_ready(&self, now: Tick) -> bool {
        self.process.arrival <= now && self.remaining > 0
    }
}

/// A maximal run of consecutive ticks given to one process (one Gantt bar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSegment {
    /// Process that held the CPU.
    pub process_id: String,
    /// First tick of the run.
    pub start: Tick,
    /// Number of ticks in the run.
    pub duration: Tick,
}

impl ScheduleSegment {
    /// Tick just after the run.
    pub const fn end(&self) -> Tick {
        self.start + self.duration
    }
}

/// Per-process timing derived from a completed schedule.
///
/// `turnaround = finish - arrival`, `waiting = turnaround - burst` and
/// `response = start - arrival`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: String,
    /// Arrival tick.
    pub arrival: Tick,
    /// Requested CPU ticks.
    pub burst: Tick,
    /// Priority, if the process carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// First tick on the CPU.
    pub start: Tick,
    /// Tick just after the last tick on the CPU.
    pub finish: Tick,
    /// Ticks spent ready but not running.
    pub waiting: Tick,
    /// Ticks from arrival to completion.
    pub turnaround: Tick,
    /// Ticks from arrival to first dispatch.
    pub response: Tick,
}

impl ProcessResult {
    /// Derives the metrics for a finished job.
    pub(crate) fn from_job(job: &Job) -> Self {
        let p = &job.process;
        let start = job.start.unwrap_or(p.arrival);
        let finish = job.finish.unwrap_or(start);
        let turnaround = finish.saturating_sub(p.arrival);
        Self {
            id: p.id.clone(),
            arrival: p.arrival,
            burst: p.burst,
            priority: p.priority,
            start,
            finish,
            waiting: turnaround.saturating_sub(p.burst),
            turnaround,
            response: start.saturating_sub(p.arrival),
        }
    }
}

/// Caller-owned list of processes awaiting simulation.
///
/// The table only grows until [`reset`](Self::reset). Schedulers read it
/// through [`processes`](Self::processes) and never modify it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::EmptyProcessId`] for an empty id and
    /// [`SimError::DuplicateProcessId`] if the id is already present.
    pub fn add(&mut self, process: Process) -> Result<()> {
        if process.id.is_empty() {
            return Err(SimError::EmptyProcessId);
        }
        if self.processes.iter().any(|p| p.id == process.id) {
            return Err(SimError::DuplicateProcessId(process.id));
        }
        self.processes.push(process);
        Ok(())
    }

    /// Removes every process.
    pub fn reset(&mut self) {
        self.processes.clear();
    }

    /// The processes in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
