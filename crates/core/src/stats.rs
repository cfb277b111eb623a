//! Simulation statistics and reporting.
//!
//! This module derives summary metrics from the raw engine output. It provides:
//! 1. **Fault statistics:** Hits, faults, hit rate and miss rate for a trace.
//! 2. **Fault-rate timeline:** Cumulative fault rate after every reference.
//! 3. **Schedule summary:** Average waiting/turnaround/response, utilization, throughput.
//! 4. **Chart ordering:** Per-process results re-sorted for a given chart.
//!
//! Every rate is defined as zero when its denominator is zero, so degenerate
//! runs never produce `NaN` or infinities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{SimError, Tick};
use crate::paging::TraceStep;
use crate::sched::{ProcessResult, ScheduleResult};

/// `part / whole × 100`, or zero when `whole` is zero.
fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}

/// `total / count`, or zero when `count` is zero.
fn mean(total: Tick, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total as f64 / count as f64 }
}

/// Sum of one timing field across all results.
fn total(results: &[ProcessResult], field: impl Fn(&ProcessResult) -> Tick) -> Tick {
    results.iter().map(field).sum()
}

/// Hit and miss totals for a page trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaultStats {
    /// References simulated.
    pub total_references: usize,
    /// References that faulted.
    pub faults: usize,
    /// References satisfied from memory.
    pub hits: usize,
    /// Hits as a percentage of references.
    pub hit_rate_pct: f64,
    /// Faults as a percentage of references.
    pub miss_rate_pct: f64,
}

/// Computes hit and miss rates; both are zero when there are no references.
///
/// `total_faults` is clamped to `total_refs`.
pub fn fault_stats(total_refs: usize, total_faults: usize) -> FaultStats {
    let faults = total_faults.min(total_refs);
    let hits = total_refs - faults;
    FaultStats {
        total_references: total_refs,
        faults,
        hits,
        hit_rate_pct: percent(hits as f64, total_refs as f64),
        miss_rate_pct: percent(faults as f64, total_refs as f64),
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "references               {}", self.total_references)?;
        writeln!(f, "faults                   {}", self.faults)?;
        writeln!(f, "hits                     {}", self.hits)?;
        writeln!(f, "hit_rate                 {:.2}%", self.hit_rate_pct)?;
        write!(f, "miss_rate                {:.2}%", self.miss_rate_pct)
    }
}

/// Cumulative fault rate after one reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaultRatePoint {
    /// One-based reference number.
    pub step: usize,
    /// Faults so far as a percentage of references so far.
    pub fault_rate_pct: f64,
}

/// Fault rate after every step: `faults_so_far / (i + 1) × 100` at index `i`.
pub fn fault_rate_timeline(steps: &[TraceStep]) -> Vec<FaultRatePoint> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| FaultRatePoint {
            step: i + 1,
            fault_rate_pct: percent(step.cumulative_faults as f64, (i + 1) as f64),
        })
        .collect()
}

/// Aggregate timing for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleSummary {
    /// Processes scheduled.
    pub process_count: usize,
    /// Completion tick of the last process.
    pub makespan: Tick,
    /// Ticks spent running processes.
    pub busy_ticks: Tick,
    /// Ticks spent idle before the makespan.
    pub idle_ticks: Tick,
    /// Busy ticks as a percentage of the makespan.
    pub cpu_utilization_pct: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Completed processes per tick of makespan.
    pub throughput: f64,
}

/// Summarizes a schedule; every field is zero for an empty schedule.
pub fn schedule_summary(result: &ScheduleResult) -> ScheduleSummary {
    let n = result.processes.len();
    let makespan = result.makespan();
    let busy_ticks = result.busy_ticks();
    let results = result.processes.as_slice();

    ScheduleSummary {
        process_count: n,
        makespan,
        busy_ticks,
        idle_ticks: makespan - busy_ticks,
        cpu_utilization_pct: percent(busy_ticks as f64, makespan as f64),
        avg_waiting: mean(total(results, |r| r.waiting), n),
        avg_turnaround: mean(total(results, |r| r.turnaround), n),
        avg_response: mean(total(results, |r| r.response), n),
        throughput: if makespan == 0 { 0.0 } else { n as f64 / makespan as f64 },
    }
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "processes                {}", self.process_count)?;
        writeln!(f, "makespan                 {}", self.makespan)?;
        writeln!(
            f,
            "cpu.busy                 {} ({:.2}%)",
            self.busy_ticks, self.cpu_utilization_pct
        )?;
        writeln!(f, "cpu.idle                 {}", self.idle_ticks)?;
        writeln!(f, "avg_waiting              {:.2}", self.avg_waiting)?;
        writeln!(f, "avg_turnaround           {:.2}", self.avg_turnaround)?;
        writeln!(f, "avg_response             {:.2}", self.avg_response)?;
        write!(f, "throughput               {:.4} /tick", self.throughput)
    }
}

/// Orderings used by per-process charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartOrder {
    /// Ascending arrival tick.
    #[default]
    Arrival,
    /// Ascending priority value; processes without one last.
    Priority,
    /// Ascending identifier (byte order).
    Id,
    /// Ascending burst.
    Burst,
}

impl FromStr for ChartOrder {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrival" => Ok(Self::Arrival),
            "priority" => Ok(Self::Priority),
            "id" => Ok(Self::Id),
            "burst" => Ok(Self::Burst),
            _ => Err(SimError::UnknownChartOrder(s.to_string())),
        }
    }
}

/// Returns a copy of `results` sorted for a chart.
///
/// The sort is stable: equal keys keep their incoming (submission) order.
pub fn ordered(results: &[ProcessResult], order: ChartOrder) -> Vec<ProcessResult> {
    let mut sorted = results.to_vec();
    match order {
        ChartOrder::Arrival => sorted.sort_by_key(|r| r.arrival),
        ChartOrder::Priority => sorted.sort_by_key(|r| (r.priority.is_none(), r.priority)),
        ChartOrder::Id => sorted.sort_by(|a, b| a.id.cmp(&b.id)),
        ChartOrder::Burst => sorted.sort_by_key(|r| r.burst),
    }
    sorted
}
