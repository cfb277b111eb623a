//! Scheduler loop tests.

use pretty_assertions::assert_eq;
use rstest::rstest;

use ossim_core::DispatchPolicyKind::{self, Fcfs, Priority, RoundRobin, Sjf};
use ossim_core::config::SchedulingConfig;
use ossim_core::sched::{ProcessScheduler, compare, run};

use crate::common::{bars, init_tracing, processes, table};

#[rstest]
fn empty_input_yields_empty_schedule(
    #[values(Fcfs, Sjf, Priority, RoundRobin)] policy: DispatchPolicyKind,
) {
    let result = run(&[], policy, 2);
    assert!(result.gantt.is_empty());
    assert!(result.processes.is_empty());
    assert_eq!(result.makespan(), 0);

    let summary = result.summary();
    assert_eq!(summary.process_count, 0);
    assert!(summary.avg_waiting.abs() < f64::EPSILON);
    assert!(summary.cpu_utilization_pct.abs() < f64::EPSILON);
    assert!(summary.throughput.abs() < f64::EPSILON);
}

#[rstest]
fn idle_gap_jumps_to_next_arrival(
    #[values(Fcfs, Sjf, Priority, RoundRobin)] policy: DispatchPolicyKind,
) {
    init_tracing();
    let procs = processes(&[("P1", 0, 2), ("P2", 10, 3)]);
    let result = run(&procs, policy, 2);

    assert_eq!(
        bars(&result),
        vec![("P1".to_string(), 0, 2), ("P2".to_string(), 10, 13)]
    );
    assert_eq!(result.makespan(), 13);
    assert_eq!(result.busy_ticks(), 5);
    assert_eq!(result.idle_ticks(), 8);
}

#[rstest]
fn late_first_arrival_starts_cpu_idle(
    #[values(Fcfs, Sjf, Priority, RoundRobin)] policy: DispatchPolicyKind,
) {
    let procs = processes(&[("P1", 1_000_000, 1)]);
    let result = run(&procs, policy, 2);
    assert_eq!(result.gantt.len(), 1);
    assert_eq!(result.gantt[0].start, 1_000_000);
    let p1 = result.result_for("P1").unwrap();
    assert_eq!((p1.waiting, p1.response, p1.turnaround), (0, 0, 1));
}

#[rstest]
fn results_follow_submission_order(
    #[values(Fcfs, Sjf, Priority, RoundRobin)] policy: DispatchPolicyKind,
) {
    let procs = processes(&[("Z", 5, 1), ("A", 0, 3), ("M", 2, 2)]);
    let ids: Vec<String> = run(&procs, policy, 2)
        .processes
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["Z", "A", "M"]);
}

#[test]
fn input_processes_are_not_modified() {
    let procs = processes(&[("P1", 0, 4), ("P2", 1, 3)]);
    let before = procs.clone();
    let _ = run(&procs, RoundRobin, 1);
    assert_eq!(procs, before);
}

#[test]
fn scheduler_reads_process_table() {
    let table = table(processes(&[("P1", 0, 4), ("P2", 1, 3), ("P3", 2, 1)]));
    let config = SchedulingConfig {
        policy: Fcfs,
        quantum: 2,
    };
    let scheduler = ProcessScheduler::from_config(&config);
    assert_eq!(scheduler.policy(), Fcfs);

    let result = scheduler.run(table.processes());
    assert_eq!(result.makespan(), 8);
    assert_eq!(table.len(), 3);
}

#[test]
fn repeated_runs_are_identical() {
    let procs = processes(&[("P1", 0, 4), ("P2", 1, 3), ("P3", 1, 2)]);
    let scheduler = ProcessScheduler::new(RoundRobin, 1);
    assert_eq!(scheduler.run(&procs), scheduler.run(&procs));
}

#[test]
fn executed_ticks_sum_segments() {
    let procs = processes(&[("P1", 0, 4), ("P2", 1, 3)]);
    let result = run(&procs, RoundRobin, 1);
    assert_eq!(result.executed_ticks("P1"), 4);
    assert_eq!(result.executed_ticks("P2"), 3);
    assert_eq!(result.executed_ticks("missing"), 0);
}

#[test]
fn compare_runs_every_policy_in_order() {
    let procs = processes(&[("P1", 0, 4), ("P2", 1, 3)]);
    let policies: Vec<DispatchPolicyKind> =
        compare(&procs, 2).iter().map(|r| r.policy).collect();
    assert_eq!(policies, DispatchPolicyKind::ALL.to_vec());
}

#[test]
fn schedule_serializes_gantt_and_timing() {
    let procs = processes(&[("P1", 0, 2)]);
    let json = serde_json::to_value(run(&procs, RoundRobin, 3)).unwrap();
    assert_eq!(json["policy"], "RR");
    assert_eq!(json["quantum"], 3);
    assert_eq!(json["gantt"][0]["process_id"], "P1");
    assert_eq!(json["gantt"][0]["duration"], 2);
    assert_eq!(json["processes"][0]["turnaround"], 2);
}
