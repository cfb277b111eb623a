//! Dispatch policy tests.
//!
//! Gantt charts are compared as `(id, start, end)` triples.

use pretty_assertions::assert_eq;

use ossim_core::DispatchPolicyKind::{Fcfs, Priority, RoundRobin, Sjf};
use ossim_core::sched::policies::{Dispatch, DispatchPolicy, RoundRobinPolicy, SjfPolicy};
use ossim_core::sched::{Job, Process, run};

use crate::common::{bars, init_tracing, prioritized, processes};

fn bar(id: &str, start: u64, end: u64) -> (String, u64, u64) {
    (id.to_string(), start, end)
}

#[test]
fn fcfs_runs_in_arrival_order() {
    init_tracing();
    let procs = processes(&[("P1", 0, 4), ("P2", 1, 3), ("P3", 2, 1)]);
    let result = run(&procs, Fcfs, 2);

    assert_eq!(
        bars(&result),
        vec![bar("P1", 0, 4), bar("P2", 4, 7), bar("P3", 7, 8)]
    );
    let timing: Vec<(u64, u64, u64, u64)> = result
        .processes
        .iter()
        .map(|r| (r.start, r.finish, r.waiting, r.turnaround))
        .collect();
    assert_eq!(timing, vec![(0, 4, 0, 4), (4, 7, 3, 6), (7, 8, 5, 6)]);
}

#[test]
fn fcfs_equal_arrivals_keep_submission_order() {
    let procs = processes(&[("B", 0, 2), ("A", 0, 1), ("C", 0, 1)]);
    let result = run(&procs, Fcfs, 2);
    assert_eq!(
        bars(&result),
        vec![bar("B", 0, 2), bar("A", 2, 3), bar("C", 3, 4)]
    );
}

#[test]
fn fcfs_submission_order_does_not_override_arrival() {
    let procs = processes(&[("late", 3, 1), ("early", 0, 2)]);
    let result = run(&procs, Fcfs, 2);
    assert_eq!(
        bars(&result),
        vec![bar("early", 0, 2), bar("late", 3, 4)]
    );
}

#[test]
fn sjf_picks_shortest_ready_burst() {
    let procs = processes(&[("P1", 0, 7), ("P2", 2, 4), ("P3", 4, 1), ("P4", 5, 4)]);
    let result = run(&procs, Sjf, 2);

    assert_eq!(
        bars(&result),
        vec![
            bar("P1", 0, 7),
            bar("P3", 7, 8),
            bar("P2", 8, 12),
            bar("P4", 12, 16),
        ]
    );
    assert!((result.summary().avg_waiting - 4.0).abs() < f64::EPSILON);
}

#[test]
fn sjf_is_not_preemptive() {
    let procs = processes(&[("long", 0, 10), ("short", 1, 1)]);
    let result = run(&procs, Sjf, 2);
    assert_eq!(
        bars(&result),
        vec![bar("long", 0, 10), bar("short", 10, 11)]
    );
}

#[test]
fn sjf_equal_bursts_fall_back_to_arrival() {
    let procs = processes(&[("first", 0, 1), ("B", 1, 3), ("A", 0, 3)]);
    let result = run(&procs, Sjf, 2);
    assert_eq!(
        bars(&result),
        vec![bar("first", 0, 1), bar("A", 1, 4), bar("B", 4, 7)]
    );
}

#[test]
fn sjf_policy_selects_whole_remaining_burst() {
    let jobs: Vec<Job> = processes(&[("a", 0, 5), ("b", 0, 3)])
        .iter()
        .enumerate()
        .map(|(i, p)| Job::new(p, i))
        .collect();
    let mut sjf = SjfPolicy;
    assert_eq!(sjf.select(0, &jobs), Some(Dispatch { job: 1, ticks: 3 }));
}

#[test]
fn priority_preempts_on_more_urgent_arrival() {
    let procs = prioritized(&[("P1", 0, 5, 3), ("P2", 2, 2, 1), ("P3", 3, 1, 2)]);
    let result = run(&procs, Priority, 2);

    assert_eq!(
        bars(&result),
        vec![
            bar("P1", 0, 2),
            bar("P2", 2, 4),
            bar("P3", 4, 5),
            bar("P1", 5, 8),
        ]
    );
    let p1 = result.result_for("P1").unwrap();
    assert_eq!((p1.start, p1.finish, p1.waiting, p1.response), (0, 8, 3, 0));
    let p3 = result.result_for("P3").unwrap();
    assert_eq!((p3.waiting, p3.response), (1, 1));
}

#[test]
fn priority_ties_go_to_submission_order() {
    let procs = prioritized(&[("A", 1, 2, 1), ("B", 0, 3, 1)]);
    let result = run(&procs, Priority, 2);
    assert_eq!(
        bars(&result),
        vec![bar("B", 0, 1), bar("A", 1, 3), bar("B", 3, 5)]
    );
}

#[test]
fn priority_without_value_runs_last() {
    let procs = vec![
        Process::new("none", 0, 2),
        Process::new("low", 0, 1).with_priority(100),
    ];
    let result = run(&procs, Priority, 2);
    assert_eq!(
        bars(&result),
        vec![bar("low", 0, 1), bar("none", 1, 3)]
    );
}

#[test]
fn round_robin_rotates_with_quantum() {
    let procs = processes(&[("P1", 0, 4), ("P2", 1, 3)]);
    let result = run(&procs, RoundRobin, 2);

    assert_eq!(
        bars(&result),
        vec![
            bar("P1", 0, 2),
            bar("P2", 2, 4),
            bar("P1", 4, 6),
            bar("P2", 6, 7),
        ]
    );
    let p1 = result.result_for("P1").unwrap();
    assert_eq!((p1.finish, p1.turnaround, p1.waiting), (6, 6, 2));
    let p2 = result.result_for("P2").unwrap();
    assert_eq!((p2.finish, p2.turnaround, p2.waiting), (7, 6, 3));
    assert_eq!(result.quantum, Some(2));
}

#[test]
fn round_robin_arrivals_queue_ahead_of_preempted_process() {
    // C arrives exactly when A's first slice ends and must run before A again.
    let procs = processes(&[("A", 0, 3), ("B", 0, 2), ("C", 2, 1)]);
    let result = run(&procs, RoundRobin, 2);
    assert_eq!(
        bars(&result),
        vec![
            bar("A", 0, 2),
            bar("B", 2, 4),
            bar("C", 4, 5),
            bar("A", 5, 6),
        ]
    );
}

#[test]
fn round_robin_lone_process_is_one_segment() {
    let procs = processes(&[("solo", 0, 5)]);
    let result = run(&procs, RoundRobin, 2);
    assert_eq!(bars(&result), vec![bar("solo", 0, 5)]);
}

#[test]
fn round_robin_zero_quantum_runs_single_ticks() {
    assert_eq!(RoundRobinPolicy::new(0).quantum(), 1);
    let procs = processes(&[("A", 0, 2), ("B", 0, 1)]);
    let result = run(&procs, RoundRobin, 0);
    assert_eq!(
        bars(&result),
        vec![bar("A", 0, 1), bar("B", 1, 2), bar("A", 2, 3)]
    );
    assert_eq!(result.quantum, Some(1));
}

#[test]
fn quantum_is_reported_only_for_round_robin() {
    let procs = processes(&[("A", 0, 2)]);
    assert_eq!(run(&procs, Fcfs, 5).quantum, None);
    assert_eq!(run(&procs, RoundRobin, 5).quantum, Some(5));
}
