//! Input boundary tests: reference strings and process records.

use pretty_assertions::assert_eq;
use rstest::rstest;

use ossim_core::input::{ProcessSpec, load_processes, parse_reference_string};
use ossim_core::sched::Process;
use ossim_core::{DispatchPolicyKind, ProcessTable, SimError};

fn spec(id: &str, arrival: Option<i64>, burst: Option<i64>, priority: Option<i64>) -> ProcessSpec {
    ProcessSpec {
        id: id.to_string(),
        arrival,
        burst,
        priority,
    }
}

#[rstest]
#[case("1 2 3 1 2 4", vec![1, 2, 3, 1, 2, 4])]
#[case("  7\n0\t1  ", vec![7, 0, 1])]
#[case("a 1 b 2", vec![1, 2])]
#[case("", vec![])]
fn reference_strings(#[case] input: &str, #[case] expected: Vec<i64>) {
    assert_eq!(parse_reference_string(input), expected);
}

#[test]
fn valid_record_becomes_process() {
    let process = spec(" P1 ", Some(2), Some(5), Some(3)).validate().unwrap();
    assert_eq!(process, Process::new("P1", 2, 5).with_priority(3));
}

#[test]
fn blank_id_rejected() {
    let err = spec("   ", Some(0), Some(1), None).validate().unwrap_err();
    assert!(matches!(err, SimError::EmptyProcessId));
}

#[test]
fn missing_fields_rejected() {
    let err = spec("P1", None, Some(1), None).validate().unwrap_err();
    assert!(matches!(err, SimError::MissingField { field: "arrival", .. }));

    let err = spec("P1", Some(0), None, None).validate().unwrap_err();
    assert!(matches!(err, SimError::MissingField { field: "burst", .. }));
}

#[test]
fn negative_arrival_rejected() {
    let err = spec("P1", Some(-1), Some(1), None).validate().unwrap_err();
    assert!(matches!(err, SimError::NegativeArrival { arrival: -1, .. }));
    assert_eq!(err.to_string(), "process P1: arrival time must be >= 0, got -1");
}

#[rstest]
#[case(0)]
#[case(-4)]
fn non_positive_burst_rejected(#[case] burst: i64) {
    let err = spec("P1", Some(0), Some(burst), None).validate().unwrap_err();
    assert!(matches!(err, SimError::InvalidBurst { burst: b, .. } if b == burst));
}

#[test]
fn priority_required_only_by_priority_policy() {
    let record = spec("P1", Some(0), Some(1), None);
    assert!(record.validate_for(DispatchPolicyKind::Fcfs).is_ok());
    assert!(record.validate_for(DispatchPolicyKind::RoundRobin).is_ok());

    let err = record.validate_for(DispatchPolicyKind::Priority).unwrap_err();
    assert!(matches!(err, SimError::MissingField { field: "priority", .. }));
}

#[test]
fn load_processes_from_json() {
    let json = r#"[
        { "id": "P1", "arrival": 0, "burst": 4, "priority": 2 },
        { "id": "P2", "arrival": 1, "burst": 3 }
    ]"#;
    let table = load_processes(json, DispatchPolicyKind::Sjf).unwrap();
    assert_eq!(
        table.processes(),
        &[
            Process::new("P1", 0, 4).with_priority(2),
            Process::new("P2", 1, 3),
        ]
    );
}

#[test]
fn load_processes_rejects_duplicates() {
    let json = r#"[
        { "id": "P1", "arrival": 0, "burst": 4 },
        { "id": "P1", "arrival": 1, "burst": 3 }
    ]"#;
    let err = load_processes(json, DispatchPolicyKind::Fcfs).unwrap_err();
    assert!(matches!(err, SimError::DuplicateProcessId(ref id) if id == "P1"));
}

#[test]
fn load_processes_rejects_malformed_json() {
    let err = load_processes("{ not json", DispatchPolicyKind::Fcfs).unwrap_err();
    assert!(matches!(err, SimError::Json(_)));
}

#[test]
fn table_add_and_reset() {
    let mut table = ProcessTable::new();
    assert!(table.is_empty());
    table.add(Process::new("A", 0, 1)).unwrap();
    table.add(Process::new("B", 0, 1)).unwrap();
    assert!(matches!(
        table.add(Process::new("A", 3, 3)),
        Err(SimError::DuplicateProcessId(_))
    ));
    assert!(matches!(
        table.add(Process::new("", 0, 1)),
        Err(SimError::EmptyProcessId)
    ));
    assert_eq!(table.len(), 2);

    table.reset();
    assert!(table.is_empty());
}
