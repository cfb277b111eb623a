//! Front-end input handling.
//!
//! Front ends hand the simulator loosely typed input: a reference string
//! typed into a text box, or process records assembled from form fields.
//! This module turns that input into the typed values the engines expect.

use serde::{Deserialize, Serialize};

use crate::common::{PageRef, Result, SimError, Tick};
use crate::config::DispatchPolicyKind;
use crate::sched::{Process, ProcessTable};

/// Parses a whitespace-separated reference string.
///
/// Tokens that are not integers are dropped silently.
///
/// ```
/// use ossim_core::input::parse_reference_string;
///
/// assert_eq!(parse_reference_string("7 0 x 1  2\t0"), vec![7, 0, 1, 2, 0]);
/// ```
pub fn parse_reference_string(input: &str) -> Vec<PageRef> {
    input
        .split_whitespace()
        .filter_map(|token| token.parse().ok())
        .collect()
}

/// An unvalidated process record, as collected by a form or read from JSON.
///
/// Numeric fields are optional and signed so that incomplete or negative
/// entries reach [`validate`](Self::validate) and are reported rather than
/// failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process identifier
    #[serde(default)]
    pub id: String,
    /// Arrival tick
    #[serde(default)]
    pub arrival: Option<i64>,
    /// CPU ticks required
    #[serde(default)]
    pub burst: Option<i64>,
    /// Priority (lower is more urgent)
    #[serde(default)]
    pub priority: Option<i64>,
}

impl ProcessSpec {
    /// Checks the record and converts it into a [`Process`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::EmptyProcessId`], [`SimError::MissingField`],
    /// [`SimError::NegativeArrival`] or [`SimError::InvalidBurst`].
    pub fn validate(&self) -> Result<Process> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(SimError::EmptyProcessId);
        }
        let arrival = self.arrival.ok_or_else(|| SimError::MissingField {
            id: id.to_string(),
            field: "arrival",
        })?;
        let burst = self.burst.ok_or_else(|| SimError::MissingField {
            id: id.to_string(),
            field: "burst",
        })?;

        let arrival = Tick::try_from(arrival).map_err(|_| SimError::NegativeArrival {
            id: id.to_string(),
            arrival,
        })?;
        let burst = Tick::try_from(burst)
            .ok()
            .filter(|&b| b > 0)
            .ok_or_else(|| SimError::InvalidBurst {
                id: id.to_string(),
                burst,
            })?;

        Ok(Process {
            id: id.to_string(),
            arrival,
            burst,
            priority: self.priority,
        })
    }

    /// Like [`validate`](Self::validate), additionally requiring a priority
    /// when `policy` schedules by priority.
    ///
    /// # Errors
    ///
    /// Everything [`validate`](Self::validate) returns, plus
    /// [`SimError::MissingField`] for an absent priority.
    pub fn validate_for(&self, policy: DispatchPolicyKind) -> Result<Process> {
        let process = self.validate()?;
        if policy.requires_priority() && process.priority.is_none() {
            return Err(SimError::MissingField {
                id: process.id,
                field: "priority",
            });
        }
        Ok(process)
    }
}

/// Decodes a JSON array of process records and validates each for `policy`.
///
/// # Errors
///
/// Returns [`SimError::Json`] if the document is not an array of records, the
/// first validation error otherwise, or [`SimError::DuplicateProcessId`].
pub fn load_processes(json: &str, policy: DispatchPolicyKind) -> Result<ProcessTable> {
    let specs: Vec<ProcessSpec> = serde_json::from_str(json)?;
    let mut table = ProcessTable::new();
    for spec in &specs {
        table.add(spec.validate_for(policy)?)?;
    }
    Ok(table)
}
