//! Error definitions.
//!
//! Errors only arise at the boundary of the simulator: validating process
//! records, parsing policy names, and loading configuration. The engines
//! themselves are total over validated input and never return an error.

use thiserror::Error;

/// Result type alias using the simulator error.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors that can occur while preparing a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    /// A process record was submitted with an empty identifier.
    #[error("process id must not be empty")]
    EmptyProcessId,

    /// A process record is missing a field the selected policy needs.
    #[error("process {id}: missing required field `{field}`")]
    MissingField {
        /// Identifier of the offending process.
        id: String,
        /// Name of the absent field.
        field: &'static str,
    },

    /// A process arrives before time zero.
    #[error("process {id}: arrival time must be >= 0, got {arrival}")]
    NegativeArrival {
        /// Identifier of the offending process.
        id: String,
        /// The rejected arrival time.
        arrival: i64,
    },

    /// A process requests no CPU time.
    #[error("process {id}: burst time must be > 0, got {burst}")]
    InvalidBurst {
        /// Identifier of the offending process.
        id: String,
        /// The rejected burst time.
        burst: i64,
    },

    /// Two processes share an identifier.
    #[error("duplicate process id: {0}")]
    DuplicateProcessId(String),

    /// Round Robin was configured with a zero time slice.
    #[error("round robin quantum must be > 0, got {0}")]
    InvalidQuantum(u64),

    /// A policy name did not match any known policy.
    #[error("unknown policy: {0}")]
    UnknownPolicy(String),

    /// A chart ordering name did not match any known ordering.
    #[error("unknown chart order: {0}")]
    UnknownChartOrder(String),

    /// Configuration or process list JSON could not be decoded.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}
