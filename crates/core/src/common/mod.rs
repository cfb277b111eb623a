//! Common types used throughout the simulator.
//!
//! This module provides the small vocabulary shared by both engines:
//! 1. **Identifiers:** Page references and simulated time.
//! 2. **Error Handling:** The crate-wide error enum and `Result` alias.

/// Error types for input validation and configuration.
pub mod error;

pub use error::{Result, SimError};

/// Integer page identifier as it appears in a reference string.
pub type PageRef = i64;

/// Simulated time, measured in CPU ticks.
pub type Tick = u64;
