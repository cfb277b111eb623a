//! Operating-system resource-management policy simulator.
//!
//! This crate implements deterministic, step-by-step simulations of classical policies:
//! 1. **Paging:** FIFO, LRU, LFU and Optimal page replacement over a fixed frame set.
//! 2. **Scheduling:** FCFS, non-preemptive SJF, preemptive Priority and Round Robin on one CPU.
//! 3. **Statistics:** Hit/miss rates, fault-rate timelines and scheduling summaries.
//! 4. **Boundary:** Configuration and best-effort input parsing for front ends.
//!
//! Every `run` is a pure function over a snapshot of its inputs: caller-owned
//! collections are cloned, never mutated, and no state survives between runs.
//!
//! ```
//! use ossim_core::config::EvictionPolicyKind;
//! use ossim_core::paging::ReferenceTraceEngine;
//!
//! let trace = ReferenceTraceEngine::new(3, EvictionPolicyKind::Lru).run(&[1, 2, 3, 1, 2, 4]);
//! assert_eq!(trace.total_faults, 4);
//! assert_eq!(trace.final_memory(), &[Some(1), Some(2), Some(4)]);
//! ```

/// Shared types (page and tick aliases) and the crate error type.
pub mod common;
/// Simulator configuration (defaults, policy enums, JSON loading).
pub mod config;
/// Best-effort parsing and validation of front-end input.
pub mod input;
/// Page-replacement engine and eviction policies.
pub mod paging;
/// CPU scheduling engine and dispatch policies.
pub mod sched;
/// Derived metrics for traces and schedules.
pub mod stats;

pub use crate::common::{PageRef, Result, SimError, Tick};
pub use crate::config::{DispatchPolicyKind, EvictionPolicyKind, SimConfig};
pub use crate::paging::{ReferenceTraceEngine, TraceResult};
pub use crate::sched::{Process, ProcessScheduler, ProcessTable, ScheduleResult};
