//! Configuration system for the simulator.
//!
//! This module defines the configuration structures and enums used to parameterize
//! both engines. It provides:
//! 1. **Defaults:** Baseline frame count and Round Robin quantum.
//! 2. **Enums:** Eviction and dispatch policy selectors (closed sets).
//! 3. **Structures:** Paging and scheduling settings under a root `SimConfig`.
//!
//! Configuration is supplied as JSON by a front end, or use `SimConfig::default()`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Result, SimError, Tick};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::Tick;

    /// Number of memory frames when none is given.
    pub const FRAMES: usize = 3;

    /// Round Robin time slice in ticks.
    pub const QUANTUM: Tick = 2;
}

/// Page-replacement algorithms.
///
/// Selects the rule used to pick a victim frame when a fault occurs and
/// every frame is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvictionPolicyKind {
    /// First In First Out.
    ///
    /// Evicts the frame that was filled the longest time ago.
    #[default]
    #[serde(alias = "Fifo")]
    Fifo,
    /// Least Recently Used.
    ///
    /// Evicts the page whose last reference is the oldest.
    #[serde(alias = "Lru")]
    Lru,
    /// Least Frequently Used.
    ///
    /// Evicts the page with the fewest references, oldest last reference first on ties.
    #[serde(alias = "Lfu")]
    Lfu,
    /// Belady's optimal (clairvoyant) replacement.
    ///
    /// Evicts the page whose next use lies furthest in the future.
    #[serde(alias = "Optimal", alias = "OPT")]
    Optimal,
}

impl EvictionPolicyKind {
    /// Every eviction policy, in presentation order.
    pub const ALL: [Self; 4] = [Self::Fifo, Self::Lru, Self::Lfu, Self::Optimal];

    /// Short upper-case name of the policy.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Lfu => "LFU",
            Self::Optimal => "OPTIMAL",
        }
    }
}

impl fmt::Display for EvictionPolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EvictionPolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "lfu" => Ok(Self::Lfu),
            "optimal" | "opt" => Ok(Self::Optimal),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

/// CPU scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DispatchPolicyKind {
    /// First Come First Served; non-preemptive.
    #[default]
    #[serde(alias = "Fcfs")]
    Fcfs,
    /// Shortest Job First; non-preemptive, keyed on the original burst.
    #[serde(alias = "Sjf")]
    Sjf,
    /// Preemptive priority; lower values are more urgent.
    #[serde(alias = "Priority")]
    Priority,
    /// Round Robin with a fixed quantum.
    #[serde(rename = "RR", alias = "RoundRobin", alias = "ROUND_ROBIN")]
    RoundRobin,
}

impl DispatchPolicyKind {
    /// Every dispatch policy, in presentation order.
    pub const ALL: [Self; 4] = [Self::Fcfs, Self::Sjf, Self::Priority, Self::RoundRobin];

    /// Short upper-case name of the policy.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "PRIORITY",
            Self::RoundRobin => "RR",
        }
    }

    /// Whether processes scheduled under this policy must carry a priority.
    pub const fn requires_priority(self) -> bool {
        matches!(self, Self::Priority)
    }

    /// Whether this policy consumes a time quantum.
    pub const fn uses_quantum(self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl fmt::Display for DispatchPolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DispatchPolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "priority" | "prio" => Ok(Self::Priority),
            "rr" | "roundrobin" | "round-robin" | "round_robin" => Ok(Self::RoundRobin),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use ossim_core::config::{DispatchPolicyKind, EvictionPolicyKind, SimConfig};
///
/// let config = SimConfig::from_json(
///     r#"{ "paging": { "frames": 4, "policy": "Lru" },
///          "scheduling": { "policy": "RR", "quantum": 3 } }"#,
/// )
/// .unwrap();
/// assert_eq!(config.paging.frames, 4);
/// assert_eq!(config.paging.policy, EvictionPolicyKind::Lru);
/// assert_eq!(config.scheduling.policy, DispatchPolicyKind::RoundRobin);
/// assert_eq!(config.scheduling.quantum, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Page-replacement settings
    #[serde(default)]
    pub paging: PagingConfig,
    /// CPU scheduling settings
    #[serde(default)]
    pub scheduling: SchedulingConfig,
}

impl SimConfig {
    /// Decodes a configuration from JSON and validates it.
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Json`] on malformed JSON or unknown policy names, and
    /// [`SimError::InvalidQuantum`] when the Round Robin quantum is zero.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidQuantum`] when Round Robin is selected with a zero quantum.
    pub fn validate(&self) -> Result<()> {
        self.scheduling.validate()
    }
}

/// Page-replacement configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Number of memory frames; zero is valid and makes every reference fault
    #[serde(default = "PagingConfig::default_frames")]
    pub frames: usize,

    /// Eviction policy
    #[serde(default)]
    pub policy: EvictionPolicyKind,
}

impl PagingConfig {
    /// Returns the default frame count.
    const fn default_frames() -> usize {
        defaults::FRAMES
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            frames: defaults::FRAMES,
            policy: EvictionPolicyKind::default(),
        }
    }
}

/// CPU scheduling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Dispatch policy
    #[serde(default)]
    pub policy: DispatchPolicyKind,

    /// Round Robin time slice in ticks (ignored by other policies)
    #[serde(default = "SchedulingConfig::default_quantum")]
    pub quantum: Tick,
}

impl SchedulingConfig {
    /// Returns the default Round Robin quantum.
    const fn default_quantum() -> Tick {
        defaults::QUANTUM
    }

    /// Checks that a Round Robin quantum can make progress.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidQuantum`] when the policy is Round Robin and
    /// the quantum is zero.
    pub fn validate(&self) -> Result<()> {
        if self.policy.uses_quantum() && self.quantum == 0 {
            return Err(SimError::InvalidQuantum(self.quantum));
        }
        Ok(())
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            policy: DispatchPolicyKind::default(),
            quantum: defaults::QUANTUM,
        }
    }
}
