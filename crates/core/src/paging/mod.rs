//! Reference Trace Engine.
//!
//! This module drives a reference string through a fixed set of memory frames.
//! For every reference it:
//! 1. **Looks up** the page; a resident page is a hit.
//! 2. **Loads** a missing page into the first empty frame, or over the victim
//!    chosen by the active [`EvictionPolicy`](policies::EvictionPolicy).
//! 3. **Records** a [`TraceStep`] snapshot of every frame and the running fault count.
//!
//! Runs are O(n·F) for FIFO, LRU and LFU and O(n²) worst case for Optimal,
//! which is fine for interactive reference strings of a few hundred pages.

/// Page replacement policy implementations (FIFO, LRU, LFU, Optimal).
pub mod policies;

use serde::Serialize;
use tracing::{debug, trace};

use self::policies::{Access, EvictionPolicy, Evictor, Outcome, slot_of};
use crate::common::PageRef;
use crate::config::{EvictionPolicyKind, PagingConfig};
use crate::stats::{self, FaultRatePoint, FaultStats};

/// Frame contents, one entry per frame; `None` marks an empty frame.
pub type MemoryState = Vec<Option<PageRef>>;

/// Snapshot taken after one reference has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// The referenced page.
    pub page: PageRef,
    /// Whether this reference faulted.
    pub fault: bool,
    /// Faults so far, including this reference.
    pub cumulative_faults: usize,
    /// Frame contents after the reference.
    pub memory: MemoryState,
}

/// Output of a page replacement run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceResult {
    /// Policy that produced the trace.
    pub policy: EvictionPolicyKind,
    /// Number of frames simulated.
    pub frames: usize,
    /// One step per reference, in order.
    pub steps: Vec<TraceStep>,
    /// Total page faults.
    pub total_faults: usize,
    /// Fault rate after each step.
    pub fault_rate_timeline: Vec<FaultRatePoint>,
}

impl TraceResult {
    /// Number of references simulated.
    pub const fn total_references(&self) -> usize {
        self.steps.len()
    }

    /// Number of references satisfied from memory.
    pub const fn hits(&self) -> usize {
        self.steps.len() - self.total_faults
    }

    /// Frame contents after the last reference; empty when there were no references.
    pub fn final_memory(&self) -> &[Option<PageRef>] {
        self.steps
            .last()
            .map(|step| step.memory.as_slice())
            .unwrap_or_default()
    }

    /// Hit and miss rates for this trace.
    pub fn fault_stats(&self) -> FaultStats {
        stats::fault_stats(self.total_references(), self.total_faults)
    }
}

/// Page replacement simulator for a fixed frame count and policy.
///
/// The engine holds only its parameters; every [`run`](Self::run) starts from
/// empty frames and fresh policy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTraceEngine {
    frames: usize,
    policy: EvictionPolicyKind,
}

impl ReferenceTraceEngine {
    /// Creates an engine with `frames` memory frames and the given policy.
    pub const fn new(frames: usize, policy: EvictionPolicyKind) -> Self {
        Self { frames, policy }
    }

    /// Creates an engine from the paging section of a configuration.
    pub const fn from_config(config: &PagingConfig) -> Self {
        Self::new(config.frames, config.policy)
    }

    /// Number of frames simulated.
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Active eviction policy.
    pub const fn policy(&self) -> EvictionPolicyKind {
        self.policy
    }

    /// Runs `references` through empty frames and returns the full trace.
    ///
    /// With zero frames every reference faults and memory stays empty. An
    /// empty reference string yields an empty trace with zero faults.
    pub fn run(&self, references: &[PageRef]) -> TraceResult {
        debug!(
            policy = %self.policy,
            frames = self.frames,
            references = references.len(),
            "starting page trace"
        );

        let mut memory: MemoryState = vec![None; self.frames];
        let mut evictor = Evictor::new(self.policy);
        let mut faults = 0;
        let mut steps = Vec::with_capacity(references.len());

        for (position, &page) in references.iter().enumerate() {
            let fault = if let Some(slot) = slot_of(&memory, page) {
                evictor.update(&Access {
                    page,
                    slot,
                    position,
                    outcome: Outcome::Hit,
                });
                false
            } else {
                if !memory.is_empty() {
                    let access = Self::load(&mut memory, &evictor, page, position, references);
                    evictor.update(&access);
                }
                true
            };

            if fault {
                faults += 1;
            }
            steps.push(TraceStep {
                page,
                fault,
                cumulative_faults: faults,
                memory: memory.clone(),
            });
        }

        debug!(policy = %self.policy, faults, "page trace complete");

        let fault_rate_timeline = stats::fault_rate_timeline(&steps);
        TraceResult {
            policy: self.policy,
            frames: self.frames,
            steps,
            total_faults: faults,
            fault_rate_timeline,
        }
    }

    /// Places a faulting page into memory, evicting if no frame is free.
    ///
    /// `memory` must have at least one frame.
    fn load(
        memory: &mut MemoryState,
        evictor: &Evictor,
        page: PageRef,
        position: usize,
        references: &[PageRef],
    ) -> Access {
        if let Some(slot) = memory.iter().position(Option::is_none) {
            memory[slot] = Some(page);
            trace!(page, slot, position, "fault: filled free frame");
            return Access {
                page,
                slot,
                position,
                outcome: Outcome::Fill,
            };
        }

        let slot = evictor.select_victim(memory, position, references);
        let outcome = match memory[slot].replace(page) {
            Some(evicted) => {
                trace!(page, evicted, slot, position, "fault: replaced page");
                Outcome::Replace { evicted }
            }
            None => Outcome::Fill,
        };
        Access {
            page,
            slot,
            position,
            outcome,
        }
    }
}

/// Runs a single trace; shorthand for [`ReferenceTraceEngine::run`].
pub fn run(frames: usize, references: &[PageRef], policy: EvictionPolicyKind) -> TraceResult {
    ReferenceTraceEngine::new(frames, policy).run(references)
}

/// Runs the same reference string under every eviction policy.
///
/// Results are returned in [`EvictionPolicyKind::ALL`] order.
pub fn compare(frames: usize, references: &[PageRef]) -> Vec<TraceResult> {
    EvictionPolicyKind::ALL
        .iter()
        .map(|&policy| run(frames, references, policy))
        .collect()
}
