//! Page Replacement Policies.
//!
//! Implements the algorithms for selecting a victim frame when a page fault
//! occurs and every frame is occupied.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Lfu`: Least Frequently Used.
//! - `Optimal`: Belady's clairvoyant replacement.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Frequently Used replacement policy.
pub mod lfu;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (furthest next use) replacement policy.
pub mod optimal;

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

use crate::common::PageRef;
use crate::config::EvictionPolicyKind;

/// How a reference was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page was already resident.
    Hit,
    /// The page was loaded into an empty frame.
    Fill,
    /// The page was loaded over `evicted`.
    Replace {
        /// The page that previously occupied the frame.
        evicted: PageRef,
    },
}

/// A single reference as seen by a policy after the engine has applied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// The referenced page.
    pub page: PageRef,
    /// Frame slot now holding `page`.
    pub slot: usize,
    /// Zero-based index of the reference in the reference string.
    pub position: usize,
    /// Whether the reference hit, filled a free frame, or replaced a page.
    pub outcome: Outcome,
}

/// Trait for page replacement policies.
///
/// Defines the interface for updating bookkeeping and selecting victim frames.
pub trait EvictionPolicy {
    /// Updates the policy state after the engine has applied a reference.
    ///
    /// Called for every reference, hit or miss, once memory reflects it.
    fn update(&mut self, access: &Access);

    /// Selects the frame slot to overwrite.
    ///
    /// Only called when every slot is occupied and the page at `position`
    /// is absent from `memory`.
    ///
    /// # Arguments
    ///
    /// * `memory` - Current frame contents, all occupied.
    /// * `position` - Index of the faulting reference.
    /// * `references` - The full reference string.
    fn select_victim(
        &self,
        memory: &[Option<PageRef>],
        position: usize,
        references: &[PageRef],
    ) -> usize;
}

/// Policy state for one run, one variant per [`EvictionPolicyKind`].
#[derive(Debug, Clone)]
pub enum Evictor {
    /// FIFO bookkeeping.
    Fifo(FifoPolicy),
    /// LRU bookkeeping.
    Lru(LruPolicy),
    /// LFU bookkeeping.
    Lfu(LfuPolicy),
    /// Optimal needs no bookkeeping.
    Optimal(OptimalPolicy),
}

impl Evictor {
    /// Creates fresh policy state for the given policy.
    pub fn new(kind: EvictionPolicyKind) -> Self {
        match kind {
            EvictionPolicyKind::Fifo => Self::Fifo(FifoPolicy::new()),
            EvictionPolicyKind::Lru => Self::Lru(LruPolicy::new()),
            EvictionPolicyKind::Lfu => Self::Lfu(LfuPolicy::new()),
            EvictionPolicyKind::Optimal => Self::Optimal(OptimalPolicy),
        }
    }

    /// The policy this state belongs to.
    pub const fn kind(&self) -> EvictionPolicyKind {
        match self {
            Self::Fifo(_) => EvictionPolicyKind::Fifo,
            Self::Lru(_) => EvictionPolicyKind::Lru,
            Self::Lfu(_) => EvictionPolicyKind::Lfu,
            Self::Optimal(_) => EvictionPolicyKind::Optimal,
        }
    }
}

impl EvictionPolicy for Evictor {
    fn update(&mut self, access: &Access) {
        match self {
            Self::Fifo(p) => p.update(access),
            Self::Lru(p) => p.update(access),
            Self::Lfu(p) => p.update(access),
            Self::Optimal(p) => p.update(access),
        }
    }

    fn select_victim(
        &self,
        memory: &[Option<PageRef>],
        position: usize,
        references: &[PageRef],
    ) -> usize {
        match self {
            Self::Fifo(p) => p.select_victim(memory, position, references),
            Self::Lru(p) => p.select_victim(memory, position, references),
            Self::Lfu(p) => p.select_victim(memory, position, references),
            Self::Optimal(p) => p.select_victim(memory, position, references),
        }
    }
}

/// Returns the slot holding `page`, if resident.
pub(crate) fn slot_of(memory: &[Option<PageRef>], page: PageRef) -> Option<usize> {
    memory.iter().position(|slot| *slot == Some(page))
}
