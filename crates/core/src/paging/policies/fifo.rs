//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the frame that was loaded the longest time ago,
//! regardless of how recently or how often its page was referenced.
//! Hits leave the order untouched; a refilled frame goes to the back.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(F) on replacement, O(1) otherwise
//!   - `select_victim()`: O(1)
//! - **Space Complexity:** O(F) where F is the number of frames
//! - **Anomaly:** Subject to Belady's anomaly (more frames can mean more faults)

use std::collections::VecDeque;

use super::{Access, EvictionPolicy, Outcome};
use crate::common::PageRef;

/// FIFO Policy state.
#[derive(Debug, Clone, Default)]
pub struct FifoPolicy {
    /// Occupied slot indices in load order; the front is the oldest.
    order: VecDeque<usize>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance with no loaded frames.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EvictionPolicy for FifoPolicy {
    /// Appends newly loaded frames to the back of the queue.
    ///
    /// On replacement the refilled slot is moved from its old position to
    /// the back, so load order is preserved through reuse.
    fn update(&mut self, access: &Access) {
        match access.outcome {
            Outcome::Hit => {}
            Outcome::Fill => self.order.push_back(access.slot),
            Outcome::Replace { .. } => {
                self.order.retain(|&slot| slot != access.slot);
                self.order.push_back(access.slot);
            }
        }
    }

    /// Returns the slot at the front of the load-order queue.
    fn select_victim(
        &self,
        _memory: &[Option<PageRef>],
        _position: usize,
        _references: &[PageRef],
    ) -> usize {
        self.order.front().copied().unwrap_or(0)
    }
}
