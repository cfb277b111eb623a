//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the page that has not been referenced for the longest
//! time. It keeps a recency list of resident pages: every reference moves the
//! page to the back, so the front is always the least recently used page.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(F) where F is the number of frames
//!   - `select_victim()`: O(F) to map the page back to its slot
//! - **Space Complexity:** O(F)
//! - **Worst Case:** Cyclic reference strings longer than the frame count (thrashing)

use std::collections::VecDeque;

use super::{Access, EvictionPolicy, Outcome, slot_of};
use crate::common::PageRef;

/// LRU Policy state.
#[derive(Debug, Clone, Default)]
pub struct LruPolicy {
    /// Resident pages ordered by last reference; front is LRU, back is MRU.
    recency: VecDeque<PageRef>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance with an empty recency list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `page` to the most recently used position.
    fn touch(&mut self, page: PageRef) {
        self.recency.retain(|&p| p != page);
        self.recency.push_back(page);
    }
}

impl EvictionPolicy for LruPolicy {
    /// Promotes the referenced page to MRU, dropping an evicted page first.
    fn update(&mut self, access: &Access) {
        if let Outcome::Replace { evicted } = access.outcome {
            self.recency.retain(|&p| p != evicted);
        }
        self.touch(access.page);
    }

    /// Returns the slot holding the page at the front of the recency list.
    fn select_victim(
        &self,
        memory: &[Option<PageRef>],
        _position: usize,
        _references: &[PageRef],
    ) -> usize {
        self.recency
            .front()
            .and_then(|&page| slot_of(memory, page))
            .unwrap_or(0)
    }
}
