//! Least Frequently Used (LFU) Replacement Policy.
//!
//! This policy evicts the resident page with the fewest references so far.
//! Among pages with equal counts, the one whose last reference is oldest is
//! evicted. Counts are kept for every page ever referenced and survive
//! eviction, so a page that returns resumes its earlier count.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(1) expected
//!   - `select_victim()`: O(F) where F is the number of frames
//! - **Space Complexity:** O(P) where P is the number of distinct pages

use std::collections::HashMap;

use super::{Access, EvictionPolicy};
use crate::common::PageRef;

/// Reference history of a single page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Usage {
    /// Number of references seen so far.
    frequency: u64,
    /// Position of the most recent reference.
    last: usize,
}

/// LFU Policy state.
#[derive(Debug, Clone, Default)]
pub struct LfuPolicy {
    usage: HashMap<PageRef, Usage>,
}

impl LfuPolicy {
    /// Creates a new LFU policy instance with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of references recorded for `page`.
    pub fn frequency(&self, page: PageRef) -> u64 {
        self.usage.get(&page).map_or(0, |u| u.frequency)
    }
}

impl EvictionPolicy for LfuPolicy {
    /// Counts the reference and records its position, hit or miss alike.
    fn update(&mut self, access: &Access) {
        let usage = self.usage.entry(access.page).or_default();
        usage.frequency += 1;
        usage.last = access.position;
    }

    /// Returns the slot with the lowest `(frequency, last reference)` pair.
    fn select_victim(
        &self,
        memory: &[Option<PageRef>],
        _position: usize,
        _references: &[PageRef],
    ) -> usize {
        memory
            .iter()
            .enumerate()
            .filter_map(|(slot, page)| {
                page.map(|p| (slot, self.usage.get(&p).copied().unwrap_or_default()))
            })
            .min_by_key(|&(slot, usage)| (usage.frequency, usage.last, slot))
            .map_or(0, |(slot, _)| slot)
    }
}
