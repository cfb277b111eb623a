//! Optimal (Belady's MIN) Replacement Policy.
//!
//! This policy evicts the page whose next reference lies furthest in the
//! future. It needs the whole reference string up front, so it serves as the
//! lower bound on faults against which the online policies are compared.
//! A page that is never referenced again is at infinite distance.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(1) (stateless)
//!   - `select_victim()`: O(F × n) suffix scan per fault
//! - **Space Complexity:** O(1)

use super::{Access, EvictionPolicy};
use crate::common::PageRef;

/// Optimal Policy. Carries no state; decisions depend only on the future.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalPolicy;

/// Distance from `position` to the next reference of `page`, `None` if never.
fn next_use(page: PageRef, position: usize, references: &[PageRef]) -> Option<usize> {
    references
        .get(position + 1..)
        .and_then(|suffix| suffix.iter().position(|&r| r == page))
}

impl EvictionPolicy for OptimalPolicy {
    fn update(&mut self, _access: &Access) {}

    /// Returns the slot whose page is needed furthest in the future.
    ///
    /// Pages never referenced again rank above every finite distance. Ties
    /// go to the lowest slot index.
    fn select_victim(
        &self,
        memory: &[Option<PageRef>],
        position: usize,
        references: &[PageRef],
    ) -> usize {
        let mut victim = 0;
        let mut furthest: Option<Option<usize>> = None;
        for (slot, page) in memory.iter().enumerate() {
            let Some(page) = *page else { continue };
            let distance = next_use(page, position, references);
            let further = match (furthest, distance) {
                (None, _) => true,
                (Some(None), _) => false,
                (Some(Some(_)), None) => true,
                (Some(Some(best)), Some(d)) => d > best,
            };
            if further {
                victim = slot;
                furthest = Some(distance);
            }
        }
        victim
    }
}
