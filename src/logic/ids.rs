//! Match id allocation shared by every builder in one generation.

use crate::models::MatchId;

/// Hands out strictly increasing match ids.
///
/// One allocator is created per `generate_rounds` call and passed by `&mut` into each
/// builder, so winners, losers and finals matches never collide and no state outlives
/// the call.
#[derive(Debug)]
pub struct MatchIdAllocator {
    next: MatchId,
}

impl MatchIdAllocator {
    /// Allocator whose first id is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: MatchId) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> MatchId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for MatchIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
