//! Search counters

use std::fmt;

use serde::{Deserialize, Serialize};

/// Counters an engine accumulates while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of scoring calls, recursive ones included
    pub nodes: u64,
    /// Memo table hits (memoized engine)
    pub cache_hits: u64,
    /// Times the pruning bound skipped remaining sibling moves (pruned engine)
    pub cutoffs: u64,
    /// Heuristic estimates used in place of search (myopic engine)
    pub heuristic_evaluations: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} cache_hits={} cutoffs={} heuristic={}",
            self.nodes, self.cache_hits, self.cutoffs, self.heuristic_evaluations
        )
    }
}
