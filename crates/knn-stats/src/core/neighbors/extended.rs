//! Neighbor sets extended by a number of hops.

use std::collections::HashSet;

use super::NeighborSets;
use crate::core::{Result, StatsError};

/// Extends the neighbor sets of another service to every point reachable in
/// at most `steps` hops.
///
/// The point itself is always a member. With `steps == 1` this is the inner
/// neighbor set plus the point.
#[derive(Debug, Clone)]
pub struct ExtendedNeighborhood<N: NeighborSets> {
    /// The one-hop neighbor sets.
    inner: N,
    /// The maximum number of hops.
    steps: usize,
}

impl<N: NeighborSets> ExtendedNeighborhood<N> {
    /// Creates a new `ExtendedNeighborhood`.
    ///
    /// # Errors
    ///
    /// * If `steps` is zero.
    pub fn new(inner: N, steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(StatsError::InvalidParameter(
                "an extended neighborhood needs at least one step".to_string(),
            ));
        }
        Ok(Self { inner, steps })
    }

    /// Returns the maximum number of hops.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }
}

impl<N: NeighborSets> NeighborSets for ExtendedNeighborhood<N> {
    type Id = N::Id;

    fn neighbors_of(&self, id: N::Id) -> Result<Vec<N::Id>> {
        let mut visited = HashSet::from([id]);
        let mut members = vec![id];
        let mut frontier = vec![id];

        for _ in 0..self.steps {
            let mut next = Vec::new();
            for &f in &frontier {
                for n in self.inner.neighbors_of(f)? {
                    if visited.insert(n) {
                        members.push(n);
                        next.push(n);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        Ok(members)
    }
}
