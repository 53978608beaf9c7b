//! Neighbor sets given as explicit adjacency lists.

use std::collections::HashMap;

use super::NeighborSets;
use crate::core::{PointId, Result};

/// Neighbor sets given explicitly, e.g. read from a topology file.
///
/// Points without an entry have an empty neighbor set.
#[derive(Debug, Clone)]
pub struct AdjacencyList<Id: PointId> {
    /// The neighbors of each point, in the order they were added.
    lists: HashMap<Id, Vec<Id>>,
}

impl<Id: PointId> Default for AdjacencyList<Id> {
    fn default() -> Self {
        Self { lists: HashMap::new() }
    }
}

impl<Id: PointId> AdjacencyList<Id> {
    /// Creates a new `AdjacencyList` from the neighbor list of each point.
    ///
    /// Duplicate members of a list are kept only once, at their first
    /// position. Lists are used as given; they are not made symmetric.
    pub fn from_lists<I: IntoIterator<Item = (Id, Vec<Id>)>>(lists: I) -> Self {
        let mut adjacency = Self::default();
        for (id, neighbors) in lists {
            for n in neighbors {
                adjacency.add(id, n);
            }
            adjacency.lists.entry(id).or_default();
        }
        adjacency
    }

    /// Creates a new `AdjacencyList` from a list of edges.
    ///
    /// If `symmetric` is true, every edge `(a, b)` also adds `a` to the
    /// neighbors of `b`.
    pub fn from_edges<I: IntoIterator<Item = (Id, Id)>>(edges: I, symmetric: bool) -> Self {
        let mut adjacency = Self::default();
        for (a, b) in edges {
            adjacency.add(a, b);
            if symmetric {
                adjacency.add(b, a);
            }
        }
        adjacency
    }

    /// Adds `neighbor` to the neighbors of `id`, unless it is already there.
    pub fn add(&mut self, id: Id, neighbor: Id) {
        let list = self.lists.entry(id).or_default();
        if !list.contains(&neighbor) {
            list.push(neighbor);
        }
    }

    /// Returns the number of points with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether no point has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl<Id: PointId> NeighborSets for AdjacencyList<Id> {
    type Id = Id;

    fn neighbors_of(&self, id: Id) -> Result<Vec<Id>> {
        Ok(self.lists.get(&id).cloned().unwrap_or_default())
    }
}
