//! The spatial neighbor-set contract and reference implementations.

mod adjacency;
mod extended;
mod k_nearest;

pub use adjacency::AdjacencyList;
pub use extended::ExtendedNeighborhood;
pub use k_nearest::KNearestNeighborhood;

use super::{PointId, Result};

/// A service that returns the precomputed spatial neighbors of a point.
///
/// The neighbor relation is defined externally (grid cells, polygon
/// topology, k-nearest neighbors in the spatial attributes, ...). A neighbor
/// set may or may not contain the point itself, and may be empty. Callers
/// must filter self-references explicitly where it matters.
///
/// Implementations must be deterministic: repeated calls for the same
/// identifier within one run must return the same members in the same order.
pub trait NeighborSets {
    /// The type of the identifiers of the points.
    type Id: PointId;

    /// Returns the spatial neighbors of the point `id`.
    ///
    /// # Errors
    ///
    /// Implementation-defined, e.g. when `id` is unknown to a service that
    /// was precomputed over a fixed set of points.
    fn neighbors_of(&self, id: Self::Id) -> Result<Vec<Self::Id>>;
}

impl<N: NeighborSets> NeighborSets for &N {
    type Id = N::Id;

    fn neighbors_of(&self, id: Self::Id) -> Result<Vec<Self::Id>> {
        (**self).neighbors_of(id)
    }
}
