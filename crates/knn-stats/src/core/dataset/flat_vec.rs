//! A `FlatVec` is an in-memory dataset stored as a flat vector.

use std::collections::HashMap;

use super::{Dataset, PointId};
use crate::core::{check_dim, Result, StatsError, Vector};

/// A `FlatVec` is an in-memory dataset stored as a flat vector.
///
/// # Type Parameters
///
/// - `V`: The type of the vectors in the dataset.
/// - `Id`: The type of the identifiers of the points.
#[derive(Debug, Clone)]
pub struct FlatVec<V, Id = usize> {
    /// The identifiers, in enumeration order.
    ids: Vec<Id>,
    /// The vectors, in the same order as the identifiers.
    vectors: Vec<V>,
    /// Maps identifiers to positions in `vectors`.
    index: HashMap<Id, usize>,
    /// The dimensionality shared by all vectors.
    dim: usize,
    /// The name of the dataset.
    name: String,
}

impl<V: Vector> FlatVec<V, usize> {
    /// Creates a new `FlatVec` whose identifiers are the positions of the
    /// vectors.
    ///
    /// # Errors
    ///
    /// * If `vectors` is empty.
    /// * If the vectors do not all have the same dimensionality.
    pub fn new(vectors: Vec<V>) -> Result<Self> {
        let ids = (0..vectors.len()).collect();
        Self::with_ids(ids, vectors)
    }
}

impl<V: Vector, Id: PointId> FlatVec<V, Id> {
    /// Creates a new `FlatVec` with the given identifiers.
    ///
    /// # Errors
    ///
    /// * If `vectors` is empty.
    /// * If there is not exactly one identifier per vector.
    /// * If an identifier appears more than once.
    /// * If the vectors do not all have the same dimensionality.
    pub fn with_ids(ids: Vec<Id>, vectors: Vec<V>) -> Result<Self> {
        if vectors.is_empty() {
            return Err(StatsError::InvalidParameter("the dataset is empty".to_string()));
        }
        if ids.len() != vectors.len() {
            return Err(StatsError::InvalidParameter(format!(
                "got {} identifiers for {} vectors",
                ids.len(),
                vectors.len()
            )));
        }

        let dim = vectors[0].dim();
        for v in &vectors {
            check_dim(dim, v.dim())?;
        }

        let mut index = HashMap::with_capacity(ids.len());
        for (i, &id) in ids.iter().enumerate() {
            if index.insert(id, i).is_some() {
                return Err(StatsError::InvalidParameter(format!("duplicate identifier {id:?}")));
            }
        }

        Ok(Self {
            ids,
            vectors,
            index,
            dim,
            name: "Unknown FlatVec".to_string(),
        })
    }

    /// Sets the name of the dataset.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        name.clone_into(&mut self.name);
        self
    }

    /// Returns the name of the dataset.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the vectors in enumeration order.
    #[must_use]
    pub fn vectors(&self) -> &[V] {
        &self.vectors
    }

    /// Iterates over the points in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &V)> {
        self.ids.iter().copied().zip(self.vectors.iter())
    }
}

impl<V: Vector, Id: PointId> Dataset<V> for FlatVec<V, Id> {
    type Id = Id;

    fn ids(&self) -> Vec<Id> {
        self.ids.clone()
    }

    fn get(&self, id: Id) -> Result<&V> {
        self.index
            .get(&id)
            .map(|&i| &self.vectors[i])
            .ok_or_else(|| StatsError::UnknownPoint(format!("{id:?} is not in {}", self.name)))
    }

    fn cardinality(&self) -> usize {
        self.vectors.len()
    }

    fn dimensionality(&self) -> usize {
        self.dim
    }
}
