//! Read-only access to the points of a dataset.

mod flat_vec;

pub use flat_vec::FlatVec;

use core::{fmt::Debug, hash::Hash};

use super::{Result, Vector};

/// The identifier of a point.
///
/// Identifiers are opaque to the algorithms. They must be unique within a
/// dataset and stable for its lifetime. The total order is used to make
/// sampling and tie-breaking independent of the enumeration order of a
/// dataset.
pub trait PointId: Copy + Eq + Ord + Hash + Debug + Send + Sync {}

impl<T: Copy + Eq + Ord + Hash + Debug + Send + Sync> PointId for T {}

/// A trait for the datasets the algorithms read from.
///
/// A dataset is a non-empty, finite collection of points, each with an
/// identifier and a vector of the same dimensionality. The algorithms never
/// mutate a dataset.
pub trait Dataset<V: Vector> {
    /// The type of the identifiers of the points.
    type Id: PointId;

    /// Returns the identifiers of all points.
    ///
    /// The order must be stable across calls.
    fn ids(&self) -> Vec<Self::Id>;

    /// Returns the vector of the point with the given identifier.
    ///
    /// # Errors
    ///
    /// * If the identifier is not in the dataset.
    fn get(&self, id: Self::Id) -> Result<&V>;

    /// Returns the number of points in the dataset.
    fn cardinality(&self) -> usize;

    /// Returns the dimensionality shared by all vectors in the dataset.
    fn dimensionality(&self) -> usize;

    /// Returns the per-dimension minima and maxima of the dataset.
    ///
    /// # Errors
    ///
    /// * If the `get` method fails for an identifier returned by `ids`.
    fn extrema(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        let dim = self.dimensionality();
        let mut minima = vec![f64::INFINITY; dim];
        let mut maxima = vec![f64::NEG_INFINITY; dim];
        for id in self.ids() {
            let v = self.get(id)?;
            for d in 0..dim {
                let x = v.value(d);
                if x < minima[d] {
                    minima[d] = x;
                }
                if x > maxima[d] {
                    maxima[d] = x;
                }
            }
        }
        Ok((minima, maxima))
    }
}
