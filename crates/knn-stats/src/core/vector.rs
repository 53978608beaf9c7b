//! Dense and sparse-binary vectors of a fixed dimensionality.

use distances::Number;
use serde::{Deserialize, Serialize};

use super::{Result, StatsError};

/// A point's coordinates, as seen by the algorithms.
///
/// The algorithms only need the dimensionality of a vector, and its value
/// along each dimension to derive the bounding box of a dataset. Distances
/// are computed by a [`Metric`](crate::Metric) that knows the concrete type.
pub trait Vector: Send + Sync {
    /// The number of dimensions of the vector.
    fn dim(&self) -> usize;

    /// The value of the vector along dimension `d`.
    ///
    /// The implementor may choose to panic if `d` is out of bounds.
    fn value(&self, d: usize) -> f64;
}

/// A vector stored as an array of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseVector<T = f64>(Vec<T>);

impl<T: Number> DenseVector<T> {
    /// Creates a new `DenseVector` from its coordinates.
    #[must_use]
    pub const fn new(values: Vec<T>) -> Self {
        Self(values)
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consumes the vector and returns its coordinates.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: Number> From<Vec<T>> for DenseVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T: Number> AsRef<[T]> for DenseVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Number> Vector for DenseVector<T> {
    fn dim(&self) -> usize {
        self.0.len()
    }

    fn value(&self, d: usize) -> f64 {
        self.0[d].as_f64()
    }
}

/// A binary vector stored as the sorted set of its set dimensions.
///
/// Set dimensions have the value 1 and all others have the value 0. This is
/// the natural encoding for data whose distance is set-based, such as the
/// Jaccard distance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryVector {
    /// The sorted, duplicate-free indices of the set dimensions.
    indices: Vec<usize>,
    /// The dimensionality of the vector.
    dim: usize,
}

impl BinaryVector {
    /// Creates a new `BinaryVector` from the indices of its set dimensions.
    ///
    /// The indices may be given in any order and may contain duplicates.
    ///
    /// # Errors
    ///
    /// * If any index is not smaller than `dim`.
    pub fn new(mut indices: Vec<usize>, dim: usize) -> Result<Self> {
        indices.sort_unstable();
        indices.dedup();
        if let Some(&last) = indices.last() {
            if last >= dim {
                return Err(StatsError::InvalidParameter(format!(
                    "set dimension {last} is out of bounds for a binary vector of dimension {dim}"
                )));
            }
        }
        Ok(Self { indices, dim })
    }

    /// Creates a new `BinaryVector` from one flag per dimension.
    #[must_use]
    pub fn from_bits(bits: &[bool]) -> Self {
        let indices = bits
            .iter()
            .enumerate()
            .filter_map(|(d, &b)| b.then_some(d))
            .collect();
        Self {
            indices,
            dim: bits.len(),
        }
    }

    /// Returns the sorted indices of the set dimensions.
    #[must_use]
    pub fn set_dims(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of set dimensions.
    #[must_use]
    pub fn count_set(&self) -> usize {
        self.indices.len()
    }

    /// Whether dimension `d` is set.
    #[must_use]
    pub fn is_set(&self, d: usize) -> bool {
        self.indices.binary_search(&d).is_ok()
    }
}

impl Vector for BinaryVector {
    fn dim(&self) -> usize {
        self.dim
    }

    fn value(&self, d: usize) -> f64 {
        if self.is_set(d) {
            1.0
        } else {
            0.0
        }
    }
}
