//! The `Metric` trait is used for all distance computations.

use distances::Number;

use super::{BinaryVector, DenseVector, Result, StatsError};

/// The `Metric` trait is used for all distance computations.
///
/// A metric here is any total, symmetric and non-negative function over two
/// vectors of the same dimensionality. We do not require the triangle
/// inequality. Callers are responsible for checking that the two vectors have
/// the same dimensionality before calling `distance`.
///
/// # Example
///
/// ```rust
/// use knn_stats::{DenseVector, Metric};
///
/// struct Hamming;
///
/// impl Metric<DenseVector<u8>> for Hamming {
///     fn distance(&self, a: &DenseVector<u8>, b: &DenseVector<u8>) -> f64 {
///         let count = a.as_slice().iter().zip(b.as_slice()).filter(|(x, y)| x != y).count();
///         count as f64
///     }
///
///     fn name(&self) -> &str {
///         "hamming"
///     }
/// }
///
/// let a = DenseVector::new(b"hello".to_vec());
/// let b = DenseVector::new(b"world".to_vec());
///
/// assert_eq!(Hamming.distance(&a, &b), 4.0);
/// ```
pub trait Metric<V> {
    /// Call the metric on two vectors.
    fn distance(&self, a: &V, b: &V) -> f64;

    /// The name of the metric.
    fn name(&self) -> &str;
}

impl<V> Metric<V> for Box<dyn Metric<V> + Send + Sync> {
    fn distance(&self, a: &V, b: &V) -> f64 {
        (**self).distance(a, b)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V, M: Metric<V>> Metric<V> for &M {
    fn distance(&self, a: &V, b: &V) -> f64 {
        (**self).distance(a, b)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// The Euclidean (L2) distance between dense vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl<T: Number> Metric<DenseVector<T>> for Euclidean {
    fn distance(&self, a: &DenseVector<T>, b: &DenseVector<T>) -> f64 {
        distances::vectors::euclidean(a.as_slice(), b.as_slice())
    }

    fn name(&self) -> &str {
        "euclidean"
    }
}

/// The squared Euclidean distance between dense vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclidean;

impl<T: Number> Metric<DenseVector<T>> for SquaredEuclidean {
    fn distance(&self, a: &DenseVector<T>, b: &DenseVector<T>) -> f64 {
        distances::vectors::euclidean_sq(a.as_slice(), b.as_slice())
    }

    fn name(&self) -> &str {
        "squared-euclidean"
    }
}

/// The Manhattan (L1) distance between dense vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl<T: Number> Metric<DenseVector<T>> for Manhattan {
    fn distance(&self, a: &DenseVector<T>, b: &DenseVector<T>) -> f64 {
        distances::vectors::manhattan(a.as_slice(), b.as_slice())
    }

    fn name(&self) -> &str {
        "manhattan"
    }
}

/// The Chebyshev (L-infinity) distance between dense vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chebyshev;

impl<T: Number> Metric<DenseVector<T>> for Chebyshev {
    fn distance(&self, a: &DenseVector<T>, b: &DenseVector<T>) -> f64 {
        distances::vectors::chebyshev(a.as_slice(), b.as_slice())
    }

    fn name(&self) -> &str {
        "chebyshev"
    }
}

/// The Minkowski (Lp) distance between dense vectors for an integer `p >= 1`.
#[derive(Debug, Clone, Copy)]
pub struct Minkowski {
    /// The order of the norm.
    p: i32,
}

impl Minkowski {
    /// Creates the Minkowski distance of order `p`.
    ///
    /// # Errors
    ///
    /// * If `p` is less than 1, for which the result is not a distance.
    pub fn new(p: i32) -> Result<Self> {
        if p < 1 {
            Err(StatsError::InvalidParameter(format!(
                "the order of a Minkowski distance must be at least 1, not {p}"
            )))
        } else {
            Ok(Self { p })
        }
    }

    /// Returns the order of the norm.
    #[must_use]
    pub const fn p(&self) -> i32 {
        self.p
    }
}

impl<T: Number> Metric<DenseVector<T>> for Minkowski {
    fn distance(&self, a: &DenseVector<T>, b: &DenseVector<T>) -> f64 {
        distances::vectors::minkowski(a.as_slice(), b.as_slice(), self.p)
    }

    fn name(&self) -> &str {
        "minkowski"
    }
}

/// The Jaccard distance between binary vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jaccard;

impl Metric<BinaryVector> for Jaccard {
    fn distance(&self, a: &BinaryVector, b: &BinaryVector) -> f64 {
        distances::sets::jaccard(a.set_dims(), b.set_dims())
    }

    fn name(&self) -> &str {
        "jaccard"
    }
}

/// The Hamming distance between binary vectors, i.e. the number of
/// dimensions in which they differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming;

impl Metric<BinaryVector> for Hamming {
    fn distance(&self, a: &BinaryVector, b: &BinaryVector) -> f64 {
        distances::sets::hamming(a.set_dims(), b.set_dims())
    }

    fn name(&self) -> &str {
        "hamming"
    }
}
