//! Generators of the synthetic probe points of the Hopkins statistic.

use core::marker::PhantomData;

use distances::Number;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{BinaryVector, Dataset, DenseVector, Result, StatsError, Vector};

/// An axis-aligned box from which uniform probes are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// The lower bound of each dimension.
    minima: Vec<f64>,
    /// The upper bound of each dimension.
    maxima: Vec<f64>,
}

impl BoundingBox {
    /// Creates a new `BoundingBox`.
    ///
    /// # Errors
    ///
    /// * If `minima` and `maxima` have different lengths.
    /// * If any bound is not finite.
    /// * If any lower bound exceeds its upper bound.
    pub fn new(minima: Vec<f64>, maxima: Vec<f64>) -> Result<Self> {
        if minima.len() != maxima.len() {
            return Err(StatsError::IncompatibleDimension {
                expected: minima.len(),
                found: maxima.len(),
            });
        }
        for (d, (&lo, &hi)) in minima.iter().zip(&maxima).enumerate() {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(StatsError::InvalidParameter(format!(
                    "bounds of dimension {d} are not finite: [{lo}, {hi}]"
                )));
            }
            if lo > hi {
                return Err(StatsError::InvalidParameter(format!(
                    "lower bound {lo} exceeds upper bound {hi} in dimension {d}"
                )));
            }
        }
        Ok(Self { minima, maxima })
    }

    /// Creates the smallest `BoundingBox` containing every point of `data`.
    ///
    /// # Errors
    ///
    /// See [`Dataset::extrema`] and [`BoundingBox::new`].
    pub fn from_dataset<V: Vector, D: Dataset<V>>(data: &D) -> Result<Self> {
        let (minima, maxima) = data.extrema()?;
        Self::new(minima, maxima)
    }

    /// Returns the number of dimensions of the box.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.minima.len()
    }

    /// Returns the lower bounds.
    #[must_use]
    pub fn minima(&self) -> &[f64] {
        &self.minima
    }

    /// Returns the upper bounds.
    #[must_use]
    pub fn maxima(&self) -> &[f64] {
        &self.maxima
    }

    /// Returns the width of the box along dimension `d`.
    #[must_use]
    pub fn extent(&self, d: usize) -> f64 {
        self.maxima[d] - self.minima[d]
    }
}

/// A strategy for drawing the synthetic probe points of one Hopkins sample.
pub trait ProbeGenerator<V: Vector> {
    /// Draws one probe from the random stream.
    fn probe<R: Rng>(&self, bounds: &BoundingBox, rng: &mut R) -> V;

    /// The name of the strategy, used in logs.
    fn name(&self) -> &str;
}

/// Draws probes uniformly from the bounding box.
#[derive(Debug, Clone, Copy)]
pub struct UniformProbes<T = f64> {
    /// Marker for the type of the coordinates.
    _t: PhantomData<T>,
}

impl<T: Number> Default for UniformProbes<T> {
    fn default() -> Self {
        Self { _t: PhantomData }
    }
}

impl<T: Number> UniformProbes<T> {
    /// Creates a new `UniformProbes`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Number> ProbeGenerator<DenseVector<T>> for UniformProbes<T> {
    fn probe<R: Rng>(&self, bounds: &BoundingBox, rng: &mut R) -> DenseVector<T> {
        let values = bounds
            .minima()
            .iter()
            .enumerate()
            .map(|(d, &lo)| T::from(rng.gen::<f64>().mul_add(bounds.extent(d), lo)))
            .collect();
        DenseVector::new(values)
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

/// Draws binary probes by setting every dimension with a fair coin flip.
///
/// The bounding box only contributes its dimensionality. This models data
/// whose distance is set-based, where a uniformly random point is a uniformly
/// random subset of the dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryProbes;

impl ProbeGenerator<BinaryVector> for BinaryProbes {
    fn probe<R: Rng>(&self, bounds: &BoundingBox, rng: &mut R) -> BinaryVector {
        let bits = (0..bounds.dim()).map(|_| rng.gen::<bool>()).collect::<Vec<_>>();
        BinaryVector::from_bits(&bits)
    }

    fn name(&self) -> &str {
        "binary"
    }
}
