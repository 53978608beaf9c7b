//! The Hopkins statistic of clustering tendency.
//!
//! The statistic compares the k-distances of points sampled from a dataset
//! with the k-distances of synthetic probes drawn uniformly from the space the
//! dataset occupies. With `w_i` the k-distances of the real samples, `u_i`
//! those of the probes and `dim` the dimensionality of the data,
//!
//! ```text
//! U = Σ u_i^dim,  W = Σ w_i^dim,  H = U / (U + W).
//! ```
//!
//! Values near 0.5 indicate spatial randomness, values approaching 1 a
//! clustering tendency, and values approaching 0 a regular spacing of the
//! points.
//!
//! # References
//!
//! * B. Hopkins and J. G. Skellam, "A new method for determining the type of
//!   distribution of plant individuals", Annals of Botany, 1954.

mod probes;
mod result;

pub use probes::{BinaryProbes, BoundingBox, ProbeGenerator, UniformProbes};
pub use result::HopkinsResult;

use rand::{rngs::StdRng, seq::index};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{check_dim, finite, Dataset, KnnQuery, RandomFactory, Result, StatsError, Vector};

/// Returns one, the default for `k` and `repetitions`.
const fn default_one() -> usize {
    1
}

/// The parameters of the Hopkins statistic.
///
/// A bound given as a single value is applied to every dimension. A missing
/// bound is taken from the extrema of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopkinsParams {
    /// The number of real samples and of probes per repetition.
    pub sample_size: usize,
    /// The number of independent repetitions.
    #[serde(default = "default_one")]
    pub repetitions: usize,
    /// The rank of the neighbor whose distance is used.
    #[serde(default = "default_one")]
    pub k: usize,
    /// The lower bounds of the probe space.
    #[serde(default)]
    pub minima: Option<Vec<f64>>,
    /// The upper bounds of the probe space.
    #[serde(default)]
    pub maxima: Option<Vec<f64>>,
}

impl HopkinsParams {
    /// Creates parameters with one repetition, `k = 1`, and the probe space
    /// taken from the dataset.
    #[must_use]
    pub const fn new(sample_size: usize) -> Self {
        Self {
            sample_size,
            repetitions: 1,
            k: 1,
            minima: None,
            maxima: None,
        }
    }

    /// Sets the number of repetitions.
    #[must_use]
    pub const fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets the rank of the neighbor whose distance is used.
    #[must_use]
    pub const fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the bounds of the probe space.
    #[must_use]
    pub fn with_bounds(mut self, minima: Vec<f64>, maxima: Vec<f64>) -> Self {
        self.minima = Some(minima);
        self.maxima = Some(maxima);
        self
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// * If `sample_size`, `repetitions` or `k` is zero.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("sample_size", self.sample_size),
            ("repetitions", self.repetitions),
            ("k", self.k),
        ] {
            if value == 0 {
                return Err(StatsError::InvalidParameter(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }

    /// Resolves the probe space for `data`.
    fn bounds<V: Vector, D: Dataset<V>>(&self, data: &D) -> Result<BoundingBox> {
        let dim = data.dimensionality();
        let (minima, maxima) = match (&self.minima, &self.maxima) {
            (Some(minima), Some(maxima)) => (minima.clone(), maxima.clone()),
            (minima, maxima) => {
                let (data_min, data_max) = data.extrema()?;
                (
                    minima.clone().unwrap_or(data_min),
                    maxima.clone().unwrap_or(data_max),
                )
            }
        };
        let minima = broadcast(minima, dim)?;
        let maxima = broadcast(maxima, dim)?;
        BoundingBox::new(minima, maxima)
    }
}

/// Repeats a single bound over `dim` dimensions and checks the length of the
/// bounds otherwise.
fn broadcast(bound: Vec<f64>, dim: usize) -> Result<Vec<f64>> {
    if bound.len() == 1 && dim > 1 {
        Ok(vec![bound[0]; dim])
    } else {
        check_dim(dim, bound.len())?;
        Ok(bound)
    }
}

/// The Hopkins statistic of clustering tendency.
///
/// # Type Parameters
///
/// * `G` - The strategy used to draw the synthetic probes, e.g.
///   [`UniformProbes`] for dense data or [`BinaryProbes`] for binary data.
#[derive(Debug, Clone)]
pub struct Hopkins<G> {
    /// The parameters of the statistic.
    params: HopkinsParams,
    /// The probe generator.
    generator: G,
}

impl<G> Hopkins<G> {
    /// Creates a new `Hopkins`.
    ///
    /// # Errors
    ///
    /// * If the parameters are invalid.
    pub fn new(params: HopkinsParams, generator: G) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, generator })
    }

    /// Returns the parameters.
    pub const fn params(&self) -> &HopkinsParams {
        &self.params
    }

    /// Computes the statistic for every repetition, one after another.
    ///
    /// The distance function is the one the `knn` service was built with.
    /// Repetition `i` draws all of its random numbers from
    /// `random.stream_for(i)`.
    ///
    /// # Errors
    ///
    /// * If the dataset has fewer points than `sample_size`.
    /// * If the dataset or the bounds have an invalid dimensionality.
    /// * If a kNN query fails.
    /// * If the statistic of a repetition is not a finite number.
    pub fn run<V, D, Q>(&self, data: &D, knn: &Q, random: &RandomFactory) -> Result<HopkinsResult>
    where
        V: Vector,
        G: ProbeGenerator<V>,
        D: Dataset<V>,
        Q: KnnQuery<V, Id = D::Id>,
    {
        let setup = self.setup(data, random)?;
        let statistics = (0..self.params.repetitions)
            .map(|i| self.repetition(i, &setup, data, knn, random))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.finish(statistics))
    }

    /// Parallel version of [`Hopkins::run`].
    ///
    /// Repetitions run concurrently, each with its own random stream, so the
    /// result is identical to that of [`Hopkins::run`].
    ///
    /// # Errors
    ///
    /// See [`Hopkins::run`].
    pub fn par_run<V, D, Q>(&self, data: &D, knn: &Q, random: &RandomFactory) -> Result<HopkinsResult>
    where
        V: Vector,
        G: ProbeGenerator<V> + Sync,
        D: Dataset<V> + Sync,
        Q: KnnQuery<V, Id = D::Id> + Sync,
    {
        let setup = self.setup(data, random)?;
        let statistics = (0..self.params.repetitions)
            .into_par_iter()
            .map(|i| self.repetition(i, &setup, data, knn, random))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.finish(statistics))
    }

    /// Checks the dataset against the parameters and resolves everything
    /// shared by the repetitions.
    fn setup<V, D>(&self, data: &D, random: &RandomFactory) -> Result<Setup<D::Id>>
    where
        V: Vector,
        G: ProbeGenerator<V>,
        D: Dataset<V>,
    {
        let dim = data.dimensionality();
        if dim == 0 {
            return Err(StatsError::InvalidParameter("the dataset has no dimensions".to_string()));
        }
        let exponent = i32::try_from(dim)
            .map_err(|_| StatsError::InvalidParameter(format!("dimensionality {dim} is too large")))?;

        let available = data.cardinality();
        if self.params.sample_size > available {
            return Err(StatsError::InsufficientData {
                requested: self.params.sample_size,
                available,
            });
        }

        let bounds = self.params.bounds(data)?;

        // Sampling from the sorted identifiers makes the sample independent of
        // the enumeration order of the dataset.
        let mut ids = data.ids();
        ids.sort_unstable();

        ftlog::info!(
            "Hopkins ({} probes): {} repetitions of {} samples, k = {}, dim = {dim}, seed = {}",
            self.generator.name(),
            self.params.repetitions,
            self.params.sample_size,
            self.params.k,
            random.seed()
        );

        Ok(Setup { ids, bounds, exponent })
    }

    /// Computes the statistic of repetition `i`.
    fn repetition<V, D, Q>(
        &self,
        i: usize,
        setup: &Setup<D::Id>,
        data: &D,
        knn: &Q,
        random: &RandomFactory,
    ) -> Result<f64>
    where
        V: Vector,
        G: ProbeGenerator<V>,
        D: Dataset<V>,
        Q: KnnQuery<V, Id = D::Id>,
    {
        let mut rng = random.stream_for(i as u64);
        let w = self.real_data(setup, data, knn, &mut rng)?;
        let u = self.uniform_data(setup, data.dimensionality(), knn, &mut rng)?;

        let h = finite(u / (u + w), "the Hopkins statistic")?;
        ftlog::debug!("Hopkins repetition {i}: U = {u}, W = {w}, H = {h}");
        Ok(h)
    }

    /// Sums the k-distances, raised to the dimensionality, of points sampled
    /// without replacement from the dataset.
    fn real_data<V, D, Q>(&self, setup: &Setup<D::Id>, data: &D, knn: &Q, rng: &mut StdRng) -> Result<f64>
    where
        V: Vector,
        D: Dataset<V>,
        Q: KnnQuery<V, Id = D::Id>,
    {
        let k = self.params.k;
        let mut w = 0.0;
        for j in index::sample(rng, setup.ids.len(), self.params.sample_size) {
            let id = setup.ids[j];
            // A point that is indexed is its own nearest neighbor at distance
            // zero, so we skip it by asking for one more neighbor.
            let k_distance = if knn.contains(id) {
                knn.k_distance_by_id(id, k.saturating_add(1))?
            } else {
                knn.k_distance(data.get(id)?, k)?
            };
            w += powi(k_distance, setup.exponent)?;
        }
        finite(w, "the sum of the k-distances of the real samples")
    }

    /// Sums the k-distances, raised to the dimensionality, of synthetic
    /// probes.
    fn uniform_data<V, Q>(&self, setup: &Setup<Q::Id>, dim: usize, knn: &Q, rng: &mut StdRng) -> Result<f64>
    where
        V: Vector,
        G: ProbeGenerator<V>,
        Q: KnnQuery<V>,
    {
        let mut u = 0.0;
        for _ in 0..self.params.sample_size {
            let probe = self.generator.probe(&setup.bounds, rng);
            check_dim(dim, probe.dim())?;
            let k_distance = knn.k_distance(&probe, self.params.k)?;
            u += powi(k_distance, setup.exponent)?;
        }
        finite(u, "the sum of the k-distances of the probes")
    }

    /// Wraps the statistics of all repetitions.
    fn finish(&self, statistics: Vec<f64>) -> HopkinsResult {
        let result = HopkinsResult::new(statistics, self.params.sample_size);
        ftlog::info!("Hopkins: mean statistic {:.6} over {} repetitions", result.mean(), result.statistics().len());
        result
    }
}

/// What the repetitions of a run share.
struct Setup<Id> {
    /// The sorted identifiers of the dataset.
    ids: Vec<Id>,
    /// The probe space.
    bounds: BoundingBox,
    /// The dimensionality, as an exponent.
    exponent: i32,
}

/// Raises a k-distance to the dimensionality of the data.
///
/// A zero distance, e.g. between duplicate points, contributes zero.
fn powi(x: f64, exponent: i32) -> Result<f64> {
    if x == 0.0 {
        Ok(0.0)
    } else {
        finite(x.powi(exponent), "a k-distance raised to the dimensionality")
    }
}
