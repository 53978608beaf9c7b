//! The statistics of a Hopkins run and their summaries.

use serde::{Deserialize, Serialize};

use crate::{
    core::{Result, StatsError},
    utils,
};

/// The Hopkins statistic of every repetition of a run.
///
/// How the repetitions are aggregated is up to the caller; `mean`,
/// `std_dev` and `p_value` are the summaries reported by most tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopkinsResult {
    /// The statistic of each repetition, in repetition order.
    statistics: Vec<f64>,
    /// The number of samples per repetition.
    sample_size: usize,
}

impl HopkinsResult {
    /// Creates a new `HopkinsResult`.
    pub(crate) fn new(statistics: Vec<f64>, sample_size: usize) -> Self {
        Self {
            statistics,
            sample_size,
        }
    }

    /// Returns the statistic of each repetition.
    #[must_use]
    pub fn statistics(&self) -> &[f64] {
        &self.statistics
    }

    /// Returns the number of samples per repetition.
    #[must_use]
    pub const fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Returns the mean statistic over all repetitions.
    #[must_use]
    pub fn mean(&self) -> f64 {
        utils::mean(&self.statistics)
    }

    /// Returns the population variance of the statistic over all repetitions.
    #[must_use]
    pub fn variance(&self) -> f64 {
        utils::mean_variance::<f64, f64>(&self.statistics).1
    }

    /// Returns the population standard deviation of the statistic over all
    /// repetitions.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Returns the p-value of the mean statistic under the hypothesis of
    /// spatial randomness.
    ///
    /// Under that hypothesis the statistic follows a Beta distribution with
    /// both shape parameters equal to the sample size. The tail on the side of
    /// the mean is reported: small p-values for a mean close to 1 indicate
    /// clustering, and for a mean close to 0 indicate regular spacing.
    ///
    /// # Errors
    ///
    /// * If the incomplete Beta function cannot be evaluated.
    pub fn p_value(&self) -> Result<f64> {
        let x = self.mean();
        #[allow(clippy::cast_precision_loss)]
        let m = self.sample_size as f64;
        let ix = statrs::function::beta::checked_beta_reg(m, m, x)
            .map_err(|e| StatsError::NumericDegeneracy(format!("p-value of {x}: {e}")))?;
        Ok(if x > 0.5 { 1.0 - ix } else { ix })
    }
}
