//! Utilities shared by the integration tests.

#![allow(dead_code)]

pub mod data_gen;

use knn_stats::{DenseVector, Metric};

/// A broken metric that reports the same distance for every pair.
pub struct Constant(pub f64);

impl Metric<DenseVector> for Constant {
    fn distance(&self, _: &DenseVector, _: &DenseVector) -> f64 {
        self.0
    }

    fn name(&self) -> &str {
        "constant"
    }
}
