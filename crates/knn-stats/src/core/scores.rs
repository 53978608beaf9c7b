//! Per-point scores and their range.

use std::collections::HashMap;

use super::{PointId, Result, StatsError};

/// Tracks the minimum and maximum of a stream of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    /// The smallest value seen so far.
    min: f64,
    /// The largest value seen so far.
    max: f64,
}

impl Default for MinMax {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl MinMax {
    /// Updates the range with a new value.
    pub fn put(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Returns the smallest value, or `None` if no value was put.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.is_valid().then_some(self.min)
    }

    /// Returns the largest value, or `None` if no value was put.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.is_valid().then_some(self.max)
    }

    /// Whether at least one value was put.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// A mapping from point identifiers to scores.
///
/// Each identifier is scored exactly once. Scores are kept in the order they
/// were inserted.
#[derive(Debug, Clone)]
pub struct ScoreStore<Id: PointId> {
    /// The scores, in insertion order.
    scores: Vec<(Id, f64)>,
    /// Maps identifiers to positions in `scores`.
    index: HashMap<Id, usize>,
}

impl<Id: PointId> Default for ScoreStore<Id> {
    fn default() -> Self {
        Self {
            scores: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<Id: PointId> ScoreStore<Id> {
    /// Creates an empty store with room for `capacity` scores.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scores: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Stores the score of `id`.
    ///
    /// # Errors
    ///
    /// * If `id` already has a score.
    pub fn insert(&mut self, id: Id, score: f64) -> Result<()> {
        if self.index.contains_key(&id) {
            return Err(StatsError::InvalidParameter(format!("{id:?} was scored twice")));
        }
        self.index.insert(id, self.scores.len());
        self.scores.push((id, score));
        Ok(())
    }

    /// Returns the score of `id`, if it has one.
    #[must_use]
    pub fn get(&self, id: Id) -> Option<f64> {
        self.index.get(&id).map(|&i| self.scores[i].1)
    }

    /// Iterates over the scores in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, f64)> + '_ {
        self.scores.iter().copied()
    }

    /// Returns the number of scores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Consumes the store and returns the scores in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<(Id, f64)> {
        self.scores
    }
}

/// The observed and theoretical range of a set of outlier scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreMeta {
    /// The smallest observed score.
    pub actual_min: f64,
    /// The largest observed score.
    pub actual_max: f64,
    /// The smallest possible score.
    pub theoretical_min: f64,
    /// The largest possible score.
    pub theoretical_max: f64,
}

impl ScoreMeta {
    /// Maps a score linearly into `[0, 1]` using the observed range.
    ///
    /// Returns 0 when all observed scores are equal.
    #[must_use]
    pub fn normalize(&self, score: f64) -> f64 {
        let range = self.actual_max - self.actual_min;
        if range > 0.0 {
            (score - self.actual_min) / range
        } else {
            0.0
        }
    }
}

/// Outlier scores for every point of a dataset, with their range.
#[derive(Debug, Clone)]
pub struct OutlierResult<Id: PointId> {
    /// The score of each point.
    pub scores: ScoreStore<Id>,
    /// The range of the scores.
    pub meta: ScoreMeta,
}
