//! Utility functions for the crate.

use distances::{Float, Number};

/// Calculate the mean and variance of the given values.
///
/// Calculates the mean and the population variance in a single pass.
///
/// # Arguments:
///
/// * `values` - The values to calculate the mean and variance of.
///
/// # Returns:
///
/// A tuple containing the mean and variance of the given values, or zeros if
/// `values` is empty.
pub fn mean_variance<T: Number, F: Float>(values: &[T]) -> (F, F) {
    if values.is_empty() {
        return (F::ZERO, F::ZERO);
    }

    let n = F::from(values.len());
    let (sum, sum_squares) = values
        .iter()
        .map(|&x| F::from(x))
        .fold((F::ZERO, F::ZERO), |(sum, sum_squares), x| (sum + x, sum_squares + x * x));

    let mean = sum / n;
    let variance = (sum_squares / n) - mean * mean;

    // Cancellation may leave a tiny negative variance for constant values.
    (mean, if variance < F::ZERO { F::ZERO } else { variance })
}

/// Return the mean value of the given slice of values.
pub fn mean<T: Number, F: Float>(values: &[T]) -> F {
    mean_variance::<T, F>(values).0
}
