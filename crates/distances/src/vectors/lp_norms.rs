//! Provides functions for calculating Lp-norms between two vectors.

use crate::{Float, Number};

/// Euclidean distance between two vectors.
///
/// Also known as the L2-norm, the Euclidean distance is defined as the square
/// root of the sum of the squares of the absolute differences between the
/// corresponding elements of the two vectors.
///
/// # Examples
///
/// ```
/// use distances::vectors::euclidean;
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 5.0, 6.0];
///
/// let distance: f64 = euclidean(&x, &y);
///
/// assert!((distance - (27.0_f64).sqrt()).abs() <= f64::EPSILON);
/// ```
pub fn euclidean<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    euclidean_sq::<T, U>(x, y).sqrt()
}

/// Squared Euclidean distance between two vectors.
///
/// This is not a metric in the strict sense because it does not satisfy the
/// triangle inequality, but it preserves the ordering of Euclidean distances.
///
/// # Examples
///
/// ```
/// use distances::vectors::euclidean_sq;
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 5.0, 6.0];
///
/// let distance: f64 = euclidean_sq(&x, &y);
///
/// assert!((distance - 27.0).abs() <= f64::EPSILON);
/// ```
pub fn euclidean_sq<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    x.iter()
        .zip(y.iter())
        .map(|(&a, &b)| U::from(a.abs_diff(b)))
        .map(|d| d * d)
        .sum()
}

/// Manhattan distance between two vectors.
///
/// Also known as the L1-norm or the taxicab distance, the Manhattan distance
/// is defined as the sum of the absolute differences between the corresponding
/// elements of the two vectors.
///
/// # Examples
///
/// ```
/// use distances::vectors::manhattan;
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 5.0, 6.0];
///
/// let distance: f64 = manhattan(&x, &y);
///
/// assert!((distance - 9.0).abs() <= f64::EPSILON);
/// ```
pub fn manhattan<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    x.iter().zip(y.iter()).map(|(&a, &b)| U::from(a.abs_diff(b))).sum()
}

/// Chebyshev distance between two vectors.
///
/// Also known as the L-infinity norm, the Chebyshev distance is defined as the
/// maximum absolute difference between the corresponding elements of the two
/// vectors. Two empty vectors are at distance zero.
///
/// # Examples
///
/// ```
/// use distances::vectors::chebyshev;
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 8.0, 6.0];
///
/// let distance: f64 = chebyshev(&x, &y);
///
/// assert!((distance - 6.0).abs() <= f64::EPSILON);
/// ```
pub fn chebyshev<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    x.iter()
        .zip(y.iter())
        .map(|(&a, &b)| U::from(a.abs_diff(b)))
        .fold(U::ZERO, |max, d| if d > max { d } else { max })
}

/// General Lp-norm between two vectors, for an integer `p >= 1`.
///
/// `p = 1` is the Manhattan distance and `p = 2` is the Euclidean distance.
///
/// # Examples
///
/// ```
/// use distances::vectors::minkowski;
///
/// let x: Vec<f64> = vec![0.0, 0.0];
/// let y: Vec<f64> = vec![3.0, 4.0];
///
/// let distance: f64 = minkowski(&x, &y, 2);
///
/// assert!((distance - 5.0).abs() <= f64::EPSILON);
/// ```
pub fn minkowski<T: Number, U: Float>(x: &[T], y: &[T], p: i32) -> U {
    let sum: U = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| U::from(a.abs_diff(b)).powi(p))
        .sum();
    sum.powf(U::ONE / U::from(p))
}
