//! Distance functions for sets.
//!
//! Sets are represented as sorted slices without duplicates, e.g. the indices
//! of the set dimensions of a sparse binary vector. This lets us compute the
//! intersection with a single merge pass instead of building hash sets.

use core::cmp::Ordering;

use crate::Float;

/// Returns the number of elements common to both sorted sets.
///
/// # Examples
///
/// ```
/// use distances::sets::intersection_size;
///
/// let x = [1_usize, 3, 5, 7];
/// let y = [3_usize, 4, 5];
///
/// assert_eq!(intersection_size(&x, &y), 2);
/// ```
pub fn intersection_size<T: Ord>(x: &[T], y: &[T]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < x.len() && j < y.len() {
        match x[i].cmp(&y[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Jaccard distance.
///
/// The Jaccard distance is one minus the cardinality of the intersection of
/// the sets divided by the cardinality of their union. Two empty sets are
/// identical and thus at distance zero.
///
/// # Examples
///
/// ```
/// use distances::sets::jaccard;
///
/// let x = [1_usize, 2, 3];
/// let y = [2_usize, 3, 4];
///
/// let distance: f64 = jaccard(&x, &y);
///
/// assert!((distance - 0.5).abs() <= f64::EPSILON);
/// ```
pub fn jaccard<T: Ord, U: Float>(x: &[T], y: &[T]) -> U {
    let intersection = intersection_size(x, y);
    let union = x.len() + y.len() - intersection;

    if union == 0 {
        U::ZERO
    } else {
        U::ONE - U::from(intersection) / U::from(union)
    }
}

/// Hamming distance between two sets of set dimensions.
///
/// This is the size of the symmetric difference of the sets, i.e. the number
/// of dimensions in which the two binary vectors differ.
///
/// # Examples
///
/// ```
/// use distances::sets::hamming;
///
/// let x = [0_usize, 2, 4];
/// let y = [2_usize, 3];
///
/// let distance: f64 = hamming(&x, &y);
///
/// assert!((distance - 3.0).abs() <= f64::EPSILON);
/// ```
pub fn hamming<T: Ord, U: Float>(x: &[T], y: &[T]) -> U {
    let intersection = intersection_size(x, y);
    U::from(x.len() + y.len() - 2 * intersection)
}
