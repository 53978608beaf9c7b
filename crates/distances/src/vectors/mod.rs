//! Distance functions for dense vectors.
//!
//! # Potentially unexpected behaviors
//! These functions do not check that the two vectors have the same
//! dimensionality. When one vector is shorter than the other, elements in the
//! longer vector past the end of the shorter vector are ignored. Callers that
//! need the check must perform it before computing the distance.

mod lp_norms;

pub use lp_norms::{chebyshev, euclidean, euclidean_sq, manhattan, minkowski};
