//! The `Number` trait is used to represent the coordinates of vectors and the
//! values of distances.
//!
//! We provide implementations for the following types:
//!
//! * All primitive unsigned integers: `u8`, `u16`, `u32`, `u64`, `usize`.
//! * All primitive signed integers: `i8`, `i16`, `i32`, `i64`, `isize`.
//! * All primitive floating point numbers: `f32`, `f64`.

mod _float;
mod _number;

pub use _float::Float;
pub use _number::Number;
