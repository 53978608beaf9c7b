//! A `Number` is a general numeric type.
//!
//! Coordinates of dense vectors are `Number`s, and distances are computed
//! over collections of them.

use core::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Sub},
};

/// A primitive numeric type that can be used as a coordinate.
pub trait Number:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + AddAssign<Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Sum<Self>
    + Send
    + Sync
    + Debug
    + Display
    + Default
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Casts a number to `Self`. This may be a lossy conversion.
    ///
    /// Conversions between integer types are exact whenever the value fits
    /// in `Self`.
    fn from<T: Number>(n: T) -> Self;

    /// Returns the number as a `f64`. This may be a lossy conversion.
    fn as_f64(self) -> f64;

    /// Returns the number as an `i128`, truncating any fractional part.
    fn as_i128(self) -> i128;

    /// Returns the absolute difference between `self` and `other`.
    ///
    /// Unlike `(self - other).abs()`, this never underflows for unsigned
    /// types.
    #[must_use]
    fn abs_diff(self, other: Self) -> Self {
        if self < other {
            other - self
        } else {
            self - other
        }
    }
}

/// Implements `Number` for primitive types.
///
/// Floats are converted through `f64`, integers through `i128`.
macro_rules! impl_number {
    (float: $($ty:ty),*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
            impl Number for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn from<T: Number>(n: T) -> Self {
                    n.as_f64() as $ty
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn as_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
    (int: $($ty:ty),*) => {
        $(
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss,
                clippy::cast_lossless
            )]
            impl Number for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn from<T: Number>(n: T) -> Self {
                    n.as_i128() as $ty
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn as_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_number!(float: f32, f64);
impl_number!(int: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
