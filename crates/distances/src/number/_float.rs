//! Floating point `Number`s, used as distance values.

use crate::Number;

/// Sub-trait of `Number` for all floating point types.
pub trait Float: Number + core::ops::Neg<Output = Self> {
    /// The difference between `ONE` and the next largest representable number.
    const EPSILON: Self;

    /// Positive infinity.
    const INFINITY: Self;

    /// Returns the square root of a `Float`.
    #[must_use]
    fn sqrt(self) -> Self;

    /// Returns `self` raised to the integer power `exp`.
    #[must_use]
    fn powi(self, exp: i32) -> Self;

    /// Returns `self` raised to the power of `exp`.
    #[must_use]
    fn powf(self, exp: Self) -> Self;

    /// Whether `self` is neither infinite nor NaN.
    fn is_finite(self) -> bool;
}

/// A macro to implement the `Float` trait for primitive floats.
macro_rules! impl_float {
    ($($ty:ident),*) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = <$ty>::EPSILON;
                const INFINITY: Self = <$ty>::INFINITY;

                fn sqrt(self) -> Self {
                    Self::sqrt(self)
                }

                fn powi(self, exp: i32) -> Self {
                    Self::powi(self, exp)
                }

                fn powf(self, exp: Self) -> Self {
                    Self::powf(self, exp)
                }

                fn is_finite(self) -> bool {
                    Self::is_finite(self)
                }
            }
        )*
    }
}

impl_float!(f32, f64);
