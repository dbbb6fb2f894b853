use std::ops::{Add, Div, Mul, Neg, Sub};

/// The numeric operations needed to evaluate an expression. Expressions are
/// generic over this trait, so the same expression can be evaluated with
/// plain floats, dual numbers to get forward mode derivatives, or intervals
/// to bound the range of the expression over a box.
pub trait Scalar:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn from_f64(value: f64) -> Self;

    fn from_i32(value: i32) -> Self {
        Self::from_f64(value as f64)
    }

    fn zero() -> Self {
        Self::from_i32(0)
    }

    fn one() -> Self {
        Self::from_i32(1)
    }

    fn sin(self) -> Self;

    fn cos(self) -> Self;

    /// Raise to an integer power. Raising anything to the power of zero
    /// yields one.
    fn powi(self, exponent: i32) -> Self;
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn powi(self, exponent: i32) -> Self {
        f64::powi(self, exponent)
    }
}
