use crate::{expr::Expr, scalar::Scalar};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Combine the partial derivatives of two dual numbers pairwise.
fn zip_partials<const DIM: usize>(
    lhs: [f64; DIM],
    rhs: [f64; DIM],
    combine: impl Fn(f64, f64) -> f64,
) -> [f64; DIM] {
    std::array::from_fn(|i| combine(lhs[i], rhs[i]))
}

/// Dual number with `DIM` partial derivatives, used to evaluate expressions
/// and their gradient in a single pass (forward mode automatic
/// differentiation).
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Dual<const DIM: usize> {
    pub real: f64,
    pub dual: [f64; DIM],
}

impl<const DIM: usize> Dual<DIM> {
    /// A constant, whose partial derivatives are all zero.
    pub fn constant(real: f64) -> Self {
        Dual {
            real,
            dual: [0.; DIM],
        }
    }

    /// The value of the variable at position `idx` among the inputs, i.e. a
    /// dual number whose only non zero partial derivative is the one at
    /// `idx`. Returns a constant if `idx` is out of bounds.
    pub fn variable(real: f64, idx: usize) -> Self {
        let mut dual = [0.; DIM];
        if idx < DIM {
            dual[idx] = 1.;
        }
        Dual { real, dual }
    }

    /// f(a + bE) = f(a) + f'(a) . bE
    fn chain(self, value: f64, deriv: f64) -> Self {
        Dual {
            real: value,
            dual: self.dual.map(|d| d * deriv),
        }
    }
}

impl<const DIM: usize> Add for Dual<DIM> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Dual {
            real: self.real + rhs.real,
            dual: zip_partials(self.dual, rhs.dual, |a, b| a + b),
        }
    }
}

impl<const DIM: usize> Sub for Dual<DIM> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Dual {
            real: self.real - rhs.real,
            dual: zip_partials(self.dual, rhs.dual, |a, b| a - b),
        }
    }
}

impl<const DIM: usize> Mul for Dual<DIM> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, c) = (self.real, rhs.real);
        Dual {
            real: a * c,
            dual: zip_partials(self.dual, rhs.dual, |b, d| b * c + a * d),
        }
    }
}

impl<const DIM: usize> Div for Dual<DIM> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let (a, c) = (self.real, rhs.real);
        Dual {
            real: a / c,
            dual: zip_partials(self.dual, rhs.dual, |b, d| (b * c - d * a) / (c * c)),
        }
    }
}

impl<const DIM: usize> Neg for Dual<DIM> {
    type Output = Self;

    fn neg(self) -> Self {
        Dual {
            real: -self.real,
            dual: self.dual.map(|d| -d),
        }
    }
}

impl<const DIM: usize> Scalar for Dual<DIM> {
    fn from_f64(value: f64) -> Self {
        Dual::constant(value)
    }

    fn sin(self) -> Self {
        self.chain(f64::sin(self.real), f64::cos(self.real))
    }

    fn cos(self) -> Self {
        self.chain(f64::cos(self.real), -f64::sin(self.real))
    }

    fn powi(self, exponent: i32) -> Self {
        if exponent == 0 {
            return Dual::constant(1.);
        }
        self.chain(
            f64::powi(self.real, exponent),
            exponent as f64 * f64::powi(self.real, exponent - 1),
        )
    }
}

/// Evaluate `expr` and its gradient with respect to all `DIM` variables at
/// `args`, using forward mode automatic differentiation.
pub fn gradient<E: Expr, const DIM: usize>(expr: &E, args: [f64; DIM]) -> (f64, [f64; DIM]) {
    const {
        assert!(
            E::ARITY <= DIM,
            "Not enough arguments for the variables in the expression."
        )
    };
    let inputs: [Dual<DIM>; DIM] = std::array::from_fn(|i| Dual::variable(args[i], i));
    let Dual { real, dual } = expr.eval_with(&inputs);
    (real, dual)
}
