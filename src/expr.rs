use crate::{
    error::{Error, check_arity},
    scalar::Scalar,
    terminal::Var,
};
use std::fmt::{Debug, Display};

/// Binding strengths used when formatting expressions. Higher numbers bind
/// tighter.
pub mod precedence {
    pub const SUM: u8 = 1;
    pub const PRODUCT: u8 = 2;
    pub const UNARY: u8 = 3;
    pub const POWER: u8 = 4;
    pub const ATOM: u8 = 5;
}

/// An expression whose structure is encoded in its type.
///
/// Everything that can be decided from the structure alone is exposed as an
/// associated constant: the number of arguments needed to evaluate it, the
/// set of variables it depends on and the integer it folds to, if any.
/// Evaluation branches on these constants, so the branches are resolved when
/// the expression type is monomorphized and folded subtrees never make it
/// into the generated code.
pub trait Expr: Copy + Debug + Display {
    /// Number of arguments required to evaluate this expression. This is the
    /// largest index of the variables in the expression.
    const ARITY: usize;
    /// Bit set of the variables in this expression. Bit `n - 1` is set if the
    /// expression depends on the `n`-th variable.
    const VARIABLES: u64;
    /// The integer this expression folds to, if it is known from the
    /// structure alone. `None` when the value depends on variables or runtime
    /// values, or when folding would overflow an `i32`.
    const VALUE: Option<i32> = None;
    /// The expression is identically zero.
    const IS_ZERO: bool = matches!(Self::VALUE, Some(0));
    /// The expression is identically one.
    const IS_ONE: bool = matches!(Self::VALUE, Some(1));
    const PRECEDENCE: u8;

    /// Type of the derivative of this expression with respect to the `V`-th
    /// variable.
    type Derivative<const V: usize>: Expr;

    /// Symbolic derivative with respect to the `V`-th variable.
    fn derivative<const V: usize>(&self) -> Self::Derivative<V>;

    /// Evaluate the expression, with `args[n - 1]` as the value of the `n`-th
    /// variable.
    ///
    /// # Panics
    ///
    /// If `args` has fewer than `Self::ARITY` values. Use `eval` or
    /// `try_eval` to have the number of arguments checked.
    fn eval_with<T: Scalar>(&self, args: &[T]) -> T;

    /// Evaluate the expression. The number of arguments is checked at compile
    /// time.
    ///
    /// ```compile_fail
    /// use differential::{Expr, var1, var2};
    ///
    /// let _ = (var1 * var2).eval([1.]);
    /// ```
    fn eval<const K: usize>(&self, args: [f64; K]) -> f64 {
        const {
            assert!(
                Self::ARITY <= K,
                "Not enough arguments for the variables in the expression."
            )
        };
        self.eval_with(&args)
    }

    /// Evaluate the expression with arguments whose count is only known at
    /// runtime.
    fn try_eval(&self, args: &[f64]) -> Result<f64, Error> {
        check_arity(Self::ARITY, args.len())?;
        Ok(self.eval_with(args))
    }

    /// Check if this expression depends on the variable `var`. A derivative
    /// with respect to a variable the expression doesn't depend on is
    /// identically zero.
    fn depends_on<const V: usize>(&self, _var: Var<V>) -> bool {
        Self::VARIABLES & Var::<V>::MASK != 0
    }
}

/// Maximum of two numbers, usable in constant expressions.
pub(crate) const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

/// Variables of an expression that may have been folded to a constant.
pub(crate) const fn variables(value: Option<i32>, unfolded: u64) -> u64 {
    if value.is_some() { 0 } else { unfolded }
}

/// Precedence of an expression that may have been folded to a constant.
pub(crate) const fn precedence_of(value: Option<i32>, unfolded: u8) -> u8 {
    match value {
        Some(v) if v < 0 => precedence::UNARY,
        Some(_) => precedence::ATOM,
        None => unfolded,
    }
}

/// Folding of integer constants. Each of these is `None` if either operand
/// is unknown, or if the result doesn't fit in an `i32`.
pub(crate) mod fold {
    pub const fn add(lhs: Option<i32>, rhs: Option<i32>) -> Option<i32> {
        match (lhs, rhs) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        }
    }

    pub const fn sub(lhs: Option<i32>, rhs: Option<i32>) -> Option<i32> {
        match (lhs, rhs) {
            (Some(a), Some(b)) => a.checked_sub(b),
            _ => None,
        }
    }

    pub const fn mul(lhs: Option<i32>, rhs: Option<i32>) -> Option<i32> {
        match (lhs, rhs) {
            (Some(a), Some(b)) => a.checked_mul(b),
            _ => None,
        }
    }

    /// Only exact quotients are folded, the rest are evaluated as real
    /// numbers.
    pub const fn div(lhs: Option<i32>, rhs: Option<i32>) -> Option<i32> {
        match (lhs, rhs) {
            (Some(a), Some(b)) => match a.checked_rem(b) {
                Some(0) => a.checked_div(b),
                _ => None,
            },
            _ => None,
        }
    }

    pub const fn neg(value: Option<i32>) -> Option<i32> {
        match value {
            Some(v) => v.checked_neg(),
            None => None,
        }
    }
}
