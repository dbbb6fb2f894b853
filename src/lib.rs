//! Symbolic differentiation of expressions whose structure is encoded in
//! their types.
//!
//! Expressions are built from variables, constants and the usual arithmetic
//! operators, and each node knows how to evaluate itself and how to produce
//! its derivative, which is another expression:
//!
//! ```
//! use differential::{Expr, derivative, sin, square, var1, var2};
//!
//! let expr = square(var1) + sin(var2) / 4 * var1;
//! let deriv = derivative(expr, var1);
//! assert_eq!(deriv.to_string(), "2 * x1 + sin(x2) / 4");
//! assert_eq!(deriv.eval([14., 0.]), 28.);
//! ```
pub mod arith;
pub mod dual;
pub mod error;
pub mod expr;
pub mod func;
pub mod interval;
pub mod scalar;
pub mod terminal;

mod display;
mod macros;
mod ops;

#[cfg(test)]
mod test;

pub use arith::{Difference, Product, Quotient, Sum};
pub use dual::{Dual, gradient};
pub use error::Error;
pub use expr::Expr;
pub use func::{
    Cosine, Negation, Power, Sine, cos, cube, derivative, eval, power, powi, sin, square,
};
pub use inari::Interval;
pub use interval::{eval_interval, interval};
pub use scalar::Scalar;
pub use terminal::{
    Constant, Delta, Value, Var, Var1, Var2, Var3, Var4, Var5, Var6, Var7, Var8, Var9, var1,
    var2, var3, var4, var5, var6, var7, var8, var9,
};
