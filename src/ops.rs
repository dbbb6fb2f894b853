use crate::{
    arith::{Difference, Product, Quotient, Sum},
    expr::Expr,
    func::{Cosine, Negation, Power, Sine},
    terminal::{Constant, Delta, Value, Var},
};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Implement the arithmetic operators for an expression type. Combining two
/// expressions builds the corresponding node, and numbers mixed in on either
/// side are wrapped in a `Value`.
macro_rules! impl_operators {
    ([$($params:tt)*] $ty:ty) => {
        impl_operators!(@binary [$($params)*] $ty, Add, add, Sum);
        impl_operators!(@binary [$($params)*] $ty, Sub, sub, Difference);
        impl_operators!(@binary [$($params)*] $ty, Mul, mul, Product);
        impl_operators!(@binary [$($params)*] $ty, Div, div, Quotient);

        impl<$($params)*> Neg for $ty {
            type Output = Negation<$ty>;

            fn neg(self) -> Self::Output {
                Negation::new(self)
            }
        }
    };
    (@binary [$($params:tt)*] $ty:ty, $op_trait:ident, $op_fn:ident, $node:ident) => {
        impl<Rhs: Expr, $($params)*> $op_trait<Rhs> for $ty {
            type Output = $node<$ty, Rhs>;

            fn $op_fn(self, rhs: Rhs) -> Self::Output {
                $node::new(self, rhs)
            }
        }

        impl_operators!(@number [$($params)*] $ty, $op_trait, $op_fn, $node, f64);
        impl_operators!(@number [$($params)*] $ty, $op_trait, $op_fn, $node, i32);
    };
    (@number [$($params:tt)*] $ty:ty, $op_trait:ident, $op_fn:ident, $node:ident, $num:ty) => {
        impl<$($params)*> $op_trait<$num> for $ty {
            type Output = $node<$ty, Value>;

            fn $op_fn(self, rhs: $num) -> Self::Output {
                $node::new(self, Value::from(rhs))
            }
        }

        impl<$($params)*> $op_trait<$ty> for $num {
            type Output = $node<Value, $ty>;

            fn $op_fn(self, rhs: $ty) -> Self::Output {
                $node::new(Value::from(self), rhs)
            }
        }
    };
}

impl_operators!([const N: i32] Constant<N>);
impl_operators!([] Value);
impl_operators!([const N: usize] Var<N>);
impl_operators!([const N: usize, const M: usize] Delta<N, M>);
impl_operators!([L: Expr, R: Expr] Sum<L, R>);
impl_operators!([L: Expr, R: Expr] Difference<L, R>);
impl_operators!([L: Expr, R: Expr] Product<L, R>);
impl_operators!([L: Expr, R: Expr] Quotient<L, R>);
impl_operators!([E: Expr] Sine<E>);
impl_operators!([E: Expr] Cosine<E>);
impl_operators!([E: Expr] Negation<E>);
impl_operators!([E: Expr] Power<E>);
