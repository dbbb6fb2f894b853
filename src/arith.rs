use crate::{
    expr::{Expr, fold, max, precedence, precedence_of, variables},
    func::Power,
    scalar::Scalar,
};

/// Sum of two expressions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sum<L, R> {
    pub(crate) lhs: L,
    pub(crate) rhs: R,
}

/// Difference of two expressions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Difference<L, R> {
    pub(crate) lhs: L,
    pub(crate) rhs: R,
}

/// Product of two expressions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Product<L, R> {
    pub(crate) lhs: L,
    pub(crate) rhs: R,
}

/// Quotient of two expressions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quotient<L, R> {
    pub(crate) lhs: L,
    pub(crate) rhs: R,
}

macro_rules! binary_node {
    ($name:ident) => {
        impl<L: Expr, R: Expr> $name<L, R> {
            pub fn new(lhs: L, rhs: R) -> Self {
                $name { lhs, rhs }
            }

            pub fn lhs(&self) -> &L {
                &self.lhs
            }

            pub fn rhs(&self) -> &R {
                &self.rhs
            }
        }
    };
}

binary_node!(Sum);
binary_node!(Difference);
binary_node!(Product);
binary_node!(Quotient);

impl<L: Expr, R: Expr> Expr for Sum<L, R> {
    const ARITY: usize = max(L::ARITY, R::ARITY);
    const VARIABLES: u64 = variables(Self::VALUE, L::VARIABLES | R::VARIABLES);
    const VALUE: Option<i32> = fold::add(L::VALUE, R::VALUE);
    const PRECEDENCE: u8 = precedence_of(
        Self::VALUE,
        if L::IS_ZERO {
            R::PRECEDENCE
        } else if R::IS_ZERO {
            L::PRECEDENCE
        } else {
            precedence::SUM
        },
    );

    type Derivative<const V: usize> = Sum<L::Derivative<V>, R::Derivative<V>>;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        Sum::new(self.lhs.derivative::<V>(), self.rhs.derivative::<V>())
    }

    fn eval_with<T: Scalar>(&self, args: &[T]) -> T {
        if let Some(value) = Self::VALUE {
            T::from_i32(value)
        } else if L::IS_ZERO {
            self.rhs.eval_with(args)
        } else if R::IS_ZERO {
            self.lhs.eval_with(args)
        } else {
            self.lhs.eval_with(args) + self.rhs.eval_with(args)
        }
    }
}

impl<L: Expr, R: Expr> Expr for Difference<L, R> {
    const ARITY: usize = max(L::ARITY, R::ARITY);
    const VARIABLES: u64 = variables(Self::VALUE, L::VARIABLES | R::VARIABLES);
    const VALUE: Option<i32> = fold::sub(L::VALUE, R::VALUE);
    const PRECEDENCE: u8 = precedence_of(
        Self::VALUE,
        if R::IS_ZERO {
            L::PRECEDENCE
        } else if L::IS_ZERO {
            precedence::UNARY
        } else {
            precedence::SUM
        },
    );

    type Derivative<const V: usize> = Difference<L::Derivative<V>, R::Derivative<V>>;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        Difference::new(self.lhs.derivative::<V>(), self.rhs.derivative::<V>())
    }

    fn eval_with<T: Scalar>(&self, args: &[T]) -> T {
        if let Some(value) = Self::VALUE {
            T::from_i32(value)
        } else if R::IS_ZERO {
            self.lhs.eval_with(args)
        } else if L::IS_ZERO {
            -self.rhs.eval_with(args)
        } else {
            self.lhs.eval_with(args) - self.rhs.eval_with(args)
        }
    }
}

impl<L: Expr, R: Expr> Expr for Product<L, R> {
    const ARITY: usize = max(L::ARITY, R::ARITY);
    const VARIABLES: u64 = variables(Self::VALUE, L::VARIABLES | R::VARIABLES);
    const VALUE: Option<i32> = if L::IS_ZERO || R::IS_ZERO {
        Some(0)
    } else {
        fold::mul(L::VALUE, R::VALUE)
    };
    const PRECEDENCE: u8 = precedence_of(
        Self::VALUE,
        if L::IS_ONE {
            R::PRECEDENCE
        } else if R::IS_ONE {
            L::PRECEDENCE
        } else {
            precedence::PRODUCT
        },
    );

    type Derivative<const V: usize> =
        Sum<Product<L, R::Derivative<V>>, Product<L::Derivative<V>, R>>;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        Sum::new(
            Product::new(self.lhs, self.rhs.derivative::<V>()),
            Product::new(self.lhs.derivative::<V>(), self.rhs),
        )
    }

    fn eval_with<T: Scalar>(&self, args: &[T]) -> T {
        if let Some(value) = Self::VALUE {
            T::from_i32(value)
        } else if L::IS_ONE {
            self.rhs.eval_with(args)
        } else if R::IS_ONE {
            self.lhs.eval_with(args)
        } else {
            self.lhs.eval_with(args) * self.rhs.eval_with(args)
        }
    }
}

impl<L: Expr, R: Expr> Expr for Quotient<L, R> {
    const ARITY: usize = max(L::ARITY, R::ARITY);
    const VARIABLES: u64 = variables(Self::VALUE, L::VARIABLES | R::VARIABLES);
    // A zero numerator makes the quotient zero, even when the denominator
    // vanishes at runtime.
    const VALUE: Option<i32> = if L::IS_ZERO {
        Some(0)
    } else {
        fold::div(L::VALUE, R::VALUE)
    };
    const PRECEDENCE: u8 = precedence_of(
        Self::VALUE,
        if R::IS_ONE {
            L::PRECEDENCE
        } else {
            precedence::PRODUCT
        },
    );

    /// (r * l' - l * r') / r^2
    type Derivative<const V: usize> = Quotient<
        Difference<Product<R, L::Derivative<V>>, Product<L, R::Derivative<V>>>,
        Power<R>,
    >;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        Quotient::new(
            Difference::new(
                Product::new(self.rhs, self.lhs.derivative::<V>()),
                Product::new(self.lhs, self.rhs.derivative::<V>()),
            ),
            Power::new(self.rhs, 2),
        )
    }

    fn eval_with<T: Scalar>(&self, args: &[T]) -> T {
        if let Some(value) = Self::VALUE {
            T::from_i32(value)
        } else if R::IS_ONE {
            self.lhs.eval_with(args)
        } else {
            self.lhs.eval_with(args) / self.rhs.eval_with(args)
        }
    }
}
