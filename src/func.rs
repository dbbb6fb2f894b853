use crate::{
    arith::Product,
    expr::{Expr, fold, precedence, precedence_of, variables},
    scalar::Scalar,
    terminal::{Value, Var},
};

/// Sine of an expression.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sine<E>(pub(crate) E);

/// Cosine of an expression.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cosine<E>(pub(crate) E);

/// Negative of an expression.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Negation<E>(pub(crate) E);

/// An expression raised to an integer power. The exponent is stored in the
/// node rather than the type, because the derivative has to decrement it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Power<E> {
    pub(crate) base: E,
    pub(crate) exponent: i32,
}

impl<E: Expr> Sine<E> {
    pub fn new(input: E) -> Self {
        Sine(input)
    }

    pub fn input(&self) -> &E {
        &self.0
    }
}

impl<E: Expr> Cosine<E> {
    pub fn new(input: E) -> Self {
        Cosine(input)
    }

    pub fn input(&self) -> &E {
        &self.0
    }
}

impl<E: Expr> Negation<E> {
    pub fn new(input: E) -> Self {
        Negation(input)
    }

    pub fn input(&self) -> &E {
        &self.0
    }
}

impl<E: Expr> Power<E> {
    pub fn new(base: E, exponent: i32) -> Self {
        Power { base, exponent }
    }

    pub fn base(&self) -> &E {
        &self.base
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }
}

impl<E: Expr> Expr for Sine<E> {
    const ARITY: usize = E::ARITY;
    const VARIABLES: u64 = variables(Self::VALUE, E::VARIABLES);
    const VALUE: Option<i32> = if E::IS_ZERO { Some(0) } else { None };
    const PRECEDENCE: u8 = precedence_of(Self::VALUE, precedence::ATOM);

    type Derivative<const V: usize> = Product<Cosine<E>, E::Derivative<V>>;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        Product::new(Cosine(self.0), self.0.derivative::<V>()) // Chain rule.
    }

    fn eval_with<T: Scalar>(&self, args: &[T]) -> T {
        match Self::VALUE {
            Some(value) => T::from_i32(value),
            None => self.0.eval_with(args).sin(),
        }
    }
}

impl<E: Expr> Expr for Cosine<E> {
    const ARITY: usize = E::ARITY;
    const VARIABLES: u64 = variables(Self::VALUE, E::VARIABLES);
    const VALUE: Option<i32> = if E::IS_ZERO { Some(1) } else { None };
    const PRECEDENCE: u8 = precedence_of(Self::VALUE, precedence::ATOM);

    type Derivative<const V: usize> = Product<Negation<Sine<E>>, E::Derivative<V>>;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        Product::new(Negation(Sine(self.0)), self.0.derivative::<V>()) // Chain rule.
    }

    fn eval_with<T: Scalar>(&self, args: &[T]) -> T {
        match Self::VALUE {
            Some(value) => T::from_i32(value),
            None => self.0.eval_with(args).cos(),
        }
    }
}

impl<E: Expr> Expr for Negation<E> {
    const ARITY: usize = E::ARITY;
    const VARIABLES: u64 = variables(Self::VALUE, E::VARIABLES);
    const VALUE: Option<i32> = fold::neg(E::VALUE);
    const PRECEDENCE: u8 = precedence_of(Self::VALUE, precedence::UNARY);

    type Derivative<const V: usize> = Negation<E::Derivative<V>>;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        Negation(self.0.derivative::<V>())
    }

    fn eval_with<T: Scalar>(&self, args: &[T]) -> T {
        match Self::VALUE {
            Some(value) => T::from_i32(value),
            None => -self.0.eval_with(args),
        }
    }
}

impl<E: Expr> Expr for Power<E> {
    const ARITY: usize = E::ARITY;
    const VARIABLES: u64 = variables(Self::VALUE, E::VARIABLES);
    // The exponent is only known at runtime, so only a base of one folds.
    const VALUE: Option<i32> = if E::IS_ONE { Some(1) } else { None };
    const PRECEDENCE: u8 = precedence_of(Self::VALUE, precedence::POWER);

    /// n * e^(n - 1) * e'
    type Derivative<const V: usize> = Product<Product<Value, Power<E>>, E::Derivative<V>>;

    /// The exponent of the power in the derivative is `n - 1`, except that
    /// it stays at zero when `n` is zero, and stays at `i32::MIN` when `n` is
    /// `i32::MIN`.
    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        let n = self.exponent;
        let reduced = if n == 0 { 0 } else { n.saturating_sub(1) };
        Product::new(
            Product::new(Value::from(n), Power::new(self.base, reduced)),
            self.base.derivative::<V>(),
        )
    }

    fn eval_with<T: Scalar>(&self, args: &[T]) -> T {
        match Self::VALUE {
            Some(value) => T::from_i32(value),
            None => self.base.eval_with(args).powi(self.exponent),
        }
    }
}

/// Sine of `expr`.
pub fn sin<E: Expr>(expr: E) -> Sine<E> {
    Sine(expr)
}

/// Cosine of `expr`.
pub fn cos<E: Expr>(expr: E) -> Cosine<E> {
    Cosine(expr)
}

/// `expr` raised to the power `N`, which must be at least 1.
///
/// ```compile_fail
/// use differential::{power, var1};
///
/// let _ = power::<0, _>(var1);
/// ```
pub fn power<const N: i32, E: Expr>(expr: E) -> Power<E> {
    const { assert!(N >= 1, "The exponent must be at least 1.") };
    Power::new(expr, N)
}

/// `expr` raised to an integer power only known at runtime.
pub fn powi<E: Expr>(expr: E, exponent: i32) -> Power<E> {
    Power::new(expr, exponent)
}

/// `expr` raised to the power 2.
pub fn square<E: Expr>(expr: E) -> Power<E> {
    power::<2, E>(expr)
}

/// `expr` raised to the power 3.
pub fn cube<E: Expr>(expr: E) -> Power<E> {
    power::<3, E>(expr)
}

/// Evaluate `expr` with the given arguments. The number of arguments is
/// checked at compile time.
pub fn eval<E: Expr, const K: usize>(expr: E, args: [f64; K]) -> f64 {
    expr.eval(args)
}

/// Derivative of `expr` with respect to the variable `wrt`.
pub fn derivative<E: Expr, const V: usize>(expr: E, _wrt: Var<V>) -> E::Derivative<V> {
    expr.derivative::<V>()
}

/// Compute the derivative of the given order, from 1 to 8, of an expression
/// with respect to a variable.
///
/// ```
/// use differential::{Expr, nth_derivative, power, var1};
///
/// let deriv = nth_derivative!(power::<5, _>(var1), var1, 4);
/// assert_eq!(deriv.eval([1.]), 120.);
/// ```
#[macro_export]
macro_rules! nth_derivative {
    ($expr:expr, $var:expr, 1) => {
        $crate::derivative($expr, $var)
    };
    ($expr:expr, $var:expr, 2) => {
        $crate::derivative($crate::nth_derivative!($expr, $var, 1), $var)
    };
    ($expr:expr, $var:expr, 3) => {
        $crate::derivative($crate::nth_derivative!($expr, $var, 2), $var)
    };
    ($expr:expr, $var:expr, 4) => {
        $crate::derivative($crate::nth_derivative!($expr, $var, 3), $var)
    };
    ($expr:expr, $var:expr, 5) => {
        $crate::derivative($crate::nth_derivative!($expr, $var, 4), $var)
    };
    ($expr:expr, $var:expr, 6) => {
        $crate::derivative($crate::nth_derivative!($expr, $var, 5), $var)
    };
    ($expr:expr, $var:expr, 7) => {
        $crate::derivative($crate::nth_derivative!($expr, $var, 6), $var)
    };
    ($expr:expr, $var:expr, 8) => {
        $crate::derivative($crate::nth_derivative!($expr, $var, 7), $var)
    };
}

#[cfg(test)]
mod test {
    use crate::{
        Expr, assert_float_eq, cos, cube, derivative, eval, power, powi, sin, square,
        test::compare_exprs, var1, var2,
    };

    #[test]
    fn t_trigonometry() {
        compare_exprs(
            &derivative(square(sin(var1)), var1),
            &(2. * sin(var1) * cos(var1)),
            &[(-5., 5.)],
            100,
            1e-13,
        );
        compare_exprs(
            &derivative(square(cos(var1)), var1),
            &(-2. * cos(var1) * sin(var1)),
            &[(-5., 5.)],
            100,
            1e-13,
        );
        compare_exprs(
            &derivative(sin(square(var1)), var1),
            &(cos(square(var1)) * 2. * var1),
            &[(-2., 2.)],
            100,
            1e-13,
        );
    }

    #[test]
    fn t_polynomial() {
        compare_exprs(
            &derivative(cube(var1), var1),
            &(3 * square(var1)),
            &[(-10., 10.)],
            100,
            1e-12,
        );
        compare_exprs(
            &derivative(1.5 * square(var1) + 2.3 * var1 + 3.46, var1),
            &(3 * var1 + 2.3),
            &[(-10., 10.)],
            100,
            1e-12,
        );
    }

    #[test]
    fn t_power() {
        assert_eq!(eval(power::<5, _>(var1), [2.]), 32.);
        assert_eq!(eval(powi(var1, 0), [0.]), 1.);
        assert_eq!(eval(powi(var1, -2), [2.]), 0.25);
        assert_eq!(eval(derivative(powi(var1, 0), var1), [0.]), 0.);
        assert_float_eq!(eval(derivative(powi(var1, -1), var1), [2.]), -0.25);
        // The smallest exponent can't be decremented.
        let deriv = derivative(powi(var1, i32::MIN), var1);
        assert_eq!(deriv.lhs().rhs().exponent(), i32::MIN);
        assert_eq!(deriv.eval([1.]), i32::MIN as f64);
        assert_eq!(derivative(powi(var1, 0), var1).lhs().rhs().exponent(), 0);
        assert_eq!(eval(crate::nth_derivative!(power::<5, _>(var1), var1, 4), [1.]), 120.);
        // Differentiating past the degree of the polynomial vanishes.
        let deriv = crate::nth_derivative!(cube(var1), var1, 5);
        assert_eq!(deriv.eval([0.]), 0.);
        assert_eq!(deriv.eval([3.]), 0.);
    }

    #[test]
    fn t_negation() {
        let expr = -sin(var1 * var2);
        assert_float_eq!(expr.eval([1., 2.]), -f64::sin(2.));
        compare_exprs(
            &expr.derivative::<2>(),
            &(-cos(var1 * var2) * var1),
            &[(-3., 3.), (-3., 3.)],
            20,
            1e-14,
        );
    }

    #[test]
    fn t_static_unary() {
        let zero = crate::Constant::<0>;
        assert!(<crate::Sine<crate::Constant<0>> as Expr>::IS_ZERO);
        assert_eq!(sin(zero).eval([]), 0.);
        assert_eq!(cos(zero).eval([]), 1.);
        assert_eq!((-zero).eval([]), 0.);
        assert_eq!(<crate::Negation<crate::Constant<4>> as Expr>::VALUE, Some(-4));
        assert_eq!(<crate::Cosine<crate::Constant<0>> as Expr>::VALUE, Some(1));
        assert_eq!(<crate::Power<crate::Constant<1>> as Expr>::VALUE, Some(1));
        assert_eq!(<crate::Power<crate::Constant<2>> as Expr>::VALUE, None);
    }
}
