use crate::{
    expr::{Expr, precedence, precedence_of},
    scalar::Scalar,
};

/// An integer constant known at compile time.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Constant<const N: i32>;

/// A constant known only at runtime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Value(f64);

/// The `N`-th variable of an expression. Variables are numbered from 1, and
/// the `N`-th variable takes the value of the `N`-th argument when the
/// expression is evaluated. There can be at most 64 variables.
///
/// ```compile_fail
/// use differential::{Expr, Var};
///
/// let _ = Var::<0>.derivative::<1>();
/// ```
///
/// ```compile_fail
/// use differential::Var;
///
/// println!("{}", Var::<65>);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Var<const N: usize>;

/// Kronecker delta: one if `N == M`, otherwise zero. This is the derivative
/// of the `N`-th variable with respect to the `M`-th variable.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Delta<const N: usize, const M: usize>;

impl Value {
    pub fn new(value: f64) -> Value {
        Value(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value(value as f64)
    }
}

impl<const N: usize> Var<N> {
    /// Position of the value of this variable in the arguments.
    pub const INDEX: usize = {
        assert!(
            N >= 1 && N <= 64,
            "Variables are numbered from 1 and there can be at most 64 of them."
        );
        N - 1
    };
    /// Bit representing this variable in `Expr::VARIABLES`.
    pub const MASK: u64 = 1 << Self::INDEX;
}

impl<const N: i32> Expr for Constant<N> {
    const ARITY: usize = 0;
    const VARIABLES: u64 = 0;
    const VALUE: Option<i32> = Some(N);
    const PRECEDENCE: u8 = precedence_of(Self::VALUE, precedence::ATOM);

    type Derivative<const V: usize> = Constant<0>;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        Constant
    }

    fn eval_with<T: Scalar>(&self, _args: &[T]) -> T {
        T::from_i32(N)
    }
}

impl Expr for Value {
    const ARITY: usize = 0;
    const VARIABLES: u64 = 0;
    // Negative values are wrapped in parentheses when formatted.
    const PRECEDENCE: u8 = precedence::ATOM;

    type Derivative<const V: usize> = Constant<0>;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        Constant
    }

    fn eval_with<T: Scalar>(&self, _args: &[T]) -> T {
        T::from_f64(self.0)
    }
}

impl<const N: usize> Expr for Var<N> {
    const ARITY: usize = Self::INDEX + 1;
    const VARIABLES: u64 = Self::MASK;
    const PRECEDENCE: u8 = precedence::ATOM;

    type Derivative<const V: usize> = Delta<N, V>;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        const { Self::INDEX };
        Delta
    }

    fn eval_with<T: Scalar>(&self, args: &[T]) -> T {
        args[Self::INDEX]
    }
}

impl<const N: usize, const M: usize> Expr for Delta<N, M> {
    const ARITY: usize = 0;
    const VARIABLES: u64 = 0;
    const VALUE: Option<i32> = Some(if N == M { 1 } else { 0 });
    const PRECEDENCE: u8 = precedence::ATOM;

    type Derivative<const V: usize> = Constant<0>;

    fn derivative<const V: usize>(&self) -> Self::Derivative<V> {
        Constant
    }

    fn eval_with<T: Scalar>(&self, _args: &[T]) -> T {
        if N == M { T::one() } else { T::zero() }
    }
}

/// The first variable.
pub type Var1 = Var<1>;
/// The second variable.
pub type Var2 = Var<2>;
/// The third variable.
pub type Var3 = Var<3>;
/// The fourth variable.
pub type Var4 = Var<4>;
/// The fifth variable.
pub type Var5 = Var<5>;
/// The sixth variable.
pub type Var6 = Var<6>;
/// The seventh variable.
pub type Var7 = Var<7>;
/// The eighth variable.
pub type Var8 = Var<8>;
/// The ninth variable.
pub type Var9 = Var<9>;

#[allow(non_upper_case_globals)]
mod shorthand {
    use super::*;

    pub const var1: Var1 = Var;
    pub const var2: Var2 = Var;
    pub const var3: Var3 = Var;
    pub const var4: Var4 = Var;
    pub const var5: Var5 = Var;
    pub const var6: Var6 = Var;
    pub const var7: Var7 = Var;
    pub const var8: Var8 = Var;
    pub const var9: Var9 = Var;
}

pub use shorthand::*;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_constant() {
        assert_eq!(Constant::<7>.eval([]), 7.);
        assert_eq!(Constant::<{ -3 }>.eval([1., 2.]), -3.);
        assert!(<Constant<0> as Expr>::IS_ZERO);
        assert!(<Constant<1> as Expr>::IS_ONE);
        assert!(!<Constant<2> as Expr>::IS_ONE);
        assert_eq!(<Constant<{ -5 }> as Expr>::VALUE, Some(-5));
        assert_eq!(Constant::<7>.derivative::<1>(), Constant::<0>);
    }

    #[test]
    fn t_value() {
        let val = Value::new(2.5);
        assert_eq!(val.eval([]), 2.5);
        assert_eq!(val.eval([100.]), 2.5);
        assert_eq!(Value::from(3).value(), 3.);
        assert_eq!(val.derivative::<2>().eval([]), 0.);
    }

    #[test]
    fn t_variable() {
        assert_eq!(var1.eval([4., 5., 6.]), 4.);
        assert_eq!(var3.eval([4., 5., 6.]), 6.);
        assert_eq!(Var::<9>::INDEX, 8);
        assert_eq!(<Var2 as Expr>::VARIABLES, 0b10);
        assert_eq!(var2.derivative::<2>().eval([]), 1.);
        assert_eq!(var2.derivative::<1>().eval([]), 0.);
    }

    #[test]
    fn t_delta() {
        assert!(<Delta<3, 3> as Expr>::IS_ONE);
        assert!(<Delta<3, 4> as Expr>::IS_ZERO);
        assert_eq!(<Delta<3, 4> as Expr>::VALUE, Some(0));
        assert_eq!(<Var2 as Expr>::VALUE, None);
        assert_eq!(Delta::<1, 1>.eval([]), 1.);
        assert_eq!(Delta::<1, 2>.eval([]), 0.);
    }
}
