/// Construct an expression from a lisp-like prefix notation.
///
/// Symbols `x1` through `x9` are the variables, number literals become
/// runtime values and `(const N)` is the compile time integer constant
/// `N`. Rust expressions can be spliced in as blocks.
///
/// ```
/// use differential::{Expr, defexpr};
///
/// let expr = defexpr!(+ (square x1) (/ 10 x1));
/// assert_eq!(expr.eval([5.]), 27.);
/// ```
#[macro_export]
macro_rules! defexpr {
    () => {}; // empty;
    (($($a:tt)*)) => { // Unwrap redundant parens.
        $crate::defexpr!($($a)*)
    };
    ($a:block) => { // Block expressions.
        $a
    };
    // Constants known at compile time.
    (const $n:literal) => {
        $crate::Constant::<{ $n }>
    };
    // Functions.
    (sin $a:tt) => {
        $crate::sin($crate::defexpr!($a))
    };
    (cos $a:tt) => {
        $crate::cos($crate::defexpr!($a))
    };
    (square $a:tt) => {
        $crate::square($crate::defexpr!($a))
    };
    (cube $a:tt) => {
        $crate::cube($crate::defexpr!($a))
    };
    (pow $a:tt $n:literal) => {
        $crate::powi($crate::defexpr!($a), $n)
    };
    // Operators.
    (- $a:tt) => {
        -$crate::defexpr!($a)
    };
    (- $a:tt $b:tt) => {
        $crate::defexpr!($a) - $crate::defexpr!($b)
    };
    (+ $a:tt $b:tt) => {
        $crate::defexpr!($a) + $crate::defexpr!($b)
    };
    (* $a:tt $b:tt) => {
        $crate::defexpr!($a) * $crate::defexpr!($b)
    };
    (/ $a:tt $b:tt) => {
        $crate::defexpr!($a) / $crate::defexpr!($b)
    };
    // Variables.
    (x1) => { $crate::var1 };
    (x2) => { $crate::var2 };
    (x3) => { $crate::var3 };
    (x4) => { $crate::var4 };
    (x5) => { $crate::var5 };
    (x6) => { $crate::var6 };
    (x7) => { $crate::var7 };
    (x8) => { $crate::var8 };
    (x9) => { $crate::var9 };
    // Runtime constants.
    ($a:literal) => {
        $crate::Value::new(($a) as f64)
    };
}

/// Assert that two `f64` values differ by at most `eps`, which defaults to
/// machine epsilon. The optional last argument is printed on failure, to
/// show the input that produced the mismatch.
#[macro_export]
macro_rules! assert_float_eq {
    ($left:expr, $right:expr, $eps:expr, $context:expr) => {{
        let (left, right, eps): (f64, f64, f64) = ($left, $right, $eps);
        let diff = f64::abs(left - right);
        assert!(
            diff <= eps,
            "Floats differ: |{} - {}| = {:e} > {:e} at {:?}",
            left,
            right,
            diff,
            eps,
            $context
        );
    }};
    ($left:expr, $right:expr, $eps:expr) => {
        $crate::assert_float_eq!($left, $right, $eps, "")
    };
    ($left:expr, $right:expr) => {
        $crate::assert_float_eq!($left, $right, f64::EPSILON)
    };
}
