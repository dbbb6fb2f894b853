use crate::{
    error::{Error, check_arity},
    expr::Expr,
    scalar::Scalar,
};
use inari::Interval;

/// Create an interval from the bounds. The bounds are swapped if they are out
/// of order.
pub fn interval(mut lower: f64, mut upper: f64) -> Result<Interval, Error> {
    if upper < lower {
        (lower, upper) = (upper, lower);
    }
    inari::interval!(lower, upper).map_err(|_| Error::InvalidInterval)
}

impl Scalar for Interval {
    fn from_f64(value: f64) -> Self {
        // Values that can't be represented, like NaN, are only known to be
        // somewhere on the real line.
        inari::interval!(value, value).unwrap_or(Interval::ENTIRE)
    }

    fn sin(self) -> Self {
        Interval::sin(self)
    }

    fn cos(self) -> Self {
        Interval::cos(self)
    }

    fn powi(self, exponent: i32) -> Self {
        if exponent == 2 {
            // Tighter than the general case.
            self.sqr()
        } else {
            self.pown(exponent)
        }
    }
}

/// Evaluate `expr` over the box described by the intervals in `args`. The
/// result encloses the value of the expression at every point in the box.
pub fn eval_interval<E: Expr>(expr: &E, args: &[Interval]) -> Result<Interval, Error> {
    check_arity(E::ARITY, args.len())?;
    Ok(expr.eval_with(args))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Value, cos, derivative, sin, square, test::Sampler, var1, var2};

    #[test]
    fn t_interval_bounds() {
        let it = interval(3., 1.).unwrap();
        assert_eq!((it.inf(), it.sup()), (1., 3.));
        assert_eq!(interval(f64::NAN, 1.), Err(Error::InvalidInterval));
        assert_eq!(<Interval as Scalar>::from_f64(f64::NAN), Interval::ENTIRE);
    }

    #[test]
    fn t_eval_interval() {
        let expr = square(var1) - var2;
        let out = eval_interval(&expr, &[interval(-1., 2.).unwrap(), interval(0., 1.).unwrap()])
            .unwrap();
        assert_eq!((out.inf(), out.sup()), (-1., 4.));
        assert_eq!(
            eval_interval(&expr, &[interval(-1., 2.).unwrap()]),
            Err(Error::NotEnoughArguments {
                expected: 2,
                found: 1
            })
        );
        let out = eval_interval(&Value::new(2.5), &[]).unwrap();
        assert!(out.is_singleton());
    }

    #[test]
    fn t_enclosure() {
        // The interval must contain the value of the expression and its
        // derivative at every sample in the box.
        let expr = sin(var1) * cos(var2) + var1 / (2. + square(var2));
        let deriv = derivative(expr, var2);
        let bounds = [(-1., 0.5), (0.2, 1.3)];
        let boxes: Vec<_> = bounds
            .iter()
            .map(|&(lo, hi)| interval(lo, hi).unwrap())
            .collect();
        let expr_range = eval_interval(&expr, &boxes).unwrap();
        let deriv_range = eval_interval(&deriv, &boxes).unwrap();
        let mut sampler = Sampler::new(&bounds, 20, 42);
        while let Some(sample) = sampler.next() {
            assert!(expr_range.contains(expr.eval_with(sample)));
            assert!(deriv_range.contains(deriv.eval_with(sample)));
        }
    }
}
