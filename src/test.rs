use crate::{assert_float_eq, dual::gradient, expr::Expr};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Walks every combination of random values drawn for each variable, like
/// an odometer whose first digit turns fastest.
pub(crate) struct Sampler {
    values: Vec<Vec<f64>>,
    digits: Vec<usize>,
    point: Vec<f64>,
    exhausted: bool,
}

impl Sampler {
    /// Draw `samples_per_var` values uniformly from each of the `ranges`.
    /// `ranges[i]` bounds the value of the `i + 1`-th variable.
    pub fn new(ranges: &[(f64, f64)], samples_per_var: usize, seed: u64) -> Sampler {
        let mut rng = StdRng::seed_from_u64(seed);
        let values: Vec<Vec<f64>> = ranges
            .iter()
            .map(|&(lower, upper)| {
                (0..samples_per_var)
                    .map(|_| lower + rng.random::<f64>() * (upper - lower))
                    .collect()
            })
            .collect();
        Sampler {
            values,
            digits: vec![0; ranges.len()],
            point: vec![f64::NAN; ranges.len()],
            exhausted: samples_per_var == 0,
        }
    }

    pub fn next(&mut self) -> Option<&[f64]> {
        if self.exhausted {
            return None;
        }
        for ((out, values), digit) in self.point.iter_mut().zip(&self.values).zip(&self.digits) {
            *out = values[*digit];
        }
        // Advance, carrying into the next digit on wrap around.
        self.exhausted = true;
        for (digit, values) in self.digits.iter_mut().zip(&self.values) {
            *digit += 1;
            if *digit < values.len() {
                self.exhausted = false;
                break;
            }
            *digit = 0;
        }
        Some(&self.point)
    }
}

/// Compare `expr1` and `expr2` by evaluating them at randomly sampled
/// points. `ranges[i]` is the range from which the value of the `i + 1`-th
/// variable is sampled. Each variable is sampled `samples_per_var` times,
/// and the expressions are compared at all combinations of the samples. The
/// values must not differ by more than `eps`.
pub(crate) fn compare_exprs<A: Expr, B: Expr>(
    expr1: &A,
    expr2: &B,
    ranges: &[(f64, f64)],
    samples_per_var: usize,
    eps: f64,
) {
    assert!(
        A::ARITY <= ranges.len() && B::ARITY <= ranges.len(),
        "Not enough ranges to sample the variables of {expr1} and {expr2}"
    );
    let mut sampler = Sampler::new(ranges, samples_per_var, 42);
    while let Some(sample) = sampler.next() {
        let lhs = expr1.eval_with(sample);
        let rhs = expr2.eval_with(sample);
        assert_float_eq!(lhs, rhs, eps, sample);
    }
}

/// Check the symbolic derivative of `expr` with respect to the `V`-th
/// variable against the gradient computed with dual numbers, at randomly
/// sampled points.
pub(crate) fn compare_with_dual<E: Expr, const V: usize, const DIM: usize>(
    expr: &E,
    ranges: [(f64, f64); DIM],
    samples_per_var: usize,
    eps: f64,
) {
    const { assert!(V >= 1 && V <= DIM) };
    let deriv = expr.derivative::<V>();
    let mut sampler = Sampler::new(&ranges, samples_per_var, 42);
    while let Some(sample) = sampler.next() {
        let mut args = [0.; DIM];
        args.copy_from_slice(sample);
        let (value, grad) = gradient(expr, args);
        assert_float_eq!(value, expr.eval_with(sample), eps, sample);
        assert_float_eq!(grad[V - 1], deriv.eval_with(sample), eps, sample);
    }
}

#[test]
fn t_sampler_without_samples() {
    let mut sampler = Sampler::new(&[(0., 1.)], 0, 7);
    assert!(sampler.next().is_none());
}

#[test]
fn t_sampler_covers_all_combinations() {
    let mut sampler = Sampler::new(&[(0., 1.), (10., 20.)], 3, 7);
    let mut count = 0;
    while let Some(sample) = sampler.next() {
        assert!((0.0..1.0).contains(&sample[0]));
        assert!((10.0..20.0).contains(&sample[1]));
        count += 1;
    }
    assert_eq!(count, 9);
}
