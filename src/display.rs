use crate::{
    arith::{Difference, Product, Quotient, Sum},
    expr::{Expr, precedence},
    func::{Cosine, Negation, Power, Sine},
    terminal::{Constant, Delta, Value, Var},
};
use std::fmt::{Display, Formatter, Result};

/// Write `expr`, wrapped in parentheses if it binds looser than `min`.
fn operand<E: Expr>(f: &mut Formatter<'_>, expr: &E, min: u8) -> Result {
    if E::PRECEDENCE < min {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

/// Write the integer `E` folds to, if it has one. Returns `None` otherwise.
fn known<E: Expr>(f: &mut Formatter<'_>) -> Option<Result> {
    E::VALUE.map(|value| write!(f, "{value}"))
}

impl<const N: i32> Display for Constant<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{N}")
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let value = self.value();
        if value.is_sign_negative() {
            write!(f, "({value})")
        } else {
            write!(f, "{value}")
        }
    }
}

impl<const N: usize> Display for Var<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        const { Self::INDEX };
        write!(f, "x{N}")
    }
}

impl<const N: usize, const M: usize> Display for Delta<N, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", if N == M { 1 } else { 0 })
    }
}

impl<L: Expr, R: Expr> Display for Sum<L, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(result) = known::<Self>(f) {
            return result;
        }
        if L::IS_ZERO {
            return write!(f, "{}", self.rhs);
        }
        if R::IS_ZERO {
            return write!(f, "{}", self.lhs);
        }
        operand(f, &self.lhs, precedence::SUM)?;
        write!(f, " + ")?;
        operand(f, &self.rhs, precedence::SUM)
    }
}

impl<L: Expr, R: Expr> Display for Difference<L, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(result) = known::<Self>(f) {
            return result;
        }
        if R::IS_ZERO {
            return write!(f, "{}", self.lhs);
        }
        if L::IS_ZERO {
            write!(f, "-")?;
            return operand(f, &self.rhs, precedence::POWER);
        }
        operand(f, &self.lhs, precedence::SUM)?;
        write!(f, " - ")?;
        operand(f, &self.rhs, precedence::PRODUCT)
    }
}

impl<L: Expr, R: Expr> Display for Product<L, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(result) = known::<Self>(f) {
            return result;
        }
        if L::IS_ONE {
            return write!(f, "{}", self.rhs);
        }
        if R::IS_ONE {
            return write!(f, "{}", self.lhs);
        }
        operand(f, &self.lhs, precedence::PRODUCT)?;
        write!(f, " * ")?;
        operand(f, &self.rhs, precedence::PRODUCT)
    }
}

impl<L: Expr, R: Expr> Display for Quotient<L, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(result) = known::<Self>(f) {
            return result;
        }
        if R::IS_ONE {
            return write!(f, "{}", self.lhs);
        }
        operand(f, &self.lhs, precedence::PRODUCT)?;
        write!(f, " / ")?;
        operand(f, &self.rhs, precedence::UNARY)
    }
}

impl<E: Expr> Display for Sine<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(result) = known::<Self>(f) {
            return result;
        }
        write!(f, "sin({})", self.0)
    }
}

impl<E: Expr> Display for Cosine<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(result) = known::<Self>(f) {
            return result;
        }
        write!(f, "cos({})", self.0)
    }
}

impl<E: Expr> Display for Negation<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(result) = known::<Self>(f) {
            return result;
        }
        write!(f, "-")?;
        operand(f, &self.0, precedence::POWER)
    }
}

impl<E: Expr> Display for Power<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(result) = known::<Self>(f) {
            return result;
        }
        match self.exponent {
            0 => write!(f, "1"),
            // Parentheses are still needed if the base is not an atom,
            // because the power binds tighter than whatever the base is.
            1 => operand(f, &self.base, precedence::POWER),
            n if n < 0 => {
                operand(f, &self.base, precedence::ATOM)?;
                write!(f, "^({n})")
            }
            n => {
                operand(f, &self.base, precedence::ATOM)?;
                write!(f, "^{n}")
            }
        }
    }
}
