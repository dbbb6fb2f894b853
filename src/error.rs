/// Errors returned by the runtime checked entry points. Everything that can
/// be checked when the expression types are known is checked at compile time
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The expression references more variables than the number of
    /// arguments provided for evaluation.
    #[error("expression needs {expected} arguments, but {found} were provided")]
    NotEnoughArguments { expected: usize, found: usize },
    /// The bounds of an interval are NaN, or otherwise don't describe a valid
    /// interval.
    #[error("invalid interval bounds")]
    InvalidInterval,
}

/// Make sure `found` arguments are enough to evaluate an expression of the
/// given `arity`.
pub(crate) fn check_arity(arity: usize, found: usize) -> Result<(), Error> {
    if found < arity {
        return Err(Error::NotEnoughArguments {
            expected: arity,
            found,
        });
    }
    Ok(())
}
