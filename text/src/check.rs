//! Shared evaluation shape for the string guards.

use std::fmt;

use ward_core::{Argument, GuardError, GuardResult};

/// Evaluate a string guard: an absent value never violates; a present value
/// is tested with the guard's predicate and the message factory is only
/// invoked on violation.
pub(crate) fn check<T, P, M>(
    argument: Argument<T>,
    violated: P,
    message: M,
) -> GuardResult<Argument<T>>
where
    T: AsRef<str> + fmt::Display,
    P: FnOnce(&str) -> bool,
    M: FnOnce(&Argument<T>, &str) -> String,
{
    if let Some(value) = argument.value() {
        let value = value.as_ref();
        if violated(value) {
            let message = message(&argument, value);
            return Err(shape_violation(&argument, message));
        }
    }
    Ok(argument)
}

/// Shape violations are always generic invalid arguments, regardless of the
/// argument's provenance. The value is still carried unless secure.
fn shape_violation<T: fmt::Display>(argument: &Argument<T>, message: String) -> GuardError {
    GuardError::invalid_argument(argument.name(), argument.display_value(), message)
}
