//! Ordering and range guards.

use std::fmt;

use ward_core::{Argument, GuardError, GuardResult};

use crate::messages;

/// Chainable ordering and range guards for comparable argument values.
///
/// Implemented once for [`Argument<T>`] wherever the payload is comparable
/// and displayable; the optional construction path shares the same
/// implementation, so an absent value satisfies every guard vacuously.
/// Presence is a separate concern, asserted with [`Argument::require`].
///
/// Boundary semantics: `min`, `max` and `in_range` are inclusive,
/// `greater_than` and `less_than` are strict.
///
/// The payload's comparison must be consistent (reflexive, antisymmetric,
/// transitive). A partial order that answers "incomparable" (such as a
/// float NaN) never triggers the violation branch.
///
/// ```
/// use ward_core::arg;
/// use ward_compare::OrderGuards;
///
/// let port = 8080u16;
/// let port = arg!(port).min(1024)?.max(49151)?;
/// # Ok::<(), ward_core::GuardError>(())
/// ```
pub trait OrderGuards<T>: Sized {
    /// Require the value to be at least `bound` (inclusive).
    fn min(self, bound: T) -> GuardResult<Self>;

    /// Same as [`min`](Self::min), with a caller-supplied message factory
    /// receiving the offending value and the bound.
    fn min_with<F>(self, bound: T, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&T, &T) -> String;

    /// Require the value to be at most `bound` (inclusive).
    fn max(self, bound: T) -> GuardResult<Self>;

    /// Same as [`max`](Self::max), with a caller-supplied message factory.
    fn max_with<F>(self, bound: T, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&T, &T) -> String;

    /// Require the value to be strictly greater than `bound`.
    fn greater_than(self, bound: T) -> GuardResult<Self>;

    /// Same as [`greater_than`](Self::greater_than), with a caller-supplied
    /// message factory.
    fn greater_than_with<F>(self, bound: T, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&T, &T) -> String;

    /// Require the value to be strictly less than `bound`.
    fn less_than(self, bound: T) -> GuardResult<Self>;

    /// Same as [`less_than`](Self::less_than), with a caller-supplied
    /// message factory.
    fn less_than_with<F>(self, bound: T, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&T, &T) -> String;

    /// Require the value to be between `low` and `high`, both inclusive.
    ///
    /// The bounds are not validated against each other: an inverted range
    /// rejects every value.
    fn in_range(self, low: T, high: T) -> GuardResult<Self>;

    /// Same as [`in_range`](Self::in_range), with a caller-supplied message
    /// factory receiving the offending value and both bounds.
    fn in_range_with<F>(self, low: T, high: T, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&T, &T, &T) -> String;
}

impl<T> OrderGuards<T> for Argument<T>
where
    T: PartialOrd + fmt::Display,
{
    fn min(self, bound: T) -> GuardResult<Self> {
        check(
            self,
            |value| *value < bound,
            |argument, _| messages::min(argument, &bound),
        )
    }

    fn min_with<F>(self, bound: T, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&T, &T) -> String,
    {
        check(self, |value| *value < bound, |_, value| message(value, &bound))
    }

    fn max(self, bound: T) -> GuardResult<Self> {
        check(
            self,
            |value| *value > bound,
            |argument, _| messages::max(argument, &bound),
        )
    }

    fn max_with<F>(self, bound: T, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&T, &T) -> String,
    {
        check(self, |value| *value > bound, |_, value| message(value, &bound))
    }

    fn greater_than(self, bound: T) -> GuardResult<Self> {
        check(
            self,
            |value| *value <= bound,
            |argument, _| messages::greater_than(argument, &bound),
        )
    }

    fn greater_than_with<F>(self, bound: T, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&T, &T) -> String,
    {
        check(self, |value| *value <= bound, |_, value| message(value, &bound))
    }

    fn less_than(self, bound: T) -> GuardResult<Self> {
        check(
            self,
            |value| *value >= bound,
            |argument, _| messages::less_than(argument, &bound),
        )
    }

    fn less_than_with<F>(self, bound: T, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&T, &T) -> String,
    {
        check(self, |value| *value >= bound, |_, value| message(value, &bound))
    }

    fn in_range(self, low: T, high: T) -> GuardResult<Self> {
        check(
            self,
            |value| *value < low || *value > high,
            |argument, _| messages::in_range(argument, &low, &high),
        )
    }

    fn in_range_with<F>(self, low: T, high: T, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&T, &T, &T) -> String,
    {
        check(
            self,
            |value| *value < low || *value > high,
            |_, value| message(value, &low, &high),
        )
    }
}

/// Shared evaluation shape for every ordering guard.
///
/// An absent value never violates; a present value is tested with the
/// guard's predicate and the message factory is only invoked on violation.
fn check<T, P, M>(argument: Argument<T>, violated: P, message: M) -> GuardResult<Argument<T>>
where
    T: PartialOrd + fmt::Display,
    P: FnOnce(&T) -> bool,
    M: FnOnce(&Argument<T>, &T) -> String,
{
    if let Some(value) = argument.value() {
        if violated(value) {
            let message = message(&argument, value);
            return Err(order_violation(&argument, message));
        }
    }
    Ok(argument)
}

/// Classify an ordering violation by the argument's provenance.
///
/// An unmodified argument fails as out-of-range, carrying the offending
/// value unless the argument is secure. A modified argument fails as a
/// generic invalid argument: the value under test is no longer the
/// caller's original, so out-of-range semantics would mislead consumers
/// inspecting the error.
fn order_violation<T: fmt::Display>(argument: &Argument<T>, message: String) -> GuardError {
    let value = argument.display_value();
    if argument.is_modified() {
        GuardError::invalid_argument(argument.name(), value, message)
    } else {
        GuardError::out_of_range(argument.name(), value, message)
    }
}
