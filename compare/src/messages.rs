//! Default diagnostic messages for ordering and range guards.
//!
//! A violation implies a present value, so a missing rendering means the
//! argument is secure and the neutral fallback is used instead.

use std::fmt::Display;

use ward_core::messages::secure_invalid;
use ward_core::Argument;

pub(crate) fn min<T: Display>(argument: &Argument<T>, bound: &T) -> String {
    match argument.display_value() {
        Some(value) => format!(
            "{} must be greater than or equal to {}, but was {}.",
            argument.name(),
            bound,
            value
        ),
        None => secure_invalid(argument.name()),
    }
}

pub(crate) fn max<T: Display>(argument: &Argument<T>, bound: &T) -> String {
    match argument.display_value() {
        Some(value) => format!(
            "{} must be less than or equal to {}, but was {}.",
            argument.name(),
            bound,
            value
        ),
        None => secure_invalid(argument.name()),
    }
}

pub(crate) fn greater_than<T: Display>(argument: &Argument<T>, bound: &T) -> String {
    match argument.display_value() {
        Some(value) => format!(
            "{} must be greater than {}, but was {}.",
            argument.name(),
            bound,
            value
        ),
        None => secure_invalid(argument.name()),
    }
}

pub(crate) fn less_than<T: Display>(argument: &Argument<T>, bound: &T) -> String {
    match argument.display_value() {
        Some(value) => format!(
            "{} must be less than {}, but was {}.",
            argument.name(),
            bound,
            value
        ),
        None => secure_invalid(argument.name()),
    }
}

pub(crate) fn in_range<T: Display>(argument: &Argument<T>, low: &T, high: &T) -> String {
    match argument.display_value() {
        Some(value) => format!(
            "{} must be between {} and {}, but was {}.",
            argument.name(),
            low,
            high,
            value
        ),
        None => secure_invalid(argument.name()),
    }
}
