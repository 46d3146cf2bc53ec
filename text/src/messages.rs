//! Default diagnostic messages for the string guards.
//!
//! Every non-secure message follows the same shape:
//! `<name> must <requirement>, but was "<value>".`
//! A violation implies a present value, so a missing rendering means the
//! argument is secure and the neutral fallback is used; neither the value
//! nor the constraint parameters appear in that case.

use std::fmt::Display;

use ward_core::messages::secure_invalid;
use ward_core::Argument;

fn shaped<T: Display>(argument: &Argument<T>, requirement: &str) -> String {
    match argument.display_value() {
        Some(value) => format!(
            "{} must {}, but was \"{}\".",
            argument.name(),
            requirement,
            value
        ),
        None => secure_invalid(argument.name()),
    }
}

pub(crate) fn empty<T: Display>(argument: &Argument<T>) -> String {
    shaped(argument, "be an empty string")
}

pub(crate) fn not_empty<T: Display>(argument: &Argument<T>) -> String {
    shaped(argument, "not be an empty string")
}

pub(crate) fn whitespace_only<T: Display>(argument: &Argument<T>) -> String {
    shaped(argument, "consist only of white-space characters")
}

pub(crate) fn not_whitespace_only<T: Display>(argument: &Argument<T>) -> String {
    shaped(argument, "not consist only of white-space characters")
}

pub(crate) fn length<T: Display>(argument: &Argument<T>, length: usize) -> String {
    shaped(argument, &format!("consist of {} characters", length))
}

pub(crate) fn not_length<T: Display>(argument: &Argument<T>, length: usize) -> String {
    shaped(argument, &format!("not consist of {} characters", length))
}

pub(crate) fn min_length<T: Display>(argument: &Argument<T>, min_length: usize) -> String {
    shaped(argument, &format!("consist of at least {} characters", min_length))
}

pub(crate) fn max_length<T: Display>(argument: &Argument<T>, max_length: usize) -> String {
    shaped(argument, &format!("consist of at most {} characters", max_length))
}

pub(crate) fn starts_with<T: Display>(argument: &Argument<T>, prefix: &str) -> String {
    shaped(argument, &format!("start with \"{}\"", prefix))
}

pub(crate) fn does_not_start_with<T: Display>(argument: &Argument<T>, prefix: &str) -> String {
    shaped(argument, &format!("not start with \"{}\"", prefix))
}

pub(crate) fn ends_with<T: Display>(argument: &Argument<T>, suffix: &str) -> String {
    shaped(argument, &format!("end with \"{}\"", suffix))
}

pub(crate) fn does_not_end_with<T: Display>(argument: &Argument<T>, suffix: &str) -> String {
    shaped(argument, &format!("not end with \"{}\"", suffix))
}

pub(crate) fn matches<T: Display>(argument: &Argument<T>, pattern: &str) -> String {
    shaped(argument, &format!("match the regular expression \"{}\"", pattern))
}

pub(crate) fn does_not_match<T: Display>(argument: &Argument<T>, pattern: &str) -> String {
    shaped(
        argument,
        &format!("not match the regular expression \"{}\"", pattern),
    )
}
