//! Prefix, suffix and regular-expression guards.

use std::fmt;

use regex_lite::Regex;
use ward_core::{Argument, GuardResult};

use crate::check::check;
use crate::messages;

/// Chainable pattern guards for string-payload argument values.
///
/// Regular-expression guards take a compiled [`Regex`]; the engine never
/// compiles patterns itself, so there is no pattern-compilation failure to
/// misclassify as a validation failure.
///
/// Pattern violations are generic invalid-argument failures like every
/// other shape violation, and an absent value satisfies every guard
/// vacuously.
pub trait PatternGuards: Sized {
    /// Require the value to start with `prefix`.
    fn starts_with(self, prefix: &str) -> GuardResult<Self>;

    /// Same as [`starts_with`](Self::starts_with), with a caller-supplied
    /// message factory receiving the offending value and the prefix.
    fn starts_with_with<F>(self, prefix: &str, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String;

    /// Require the value not to start with `prefix`.
    fn does_not_start_with(self, prefix: &str) -> GuardResult<Self>;

    /// Same as [`does_not_start_with`](Self::does_not_start_with), with a
    /// caller-supplied message factory.
    fn does_not_start_with_with<F>(self, prefix: &str, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String;

    /// Require the value to end with `suffix`.
    fn ends_with(self, suffix: &str) -> GuardResult<Self>;

    /// Same as [`ends_with`](Self::ends_with), with a caller-supplied
    /// message factory.
    fn ends_with_with<F>(self, suffix: &str, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String;

    /// Require the value not to end with `suffix`.
    fn does_not_end_with(self, suffix: &str) -> GuardResult<Self>;

    /// Same as [`does_not_end_with`](Self::does_not_end_with), with a
    /// caller-supplied message factory.
    fn does_not_end_with_with<F>(self, suffix: &str, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String;

    /// Require the regular expression to find a match in the value.
    fn matches(self, pattern: &Regex) -> GuardResult<Self>;

    /// Same as [`matches`](Self::matches), with a caller-supplied message
    /// factory receiving the offending value and the pattern source.
    fn matches_with<F>(self, pattern: &Regex, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String;

    /// Require the regular expression to find no match in the value.
    fn does_not_match(self, pattern: &Regex) -> GuardResult<Self>;

    /// Same as [`does_not_match`](Self::does_not_match), with a
    /// caller-supplied message factory.
    fn does_not_match_with<F>(self, pattern: &Regex, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String;
}

impl<T> PatternGuards for Argument<T>
where
    T: AsRef<str> + fmt::Display,
{
    fn starts_with(self, prefix: &str) -> GuardResult<Self> {
        check(
            self,
            |value| !value.starts_with(prefix),
            |argument, _| messages::starts_with(argument, prefix),
        )
    }

    fn starts_with_with<F>(self, prefix: &str, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String,
    {
        check(
            self,
            |value| !value.starts_with(prefix),
            |_, value| message(value, prefix),
        )
    }

    fn does_not_start_with(self, prefix: &str) -> GuardResult<Self> {
        check(
            self,
            |value| value.starts_with(prefix),
            |argument, _| messages::does_not_start_with(argument, prefix),
        )
    }

    fn does_not_start_with_with<F>(self, prefix: &str, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String,
    {
        check(
            self,
            |value| value.starts_with(prefix),
            |_, value| message(value, prefix),
        )
    }

    fn ends_with(self, suffix: &str) -> GuardResult<Self> {
        check(
            self,
            |value| !value.ends_with(suffix),
            |argument, _| messages::ends_with(argument, suffix),
        )
    }

    fn ends_with_with<F>(self, suffix: &str, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String,
    {
        check(
            self,
            |value| !value.ends_with(suffix),
            |_, value| message(value, suffix),
        )
    }

    fn does_not_end_with(self, suffix: &str) -> GuardResult<Self> {
        check(
            self,
            |value| value.ends_with(suffix),
            |argument, _| messages::does_not_end_with(argument, suffix),
        )
    }

    fn does_not_end_with_with<F>(self, suffix: &str, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String,
    {
        check(
            self,
            |value| value.ends_with(suffix),
            |_, value| message(value, suffix),
        )
    }

    fn matches(self, pattern: &Regex) -> GuardResult<Self> {
        check(
            self,
            |value| !pattern.is_match(value),
            |argument, _| messages::matches(argument, pattern.as_str()),
        )
    }

    fn matches_with<F>(self, pattern: &Regex, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String,
    {
        check(
            self,
            |value| !pattern.is_match(value),
            |_, value| message(value, pattern.as_str()),
        )
    }

    fn does_not_match(self, pattern: &Regex) -> GuardResult<Self> {
        check(
            self,
            |value| pattern.is_match(value),
            |argument, _| messages::does_not_match(argument, pattern.as_str()),
        )
    }

    fn does_not_match_with<F>(self, pattern: &Regex, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, &str) -> String,
    {
        check(
            self,
            |value| pattern.is_match(value),
            |_, value| message(value, pattern.as_str()),
        )
    }
}
