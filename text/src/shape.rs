//! Emptiness, white-space and character-count guards.

use std::fmt;

use ward_core::{Argument, GuardResult};

use crate::check::check;
use crate::messages;

/// Chainable shape guards for string-payload argument values.
///
/// Implemented once for [`Argument<T>`] wherever the payload dereferences
/// to a string slice (`String`, `&str`, `Cow<str>`); the optional
/// construction path shares the same implementation, so an absent value
/// satisfies every guard vacuously.
///
/// Counts are character counts (Unicode scalar values), not byte counts,
/// and the count bounds are inclusive. The zero-length string satisfies
/// "consists only of white-space" vacuously.
///
/// ```
/// use ward_core::arg;
/// use ward_text::TextGuards;
///
/// let label = "backlog";
/// let label = arg!(label).not_empty()?.max_length(32)?;
/// # Ok::<(), ward_core::GuardError>(())
/// ```
pub trait TextGuards: Sized {
    /// Require the value to be the empty string.
    fn empty(self) -> GuardResult<Self>;

    /// Same as [`empty`](Self::empty), with a caller-supplied message
    /// factory receiving the offending value.
    fn empty_with<F>(self, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str) -> String;

    /// Require the value to contain at least one character.
    fn not_empty(self) -> GuardResult<Self>;

    /// Same as [`not_empty`](Self::not_empty), with a caller-supplied
    /// message factory.
    fn not_empty_with<F>(self, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str) -> String;

    /// Require every character of the value to be white-space.
    fn whitespace_only(self) -> GuardResult<Self>;

    /// Same as [`whitespace_only`](Self::whitespace_only), with a
    /// caller-supplied message factory.
    fn whitespace_only_with<F>(self, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str) -> String;

    /// Require at least one character of the value to be non-white-space.
    ///
    /// The empty string consists only of white-space vacuously, so it
    /// violates this guard.
    fn not_whitespace_only(self) -> GuardResult<Self>;

    /// Same as [`not_whitespace_only`](Self::not_whitespace_only), with a
    /// caller-supplied message factory.
    fn not_whitespace_only_with<F>(self, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str) -> String;

    /// Require the value to consist of exactly `length` characters.
    fn length(self, length: usize) -> GuardResult<Self>;

    /// Same as [`length`](Self::length), with a caller-supplied message
    /// factory receiving the offending value and the expected count.
    fn length_with<F>(self, length: usize, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, usize) -> String;

    /// Require the value to consist of any number of characters except
    /// `length`.
    fn not_length(self, length: usize) -> GuardResult<Self>;

    /// Same as [`not_length`](Self::not_length), with a caller-supplied
    /// message factory.
    fn not_length_with<F>(self, length: usize, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, usize) -> String;

    /// Require the value to consist of at least `min_length` characters
    /// (inclusive). Only the lower side is checked.
    fn min_length(self, min_length: usize) -> GuardResult<Self>;

    /// Same as [`min_length`](Self::min_length), with a caller-supplied
    /// message factory.
    fn min_length_with<F>(self, min_length: usize, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, usize) -> String;

    /// Require the value to consist of at most `max_length` characters
    /// (inclusive). Only the upper side is checked.
    fn max_length(self, max_length: usize) -> GuardResult<Self>;

    /// Same as [`max_length`](Self::max_length), with a caller-supplied
    /// message factory.
    fn max_length_with<F>(self, max_length: usize, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, usize) -> String;
}

impl<T> TextGuards for Argument<T>
where
    T: AsRef<str> + fmt::Display,
{
    fn empty(self) -> GuardResult<Self> {
        check(
            self,
            |value| !value.is_empty(),
            |argument, _| messages::empty(argument),
        )
    }

    fn empty_with<F>(self, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str) -> String,
    {
        check(self, |value| !value.is_empty(), |_, value| message(value))
    }

    fn not_empty(self) -> GuardResult<Self> {
        check(
            self,
            |value| value.is_empty(),
            |argument, _| messages::not_empty(argument),
        )
    }

    fn not_empty_with<F>(self, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str) -> String,
    {
        check(self, |value| value.is_empty(), |_, value| message(value))
    }

    fn whitespace_only(self) -> GuardResult<Self> {
        check(
            self,
            |value| !value.chars().all(char::is_whitespace),
            |argument, _| messages::whitespace_only(argument),
        )
    }

    fn whitespace_only_with<F>(self, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str) -> String,
    {
        check(
            self,
            |value| !value.chars().all(char::is_whitespace),
            |_, value| message(value),
        )
    }

    fn not_whitespace_only(self) -> GuardResult<Self> {
        check(
            self,
            |value| value.chars().all(char::is_whitespace),
            |argument, _| messages::not_whitespace_only(argument),
        )
    }

    fn not_whitespace_only_with<F>(self, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str) -> String,
    {
        check(
            self,
            |value| value.chars().all(char::is_whitespace),
            |_, value| message(value),
        )
    }

    fn length(self, length: usize) -> GuardResult<Self> {
        check(
            self,
            |value| value.chars().count() != length,
            |argument, _| messages::length(argument, length),
        )
    }

    fn length_with<F>(self, length: usize, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, usize) -> String,
    {
        check(
            self,
            |value| value.chars().count() != length,
            |_, value| message(value, length),
        )
    }

    fn not_length(self, length: usize) -> GuardResult<Self> {
        check(
            self,
            |value| value.chars().count() == length,
            |argument, _| messages::not_length(argument, length),
        )
    }

    fn not_length_with<F>(self, length: usize, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, usize) -> String,
    {
        check(
            self,
            |value| value.chars().count() == length,
            |_, value| message(value, length),
        )
    }

    fn min_length(self, min_length: usize) -> GuardResult<Self> {
        check(
            self,
            |value| value.chars().count() < min_length,
            |argument, _| messages::min_length(argument, min_length),
        )
    }

    fn min_length_with<F>(self, min_length: usize, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, usize) -> String,
    {
        check(
            self,
            |value| value.chars().count() < min_length,
            |_, value| message(value, min_length),
        )
    }

    fn max_length(self, max_length: usize) -> GuardResult<Self> {
        check(
            self,
            |value| value.chars().count() > max_length,
            |argument, _| messages::max_length(argument, max_length),
        )
    }

    fn max_length_with<F>(self, max_length: usize, message: F) -> GuardResult<Self>
    where
        F: FnOnce(&str, usize) -> String,
    {
        check(
            self,
            |value| value.chars().count() > max_length,
            |_, value| message(value, max_length),
        )
    }
}
