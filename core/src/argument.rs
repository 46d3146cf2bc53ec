//! The argument wrapper.
//!
//! An [`Argument`] is an immutable carrier of a value plus its validation
//! provenance: a display name, a `modified` flag recording whether the value
//! was derived from the caller's original argument, and a `secure` flag
//! suppressing the value from diagnostic output. Construction performs no
//! validation; the wrapper is threaded through a chain of guard calls and
//! discarded when the last one returns.

use std::any::type_name;
use std::fmt;

use crate::error::{GuardError, GuardResult};
use crate::messages;

/// An immutable carrier of an argument value plus validation provenance.
///
/// Both "always present" and "may be absent" arguments share one internal
/// representation, so every guard has a single implementation and identical
/// absence semantics: an absent value satisfies every ordering and shape
/// guard vacuously. Presence is asserted separately with
/// [`require`](Self::require).
///
/// ```
/// use ward_core::Argument;
///
/// let port = Argument::new(8080u16).named("port");
/// assert_eq!(port.name(), "port");
/// assert!(port.has_value());
/// ```
#[derive(Clone)]
pub struct Argument<T> {
    value: Option<T>,
    name: String,
    modified: bool,
    secure: bool,
}

impl<T> Argument<T> {
    /// Wrap a value that is known to be present.
    pub fn new(value: T) -> Self {
        Self::from_option(Some(value))
    }

    /// Wrap a value that may be absent.
    pub fn optional(value: Option<T>) -> Self {
        Self::from_option(value)
    }

    fn from_option(value: Option<T>) -> Self {
        Self {
            value,
            name: default_name::<T>(),
            modified: false,
            secure: false,
        }
    }

    /// Set the display name.
    ///
    /// An empty name is ignored; the deterministic default derived from the
    /// payload type is kept instead, so [`name`](Self::name) never returns
    /// an empty string.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.name = name;
        }
        self
    }

    /// Mark the value as derived from the caller's original argument.
    ///
    /// Ordering and range guards classify failures on modified arguments as
    /// generic invalid-argument failures instead of out-of-range, since the
    /// value under test is no longer the caller's own.
    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }

    /// Exclude the value from diagnostic output.
    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    /// The display name of the argument. Never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the value was derived before wrapping.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Whether the value is excluded from diagnostic output.
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Whether a value is present.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The payload, if present, without signaling.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Unwrap the carrier, yielding the payload if present.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Require the value to be present, unwrapping the payload.
    ///
    /// Fails with a missing-value error when the value is absent. This is
    /// the only guard that asserts presence; ordering and shape guards
    /// treat absence as vacuously satisfied.
    pub fn require(self) -> GuardResult<T> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(GuardError::missing_value(
                &self.name,
                messages::missing_value(&self.name),
            )),
        }
    }

    /// Require the value to be absent.
    pub fn absent(self) -> GuardResult<Self> {
        if self.value.is_some() {
            return Err(GuardError::invalid_argument(
                &self.name,
                None,
                messages::must_be_absent(&self.name),
            ));
        }
        Ok(self)
    }
}

impl<T: fmt::Display> Argument<T> {
    /// Render the payload for diagnostics.
    ///
    /// Returns `None` when the value is absent or the argument is secure.
    /// Every disclosure decision in the guard crates goes through here.
    pub fn display_value(&self) -> Option<String> {
        if self.secure {
            return None;
        }
        self.value.as_ref().map(T::to_string)
    }
}

impl<T: fmt::Debug> fmt::Debug for Argument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Argument");
        s.field("name", &self.name);
        if self.secure {
            s.field("value", &"<secure>");
        } else {
            s.field("value", &self.value);
        }
        s.field("modified", &self.modified);
        s.field("secure", &self.secure);
        s.finish()
    }
}

/// Deterministic fallback name for unnamed arguments of type `T`.
fn default_name<T>() -> String {
    format!("the {} argument", type_name::<T>())
}

/// Wrap a value, naming it after the call-site expression.
///
/// ```
/// use ward_core::arg;
///
/// let port = 8080u16;
/// let wrapped = arg!(port);
/// assert_eq!(wrapped.name(), "port");
///
/// let token = "s3cret";
/// let wrapped = arg!(token, secure);
/// assert!(wrapped.is_secure());
/// ```
#[macro_export]
macro_rules! arg {
    ($value:expr) => {
        $crate::Argument::new($value).named(stringify!($value))
    };
    ($value:expr, secure) => {
        $crate::Argument::new($value).named(stringify!($value)).secure()
    };
}
