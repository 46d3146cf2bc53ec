//! Failure-shape assertion helpers.

use std::fmt::Debug;

use ward_core::{GuardError, GuardResult};

/// Unwrap a guard failure, panicking if the guard passed.
pub fn expect_violation<T: Debug>(result: GuardResult<T>) -> GuardError {
    match result {
        Ok(value) => panic!("expected a violation, but the guard passed: {:?}", value),
        Err(err) => err,
    }
}

/// Unwrap a guard failure and assert it is classified out-of-range.
pub fn expect_out_of_range<T: Debug>(result: GuardResult<T>) -> GuardError {
    let err = expect_violation(result);
    assert!(
        err.is_out_of_range(),
        "expected an out-of-range failure, got: {:?}",
        err
    );
    err
}

/// Unwrap a guard failure and assert it is a generic invalid argument.
pub fn expect_invalid_argument<T: Debug>(result: GuardResult<T>) -> GuardError {
    let err = expect_violation(result);
    assert!(
        err.is_invalid_argument(),
        "expected an invalid-argument failure, got: {:?}",
        err
    );
    err
}

/// Unwrap a guard failure and assert it is a missing value.
pub fn expect_missing_value<T: Debug>(result: GuardResult<T>) -> GuardError {
    let err = expect_violation(result);
    assert!(
        err.is_missing_value(),
        "expected a missing-value failure, got: {:?}",
        err
    );
    err
}
