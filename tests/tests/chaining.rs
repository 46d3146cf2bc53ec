//! Chained guards across the whole surface: linear single-pass evaluation,
//! fail-fast short-circuit, referential transparency.

use pretty_assertions::assert_eq;
use ward_tests::prelude::*;

/// A realistic guard clause: validate a listen address.
fn check_listen_target(host: &str, port: u16) -> GuardResult<(String, u16)> {
    let host = arg!(host)
        .not_empty()?
        .not_whitespace_only()?
        .max_length(253)?
        .does_not_start_with(".")?;
    let port = arg!(port).min(1024)?.max(49151)?;
    Ok((host.require()?.to_string(), port.require()?))
}

#[test]
fn test_valid_input_threads_through_the_whole_chain() {
    // GIVEN/WHEN
    let (host, port) = check_listen_target("db.internal", 5432).unwrap();

    // THEN
    assert_eq!(host, "db.internal");
    assert_eq!(port, 5432);
}

#[test]
fn test_first_violation_short_circuits() {
    // GIVEN - the empty host fails the first guard; the port guard with its
    // own violation is never reached
    let err = check_listen_target("", 80).unwrap_err();

    // THEN
    assert_eq!(err.name(), "host");
    assert!(err.is_invalid_argument());
}

#[test]
fn test_port_violation_reports_the_port() {
    // GIVEN
    let err = check_listen_target("db.internal", 80).unwrap_err();

    // THEN
    assert_eq!(err.name(), "port");
    assert!(err.is_out_of_range());
    assert!(err.message().contains("80"));
    assert!(err.message().contains("1024"));
}

#[test]
fn test_chaining_preserves_the_wrapper() {
    // GIVEN
    let quota = Argument::new(50u32).named("quota").modified();

    // WHEN - three successful guards in a row
    let quota = quota.min(1).unwrap().max(100).unwrap().in_range(10, 90).unwrap();

    // THEN - name, payload and provenance all survive
    assert_eq!(quota.name(), "quota");
    assert_eq!(quota.value(), Some(&50));
    assert!(quota.is_modified());
}

#[test]
fn test_re_evaluating_a_successful_guard_is_idempotent() {
    // GIVEN
    let mut argument = Argument::new(5i64).named("n");

    // WHEN - the same constraint applied repeatedly to its own output
    for _ in 0..10 {
        argument = argument.in_range(1, 10).unwrap();
    }

    // THEN
    assert_eq!(argument.value(), Some(&5));
}

#[test]
fn test_guards_compose_across_numeric_and_text_engines() {
    // GIVEN
    let semver = Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap();
    let version = "1.42.0";

    // WHEN
    let result = arg!(version)
        .not_empty()
        .and_then(|v| v.matches(&semver))
        .and_then(|v| v.min_length(5));

    // THEN
    assert!(result.is_ok());
}

#[test]
fn test_mixed_chain_reports_the_failing_engine() {
    // GIVEN - passes the shape guards, fails the ordering guard
    let nickname = "zz";

    // WHEN
    let err = expect_out_of_range(
        arg!(nickname)
            .not_empty()
            .and_then(|v| v.max_length(16))
            .and_then(|v| v.max("mm")),
    );

    // THEN - lexicographic max, classified by the ordering engine
    assert!(err.message().contains("zz"));
}

#[test]
fn test_custom_messages_flow_through_chains() {
    // GIVEN
    let attempts = 11u8;

    // WHEN
    let err = arg!(attempts)
        .min(1)
        .and_then(|a| a.max_with(10, |value, max| format!("{} retries exceed the cap of {}", value, max)))
        .unwrap_err();

    // THEN
    assert_eq!(err.message(), "11 retries exceed the cap of 10");
    assert!(err.is_out_of_range());
}

#[test]
fn test_require_ends_a_chain_with_the_payload() {
    // GIVEN
    let timeout = Argument::optional(Some(30u64)).named("timeout");

    // WHEN
    let timeout = timeout.in_range(1, 300).unwrap().require().unwrap();

    // THEN
    assert_eq!(timeout, 30);
}
