//! Crate-root accessors against the real process environment.
//!
//! Every test mutates the same variable, so they run under `#[serial]`.

use std::time::Duration;

use serial_test::serial;
use trogon_env::{EnvError, format_duration};

const VAR: &str = "TROGON_ENV_IT_MY_VAR";

fn set(value: &str) {
    unsafe {
        std::env::set_var(VAR, value);
    }
}

fn unset() {
    unsafe {
        std::env::remove_var(VAR);
    }
}

#[test]
#[serial]
fn int_when_set() {
    set("42");
    assert_eq!(trogon_env::int(VAR, 0), 42);
    assert_eq!(trogon_env::check_int(VAR), Ok(Some(42)));
    unset();
}

#[test]
#[serial]
fn int_when_not_set() {
    unset();
    assert_eq!(trogon_env::int(VAR, 0), 0);
    assert_eq!(trogon_env::check_int(VAR), Ok(None));
    assert_eq!(trogon_env::try_int(VAR, 5), Ok(5));
}

#[test]
#[serial]
fn int_when_not_an_integer() {
    set("not an integer");
    assert_eq!(trogon_env::int(VAR, 42), 42);
    assert!(matches!(
        trogon_env::check_int(VAR),
        Err(EnvError::InvalidInt { .. })
    ));
    assert!(trogon_env::try_int(VAR, 42).is_err());
    unset();
}

#[test]
#[serial]
fn float_round_trips() {
    set("2.5");
    assert_eq!(trogon_env::float(VAR, 0.0), 2.5);

    set("not a float");
    assert_eq!(trogon_env::float(VAR, 2.5), 2.5);
    assert!(trogon_env::check_float(VAR).is_err());

    set("1e400");
    assert_eq!(trogon_env::float(VAR, 2.5), 2.5);
    assert!(matches!(
        trogon_env::check_float(VAR),
        Err(EnvError::FloatOutOfRange { .. })
    ));
    unset();
}

#[test]
#[serial]
fn duration_when_set() {
    let value = Duration::from_secs(90 * 60);
    set(&format_duration(value));
    assert_eq!(trogon_env::duration(VAR, Duration::ZERO), value);
    assert_eq!(trogon_env::check_duration(VAR), Ok(Some(value)));
    unset();
}

#[test]
#[serial]
fn duration_when_not_set_or_malformed() {
    unset();
    let default = Duration::from_secs(60);
    assert_eq!(trogon_env::duration(VAR, default), default);

    set("not a duration");
    assert_eq!(trogon_env::duration(VAR, default), default);
    assert!(trogon_env::try_duration(VAR, default).is_err());
    unset();
}

#[test]
#[serial]
fn string_when_set_and_empty() {
    set("hello");
    assert_eq!(trogon_env::string(VAR, ""), "hello");
    assert_eq!(trogon_env::check_string(VAR), Some("hello".to_string()));

    set("");
    assert_eq!(trogon_env::string(VAR, "fallback"), "fallback");
    assert_eq!(trogon_env::check_string(VAR), None);
    unset();
}

#[test]
#[serial]
fn parse_generic_types() {
    set("8080");
    assert_eq!(trogon_env::parse::<u16>(VAR, 80), 8080);
    assert_eq!(trogon_env::check_parse::<u16>(VAR), Ok(Some(8080)));
    assert_eq!(trogon_env::try_parse::<u16>(VAR, 80), Ok(8080));
    unset();
}

#[test]
#[serial]
fn repeated_reads_are_stable() {
    set("1h30m");
    let first = trogon_env::check_duration(VAR);
    let second = trogon_env::check_duration(VAR);
    assert_eq!(first, second);
    unset();
}
