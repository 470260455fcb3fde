//! Typed environment variable accessors for TrogonStack projects.
//!
//! # Quick Start
//!
//! | Want | Call | Unset / empty | Malformed |
//! |------|------|---------------|-----------|
//! | a value, never fail | [`int()`], [`float()`], [`duration()`], [`string()`], [`parse()`] | default | default (logged) |
//! | to reject bad input | [`try_int`], [`try_float`], [`try_duration`], [`try_parse`] | `Ok(default)` | `Err` |
//! | to know if it was set | [`check_int`], [`check_float`], [`check_duration`], [`check_string`], [`check_parse`] | `Ok(None)` | `Err` |
//!
//! The crate-root functions read the real process environment. The
//! [`lookup`] and [`checked`] modules expose the same operations generic
//! over [`ReadEnv`], so tests can pass an `InMemoryEnv` (available with
//! `#[cfg(test)]` or the `"test-support"` feature) instead of calling
//! `std::env::set_var`.
//!
//! ```
//! use std::time::Duration;
//!
//! let workers = trogon_env::int("TROGON_ENV_DOC_WORKERS", 4);
//! let timeout = trogon_env::duration("TROGON_ENV_DOC_TIMEOUT", Duration::from_secs(30));
//! # assert_eq!(workers, 4);
//! # assert_eq!(timeout, Duration::from_secs(30));
//! ```
//!
//! Durations use `<decimal><unit>` components such as `1h30m` or `500ms`;
//! see [`duration::parse_duration`].
//!
//! # Thread Safety
//!
//! Nothing here mutates the environment. [`SystemEnv`] is zero-sized and
//! `Send + Sync`. Concurrent `set_var` calls from elsewhere in the
//! process are the caller's problem.

pub mod checked;
pub mod duration;
pub mod error;
pub mod lookup;
pub mod source;

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

pub use duration::{ParseDurationError, format_duration, parse_duration};
pub use error::{EnvError, Result};
#[cfg(any(test, feature = "test-support"))]
pub use source::InMemoryEnv;
pub use source::{ReadEnv, SystemEnv};

/// The value of `name`, or `default` when it is unset or empty.
pub fn string(name: &str, default: impl Into<String>) -> String {
    lookup::string(&SystemEnv, name, default)
}

/// `name` as an integer. Falls back to `default` when unset, empty or
/// not an integer.
pub fn int(name: &str, default: i64) -> i64 {
    lookup::int(&SystemEnv, name, default)
}

/// `name` as a float. Falls back to `default` when unset, empty or not a
/// float.
pub fn float(name: &str, default: f64) -> f64 {
    lookup::float(&SystemEnv, name, default)
}

/// `name` as a [`Duration`]. Falls back to `default` when unset, empty or
/// not a duration.
pub fn duration(name: &str, default: Duration) -> Duration {
    lookup::duration(&SystemEnv, name, default)
}

/// `name` parsed as any [`FromStr`] type. Falls back to `default` when
/// unset, empty or unparsable.
pub fn parse<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    lookup::parse(&SystemEnv, name, default)
}

/// `None` when `name` is unset or empty.
pub fn check_string(name: &str) -> Option<String> {
    checked::string(&SystemEnv, name)
}

/// `Ok(None)` when unset or empty, `Err` when not an integer.
pub fn check_int(name: &str) -> Result<Option<i64>> {
    checked::int(&SystemEnv, name)
}

/// `Ok(None)` when unset or empty, `Err` when not a float.
pub fn check_float(name: &str) -> Result<Option<f64>> {
    checked::float(&SystemEnv, name)
}

/// `Ok(None)` when unset or empty, `Err` when not a duration.
pub fn check_duration(name: &str) -> Result<Option<Duration>> {
    checked::duration(&SystemEnv, name)
}

/// `Ok(None)` when unset or empty, `Err` when `T` cannot parse it.
pub fn check_parse<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    checked::parse(&SystemEnv, name)
}

/// `default` when unset or empty, `Err` when not an integer.
pub fn try_int(name: &str, default: i64) -> Result<i64> {
    lookup::try_int(&SystemEnv, name, default)
}

/// `default` when unset or empty, `Err` when not a float.
pub fn try_float(name: &str, default: f64) -> Result<f64> {
    lookup::try_float(&SystemEnv, name, default)
}

/// `default` when unset or empty, `Err` when not a duration.
pub fn try_duration(name: &str, default: Duration) -> Result<Duration> {
    lookup::try_duration(&SystemEnv, name, default)
}

/// `default` when unset or empty, `Err` when `T` cannot parse it.
pub fn try_parse<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    lookup::try_parse(&SystemEnv, name, default)
}
