//! Accessors that fall back to a caller-supplied default.
//!
//! The plain accessors ([`int`], [`float`], ...) never fail. An unset,
//! empty or malformed variable yields the default. A malformed value is
//! logged at `warn` and otherwise dropped.
//!
//! The `try_*` accessors also substitute the default for an unset
//! variable, but hand a malformed value back as an [`EnvError`].
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use trogon_env::lookup;
//! use trogon_env::source::SystemEnv;
//!
//! let timeout = lookup::duration(&SystemEnv, "TROGON_ENV_DOC_UNSET_TIMEOUT", Duration::from_secs(10));
//! assert_eq!(timeout, Duration::from_secs(10));
//! ```
//!
//! [`EnvError`]: crate::EnvError

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, warn};

use crate::checked;
use crate::error::Result;
use crate::source::ReadEnv;

fn or_default<T>(name: &str, outcome: Result<Option<T>>, default: T) -> T {
    match outcome {
        Ok(Some(value)) => value,
        Ok(None) => {
            debug!("{name} is not set, using default");
            default
        }
        Err(err) => {
            warn!(
                error = %err,
                "{}={:?} is not a valid {}, using default",
                err.name(),
                err.value(),
                err.kind()
            );
            default
        }
    }
}

pub fn string<E: ReadEnv + ?Sized>(env: &E, name: &str, default: impl Into<String>) -> String {
    match checked::string(env, name) {
        Some(value) => value,
        None => {
            debug!("{name} is not set, using default");
            default.into()
        }
    }
}

pub fn int<E: ReadEnv + ?Sized>(env: &E, name: &str, default: i64) -> i64 {
    or_default(name, checked::int(env, name), default)
}

pub fn float<E: ReadEnv + ?Sized>(env: &E, name: &str, default: f64) -> f64 {
    or_default(name, checked::float(env, name), default)
}

pub fn duration<E: ReadEnv + ?Sized>(env: &E, name: &str, default: Duration) -> Duration {
    or_default(name, checked::duration(env, name), default)
}

pub fn parse<T, E>(env: &E, name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
    E: ReadEnv + ?Sized,
{
    or_default(name, checked::parse(env, name), default)
}

pub fn try_int<E: ReadEnv + ?Sized>(env: &E, name: &str, default: i64) -> Result<i64> {
    Ok(checked::int(env, name)?.unwrap_or(default))
}

pub fn try_float<E: ReadEnv + ?Sized>(env: &E, name: &str, default: f64) -> Result<f64> {
    Ok(checked::float(env, name)?.unwrap_or(default))
}

pub fn try_duration<E: ReadEnv + ?Sized>(
    env: &E,
    name: &str,
    default: Duration,
) -> Result<Duration> {
    Ok(checked::duration(env, name)?.unwrap_or(default))
}

pub fn try_parse<T, E>(env: &E, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    E: ReadEnv + ?Sized,
{
    Ok(checked::parse(env, name)?.unwrap_or(default))
}
