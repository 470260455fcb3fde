//! Checked accessors.
//!
//! Each accessor separates the three outcomes a caller may care about:
//!
//! | Variable | Return |
//! |----------|--------|
//! | unset or empty | `Ok(None)` |
//! | set and parsable | `Ok(Some(value))` |
//! | set but malformed | `Err(EnvError)` |
//!
//! Use these when a malformed value should stop startup. The
//! [`lookup`](crate::lookup) accessors are built on top of them.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::duration::parse_duration;
use crate::error::{EnvError, Result};
use crate::source::{ReadEnv, raw_value};

/// The raw value, verbatim. Never fails: every string is a string.
pub fn string<E: ReadEnv + ?Sized>(env: &E, name: &str) -> Option<String> {
    raw_value(env, name)
}

/// Base-10 integer with an optional sign.
pub fn int<E: ReadEnv + ?Sized>(env: &E, name: &str) -> Result<Option<i64>> {
    let Some(value) = raw_value(env, name) else {
        return Ok(None);
    };
    match value.parse::<i64>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(source) => Err(EnvError::InvalidInt {
            name: name.to_string(),
            value,
            source,
        }),
    }
}

/// Spelled-out infinity; anything else that parses to infinity overflowed.
fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Base-10 floating point, optionally with an exponent (`-3.14`, `1e10`).
///
/// Values beyond the `f64` range (`1e400`) are rejected rather than
/// rounded to infinity.
pub fn float<E: ReadEnv + ?Sized>(env: &E, name: &str) -> Result<Option<f64>> {
    let Some(value) = raw_value(env, name) else {
        return Ok(None);
    };
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_infinite() && !is_infinity_literal(&value) => {
            Err(EnvError::FloatOutOfRange {
                name: name.to_string(),
                value,
            })
        }
        Ok(parsed) => Ok(Some(parsed)),
        Err(source) => Err(EnvError::InvalidFloat {
            name: name.to_string(),
            value,
            source,
        }),
    }
}

/// See [`parse_duration`] for the accepted grammar.
pub fn duration<E: ReadEnv + ?Sized>(env: &E, name: &str) -> Result<Option<Duration>> {
    let Some(value) = raw_value(env, name) else {
        return Ok(None);
    };
    match parse_duration(&value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(source) => Err(EnvError::InvalidDuration {
            name: name.to_string(),
            value,
            source,
        }),
    }
}

/// Any [`FromStr`] type, e.g. `u16` ports or `bool` flags.
///
/// ```
/// use trogon_env::checked;
/// use trogon_env::source::SystemEnv;
///
/// let port: Option<u16> = checked::parse(&SystemEnv, "TROGON_ENV_DOC_UNSET_PORT").unwrap();
/// assert_eq!(port, None);
/// ```
pub fn parse<T, E>(env: &E, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    E: ReadEnv + ?Sized,
{
    let Some(value) = raw_value(env, name) else {
        return Ok(None);
    };
    match value.parse::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => Err(EnvError::Invalid {
            name: name.to_string(),
            value,
            reason: err.to_string(),
        }),
    }
}
