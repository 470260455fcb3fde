//! Duration grammar: concatenated `<decimal><unit>` components.
//!
//! Accepted units are `ns`, `us` (or `µs` / `μs`), `ms`, `s`, `m` and `h`.
//! Components may carry a fraction (`1.5h`) and may repeat in any order
//! (`1h30m`, `2h45m30.5s`). A single leading sign applies to the whole
//! string; only zero may be negative since [`Duration`] is unsigned.

use std::time::Duration;

use thiserror::Error;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;

/// Fraction digits past this are below nanosecond resolution for every unit.
const MAX_FRACTION_DIGITS: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDurationError {
    #[error("empty duration")]
    Empty,

    #[error("invalid duration {input:?}")]
    Invalid { input: String },

    #[error("missing unit in duration {input:?}")]
    MissingUnit { input: String },

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {input:?} is out of range")]
    Overflow { input: String },

    #[error("negative duration {input:?} is not supported")]
    Negative { input: String },
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// `None` on overflow.
fn component_nanos(whole: &str, fraction: &str, scale: u64) -> Option<u64> {
    let whole = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().ok()?
    };
    let mut nanos = whole.checked_mul(scale)?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let numerator = fraction.parse::<u128>().ok()?;
        let denominator = 10u128.pow(fraction.len() as u32);
        let part = numerator * u128::from(scale) / denominator;
        nanos = nanos.checked_add(u64::try_from(part).ok()?)?;
    }
    Some(nanos)
}

/// Parses strings such as `300ms`, `1.5h` or `2h45m`.
///
/// A bare `0` is accepted without a unit. Fractions finer than a
/// nanosecond are truncated.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use trogon_env::duration::parse_duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(90 * 60));
/// assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
/// assert!(parse_duration("soon").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, ParseDurationError> {
    if input.is_empty() {
        return Err(ParseDurationError::Empty);
    }
    let invalid = || ParseDurationError::Invalid {
        input: input.to_string(),
    };
    let overflow = || ParseDurationError::Overflow {
        input: input.to_string(),
    };

    let (negative, mut rest) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, remaining) = after_number.split_at(unit_len);
        if unit.is_empty() {
            return Err(ParseDurationError::MissingUnit {
                input: input.to_string(),
            });
        }
        let scale = unit_nanos(unit).ok_or_else(|| ParseDurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let nanos = component_nanos(whole, fraction, scale).ok_or_else(overflow)?;
        total = total.checked_add(nanos).ok_or_else(overflow)?;
        rest = remaining;
    }

    if negative && total != 0 {
        return Err(ParseDurationError::Negative {
            input: input.to_string(),
        });
    }
    Ok(Duration::from_nanos(total))
}

/// Renders `duration` in the form [`parse_duration`] reads back.
///
/// The round trip holds up to `u64::MAX` nanoseconds (about 584 years).
/// Longer durations still format, but parsing the result reports
/// [`ParseDurationError::Overflow`].
///
/// Sub-second values use the largest fitting unit (`1.5µs`, `250ms`).
/// Anything longer is written as hours, minutes and seconds, with leading
/// zero units omitted (`1h30m0s`, `2m0.5s`, `45s`).
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    let sec = u128::from(NANOS_PER_SEC);
    if nanos < sec {
        let (scale, unit) = if nanos < u128::from(NANOS_PER_MICRO) {
            (1, "ns")
        } else if nanos < u128::from(NANOS_PER_MILLI) {
            (u128::from(NANOS_PER_MICRO), "µs")
        } else {
            (u128::from(NANOS_PER_MILLI), "ms")
        };
        return format!("{}{unit}", decimal(nanos, scale));
    }

    let total_secs = nanos / sec;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60 * sec + nanos % sec;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&decimal(seconds, sec));
    out.push('s');
    out
}

fn decimal(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
