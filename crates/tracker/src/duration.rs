//! Duration literals such as `1h30m`, `40m` or `1.5h`.
//!
//! A literal is an optional sign followed by one or more `<decimal><unit>`
//! terms. Units are `ns`, `us` (also `µs`/`μs`), `ms`, `s`, `m` and `h`.
//! The bare literal `0` is accepted without a unit.

use thiserror::Error;
use time::Duration;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Largest magnitude a literal may describe; `-` literals may reach one more.
const MAX_NANOS: u64 = i64::MAX as u64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,

    #[error("expected number in duration {0:?}")]
    MissingNumber(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Parses a duration literal into a signed [`Duration`].
///
/// Negative literals are valid here; rejecting non-positive durations is up
/// to the caller.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(if input.is_empty() {
            DurationParseError::Empty
        } else {
            DurationParseError::MissingNumber(input.to_string())
        });
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let overflow = || DurationParseError::Overflow(input.to_string());

        // Integer part.
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let int_digits = &rest[..int_len];
        rest = &rest[int_len..];

        // Fractional part. Digits beyond what fits in the scale are dropped.
        let mut frac: u64 = 0;
        let mut scale: u64 = 1;
        let mut frac_len = 0;
        if let Some(after_dot) = rest.strip_prefix('.') {
            frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            for digit in after_dot[..frac_len].bytes() {
                if let (Some(f), Some(s)) = (frac.checked_mul(10), scale.checked_mul(10)) {
                    frac = f + u64::from(digit - b'0');
                    scale = s;
                }
            }
            rest = &after_dot[frac_len..];
        }

        if int_len == 0 && frac_len == 0 {
            return Err(DurationParseError::MissingNumber(input.to_string()));
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(DurationParseError::MissingUnit(input.to_string()));
        }
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];
        let per_unit = unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole: u64 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| overflow())?
        };
        let mut term = whole.checked_mul(per_unit).ok_or_else(overflow)?;
        if frac > 0 {
            let fractional = (frac as f64 * (per_unit as f64 / scale as f64)) as u64;
            term = term.checked_add(fractional).ok_or_else(overflow)?;
        }
        total = total.checked_add(term).ok_or_else(overflow)?;
        if total > MAX_NANOS + u64::from(negative) {
            return Err(overflow());
        }
    }

    if negative {
        // `total` may be exactly 2^63 here, which only fits once negated.
        Ok(Duration::nanoseconds(0i64.wrapping_sub_unsigned(total)))
    } else {
        Ok(Duration::nanoseconds(total as i64))
    }
}

/// Length of `duration` in fractional hours.
pub fn hours(duration: Duration) -> f64 {
    duration.as_seconds_f64() / 3600.0
}

/// Length of `duration` in fractional minutes.
pub fn minutes(duration: Duration) -> f64 {
    duration.as_seconds_f64() / 60.0
}

/// Renders a duration as `H.MM`: whole hours, then leftover whole minutes
/// padded to two digits. `1h30m` renders as `1.30`, `40m` as `0.40`.
pub fn format_hours_minutes(duration: Duration) -> String {
    let hours = duration.whole_hours();
    let minutes = duration.whole_minutes() % 60;
    format!("{hours}.{minutes:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_units() {
        assert_eq!(parse_duration("40m").unwrap(), Duration::minutes(40));
        assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration("90s").unwrap(), Duration::seconds(90));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::milliseconds(250));
        assert_eq!(parse_duration("7us").unwrap(), Duration::microseconds(7));
        assert_eq!(parse_duration("7µs").unwrap(), Duration::microseconds(7));
        assert_eq!(parse_duration("12ns").unwrap(), Duration::nanoseconds(12));
    }

    #[test]
    fn test_parse_composed_terms() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
        assert_eq!(
            parse_duration("1h15m30s").unwrap(),
            Duration::seconds(3600 + 15 * 60 + 30)
        );
        // Units may repeat and appear in any order.
        assert_eq!(parse_duration("30m1h").unwrap(), Duration::minutes(90));
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration(".5m").unwrap(), Duration::seconds(30));
        assert_eq!(parse_duration("2.m").unwrap(), Duration::minutes(2));
        assert_eq!(parse_duration("0.25s").unwrap(), Duration::milliseconds(250));
    }

    #[test]
    fn test_parse_signs_and_zero() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("0s").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("+40m").unwrap(), Duration::minutes(40));
        assert_eq!(parse_duration("-40m").unwrap(), Duration::minutes(-40));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_duration(""), Err(DurationParseError::Empty));
        assert!(matches!(
            parse_duration("-"),
            Err(DurationParseError::MissingNumber(_))
        ));
        assert!(matches!(
            parse_duration("40"),
            Err(DurationParseError::MissingUnit(_))
        ));
        assert!(matches!(
            parse_duration("h"),
            Err(DurationParseError::MissingNumber(_))
        ));
        assert!(matches!(
            parse_duration("1d"),
            Err(DurationParseError::UnknownUnit { .. })
        ));
        assert!(matches!(
            parse_duration("1h 30m"),
            Err(DurationParseError::UnknownUnit { .. })
        ));
        assert!(matches!(
            parse_duration("abc"),
            Err(DurationParseError::MissingNumber(_))
        ));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            parse_duration("9999999999h"),
            Err(DurationParseError::Overflow(_))
        ));
        assert!(matches!(
            parse_duration("99999999999999999999ns"),
            Err(DurationParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_hours_and_minutes() {
        let d = Duration::minutes(90);
        assert!((hours(d) - 1.5).abs() < 1e-12);
        assert!((minutes(d) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_format_hours_minutes() {
        assert_eq!(format_hours_minutes(Duration::minutes(40)), "0.40");
        assert_eq!(format_hours_minutes(Duration::minutes(90)), "1.30");
        assert_eq!(format_hours_minutes(Duration::minutes(125)), "2.05");
        assert_eq!(format_hours_minutes(Duration::seconds(59)), "0.00");
        assert_eq!(format_hours_minutes(Duration::hours(10)), "10.00");
    }
}
