//! Field decoders.
//!
//! Pure functions from a normalized text value to a typed value. Each one
//! validates its input against an entry in [`crate::patterns`] and fails
//! with `Error::Format` on mismatch.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::Result;
use crate::options::{NumberFormat, UserUrlMode};
use crate::patterns::{self, FieldPattern};
use crate::url_utils;

/// Parse `"2015年12月25日 10:30"` into a naive local date-time.
///
/// Months are 1-based as printed. No timezone conversion is applied and
/// seconds are always zero.
///
/// # Errors
///
/// Returns `Error::Format` if the text does not match the pattern or names
/// an impossible date or time.
///
/// # Example
///
/// ```rust
/// use chrono::{Datelike, Timelike};
/// use rs_kakuyomu::decode::parse_date;
///
/// let dt = parse_date("2015年12月25日 10:30")?;
/// assert_eq!((dt.year(), dt.month(), dt.day()), (2015, 12, 25));
/// assert_eq!((dt.hour(), dt.minute(), dt.second()), (10, 30, 0));
/// # Ok::<(), rs_kakuyomu::Error>(())
/// ```
pub fn parse_date(value: &str) -> Result<NaiveDateTime> {
    let pattern = &patterns::DATE;
    let caps = pattern.captures(value)?;

    let component = |i: usize| -> Result<u32> {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .ok_or_else(|| pattern.mismatch(value))
    };

    let year = i32::try_from(component(1)?).map_err(|_| pattern.mismatch(value))?;
    let (month, day) = (component(2)?, component(3)?);
    let (hour, minute) = (component(4)?, component(5)?);

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| pattern.mismatch(value))
}

/// Parse a digit string with optional `,` thousands separators.
///
/// # Errors
///
/// Returns `Error::Format` on any other character, on an input with no
/// digits, or on overflow.
///
/// # Example
///
/// ```rust
/// use rs_kakuyomu::decode::parse_separated_decimal;
///
/// assert_eq!(parse_separated_decimal("1,234,567")?, 1_234_567);
/// assert_eq!(parse_separated_decimal("1234567")?, 1_234_567);
/// # Ok::<(), rs_kakuyomu::Error>(())
/// ```
pub fn parse_separated_decimal(value: &str) -> Result<u64> {
    decode_count(&patterns::SEPARATED_DECIMAL, value, NumberFormat::Separated)
}

/// Parse a plain digit string.
///
/// # Errors
///
/// Returns `Error::Format` on any non-digit character, an empty input, or
/// overflow.
pub fn parse_integer(value: &str) -> Result<u64> {
    decode_count(&patterns::PLAIN_INTEGER, value, NumberFormat::Plain)
}

/// Match `value` against `pattern` and decode capture group 1 as a count.
///
/// With `NumberFormat::Separated` every `,` is stripped before parsing.
///
/// # Errors
///
/// Returns `Error::Format` (reported against `pattern.field`) on mismatch
/// or overflow.
pub fn decode_count(pattern: &FieldPattern, value: &str, format: NumberFormat) -> Result<u64> {
    let digits = pattern.capture(value)?;
    let parsed = match format {
        NumberFormat::Plain => digits.parse::<u64>(),
        NumberFormat::Separated => digits.replace(',', "").parse::<u64>(),
    };
    parsed.map_err(|_| pattern.mismatch(value))
}

/// Extract the handle from a bare `/users/<handle>` path.
///
/// # Errors
///
/// Returns `Error::Format` if `value` is not exactly that shape.
pub fn parse_user_path(value: &str) -> Result<String> {
    patterns::USER_PATH.capture(value).map(str::to_string)
}

/// Extract the handle from a profile link, absolute or site-relative.
///
/// Only the link's path is matched. A relative link must already be
/// exactly `/users/<handle>`; it is not resolved against any base.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` if an absolute link cannot be parsed, or
/// `Error::Format` if the path is not `/users/<handle>`.
///
/// # Example
///
/// ```rust
/// use rs_kakuyomu::decode::parse_user_url;
///
/// assert_eq!(parse_user_url("https://example.com/users/kaku-yomu")?, "kaku-yomu");
/// assert_eq!(parse_user_url("/users/kaku-yomu")?, "kaku-yomu");
/// assert!(parse_user_url("users/kaku-yomu").is_err());
/// # Ok::<(), rs_kakuyomu::Error>(())
/// ```
pub fn parse_user_url(value: &str) -> Result<String> {
    let path = url_utils::link_path(value)?;
    patterns::USER_PATH
        .capture(&path)
        .map(str::to_string)
        .map_err(|_| patterns::USER_PATH.mismatch(value))
}

/// Decode a profile link with the configured strategy.
///
/// # Errors
///
/// See [`parse_user_path`] and [`parse_user_url`].
pub fn decode_user_handle(value: &str, mode: UserUrlMode) -> Result<String> {
    match mode {
        UserUrlMode::BarePath => parse_user_path(value),
        UserUrlMode::FullUrl => parse_user_url(value),
    }
}
