//! Input parsing helpers
//!
//! Presence checks live on the request types (`validator` derives); this
//! module turns the surviving raw values into typed ones and renders stored
//! dates for display.

use crate::errors::FieldError;
use crate::types::NumberOrText;
use chrono::NaiveDate;
use uuid::Uuid;

/// Storage and query format of exercise dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Human readable date format, e.g. `Wed Feb 01 2023`
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Rendered in place of a stored date that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Lower bound of a log query when `from` is not given
pub const EPOCH_DATE: &str = "1970-01-01";

/// Parse the leading integer of a string
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit, so `"30min"` yields 30. Returns `None` when no digit
/// follows. Values beyond the `i64` range saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Parse an exercise duration in minutes
pub fn parse_duration(raw: &NumberOrText) -> Result<i32, FieldError> {
    let not_a_number = |value: String| FieldError::NotANumber {
        field: "duration",
        value,
    };

    let value = match raw {
        NumberOrText::Integer(n) => Some(*n),
        NumberOrText::Float(f) if f.is_finite() => Some(f.trunc() as i64),
        NumberOrText::Float(_) => None,
        NumberOrText::Text(text) => parse_leading_int(text),
    };

    value
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| not_a_number(display_raw(raw)))
}

fn display_raw(raw: &NumberOrText) -> String {
    match raw {
        NumberOrText::Integer(n) => n.to_string(),
        NumberOrText::Float(f) => f.to_string(),
        NumberOrText::Text(text) => text.clone(),
    }
}

/// Parse the `limit` query parameter
///
/// `None` means unlimited: absent, blank, non-numeric and zero all map to it.
/// A negative limit is treated as its magnitude.
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let value = parse_leading_int(raw?)?;
    match value.unsigned_abs() {
        0 => None,
        n => Some(usize::try_from(n).unwrap_or(usize::MAX)),
    }
}

/// Resolve the date of a new exercise, defaulting to `today` when blank
pub fn resolve_exercise_date(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(today),
        Some(text) => NaiveDate::parse_from_str(text, ISO_DATE_FORMAT)
            .map_err(|_| FieldError::InvalidDate(text.to_string())),
    }
}

/// Resolve one bound of a log query
///
/// The bound is compared to stored dates as text, so a non-blank value is
/// used verbatim and only blank values fall back to `default`.
pub fn resolve_date_bound(raw: Option<&str>, default: &str) -> String {
    match raw.filter(|s| !s.is_empty()) {
        Some(text) => text.to_string(),
        None => default.to_string(),
    }
}

/// Format a date the way it is stored
pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Render a stored ISO date as `Wed Feb 01 2023`
pub fn display_date(stored: &str) -> String {
    NaiveDate::parse_from_str(stored, ISO_DATE_FORMAT)
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|_| INVALID_DATE.to_string())
}

/// Parse a user id taken from a request path
pub fn parse_user_id(raw: &str) -> Result<Uuid, FieldError> {
    Uuid::parse_str(raw.trim()).map_err(|_| FieldError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("30", Some(30))]
    #[case("  42", Some(42))]
    #[case("30min", Some(30))]
    #[case("12.9", Some(12))]
    #[case("-5", Some(-5))]
    #[case("+7", Some(7))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("-", None)]
    fn test_parse_leading_int(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_leading_int(raw), expected);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("abc"), None)]
    #[case(Some("0"), None)]
    #[case(Some("1"), Some(1))]
    #[case(Some("10"), Some(10))]
    #[case(Some("-2"), Some(2))]
    fn test_parse_limit(#[case] raw: Option<&str>, #[case] expected: Option<usize>) {
        assert_eq!(parse_limit(raw), expected);
    }

    #[test]
    fn test_parse_duration_variants() {
        assert_eq!(parse_duration(&NumberOrText::Integer(30)), Ok(30));
        assert_eq!(parse_duration(&NumberOrText::Float(45.8)), Ok(45));
        assert_eq!(parse_duration(&NumberOrText::Text("60".into())), Ok(60));
        assert!(parse_duration(&NumberOrText::Text("long".into())).is_err());
        assert!(parse_duration(&NumberOrText::Integer(i64::MAX)).is_err());
        assert!(parse_duration(&NumberOrText::Float(f64::NAN)).is_err());
    }

    #[test]
    fn test_resolve_exercise_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(resolve_exercise_date(None, today), Ok(today));
        assert_eq!(resolve_exercise_date(Some("  "), today), Ok(today));
        assert_eq!(
            resolve_exercise_date(Some("2023-02-01"), today),
            Ok(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap())
        );
        assert_eq!(
            resolve_exercise_date(Some("01/02/2023"), today),
            Err(FieldError::InvalidDate("01/02/2023".to_string()))
        );
    }

    #[test]
    fn test_resolve_date_bound() {
        assert_eq!(resolve_date_bound(None, EPOCH_DATE), "1970-01-01");
        assert_eq!(resolve_date_bound(Some(""), "2024-01-01"), "2024-01-01");
        assert_eq!(resolve_date_bound(Some("2023-01"), EPOCH_DATE), "2023-01");
    }

    #[rstest]
    #[case("2023-02-01", "Wed Feb 01 2023")]
    #[case("2024-12-30", "Mon Dec 30 2024")]
    #[case("1970-01-01", "Thu Jan 01 1970")]
    #[case("not a date", "Invalid Date")]
    fn test_display_date(#[case] stored: &str, #[case] expected: &str) {
        assert_eq!(display_date(stored), expected);
    }

    #[test]
    fn test_parse_user_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_user_id(&id.to_string()), Ok(id));
        assert!(parse_user_id("5f1b2c").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// ISO text order agrees with calendar order, which is what lets the
        /// log query compare dates as strings.
        #[test]
        fn prop_iso_text_order_matches_date_order(
            a in 0i32..200_000,
            b in 0i32..200_000
        ) {
            let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
            let da = epoch + chrono::Duration::days(a as i64);
            let db = epoch + chrono::Duration::days(b as i64);
            prop_assert_eq!(iso_date(da).cmp(&iso_date(db)), da.cmp(&db));
        }

        #[test]
        fn prop_display_round_trips_stored_dates(days in 0i64..100_000) {
            let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(days);
            let rendered = display_date(&iso_date(date));
            let parsed = NaiveDate::parse_from_str(&rendered, DISPLAY_DATE_FORMAT).unwrap();
            prop_assert_eq!(parsed, date);
        }

        #[test]
        fn prop_positive_limits_parse_exactly(n in 1usize..100_000) {
            prop_assert_eq!(parse_limit(Some(&n.to_string())), Some(n));
        }
    }
}
