//! Birth date parsing and age derivation.
//!
//! Source birth dates are digit runs without separators: the last four
//! characters are the year, the two before that the month, and whatever is
//! left at the front is the day (`"2111980"` is 2 November 1980). Days
//! written without a leading zero are only unambiguous because the month is
//! always two digits.

use chrono::{Datelike, NaiveDate};

/// Output format of cleansed birth dates.
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Convert a raw digit-run birth date to `DD/MM/YYYY`.
///
/// Returns `None` for empty input or when the decomposed day, month, and
/// year do not form a valid calendar date.
pub fn cleanse_birth_date(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    match parse_digit_run(raw) {
        Some(date) => Some(format_birth_date(date)),
        None => {
            tracing::warn!(value = raw, "invalid birth date");
            None
        }
    }
}

fn parse_digit_run(raw: &str) -> Option<NaiveDate> {
    let chars: Vec<char> = raw.chars().collect();
    let len = chars.len();
    // At least one day digit, two month digits, and four year digits.
    if len < 7 {
        return None;
    }
    let slice = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();

    let year: i32 = slice(len - 4..len).parse().ok()?;
    let month: u32 = slice(len - 6..len - 4).parse().ok()?;
    let day: u32 = slice(0..len - 6).parse().ok()?;
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn format_birth_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// Whole years between a `DD/MM/YYYY` birth date and the reference date.
///
/// A birthday that falls on the reference date counts as already passed.
/// Birth dates after the reference date give an age of 0.
pub fn derive_age(birth_date: Option<&str>, reference: NaiveDate) -> Option<i64> {
    let birth_date = birth_date.filter(|value| !value.is_empty())?;
    let born = match NaiveDate::parse_from_str(birth_date, BIRTH_DATE_FORMAT) {
        Ok(date) => date,
        Err(error) => {
            tracing::warn!(value = birth_date, %error, "cannot derive age from birth date");
            return None;
        }
    };

    let mut age = i64::from(reference.year() - born.year());
    if (reference.month(), reference.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    Some(age.max(0))
}
