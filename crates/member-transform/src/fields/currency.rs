//! Salary formatting and salary bucket derivation.
//!
//! Salaries are handled as exact decimals; they are never converted to
//! floating point.

use std::fmt;
use std::str::FromStr;

use member_model::FieldValue;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits in a formatted salary.
pub const SALARY_SCALE: u32 = 4;

/// Format a raw salary as currency: `"1112.2021"` becomes `"$1,112.2021"`.
///
/// The amount is rounded half-to-even to four decimal places and always
/// rendered with exactly four. Returns `None` for empty or non-numeric input.
pub fn cleanse_salary(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    match parse_decimal(raw) {
        Some(amount) => Some(format_currency(amount)),
        None => {
            tracing::warn!(value = raw, "cannot convert salary to a number");
            None
        }
    }
}

/// Most fractional digits a [`Decimal`] can hold.
const MAX_FRACTION_DIGITS: usize = 28;
/// Most integer digits a [`Decimal`] can hold.
const MAX_INTEGER_DIGITS: i64 = 29;

/// Parse a plain decimal number.
///
/// Accepts an optional sign, digits with an optional decimal point (either
/// side may be empty but not both), and an optional exponent. Surrounding
/// whitespace is ignored. Thousands separators, `NaN`, and infinities are
/// rejected, as are values too large for a [`Decimal`]. Values too small to
/// represent parse as zero.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let text = raw.trim();
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(idx) => (&text[..idx], parse_exponent(&text[idx + 1..])?),
        None => (text, 0),
    };

    let (negative, unsigned) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    // Shift the decimal point by the exponent on the digit string itself.
    let digits = format!("{int_part}{frac_part}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(Decimal::ZERO);
    }
    let leading_zeros = i64::try_from(digits.len() - significant.len()).ok()?;
    let point = i64::try_from(int_part.len())
        .ok()?
        .checked_sub(leading_zeros)?
        .checked_add(exponent)?;
    let len = i64::try_from(significant.len()).ok()?;
    if point > MAX_INTEGER_DIGITS {
        return None;
    }
    if point < 0 && point.unsigned_abs() > MAX_FRACTION_DIGITS as u64 {
        return Some(Decimal::ZERO);
    }

    let (int_digits, frac_digits) = if point <= 0 {
        let zeros = "0".repeat(usize::try_from(-point).ok()?);
        ("0".to_string(), format!("{zeros}{significant}"))
    } else if point >= len {
        let zeros = "0".repeat(usize::try_from(point - len).ok()?);
        (format!("{significant}{zeros}"), String::new())
    } else {
        let (int, frac) = significant.split_at(usize::try_from(point).ok()?);
        (int.to_string(), frac.to_string())
    };

    let sign = if negative { "-" } else { "" };
    let frac_digits = cap_fraction(&frac_digits);
    let frac_digits = if frac_digits.is_empty() { "0" } else { &frac_digits };
    Decimal::from_str(&format!("{sign}{int_digits}.{frac_digits}")).ok()
}

fn parse_exponent(raw: &str) -> Option<i64> {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.strip_prefix('+').unwrap_or(raw).parse().ok()
}

/// Cut a fraction to the digits a [`Decimal`] can hold.
///
/// The last kept digit becomes a sticky `1` when any dropped digit is
/// non-zero, so rounding to four places still sees the true side of a tie.
fn cap_fraction(frac: &str) -> String {
    if frac.len() <= MAX_FRACTION_DIGITS {
        return frac.to_string();
    }
    let (kept, dropped) = frac.split_at(MAX_FRACTION_DIGITS - 1);
    let sticky = if dropped.bytes().any(|b| b != b'0') { '1' } else { '0' };
    format!("{kept}{sticky}")
}

/// Render an amount as `$` + grouped integer part + four fractional digits.
pub fn format_currency(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointNearestEven);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((&digits, ""));
    format!(
        "${sign}{}.{frac_part:0<width$}",
        group_thousands(int_part),
        width = SALARY_SCALE as usize
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Salary band of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SalaryBucket {
    /// Below 50,000.
    A,
    /// From 50,000 up to and including 100,000.
    B,
    /// Above 100,000.
    C,
}

impl SalaryBucket {
    pub fn for_amount(amount: Decimal) -> Self {
        if amount < Decimal::from(50_000) {
            SalaryBucket::A
        } else if amount > Decimal::from(100_000) {
            SalaryBucket::C
        } else {
            SalaryBucket::B
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SalaryBucket::A => "A",
            SalaryBucket::B => "B",
            SalaryBucket::C => "C",
        }
    }
}

impl fmt::Display for SalaryBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SalaryBucket> for FieldValue {
    fn from(bucket: SalaryBucket) -> Self {
        FieldValue::Text(bucket.as_str().to_string())
    }
}

/// Bucket a formatted salary such as `"$89,000.5679"`.
pub fn derive_salary_bucket(salary: Option<&str>) -> Option<SalaryBucket> {
    let salary = salary.filter(|value| !value.is_empty())?;
    let plain: String = salary.chars().filter(|ch| !matches!(ch, '$' | ',')).collect();
    match parse_decimal(&plain) {
        Some(amount) => Some(SalaryBucket::for_amount(amount)),
        None => {
            tracing::warn!(value = salary, "cannot derive salary bucket");
            None
        }
    }
}
