//! Decimal helpers shared by the form lines

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Rounding mode for a statutory line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Half away from zero (0.005 -> 0.01)
    #[default]
    HalfUp,
    /// Any remainder rounds away from zero (0.001 -> 0.01)
    Up,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::Up => RoundingStrategy::AwayFromZero,
        }
    }
}

/// Round to cents, half up
pub fn round(value: Decimal) -> Decimal {
    round_with(value, Rounding::HalfUp)
}

/// Round to cents with an explicit mode
pub fn round_with(value: Decimal, rounding: Rounding) -> Decimal {
    value.round_dp_with_strategy(2, rounding.strategy())
}

/// `amount * pct / 100`, unrounded
pub fn percentage(amount: Decimal, pct: Decimal) -> Decimal {
    amount * pct / Decimal::ONE_HUNDRED
}

pub fn sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().sum()
}

/// Largest accepted input magnitude (exclusive). Keeps every line of the
/// form well inside `Decimal` range.
pub const MAX_INPUT_MAGNITUDE: Decimal = dec!(1000000000000000);

/// Parse a user-entered amount.
///
/// Accepts `.` or `,` as the decimal separator and spaces, dots or commas as
/// thousands grouping. Anything that is not a plain number after
/// normalization parses as zero.
pub fn parse_input_number(input: &str) -> Decimal {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Decimal::ZERO;
    }

    let Some(canonical) = canonical_number(&normalize_separators(&compact)) else {
        log::debug!("Unparseable amount {:?}, using 0", input);
        return Decimal::ZERO;
    };

    match canonical.parse::<Decimal>() {
        Ok(value) if value.abs() < MAX_INPUT_MAGNITUDE => value,
        Ok(value) => {
            log::debug!("Amount {:?} out of range ({}), using 0", input, value);
            Decimal::ZERO
        }
        Err(err) => {
            log::debug!("Amount {:?} out of range ({}), using 0", input, err);
            Decimal::ZERO
        }
    }
}

/// Rewrite grouping and decimal separators so only a single `.` remains
fn normalize_separators(s: &str) -> String {
    let dots = s.matches('.').count();
    let commas = s.matches(',').count();

    match (dots, commas) {
        (0, 0) => s.to_string(),
        (_, 0) if dots > 1 => s.replace('.', ""),
        (0, _) if commas > 1 => s.replace(',', ""),
        (0, _) => s.replace(',', "."),
        (_, 0) => s.to_string(),
        _ => {
            // the right-most separator is the decimal one
            let last_dot = s.rfind('.').unwrap_or(0);
            let last_comma = s.rfind(',').unwrap_or(0);
            let (decimal, grouping) = if last_dot > last_comma {
                ('.', ',')
            } else {
                (',', '.')
            };
            s.chars()
                .filter(|&c| c != grouping)
                .map(|c| if c == decimal { '.' } else { c })
                .collect()
        }
    }
}

/// Validate `[+-]?digits[.digits]` and return it in a form `Decimal` parses
fn canonical_number(s: &str) -> Option<String> {
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        Some(format!("{sign}{int_part}"))
    } else {
        Some(format!("{sign}{int_part}.{frac_part}"))
    }
}

/// Keep only ASCII digits (postal codes, ICO, national ID numbers)
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Remove every whitespace character (IBAN)
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
