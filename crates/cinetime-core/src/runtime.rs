//! Runtime (wall-clock) parsing and rendering.
//!
//! Grammar: `[-]?(HH:)?(MM:)?SS[.fraction]`. Rendering trims trailing zeros
//! from the fraction, emitting a bare `.0` when it is exactly zero.

use num_rational::Rational64;
use smallvec::SmallVec;

use crate::error::TimecodeError;
use crate::rounding::divrem_i64;

// Field values and fraction digits are capped so the exact math stays
// inside i64.
const MAX_FIELD_VALUE: i64 = 999_999_999;
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse runtime text into exact seconds.
pub(crate) fn parse(text: &str) -> Result<Rational64, TimecodeError> {
    let err = || TimecodeError::UnrecognizedFormat {
        kind: "runtime",
        text: text.to_string(),
    };
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if body.is_empty() {
        return Err(err());
    }

    let mut fields: SmallVec<[&str; 3]> = SmallVec::new();
    for field in body.split(':') {
        fields.push(field);
    }
    if fields.len() > 3 {
        return Err(err());
    }

    // Only the final (seconds) section may carry a fraction.
    let seconds_field = fields.pop().expect("split yields at least one field");
    let (whole_text, fraction) = match seconds_field.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (seconds_field, None),
    };

    let mut seconds = Rational64::from_integer(parse_field(whole_text).ok_or_else(err)?);
    if let Some(fraction) = fraction {
        seconds += parse_fraction(fraction).ok_or_else(err)?;
    }

    let mut multiplier = 60;
    for field in fields.iter().rev() {
        let value = parse_field(field).ok_or_else(err)?;
        seconds += Rational64::from_integer(value * multiplier);
        multiplier *= 60;
    }

    Ok(if negative { -seconds } else { seconds })
}

fn parse_field(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = text.parse().ok()?;
    (value <= MAX_FIELD_VALUE).then_some(value)
}

fn parse_fraction(text: &str) -> Option<Rational64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Digits beyond the cap are below any frame's duration; drop them.
    let text = &text[..text.len().min(MAX_FRACTION_DIGITS)];
    let numer: i64 = text.parse().ok()?;
    Some(Rational64::new(numer, 10_i64.pow(text.len() as u32)))
}

/// Render exact seconds as runtime text with up to `precision` fractional
/// digits.
pub(crate) fn render(seconds: Rational64, precision: usize) -> String {
    let negative = seconds < Rational64::from_integer(0);
    let seconds = if negative { -seconds } else { seconds };

    let mut whole = seconds.floor().to_integer();
    let fraction = seconds - Rational64::from_integer(whole);
    let (mut digits, carry) = fraction_digits(fraction, precision);
    if carry {
        whole += 1;
    }
    if digits.is_empty() {
        digits.push(b'0');
    }

    let (hours, remainder) = divrem_i64(whole, 3600);
    let (minutes, seconds_whole) = divrem_i64(remainder, 60);
    let sign = if negative { "-" } else { "" };
    let fraction_text = String::from_utf8(digits).expect("digits are ascii");
    format!("{sign}{hours:02}:{minutes:02}:{seconds_whole:02}.{fraction_text}")
}

// Decimal expansion of `fraction` (in [0, 1)) to `precision` digits, rounded
// half away from zero on the digit past the last, trailing zeros trimmed.
// The flag reports a carry into the whole seconds.
fn fraction_digits(fraction: Rational64, precision: usize) -> (Vec<u8>, bool) {
    let mut numer = *fraction.numer() as i128;
    let denom = *fraction.denom() as i128;
    let mut digits: Vec<u8> = Vec::with_capacity(precision + 1);

    for _ in 0..precision {
        numer *= 10;
        digits.push(b'0' + (numer / denom) as u8);
        numer %= denom;
    }

    // Peek one further digit to decide the final rounding.
    numer *= 10;
    if numer / denom >= 5 {
        let mut index = digits.len();
        loop {
            if index == 0 {
                digits.clear();
                return (digits, true);
            }
            index -= 1;
            if digits[index] == b'9' {
                digits[index] = b'0';
            } else {
                digits[index] += 1;
                break;
            }
        }
    }

    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }
    (digits, false)
}
