//! Form-number coercion.
//!
//! Text typed into a form field is converted the way browsers coerce field
//! values to numbers: surrounding whitespace is ignored, a blank string is
//! zero, and anything that is not a complete numeric literal becomes NaN.

/// Converts raw field text into a number.
pub fn to_number(raw: &str) -> f64 {
    // Byte order marks count as whitespace in form-number coercion.
    let text = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if text.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_radix_literal(text) {
        return value;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // `f64::from_str` also accepts "inf" and "NaN", which are not numeric literals here.
    let is_decimal = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !is_decimal {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Returns `true` when the number is finite and has no fractional part.
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.trunc() == value
}

/// Parses unsigned `0x`, `0o` and `0b` literals.
///
/// Returns `None` when the text has no radix prefix and `Some(NaN)` when it
/// has one but the digits are not valid for that radix.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let mut chars = text.chars();
    if chars.next() != Some('0') {
        return None;
    }

    let radix = match chars.next() {
        Some('x' | 'X') => 16,
        Some('o' | 'O') => 8,
        Some('b' | 'B') => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.unwrap_or(f64::NAN))
}
