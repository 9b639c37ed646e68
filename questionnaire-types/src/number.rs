/// Rejection message for numeric input that cannot be parsed.
pub const INVALID_NUMBER: &str = "A valid number is expected!";

/// Parse typed text as a number the way a numeric prompt understands it.
///
/// Accepts surrounding whitespace, an optional sign, decimal and exponent
/// notation, `Infinity`, and unsigned `0x`/`0o`/`0b` integer literals.
/// Returns `None` for empty input, `NaN`, and anything with trailing garbage.
///
/// ```
/// use questionnaire_types::parse_number;
///
/// assert_eq!(parse_number(" 42 "), Some(42.0));
/// assert_eq!(parse_number("-3.5"), Some(-3.5));
/// assert_eq!(parse_number("0x1f"), Some(31.0));
/// assert_eq!(parse_number("12x"), None);
/// assert_eq!(parse_number(""), None);
/// ```
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| trimmed.strip_prefix(*p)) {
            return parse_radix(digits, radix);
        }
    }

    let negative = trimmed.starts_with('-');
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // `f64::from_str` also takes "inf" and "nan", which are not numbers here.
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        let digit = c.to_digit(radix)?;
        Some(acc * f64::from(radix) + f64::from(digit))
    })
}
