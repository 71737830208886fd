//! Amount parsing for matched number tokens.
//!
//! A token is a grouped or plain integer with an optional fractional part,
//! using either `.` or `,` as separator (`1,000`, `1.000,50`, `150.99`).

/// Parse a matched number token into a positive finite amount.
pub fn parse_amount(token: &str) -> Option<f64> {
    parse_number(token).filter(|value| *value > 0.0)
}

/// Parse a matched number token into a finite number, zero included.
///
/// Thousands separators are stripped first: a `.` or `,` followed by
/// exactly three digits and then a word boundary. Any separator left over
/// is the decimal separator.
pub fn parse_number(token: &str) -> Option<f64> {
    let normalized: String = strip_thousands(token)
        .chars()
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Remove thousands separators from a number token.
///
/// `1.000` and `1,000` lose their separator; `150.99` keeps it because only
/// two digits follow.
pub fn strip_thousands(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let mut out = String::with_capacity(token.len());

    for (idx, &c) in chars.iter().enumerate() {
        if matches!(c, '.' | ',') && starts_thousands_group(&chars[idx + 1..]) {
            continue;
        }
        out.push(c);
    }

    out
}

/// Exactly three digits followed by a word boundary (end of token or a
/// non-word character).
fn starts_thousands_group(rest: &[char]) -> bool {
    rest.len() >= 3
        && rest[..3].iter().all(char::is_ascii_digit)
        && rest
            .get(3)
            .is_none_or(|next| !(next.is_alphanumeric() || *next == '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_grouping_separators() {
        assert_eq!(strip_thousands("1,000"), "1000");
        assert_eq!(strip_thousands("1.000"), "1000");
        assert_eq!(strip_thousands("1,000,000"), "1000000");
        assert_eq!(strip_thousands("1.000,50"), "1000,50");
        assert_eq!(strip_thousands("1,234.5"), "1234.5");
    }

    #[test]
    fn keeps_fractional_separators() {
        assert_eq!(strip_thousands("150.99"), "150.99");
        assert_eq!(strip_thousands("12,5"), "12,5");
        // Four digits after the separator is not a thousands group.
        assert_eq!(strip_thousands("1.5000"), "1.5000");
    }

    #[test]
    fn parses_mixed_conventions() {
        assert_eq!(parse_amount("150"), Some(150.0));
        assert_eq!(parse_amount("150.99"), Some(150.99));
        assert_eq!(parse_amount("1.000"), Some(1000.0));
        assert_eq!(parse_amount("1.000,50"), Some(1000.5));
        assert_eq!(parse_amount("1,234.5"), Some(1234.5));
        assert_eq!(parse_amount("12,50"), Some(12.5));
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("0.00"), None);
    }

    #[test]
    fn range_bounds_may_be_zero() {
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number("1.000,50"), Some(1000.5));
    }
}
