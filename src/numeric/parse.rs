// ============================================================================
// Amount Parsing
// Lenient parsing of raw field text
// ============================================================================

use super::{DECIMAL_POINT, THOUSANDS_SEPARATOR};

/// Zero-width no-break space; pasted text often starts with one
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Parse the text of an input field into an amount.
///
/// Thousands separators are stripped anywhere in the text and leading
/// whitespace (including a byte-order mark) is skipped. The longest leading decimal literal is read
/// (optional sign, digits, optional fraction, optional exponent), so text that
/// is still being typed such as `"12."` or `"3e"` keeps its numeric prefix.
///
/// Returns `None` for "no value": empty text, text without a numeric prefix,
/// or a literal that overflows to infinity. A valid zero is `Some(0.0)`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != THOUSANDS_SEPARATOR).collect();
    let trimmed = cleaned.trim_start_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
    let literal = leading_literal(trimmed);

    if literal.is_empty() {
        tracing::trace!(raw, "no numeric prefix in input");
        return None;
    }

    literal.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Slice off the longest prefix that forms a decimal float literal.
fn leading_literal(input: &str) -> &str {
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&(DECIMAL_POINT as u8)) {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits + fraction_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    &input[..end]
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_amount("56"), Some(56.0));
        assert_eq!(parse_amount("0.5"), Some(0.5));
        assert_eq!(parse_amount("-2"), Some(-2.0));
        assert_eq!(parse_amount("+7"), Some(7.0));
        assert_eq!(parse_amount(".25"), Some(0.25));
    }

    #[test]
    fn test_parse_strips_thousands_separators() {
        assert_eq!(parse_amount("1,650"), Some(1650.0));
        assert_eq!(parse_amount("1,234,567.5"), Some(1234567.5));
        assert_eq!(parse_amount("12,34"), Some(1234.0));
    }

    #[test]
    fn test_parse_empty_and_invalid_is_no_value() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount(","), None);
    }

    #[test]
    fn test_parse_zero_is_a_value() {
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("0.00"), Some(0.0));
    }

    #[test]
    fn test_parse_reads_numeric_prefix() {
        assert_eq!(parse_amount("12abc"), Some(12.0));
        assert_eq!(parse_amount("12."), Some(12.0));
        assert_eq!(parse_amount("1.5.3"), Some(1.5));
        assert_eq!(parse_amount("  42 ref"), Some(42.0));
    }

    #[test]
    fn test_parse_skips_leading_byte_order_mark() {
        assert_eq!(parse_amount("\u{FEFF}56"), Some(56.0));
        assert_eq!(parse_amount("\u{FEFF} 1,650"), Some(1650.0));
        assert_eq!(parse_amount("\u{FEFF}"), None);
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount("2.5E-1"), Some(0.25));
        assert_eq!(parse_amount("3e"), Some(3.0));
        assert_eq!(parse_amount("3e+"), Some(3.0));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert_eq!(parse_amount("1e999"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }
}
