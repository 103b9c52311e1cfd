// ============================================================================
// Amount Formatting
// Display strings for derived field values
// ============================================================================

use super::{DECIMAL_POINT, THOUSANDS_SEPARATOR};
use rust_decimal::{Decimal, RoundingStrategy};

/// Magnitudes below this (and non-zero) are shown with fixed 4 decimals
const SMALL_AMOUNT_THRESHOLD: f64 = 0.01;

/// Decimal places for small amounts
const SMALL_AMOUNT_DECIMALS: u32 = 4;

/// Maximum decimal places for regular fractional amounts
const DISPLAY_DECIMALS: u32 = 2;

/// Format an amount for display.
///
/// - `0` is shown as `"0"`
/// - non-zero magnitudes below 0.01 get exactly 4 decimals and no grouping
/// - integral values are grouped with no decimal point
/// - everything else is rounded to 2 decimals, trailing zeros dropped, then grouped
///
/// # Example
/// ```
/// use trade_calculator::numeric::format_amount;
///
/// assert_eq!(format_amount(3300.0), "3,300");
/// assert_eq!(format_amount(0.005), "0.0050");
/// assert_eq!(format_amount(1234.5678), "1,234.57");
/// ```
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if !value.is_finite() {
        return value.to_string();
    }

    if value.abs() < SMALL_AMOUNT_THRESHOLD {
        return format_fixed(value, SMALL_AMOUNT_DECIMALS);
    }

    if value.fract() == 0.0 {
        return group_thousands(&format!("{:.0}", value));
    }

    format_grouped(value, DISPLAY_DECIMALS)
}

/// Round to at most `max_decimals`, drop trailing zeros, then group thousands.
///
/// This is the plain "up to N decimals" display used for rate badges, and the
/// regular branch of [`format_amount`] with two decimals.
///
/// # Example
/// ```
/// use trade_calculator::numeric::format_grouped;
///
/// assert_eq!(format_grouped(3300.555, 3), "3,300.555");
/// assert_eq!(format_grouped(0.005, 3), "0.005");
/// assert_eq!(format_grouped(1234.5678, 2), "1,234.57");
/// ```
pub fn format_grouped(value: f64, max_decimals: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    let digits = match Decimal::from_f64_retain(magnitude) {
        Some(exact) => round_half_away(exact, max_decimals)
            .normalize()
            .to_string(),
        // Past the Decimal range every f64 is already integral
        None => format!("{:.0}", magnitude),
    };

    with_sign(value, group_thousands(&digits))
}

/// Format with exactly `decimals` fractional digits and no grouping.
///
/// Rounds the exact binary value half away from zero, so `0.125` becomes
/// `"0.13"` while `1.005` (stored slightly below the tie) becomes `"1.00"`.
/// Negative inputs keep their sign even when they round to zero.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let prec = decimals as usize;
    let magnitude = value.abs();
    let digits = match Decimal::from_f64_retain(magnitude) {
        Some(exact) => format!("{:.prec$}", round_half_away(exact, decimals)),
        None => format!("{:.prec$}", magnitude),
    };

    with_sign(value, digits)
}

/// Insert thousands separators into the integer part of a plain number string.
///
/// Accepts an optional leading `-` and an optional fractional part, which is
/// passed through untouched.
pub fn group_thousands(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };

    let (integer, fraction) = match unsigned.split_once(DECIMAL_POINT) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let digits = integer.len();
    let mut grouped = String::with_capacity(plain.len() + digits / 3);
    grouped.push_str(sign);

    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    if let Some(fraction) = fraction {
        grouped.push(DECIMAL_POINT);
        grouped.push_str(fraction);
    }

    grouped
}

#[inline]
fn round_half_away(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

fn with_sign(value: f64, digits: String) -> String {
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}
