// ============================================================================
// Numeric Module
// Display formatting and raw-input parsing for calculator amounts
// ============================================================================
//
// This module provides:
// - format_amount: the display rule shared by all three fields
// - format_fixed / format_grouped / group_thousands: building blocks for rate summaries
// - parse_amount: lenient parsing of what the user typed
//
// Conventions:
// - Thousands separator is ',' every three digits, decimal point is '.'
// - Rounding happens on the exact binary value of the f64, half away from zero
// - Parsing distinguishes "no value" (None) from a valid zero

mod format;
mod parse;

pub use format::{format_amount, format_fixed, format_grouped, group_thousands};
pub use parse::parse_amount;

/// Digit-group separator used for display and stripped on input
pub const THOUSANDS_SEPARATOR: char = ',';

/// Decimal point used for display and accepted on input
pub const DECIMAL_POINT: char = '.';
