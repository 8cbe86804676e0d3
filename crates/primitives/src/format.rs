//! Fixed-point formatting of arbitrary-precision token amounts
//!
//! Balances are carried on-chain as integers denominated in the smallest
//! indivisible unit. [`format_to_precision`] renders such an integer as a
//! decimal string at a caller-chosen unit scale and precision, optionally
//! falling back to scientific notation for magnitudes too small to show at
//! the requested precision. Formatting always truncates toward zero and
//! never rounds the last retained digit.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::bytes::left_pad;
use crate::units::Units;

/// Default number of fractional digits shown by [`format_units`].
pub const DEFAULT_FORMATTING_DECIMALS: usize = 4;

/// Default decimal separator.
pub const DEFAULT_DECIMAL_SEPARATOR: &str = ".";

/// Formats a wei-denominated amount in the given unit with the default
/// precision and separator.
pub fn format_units(value: &BigInt, units: Units) -> String {
    format_to_precision(
        value,
        units.decimals(),
        DEFAULT_FORMATTING_DECIMALS,
        DEFAULT_DECIMAL_SEPARATOR,
        false,
    )
}

/// Formats a signed amount as a decimal string.
///
/// The value is split into integer and fractional parts by
/// `10^number_decimals`; the fractional part is limited to
/// `formatting_decimals` digits. The sign is re-attached after the magnitude
/// is formatted, so `-1` wei at 18 decimals with the fallback enabled yields
/// `"-1e-18"`.
pub fn format_to_precision(
    value: &BigInt,
    number_decimals: usize,
    formatting_decimals: usize,
    separator: &str,
    fallback_to_scientific: bool,
) -> String {
    let formatted = format_to_precision_unsigned(
        value.magnitude(),
        number_decimals,
        formatting_decimals,
        separator,
        fallback_to_scientific,
    );

    match value.sign() {
        Sign::Minus => format!("-{formatted}"),
        _ => formatted,
    }
}

/// Formats an unsigned amount as a decimal string.
///
/// Behaviour, in order:
/// - a zero magnitude is always `"0"`;
/// - at most `min(number_decimals, formatting_decimals)` fractional digits
///   are shown, truncated toward zero;
/// - if every displayed fractional digit is zero and the integer part is
///   non-zero, the fractional part is dropped entirely;
/// - if the integer part is also zero and `fallback_to_scientific` is set,
///   the value is rendered as `digit[sep digits]e-exponent` from the first
///   non-zero digit of the full fractional expansion;
/// - without the fallback the all-zero fractional string is kept, e.g.
///   `"0.0000"`.
pub fn format_to_precision_unsigned(
    value: &BigUint,
    number_decimals: usize,
    formatting_decimals: usize,
    separator: &str,
    fallback_to_scientific: bool,
) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let to_decimals = formatting_decimals.min(number_decimals);
    let divisor = BigUint::from(10u32).pow(number_decimals as u32);
    let quotient = value / &divisor;
    let remainder = value % &divisor;

    // The remainder has at most `number_decimals` digits, so left_pad only
    // ever extends here; its suffix truncation is exercised when
    // `number_decimals` is zero and the remainder string is "0".
    let full_padded_remainder = left_pad(&remainder.to_string(), number_decimals, '0');
    let remainder_padded = &full_padded_remainder[..to_decimals];

    if remainder_padded.bytes().all(|b| b == b'0') {
        if !quotient.is_zero() {
            return quotient.to_string();
        }
        if fallback_to_scientific {
            return to_scientific(&full_padded_remainder, formatting_decimals, separator);
        }
    }

    if to_decimals == 0 {
        return quotient.to_string();
    }

    format!("{quotient}{separator}{remainder_padded}")
}

/// Renders a zero-integer-part value as `digit[sep digits]e-exponent`.
///
/// `padded_remainder` is the full fractional expansion, left-padded with
/// zeros to the unit scale. The mantissa starts at the first non-zero digit
/// and keeps at most `formatting_decimals` further digits, truncated.
fn to_scientific(padded_remainder: &str, formatting_decimals: usize, separator: &str) -> String {
    let Some(first) = padded_remainder.bytes().position(|b| b != b'0') else {
        // unreachable for a non-zero magnitude with a zero integer part
        return "0".to_string();
    };

    let leading = &padded_remainder[first..=first];
    let rest = &padded_remainder[first + 1..];
    let rest = &rest[..rest.len().min(formatting_decimals)];
    let exponent = first + 1;

    if rest.is_empty() {
        format!("{leading}e-{exponent}")
    } else {
        format!("{leading}{separator}{rest}e-{exponent}")
    }
}
