//! Conversion between decimal amounts and integer base units.
//!
//! A token with precision `d` counts value in base units of `10^-d` of the
//! human-facing unit. Both directions work on digit strings backed by [`U256`]
//! arithmetic, so amounts far beyond 64-bit range (10^15 whole units at 18
//! decimals is a 34-digit base-unit value) convert without loss. No floating
//! point is involved at any point.
//!
//! Fractional digits beyond the requested precision are truncated, never
//! rounded. That is a policy decision inherited from the wire format: the
//! encoded amount is the exact number of base units the recipient is asked
//! to receive.

use alloy_primitives::U256;

use crate::error::{Error, Result};

/// Highest supported token precision.
pub const MAX_DECIMALS: u8 = 18;

/// Canonical ERC-20 precision, used when no override is given.
pub const DEFAULT_DECIMALS: u8 = 18;

fn check_decimals(decimals: u8) -> Result<()> {
    if decimals > MAX_DECIMALS {
        return Err(Error::InvalidPrecision {
            value: decimals,
            max: MAX_DECIMALS,
        });
    }
    Ok(())
}

fn invalid_amount(value: &str, reason: &str) -> Error {
    Error::InvalidAmount {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Converts a decimal amount string into an integer base-unit string.
///
/// Accepts plain decimal notation: `"100"`, `"0.5"`, `".5"`, `"100."`.
/// Exponent notation, signs, and anything non-numeric are rejected with
/// [`Error::InvalidAmount`]; a precision above [`MAX_DECIMALS`] is rejected
/// with [`Error::InvalidPrecision`]. Fractional digits beyond `decimals` are
/// truncated.
///
/// # Example
///
/// ```
/// use eip681_types::units::to_base_units;
///
/// assert_eq!(to_base_units("100", 18).unwrap(), "100000000000000000000");
/// assert_eq!(to_base_units("0.5", 18).unwrap(), "500000000000000000");
/// ```
pub fn to_base_units(amount: &str, decimals: u8) -> Result<String> {
    check_decimals(decimals)?;

    let amount = amount.trim();
    if amount.is_empty() {
        return Err(invalid_amount(amount, "amount is empty"));
    }
    if amount.starts_with('-') {
        return Err(invalid_amount(amount, "amount must not be negative"));
    }

    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => {
            if fraction.contains('.') {
                return Err(invalid_amount(amount, "more than one decimal separator"));
            }
            (integer, fraction)
        }
        None => (amount, ""),
    };
    if integer.is_empty() && fraction.is_empty() {
        return Err(invalid_amount(amount, "not a decimal number"));
    }
    if !integer.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid_amount(amount, "not a decimal number"));
    }

    // An empty integer part reads as zero, so inputs like ".5" are accepted.
    let integer = if integer.is_empty() { "0" } else { integer };

    let precision = decimals as usize;
    let mut digits = String::with_capacity(integer.len() + precision);
    digits.push_str(integer);
    if fraction.len() >= precision {
        // Excess fractional digits are truncated, not rounded.
        digits.push_str(&fraction[..precision]);
    } else {
        digits.push_str(fraction);
        digits.push_str(&"0".repeat(precision - fraction.len()));
    }

    let value = U256::from_str_radix(&digits, 10)
        .map_err(|_| invalid_amount(amount, "amount too large"))?;
    Ok(value.to_string())
}

/// Converts an integer base-unit string back into a decimal amount string.
///
/// The result carries no trailing fractional zeros and no trailing separator;
/// a whole number comes back as its integer part alone.
///
/// # Example
///
/// ```
/// use eip681_types::units::from_base_units;
///
/// assert_eq!(from_base_units("1230000000000000000", 18).unwrap(), "1.23");
/// assert_eq!(from_base_units("100000000000000000000", 18).unwrap(), "100");
/// ```
pub fn from_base_units(units: &str, decimals: u8) -> Result<String> {
    check_decimals(decimals)?;

    let units = units.trim();
    if units.is_empty() || !units.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_amount(
            units,
            "base-unit amount must be a non-negative integer",
        ));
    }
    let value = U256::from_str_radix(units, 10)
        .map_err(|_| invalid_amount(units, "amount too large"))?;

    let scale = U256::from(10u8).pow(U256::from(decimals));
    let (quotient, remainder) = value.div_rem(scale);
    let integer = quotient.to_string();
    if decimals == 0 {
        return Ok(integer);
    }

    // Left-pad the remainder to the full precision before stripping: the
    // remainder 23 at 18 decimals is 0.000000000000000023, not 0.23.
    let digits = remainder.to_string();
    let mut fraction = String::with_capacity(decimals as usize);
    fraction.push_str(&"0".repeat(decimals as usize - digits.len()));
    fraction.push_str(&digits);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        Ok(integer)
    } else {
        Ok(format!("{integer}.{fraction}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_number_at_default_precision() {
        assert_eq!(to_base_units("100", 18).unwrap(), "100000000000000000000");
    }

    #[test]
    fn fraction_at_default_precision() {
        assert_eq!(to_base_units("0.5", 18).unwrap(), "500000000000000000");
    }

    #[test]
    fn base_units_back_to_decimal() {
        assert_eq!(from_base_units("1230000000000000000", 18).unwrap(), "1.23");
    }

    #[test]
    fn excess_fraction_is_truncated_not_rounded() {
        // The trailing "901" is beyond 18 digits and must be discarded.
        assert_eq!(
            to_base_units("0.123456789012345678901", 18).unwrap(),
            "123456789012345678"
        );
        // Truncation, not rounding: a trailing 9 must not carry.
        assert_eq!(to_base_units("0.19", 1).unwrap(), "1");
    }

    #[test]
    fn accepts_bare_fraction_and_trailing_separator() {
        assert_eq!(to_base_units(".5", 18).unwrap(), "500000000000000000");
        assert_eq!(to_base_units("100.", 6).unwrap(), "100000000");
    }

    #[test]
    fn leading_zeros_do_not_change_the_value() {
        assert_eq!(to_base_units("007", 2).unwrap(), "700");
        assert_eq!(to_base_units("0.50", 2).unwrap(), "50");
    }

    #[test]
    fn zero_precision() {
        assert_eq!(to_base_units("42", 0).unwrap(), "42");
        assert_eq!(to_base_units("42.9", 0).unwrap(), "42");
        assert_eq!(from_base_units("42", 0).unwrap(), "42");
    }

    #[test]
    fn beyond_u64_range() {
        // 10^15 whole units at 18 decimals: 34 digits of base units.
        assert_eq!(
            to_base_units("1000000000000000", 18).unwrap(),
            "1000000000000000000000000000000000"
        );
        assert_eq!(
            from_base_units("1000000000000000000000000000000000", 18).unwrap(),
            "1000000000000000"
        );
    }

    #[test]
    fn round_trip_preserves_canonical_form() {
        for (amount, decimals) in [
            ("0.5", 18u8),
            ("1.23", 18),
            ("100", 18),
            ("0.000000000000000001", 18),
            ("123456.654321", 6),
            ("7", 0),
            ("999999999999999", 12),
        ] {
            let units = to_base_units(amount, decimals).unwrap();
            assert_eq!(
                from_base_units(&units, decimals).unwrap(),
                amount,
                "round trip failed for {amount} at {decimals} decimals"
            );
        }
    }

    #[test]
    fn round_trip_canonicalizes_redundant_zeros() {
        let units = to_base_units("1.50", 18).unwrap();
        assert_eq!(from_base_units(&units, 18).unwrap(), "1.5");
        let units = to_base_units("2.000", 18).unwrap();
        assert_eq!(from_base_units(&units, 18).unwrap(), "2");
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = to_base_units("-1", 18).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount { .. }));
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        for bad in ["", "abc", "1.2.3", "1e5", "NaN", "inf", "+5", "1,000"] {
            let err = to_base_units(bad, 18).unwrap_err();
            assert!(
                matches!(err, Error::InvalidAmount { .. }),
                "expected InvalidAmount for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn rejects_precision_out_of_range() {
        let err = to_base_units("1", 19).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPrecision { value: 19, max: 18 }
        ));
        let err = from_base_units("1", 255).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPrecision {
                value: 255,
                max: 18
            }
        ));
    }

    #[test]
    fn rejects_non_integer_base_units() {
        for bad in ["", "1.5", "-1", "0x10", "12a"] {
            let err = from_base_units(bad, 18).unwrap_err();
            assert!(
                matches!(err, Error::InvalidAmount { .. }),
                "expected InvalidAmount for {bad:?}, got {err:?}"
            );
        }
    }
}
