//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel as `f64` on the wire. Sums are computed with `Decimal`
//! and converted back, rounded to 2 decimal places.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::warn!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `price × quantity` as a Decimal
#[inline]
pub fn line_total(price: f64, quantity: i32) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// Parse a user-entered price ("150000", "99.5")
///
/// Returns `None` for blank, malformed, or negative input.
pub fn parse_price(input: &str) -> Option<f64> {
    let value = Decimal::from_str(input.trim()).ok()?;
    if value.is_sign_negative() {
        return None;
    }
    Some(to_f64(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_avoids_float_drift() {
        let total = line_total(0.1, 3) + line_total(0.2, 1);
        assert_eq!(to_f64(total), 0.5);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("150000"), Some(150000.0));
        assert_eq!(parse_price(" 99.555 "), Some(99.56));
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price(""), None);
    }
}
