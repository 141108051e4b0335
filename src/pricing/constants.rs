/// Target margin for a fresh draft, percent.
pub const DEFAULT_MARGIN: f64 = 30.0;

/// Quantity assumed for an ingredient with no usable quantity.
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Margin at which the suggested-price formula breaks down.
pub const MARGIN_CEILING: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Input guards (applied by prompts, not by the formulas)
// ─────────────────────────────────────────────────────────────────────────────

/// Lowest margin accepted from interactive input.
pub const MARGIN_INPUT_MIN: f64 = 0.0;

/// Highest margin accepted from interactive input.
pub const MARGIN_INPUT_MAX: f64 = 90.0;

// ─────────────────────────────────────────────────────────────────────────────
// Precision
// ─────────────────────────────────────────────────────────────────────────────

/// Decimal places for stored and displayed prices.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Decimal places for displayed percentages; margin status is judged here too.
pub const PERCENT_DECIMALS: u32 = 1;

/// Round a value to `decimals` places (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.142857, CURRENCY_DECIMALS), 12.14);
        assert_eq!(round_to(29.9835, PERCENT_DECIMALS), 30.0);
        assert_eq!(round_to(-2.0, CURRENCY_DECIMALS), -2.0);
        assert!(round_to(f64::NAN, CURRENCY_DECIMALS).is_nan());
    }
}
