use std::fmt;

use serde::Serialize;

use crate::pricing::constants::*;

/// Configurable defaults for a pricing session.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Target margin a new draft starts with.
    pub default_margin: f64,
    /// Bounds accepted from interactive margin input.
    pub margin_input_min: f64,
    pub margin_input_max: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_margin: DEFAULT_MARGIN,
            margin_input_min: MARGIN_INPUT_MIN,
            margin_input_max: MARGIN_INPUT_MAX,
        }
    }
}

/// Price that yields exactly `margin` percent at the given cost.
///
/// Formula: cost / (1 - margin / 100), rounded to cents.
/// Returns `None` when there is nothing to price (cost <= 0) or when the
/// margin leaves no room for cost (margin >= 100).
pub fn derive_suggested_price(cost: f64, margin: f64) -> Option<f64> {
    if !cost.is_finite() || !margin.is_finite() {
        return None;
    }
    if cost <= 0.0 || margin >= MARGIN_CEILING {
        return None;
    }

    // Rounding scales by 100 first, so it can overflow a price that was finite.
    let price = round_to(cost / (1.0 - margin / 100.0), CURRENCY_DECIMALS);
    price.is_finite().then_some(price)
}

/// Apply a margin edit.
///
/// Returns the new `(margin, price)`. The price follows the margin only when
/// there is a cost to price from; otherwise it is returned unchanged.
/// Price edits never flow back into the margin.
pub fn on_margin_change(new_margin: f64, cost: f64, price: f64) -> (f64, f64) {
    if cost > 0.0 {
        if let Some(suggested) = derive_suggested_price(cost, new_margin) {
            return (new_margin, suggested);
        }
    }
    (new_margin, price)
}

/// Margin realized by `price`, percent. 0 when price is not positive.
pub fn compute_actual_margin(cost: f64, price: f64) -> f64 {
    if price <= 0.0 || !price.is_finite() {
        return 0.0;
    }

    let margin = (price - cost) / price * 100.0;
    if margin.is_finite() { margin } else { 0.0 }
}

/// Profit per item. Negative when the dish is underpriced.
pub fn compute_profit(cost: f64, price: f64) -> f64 {
    let profit = price - cost;
    if profit.is_finite() { profit } else { 0.0 }
}

/// How the realized margin compares to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarginStatus {
    TargetAchieved,
    BelowTarget,
    NoMargin,
}

impl MarginStatus {
    pub fn label(self) -> &'static str {
        match self {
            MarginStatus::TargetAchieved => "Target margin achieved",
            MarginStatus::BelowTarget => "Below target margin",
            MarginStatus::NoMargin => "No profit margin",
        }
    }
}

impl fmt::Display for MarginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an actual margin against the target.
///
/// Checked in order: at or above target, then positive, then nothing.
/// The target check uses displayed precision, so a price rounded to cents
/// still counts as hitting the margin it was suggested for. Any real profit,
/// however small, is below target rather than no margin.
pub fn classify_margin(actual_margin: f64, target_margin: f64) -> MarginStatus {
    if round_to(actual_margin, PERCENT_DECIMALS) >= target_margin {
        MarginStatus::TargetAchieved
    } else if actual_margin > 0.0 {
        MarginStatus::BelowTarget
    } else {
        MarginStatus::NoMargin
    }
}
