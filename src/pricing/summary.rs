use serde::Serialize;

use crate::models::DishDraft;
use crate::pricing::margin::{
    classify_margin, compute_actual_margin, compute_profit, derive_suggested_price, MarginStatus,
};

/// Derived pricing figures for display. Values are full precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingSummary {
    pub cost: f64,
    pub price: f64,
    pub target_margin: f64,
    /// `None` when no price can hit the target (no cost, or margin >= 100).
    pub suggested_price: Option<f64>,
    pub actual_margin: f64,
    pub profit: f64,
    pub status: MarginStatus,
}

impl PricingSummary {
    /// Whether the actual margin and profit are worth showing.
    pub fn has_analysis(&self) -> bool {
        self.price > 0.0 && self.cost > 0.0
    }
}

/// Compute every derived figure for a draft.
pub fn summarize(draft: &DishDraft) -> PricingSummary {
    let actual_margin = compute_actual_margin(draft.cost, draft.price);

    PricingSummary {
        cost: draft.cost,
        price: draft.price,
        target_margin: draft.margin,
        suggested_price: derive_suggested_price(draft.cost, draft.margin),
        actual_margin,
        profit: compute_profit(draft.cost, draft.price),
        status: classify_margin(actual_margin, draft.margin),
    }
}
