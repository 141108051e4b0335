pub mod constants;
pub mod cost;
pub mod margin;
pub mod summary;

pub use constants::*;
pub use cost::{compute_cost, ingredient_cost, recipe_cost};
pub use margin::{
    classify_margin, compute_actual_margin, compute_profit, derive_suggested_price,
    on_margin_change, MarginStatus, PricingConfig,
};
pub use summary::{summarize, PricingSummary};
