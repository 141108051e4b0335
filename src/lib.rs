pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod pricing;
pub mod state;

pub use error::{DishError, Result};
pub use models::{CreationMethod, DishDraft, DishRecord, Ingredient, Recipe};
pub use pricing::{MarginStatus, PricingSummary};
pub use state::{Catalog, DishComposer};
