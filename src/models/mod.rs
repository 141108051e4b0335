mod component;
mod dish;

pub use component::{Ingredient, Recipe};
pub use dish::{CreationMethod, DishDraft, DishRecord};
