use crate::models::{Ingredient, Recipe};

/// Sum of stored recipe totals.
pub fn recipe_cost(recipes: &[Recipe]) -> f64 {
    recipes.iter().map(|r| r.total_cost).sum()
}

/// Sum of ingredient unit costs times effective quantity.
pub fn ingredient_cost(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(Ingredient::line_cost).sum()
}

/// Total cost of a dish built from the given selection.
///
/// Always computed from scratch, so calling it twice with the same selection
/// gives the same total. Empty selections cost 0.
pub fn compute_cost(recipes: &[Recipe], ingredients: &[Ingredient]) -> f64 {
    recipe_cost(recipes) + ingredient_cost(ingredients)
}
