use tracing::{debug, warn};

use crate::error::{DishError, Result};
use crate::models::{CreationMethod, DishDraft, DishRecord, Ingredient, Recipe};
use crate::pricing::{
    compute_cost, derive_suggested_price, on_margin_change, summarize, PricingConfig,
    PricingSummary, DEFAULT_QUANTITY,
};

/// Owns a dish draft and its selected components.
///
/// Every mutation ends in [`DishComposer::recompute`], so the draft's cost
/// always reflects the current selection.
#[derive(Debug, Clone)]
pub struct DishComposer {
    method: CreationMethod,
    draft: DishDraft,
    recipes: Vec<Recipe>,
    ingredients: Vec<Ingredient>,
    /// Estimated cost entered by hand; only used in scratch mode.
    manual_cost: f64,
}

impl Default for DishComposer {
    fn default() -> Self {
        Self::new(&PricingConfig::default())
    }
}

impl DishComposer {
    pub fn new(config: &PricingConfig) -> Self {
        Self::with_method(CreationMethod::default(), config)
    }

    pub fn with_method(method: CreationMethod, config: &PricingConfig) -> Self {
        Self {
            method,
            draft: DishDraft::with_margin(config.default_margin),
            recipes: Vec::new(),
            ingredients: Vec::new(),
            manual_cost: 0.0,
        }
    }

    pub fn method(&self) -> CreationMethod {
        self.method
    }

    pub fn draft(&self) -> &DishDraft {
        &self.draft
    }

    pub fn selected_recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn selected_ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn has_components(&self) -> bool {
        !self.recipes.is_empty() || !self.ingredients.is_empty()
    }

    /// Switch creation method. Entering scratch mode drops the selection.
    pub fn set_method(&mut self, method: CreationMethod) {
        if method == CreationMethod::Scratch && self.has_components() {
            debug!(
                recipes = self.recipes.len(),
                ingredients = self.ingredients.len(),
                "clearing selection for scratch mode"
            );
            self.recipes.clear();
            self.ingredients.clear();
        }
        self.method = method;
        self.recompute();
    }

    pub fn add_recipe(&mut self, recipe: Recipe) -> Result<()> {
        if !self.method.accepts_recipes() {
            return Err(DishError::MethodMismatch {
                method: self.method,
                action: "add recipe",
            });
        }
        if self.recipes.iter().any(|r| r.id == recipe.id) {
            return Err(DishError::AlreadySelected(recipe.name));
        }

        if self.draft.name.is_empty() && self.recipes.is_empty() {
            self.draft.name = format!("{} Dish", recipe.name);
            self.draft.image = recipe.image.clone();
        }

        self.recipes.push(recipe);
        self.recompute();
        Ok(())
    }

    pub fn remove_recipe(&mut self, id: &str) -> Result<Recipe> {
        let idx = self
            .recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DishError::RecipeNotFound(id.to_string()))?;

        let removed = self.recipes.remove(idx);
        self.recompute();
        Ok(removed)
    }

    /// Add an ingredient with a quantity of 1.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Result<()> {
        if !self.method.accepts_ingredients() {
            return Err(DishError::MethodMismatch {
                method: self.method,
                action: "add ingredient",
            });
        }
        if self.ingredients.iter().any(|i| i.id == ingredient.id) {
            return Err(DishError::AlreadySelected(ingredient.name));
        }

        if self.draft.name.is_empty() && self.ingredients.is_empty() {
            self.draft.name = format!("{} Dish", ingredient.name);
        }

        self.ingredients.push(Ingredient {
            quantity: Some(DEFAULT_QUANTITY),
            ..ingredient
        });
        self.recompute();
        Ok(())
    }

    pub fn remove_ingredient(&mut self, id: &str) -> Result<Ingredient> {
        let idx = self
            .ingredients
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| DishError::IngredientNotFound(id.to_string()))?;

        let removed = self.ingredients.remove(idx);
        self.recompute();
        Ok(removed)
    }

    /// Set an ingredient's quantity. Zero or less removes it.
    pub fn update_quantity(&mut self, id: &str, quantity: f64) -> Result<()> {
        let quantity = if quantity.is_finite() {
            quantity
        } else {
            warn!(id, "non-numeric quantity, using {}", DEFAULT_QUANTITY);
            DEFAULT_QUANTITY
        };

        if quantity <= 0.0 {
            self.remove_ingredient(id)?;
            return Ok(());
        }

        let ingredient = self
            .ingredients
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| DishError::IngredientNotFound(id.to_string()))?;
        ingredient.quantity = Some(quantity);

        self.recompute();
        Ok(())
    }

    /// Step an ingredient's quantity up or down from its effective value.
    pub fn adjust_quantity(&mut self, id: &str, delta: f64) -> Result<()> {
        let current = self
            .ingredients
            .iter()
            .find(|i| i.id == id)
            .map(Ingredient::effective_quantity)
            .ok_or_else(|| DishError::IngredientNotFound(id.to_string()))?;

        self.update_quantity(id, current + delta)
    }

    /// Set the target margin; the price follows when there is a cost.
    pub fn set_margin(&mut self, margin: f64) {
        let margin = if margin.is_finite() {
            margin
        } else {
            warn!("non-numeric margin, using 0");
            0.0
        };

        let (margin, price) = on_margin_change(margin, self.draft.cost, self.draft.price);
        self.draft.margin = margin;
        self.draft.price = price;
        self.recompute();
    }

    /// Set the selling price. The margin target is left alone.
    pub fn set_price(&mut self, price: f64) {
        self.draft.price = sanitize_amount(price, "price");
        self.recompute();
    }

    /// Adopt the suggested price, if there is one.
    pub fn apply_suggested_price(&mut self) -> Option<f64> {
        let suggested = derive_suggested_price(self.draft.cost, self.draft.margin)?;
        self.draft.price = suggested;
        self.recompute();
        Some(suggested)
    }

    /// Enter an estimated cost by hand (scratch mode only).
    pub fn set_manual_cost(&mut self, cost: f64) -> Result<()> {
        if self.method != CreationMethod::Scratch {
            return Err(DishError::MethodMismatch {
                method: self.method,
                action: "set cost",
            });
        }
        self.manual_cost = sanitize_amount(cost, "cost");
        self.recompute();
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.trim().to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.trim().to_string();
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.draft.image = image.filter(|s| !s.trim().is_empty());
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.draft.category = category.filter(|s| !s.trim().is_empty());
    }

    /// Re-derive the draft's cost from the selection.
    ///
    /// Price and margin are not touched: a cost change alone never reprices.
    pub fn recompute(&mut self) {
        self.draft.cost = match self.method {
            CreationMethod::Scratch => self.manual_cost,
            _ => compute_cost(&self.recipes, &self.ingredients),
        };
        debug!(
            cost = self.draft.cost,
            price = self.draft.price,
            margin = self.draft.margin,
            "recomputed draft"
        );
    }

    pub fn summary(&self) -> PricingSummary {
        summarize(&self.draft)
    }

    /// Snapshot the draft and selection for storage.
    pub fn to_record(&self, id: String, created_at: u64) -> DishRecord {
        DishRecord::new(id, &self.draft, &self.recipes, &self.ingredients, created_at)
    }
}

/// Negative or non-numeric currency input counts as 0.
fn sanitize_amount(value: f64, field: &str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(field, value, "invalid amount, using 0");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::MarginStatus;

    fn sauce() -> Recipe {
        let mut recipe = Recipe::new("r1", "Tomato Basil Sauce", 3.5);
        recipe.image = Some("sauce.jpg".to_string());
        recipe
    }

    fn tomatoes() -> Ingredient {
        Ingredient::new("i1", "Fresh Tomatoes", 2.5, "lb")
    }

    fn both() -> DishComposer {
        DishComposer::with_method(CreationMethod::Both, &PricingConfig::default())
    }

    #[test]
    fn test_add_recipe_suggests_name_and_image() {
        let mut composer = DishComposer::default();
        composer.add_recipe(sauce()).unwrap();

        assert_eq!(composer.draft().name, "Tomato Basil Sauce Dish");
        assert_eq!(composer.draft().image.as_deref(), Some("sauce.jpg"));
        assert!((composer.draft().cost - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_name_suggestion_keeps_existing_name() {
        let mut composer = DishComposer::default();
        composer.set_name("Margherita");
        composer.add_recipe(sauce()).unwrap();
        assert_eq!(composer.draft().name, "Margherita");
        assert!(composer.draft().image.is_none());
    }

    #[test]
    fn test_duplicate_recipe_rejected() {
        let mut composer = DishComposer::default();
        composer.add_recipe(sauce()).unwrap();
        let err = composer.add_recipe(sauce()).unwrap_err();
        assert!(matches!(err, DishError::AlreadySelected(_)));
        assert!((composer.draft().cost - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_method_restricts_components() {
        let mut composer = DishComposer::default();
        let err = composer.add_ingredient(tomatoes()).unwrap_err();
        assert!(matches!(err, DishError::MethodMismatch { .. }));

        composer.set_method(CreationMethod::Ingredient);
        composer.add_ingredient(tomatoes()).unwrap();
        assert!(composer.add_recipe(sauce()).is_err());
    }

    #[test]
    fn test_added_ingredient_has_quantity_one() {
        let mut composer = both();
        composer.add_ingredient(tomatoes()).unwrap();
        assert_eq!(composer.selected_ingredients()[0].quantity, Some(1.0));
        assert_eq!(composer.draft().name, "Fresh Tomatoes Dish");
    }

    #[test]
    fn test_quantity_to_zero_removes() {
        let mut composer = both();
        composer.add_ingredient(tomatoes()).unwrap();
        composer.update_quantity("i1", 3.0).unwrap();
        assert!((composer.draft().cost - 7.5).abs() < 1e-9);

        composer.adjust_quantity("i1", -1.0).unwrap();
        assert!((composer.draft().cost - 5.0).abs() < 1e-9);

        composer.update_quantity("i1", 0.0).unwrap();
        assert!(composer.selected_ingredients().is_empty());
        assert_eq!(composer.draft().cost, 0.0);
    }

    #[test]
    fn test_adjust_down_from_one_removes() {
        let mut composer = both();
        composer.add_ingredient(tomatoes()).unwrap();
        composer.adjust_quantity("i1", -1.0).unwrap();
        assert!(!composer.has_components());
    }

    #[test]
    fn test_unknown_ids() {
        let mut composer = both();
        assert!(matches!(
            composer.remove_recipe("zzz"),
            Err(DishError::RecipeNotFound(_))
        ));
        assert!(matches!(
            composer.update_quantity("zzz", 2.0),
            Err(DishError::IngredientNotFound(_))
        ));
    }

    #[test]
    fn test_margin_pushes_price_but_price_does_not_push_margin() {
        let mut composer = both();
        composer.add_recipe(Recipe::new("r9", "Base", 12.0)).unwrap();

        composer.set_margin(40.0);
        assert_eq!(composer.draft().price, 20.0);

        composer.set_price(30.0);
        assert_eq!(composer.draft().margin, 40.0);
        assert_eq!(composer.draft().price, 30.0);
    }

    #[test]
    fn test_margin_without_cost_keeps_price() {
        let mut composer = both();
        composer.set_price(9.0);
        composer.set_margin(40.0);
        assert_eq!(composer.draft().margin, 40.0);
        assert_eq!(composer.draft().price, 9.0);
    }

    #[test]
    fn test_cost_change_does_not_reprice() {
        let mut composer = both();
        composer.add_recipe(sauce()).unwrap();
        composer.set_price(10.0);
        composer.add_ingredient(tomatoes()).unwrap();
        assert_eq!(composer.draft().price, 10.0);
        assert!((composer.draft().cost - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_amounts_fall_back_to_zero() {
        let mut composer = both();
        composer.set_price(-4.0);
        assert_eq!(composer.draft().price, 0.0);

        composer.set_price(f64::NAN);
        assert_eq!(composer.draft().price, 0.0);

        composer.set_margin(f64::NAN);
        assert_eq!(composer.draft().margin, 0.0);
    }

    #[test]
    fn test_apply_suggested_price() {
        let mut composer = DishComposer::default();
        assert_eq!(composer.apply_suggested_price(), None);

        composer.add_recipe(Recipe::new("r9", "Base", 10.0)).unwrap();
        assert_eq!(composer.apply_suggested_price(), Some(14.29));
        assert_eq!(composer.draft().price, 14.29);
        assert_eq!(composer.summary().status, MarginStatus::TargetAchieved);
    }

    #[test]
    fn test_scratch_mode_manual_cost() {
        let mut composer = both();
        composer.add_recipe(sauce()).unwrap();
        assert!(composer.set_manual_cost(5.0).is_err());

        composer.set_method(CreationMethod::Scratch);
        assert!(!composer.has_components());
        assert_eq!(composer.draft().cost, 0.0);

        composer.set_manual_cost(5.0).unwrap();
        composer.set_margin(50.0);
        assert_eq!(composer.draft().cost, 5.0);
        assert_eq!(composer.draft().price, 10.0);
    }

    #[test]
    fn test_blank_image_clears() {
        let mut composer = DishComposer::default();
        composer.set_image(Some("dish.png".to_string()));
        assert_eq!(composer.draft().image.as_deref(), Some("dish.png"));
        composer.set_image(Some("  ".to_string()));
        assert!(composer.draft().image.is_none());
    }
}
