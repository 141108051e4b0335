use dialoguer::{Confirm, Input, Select};

use crate::error::{DishError, Result};
use crate::models::{CreationMethod, Ingredient, Recipe};
use crate::pricing::PricingConfig;
use crate::state::{Catalog, DishComposer};

/// One step of an interactive composing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddRecipe,
    AddIngredient,
    AdjustQuantity,
    RemoveComponent,
    SetMargin,
    SetPrice,
    UseSuggestedPrice,
    SetCost,
    EditDetails,
    SwitchMethod,
    ShowSummary,
    Save,
    Discard,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Action::AddRecipe => "Add recipe",
            Action::AddIngredient => "Add ingredient",
            Action::AdjustQuantity => "Adjust ingredient quantity",
            Action::RemoveComponent => "Remove component",
            Action::SetMargin => "Set target margin",
            Action::SetPrice => "Set selling price",
            Action::UseSuggestedPrice => "Use suggested price",
            Action::SetCost => "Set estimated cost",
            Action::EditDetails => "Edit name, description, image",
            Action::SwitchMethod => "Switch creation method",
            Action::ShowSummary => "Show summary",
            Action::Save => "Save dish",
            Action::Discard => "Discard and quit",
        }
    }
}

/// A selected component, by kind and id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRef {
    Recipe(String),
    Ingredient(String),
}

/// Actions that make sense for the composer's current state.
pub fn available_actions(composer: &DishComposer) -> Vec<Action> {
    let method = composer.method();
    let mut actions = Vec::new();

    if method.accepts_recipes() {
        actions.push(Action::AddRecipe);
    }
    if method.accepts_ingredients() {
        actions.push(Action::AddIngredient);
    }
    if !composer.selected_ingredients().is_empty() {
        actions.push(Action::AdjustQuantity);
    }
    if composer.has_components() {
        actions.push(Action::RemoveComponent);
    }
    if method == CreationMethod::Scratch {
        actions.push(Action::SetCost);
    }

    actions.push(Action::SetMargin);
    actions.push(Action::SetPrice);
    if composer.summary().suggested_price.is_some() {
        actions.push(Action::UseSuggestedPrice);
    }

    actions.extend([
        Action::EditDetails,
        Action::SwitchMethod,
        Action::ShowSummary,
        Action::Save,
        Action::Discard,
    ]);
    actions
}

/// Prompt for the next session action.
pub fn prompt_action(composer: &DishComposer) -> Result<Action> {
    let actions = available_actions(composer);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection])
}

/// Prompt for a creation method.
pub fn prompt_creation_method(current: CreationMethod) -> Result<CreationMethod> {
    let labels: Vec<&str> = CreationMethod::ALL.iter().map(|m| m.label()).collect();
    let default = CreationMethod::ALL
        .iter()
        .position(|m| *m == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("How do you want to build this dish?")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(CreationMethod::ALL[selection])
}

/// Let the user pick one of `labels`, with a trailing "Cancel" option.
fn select_or_cancel(prompt: &str, labels: Vec<String>) -> Result<Option<usize>> {
    let count = labels.len();
    let mut options = labels;
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < count).then_some(selection))
}

fn prompt_search_term(what: &str) -> Result<String> {
    let term: String = Input::new()
        .with_prompt(format!("Search {} (Enter to list all)", what))
        .allow_empty(true)
        .interact_text()?;
    Ok(term.trim().to_string())
}

/// Search the catalog and pick a recipe not yet selected.
///
/// Falls back to fuzzy matching when the substring search finds nothing.
pub fn prompt_recipe(catalog: &Catalog, selected: &[Recipe]) -> Result<Option<Recipe>> {
    let term = prompt_search_term("recipes")?;

    let mut hits = catalog.search_recipes(&term, selected);
    if hits.is_empty() {
        hits = catalog
            .fuzzy_recipes(&term)
            .into_iter()
            .filter(|r| !selected.iter().any(|s| s.id == r.id))
            .take(5)
            .collect();
    }
    if hits.is_empty() {
        println!("No matching recipe found for '{}'", term);
        return Ok(None);
    }

    let labels = hits
        .iter()
        .map(|r| format!("{} (${:.2})", r.name, r.total_cost))
        .collect();

    Ok(select_or_cancel("Which recipe?", labels)?.map(|idx| hits[idx].clone()))
}

/// Search the catalog and pick an ingredient not yet selected.
pub fn prompt_ingredient(catalog: &Catalog, selected: &[Ingredient]) -> Result<Option<Ingredient>> {
    let term = prompt_search_term("ingredients")?;

    let mut hits = catalog.search_ingredients(&term, selected);
    if hits.is_empty() {
        hits = catalog
            .fuzzy_ingredients(&term)
            .into_iter()
            .filter(|i| !selected.iter().any(|s| s.id == i.id))
            .take(5)
            .collect();
    }
    if hits.is_empty() {
        println!("No matching ingredient found for '{}'", term);
        return Ok(None);
    }

    let labels = hits
        .iter()
        .map(|i| format!("{} (${:.2}/{})", i.name, i.unit_cost, i.unit))
        .collect();

    Ok(select_or_cancel("Which ingredient?", labels)?.map(|idx| hits[idx].clone()))
}

/// Pick one of the selected ingredients.
pub fn prompt_selected_ingredient(composer: &DishComposer) -> Result<Option<String>> {
    let ingredients = composer.selected_ingredients();
    let labels = ingredients
        .iter()
        .map(|i| format!("{} x{}", i.name, i.effective_quantity()))
        .collect();

    Ok(select_or_cancel("Which ingredient?", labels)?.map(|idx| ingredients[idx].id.clone()))
}

/// Pick any selected component.
pub fn prompt_component(composer: &DishComposer) -> Result<Option<ComponentRef>> {
    let mut refs = Vec::new();
    let mut labels = Vec::new();

    for recipe in composer.selected_recipes() {
        refs.push(ComponentRef::Recipe(recipe.id.clone()));
        labels.push(format!("Recipe: {}", recipe.name));
    }
    for ingredient in composer.selected_ingredients() {
        refs.push(ComponentRef::Ingredient(ingredient.id.clone()));
        labels.push(format!("Ingredient: {}", ingredient.name));
    }

    Ok(select_or_cancel("Remove which component?", labels)?.map(|idx| refs[idx].clone()))
}

fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| DishError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for a quantity; 0 removes the ingredient.
pub fn prompt_quantity(current: f64) -> Result<f64> {
    prompt_number("New quantity (0 removes)", current)
}

/// Prompt for a target margin within the configured bounds.
pub fn prompt_margin(config: &PricingConfig, current: f64) -> Result<f64> {
    let margin = prompt_number(
        &format!(
            "Target margin % ({}-{})",
            config.margin_input_min, config.margin_input_max
        ),
        current,
    )?;

    if margin < config.margin_input_min || margin > config.margin_input_max {
        return Err(DishError::InvalidInput(format!(
            "Margin must be between {} and {}",
            config.margin_input_min, config.margin_input_max
        )));
    }

    Ok(margin)
}

/// Prompt for a non-negative currency amount.
pub fn prompt_amount(prompt: &str, current: f64) -> Result<f64> {
    let amount = prompt_number(prompt, current)?;
    if amount < 0.0 {
        return Err(DishError::InvalidInput(
            "Amount must not be negative".to_string(),
        ));
    }
    Ok(amount)
}

/// Prompt for free text, pre-filled with the current value.
pub fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
