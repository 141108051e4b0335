use crate::models::{Ingredient, Recipe};
use crate::pricing::{CURRENCY_DECIMALS, PERCENT_DECIMALS, PricingSummary};
use crate::state::DishComposer;

/// Format a currency amount, e.g. `$12.14` or `-$2.00`.
pub fn format_currency(amount: f64) -> String {
    let places = CURRENCY_DECIMALS as usize;
    if amount < 0.0 {
        format!("-${:.*}", places, -amount)
    } else {
        format!("${:.*}", places, amount)
    }
}

/// Format a percentage, e.g. `30.0%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.*}%", PERCENT_DECIMALS as usize, value)
}

/// Display the draft's details and selected components.
pub fn display_draft(composer: &DishComposer) {
    let draft = composer.draft();

    println!();
    println!("=== Dish Preview ({}) ===", composer.method().label());
    println!();

    let name = if draft.name.is_empty() {
        "(unnamed)"
    } else {
        draft.name.as_str()
    };
    println!("Name: {}", name);
    if !draft.description.is_empty() {
        println!("Description: {}", draft.description);
    }
    if let Some(image) = &draft.image {
        println!("Image: {}", image);
    }
    if let Some(category) = &draft.category {
        println!("Category: {}", category);
    }

    if composer.has_components() {
        println!();
        println!("Components:");
        for recipe in composer.selected_recipes() {
            println!(
                "  [recipe]     {} - {}",
                recipe.name,
                format_currency(recipe.total_cost)
            );
        }
        for ingredient in composer.selected_ingredients() {
            println!(
                "  [ingredient] {} - {} per {} x{} = {}",
                ingredient.name,
                format_currency(ingredient.unit_cost),
                ingredient.unit,
                ingredient.effective_quantity(),
                format_currency(ingredient.line_cost())
            );
        }
    }
    println!();
}

/// Display the pricing figures for a draft.
pub fn display_summary(summary: &PricingSummary) {
    println!("--- Pricing & Margins ---");
    println!("Total cost:     {}", format_currency(summary.cost));
    println!("Target margin:  {}", format_percent(summary.target_margin));

    if let Some(suggested) = summary.suggested_price {
        println!("Suggested price: {}", format_currency(suggested));
    }

    println!("Selling price:  {}", format_currency(summary.price));

    if summary.has_analysis() {
        println!("Actual margin:  {}", format_percent(summary.actual_margin));
        println!("Profit/item:    {}", format_currency(summary.profit));
    }

    println!("Status: {}", summary.status);
    println!();
}

/// Display a list of recipes.
pub fn display_recipe_list(recipes: &[&Recipe], title: &str) {
    if recipes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, recipes.len());
    println!();

    for recipe in recipes {
        let servings = recipe
            .servings
            .map(|s| format!(", serves {}", s))
            .unwrap_or_default();
        println!(
            "  [{}] {} - {}{}",
            recipe.id,
            recipe.name,
            format_currency(recipe.total_cost),
            servings
        );
        if let Some(description) = &recipe.description {
            println!("      {}", description);
        }
    }

    println!();
}

/// Display a list of ingredients.
pub fn display_ingredient_list(ingredients: &[&Ingredient], title: &str) {
    if ingredients.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, ingredients.len());
    println!();

    for ingredient in ingredients {
        println!(
            "  [{}] {} - {}/{}",
            ingredient.id,
            ingredient.name,
            format_currency(ingredient.unit_cost),
            ingredient.unit
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12.142857), "$12.14");
        assert_eq!(format_currency(-2.0), "-$2.00");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(29.9835), "30.0%");
        assert_eq!(format_percent(-25.0), "-25.0%");
    }
}
