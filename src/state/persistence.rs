use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, warn};

use crate::error::Result;
use crate::models::{DishRecord, Ingredient, Recipe};
use crate::pricing::{round_to, CURRENCY_DECIMALS};
use crate::state::{Catalog, DishComposer};

/// Load a catalog from a JSON file.
///
/// Deduplicates by id (last occurrence wins, first position kept) and skips
/// entries with a blank id or a negative cost.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path.as_ref())?;
    let raw: Catalog = serde_json::from_str(&content)?;

    let recipes = dedupe(raw.recipes, Recipe::is_valid, |r| &r.id);
    let ingredients = dedupe(raw.ingredients, Ingredient::is_valid, |i| &i.id);

    info!(
        path = %path.as_ref().display(),
        recipes = recipes.len(),
        ingredients = ingredients.len(),
        "loaded catalog"
    );
    Ok(Catalog::new(recipes, ingredients))
}

fn dedupe<T>(items: Vec<T>, is_valid: impl Fn(&T) -> bool, id: impl Fn(&T) -> &String) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !is_valid(&item) {
            warn!(id = %id(&item), "skipping invalid catalog entry");
            continue;
        }
        match out.iter().position(|existing| id(existing) == id(&item)) {
            Some(idx) => out[idx] = item,
            None => out.push(item),
        }
    }
    out
}

/// Generate a fresh dish id.
pub fn new_dish_id() -> String {
    format!("dish-{:08x}", rand::random::<u32>())
}

/// Seconds since the Unix epoch (0 if the clock is before it).
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Build a storage record from the composer's current state.
pub fn build_record(composer: &DishComposer) -> DishRecord {
    composer.to_record(new_dish_id(), unix_now())
}

/// Save a dish record to a JSON file.
pub fn save_dish<P: AsRef<Path>>(path: P, record: &DishRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path.as_ref(), json)?;
    info!(id = %record.id, path = %path.as_ref().display(), "saved dish");
    Ok(())
}

/// Write a per-component cost breakdown to a CSV file.
///
/// One row per recipe and ingredient, followed by total cost, price and
/// profit rows.
pub fn export_breakdown_csv<P: AsRef<Path>>(path: P, composer: &DishComposer) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    wtr.write_record(["kind", "id", "name", "unit_cost", "quantity", "line_cost"])?;

    for recipe in composer.selected_recipes() {
        wtr.write_record([
            "recipe".to_string(),
            recipe.id.clone(),
            recipe.name.clone(),
            format!("{:.2}", recipe.total_cost),
            "1".to_string(),
            format!("{:.2}", recipe.total_cost),
        ])?;
    }

    for ingredient in composer.selected_ingredients() {
        wtr.write_record([
            "ingredient".to_string(),
            ingredient.id.clone(),
            ingredient.name.clone(),
            format!("{:.2}", ingredient.unit_cost),
            ingredient.effective_quantity().to_string(),
            format!("{:.2}", ingredient.line_cost()),
        ])?;
    }

    let summary = composer.summary();
    let totals = [
        ("total", composer.draft().name.clone(), summary.cost),
        ("price", String::new(), summary.price),
        ("profit", String::new(), summary.profit),
    ];
    for (kind, name, amount) in totals {
        wtr.write_record([
            kind.to_string(),
            String::new(),
            name,
            String::new(),
            String::new(),
            format!("{:.2}", round_to(amount, CURRENCY_DECIMALS)),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
