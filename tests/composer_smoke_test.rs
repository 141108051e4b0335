#[macro_use]
extern crate assert_float_eq;

use dish_pricer_rs::models::{CreationMethod, Ingredient, Recipe};
use dish_pricer_rs::pricing::{MarginStatus, PricingConfig};
use dish_pricer_rs::state::{Catalog, DishComposer};

fn sample_catalog() -> Catalog {
    let mut sauce = Recipe::new("1", "Tomato Basil Sauce", 3.5);
    sauce.description = Some("Fresh tomato sauce with basil".to_string());
    sauce.servings = Some(4);

    Catalog::new(
        vec![
            sauce,
            Recipe::new("2", "Pizza Dough", 2.25),
            Recipe::new("3", "Cheese Blend", 4.75),
        ],
        vec![
            Ingredient::new("1", "Fresh Tomatoes", 2.5, "lb"),
            Ingredient::new("2", "Mozzarella Cheese", 4.25, "lb"),
            Ingredient::new("3", "Fresh Basil", 1.75, "bunch"),
            Ingredient::new("4", "Olive Oil", 6.5, "bottle"),
        ],
    )
}

fn combined() -> DishComposer {
    DishComposer::with_method(CreationMethod::Both, &PricingConfig::default())
}

#[test]
fn test_end_to_end_recipe_and_ingredient() {
    let catalog = sample_catalog();
    let mut composer = combined();

    composer
        .add_recipe(catalog.find_recipe("1").unwrap().clone())
        .unwrap();
    composer
        .add_ingredient(catalog.find_ingredient("1").unwrap().clone())
        .unwrap();
    composer.update_quantity("1", 2.0).unwrap();

    assert_float_absolute_eq!(composer.draft().cost, 8.5, 1e-9);

    composer.set_margin(30.0);
    assert_eq!(composer.draft().price, 12.14);

    let summary = composer.summary();
    assert_float_absolute_eq!(summary.actual_margin, 29.9835, 1e-3);
    assert_float_absolute_eq!(summary.profit, 3.64, 1e-9);
    assert_eq!(summary.status, MarginStatus::TargetAchieved);
}

#[test]
fn test_fresh_composer_defaults() {
    let composer = DishComposer::default();
    let draft = composer.draft();

    assert_eq!(composer.method(), CreationMethod::Recipe);
    assert_eq!(draft.cost, 0.0);
    assert_eq!(draft.price, 0.0);
    assert_eq!(draft.margin, 30.0);
    assert!(draft.name.is_empty());
    assert!(draft.description.is_empty());
    assert!(draft.image.is_none());
}

#[test]
fn test_cost_tracks_every_selection_change() {
    let catalog = sample_catalog();
    let mut composer = combined();

    composer
        .add_recipe(catalog.find_recipe("2").unwrap().clone())
        .unwrap();
    composer
        .add_recipe(catalog.find_recipe("3").unwrap().clone())
        .unwrap();
    assert_float_absolute_eq!(composer.draft().cost, 7.0, 1e-9);

    composer
        .add_ingredient(catalog.find_ingredient("4").unwrap().clone())
        .unwrap();
    composer.adjust_quantity("4", 1.0).unwrap();
    assert_float_absolute_eq!(composer.draft().cost, 20.0, 1e-9);

    composer.remove_recipe("2").unwrap();
    assert_float_absolute_eq!(composer.draft().cost, 17.75, 1e-9);

    composer.update_quantity("4", -1.0).unwrap();
    assert_float_absolute_eq!(composer.draft().cost, 4.75, 1e-9);

    // Recomputing without a change leaves the cost where it is.
    composer.recompute();
    composer.recompute();
    assert_float_absolute_eq!(composer.draft().cost, 4.75, 1e-9);
}

#[test]
fn test_catalog_search_drives_selection() {
    let catalog = sample_catalog();
    let mut composer = combined();

    let hits = catalog.search_ingredients("fresh", composer.selected_ingredients());
    assert_eq!(hits.len(), 2);
    composer.add_ingredient(hits[0].clone()).unwrap();

    let hits = catalog.search_ingredients("fresh", composer.selected_ingredients());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Fresh Basil");
}

#[test]
fn test_price_edit_changes_status_not_margin() {
    let catalog = sample_catalog();
    let mut composer = combined();
    composer
        .add_recipe(catalog.find_recipe("3").unwrap().clone())
        .unwrap();

    composer.set_margin(50.0);
    assert_eq!(composer.draft().price, 9.5);
    assert_eq!(composer.summary().status, MarginStatus::TargetAchieved);

    composer.set_price(6.0);
    assert_eq!(composer.draft().margin, 50.0);
    assert_eq!(composer.summary().status, MarginStatus::BelowTarget);

    composer.set_price(4.0);
    let summary = composer.summary();
    assert_eq!(summary.status, MarginStatus::NoMargin);
    assert_float_absolute_eq!(summary.profit, -0.75, 1e-9);
}

#[test]
fn test_margin_at_or_above_hundred_has_no_suggestion() {
    let catalog = sample_catalog();
    let mut composer = combined();
    composer
        .add_recipe(catalog.find_recipe("1").unwrap().clone())
        .unwrap();
    composer.set_price(7.0);

    composer.set_margin(100.0);
    let summary = composer.summary();
    assert_eq!(summary.suggested_price, None);
    assert_eq!(composer.draft().price, 7.0);
    assert!(summary.actual_margin.is_finite());
    assert_eq!(summary.status, MarginStatus::BelowTarget);
    assert_eq!(composer.apply_suggested_price(), None);
}

#[test]
fn test_scratch_dish() {
    let mut composer = DishComposer::with_method(CreationMethod::Scratch, &PricingConfig::default());
    composer.set_name("Chef's Special");
    composer.set_manual_cost(6.0).unwrap();
    composer.set_price(10.0);

    let summary = composer.summary();
    assert_float_absolute_eq!(summary.actual_margin, 40.0, 1e-9);
    assert_float_absolute_eq!(summary.profit, 4.0, 1e-9);
    assert_eq!(summary.status, MarginStatus::TargetAchieved);

    let record = composer.to_record("dish-1".to_string(), 0);
    assert_eq!(record.name, "Chef's Special");
    assert!(record.recipes.is_empty());
    assert_eq!(record.cost, 6.0);
}
