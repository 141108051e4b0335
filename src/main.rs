use clap::Parser;
use std::path::{Path, PathBuf};

use dish_pricer_rs::cli::{parse_ingredient_arg, Cli, Command};
use dish_pricer_rs::error::{DishError, Result};
use dish_pricer_rs::interface::{
    display_draft, display_ingredient_list, display_recipe_list, display_summary,
    prompt_action, prompt_amount, prompt_component, prompt_creation_method, prompt_ingredient,
    prompt_margin, prompt_quantity, prompt_recipe, prompt_selected_ingredient, prompt_text,
    prompt_yes_no, Action, ComponentRef,
};
use dish_pricer_rs::models::CreationMethod;
use dish_pricer_rs::pricing::{PricingConfig, DEFAULT_QUANTITY};
use dish_pricer_rs::state::{
    build_record, export_breakdown_csv, load_catalog, save_dish, Catalog, DishComposer,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PricingConfig {
        default_margin: cli.default_margin,
        ..Default::default()
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Create => cmd_create(&cli.catalog, &config),
        Command::Quote {
            recipes,
            ingredients,
            cost,
            margin,
            price,
            name,
            csv,
            save,
        } => {
            let request = QuoteRequest {
                recipes,
                ingredients,
                cost,
                margin,
                price,
                name,
                csv,
                save,
            };
            cmd_quote(&cli.catalog, &config, request)
        }
        Command::Catalog { search } => cmd_catalog(&cli.catalog, search.as_deref()),
    }
}

/// Load the catalog, or fall back to an empty one if the file is missing.
fn load_catalog_or_empty(file_path: &str) -> Result<Catalog> {
    let path = Path::new(file_path);
    if !path.exists() {
        eprintln!("Catalog file not found: {}", file_path);
        eprintln!("Only dishes built from scratch are available.");
        return Ok(Catalog::default());
    }
    load_catalog(path)
}

/// Compose a dish interactively.
fn cmd_create(file_path: &str, config: &PricingConfig) -> Result<()> {
    let catalog = load_catalog_or_empty(file_path)?;
    println!(
        "Loaded {} recipes and {} ingredients",
        catalog.recipes.len(),
        catalog.ingredients.len()
    );
    println!();

    let method = if catalog.is_empty() {
        CreationMethod::Scratch
    } else {
        prompt_creation_method(CreationMethod::default())?
    };
    let mut composer = DishComposer::with_method(method, config);

    loop {
        let action = prompt_action(&composer)?;

        match run_action(action, &mut composer, &catalog, config) {
            Ok(true) => {}
            Ok(false) => break,
            // Bad input and rejected selections are recoverable; keep going.
            Err(
                e @ (DishError::InvalidInput(_)
                | DishError::AlreadySelected(_)
                | DishError::MethodMismatch { .. }
                | DishError::RecipeNotFound(_)
                | DishError::IngredientNotFound(_)),
            ) => {
                println!("{}", e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Apply one session action. Returns false when the session should end.
fn run_action(
    action: Action,
    composer: &mut DishComposer,
    catalog: &Catalog,
    config: &PricingConfig,
) -> Result<bool> {
    match action {
        Action::AddRecipe => {
            if let Some(recipe) = prompt_recipe(catalog, composer.selected_recipes())? {
                let name = recipe.name.clone();
                composer.add_recipe(recipe)?;
                println!("Added: {}", name);
            }
        }
        Action::AddIngredient => {
            if let Some(ingredient) = prompt_ingredient(catalog, composer.selected_ingredients())? {
                let name = ingredient.name.clone();
                composer.add_ingredient(ingredient)?;
                println!("Added: {}", name);
            }
        }
        Action::AdjustQuantity => {
            if let Some(id) = prompt_selected_ingredient(composer)? {
                let current = composer
                    .selected_ingredients()
                    .iter()
                    .find(|i| i.id == id)
                    .map(|i| i.effective_quantity())
                    .unwrap_or(DEFAULT_QUANTITY);
                let quantity = prompt_quantity(current)?;
                composer.update_quantity(&id, quantity)?;
            }
        }
        Action::RemoveComponent => match prompt_component(composer)? {
            Some(ComponentRef::Recipe(id)) => {
                let removed = composer.remove_recipe(&id)?;
                println!("Removed: {}", removed.name);
            }
            Some(ComponentRef::Ingredient(id)) => {
                let removed = composer.remove_ingredient(&id)?;
                println!("Removed: {}", removed.name);
            }
            None => {}
        },
        Action::SetMargin => {
            let margin = prompt_margin(config, composer.draft().margin)?;
            composer.set_margin(margin);
            display_summary(&composer.summary());
        }
        Action::SetPrice => {
            let price = prompt_amount("Selling price", composer.draft().price)?;
            composer.set_price(price);
            display_summary(&composer.summary());
        }
        Action::UseSuggestedPrice => {
            if let Some(price) = composer.apply_suggested_price() {
                println!("Price set to ${:.2}", price);
            }
        }
        Action::SetCost => {
            let cost = prompt_amount("Estimated cost", composer.draft().cost)?;
            composer.set_manual_cost(cost)?;
            display_summary(&composer.summary());
        }
        Action::EditDetails => {
            let draft = composer.draft().clone();
            let name = prompt_text("Dish name", &draft.name)?;
            let description = prompt_text("Description", &draft.description)?;
            let image = prompt_text("Image (path or URL)", draft.image.as_deref().unwrap_or(""))?;
            let category = prompt_text("Category", draft.category.as_deref().unwrap_or(""))?;

            composer.set_name(&name);
            composer.set_description(&description);
            composer.set_image(Some(image));
            composer.set_category(Some(category));
        }
        Action::SwitchMethod => {
            let method = prompt_creation_method(composer.method())?;
            if method == CreationMethod::Scratch
                && composer.has_components()
                && !prompt_yes_no("Scratch mode clears the selected components. Continue?", false)?
            {
                return Ok(true);
            }
            composer.set_method(method);
        }
        Action::ShowSummary => {
            display_draft(composer);
            display_summary(&composer.summary());
        }
        Action::Save => {
            if composer.draft().name.is_empty() {
                return Err(DishError::InvalidInput(
                    "Dish name is required to save".to_string(),
                ));
            }
            let path = prompt_text("Save to", "dish.json")?;
            let record = build_record(composer);
            save_dish(PathBuf::from(path), &record)?;
            println!("Dish '{}' saved as {}.", record.name, record.id);
            return Ok(false);
        }
        Action::Discard => {
            return Ok(!prompt_yes_no("Discard this dish?", false)?);
        }
    }

    Ok(true)
}

/// Arguments for a one-shot quote.
struct QuoteRequest {
    recipes: Vec<String>,
    ingredients: Vec<String>,
    cost: Option<f64>,
    margin: Option<f64>,
    price: Option<f64>,
    name: Option<String>,
    csv: Option<PathBuf>,
    save: Option<PathBuf>,
}

/// Price a dish from command-line arguments.
fn cmd_quote(file_path: &str, config: &PricingConfig, request: QuoteRequest) -> Result<()> {
    let mut composer = match request.cost {
        Some(cost) => {
            let mut composer = DishComposer::with_method(CreationMethod::Scratch, config);
            composer.set_manual_cost(cost)?;
            composer
        }
        None => {
            let catalog = if request.recipes.is_empty() && request.ingredients.is_empty() {
                Catalog::default()
            } else {
                load_catalog(file_path)?
            };
            let mut composer = DishComposer::with_method(CreationMethod::Both, config);

            for id in &request.recipes {
                let recipe = catalog
                    .find_recipe(id)
                    .ok_or_else(|| DishError::RecipeNotFound(id.clone()))?;
                composer.add_recipe(recipe.clone())?;
            }

            for arg in &request.ingredients {
                let (id, quantity) = parse_ingredient_arg(arg)?;
                let ingredient = catalog
                    .find_ingredient(&id)
                    .ok_or_else(|| DishError::IngredientNotFound(id.clone()))?;
                composer.add_ingredient(ingredient.clone())?;
                if let Some(quantity) = quantity {
                    composer.update_quantity(&id, quantity)?;
                }
            }
            composer
        }
    };

    if let Some(name) = &request.name {
        composer.set_name(name);
    }
    if let Some(margin) = request.margin {
        composer.set_margin(margin);
    }
    if let Some(price) = request.price {
        composer.set_price(price);
    }

    display_draft(&composer);
    display_summary(&composer.summary());

    if let Some(path) = &request.csv {
        export_breakdown_csv(path, &composer)?;
        println!("Breakdown written to {}", path.display());
    }

    if let Some(path) = &request.save {
        if composer.draft().name.is_empty() {
            return Err(DishError::InvalidInput(
                "Dish name is required to save".to_string(),
            ));
        }
        let record = build_record(&composer);
        save_dish(path, &record)?;
        println!("Dish '{}' saved as {}.", record.name, record.id);
    }

    Ok(())
}

/// List catalog items, optionally filtered by name.
fn cmd_catalog(file_path: &str, search: Option<&str>) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", file_path);
        return Ok(());
    }

    let catalog = load_catalog(path)?;
    if catalog.is_empty() {
        return Err(DishError::EmptyCatalog);
    }

    let term = search.unwrap_or("");
    let recipes = catalog.search_recipes(term, &[]);
    let ingredients = catalog.search_ingredients(term, &[]);

    display_recipe_list(&recipes, "Recipes");
    display_ingredient_list(&ingredients, "Ingredients");

    if recipes.is_empty() && ingredients.is_empty() && !term.is_empty() {
        let similar: Vec<String> = catalog
            .fuzzy_recipes(term)
            .into_iter()
            .map(|r| r.name.clone())
            .chain(catalog.fuzzy_ingredients(term).into_iter().map(|i| i.name.clone()))
            .take(5)
            .collect();
        if !similar.is_empty() {
            println!("Did you mean: {}?", similar.join(", "));
        }
    }

    Ok(())
}
