use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{DishError, Result};
use crate::pricing::DEFAULT_MARGIN;

/// Dish Pricer: compose menu dishes from recipes and ingredients and price them by margin.
#[derive(Parser, Debug)]
#[command(name = "dish_pricer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog JSON file.
    #[arg(short, long, default_value = "catalog.json")]
    pub catalog: String,

    /// Target margin (%) a new dish starts with.
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub default_margin: f64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose a dish interactively.
    Create,

    /// Price a dish from the command line.
    Quote {
        /// Recipe id to include (repeatable).
        #[arg(long = "recipe")]
        recipes: Vec<String>,

        /// Ingredient to include as `id` or `id:quantity` (repeatable).
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        /// Estimated cost for a dish built from scratch.
        #[arg(long, conflicts_with_all = ["recipes", "ingredients"])]
        cost: Option<f64>,

        /// Target margin (%); sets the price from the cost.
        #[arg(long)]
        margin: Option<f64>,

        /// Selling price; overrides the price derived from the margin.
        #[arg(long)]
        price: Option<f64>,

        /// Dish name.
        #[arg(long)]
        name: Option<String>,

        /// Write a cost breakdown CSV to this path.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Save the finished dish as JSON to this path.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// List catalog recipes and ingredients.
    Catalog {
        /// Only show items whose name contains this text.
        #[arg(short, long)]
        search: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Create
    }
}

/// Parse an ingredient argument of the form `id` or `id:quantity`.
pub fn parse_ingredient_arg(arg: &str) -> Result<(String, Option<f64>)> {
    match arg.split_once(':') {
        None => Ok((arg.trim().to_string(), None)),
        Some((id, qty)) => {
            let quantity: f64 = qty.trim().parse().map_err(|_| {
                DishError::InvalidInput(format!("Invalid quantity in '{}'", arg))
            })?;
            Ok((id.trim().to_string(), Some(quantity)))
        }
    }
}
