use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Ingredient, Recipe};
use crate::pricing::constants::DEFAULT_MARGIN;

/// Which kinds of components a dish is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreationMethod {
    #[default]
    Recipe,
    Ingredient,
    Both,
    /// No components; cost is entered by hand.
    Scratch,
}

impl CreationMethod {
    pub const ALL: [CreationMethod; 4] = [
        CreationMethod::Recipe,
        CreationMethod::Ingredient,
        CreationMethod::Both,
        CreationMethod::Scratch,
    ];

    pub fn accepts_recipes(self) -> bool {
        matches!(self, CreationMethod::Recipe | CreationMethod::Both)
    }

    pub fn accepts_ingredients(self) -> bool {
        matches!(self, CreationMethod::Ingredient | CreationMethod::Both)
    }

    pub fn label(self) -> &'static str {
        match self {
            CreationMethod::Recipe => "From recipes",
            CreationMethod::Ingredient => "From ingredients",
            CreationMethod::Both => "Recipes and ingredients",
            CreationMethod::Scratch => "From scratch",
        }
    }
}

impl fmt::Display for CreationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CreationMethod::Recipe => "recipe",
            CreationMethod::Ingredient => "ingredient",
            CreationMethod::Both => "both",
            CreationMethod::Scratch => "scratch",
        };
        f.write_str(name)
    }
}

/// Work-in-progress menu item.
///
/// `cost` is derived from the selection; `price` and `margin` are edited by
/// the user, and editing `margin` also pushes a new `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub cost: f64,
    pub price: f64,
    /// Target margin, percent of price.
    pub margin: f64,
}

impl Default for DishDraft {
    fn default() -> Self {
        Self::with_margin(DEFAULT_MARGIN)
    }
}

impl DishDraft {
    pub fn with_margin(margin: f64) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image: None,
            category: None,
            cost: 0.0,
            price: 0.0,
            margin,
        }
    }
}

/// A finished dish as handed to storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub cost: f64,
    pub margin: f64,
    pub image: Option<String>,
    pub description: String,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_active: bool,
    /// Unix timestamp, seconds.
    pub created_at: u64,
}

impl DishRecord {
    pub fn new(
        id: String,
        draft: &DishDraft,
        recipes: &[Recipe],
        ingredients: &[Ingredient],
        created_at: u64,
    ) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            price: draft.price,
            cost: draft.cost,
            margin: draft.margin,
            image: draft.image.clone(),
            description: draft.description.clone(),
            recipes: recipes.to_vec(),
            ingredients: ingredients.to_vec(),
            category: draft.category.clone(),
            is_active: true,
            created_at,
        }
    }
}
