use serde::{Deserialize, Serialize};

use crate::pricing::constants::DEFAULT_QUANTITY;

/// A raw ingredient priced per unit.
///
/// `quantity` is only meaningful once the ingredient sits in a selection list;
/// catalog entries usually leave it unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,

    pub name: String,

    /// Cost of one unit, in currency.
    #[serde(rename = "cost")]
    pub unit_cost: f64,

    /// Unit label ("lb", "bunch", ...).
    pub unit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Ingredient {
    pub fn new(id: &str, name: &str, unit_cost: f64, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            unit_cost,
            unit: unit.to_string(),
            quantity: None,
            image: None,
        }
    }

    /// Quantity used for costing: the set quantity when positive, else 1.
    #[inline]
    pub fn effective_quantity(&self) -> f64 {
        match self.quantity {
            Some(q) if q > 0.0 && q.is_finite() => q,
            _ => DEFAULT_QUANTITY,
        }
    }

    /// Unit cost times effective quantity.
    #[inline]
    pub fn line_cost(&self) -> f64 {
        self.unit_cost * self.effective_quantity()
    }

    /// Basic validation: non-empty id and a finite, non-negative unit cost.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && self.unit_cost.is_finite() && self.unit_cost >= 0.0
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ingredient {}

/// A prepared recipe, costed as a single unit.
///
/// The ingredient list is informational; `total_cost` is authoritative and is
/// never re-derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    pub name: String,

    #[serde(rename = "totalRecipeCost")]
    pub total_cost: f64,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl Recipe {
    pub fn new(id: &str, name: &str, total_cost: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            total_cost,
            ingredients: Vec::new(),
            image: None,
            description: None,
            servings: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && self.total_cost.is_finite() && self.total_cost >= 0.0
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}
