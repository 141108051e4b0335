use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::models::{Ingredient, Recipe};

/// Minimum Jaro-Winkler similarity for a fuzzy match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Recipes and ingredients available for composing dishes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub recipes: Vec<Recipe>,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            recipes,
            ingredients,
        }
    }

    pub fn find_recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn find_ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Recipes whose name contains `term` (case-insensitive), minus those
    /// already selected. An empty term matches everything.
    pub fn search_recipes(&self, term: &str, selected: &[Recipe]) -> Vec<&Recipe> {
        let needle = term.trim().to_lowercase();
        self.recipes
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .filter(|r| !selected.iter().any(|s| s.id == r.id))
            .collect()
    }

    /// Ingredients whose name contains `term`, minus those already selected.
    pub fn search_ingredients(&self, term: &str, selected: &[Ingredient]) -> Vec<&Ingredient> {
        let needle = term.trim().to_lowercase();
        self.ingredients
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&needle))
            .filter(|i| !selected.iter().any(|s| s.id == i.id))
            .collect()
    }

    /// Recipes with a name similar to `term`, best match first.
    pub fn fuzzy_recipes(&self, term: &str) -> Vec<&Recipe> {
        fuzzy_rank(&self.recipes, |r| r.name.as_str(), term)
    }

    /// Ingredients with a name similar to `term`, best match first.
    pub fn fuzzy_ingredients(&self, term: &str) -> Vec<&Ingredient> {
        fuzzy_rank(&self.ingredients, |i| i.name.as_str(), term)
    }

    pub fn len(&self) -> usize {
        self.recipes.len() + self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty() && self.ingredients.is_empty()
    }
}

fn fuzzy_rank<'a, T>(items: &'a [T], name: impl Fn(&T) -> &str, term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&T, f64)> = items
        .iter()
        .map(|item| (item, jaro_winkler(&name(item).to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(item, _)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                Recipe::new("r1", "Tomato Basil Sauce", 3.5),
                Recipe::new("r2", "Pizza Dough", 2.25),
                Recipe::new("r3", "Cheese Blend", 4.75),
            ],
            vec![
                Ingredient::new("i1", "Fresh Tomatoes", 2.5, "lb"),
                Ingredient::new("i2", "Mozzarella Cheese", 4.25, "lb"),
                Ingredient::new("i3", "Fresh Basil", 1.75, "bunch"),
                Ingredient::new("i4", "Olive Oil", 6.5, "bottle"),
            ],
        )
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = sample_catalog();
        let hits = catalog.search_ingredients("FRESH", &[]);
        assert_eq!(hits.len(), 2);

        let hits = catalog.search_recipes("dough", &[]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "r2");
    }

    #[test]
    fn test_search_excludes_selected() {
        let catalog = sample_catalog();
        let selected = vec![Recipe::new("r1", "Tomato Basil Sauce", 3.5)];

        let hits = catalog.search_recipes("", &selected);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.id != "r1"));
    }

    #[test]
    fn test_fuzzy_matches_typos() {
        let catalog = sample_catalog();
        let hits = catalog.fuzzy_ingredients("mozarela");
        assert!(!hits.is_empty());
        assert_eq!(hits[0].id, "i2");

        assert!(catalog.fuzzy_recipes("").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find_recipe("r3").map(|r| r.total_cost), Some(4.75));
        assert!(catalog.find_ingredient("nope").is_none());
        assert_eq!(catalog.len(), 7);
    }
}
