// src/recipe/ingredients.rs — Ingredient and exclusion sets

use serde::{Deserialize, Serialize};

/// Common fridge staples offered as a quick-pick list in the interactive form.
pub const CATALOG: [&str; 10] = [
    "tomato",
    "cheese",
    "onion",
    "spinach",
    "chicken",
    "eggs",
    "rice",
    "milk",
    "bread",
    "mushrooms",
];

/// What the user wants to cook with: an order-preserving union of
/// catalog picks and free-typed entries, deduplicated case-insensitively
/// after trimming. An empty set blocks generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of selected entries plus a comma-separated
    /// free-text field (mirrors the two input widgets of the form).
    pub fn from_parts<I, S>(selected: I, custom: S) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for item in selected {
            set.push(item.as_ref());
        }
        set.extend_from_csv(custom.as_ref());
        set
    }

    /// Add one entry. Blank entries are dropped; duplicates (ignoring
    /// case and surrounding whitespace) keep the first occurrence.
    pub fn push(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        let key = trimmed.to_lowercase();
        if self.items.iter().any(|i| i.to_lowercase() == key) {
            return;
        }
        self.items.push(trimmed.to_string());
    }

    /// Add a comma-separated list, one entry at a time.
    pub fn extend_from_csv(&mut self, csv: &str) {
        for part in csv.split(',') {
            self.push(part);
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The verbatim comma-joined list as it appears in the prompt.
    pub fn join(&self) -> String {
        self.items.join(", ")
    }
}

/// What the recipes must avoid: explicit per-request exclusions followed
/// by the profile's standing allergy list. Entries are trimmed and blanks
/// dropped, but nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExclusionSet {
    items: Vec<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts<I, J>(explicit: I, allergies: J) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        let mut items = Vec::new();
        for entry in explicit {
            let trimmed = entry.as_ref().trim();
            if !trimmed.is_empty() {
                items.push(trimmed.to_string());
            }
        }
        for entry in allergies {
            let trimmed = entry.as_ref().trim();
            if !trimmed.is_empty() {
                items.push(trimmed.to_string());
            }
        }
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn join(&self) -> String {
        self.items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_case_insensitive() {
        let set = IngredientSet::from_parts(["Tomato", "cheese"], "tomato, CHEESE, onion");
        assert_eq!(set.items(), &["Tomato", "cheese", "onion"]);
    }

    #[test]
    fn test_trims_and_drops_blanks() {
        let set = IngredientSet::from_parts(Vec::<String>::new(), "  eggs ,  , rice,");
        assert_eq!(set.items(), &["eggs", "rice"]);
    }

    #[test]
    fn test_order_preserved() {
        let set = IngredientSet::from_parts(["rice", "eggs"], "milk");
        assert_eq!(set.join(), "rice, eggs, milk");
    }

    #[test]
    fn test_empty_set_is_distinct_state() {
        let set = IngredientSet::from_parts(Vec::<String>::new(), " , ,");
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_exclusions_concat_without_dedup() {
        let set = ExclusionSet::from_parts(["peanuts", "shellfish"], ["peanuts"]);
        assert_eq!(set.items(), &["peanuts", "shellfish", "peanuts"]);
        assert_eq!(set.join(), "peanuts, shellfish, peanuts");
    }

    #[test]
    fn test_exclusions_drop_blanks() {
        let set = ExclusionSet::from_parts(["  ", "soy "], Vec::<String>::new());
        assert_eq!(set.items(), &["soy"]);
    }

    #[test]
    fn test_catalog_has_ten_staples() {
        assert_eq!(CATALOG.len(), 10);
        assert!(CATALOG.contains(&"tomato"));
    }
}
