// src/session/mod.rs — Session-scoped collections: favorites, history, profile

pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::infra::errors::FeastError;
use crate::recipe::{RecipeSegment, UserProfile};

/// A recipe the user chose to keep. Appended as-is, never deduplicated,
/// removable by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    pub title: String,
    pub body: String,
    pub ingredients: String,
    pub saved_at: DateTime<Utc>,
}

/// One past generation: what was asked for and what came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: DateTime<Utc>,
    pub ingredients: String,
    pub recipe_count: usize,
    pub raw_response: String,
}

/// The whole session, serialized as the flat three-key object that the
/// export/import commands exchange: `favorites`, `recipe_history`,
/// `user_profile`. Collections start empty and are cleared only by
/// explicit action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub favorites: Vec<SavedRecipe>,

    #[serde(default, rename = "recipe_history")]
    pub history: Vec<HistoryEntry>,

    #[serde(default, rename = "user_profile")]
    pub profile: UserProfile,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_favorite(&mut self, segment: &RecipeSegment, ingredients: &str) {
        self.favorites.push(SavedRecipe {
            title: segment.title.clone(),
            body: segment.body.clone(),
            ingredients: ingredients.to_string(),
            saved_at: Utc::now(),
        });
    }

    /// Remove by zero-based index; returns the removed recipe, or None if
    /// the index is out of range.
    pub fn remove_favorite(&mut self, index: usize) -> Option<SavedRecipe> {
        if index < self.favorites.len() {
            Some(self.favorites.remove(index))
        } else {
            None
        }
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
    }

    pub fn record_generation(&mut self, ingredients: &str, recipe_count: usize, raw: &str) {
        self.history.push(HistoryEntry {
            date: Utc::now(),
            ingredients: ingredients.to_string(),
            recipe_count,
            raw_response: raw.to_string(),
        });
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The exportable flat object.
    pub fn export_value(&self) -> Result<serde_json::Value, FeastError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Import a previously exported payload. Each of the three keys is
    /// replaced wholesale when present; missing keys are left untouched.
    /// Any present key of the wrong shape fails the whole import before
    /// anything is applied.
    pub fn import_value(&mut self, value: serde_json::Value) -> Result<(), FeastError> {
        let serde_json::Value::Object(map) = value else {
            return Err(FeastError::MalformedImport {
                reason: "payload is not a JSON object".into(),
            });
        };

        let favorites = match map.get("favorites") {
            Some(v) => Some(
                serde_json::from_value::<Vec<SavedRecipe>>(v.clone()).map_err(|e| {
                    FeastError::MalformedImport {
                        reason: format!("favorites: {}", e),
                    }
                })?,
            ),
            None => None,
        };
        let history = match map.get("recipe_history") {
            Some(v) => Some(
                serde_json::from_value::<Vec<HistoryEntry>>(v.clone()).map_err(|e| {
                    FeastError::MalformedImport {
                        reason: format!("recipe_history: {}", e),
                    }
                })?,
            ),
            None => None,
        };
        let profile = match map.get("user_profile") {
            Some(v) => Some(serde_json::from_value::<UserProfile>(v.clone()).map_err(
                |e| FeastError::MalformedImport {
                    reason: format!("user_profile: {}", e),
                },
            )?),
            None => None,
        };

        if let Some(favorites) = favorites {
            self.favorites = favorites;
        }
        if let Some(history) = history {
            self.history = history;
        }
        if let Some(profile) = profile {
            self.profile = profile;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::partition;

    fn segment() -> RecipeSegment {
        partition("## Pasta\nBoil water.").remove(0)
    }

    #[test]
    fn test_save_never_dedups() {
        let mut state = SessionState::new();
        state.save_favorite(&segment(), "tomato");
        state.save_favorite(&segment(), "tomato");
        assert_eq!(state.favorites.len(), 2);
    }

    #[test]
    fn test_remove_by_index() {
        let mut state = SessionState::new();
        state.save_favorite(&segment(), "tomato");
        let removed = state.remove_favorite(0).unwrap();
        assert_eq!(removed.title, "Pasta");
        assert!(state.favorites.is_empty());
        assert!(state.remove_favorite(0).is_none());
    }

    #[test]
    fn test_export_has_three_flat_keys() {
        let state = SessionState::new();
        let value = state.export_value().unwrap();
        let map = value.as_object().unwrap();
        assert!(map.contains_key("favorites"));
        assert!(map.contains_key("recipe_history"));
        assert!(map.contains_key("user_profile"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_import_round_trip() {
        let mut state = SessionState::new();
        state.save_favorite(&segment(), "tomato");
        state.record_generation("tomato", 1, "## Pasta\nBoil water.");
        state.profile.allergies.push("peanuts".into());

        let mut restored = SessionState::new();
        restored.import_value(state.export_value().unwrap()).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_import_empty_object_changes_nothing() {
        let mut state = SessionState::new();
        state.save_favorite(&segment(), "tomato");
        let before = state.clone();

        state.import_value(serde_json::json!({})).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_import_replaces_only_present_keys() {
        let mut state = SessionState::new();
        state.save_favorite(&segment(), "tomato");
        state.profile.allergies.push("peanuts".into());

        state
            .import_value(serde_json::json!({ "favorites": [] }))
            .unwrap();
        assert!(state.favorites.is_empty());
        assert_eq!(state.profile.allergies, vec!["peanuts"]);
    }

    #[test]
    fn test_import_rejects_non_object() {
        let mut state = SessionState::new();
        let err = state.import_value(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, FeastError::MalformedImport { .. }));
    }

    #[test]
    fn test_import_malformed_key_applies_nothing() {
        let mut state = SessionState::new();
        state.profile.allergies.push("peanuts".into());
        let before = state.clone();

        let err = state
            .import_value(serde_json::json!({
                "favorites": [],
                "user_profile": "not an object",
            }))
            .unwrap_err();
        assert!(matches!(err, FeastError::MalformedImport { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_clear_actions() {
        let mut state = SessionState::new();
        state.save_favorite(&segment(), "tomato");
        state.record_generation("tomato", 1, "raw");
        state.clear_favorites();
        state.clear_history();
        assert!(state.favorites.is_empty());
        assert!(state.history.is_empty());
    }
}
