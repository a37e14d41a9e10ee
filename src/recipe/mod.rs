// src/recipe/mod.rs — Recipe domain: inputs, prompt construction, response partitioning

pub mod ingredients;
pub mod partition;
pub mod prefs;
pub mod profile;
pub mod prompt;

pub use ingredients::{ExclusionSet, IngredientSet, CATALOG};
pub use partition::{partition, RecipeSegment};
pub use prefs::{
    from_sentinel, CalorieBucket, CookTime, ExtendedPrefs, PreferenceSpec, SkillLevel, SpiceLevel,
};
pub use profile::UserProfile;
pub use prompt::build_prompt;

use crate::infra::errors::FeastError;

/// Gate a generation call: both a credential and at least one ingredient
/// must be present before anything is sent over the wire.
pub fn ensure_can_generate(
    credential: Option<&str>,
    ingredients: &IngredientSet,
) -> Result<(), FeastError> {
    if credential.map_or(true, |c| c.trim().is_empty()) {
        return Err(FeastError::MissingCredential);
    }
    if ingredients.is_empty() {
        return Err(FeastError::EmptyIngredients);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_requires_credential() {
        let ingredients = IngredientSet::from_parts(["tomato"], "");
        assert!(matches!(
            ensure_can_generate(None, &ingredients),
            Err(FeastError::MissingCredential)
        ));
        assert!(matches!(
            ensure_can_generate(Some("  "), &ingredients),
            Err(FeastError::MissingCredential)
        ));
    }

    #[test]
    fn test_gate_requires_ingredients() {
        let empty = IngredientSet::new();
        assert!(matches!(
            ensure_can_generate(Some("key"), &empty),
            Err(FeastError::EmptyIngredients)
        ));
    }

    #[test]
    fn test_gate_passes_with_both() {
        let ingredients = IngredientSet::from_parts(["tomato"], "");
        assert!(ensure_can_generate(Some("key"), &ingredients).is_ok());
    }
}
