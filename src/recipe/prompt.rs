// src/recipe/prompt.rs — Assembles the generation prompt from ingredients, exclusions, preferences, and profile defaults

use super::ingredients::{ExclusionSet, IngredientSet};
use super::prefs::{ExtendedPrefs, PreferenceSpec};
use super::profile::UserProfile;

/// Build the complete instruction string sent as the generation request.
///
/// Clauses (in order, each omitted when its field is unset):
///   1. Header — recipe count, verbatim ingredient list, mandatory output fields
///   2. Formatting directive — markdown shape and the `---` separator the
///      partitioner splits on
///   3. Exclusions
///   4. Cuisine — explicit choice, else the profile's soft suggestion
///   5. Meal type
///   6. Diet
///   7. Extended block — cooking time, spice, skill (profile-backed), calories
///   8. Closing variety-and-tone directive
///
/// Deterministic and infallible: unset fields are absent, never an error,
/// and no clause is emitted twice.
pub fn build_prompt(
    ingredients: &IngredientSet,
    exclusions: &ExclusionSet,
    prefs: &PreferenceSpec,
    profile: &UserProfile,
) -> String {
    let mut prompt = String::with_capacity(1024);

    append_header(&mut prompt, prefs.count(), ingredients);
    append_format_directive(&mut prompt);
    append_exclusion_clause(&mut prompt, exclusions);
    append_cuisine_clause(
        &mut prompt,
        prefs.cuisine.as_deref(),
        &profile.preferred_cuisines,
    );
    append_meal_clause(&mut prompt, prefs.meal_type.as_deref());
    append_diet_clause(&mut prompt, prefs.diet.as_deref());
    if let Some(ext) = &prefs.extended {
        append_extended_clauses(&mut prompt, ext, profile);
    }
    append_closing(&mut prompt);

    prompt
}

// ─── Clause builders ────────────────────────────────────────────────────────

fn append_header(prompt: &mut String, count: u8, ingredients: &IngredientSet) {
    prompt.push_str(&format!(
        "You are a creative and friendly recipe assistant. Create {} unique, simple, \
         and delicious recipes based on the following ingredients: {}.\n\n",
        count,
        ingredients.join(),
    ));
    prompt.push_str(
        "Each recipe must include:\n\
         - A creative title\n\
         - A short description\n\
         - A list of ingredients with quantities\n\
         - Numbered step-by-step instructions\n\
         - Total cooking time\n\
         - Difficulty level\n\
         - An estimated calorie count\n\
         - Number of servings\n\n",
    );
}

fn append_format_directive(prompt: &mut String) {
    prompt.push_str(
        "Respond in clean markdown: one heading per recipe, bullet points for the \
         ingredient list, and a numbered list for the steps. Separate the recipes \
         with a horizontal rule (---) on its own line.\n\n",
    );
}

fn append_exclusion_clause(prompt: &mut String, exclusions: &ExclusionSet) {
    if exclusions.is_empty() {
        return;
    }
    prompt.push_str(&format!(
        "Strictly avoid these ingredients: {}.\n",
        exclusions.join(),
    ));
}

/// An explicit cuisine choice always wins; the profile's preferred cuisines
/// are only ever a soft suggestion, and the two are mutually exclusive.
fn append_cuisine_clause(prompt: &mut String, explicit: Option<&str>, preferred: &[String]) {
    if let Some(cuisine) = explicit {
        prompt.push_str(&format!("The recipes should follow {} cuisine.\n", cuisine));
    } else if !preferred.is_empty() {
        prompt.push_str(&format!(
            "If it suits the ingredients, feel free to lean toward {} cooking, \
             though this is only a suggestion.\n",
            preferred.join(" or "),
        ));
    }
}

fn append_meal_clause(prompt: &mut String, meal_type: Option<&str>) {
    if let Some(meal) = meal_type {
        prompt.push_str(&format!(
            "They should be suitable for {}.\n",
            meal.to_lowercase(),
        ));
    }
}

fn append_diet_clause(prompt: &mut String, diet: Option<&str>) {
    if let Some(diet) = diet {
        prompt.push_str(&format!(
            "All recipes must follow a {} diet.\n",
            diet.to_lowercase(),
        ));
    }
}

fn append_extended_clauses(prompt: &mut String, ext: &ExtendedPrefs, profile: &UserProfile) {
    if let Some(time) = ext.cook_time {
        prompt.push_str(&format!("Keep the total cooking time {}.\n", time));
    }
    if let Some(spice) = ext.spice {
        prompt.push_str(&format!("Aim for a {} level of spiciness.\n", spice));
    }
    if let Some(skill) = ext.skill.or(profile.skill_level) {
        prompt.push_str(&format!("Pitch the difficulty at a {} cook.\n", skill));
    }
    if let Some(calories) = ext.calories {
        prompt.push_str(&format!("Keep each recipe {}.\n", calories));
    }
}

fn append_closing(prompt: &mut String) {
    prompt.push_str(
        "\nVary the recipes so they do not repeat the same combinations, and keep \
         the tone fun and engaging.\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::prefs::{CalorieBucket, CookTime, SkillLevel, SpiceLevel};
    use crate::recipe::{from_sentinel, ExtendedPrefs, PreferenceSpec};

    fn ingredients(csv: &str) -> IngredientSet {
        IngredientSet::from_parts(Vec::<String>::new(), csv)
    }

    #[test]
    fn test_all_unset_has_no_optional_clauses() {
        let prompt = build_prompt(
            &ingredients("tomato, cheese"),
            &ExclusionSet::new(),
            &PreferenceSpec::default(),
            &UserProfile::default(),
        );

        assert!(!prompt.contains("cuisine"));
        assert!(!prompt.contains("suitable for"));
        assert!(!prompt.contains("diet"));
        assert!(!prompt.contains("Keep the total cooking time"));
        assert!(!prompt.contains("spiciness"));
        assert!(!prompt.contains("Pitch the difficulty"));
        assert!(!prompt.contains("per serving"));
        assert!(!prompt.contains("Strictly avoid"));
    }

    #[test]
    fn test_sentinels_never_leak() {
        let prefs = PreferenceSpec {
            cuisine: from_sentinel("Any"),
            meal_type: from_sentinel("Any"),
            diet: from_sentinel("None"),
            ..Default::default()
        };
        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &prefs,
            &UserProfile::default(),
        );

        assert!(!prompt.contains("Any"));
        assert!(!prompt.contains("None"));
    }

    #[test]
    fn test_exclusions_appear_exactly_once() {
        let exclusions = ExclusionSet::from_parts(["peanuts", "shellfish"], Vec::<String>::new());
        let prompt = build_prompt(
            &ingredients("rice"),
            &exclusions,
            &PreferenceSpec::default(),
            &UserProfile::default(),
        );

        assert_eq!(prompt.matches("peanuts").count(), 1);
        assert_eq!(prompt.matches("shellfish").count(), 1);
        assert_eq!(prompt.matches("Strictly avoid").count(), 1);
    }

    #[test]
    fn test_profile_allergies_flow_through_exclusions() {
        let profile = UserProfile {
            allergies: vec!["walnuts".into()],
            ..Default::default()
        };
        let exclusions = ExclusionSet::from_parts(["dairy"], &profile.allergies);
        let prompt = build_prompt(
            &ingredients("rice"),
            &exclusions,
            &PreferenceSpec::default(),
            &profile,
        );

        assert!(prompt.contains("Strictly avoid these ingredients: dairy, walnuts."));
    }

    #[test]
    fn test_explicit_cuisine_suppresses_profile_suggestion() {
        let profile = UserProfile {
            preferred_cuisines: vec!["Thai".into(), "Mexican".into()],
            ..Default::default()
        };
        let prefs = PreferenceSpec {
            cuisine: Some("Italian".into()),
            ..Default::default()
        };
        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &prefs,
            &profile,
        );

        assert!(prompt.contains("Italian cuisine"));
        assert!(!prompt.contains("Thai"));
        assert!(!prompt.contains("only a suggestion"));
    }

    #[test]
    fn test_profile_cuisines_are_soft_guidance() {
        let profile = UserProfile {
            preferred_cuisines: vec!["Thai".into()],
            ..Default::default()
        };
        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &PreferenceSpec::default(),
            &profile,
        );

        assert!(prompt.contains("lean toward Thai cooking"));
        assert!(prompt.contains("only a suggestion"));
    }

    #[test]
    fn test_count_clamped_in_output() {
        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &PreferenceSpec::with_count(0),
            &UserProfile::default(),
        );
        assert!(prompt.contains("Create 1 unique"));

        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &PreferenceSpec::with_count(9),
            &UserProfile::default(),
        );
        assert!(prompt.contains("Create 5 unique"));
    }

    #[test]
    fn test_scenario_italian_two_recipes() {
        let mut prefs = PreferenceSpec::with_count(2);
        prefs.cuisine = from_sentinel("Italian");
        prefs.meal_type = from_sentinel("Any");
        prefs.diet = from_sentinel("None");

        let prompt = build_prompt(
            &ingredients("tomato, cheese"),
            &ExclusionSet::new(),
            &prefs,
            &UserProfile::default(),
        );

        assert!(prompt.contains("2 unique"));
        assert!(prompt.contains("tomato, cheese"));
        assert!(prompt.contains("Italian cuisine"));
        assert!(!prompt.contains("suitable for"));
        assert!(!prompt.contains("diet"));
    }

    #[test]
    fn test_meal_and_diet_lowercased() {
        let prefs = PreferenceSpec {
            meal_type: Some("Main course".into()),
            diet: Some("Vegetarian".into()),
            ..Default::default()
        };
        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &prefs,
            &UserProfile::default(),
        );

        assert!(prompt.contains("suitable for main course"));
        assert!(prompt.contains("a vegetarian diet"));
    }

    #[test]
    fn test_extended_clauses_each_independent() {
        let prefs = PreferenceSpec {
            extended: Some(ExtendedPrefs {
                cook_time: Some(CookTime::Under30),
                spice: Some(SpiceLevel::Spicy),
                skill: None,
                calories: Some(CalorieBucket::Light),
            }),
            ..Default::default()
        };
        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &prefs,
            &UserProfile::default(),
        );

        assert!(prompt.contains("Keep the total cooking time under 30 minutes."));
        assert!(prompt.contains("Aim for a spicy level of spiciness."));
        assert!(prompt.contains("under 400 calories per serving"));
        assert!(!prompt.contains("Pitch the difficulty"));
    }

    #[test]
    fn test_skill_falls_back_to_profile() {
        let profile = UserProfile {
            skill_level: Some(SkillLevel::Beginner),
            ..Default::default()
        };
        let prefs = PreferenceSpec {
            extended: Some(ExtendedPrefs::default()),
            ..Default::default()
        };
        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &prefs,
            &profile,
        );
        assert!(prompt.contains("Pitch the difficulty at a beginner cook."));
    }

    #[test]
    fn test_explicit_skill_wins_over_profile() {
        let profile = UserProfile {
            skill_level: Some(SkillLevel::Beginner),
            ..Default::default()
        };
        let prefs = PreferenceSpec {
            extended: Some(ExtendedPrefs {
                skill: Some(SkillLevel::Advanced),
                ..Default::default()
            }),
            ..Default::default()
        };
        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &prefs,
            &profile,
        );
        assert!(prompt.contains("advanced cook"));
        assert!(!prompt.contains("beginner"));
    }

    #[test]
    fn test_profile_skill_ignored_without_extended_block() {
        let profile = UserProfile {
            skill_level: Some(SkillLevel::Advanced),
            ..Default::default()
        };
        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &PreferenceSpec::default(),
            &profile,
        );
        assert!(!prompt.contains("Pitch the difficulty"));
    }

    #[test]
    fn test_stable_output_shape() {
        let prefs = PreferenceSpec {
            cuisine: Some("Indian".into()),
            diet: Some("Vegan".into()),
            ..Default::default()
        };
        let a = build_prompt(
            &ingredients("rice, onion"),
            &ExclusionSet::new(),
            &prefs,
            &UserProfile::default(),
        );
        let b = build_prompt(
            &ingredients("rice, onion"),
            &ExclusionSet::new(),
            &prefs,
            &UserProfile::default(),
        );
        assert_eq!(a, b);
        // Cuisine clause precedes the diet clause.
        assert!(a.find("Indian cuisine").unwrap() < a.find("vegan diet").unwrap());
    }

    #[test]
    fn test_separator_directive_present() {
        let prompt = build_prompt(
            &ingredients("rice"),
            &ExclusionSet::new(),
            &PreferenceSpec::default(),
            &UserProfile::default(),
        );
        assert!(prompt.contains("horizontal rule (---)"));
        assert!(prompt.contains("fun and engaging"));
    }
}
