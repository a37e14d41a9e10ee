// src/cli/generate.rs — One-shot generation from flags

use super::Cli;
use crate::infra::config::Config;
use crate::provider::{GenerateRequest, TextGenerator};
use crate::recipe::{
    self, build_prompt, from_sentinel, partition, ExclusionSet, ExtendedPrefs, IngredientSet,
    PreferenceSpec, RecipeSegment, SpiceLevel,
};
use crate::session::store::SessionStore;

/// Run the generate flow: gate, build the prompt, call the backend once,
/// partition the response, print, and record history (plus favorites when
/// --save is given).
pub async fn run_generate(
    cli: &Cli,
    config: &Config,
    credential: Option<String>,
    store: &SessionStore,
) -> anyhow::Result<()> {
    let mut state = store.load_or_default();

    let ingredients = IngredientSet::from_parts(&cli.ingredients, "");
    let exclusions = ExclusionSet::from_parts(&cli.exclusions, &state.profile.allergies);
    let prefs = prefs_from_flags(cli, config);

    recipe::ensure_can_generate(credential.as_deref(), &ingredients)?;
    let key = credential.ok_or(crate::infra::errors::FeastError::MissingCredential)?;
    let generator = crate::provider::google::GeminiGenerator::new(key);

    let prompt = build_prompt(&ingredients, &exclusions, &prefs, &state.profile);
    tracing::debug!("prompt:\n{}", prompt);

    let model = cli
        .model
        .clone()
        .unwrap_or_else(|| config.api.model.clone());
    eprintln!("Cooking up some recipe magic with {}...", generator.name());

    let raw = generator
        .generate(GenerateRequest {
            model,
            prompt,
            temperature: Some(config.generation.temperature),
            max_output_tokens: Some(config.generation.max_output_tokens),
        })
        .await?;

    let segments = partition(&raw);
    if segments.is_empty() {
        println!("No recipes came back. Try different ingredients or preferences.");
        return Ok(());
    }

    print_segments(&segments);

    state.record_generation(&ingredients.join(), segments.len(), &raw);
    if cli.save {
        for segment in &segments {
            state.save_favorite(segment, &ingredients.join());
        }
        println!(
            "\nSaved {} recipe(s) to favorites.",
            segments.len()
        );
    }
    store.save(&state)?;

    Ok(())
}

/// Translate the flag surface into a PreferenceSpec, mapping "Any"/"None"
/// select values to absent fields at this edge.
pub fn prefs_from_flags(cli: &Cli, config: &Config) -> PreferenceSpec {
    let extended = ExtendedPrefs {
        cook_time: cli.time,
        spice: cli.spice.map(SpiceLevel::from_scale),
        skill: cli.skill,
        calories: cli.calories,
    };

    let mut prefs = PreferenceSpec::with_count(
        cli.count.unwrap_or(config.generation.default_count),
    );
    prefs.cuisine = cli.cuisine.as_deref().and_then(from_sentinel);
    prefs.meal_type = cli.meal.as_deref().and_then(from_sentinel);
    prefs.diet = cli.diet.as_deref().and_then(from_sentinel);
    prefs.extended = if extended.is_empty() {
        None
    } else {
        Some(extended)
    };
    prefs
}

pub fn print_segments(segments: &[RecipeSegment]) {
    println!("\nYour AI-powered recipes:\n");
    for (i, segment) in segments.iter().enumerate() {
        println!("{}. {}", i + 1, segment.title);
        println!("{}", "-".repeat(segment.title.len() + 3));
        if !segment.body.is_empty() {
            println!("{}\n", segment.body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fridgefeast").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_prefs_from_flags_maps_sentinels() {
        let cli = parse(&["-i", "tomato", "--cuisine", "Any", "--diet", "None"]);
        let prefs = prefs_from_flags(&cli, &Config::default());
        assert!(prefs.cuisine.is_none());
        assert!(prefs.diet.is_none());
        assert!(prefs.extended.is_none());
    }

    #[test]
    fn test_prefs_from_flags_extended_block() {
        let cli = parse(&["-i", "rice", "--spice", "5", "--skill", "beginner"]);
        let prefs = prefs_from_flags(&cli, &Config::default());
        let ext = prefs.extended.unwrap();
        assert_eq!(ext.spice, Some(SpiceLevel::VerySpicy));
        assert!(ext.cook_time.is_none());
    }

    #[test]
    fn test_count_defaults_from_config() {
        let cli = parse(&["-i", "rice"]);
        let prefs = prefs_from_flags(&cli, &Config::default());
        assert_eq!(prefs.count(), 3);
    }

    #[test]
    fn test_comma_separated_ingredient_flags() {
        let cli = parse(&["-i", "tomato,cheese", "-x", "peanuts,soy"]);
        assert_eq!(cli.ingredients, vec!["tomato", "cheese"]);
        assert_eq!(cli.exclusions, vec!["peanuts", "soy"]);
    }
}
