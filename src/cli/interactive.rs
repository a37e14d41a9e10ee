// src/cli/interactive.rs — Guided form session
//
// One page, one loop: pick ingredients, set preferences, generate, then act
// on each recipe. A single generation call is in flight at a time; the
// session state is threaded through explicitly.

use inquire::{Confirm, MultiSelect, Select, Text};

use crate::export;
use crate::infra::config::Config;
use crate::infra::paths;
use crate::provider::google::GeminiGenerator;
use crate::provider::{GenerateRequest, TextGenerator};
use crate::recipe::{
    self, build_prompt, from_sentinel, partition, CalorieBucket, CookTime, ExclusionSet,
    ExtendedPrefs, IngredientSet, PreferenceSpec, RecipeSegment, SkillLevel, SpiceLevel, CATALOG,
};
use crate::session::store::SessionStore;
use crate::session::SessionState;
use crate::speech::{LineCapture, SpeechCapture};

const CUISINES: [&str; 7] = [
    "Any",
    "Italian",
    "Chinese",
    "Indian",
    "Mexican",
    "American",
    "Mediterranean",
];
const MEAL_TYPES: [&str; 7] = [
    "Any",
    "Main course",
    "Side dish",
    "Dessert",
    "Breakfast",
    "Snack",
    "Soup",
];
const DIETS: [&str; 6] = [
    "None",
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Keto",
    "Dairy-Free",
];

/// Run the interactive session loop.
pub async fn run_interactive(
    config: &Config,
    credential: Option<String>,
    store: &SessionStore,
) -> anyhow::Result<()> {
    let mut state = store.load_or_default();

    eprintln!(
        "fridgefeast v{} | {} favorite(s) saved\n",
        env!("CARGO_PKG_VERSION"),
        state.favorites.len(),
    );
    eprintln!("Just tell us what's in your fridge, and we'll whip up some tasty ideas.\n");

    // No key resolved yet: ask for one before the first generation.
    let key = match credential {
        Some(key) => key,
        None => {
            let entered = Text::new("Enter your Gemini API key:")
                .with_help_message("Also settable via `fridgefeast init` or GEMINI_API_KEY")
                .prompt()
                .unwrap_or_default();
            if entered.trim().is_empty() {
                eprintln!("Please provide a Gemini API key to generate recipes.");
                return Ok(());
            }
            entered.trim().to_string()
        }
    };
    let generator = GeminiGenerator::new(key.clone());
    let dictation = LineCapture;

    let mut generations = 0u32;
    let mut saved = 0u32;

    loop {
        let ingredients = match gather_ingredients(&dictation).await {
            Some(ingredients) => ingredients,
            None => break,
        };
        if ingredients.is_empty() {
            eprintln!("Add some ingredients to start generating recipes!\n");
            continue;
        }

        let prefs = match gather_prefs(config) {
            Some(prefs) => prefs,
            None => continue,
        };
        let exclusions = gather_exclusions(&state);

        if let Err(e) = recipe::ensure_can_generate(Some(key.as_str()), &ingredients) {
            eprintln!("{}\n", e);
            continue;
        }

        let prompt = build_prompt(&ingredients, &exclusions, &prefs, &state.profile);
        let model = config.api.model.clone();
        eprintln!("\nCooking up some recipe magic with {}...\n", generator.name());

        let raw = match generator
            .generate(GenerateRequest {
                model,
                prompt,
                temperature: Some(config.generation.temperature),
                max_output_tokens: Some(config.generation.max_output_tokens),
            })
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                // Surface the failure verbatim and keep the session alive.
                eprintln!("[error] {}\n", e);
                continue;
            }
        };

        let segments = partition(&raw);
        if segments.is_empty() {
            println!("No recipes came back. Try different ingredients or preferences.\n");
            continue;
        }

        super::generate::print_segments(&segments);
        generations += 1;
        state.record_generation(&ingredients.join(), segments.len(), &raw);
        store.save(&state)?;

        if !act_on_segments(&segments, &ingredients, &mut state, store, &mut saved)? {
            break;
        }
    }

    store.save(&state)?;
    eprintln!(
        "\nSession total: {} generation(s), {} recipe(s) saved.",
        generations, saved,
    );
    Ok(())
}

/// Catalog multi-select plus free-typed custom entries, with optional
/// dictation. Returns None when the user cancels out of the form.
async fn gather_ingredients(dictation: &dyn SpeechCapture) -> Option<IngredientSet> {
    let selected = MultiSelect::new("What's in your fridge?", CATALOG.to_vec())
        .with_help_message("Space to toggle, Enter to confirm, Esc to quit")
        .prompt()
        .ok()?;

    let custom = Text::new("Add any custom ingredients (comma-separated):")
        .prompt()
        .unwrap_or_default();

    let mut ingredients = IngredientSet::from_parts(&selected, &custom);

    let dictate = Confirm::new("Add more by voice dictation?")
        .with_default(false)
        .prompt()
        .unwrap_or(false);
    if dictate {
        match dictation.capture().await {
            Ok(heard) => {
                eprintln!("  heard: {}", heard);
                ingredients.extend_from_csv(&heard);
            }
            Err(e) => eprintln!("  {}", e),
        }
    }

    Some(ingredients)
}

/// The preference widgets. "Any"/"None" options are mapped to absent
/// fields right here, before anything touches the prompt builder.
fn gather_prefs(config: &Config) -> Option<PreferenceSpec> {
    let cuisine = Select::new("Preferred cuisine:", CUISINES.to_vec())
        .prompt()
        .ok()?;
    let meal = Select::new("Meal type:", MEAL_TYPES.to_vec()).prompt().ok()?;
    let diet = Select::new("Dietary preference:", DIETS.to_vec())
        .prompt()
        .ok()?;

    let count = Select::new("How many recipes do you want?", vec![1u8, 2, 3, 4, 5])
        .with_starting_cursor(config.generation.default_count.saturating_sub(1) as usize)
        .prompt()
        .ok()?;

    let mut prefs = PreferenceSpec::with_count(count);
    prefs.cuisine = from_sentinel(cuisine);
    prefs.meal_type = from_sentinel(meal);
    prefs.diet = from_sentinel(diet);

    let fine_tune = Confirm::new("Fine-tune time, spice, skill, and calories?")
        .with_default(false)
        .prompt()
        .unwrap_or(false);
    if fine_tune {
        let extended = gather_extended()?;
        prefs.extended = if extended.is_empty() {
            None
        } else {
            Some(extended)
        };
    }

    Some(prefs)
}

fn gather_extended() -> Option<ExtendedPrefs> {
    let time = Select::new(
        "Cooking time:",
        vec!["Any", "Under 15 min", "Under 30 min", "Under 1 hour", "Over 1 hour"],
    )
    .prompt()
    .ok()?;
    let cook_time = match time {
        "Under 15 min" => Some(CookTime::Under15),
        "Under 30 min" => Some(CookTime::Under30),
        "Under 1 hour" => Some(CookTime::Under60),
        "Over 1 hour" => Some(CookTime::Over60),
        _ => None,
    };

    let spice = Select::new(
        "Spice level:",
        vec![
            "Any",
            "1 - very mild",
            "2 - mild",
            "3 - medium",
            "4 - spicy",
            "5 - very spicy",
        ],
    )
    .prompt()
    .ok()?;
    let spice = spice
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|n| SpiceLevel::from_scale(n as u8));

    let skill = Select::new(
        "Skill level:",
        vec!["Any", "Beginner", "Intermediate", "Advanced"],
    )
    .prompt()
    .ok()?;
    let skill = match skill {
        "Beginner" => Some(SkillLevel::Beginner),
        "Intermediate" => Some(SkillLevel::Intermediate),
        "Advanced" => Some(SkillLevel::Advanced),
        _ => None,
    };

    let calories = Select::new("Calories per serving:", vec!["Any", "Light", "Moderate", "Hearty"])
        .prompt()
        .ok()?;
    let calories = match calories {
        "Light" => Some(CalorieBucket::Light),
        "Moderate" => Some(CalorieBucket::Moderate),
        "Hearty" => Some(CalorieBucket::Hearty),
        _ => None,
    };

    Some(ExtendedPrefs {
        cook_time,
        spice,
        skill,
        calories,
    })
}

fn gather_exclusions(state: &SessionState) -> ExclusionSet {
    let explicit = Text::new("Anything to avoid? (comma-separated, Enter for nothing):")
        .prompt()
        .unwrap_or_default();
    let explicit: Vec<&str> = explicit.split(',').collect();
    ExclusionSet::from_parts(explicit, &state.profile.allergies)
}

/// Per-recipe action menu. Returns false when the user quits the session.
fn act_on_segments(
    segments: &[RecipeSegment],
    ingredients: &IngredientSet,
    state: &mut SessionState,
    store: &SessionStore,
    saved: &mut u32,
) -> anyhow::Result<bool> {
    loop {
        let action = Select::new(
            "What next?",
            vec![
                "Save a recipe",
                "Save all",
                "Export a recipe to a file",
                "Cook again",
                "Quit",
            ],
        )
        .prompt();

        match action {
            Ok("Save a recipe") => {
                if let Some(segment) = pick_segment(segments) {
                    state.save_favorite(segment, &ingredients.join());
                    store.save(state)?;
                    *saved += 1;
                    eprintln!("  Saved \"{}\".", segment.title);
                }
            }
            Ok("Save all") => {
                for segment in segments {
                    state.save_favorite(segment, &ingredients.join());
                }
                store.save(state)?;
                *saved += segments.len() as u32;
                eprintln!("  Saved {} recipe(s).", segments.len());
            }
            Ok("Export a recipe to a file") => {
                if let Some(segment) = pick_segment(segments) {
                    let path = export_segment(segment)?;
                    eprintln!("  Exported to {}", path.display());
                }
            }
            Ok("Cook again") => return Ok(true),
            _ => return Ok(false),
        }
    }
}

fn pick_segment<'a>(segments: &'a [RecipeSegment]) -> Option<&'a RecipeSegment> {
    let titles: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s.title))
        .collect();
    let choice = Select::new("Which recipe?", titles.clone()).prompt().ok()?;
    let index = titles.iter().position(|t| t == &choice)?;
    segments.get(index)
}

fn export_segment(segment: &RecipeSegment) -> anyhow::Result<std::path::PathBuf> {
    let dir = paths::exports_dir();
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.md", export::slugify(&segment.title)));
    std::fs::write(&path, &segment.text)?;
    Ok(path)
}
