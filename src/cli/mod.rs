// src/cli/mod.rs — CLI definition (clap derive)

pub mod export;
pub mod favorites;
pub mod generate;
pub mod history;
pub mod init;
pub mod interactive;
pub mod profile;

use clap::{Parser, Subcommand};

use crate::recipe::{CalorieBucket, CookTime, SkillLevel};

#[derive(Parser)]
#[command(
    name = "fridgefeast",
    about = "Turn your fridge into a feast with AI-generated recipes",
    version
)]
pub struct Cli {
    /// Ingredients to cook with (repeatable; comma-separated values accepted)
    #[arg(short, long, value_delimiter = ',')]
    pub ingredients: Vec<String>,

    /// Ingredients to leave out (repeatable; comma-separated values accepted)
    #[arg(short = 'x', long = "exclude", value_delimiter = ',')]
    pub exclusions: Vec<String>,

    /// Preferred cuisine ("Any" means no preference)
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Meal type, e.g. "Main course", "Dessert" ("Any" means no preference)
    #[arg(long)]
    pub meal: Option<String>,

    /// Dietary preference, e.g. "Vegetarian", "Keto" ("None" means no preference)
    #[arg(long)]
    pub diet: Option<String>,

    /// How many recipes to generate (1-5)
    #[arg(short = 'n', long)]
    pub count: Option<u8>,

    /// Cooking time bucket
    #[arg(long, value_enum)]
    pub time: Option<CookTime>,

    /// Spice level from 1 (very mild) to 5 (very spicy)
    #[arg(long)]
    pub spice: Option<u8>,

    /// Skill level to pitch the recipes at
    #[arg(long, value_enum)]
    pub skill: Option<SkillLevel>,

    /// Calorie bucket per serving
    #[arg(long, value_enum)]
    pub calories: Option<CalorieBucket>,

    /// Save every generated recipe to favorites
    #[arg(long)]
    pub save: bool,

    /// Model to use (defaults to the configured model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Gemini API key (overrides GEMINI_API_KEY and the config file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// First-time setup: directories, API key, defaults
    Init,
    /// Guided form session: pick ingredients and preferences, then cook
    Interactive,
    /// List, remove, or clear saved favorites
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
    /// Show or clear past generations
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Show or edit the standing user profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Export favorites or the whole session
    Export {
        /// What to export: favorites, session
        target: Option<String>,
        /// Output format: markdown, json, yaml, csv
        #[arg(long)]
        format: Option<String>,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Import a previously exported session file
    Import {
        /// Path to the exported JSON file
        file: String,
    },
}

#[derive(Subcommand, Clone)]
pub enum FavoritesAction {
    /// List saved favorites
    List,
    /// Remove a favorite by its list number
    Remove { number: usize },
    /// Remove every favorite
    Clear,
}

#[derive(Subcommand, Clone)]
pub enum HistoryAction {
    /// List past generations
    List,
    /// Remove every history entry
    Clear,
}

#[derive(Subcommand, Clone)]
pub enum ProfileAction {
    /// Show the current profile
    Show,
    /// Set profile fields (only the given fields change)
    Set {
        /// Standing allergy list (comma-separated)
        #[arg(long, value_delimiter = ',')]
        allergies: Option<Vec<String>>,
        /// Preferred cuisines (comma-separated)
        #[arg(long, value_delimiter = ',')]
        cuisines: Option<Vec<String>>,
        /// Default skill level
        #[arg(long, value_enum)]
        skill: Option<SkillLevel>,
    },
    /// Reset the profile to its empty state
    Clear,
}
