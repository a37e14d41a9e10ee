// src/recipe/prefs.rs — Preference record and its categorical fields
//
// Every optional field is a real Option. The "Any"/"None" select values that
// the form widgets show are mapped to None at the edge via `from_sentinel`,
// so a placeholder string can never reach the generated prompt.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Map a select-widget value to an optional field. "Any", "None", and
/// blank (case-insensitive) all mean "no preference".
pub fn from_sentinel(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("any")
        || trimmed.eq_ignore_ascii_case("none")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Per-request preferences. `count` is clamped to 1-5 on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSpec {
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub diet: Option<String>,
    pub(crate) count: u8,
    pub extended: Option<ExtendedPrefs>,
}

impl Default for PreferenceSpec {
    fn default() -> Self {
        Self {
            cuisine: None,
            meal_type: None,
            diet: None,
            count: 3,
            extended: None,
        }
    }
}

impl PreferenceSpec {
    pub fn with_count(count: u8) -> Self {
        let mut spec = Self::default();
        spec.set_count(count);
        spec
    }

    pub fn set_count(&mut self, count: u8) {
        self.count = count.clamp(1, 5);
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}

/// The fine-tuning block added in the later iterations of the form.
/// Each field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedPrefs {
    pub cook_time: Option<CookTime>,
    pub spice: Option<SpiceLevel>,
    pub skill: Option<SkillLevel>,
    pub calories: Option<CalorieBucket>,
}

impl ExtendedPrefs {
    pub fn is_empty(&self) -> bool {
        self.cook_time.is_none()
            && self.spice.is_none()
            && self.skill.is_none()
            && self.calories.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CookTime {
    Under15,
    Under30,
    Under60,
    Over60,
}

impl std::fmt::Display for CookTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phrase = match self {
            CookTime::Under15 => "under 15 minutes",
            CookTime::Under30 => "under 30 minutes",
            CookTime::Under60 => "under an hour",
            CookTime::Over60 => "over an hour",
        };
        f.write_str(phrase)
    }
}

/// Five-point spice scale. Stored as the scale position, spoken as a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    VeryMild,
    Mild,
    Medium,
    Spicy,
    VerySpicy,
}

impl SpiceLevel {
    /// From the 1-5 scale the form exposes; out-of-range values clamp.
    pub fn from_scale(n: u8) -> Self {
        match n {
            0 | 1 => SpiceLevel::VeryMild,
            2 => SpiceLevel::Mild,
            3 => SpiceLevel::Medium,
            4 => SpiceLevel::Spicy,
            _ => SpiceLevel::VerySpicy,
        }
    }

    pub fn scale(&self) -> u8 {
        match self {
            SpiceLevel::VeryMild => 1,
            SpiceLevel::Mild => 2,
            SpiceLevel::Medium => 3,
            SpiceLevel::Spicy => 4,
            SpiceLevel::VerySpicy => 5,
        }
    }
}

impl std::fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phrase = match self {
            SpiceLevel::VeryMild => "very mild",
            SpiceLevel::Mild => "mild",
            SpiceLevel::Medium => "medium",
            SpiceLevel::Spicy => "spicy",
            SpiceLevel::VerySpicy => "very spicy",
        };
        f.write_str(phrase)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phrase = match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        };
        f.write_str(phrase)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CalorieBucket {
    Light,
    Moderate,
    Hearty,
}

impl std::fmt::Display for CalorieBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phrase = match self {
            CalorieBucket::Light => "light, under 400 calories per serving",
            CalorieBucket::Moderate => "moderate, around 400-700 calories per serving",
            CalorieBucket::Hearty => "hearty, over 700 calories per serving",
        };
        f.write_str(phrase)
    }
}
