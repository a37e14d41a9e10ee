// src/recipe/profile.rs — Standing user defaults

use serde::{Deserialize, Serialize};

use super::prefs::SkillLevel;

/// Defaults consulted only when the matching per-request field is unset:
/// allergies always join the exclusion list, preferred cuisines become a
/// soft suggestion, and the skill level backs the extended block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub preferred_cuisines: Vec<String>,
    #[serde(default)]
    pub skill_level: Option<SkillLevel>,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty() && self.preferred_cuisines.is_empty() && self.skill_level.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(UserProfile::default().is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let p: UserProfile = serde_json::from_str(r#"{"allergies": ["peanuts"]}"#).unwrap();
        assert_eq!(p.allergies, vec!["peanuts"]);
        assert!(p.preferred_cuisines.is_empty());
        assert!(p.skill_level.is_none());
    }
}
