// src/cli/profile.rs — Standing user profile

use super::ProfileAction;
use crate::recipe::UserProfile;
use crate::session::store::SessionStore;

pub fn run(action: Option<ProfileAction>, store: &SessionStore) -> anyhow::Result<()> {
    let mut state = store.load_or_default();

    match action.unwrap_or(ProfileAction::Show) {
        ProfileAction::Show => {
            if state.profile.is_empty() {
                println!("Profile is empty. Set it with `fridgefeast profile set`.");
                return Ok(());
            }
            println!("Profile:");
            println!("  Allergies: {}", join_or_dash(&state.profile.allergies));
            println!(
                "  Preferred cuisines: {}",
                join_or_dash(&state.profile.preferred_cuisines)
            );
            match state.profile.skill_level {
                Some(skill) => println!("  Skill level: {}", skill),
                None => println!("  Skill level: -"),
            }
        }
        ProfileAction::Set {
            allergies,
            cuisines,
            skill,
        } => {
            if let Some(allergies) = allergies {
                state.profile.allergies = clean(allergies);
            }
            if let Some(cuisines) = cuisines {
                state.profile.preferred_cuisines = clean(cuisines);
            }
            if let Some(skill) = skill {
                state.profile.skill_level = Some(skill);
            }
            store.save(&state)?;
            println!("Profile updated.");
        }
        ProfileAction::Clear => {
            state.profile = UserProfile::default();
            store.save(&state)?;
            println!("Profile cleared.");
        }
    }

    Ok(())
}

fn clean(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

fn join_or_dash(entries: &[String]) -> String {
    if entries.is_empty() {
        "-".into()
    } else {
        entries.join(", ")
    }
}
