// src/cli/favorites.rs — Saved-recipe management

use super::FavoritesAction;
use crate::session::store::SessionStore;
use crate::util::truncate_str;

pub fn run(action: Option<FavoritesAction>, store: &SessionStore) -> anyhow::Result<()> {
    let mut state = store.load_or_default();

    match action.unwrap_or(FavoritesAction::List) {
        FavoritesAction::List => {
            if state.favorites.is_empty() {
                println!("No favorites yet. Save one from a generation to see it here.");
                return Ok(());
            }
            println!("Favorites ({}):", state.favorites.len());
            for (i, recipe) in state.favorites.iter().enumerate() {
                println!(
                    "  {}. {} | {} | from: {}",
                    i + 1,
                    recipe.title,
                    recipe.saved_at.format("%Y-%m-%d"),
                    truncate_str(&recipe.ingredients, 40),
                );
            }
        }
        FavoritesAction::Remove { number } => {
            // The list is shown 1-based.
            let index = number.checked_sub(1);
            match index.and_then(|i| state.remove_favorite(i)) {
                Some(removed) => {
                    store.save(&state)?;
                    println!("Removed \"{}\".", removed.title);
                }
                None => {
                    println!(
                        "No favorite number {}. Run `fridgefeast favorites` to see the list.",
                        number
                    );
                }
            }
        }
        FavoritesAction::Clear => {
            let count = state.favorites.len();
            state.clear_favorites();
            store.save(&state)?;
            println!("Cleared {} favorite(s).", count);
        }
    }

    Ok(())
}
