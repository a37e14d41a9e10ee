// src/cli/history.rs — Generation history

use super::HistoryAction;
use crate::session::store::SessionStore;
use crate::util::truncate_str;

pub fn run(action: Option<HistoryAction>, store: &SessionStore) -> anyhow::Result<()> {
    let mut state = store.load_or_default();

    match action.unwrap_or(HistoryAction::List) {
        HistoryAction::List => {
            if state.history.is_empty() {
                println!("No generations yet.");
                return Ok(());
            }
            println!("History ({} generation(s)):", state.history.len());
            for (i, entry) in state.history.iter().enumerate() {
                println!(
                    "  {}. {} | {} recipe(s) | {}",
                    i + 1,
                    entry.date.format("%Y-%m-%d %H:%M"),
                    entry.recipe_count,
                    truncate_str(&entry.ingredients, 50),
                );
            }
        }
        HistoryAction::Clear => {
            let count = state.history.len();
            state.clear_history();
            store.save(&state)?;
            println!("Cleared {} history entr{}.", count, if count == 1 { "y" } else { "ies" });
        }
    }

    Ok(())
}
