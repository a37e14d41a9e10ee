// src/cli/export.rs — Session export and import commands

use crate::export::{self, ExportFormat};
use crate::infra::errors::FeastError;
use crate::session::store::SessionStore;

/// Export favorites or the whole session to stdout or a file.
pub fn run_export(
    target: Option<&str>,
    format: Option<&str>,
    output: Option<&str>,
    store: &SessionStore,
) -> anyhow::Result<()> {
    let state = store.load_or_default();
    let target = target.unwrap_or("favorites");

    let content = match target {
        "favorites" => {
            let format = match format {
                Some(f) => f.parse::<ExportFormat>()?,
                None => ExportFormat::Markdown,
            };
            export::favorites_to_string(&state.favorites, format)?
        }
        "session" => {
            let format = match format {
                Some(f) => f.parse::<ExportFormat>()?,
                None => ExportFormat::Json,
            };
            export::session_to_string(&state, format)?
        }
        other => {
            anyhow::bail!(
                "Unknown export target '{}'. Options: favorites, session",
                other
            );
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)?;
        println!("Exported {} to {}", target, path);
    } else {
        println!("{}", content);
    }

    Ok(())
}

/// Import a previously exported session payload. Present keys replace their
/// collections wholesale; missing keys leave the current data untouched.
pub fn run_import(file: &str, store: &SessionStore) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| FeastError::MalformedImport {
            reason: format!("not valid JSON: {}", e),
        })?;

    let mut state = store.load_or_default();
    state.import_value(value)?;
    store.save(&state)?;

    println!(
        "Imported session data from {} ({} favorite(s), {} history entr{}).",
        file,
        state.favorites.len(),
        state.history.len(),
        if state.history.len() == 1 { "y" } else { "ies" },
    );
    Ok(())
}
