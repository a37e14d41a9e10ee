// src/cli/init.rs — First-time setup wizard

use crate::infra::config::Config;
use crate::infra::paths;

/// Run the first-time setup wizard.
pub async fn run_init(config: &Config) -> anyhow::Result<()> {
    println!("fridgefeast setup");
    println!();

    // 1. Create directories
    eprint!("  Creating directories... ");
    paths::ensure_dirs().await?;
    eprintln!("done");

    // 2. Check for a credential
    eprint!("  Looking for a Gemini API key... ");
    if config.resolve_credential(None).is_some() {
        eprintln!("found");
    } else {
        eprintln!("none found");
        let entered = inquire::Text::new("Paste your Gemini API key (Enter to skip):")
            .with_help_message("Get one at https://aistudio.google.com/apikey")
            .prompt()
            .unwrap_or_default();
        if entered.trim().is_empty() {
            println!();
            println!("  No key stored. Set one later with:");
            println!("    export GEMINI_API_KEY=...");
        } else {
            let mut updated = config.clone();
            updated.api.key = Some(entered.trim().to_string());
            updated.save()?;
            eprintln!("  Key stored in {}", paths::config_file_path().display());
        }
    }

    // 3. Session file status
    let session_path = paths::session_path();
    if session_path.exists() {
        println!("  Session: {} (already exists)", session_path.display());
    } else {
        println!("  Session: will be created on first save");
    }

    println!();
    println!("Setup complete!");
    println!();
    println!("Tips:");
    println!("  fridgefeast -i tomato,cheese -n 2     Generate two recipes");
    println!("  fridgefeast interactive               Guided form session");
    println!("  fridgefeast favorites                 Browse saved recipes");
    println!("  fridgefeast export session --format json -o backup.json");

    Ok(())
}
