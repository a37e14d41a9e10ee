// src/main.rs — FridgeFeast entry point

use clap::Parser;

use fridgefeast::cli::{Cli, Commands};
use fridgefeast::infra::config::Config;
use fridgefeast::infra::logger;
use fridgefeast::session::store::SessionStore;

#[tokio::main]
async fn main() {
    // Initialize logging (respects FRIDGEFEAST_LOG / RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    // `-m ?` lists the known models instead of generating.
    if cli.model.as_deref() == Some("?") {
        return list_models();
    }

    let store = SessionStore::open_default();
    let credential = config.resolve_credential(cli.api_key.as_deref());

    match &cli.command {
        Some(Commands::Init) => fridgefeast::cli::init::run_init(&config).await,
        Some(Commands::Interactive) => {
            fridgefeast::cli::interactive::run_interactive(&config, credential, &store).await
        }
        Some(Commands::Favorites { action }) => {
            fridgefeast::cli::favorites::run(action.clone(), &store)
        }
        Some(Commands::History { action }) => fridgefeast::cli::history::run(action.clone(), &store),
        Some(Commands::Profile { action }) => fridgefeast::cli::profile::run(action.clone(), &store),
        Some(Commands::Export {
            target,
            format,
            output,
        }) => fridgefeast::cli::export::run_export(
            target.as_deref(),
            format.as_deref(),
            output.as_deref(),
            &store,
        ),
        Some(Commands::Import { file }) => fridgefeast::cli::export::run_import(file, &store),
        None => {
            if !cli.ingredients.is_empty() {
                // Flags given: one-shot generation.
                fridgefeast::cli::generate::run_generate(&cli, &config, credential, &store).await
            } else if is_terminal() {
                // Bare invocation on a terminal: open the form.
                fridgefeast::cli::interactive::run_interactive(&config, credential, &store).await
            } else {
                eprintln!("Usage: fridgefeast -i <ingredients> or fridgefeast interactive");
                eprintln!("Run fridgefeast --help for all options.");
                std::process::exit(1);
            }
        }
    }
}

fn is_terminal() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal()
}

fn list_models() -> anyhow::Result<()> {
    use fridgefeast::provider::{google::GeminiGenerator, TextGenerator};

    // The model list is static; no credential needed to print it.
    let generator = GeminiGenerator::new(String::new());
    println!("Available models:");
    for m in generator.models() {
        println!(
            "  {:<20} {:<20} ({}K context)",
            m.id,
            m.name,
            m.context_window / 1000,
        );
    }
    Ok(())
}
