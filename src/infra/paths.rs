// src/infra/paths.rs — Path management
//
// All paths respect the FRIDGEFEAST_HOME environment variable for isolation.
// When FRIDGEFEAST_HOME is set, config and data live under that directory.
// When unset, config uses ~/.fridgefeast/ and data uses the platform data dir.

use directories::ProjectDirs;
use std::path::PathBuf;
use std::sync::OnceLock;

static PROJECT_DIRS: OnceLock<ProjectDirs> = OnceLock::new();

fn project_dirs() -> &'static ProjectDirs {
    PROJECT_DIRS.get_or_init(|| {
        ProjectDirs::from("", "", "fridgefeast").expect("Could not determine home directory")
    })
}

/// Returns the FRIDGEFEAST_HOME override, if set.
fn fridgefeast_home() -> Option<PathBuf> {
    std::env::var_os("FRIDGEFEAST_HOME").map(PathBuf::from)
}

/// Configuration directory: $FRIDGEFEAST_HOME/ or ~/.fridgefeast/
pub fn config_dir() -> PathBuf {
    if let Some(home) = fridgefeast_home() {
        return home;
    }
    directories::BaseDirs::new()
        .expect("Could not determine home directory")
        .home_dir()
        .join(".fridgefeast")
}

/// Data directory: $FRIDGEFEAST_HOME/data/ or the platform-local data dir
pub fn data_dir() -> PathBuf {
    if let Some(home) = fridgefeast_home() {
        return home.join("data");
    }
    project_dirs().data_local_dir().to_path_buf()
}

/// Session state file (favorites, history, profile)
pub fn session_path() -> PathBuf {
    data_dir().join("session.json")
}

/// Directory for exported recipe documents
pub fn exports_dir() -> PathBuf {
    data_dir().join("exports")
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Ensure all required directories exist
pub async fn ensure_dirs() -> anyhow::Result<()> {
    let dirs = [config_dir(), data_dir(), exports_dir()];

    for dir in &dirs {
        tokio::fs::create_dir_all(dir).await?;
    }

    Ok(())
}
