// src/export/mod.rs — Serialization sinks for recipes and session data
//
// Pure formatting: nothing here is consulted by the generation pipeline.

use std::str::FromStr;

use anyhow::anyhow;

use crate::infra::errors::FeastError;
use crate::session::{SavedRecipe, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Json,
    Yaml,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = FeastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(FeastError::Config(format!(
                "Unsupported format '{}'. Options: markdown, json, yaml, csv",
                other
            ))),
        }
    }
}

/// Reduce a recipe title to a safe file stem for exported documents.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut prev_dash = true;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }
    let out = out.trim_end_matches('-').to_string();
    if out.is_empty() {
        "recipe".into()
    } else {
        out
    }
}

/// Render saved recipes as one markdown document, separated the same way
/// generated responses are.
pub fn render_document(recipes: &[SavedRecipe]) -> String {
    let mut doc = String::with_capacity(1024);
    doc.push_str("# Saved Recipes\n");

    for recipe in recipes {
        doc.push_str("\n---\n\n");
        doc.push_str(&format!("## {}\n\n", recipe.title));
        if !recipe.body.is_empty() {
            doc.push_str(&recipe.body);
            doc.push('\n');
        }
        doc.push_str(&format!(
            "\n*Made from: {} — saved {}*\n",
            recipe.ingredients,
            recipe.saved_at.format("%Y-%m-%d"),
        ));
    }

    doc
}

/// Serialize the favorites list in the requested format.
pub fn favorites_to_string(
    recipes: &[SavedRecipe],
    format: ExportFormat,
) -> Result<String, FeastError> {
    match format {
        ExportFormat::Markdown => Ok(render_document(recipes)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(recipes)?),
        ExportFormat::Yaml => {
            serde_yml::to_string(recipes).map_err(|e| FeastError::Other(anyhow!(e)))
        }
        ExportFormat::Csv => favorites_to_csv(recipes),
    }
}

/// Serialize the whole session (the flat three-key object). Markdown and
/// CSV are row/document formats and only apply to favorites.
pub fn session_to_string(state: &SessionState, format: ExportFormat) -> Result<String, FeastError> {
    let value = state.export_value()?;
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&value)?),
        ExportFormat::Yaml => {
            serde_yml::to_string(&value).map_err(|e| FeastError::Other(anyhow!(e)))
        }
        ExportFormat::Markdown | ExportFormat::Csv => Err(FeastError::Config(
            "Session export supports json or yaml; markdown and csv apply to favorites".into(),
        )),
    }
}

fn favorites_to_csv(recipes: &[SavedRecipe]) -> Result<String, FeastError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["title", "ingredients", "saved_at", "body"])
        .map_err(|e| FeastError::Other(anyhow!(e)))?;

    for recipe in recipes {
        writer
            .write_record([
                recipe.title.as_str(),
                recipe.ingredients.as_str(),
                &recipe.saved_at.to_rfc3339(),
                recipe.body.as_str(),
            ])
            .map_err(|e| FeastError::Other(anyhow!(e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FeastError::Other(anyhow!(e)))?;
    String::from_utf8(bytes).map_err(|e| FeastError::Other(anyhow!(e)))
}
