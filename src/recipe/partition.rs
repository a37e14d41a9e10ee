// src/recipe/partition.rs — Split a generated response into per-recipe segments

use serde::{Deserialize, Serialize};

/// One recipe carved out of a multi-recipe response.
///
/// `text` is the full trimmed segment as generated; `title` is derived from
/// its first non-blank line with heading markers stripped, and `body` is
/// whatever follows that line. Joining the `text` fields back together with
/// the delimiter reconstructs the original response up to surrounding
/// whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSegment {
    pub title: String,
    pub body: String,
    pub text: String,
}

/// Split raw generated markdown on horizontal-rule lines (`---` alone on a
/// line, surrounding whitespace tolerated) into ordered segments.
///
/// A response with no delimiter yields exactly one segment holding the whole
/// trimmed input; an empty or whitespace-only response yields no segments.
/// Blank segments between consecutive delimiters are dropped; everything
/// else keeps its original order.
pub fn partition(raw: &str) -> Vec<RecipeSegment> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if is_rule(line) {
            flush(&mut current, &mut segments);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut segments);

    segments
}

fn is_rule(line: &str) -> bool {
    line.trim() == "---"
}

fn flush(lines: &mut Vec<&str>, segments: &mut Vec<RecipeSegment>) {
    let text = lines.join("\n").trim().to_string();
    lines.clear();
    if text.is_empty() {
        return;
    }

    let position = segments.len() + 1;
    let (title, body) = split_title(&text, position);
    segments.push(RecipeSegment { title, body, text });
}

/// Derive the display title from the first non-blank line, stripping leading
/// heading markers. Falls back to "Recipe N" when nothing usable remains.
fn split_title(text: &str, position: usize) -> (String, String) {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or("");
    let stripped = first.trim().trim_start_matches('#').trim();

    let title = if stripped.is_empty() {
        format!("Recipe {}", position)
    } else {
        stripped.to_string()
    };
    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    (title, body)
}
