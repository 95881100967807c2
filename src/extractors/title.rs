use once_cell::sync::Lazy;
use regex::Regex;

use super::Rule;

pub const TITLE_RULES: &[Rule<String>] = &[
    Rule {
        name: "name_label",
        apply: name_label,
    },
    Rule {
        name: "recipe_title_label",
        apply: recipe_title_label,
    },
    Rule {
        name: "markdown_heading",
        apply: markdown_heading,
    },
    Rule {
        name: "first_line",
        apply: first_line,
    },
];

static NAME_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:#+[ \t]*)?(?:recipe[ \t]+)?name:[ \t]*([^\n]*\S)")
        .expect("Invalid regex pattern")
});

static RECIPE_TITLE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:#+[ \t]*)?recipe title:[ \t]*([^\n]*\S)")
        .expect("Invalid regex pattern")
});

// Level one only; `## Ingredients` is a section, not a title.
static MARKDOWN_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#[ \t]+([^\n]*\S)").expect("Invalid regex pattern"));

/// Labels that can start the first line without being a dish name.
const NON_TITLE_LABELS: &[&str] = &[
    "ingredients",
    "ingredients list",
    "instructions",
    "directions",
    "steps",
    "method",
    "tips",
    "notes",
    "preparation time",
    "prep time",
    "prep",
    "cooking time",
    "cook time",
    "cook",
    "total time",
    "servings",
    "description",
    "difficulty level",
];

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

fn name_label(text: &str) -> Option<String> {
    capture(&NAME_LABEL, text)
}

fn recipe_title_label(text: &str) -> Option<String> {
    capture(&RECIPE_TITLE_LABEL, text)
}

fn markdown_heading(text: &str) -> Option<String> {
    capture(&MARKDOWN_HEADING, text)
}

/// The first non-empty line up to its first colon.
fn first_line(text: &str) -> Option<String> {
    let line = text.lines().map(str::trim).find(|line| !line.is_empty())?;
    let line = line.trim_start_matches('#').trim();
    let candidate = line.split(':').next().unwrap_or(line).trim();

    if candidate.is_empty() || NON_TITLE_LABELS.contains(&candidate.to_lowercase().as_str()) {
        return None;
    }
    Some(candidate.to_string())
}
