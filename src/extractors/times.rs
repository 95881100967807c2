use once_cell::sync::Lazy;
use regex::Regex;

use super::Rule;

pub const PREPARATION_TIME_RULES: &[Rule<String>] = &[
    Rule {
        name: "preparation_time",
        apply: preparation_time,
    },
    Rule {
        name: "prep_time",
        apply: prep_time,
    },
    Rule {
        name: "prep",
        apply: prep,
    },
];

pub const COOKING_TIME_RULES: &[Rule<String>] = &[
    Rule {
        name: "cooking_time",
        apply: cooking_time,
    },
    Rule {
        name: "cook_time",
        apply: cook_time,
    },
    Rule {
        name: "cook",
        apply: cook,
    },
];

/// A `Label: value` line, optionally bulleted or written as a heading.
fn label_pattern(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?im)^[ \t]*(?:[-*][ \t]*)?(?:#+[ \t]*)?{}:[ \t]*([^\n]*\S)",
        regex::escape(label)
    ))
    .expect("Invalid regex pattern")
}

static PREPARATION_TIME: Lazy<Regex> = Lazy::new(|| label_pattern("preparation time"));
static PREP_TIME: Lazy<Regex> = Lazy::new(|| label_pattern("prep time"));
static PREP: Lazy<Regex> = Lazy::new(|| label_pattern("prep"));
static COOKING_TIME: Lazy<Regex> = Lazy::new(|| label_pattern("cooking time"));
static COOK_TIME: Lazy<Regex> = Lazy::new(|| label_pattern("cook time"));
static COOK: Lazy<Regex> = Lazy::new(|| label_pattern("cook"));

fn value(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn preparation_time(text: &str) -> Option<String> {
    value(&PREPARATION_TIME, text)
}

fn prep_time(text: &str) -> Option<String> {
    value(&PREP_TIME, text)
}

fn prep(text: &str) -> Option<String> {
    value(&PREP, text)
}

fn cooking_time(text: &str) -> Option<String> {
    value(&COOKING_TIME, text)
}

fn cook_time(text: &str) -> Option<String> {
    value(&COOK_TIME, text)
}

fn cook(text: &str) -> Option<String> {
    value(&COOK, text)
}
