use once_cell::sync::Lazy;
use regex::Regex;

use super::Rule;

pub const INGREDIENT_RULES: &[Rule<Vec<String>>] = &[
    Rule {
        name: "ingredients_section",
        apply: ingredients_section,
    },
    Rule {
        name: "ingredients_list_section",
        apply: ingredients_list_section,
    },
    Rule {
        name: "bullet_lines",
        apply: bullet_lines,
    },
];

pub const INSTRUCTION_RULES: &[Rule<Vec<String>>] = &[
    Rule {
        name: "instructions_section",
        apply: instructions_section,
    },
    Rule {
        name: "directions_section",
        apply: directions_section,
    },
    Rule {
        name: "steps_section",
        apply: steps_section,
    },
    Rule {
        name: "method_section",
        apply: method_section,
    },
    Rule {
        name: "numbered_lines",
        apply: numbered_lines,
    },
];

/// A heading line such as `Ingredients:`, `## Ingredients` or `Ingredients: 2 eggs`.
fn heading_pattern(names: &[&str]) -> Regex {
    let names = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?im)^[ \t]*(?:#+[ \t]*)?(?:{names})[ \t]*(?::|$)"
    ))
    .expect("Invalid regex pattern")
}

static INGREDIENTS: Lazy<Regex> = Lazy::new(|| heading_pattern(&["ingredients"]));
static INGREDIENTS_LIST: Lazy<Regex> = Lazy::new(|| heading_pattern(&["ingredients list"]));
static INSTRUCTIONS: Lazy<Regex> = Lazy::new(|| heading_pattern(&["instructions"]));
static DIRECTIONS: Lazy<Regex> = Lazy::new(|| heading_pattern(&["directions"]));
static STEPS: Lazy<Regex> = Lazy::new(|| heading_pattern(&["steps"]));
static METHOD: Lazy<Regex> = Lazy::new(|| heading_pattern(&["method"]));

static INGREDIENTS_END: Lazy<Regex> =
    Lazy::new(|| heading_pattern(&["instructions", "directions", "steps", "method"]));
static INSTRUCTIONS_END: Lazy<Regex> =
    Lazy::new(|| heading_pattern(&["tips", "notes", "ingredients", "ingredients list"]));

static BULLET_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*•][ \t]*").expect("Invalid regex pattern"));
static ORDINAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:step[ \t]*\d+[.):]?|\d+[.)]|[-*•])(?:[ \t]+|$)")
        .expect("Invalid regex pattern")
});
static BULLET_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*[-*•][ \t]+([^\n]*\S)").expect("Invalid regex pattern")
});
static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:step[ \t]*)?\d+[.):][ \t]+([^\n]*\S)")
        .expect("Invalid regex pattern")
});
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n").expect("Invalid regex pattern"));
static SECTION_PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:ingredients|instructions|steps|directions|method):")
        .expect("Invalid regex pattern")
});

/// Body between the first `heading` match and the next `end` heading.
fn section_body<'a>(text: &'a str, heading: &Regex, end: &Regex) -> Option<&'a str> {
    let start = heading.find(text)?.end();
    let rest = &text[start..];
    let stop = end.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    Some(&rest[..stop])
}

fn clean_lines(body: &str, prefix: &Regex) -> Vec<String> {
    body.lines()
        .map(|line| prefix.replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn ingredients_section(text: &str) -> Option<Vec<String>> {
    section_body(text, &INGREDIENTS, &INGREDIENTS_END).map(|body| clean_lines(body, &BULLET_PREFIX))
}

fn ingredients_list_section(text: &str) -> Option<Vec<String>> {
    section_body(text, &INGREDIENTS_LIST, &INGREDIENTS_END)
        .map(|body| clean_lines(body, &BULLET_PREFIX))
}

/// Bulleted lines anywhere in the text.
fn bullet_lines(text: &str) -> Option<Vec<String>> {
    let items: Vec<String> = BULLET_LINE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect();
    (!items.is_empty()).then_some(items)
}

fn instruction_section(text: &str, heading: &Regex) -> Option<Vec<String>> {
    section_body(text, heading, &INSTRUCTIONS_END).map(|body| clean_lines(body, &ORDINAL_PREFIX))
}

fn instructions_section(text: &str) -> Option<Vec<String>> {
    instruction_section(text, &INSTRUCTIONS)
}

fn directions_section(text: &str) -> Option<Vec<String>> {
    instruction_section(text, &DIRECTIONS)
}

fn steps_section(text: &str) -> Option<Vec<String>> {
    instruction_section(text, &STEPS)
}

fn method_section(text: &str) -> Option<Vec<String>> {
    instruction_section(text, &METHOD)
}

/// Ordinal-prefixed lines (`1.`, `2)`, `Step 3:`) anywhere in the text.
fn numbered_lines(text: &str) -> Option<Vec<String>> {
    let steps: Vec<String> = NUMBERED_LINE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect();
    (!steps.is_empty()).then_some(steps)
}

/// Up to `count` trailing paragraphs, never the first one, skipping
/// paragraphs that open with a section label.
pub fn trailing_paragraphs(text: &str, count: usize) -> Vec<String> {
    let paragraphs: Vec<&str> = PARAGRAPH_BREAK.split(text).collect();
    if paragraphs.len() < 2 || count == 0 {
        return Vec::new();
    }

    let start = paragraphs.len().saturating_sub(count).max(1);
    paragraphs[start..]
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty() && !SECTION_PARAGRAPH.is_match(p))
        .map(str::to_string)
        .collect()
}
