//! Representations of a recipe for callers that persist or publish it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

use crate::model::StructuredRecipe;

static HOURS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:hours?|hrs?|h)\b").expect("Invalid regex pattern")
});
static MINUTES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:minutes?|mins?|m)\b").expect("Invalid regex pattern")
});
static BARE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\s*$").expect("Invalid regex pattern"));

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("Invalid regex pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex pattern"));
static DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("Invalid regex pattern"));

fn first_number(pattern: &Regex, text: &str) -> Option<u64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parse a free-form time like "1 hour 15 minutes" into minutes.
///
/// A bare number is read as minutes. Returns `None` for text without a
/// recognizable quantity, such as the `N/A` sentinel, or when the total
/// does not fit in a `u64`.
pub fn parse_minutes(text: &str) -> Option<u64> {
    if let Some(minutes) = first_number(&BARE_NUMBER, text) {
        return Some(minutes);
    }
    let hours = first_number(&HOURS, text);
    let minutes = first_number(&MINUTES, text);
    if hours.is_none() && minutes.is_none() {
        return None;
    }
    hours
        .unwrap_or(0)
        .checked_mul(60)?
        .checked_add(minutes.unwrap_or(0))
}

/// ISO-8601 duration such as `PT1H15M`.
pub fn iso_duration(minutes: u64) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("PT{m}M"),
        (h, 0) => format!("PT{h}H"),
        (h, m) => format!("PT{h}H{m}M"),
    }
}

/// schema.org `Recipe` markup for a generated recipe.
pub fn to_json_ld(recipe: &StructuredRecipe, date_published: &str) -> Value {
    let mut object = Map::new();
    object.insert("@context".into(), json!("https://schema.org"));
    object.insert("@type".into(), json!("Recipe"));
    object.insert("name".into(), json!(recipe.name));
    object.insert(
        "author".into(),
        json!({ "@type": "Organization", "name": "Recipe Generator" }),
    );
    object.insert("datePublished".into(), json!(date_published));
    object.insert("description".into(), json!(recipe.name));

    let prep = parse_minutes(&recipe.preparation_time);
    let cook = parse_minutes(&recipe.cooking_time);
    if let Some(prep) = prep {
        object.insert("prepTime".into(), json!(iso_duration(prep)));
    }
    if let Some(cook) = cook {
        object.insert("cookTime".into(), json!(iso_duration(cook)));
    }
    if prep.is_some() || cook.is_some() {
        if let Some(total) = prep.unwrap_or(0).checked_add(cook.unwrap_or(0)) {
            object.insert("totalTime".into(), json!(iso_duration(total)));
        }
    }

    object.insert("recipeIngredient".into(), json!(recipe.ingredients));
    let steps: Vec<Value> = recipe
        .instructions
        .iter()
        .enumerate()
        .map(|(index, step)| {
            json!({
                "@type": "HowToStep",
                "position": index + 1,
                "text": step,
            })
        })
        .collect();
    object.insert("recipeInstructions".into(), Value::Array(steps));

    Value::Object(object)
}

/// URL-friendly identifier derived from a recipe name.
pub fn slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let kept = NON_SLUG_CHARS.replace_all(&lowered, "");
    let dashed = WHITESPACE.replace_all(kept.trim(), "-");
    DASHES
        .replace_all(&dashed, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> StructuredRecipe {
        StructuredRecipe {
            name: "Garlic Butter Shrimp".to_string(),
            preparation_time: "10 minutes".to_string(),
            cooking_time: "1 hour 5 mins".to_string(),
            ingredients: vec!["1 lb shrimp".to_string(), "3 tbsp butter".to_string()],
            instructions: vec!["Melt butter.".to_string(), "Add shrimp.".to_string()],
        }
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("10 minutes"), Some(10));
        assert_eq!(parse_minutes("1 hour 30 minutes"), Some(90));
        assert_eq!(parse_minutes("2 hrs"), Some(120));
        assert_eq!(parse_minutes("45"), Some(45));
        assert_eq!(parse_minutes("N/A"), None);
        assert_eq!(parse_minutes("overnight"), None);
    }

    #[test]
    fn test_huge_times_do_not_overflow() {
        assert_eq!(parse_minutes("999999999999999999 hours"), None);
        assert_eq!(parse_minutes("99999999999999999999 minutes"), None);

        let mut r = recipe();
        r.preparation_time = "999999999999999999 hours".to_string();
        r.cooking_time = format!("{}", u64::MAX);
        let value = to_json_ld(&r, "2024-05-01");
        assert!(value.get("prepTime").is_none());
        assert_eq!(value["cookTime"], iso_duration(u64::MAX));
        assert_eq!(value["totalTime"], iso_duration(u64::MAX));

        r.preparation_time = "1 minute".to_string();
        let value = to_json_ld(&r, "2024-05-01");
        assert!(value.get("totalTime").is_none());
    }

    #[test]
    fn test_iso_duration() {
        assert_eq!(iso_duration(10), "PT10M");
        assert_eq!(iso_duration(60), "PT1H");
        assert_eq!(iso_duration(75), "PT1H15M");
        assert_eq!(iso_duration(0), "PT0M");
    }

    #[test]
    fn test_json_ld() {
        let value = to_json_ld(&recipe(), "2024-05-01");
        assert_eq!(value["@type"], "Recipe");
        assert_eq!(value["name"], "Garlic Butter Shrimp");
        assert_eq!(value["datePublished"], "2024-05-01");
        assert_eq!(value["prepTime"], "PT10M");
        assert_eq!(value["cookTime"], "PT1H5M");
        assert_eq!(value["totalTime"], "PT1H15M");
        assert_eq!(value["recipeIngredient"][1], "3 tbsp butter");
        assert_eq!(value["recipeInstructions"][1]["position"], 2);
        assert_eq!(value["recipeInstructions"][1]["text"], "Add shrimp.");
    }

    #[test]
    fn test_json_ld_omits_unknown_times() {
        let mut r = recipe();
        r.preparation_time = "N/A".to_string();
        r.cooking_time = "N/A".to_string();
        let value = to_json_ld(&r, "2024-05-01");
        assert!(value.get("prepTime").is_none());
        assert!(value.get("cookTime").is_none());
        assert!(value.get("totalTime").is_none());
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Garlic Butter Shrimp"), "garlic-butter-shrimp");
        assert_eq!(slug("  Mom's   Best -- Chili! "), "moms-best-chili");
        assert_eq!(slug("Crème Brûlée"), "crème-brûlée");
    }
}
