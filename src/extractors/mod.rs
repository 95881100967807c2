//! Heuristic extraction of a [`StructuredRecipe`] from completion text.
//!
//! Every field is filled by an ordered table of [`Rule`]s. The first rule in
//! a table that matches wins, even if a later rule would match earlier in
//! the text, which keeps precedence independent of formatting.

mod sections;
mod times;
mod title;

pub use self::sections::{trailing_paragraphs, INGREDIENT_RULES, INSTRUCTION_RULES};
pub use self::times::{COOKING_TIME_RULES, PREPARATION_TIME_RULES};
pub use self::title::TITLE_RULES;

use log::debug;

use crate::clean;
use crate::config::NormalizerConfig;
use crate::model::{StructuredRecipe, UNKNOWN_TIME};

/// Name used when neither a title nor the configured default is usable.
pub const FALLBACK_NAME: &str = "Recipe";

/// One named way of pulling a value out of text.
pub struct Rule<T> {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<T>,
}

/// A value together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<T> {
    pub rule: &'static str,
    pub value: T,
}

/// Evaluate `rules` in order and return the first match.
pub fn first_match<T>(rules: &[Rule<T>], text: &str) -> Option<RuleMatch<T>> {
    rules.iter().find_map(|rule| {
        (rule.apply)(text).map(|value| RuleMatch {
            rule: rule.name,
            value,
        })
    })
}

#[derive(Debug, Clone)]
pub struct Extractor {
    default_name: String,
    trailing_paragraphs: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::from_config(&NormalizerConfig::default())
    }
}

impl Extractor {
    pub fn from_config(config: &NormalizerConfig) -> Self {
        Extractor {
            default_name: config.default_name.clone(),
            trailing_paragraphs: config.trailing_paragraphs,
        }
    }

    /// Name used when no title rule matches.
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Clean `raw` and extract from it. Never fails; unmatched fields keep
    /// their defaults.
    pub fn extract(&self, raw: &str) -> StructuredRecipe {
        let text = clean::prepare_for_validation(raw, None);
        self.parse(&clean::prepare_for_extraction(&text))
    }

    /// Extract from text that already went through [`clean`].
    pub fn parse(&self, text: &str) -> StructuredRecipe {
        let mut recipe = StructuredRecipe::named(self.default_name.clone());

        if let Some(m) = first_match(TITLE_RULES, text) {
            if !m.value.trim().is_empty() {
                debug!("Title found by rule {}", m.rule);
                recipe.name = m.value;
            }
        }
        if recipe.name.trim().is_empty() {
            recipe.name = FALLBACK_NAME.to_string();
        }

        recipe.preparation_time = first_match(PREPARATION_TIME_RULES, text)
            .map(|m| m.value)
            .unwrap_or_else(|| UNKNOWN_TIME.to_string());
        recipe.cooking_time = first_match(COOKING_TIME_RULES, text)
            .map(|m| m.value)
            .unwrap_or_else(|| UNKNOWN_TIME.to_string());

        if let Some(m) = first_match(INGREDIENT_RULES, text) {
            debug!("Ingredients found by rule {} ({} items)", m.rule, m.value.len());
            recipe.ingredients = m.value;
        }
        if let Some(m) = first_match(INSTRUCTION_RULES, text) {
            debug!("Instructions found by rule {} ({} steps)", m.rule, m.value.len());
            recipe.instructions = m.value;
        }

        if recipe.instructions.is_empty() {
            recipe.instructions = trailing_paragraphs(text, self.trailing_paragraphs);
            if !recipe.instructions.is_empty() {
                debug!("Instructions taken from trailing paragraphs");
            }
        }

        recipe
    }
}

/// Extract with the default configuration.
pub fn extract(raw: &str) -> StructuredRecipe {
    Extractor::default().extract(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(text: &str) -> Option<String> {
        text.starts_with('A').then(|| "upper".to_string())
    }

    fn any(_: &str) -> Option<String> {
        Some("any".to_string())
    }

    #[test]
    fn test_first_match_respects_order() {
        let rules = [
            Rule {
                name: "upper",
                apply: upper,
            },
            Rule {
                name: "any",
                apply: any,
            },
        ];
        let m = first_match(&rules, "Apple").unwrap();
        assert_eq!(m.rule, "upper");
        let m = first_match(&rules, "banana").unwrap();
        assert_eq!(m.rule, "any");
        assert!(first_match(&rules[..1], "banana").is_none());
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        let recipe = extract("");
        assert_eq!(recipe.name, "Recipe");
        assert_eq!(recipe.preparation_time, "N/A");
        assert_eq!(recipe.cooking_time, "N/A");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_custom_default_name() {
        let recipe = Extractor::default()
            .with_default_name("Untitled")
            .extract("Ingredients:");
        assert_eq!(recipe.name, "Untitled");
    }

    #[test]
    fn test_blank_default_name_falls_back() {
        let recipe = Extractor::default()
            .with_default_name("  ")
            .extract("Ingredients:\n- rice");
        assert_eq!(recipe.name, FALLBACK_NAME);

        let config = NormalizerConfig {
            default_name: "House Special".to_string(),
            ..NormalizerConfig::default()
        };
        let recipe = Extractor::from_config(&config).extract("Instructions:\n1. Stir.");
        assert_eq!(recipe.name, "House Special");
    }

    #[test]
    fn test_extract_cleans_markdown() {
        let raw = "**Recipe Title:** Herb Omelette\r\n**Ingredients:**\r\n• 3 eggs\r\n• chives\r\n**Instructions:**\r\n1. Beat the eggs.\r\n2. Cook gently.";
        let recipe = extract(raw);
        assert_eq!(recipe.name, "Herb Omelette");
        assert_eq!(recipe.ingredients, vec!["3 eggs", "chives"]);
        assert_eq!(recipe.instructions, vec!["Beat the eggs.", "Cook gently."]);
    }

    #[test]
    fn test_paragraph_fallback() {
        let raw = "Simple toast\n\nSlice the bread thickly.\n\nToast until golden and butter at once.";
        let recipe = extract(raw);
        assert_eq!(recipe.name, "Simple toast");
        assert_eq!(
            recipe.instructions,
            vec!["Slice the bread thickly.", "Toast until golden and butter at once."]
        );
        assert!(recipe.ingredients.is_empty());
    }
}
