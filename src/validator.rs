//! Decides whether an extracted recipe can be shown or must be replaced.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::clean::normalize_line_endings;
use crate::config::NormalizerConfig;
use crate::model::StructuredRecipe;

/// Phrases that only show up when the generator echoes its own instructions
/// instead of answering. Matched case-insensitively as substrings.
pub const LEAK_PHRASES: &[&str] = &[
    "use clear and concise language",
    "clear and concise step-by-step instructions",
    "i'll generate",
    "i will generate",
    "here's a recipe",
    "here is a recipe",
    "i'd be happy to",
    "i would be happy to",
    "as an ai language model",
    "as an ai assistant",
    "format the recipe with",
    "generate a detailed recipe",
    "you are a recipe generation expert",
    "you are an expert chef",
    "output the recipe",
];

/// Section markers the generator was asked to produce. Case-sensitive.
pub const REQUIRED_SECTION_MARKERS: &[&str] = &["Ingredients", "Instructions"];

/// Unfilled template slots, in the order they are checked.
static PLACEHOLDER_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("[Step N]", r"(?i)\[\s*step\s+\d+\s*\]"),
        ("(Step N)", r"(?i)\(\s*step\s+\d+\s*\)"),
        ("Step N:", r"(?im)\bstep\s+\d+:[ \t]*$"),
        ("[ingredient N]", r"(?i)\[\s*ingredient\s+\d+\s*\]"),
        ("(ingredient N)", r"(?i)\(\s*ingredient\s+\d+\s*\)"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("Invalid regex pattern")))
    .collect()
});

/// Why a recipe was judged unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no ingredients were extracted")]
    MissingIngredients,

    #[error("no instructions were extracted")]
    MissingInstructions,

    #[error("completion leaks generator instructions: \"{0}\"")]
    LeakedInstruction(String),

    #[error("completion contains an unfilled placeholder: {0}")]
    UnfilledPlaceholder(&'static str),

    #[error("completion lacks the \"{0}\" section")]
    MissingSection(&'static str),
}

/// Lowercases and folds typographic apostrophes so "I’ll" matches "i'll".
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

/// Returns the name of the first placeholder pattern found in `text`.
pub fn find_placeholder(text: &str) -> Option<&'static str> {
    PLACEHOLDER_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(name, _)| *name)
}

#[derive(Debug, Clone)]
pub struct Validator {
    leak_phrases: Vec<String>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// A validator using the built-in leak phrases only.
    pub fn new() -> Self {
        Validator {
            leak_phrases: LEAK_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Extend the leak phrase table. Blank phrases are ignored.
    pub fn with_extra_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for phrase in phrases {
            let phrase = fold(phrase.as_ref().trim());
            if !phrase.is_empty() && !self.leak_phrases.contains(&phrase) {
                self.leak_phrases.push(phrase);
            }
        }
        self
    }

    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self::new().with_extra_phrases(&config.extra_leak_phrases)
    }

    pub fn leak_phrases(&self) -> &[String] {
        &self.leak_phrases
    }

    /// Returns the first leak phrase contained in `text`.
    pub fn find_leak(&self, text: &str) -> Option<&str> {
        let folded = fold(text);
        self.leak_phrases
            .iter()
            .find(|phrase| folded.contains(phrase.as_str()))
            .map(String::as_str)
    }

    /// Check `recipe` (extracted from `raw_text`) against every usability rule,
    /// reporting the first one violated.
    pub fn validate(&self, recipe: &StructuredRecipe, raw_text: &str) -> Result<(), Rejection> {
        let raw_text = normalize_line_endings(raw_text);
        let raw_text = raw_text.as_str();

        if recipe.ingredients.is_empty() {
            return Err(Rejection::MissingIngredients);
        }
        if recipe.instructions.is_empty() {
            return Err(Rejection::MissingInstructions);
        }

        let leak = std::iter::once(raw_text)
            .chain(recipe.instructions.iter().map(String::as_str))
            .find_map(|text| self.find_leak(text));
        if let Some(phrase) = leak {
            return Err(Rejection::LeakedInstruction(phrase.to_string()));
        }

        let placeholder = std::iter::once(raw_text)
            .chain(recipe.instructions.iter().map(String::as_str))
            .find_map(find_placeholder);
        if let Some(name) = placeholder {
            return Err(Rejection::UnfilledPlaceholder(name));
        }

        if let Some(marker) = REQUIRED_SECTION_MARKERS
            .iter()
            .copied()
            .find(|marker| !raw_text.contains(marker))
        {
            return Err(Rejection::MissingSection(marker));
        }

        debug!("Recipe \"{}\" passed validation", recipe.name);
        Ok(())
    }

    pub fn is_usable(&self, recipe: &StructuredRecipe, raw_text: &str) -> bool {
        self.validate(recipe, raw_text).is_ok()
    }
}
