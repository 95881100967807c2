use log::{info, warn};

use crate::clean;
use crate::config::NormalizerConfig;
use crate::extractors::Extractor;
use crate::model::{RecipeRequest, StructuredRecipe};
use crate::prompt::build_prompt;
use crate::synthesizer::Synthesizer;
use crate::validator::{Rejection, Validator};

/// Where a normalized recipe came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSource {
    /// Parsed from the completion
    Extracted,
    /// Built from a template because the completion was rejected
    Synthesized(Rejection),
}

/// Result of normalizing one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub recipe: StructuredRecipe,
    pub source: RecipeSource,
}

impl Normalized {
    pub fn is_synthesized(&self) -> bool {
        matches!(self.source, RecipeSource::Synthesized(_))
    }
}

/// Clean, extract, validate and, when needed, replace a completion.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    extractor: Extractor,
    validator: Validator,
    synthesizer: Synthesizer,
}

impl Normalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Normalizer {
            extractor: Extractor::from_config(config),
            validator: Validator::from_config(config),
            synthesizer: Synthesizer::from_config(config),
        }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Turn `raw` into a recipe that always has a name, ingredients and
    /// instructions.
    pub fn normalize(&self, raw: &str, request: &RecipeRequest) -> Normalized {
        let prompt = build_prompt(request);
        let validation_text = clean::prepare_for_validation(raw, Some(&prompt));
        let extraction_text = clean::prepare_for_extraction(&validation_text);

        let recipe = self.extractor.parse(&extraction_text);
        match self.validator.validate(&recipe, &validation_text) {
            Ok(()) => {
                info!(
                    "Extracted \"{}\" with {} ingredients and {} steps",
                    recipe.name,
                    recipe.ingredients.len(),
                    recipe.instructions.len()
                );
                Normalized {
                    recipe,
                    source: RecipeSource::Extracted,
                }
            }
            Err(rejection) => {
                warn!(
                    "Completion for \"{}\" rejected: {}",
                    request.user_input, rejection
                );
                Normalized {
                    recipe: self
                        .synthesizer
                        .synthesize(&request.user_input, request.mode),
                    source: RecipeSource::Synthesized(rejection),
                }
            }
        }
    }
}

/// Normalize with the default configuration and return only the recipe.
pub fn normalize_completion(raw: &str, request: &RecipeRequest) -> StructuredRecipe {
    Normalizer::default().normalize(raw, request).recipe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeMode;
    use crate::synthesizer::synthesize;

    #[test]
    fn test_echoed_prompt_is_ignored() {
        let request = RecipeRequest::ingredients("rice, eggs").unwrap();
        let raw = format!(
            "{}\n\nEgg Fried Rice\nIngredients:\n- 2 cups rice\n- 2 eggs\nInstructions:\n1. Scramble the eggs.\n2. Fry with the rice.",
            build_prompt(&request)
        );
        let normalized = Normalizer::default().normalize(&raw, &request);
        assert_eq!(normalized.source, RecipeSource::Extracted);
        assert_eq!(normalized.recipe.name, "Egg Fried Rice");
        assert_eq!(normalized.recipe.ingredients, vec!["2 cups rice", "2 eggs"]);
    }

    #[test]
    fn test_rejected_completion_is_synthesized() {
        let request = RecipeRequest::name("pasta").unwrap();
        let normalized = Normalizer::default().normalize("Sorry, no.", &request);
        assert_eq!(
            normalized.source,
            RecipeSource::Synthesized(Rejection::MissingIngredients)
        );
        assert!(normalized.is_synthesized());
        assert_eq!(normalized.recipe, synthesize("pasta", RecipeMode::Name));
    }

    #[test]
    fn test_configured_leak_phrase() {
        let config = NormalizerConfig {
            extra_leak_phrases: vec!["as requested".to_string()],
            ..NormalizerConfig::default()
        };
        let request = RecipeRequest::name("toast").unwrap();
        let raw = "As requested:\nIngredients:\n- bread\nInstructions:\n1. Toast it.";
        let normalized = Normalizer::new(&config).normalize(raw, &request);
        assert_eq!(
            normalized.source,
            RecipeSource::Synthesized(Rejection::LeakedInstruction("as requested".to_string()))
        );
    }
}
