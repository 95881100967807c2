pub mod clean;
pub mod config;
pub mod error;
pub mod export;
pub mod extractors;
pub mod model;
pub mod normalizer;
pub mod prompt;
pub mod synthesizer;
pub mod validator;

// Re-export commonly used types
pub use config::NormalizerConfig;
pub use error::NormalizeError;
pub use extractors::{extract, Extractor};
pub use model::{RecipeMode, RecipeRequest, StructuredRecipe, UNKNOWN_TIME};
pub use normalizer::{normalize_completion, Normalized, Normalizer, RecipeSource};
pub use prompt::build_prompt;
pub use synthesizer::{synthesize, Synthesizer};
pub use validator::{Rejection, Validator};

/// Check an extracted recipe against the default validation rules.
pub fn is_usable(recipe: &StructuredRecipe, raw_text: &str) -> bool {
    Validator::new().is_usable(recipe, raw_text)
}
