use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Normalizer configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NormalizerConfig {
    /// Recipe name used when no title can be extracted
    #[serde(default = "default_name")]
    pub default_name: String,
    /// Maximum number of trailing paragraphs taken as instructions when no
    /// instruction section or numbered steps are found
    #[serde(default = "default_trailing_paragraphs")]
    pub trailing_paragraphs: usize,
    /// Additional phrases that mark a completion as leaking generator instructions
    #[serde(default)]
    pub extra_leak_phrases: Vec<String>,
    /// Stand-in ingredient for template recipes when the user input is blank
    #[serde(default = "default_blank_input_substitute")]
    pub blank_input_substitute: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            default_name: default_name(),
            trailing_paragraphs: default_trailing_paragraphs(),
            extra_leak_phrases: Vec::new(),
            blank_input_substitute: default_blank_input_substitute(),
        }
    }
}

// Default value functions
fn default_name() -> String {
    "Recipe".to_string()
}

fn default_trailing_paragraphs() -> usize {
    3
}

fn default_blank_input_substitute() -> String {
    "seasonal vegetables".to_string()
}

impl NormalizerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_NORMALIZER__ prefix
    /// 2. normalizer.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

/// Load configuration, reading `path` instead of `normalizer.toml` when given.
///
/// Environment variable format: RECIPE_NORMALIZER__DEFAULT_NAME.
/// RECIPE_NORMALIZER__EXTRA_LEAK_PHRASES takes a comma-separated list.
pub fn load_config(path: Option<&Path>) -> Result<NormalizerConfig, ConfigError> {
    let file = match path {
        // An explicitly named file must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("normalizer").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RECIPE_NORMALIZER")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("extra_leak_phrases")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
