use crate::model::{RecipeMode, RecipeRequest};

/// Formatting instruction appended to every generation prompt.
///
/// Loaded from `prompt_format.txt` at compile time so the wording can be
/// edited without touching Rust string syntax.
pub const RECIPE_FORMAT_INSTRUCTION: &str = include_str!("prompt_format.txt");

/// Build the prompt sent upstream for a request.
///
/// The same string is later used to strip an echoed prompt from the
/// completion, so callers must send exactly this text.
pub fn build_prompt(request: &RecipeRequest) -> String {
    let input = request.user_input.trim();
    let lead = match request.mode {
        RecipeMode::Ingredients => format!("Generate a detailed recipe using these ingredients: {input}."),
        RecipeMode::Name => format!("Generate a detailed recipe for {input}."),
    };
    format!("{lead}\n{}", RECIPE_FORMAT_INSTRUCTION.trim())
}
