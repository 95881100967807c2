//! Deterministic template recipes used when a completion is unusable.
//!
//! Templates are plain data. `{input}` is replaced with the user's text,
//! `{Input}` with its title-cased form and `{Keyword}` with the title-cased
//! keyword that selected the template.

use log::debug;

use crate::config::NormalizerConfig;
use crate::model::{RecipeMode, StructuredRecipe};

/// A fixed recipe skeleton for one dish family.
#[derive(Debug)]
pub struct DishTemplate {
    pub family: &'static str,
    /// Any of these, found case-insensitively in the input, selects the template.
    pub keywords: &'static [&'static str],
    pub title: &'static str,
    pub preparation_time: &'static str,
    pub cooking_time: &'static str,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static [&'static str],
}

/// Checked top to bottom; the first template with a matching keyword wins.
pub const DISH_TEMPLATES: &[DishTemplate] = &[
    DishTemplate {
        family: "pasta",
        keywords: &["spaghetti", "pasta", "penne", "linguine", "noodle"],
        title: "Garlic and Parmesan {Keyword}",
        preparation_time: "10 minutes",
        cooking_time: "15 minutes",
        ingredients: &[
            "400g {input}",
            "3 tablespoons olive oil",
            "4 cloves garlic, thinly sliced",
            "1/2 teaspoon red pepper flakes",
            "50g grated Parmesan cheese",
            "2 tablespoons chopped fresh parsley",
            "Salt and black pepper to taste",
        ],
        instructions: &[
            "Bring a large pot of well-salted water to a boil.",
            "Cook the {keyword} until al dente, then reserve a cup of the cooking water and drain.",
            "Warm the olive oil in a wide pan over medium-low heat and cook the garlic and pepper flakes until fragrant.",
            "Toss the drained {keyword} in the pan with a splash of the reserved water.",
            "Stir in the Parmesan and parsley, season with salt and pepper, and serve immediately.",
        ],
    },
    DishTemplate {
        family: "chicken",
        keywords: &["chicken"],
        title: "Roasted {Input}",
        preparation_time: "15 minutes",
        cooking_time: "40 minutes",
        ingredients: &[
            "800g {input}",
            "2 tablespoons olive oil",
            "3 cloves garlic, minced",
            "1 lemon, juiced and zested",
            "1 teaspoon dried thyme",
            "1 teaspoon paprika",
            "Salt and black pepper to taste",
        ],
        instructions: &[
            "Preheat the oven to 200°C (400°F).",
            "Pat the {input} dry and place it in a roasting dish.",
            "Mix the olive oil, garlic, lemon, thyme and paprika, then rub the mixture all over the {input}.",
            "Season generously with salt and pepper.",
            "Roast for about 40 minutes, until the juices run clear.",
            "Rest for 5 minutes before serving.",
        ],
    },
    DishTemplate {
        family: "soup",
        keywords: &["soup", "stew", "broth"],
        title: "Hearty {Input}",
        preparation_time: "15 minutes",
        cooking_time: "35 minutes",
        ingredients: &[
            "500g {input} vegetables or base ingredients",
            "1 onion, diced",
            "2 carrots, diced",
            "2 cloves garlic, minced",
            "1 litre stock",
            "2 tablespoons olive oil",
            "Salt and black pepper to taste",
        ],
        instructions: &[
            "Heat the olive oil in a large pot over medium heat.",
            "Cook the onion, carrots and garlic until softened, about 8 minutes.",
            "Add the remaining ingredients for the {input} and pour in the stock.",
            "Simmer gently for 25 minutes, stirring occasionally.",
            "Season with salt and pepper and serve hot.",
        ],
    },
    DishTemplate {
        family: "salad",
        keywords: &["salad"],
        title: "Fresh {Input}",
        preparation_time: "15 minutes",
        cooking_time: "0 minutes",
        ingredients: &[
            "300g {input} greens and vegetables",
            "3 tablespoons olive oil",
            "1 tablespoon lemon juice",
            "1 teaspoon Dijon mustard",
            "Salt and black pepper to taste",
        ],
        instructions: &[
            "Wash and dry the greens and vegetables for the {input}.",
            "Whisk the olive oil, lemon juice and mustard into a dressing.",
            "Toss everything together just before serving and season to taste.",
        ],
    },
];

/// Used when no template keyword matches.
pub static GENERIC_TEMPLATE: DishTemplate = DishTemplate {
    family: "generic",
    keywords: &[],
    title: "Simple {Input} Skillet",
    preparation_time: "10 minutes",
    cooking_time: "20 minutes",
    ingredients: &[
        "500g {input}",
        "2 tablespoons olive oil",
        "1 onion, chopped",
        "2 cloves garlic, minced",
        "Salt and black pepper to taste",
        "Fresh herbs to garnish",
    ],
    instructions: &[
        "Prepare the {input} by washing and cutting into bite-sized pieces.",
        "Heat the olive oil in a large skillet over medium heat.",
        "Cook the onion and garlic until soft and fragrant, about 5 minutes.",
        "Add the {input} and cook, stirring often, until tender.",
        "Season with salt and pepper, garnish with fresh herbs and serve.",
    ],
};

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// The first template (and keyword) matching `input`.
pub fn select_template(input: &str) -> (&'static DishTemplate, Option<&'static str>) {
    let lowered = input.to_lowercase();
    DISH_TEMPLATES
        .iter()
        .find_map(|template| {
            template
                .keywords
                .iter()
                .find(|keyword| lowered.contains(*keyword))
                .map(|keyword| (template, Some(*keyword)))
        })
        .unwrap_or((&GENERIC_TEMPLATE, None))
}

#[derive(Debug, Clone)]
pub struct Synthesizer {
    blank_input_substitute: String,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::from_config(&NormalizerConfig::default())
    }
}

impl Synthesizer {
    pub fn from_config(config: &NormalizerConfig) -> Self {
        Synthesizer {
            blank_input_substitute: config.blank_input_substitute.clone(),
        }
    }

    /// Build a complete recipe from the user's input alone.
    pub fn synthesize(&self, user_input: &str, mode: RecipeMode) -> StructuredRecipe {
        let trimmed = user_input.split_whitespace().collect::<Vec<_>>().join(" ");
        let input = if trimmed.is_empty() {
            self.blank_input_substitute.as_str()
        } else {
            trimmed.as_str()
        };

        let (template, keyword) = select_template(input);
        debug!("Synthesizing from the {} template", template.family);

        let keyword = keyword.unwrap_or(input);
        let fill = |slot: &str| {
            slot.replace("{input}", input)
                .replace("{Input}", &title_case(input))
                .replace("{keyword}", keyword)
                .replace("{Keyword}", &title_case(keyword))
        };

        // A named dish keeps its own name; ingredient lists get the template title.
        let name = match mode {
            RecipeMode::Name if !trimmed.is_empty() => title_case(input),
            _ => fill(template.title),
        };

        StructuredRecipe {
            name,
            preparation_time: template.preparation_time.to_string(),
            cooking_time: template.cooking_time.to_string(),
            ingredients: template.ingredients.iter().map(|s| fill(*s)).collect(),
            instructions: template.instructions.iter().map(|s| fill(*s)).collect(),
        }
    }
}

/// Synthesize with the default configuration.
pub fn synthesize(user_input: &str, mode: RecipeMode) -> StructuredRecipe {
    Synthesizer::default().synthesize(user_input, mode)
}
