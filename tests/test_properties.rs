use recipe_normalizer::{
    extract, is_usable, normalize_completion, synthesize, RecipeMode, RecipeRequest,
};

/// Completions that have broken the extractor in one way or another.
fn hostile_inputs() -> Vec<String> {
    vec![
        String::new(),
        " ".to_string(),
        "\n\n\n".to_string(),
        ":".to_string(),
        "#".to_string(),
        "# \n##\n###".to_string(),
        "Ingredients:".to_string(),
        "Instructions:".to_string(),
        "Ingredients:Instructions:Tips:".to_string(),
        "1.\n2)\n3.".to_string(),
        "- \n* \n•".to_string(),
        "\u{0}\u{1}\u{fffd}\u{7f}".to_string(),
        "🍝🍝🍝\n\n🍜".to_string(),
        "Name:\r\nPrep:\r\nCook:\r\n".to_string(),
        "&amp;&lt;&#x27;&#39;&bogus;".to_string(),
        "a".repeat(10_000),
        "Step 1:\nStep 2:\n".repeat(200),
        "Ingredients:\n".repeat(50) + &"- x\n".repeat(50),
    ]
}

#[test]
fn test_extract_is_total() {
    for raw in hostile_inputs() {
        let recipe = extract(&raw);
        assert!(!recipe.name.is_empty(), "empty name for {raw:?}");
        assert!(!recipe.preparation_time.is_empty());
        assert!(!recipe.cooking_time.is_empty());
    }
}

#[test]
fn test_pipeline_always_returns_complete_recipe() {
    let requests = [
        RecipeRequest::ingredients("chicken breasts").unwrap(),
        RecipeRequest::ingredients("tofu, rice, scallions").unwrap(),
        RecipeRequest::name("Spaghetti Carbonara").unwrap(),
        RecipeRequest::name("🍰").unwrap(),
    ];

    for request in &requests {
        for raw in hostile_inputs() {
            let recipe = normalize_completion(&raw, request);
            assert!(!recipe.name.trim().is_empty(), "{raw:?}");
            assert!(!recipe.ingredients.is_empty(), "{raw:?}");
            assert!(!recipe.instructions.is_empty(), "{raw:?}");
            assert!(recipe.is_complete());
        }
    }
}

#[test]
fn test_labeled_time_is_exact() {
    let raw = "Preparation Time: 10 minutes   \t\nIngredients:\n- rice";
    assert_eq!(extract(raw).preparation_time, "10 minutes");

    let raw = "Cooking Time:25 minutes";
    assert_eq!(extract(raw).cooking_time, "25 minutes");
}

#[test]
fn test_sections_are_isolated() {
    let raw = "Tomato Salad\n\
               Ingredients:\n\
               - 4 tomatoes\n\
               - 1 shallot\n\
               - 2 tbsp vinegar\n\
               Instructions:\n\
               1. Slice the tomatoes.\n\
               2. Mince the shallot.\n\
               3. Dress with vinegar.";
    let recipe = extract(raw);

    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.instructions.len(), 3);
    for ingredient in &recipe.ingredients {
        assert!(!recipe.instructions.contains(ingredient));
    }
    for step in &recipe.instructions {
        assert!(!recipe.ingredients.contains(step));
    }
}

#[test]
fn test_leak_detection_ignores_structure() {
    let well_formed = "Ingredients:\n- 2 eggs\nInstructions:\n1. Fry the eggs.";
    let recipe = extract(well_formed);
    assert!(is_usable(&recipe, well_formed));

    for prefix in ["I'll generate", "i'll GENERATE", "OK! I'LL GENERATE"] {
        let raw = format!("{prefix} a recipe for you.\n{well_formed}");
        assert!(!is_usable(&extract(&raw), &raw), "{prefix}");
    }
}

#[test]
fn test_empty_step_label_is_a_placeholder() {
    let raw = "Ingredients:\n- 2 eggs\nInstructions:\nStep 1:\n1. Fry the eggs.";
    let recipe = extract(raw);
    assert!(!recipe.instructions.is_empty());
    assert!(!is_usable(&recipe, raw));

    let raw = "Ingredients:\n- 2 eggs\nInstructions:\nStep 1: Fry the eggs.";
    assert!(is_usable(&extract(raw), raw));
}

#[test]
fn test_fallback_is_deterministic() {
    let first = synthesize("chicken breasts", RecipeMode::Ingredients);
    let second = synthesize("chicken breasts", RecipeMode::Ingredients);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.name, "Roasted Chicken Breasts");
    assert_eq!(first.ingredients[0], "800g chicken breasts");
}
