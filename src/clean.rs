//! Pure text stages run over a completion before it is validated and parsed.
//!
//! Stages are split in two groups. [`VALIDATION_STAGES`] only undo transport
//! artifacts, so anything the generator actually wrote (including leaked
//! instructions) is still visible to the validator. [`EXTRACTION_STAGES`]
//! then tidy the text for the rule tables in [`crate::extractors`].

use html_escape::decode_html_entities;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::validator::{fold, LEAK_PHRASES};

/// A named text transformation.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

pub const VALIDATION_STAGES: &[Stage] = &[
    Stage {
        name: "normalize_line_endings",
        apply: normalize_line_endings,
    },
    Stage {
        name: "decode_entities",
        apply: decode_entities,
    },
];

pub const EXTRACTION_STAGES: &[Stage] = &[
    Stage {
        name: "strip_leaked_preamble",
        apply: strip_leaked_preamble,
    },
    Stage {
        name: "strip_emphasis",
        apply: strip_emphasis,
    },
    Stage {
        name: "normalize_bullets",
        apply: normalize_bullets,
    },
];

static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([ \t]*)(?:[•▪][ \t]*|[–—+][ \t]+)").expect("Invalid regex pattern")
});

/// Run `stages` in order.
pub fn run(stages: &[Stage], text: &str) -> String {
    stages.iter().fold(text.to_string(), |acc, stage| {
        let next = (stage.apply)(&acc);
        if next != acc {
            debug!("Stage {} rewrote the completion", stage.name);
        }
        next
    })
}

/// Text the validator judges: line endings unified, the echoed prompt
/// removed and HTML entities decoded.
pub fn prepare_for_validation(raw: &str, prompt: Option<&str>) -> String {
    let text = normalize_line_endings(raw);
    let text = match prompt {
        Some(prompt) => strip_prompt_echo(&text, &normalize_line_endings(prompt)),
        None => text,
    };
    run(VALIDATION_STAGES, &text)
}

/// Text the extractor parses, derived from the validation text.
pub fn prepare_for_extraction(validation_text: &str) -> String {
    run(EXTRACTION_STAGES, validation_text)
}

pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Remove the first verbatim copy of the prompt and trim what is left.
pub fn strip_prompt_echo(text: &str, prompt: &str) -> String {
    let prompt = prompt.trim();
    if prompt.is_empty() || !text.contains(prompt) {
        return text.to_string();
    }
    debug!("Completion echoed its prompt");
    text.replacen(prompt, "", 1).trim().to_string()
}

pub fn decode_entities(text: &str) -> String {
    decode_html_entities(text).into_owned()
}

/// Drop leading lines that are chatter such as "Sure, here's a recipe for pasta:".
pub fn strip_leaked_preamble(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let skip = lines
        .iter()
        .take_while(|line| {
            let folded = fold(line);
            folded.trim().is_empty() || LEAK_PHRASES.iter().any(|phrase| folded.contains(phrase))
        })
        .count();

    if skip == 0 {
        return text.to_string();
    }
    lines[skip..].join("\n")
}

/// Remove Markdown bold markers so `**Ingredients:**` reads as a heading.
pub fn strip_emphasis(text: &str) -> String {
    text.replace("**", "").replace("__", "")
}

/// Rewrite uncommon bullet glyphs at line start to `- `.
pub fn normalize_bullets(text: &str) -> String {
    BULLET_MARKER.replace_all(text, "${1}- ").into_owned()
}
