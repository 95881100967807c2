use clap::Parser;
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use recipe_normalizer::config::load_config;
use recipe_normalizer::export::to_json_ld;
use recipe_normalizer::{NormalizeError, Normalizer, RecipeMode, RecipeRequest};

/// Normalize a recipe completion into structured JSON
#[derive(Parser, Debug)]
#[command(name = "recipe-normalizer", version, about)]
struct Args {
    /// The ingredients or dish name the completion was generated for
    #[arg(short, long)]
    input: String,

    /// How to read the input: ingredients or name
    #[arg(short, long, default_value = "ingredients")]
    mode: RecipeMode,

    /// File holding the completion (reads stdin when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print schema.org JSON-LD instead of the plain record
    #[arg(long, requires = "date")]
    json_ld: bool,

    /// Publication date (YYYY-MM-DD) written into JSON-LD output
    #[arg(long)]
    date: Option<String>,

    /// Configuration file (defaults to ./normalizer.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), NormalizeError> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    debug!("Loaded configuration: {:?}", config);

    let raw = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let request = RecipeRequest::new(args.input, args.mode)?;
    let normalized = Normalizer::new(&config).normalize(&raw, &request);
    if normalized.is_synthesized() {
        info!("Completion was unusable; printed a template recipe");
    }

    let output = if args.json_ld {
        serde_json::to_string_pretty(&to_json_ld(
            &normalized.recipe,
            args.date.as_deref().unwrap_or_default(),
        ))?
    } else {
        serde_json::to_string_pretty(&normalized.recipe)?
    };
    println!("{output}");

    Ok(())
}
