use std::fs;
use std::path::{Path, PathBuf};

use jsonmatch_lib::Pattern;

/// Where the pattern text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternInput {
    Text(String),
    File(PathBuf),
}

/// Pattern text plus the name diagnostics should point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSource {
    pub text: String,
    pub path: Option<String>,
}

pub fn load_pattern_source(input: &PatternInput) -> Result<PatternSource, String> {
    match input {
        PatternInput::Text(text) => Ok(PatternSource {
            text: text.clone(),
            path: None,
        }),
        PatternInput::File(path) => load_file(path),
    }
}

fn load_file(path: &Path) -> Result<PatternSource, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(PatternSource {
        text,
        path: Some(path.to_string_lossy().into_owned()),
    })
}

/// Parses and validates, rendering any diagnostics against the pattern text.
pub fn parse_pattern(source: &PatternSource, color: bool) -> Result<Pattern, String> {
    Pattern::parse(&source.text).map_err(|err| match err.diagnostics() {
        Some(diagnostics) => {
            let mut printer = diagnostics.printer().source(&source.text).colored(color);
            if let Some(path) = &source.path {
                printer = printer.path(path);
            }
            printer.render()
        }
        None => format!("error: {}", err),
    })
}

/// Loads and parses the pattern, exiting with status 1 on any failure.
pub fn load_pattern_or_exit(input: &PatternInput, color: bool) -> (PatternSource, Pattern) {
    let source = match load_pattern_source(input) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    match parse_pattern(&source, color) {
        Ok(pattern) => (source, pattern),
        Err(rendered) => {
            eprintln!("{}", rendered);
            std::process::exit(1);
        }
    }
}
