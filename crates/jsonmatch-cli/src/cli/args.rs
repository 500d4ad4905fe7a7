//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgGroup, value_parser};

/// Inline pattern text (-p/--pattern).
pub fn pattern_text_arg() -> Arg {
    Arg::new("pattern_text")
        .short('p')
        .long("pattern")
        .value_name("PATTERN")
        .help("Pattern text")
}

/// File containing the pattern (-f/--file).
pub fn pattern_file_arg() -> Arg {
    Arg::new("pattern_file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File containing the pattern")
}

/// Exactly one of -p and -f.
pub fn pattern_group() -> ArgGroup {
    ArgGroup::new("pattern")
        .args(["pattern_text", "pattern_file"])
        .required(true)
}

/// JSON lines to match (-i/--input).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File of JSON documents, one per line (default: stdin)")
}

/// Where bindings go (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File to write bindings to, one JSON object per line (default: stdout)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}
