//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, fmt_command, match_command};
use crate::commands::pattern_loader::PatternInput;

#[test]
fn match_extracts_all_params() {
    let m = match_command()
        .try_get_matches_from([
            "match",
            "-p",
            r#"{"id": <=id>}"#,
            "-i",
            "events.jsonl",
            "-o",
            "ids.jsonl",
            "--color",
            "never",
        ])
        .unwrap();

    let params = MatchParams::from_matches(&m);

    assert_eq!(
        params.pattern,
        PatternInput::Text(r#"{"id": <=id>}"#.to_string())
    );
    assert_eq!(params.input, Some(PathBuf::from("events.jsonl")));
    assert_eq!(params.output, Some(PathBuf::from("ids.jsonl")));
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn match_defaults_to_standard_streams() {
    let m = match_command()
        .try_get_matches_from(["match", "-f", "pattern.jm"])
        .unwrap();

    let params = MatchParams::from_matches(&m);

    assert_eq!(
        params.pattern,
        PatternInput::File(PathBuf::from("pattern.jm"))
    );
    assert_eq!(params.input, None);
    assert_eq!(params.output, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn pattern_is_required() {
    let result = match_command().try_get_matches_from(["match", "-i", "events.jsonl"]);
    assert!(result.is_err(), "match without a pattern should be rejected");

    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err(), "check without a pattern should be rejected");
}

#[test]
fn pattern_text_and_file_conflict() {
    let result = fmt_command().try_get_matches_from(["fmt", "-p", "{}", "-f", "pattern.jm"]);
    assert!(
        result.is_err(),
        "-p and -f together should be rejected: {:?}",
        result.ok()
    );
}

#[test]
fn check_does_not_accept_io_flags() {
    let result = check_command().try_get_matches_from(["check", "-p", "{}", "-i", "x.jsonl"]);
    assert!(result.is_err(), "check should not accept -i");
}

#[test]
fn color_values() {
    let m = check_command()
        .try_get_matches_from(["check", "-p", "{}", "--color", "always"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Always);

    let result = check_command().try_get_matches_from(["check", "-p", "{}", "--color", "sometimes"]);
    assert!(result.is_err(), "unknown color mode should be rejected");
}

#[test]
fn color_choice_resolution() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}

#[test]
fn params_convert_to_command_args() {
    let m = fmt_command()
        .try_get_matches_from(["fmt", "-p", "[0: 1]", "--color", "never"])
        .unwrap();

    let args: crate::commands::fmt::FmtArgs = FmtParams::from_matches(&m).into();

    assert_eq!(args.pattern, PatternInput::Text("[0: 1]".to_string()));
    assert!(!args.color);
}

#[test]
fn full_cli_routes_subcommands() {
    for name in ["match", "check", "fmt"] {
        let m = build_cli()
            .try_get_matches_from(["jsonmatch", name, "-p", "{}"])
            .unwrap();
        assert_eq!(m.subcommand_name(), Some(name));
    }

    assert!(build_cli().try_get_matches_from(["jsonmatch"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}
