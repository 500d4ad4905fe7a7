//! Command builders for the CLI.

use clap::Command;

use super::args::*;

fn with_pattern_args(cmd: Command) -> Command {
    cmd.arg(pattern_text_arg())
        .arg(pattern_file_arg())
        .group(pattern_group())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("jsonmatch")
        .about("Match JSON documents against a pattern and print the captured bindings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(match_command())
        .subcommand(check_command())
        .subcommand(fmt_command())
}

/// Match every input line against a pattern.
pub fn match_command() -> Command {
    let cmd = Command::new("match")
        .about("Match JSON lines against a pattern")
        .override_usage(
            "\
  jsonmatch match -p <PATTERN> [-i <FILE>] [-o <FILE>]
  jsonmatch match -f <FILE> [-i <FILE>] [-o <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  jsonmatch match -p '{"id": <=id>}' -i events.jsonl
  jsonmatch match -f pattern.jm < events.jsonl > ids.jsonl

Lines that do not match are reported on stderr and skipped.
Set JSONMATCH_LOG=info for a summary, or JSONMATCH_LOG=off to silence them."#,
        )
        .arg(input_arg())
        .arg(output_arg());

    with_pattern_args(cmd)
}

/// Validate a pattern.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .after_help(
            r#"EXAMPLES:
  jsonmatch check -f pattern.jm
  jsonmatch check -p '{"a": <x>}'      # fails: reference before binding"#,
        );

    with_pattern_args(cmd)
}

/// Print a pattern in canonical form.
pub fn fmt_command() -> Command {
    let cmd = Command::new("fmt")
        .about("Print a pattern in canonical form")
        .after_help(
            r#"EXAMPLES:
  jsonmatch fmt -p '{"a":[0:<=x>],"b":<x>}'"#,
        );

    with_pattern_args(cmd)
}
