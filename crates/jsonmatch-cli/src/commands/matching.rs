use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use jsonmatch_lib::Pattern;
use tracing::{debug, info, warn};

use super::pattern_loader::{PatternInput, load_pattern_or_exit};

pub struct MatchArgs {
    pub pattern: PatternInput,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub color: bool,
}

/// Failures that stop a run. A line that does not match is not one of them.
#[derive(Debug, thiserror::Error)]
pub enum MatchLinesError {
    #[error("failed to read input line {line}: {source}")]
    Read { line: usize, source: io::Error },

    #[error("failed to encode bindings for line {line}: {source}")]
    Encode {
        line: usize,
        source: serde_json::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Counts for one run over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub matched: usize,
    pub skipped: usize,
}

pub fn run(args: MatchArgs) {
    let (source, pattern) = load_pattern_or_exit(&args.pattern, args.color);
    debug!(
        source = source.path.as_deref().unwrap_or("<inline>"),
        "pattern loaded"
    );

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("error: failed to open '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match &args.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(e) => {
                eprintln!("error: failed to create '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match match_lines(&pattern, input, output) {
        Ok(summary) => info!(
            lines = summary.lines,
            matched = summary.matched,
            skipped = summary.skipped,
            "done"
        ),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Interprets every line of `input`, writing one compact JSON object of
/// bindings per matching line.
///
/// Lines that fail to match are logged and skipped. Blank lines are ignored.
pub fn match_lines(
    pattern: &Pattern,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<Summary, MatchLinesError> {
    let mut summary = Summary::default();

    for (i, line) in input.lines().enumerate() {
        let number = i + 1;
        let line = line.map_err(|source| MatchLinesError::Read {
            line: number,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        summary.lines += 1;

        let bindings = match pattern.interpret(&line) {
            Ok(bindings) => bindings,
            Err(err) => {
                warn!(line = number, "{}", err);
                summary.skipped += 1;
                continue;
            }
        };

        serde_json::to_writer(&mut output, &bindings).map_err(|source| {
            MatchLinesError::Encode {
                line: number,
                source,
            }
        })?;
        output.write_all(b"\n")?;
        summary.matched += 1;
    }

    output.flush()?;
    Ok(summary)
}
