//! Scalar literals matched directly against raw document text.
//!
//! The text handed in is always one complete, valid JSON value, so the first
//! byte is enough to tell its kind.

use super::error::{MatchErrorKind, excerpt};

pub(super) fn match_null(raw: &str) -> Result<(), MatchErrorKind> {
    if raw == "null" {
        return Ok(());
    }
    Err(MatchErrorKind::LiteralMismatch {
        expected: "null".to_string(),
        found: excerpt(raw),
    })
}

pub(super) fn match_boolean(expected: bool, raw: &str) -> Result<(), MatchErrorKind> {
    let found = match raw {
        "true" => true,
        "false" => false,
        _ => return Err(unexpected_kind(expected, "a boolean", raw)),
    };
    if found != expected {
        return Err(mismatch(expected, raw));
    }
    Ok(())
}

pub(super) fn match_number(expected: f64, raw: &str) -> Result<(), MatchErrorKind> {
    if !raw.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        return Err(unexpected_kind(expected, "a number", raw));
    }
    match raw.parse::<f64>() {
        Ok(found) if found == expected => Ok(()),
        _ => Err(mismatch(expected, raw)),
    }
}

/// Pattern strings are compared verbatim against the raw text between the
/// document's quotes. Escapes are not decoded on either side.
pub(super) fn match_string(expected: &str, raw: &str) -> Result<(), MatchErrorKind> {
    let quoted = format!("\"{}\"", expected);
    if !raw.starts_with('"') {
        return Err(unexpected_kind(&quoted, "a string", raw));
    }
    if &raw[1..raw.len() - 1] != expected {
        return Err(mismatch(&quoted, raw));
    }
    Ok(())
}

fn unexpected_kind(expected: impl ToString, kind: &'static str, raw: &str) -> MatchErrorKind {
    MatchErrorKind::UnexpectedKind {
        expected: expected.to_string(),
        kind,
        found: excerpt(raw),
    }
}

fn mismatch(expected: impl ToString, raw: &str) -> MatchErrorKind {
    MatchErrorKind::LiteralMismatch {
        expected: expected.to_string(),
        found: excerpt(raw),
    }
}
