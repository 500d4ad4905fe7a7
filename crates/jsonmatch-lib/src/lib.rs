//! jsonmatch: a pattern language for matching and destructuring JSON documents.
//!
//! # Example
//!
//! ```
//! use jsonmatch_lib::Pattern;
//!
//! let pattern = Pattern::parse(r#"{"id": <=id>, "owner": {"id": <id>}}"#).unwrap();
//! let bindings = pattern.interpret(r#"{"owner": {"id": 7}, "id": 7}"#).unwrap();
//! assert_eq!(bindings.get("id"), Some(&serde_json::json!(7)));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod engine;
pub mod parser;
pub mod pattern;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use engine::{MatchError, MatchErrorKind, PathSegment};
pub use jsonmatch_core::{Bindings, structural_eq};
pub use pattern::{Pattern, PatternBuilder};

/// Errors that can occur while building a pattern.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Recursion fuel exhausted (pattern nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("pattern parsing failed: {0}")]
    PatternParseError(Diagnostics),

    #[error("pattern validation failed: {0}")]
    PatternValidateError(Diagnostics),
}

impl Error {
    /// Diagnostics behind a parse or validation failure.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Self::RecursionLimitExceeded => None,
            Self::PatternParseError(d) | Self::PatternValidateError(d) => Some(d),
        }
    }
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses and validates a pattern. Shorthand for [`Pattern::parse`].
pub fn parse(source: &str) -> Result<Pattern> {
    Pattern::parse(source)
}
