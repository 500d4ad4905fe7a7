//! Errors that can occur while matching a document.

use std::fmt;

/// Longest excerpt of document text quoted in a message, in characters.
const EXCERPT_LIMIT: usize = 40;

/// A failed match: what went wrong and where in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchError {
    pub path: Vec<PathSegment>,
    pub kind: MatchErrorKind,
}

impl MatchError {
    pub fn new(path: Vec<PathSegment>, kind: MatchErrorKind) -> Self {
        Self { path, kind }
    }

    pub fn kind(&self) -> &MatchErrorKind {
        &self.kind
    }

    /// Renders the path alone, e.g. `$.items[2]["content-type"]`.
    pub fn path_string(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.path {
            out.push_str(&segment.to_string());
        }
        out
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.path_string())
    }
}

impl std::error::Error for MatchError {}

/// Step from a container to one of its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) if is_plain_key(key) => write!(f, ".{}", key),
            PathSegment::Key(key) => write!(f, "[{:?}]", key),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchErrorKind {
    #[error("document is not valid JSON: {0}")]
    InvalidDocument(String),

    #[error("expected an object but found {found}")]
    NotAnObject { found: String },

    #[error("expected an array but found {found}")]
    NotAnArray { found: String },

    /// The document holds a different kind of scalar than the literal.
    #[error("expected {expected} but found {found}, which is not {kind}")]
    UnexpectedKind {
        expected: String,
        kind: &'static str,
        found: String,
    },

    #[error("expected {expected} but found {found}")]
    LiteralMismatch { expected: String, found: String },

    #[error("object did not contain required field {key:?}")]
    MissingField { key: String },

    #[error("array of length {len} is too short to contain required index {index}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(
        "referenced binding `{name}` was not available, was it matched in an optional section?"
    )]
    UnavailableReference { name: String },

    #[error("reference to `{name}` did not match: expected {expected} but found {found}")]
    ReferenceMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("binding `{name}` already exists and cannot be overwritten")]
    DuplicateBinding { name: String },
}

/// Shortens document text for quoting in a message.
pub(crate) fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
