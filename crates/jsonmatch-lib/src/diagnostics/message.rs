use rowan::TextRange;

/// Diagnostic kinds, grouped by the stage that reports them.
///
/// Lexical and grammar kinds come out of `parse`, the rest out of `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Lexer
    UnrecognizedCharacter,
    UnterminatedString,
    MalformedNumber,

    // Grammar
    ExpectedValue,
    ExpectedKey,
    ExpectedIndex,
    ExpectedIdentifier,
    UnexpectedToken,
    TrailingInput,
    InvalidIndex,

    // Validation
    DuplicateKey,
    DuplicateIndex,
    DuplicateBinding,
    UnboundReference,
    SelfReference,
}

impl DiagnosticKind {
    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnrecognizedCharacter => "unrecognized character",
            Self::UnterminatedString => "unterminated string, reached end of input",
            Self::MalformedNumber => "malformed number",

            Self::ExpectedValue => "expected a value",
            Self::ExpectedKey => "expected a string key",
            Self::ExpectedIndex => "expected an array index",
            Self::ExpectedIdentifier => "expected an identifier",
            Self::UnexpectedToken => "unexpected token",
            Self::TrailingInput => "unexpected input after pattern",
            Self::InvalidIndex => "array index must be a non-negative integer",

            Self::DuplicateKey => "duplicate key",
            Self::DuplicateIndex => "duplicate index",
            Self::DuplicateBinding => "duplicate binding",
            Self::UnboundReference => "reference before binding",
            Self::SelfReference => "illegal self reference",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnrecognizedCharacter => "unrecognized character {}".to_string(),
            Self::MalformedNumber => "malformed number {}".to_string(),

            Self::ExpectedValue
            | Self::ExpectedKey
            | Self::ExpectedIndex
            | Self::ExpectedIdentifier
            | Self::TrailingInput => format!("{}, found {{}}", self.fallback_message()),
            Self::UnexpectedToken => "{}".to_string(),
            Self::InvalidIndex => "array index {} must be a non-negative integer".to_string(),

            Self::DuplicateKey => "duplicate key {}".to_string(),
            Self::DuplicateIndex => "duplicate index {}".to_string(),
            Self::DuplicateBinding => "duplicate binding `{}`".to_string(),
            Self::UnboundReference => "reference to `{}` before it was bound".to_string(),
            Self::SelfReference => "illegal self reference to `{}`".to_string(),

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Extra explanation shown under the source snippet.
    pub fn note(&self) -> Option<&'static str> {
        match self {
            Self::SelfReference => {
                Some("a bound literal's name is not bound until its whole value has matched")
            }
            Self::InvalidIndex => Some("array indices look like `0` or `3`"),
            Self::UnterminatedString => Some("pattern strings cannot contain `\"`"),
            _ => None,
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.message,
            u32::from(self.range.start()),
            u32::from(self.range.end()),
        )?;
        for related in &self.related {
            write!(
                f,
                " ({} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
