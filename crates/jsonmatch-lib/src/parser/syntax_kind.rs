//! Token kinds for the pattern language.
//!
//! Logos derives token recognition. `Garbage` and `Eof` have no attributes:
//! the lexer synthesizes them for unrecognized input and end of input.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SyntaxKind {
    #[token("[")]
    BracketOpen = 0,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("<")]
    AngleOpen,

    #[token(">")]
    AngleClose,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[token("?")]
    Question,

    /// Separator inside dotted references: `<a.b>`
    #[token(".")]
    Dot,

    /// Double-quoted text without escape processing.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// A string that runs into end of input.
    #[regex(r#""[^"]*"#, allow_greedy = true)]
    UnterminatedString,

    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// A number running straight into a letter, e.g. `12ab`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?\p{L}[\p{L}\p{N}]*")]
    MalformedNumber,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    #[token("null")]
    KwNull,

    /// Any Unicode letter, then letters or digits: `x9`, `café`.
    /// Defined after keywords so they take precedence.
    #[regex(r"\p{L}[\p{L}\p{N}]*")]
    Id,

    /// Unicode white space, so NBSP, `\v` and em-space separate tokens too.
    #[regex(r"\s+")]
    Whitespace,

    /// Coalesced unrecognized characters
    Garbage,

    Eof,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace)
    }

    /// Kinds the lexer has already reported a diagnostic for.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Garbage | UnterminatedString | MalformedNumber)
    }
}

/// 32-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u32);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 32.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u8;
            assert!(kind < 32, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u8;
        if kind >= 32 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }
}

pub mod token_sets {
    use super::*;

    /// Tokens that can start a value.
    pub const VALUE_FIRST: TokenSet = TokenSet::new(&[
        KwNull,
        KwTrue,
        KwFalse,
        Number,
        StringLiteral,
        BraceOpen,
        BracketOpen,
        AngleOpen,
    ]);
}
