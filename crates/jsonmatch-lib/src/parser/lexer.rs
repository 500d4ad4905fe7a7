//! Pull-based lexer for the pattern language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! Lexical errors never abort lexing. Each one is recorded in the lexer's own
//! [`Diagnostics`] and surfaced as an error-kind token, so the parser decides
//! when to stop. Consecutive unrecognized characters coalesce into a single
//! `Garbage` token rather than one error per character.

use std::ops::Range;

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::syntax_kind::SyntaxKind;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Scanning cursor over one source text.
///
/// Holds the position (inside the Logos lexer), a token found while closing a
/// garbage run, and the lexical diagnostics accumulated so far.
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, SyntaxKind>,
    pending: Option<Token>,
    diagnostics: Diagnostics,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: SyntaxKind::lexer(source),
            pending: None,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Lexical diagnostics reported so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn eof_token(&self) -> Token {
        let end = TextSize::from(self.source.len() as u32);
        Token::new(SyntaxKind::Eof, TextRange::empty(end))
    }

    /// Returns the next non-trivia token. Keeps returning `Eof` once input is exhausted.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.pending.take() {
            self.check(&token);
            return token;
        }

        let mut garbage_start: Option<usize> = None;

        loop {
            let next = self.inner.next();

            let token = match next {
                Some(Err(())) => {
                    garbage_start.get_or_insert(self.inner.span().start);
                    continue;
                }
                Some(Ok(kind)) if kind.is_trivia() => {
                    if garbage_start.is_none() {
                        continue;
                    }
                    None
                }
                Some(Ok(kind)) => Some(Token::new(kind, range_to_text_range(self.inner.span()))),
                None => Some(self.eof_token()),
            };

            if let Some(start) = garbage_start {
                let end = match next {
                    Some(_) => self.inner.span().start,
                    None => self.source.len(),
                };
                self.pending = token;
                return self.garbage(start..end);
            }

            if let Some(token) = token {
                self.check(&token);
                return token;
            }
        }
    }

    fn garbage(&mut self, range: Range<usize>) -> Token {
        let text = &self.source[range.clone()];
        let token = Token::new(SyntaxKind::Garbage, range_to_text_range(range));
        self.diagnostics
            .report(DiagnosticKind::UnrecognizedCharacter, token.span)
            .message(format!("`{}`", text))
            .emit();
        token
    }

    fn check(&mut self, token: &Token) {
        match token.kind {
            SyntaxKind::UnterminatedString => {
                self.diagnostics
                    .report(DiagnosticKind::UnterminatedString, token.span)
                    .emit();
            }
            SyntaxKind::MalformedNumber => {
                self.diagnostics
                    .report(DiagnosticKind::MalformedNumber, token.span)
                    .message(format!("`{}`", token_text(self.source, token)))
                    .emit();
            }
            _ => {}
        }
    }
}

/// Tokenizes the whole source, stopping after `Eof`.
///
/// Convenience for tools and tests; the parser pulls tokens one at a time instead.
pub fn lex(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.kind == SyntaxKind::Eof {
            break;
        }
    }
    (tokens, lexer.into_diagnostics())
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
