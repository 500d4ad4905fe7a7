//! Parser state machine and low-level operations.

use rowan::TextRange;

use super::ast::Expr;
use super::lexer::{Lexer, Token, token_text};
use super::syntax_kind::SyntaxKind;
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Recursive-descent parser pulling tokens from a [`Lexer`] one at a time.
///
/// Stops at the first grammar error. Productions return `None` once a
/// diagnostic has been reported.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    lexer: Lexer<'src>,
    current: Token,
    pub(super) diagnostics: Diagnostics,
    depth: u32,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            source,
            lexer,
            current,
            diagnostics: Diagnostics::new(),
            depth: 0,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Parses one complete pattern.
    ///
    /// Lexical diagnostics come first in the error, followed by the grammar
    /// diagnostic that stopped the parser.
    pub fn parse(mut self) -> Result<Expr, Error> {
        let root = self.parse_root();
        self.finish(root)
    }

    fn finish(self, root: Option<Expr>) -> Result<Expr, Error> {
        if let Some(err) = self.fatal_error {
            return Err(err);
        }

        let mut diagnostics = self.lexer.into_diagnostics();
        diagnostics.extend(self.diagnostics);

        match root {
            Some(root) if diagnostics.is_empty() => Ok(root),
            _ => Err(Error::PatternParseError(diagnostics)),
        }
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.current.kind
    }

    pub(super) fn currently_is(&self, kind: SyntaxKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the current token and pulls the next one.
    pub(super) fn bump(&mut self) -> Token {
        let token = self.current;
        if token.kind != SyntaxKind::Eof {
            self.current = self.lexer.next_token();
        }
        token
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> Option<Token> {
        if self.currently_is(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    /// On mismatch: emit diagnostic and stop.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> Option<Token> {
        if let Some(token) = self.eat_token(kind) {
            return Some(token);
        }
        let found = self.describe_current();
        self.error_msg(
            DiagnosticKind::UnexpectedToken,
            format!("expected {}, found {}", what, found),
        )
    }

    pub(super) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    fn describe_current(&self) -> String {
        match self.current.kind {
            SyntaxKind::Eof => "end of input".to_string(),
            _ => format!("`{}`", self.text(&self.current)),
        }
    }

    /// Reports `kind` at the current token, naming what was found instead.
    pub(super) fn error_found<T>(&mut self, kind: DiagnosticKind) -> Option<T> {
        let found = self.describe_current();
        self.error_msg(kind, found)
    }

    /// Reports at the current token unless the lexer already did.
    pub(super) fn error_msg<T>(
        &mut self,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> Option<T> {
        if !self.current.kind.is_error() {
            self.diagnostics
                .report(kind, self.current.span)
                .message(message)
                .emit();
        }
        None
    }

    pub(super) fn error_at<T>(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
    ) -> Option<T> {
        self.diagnostics.report(kind, range).message(message).emit();
        None
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
