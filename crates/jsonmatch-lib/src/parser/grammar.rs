//! Grammar productions for the pattern language.
//!
//! ```text
//! Value        := Null | Boolean | Number | String | Object | Array
//!               | Binding | Reference | BoundLiteral
//! Object       := '{' (Field (',' Field)*)? '}'
//! Field        := String '?'? ':' Value
//! Array        := '[' (Element (',' Element)*)? ']'
//! Element      := Number '?'? ':' Value
//! Binding      := '<' '=' Identifier '>'
//! Reference    := '<' Segment ('.' Segment)* '>'
//! Segment      := Identifier '?'?
//! BoundLiteral := Binding Value
//! ```

use rowan::TextRange;

use super::Parser;
use super::ast::{BoundLiteral, Element, Expr, ExprKind, Field, Ident, Reference, Segment};
use super::lexer::Token;
use super::syntax_kind::SyntaxKind;
use super::syntax_kind::token_sets::VALUE_FIRST;
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    /// A single value followed by end of input.
    pub(super) fn parse_root(&mut self) -> Option<Expr> {
        let expr = self.parse_value()?;
        if !self.currently_is(SyntaxKind::Eof) {
            return self.error_found(DiagnosticKind::TrailingInput);
        }
        Some(expr)
    }

    pub(super) fn parse_value(&mut self) -> Option<Expr> {
        if !self.enter_recursion() {
            return None;
        }
        let expr = self.parse_value_inner();
        self.exit_recursion();
        expr
    }

    fn parse_value_inner(&mut self) -> Option<Expr> {
        match self.current() {
            SyntaxKind::KwNull => {
                let token = self.bump();
                Some(Expr::new(ExprKind::Null, token.span))
            }
            SyntaxKind::KwTrue => {
                let token = self.bump();
                Some(Expr::new(ExprKind::Boolean(true), token.span))
            }
            SyntaxKind::KwFalse => {
                let token = self.bump();
                Some(Expr::new(ExprKind::Boolean(false), token.span))
            }
            SyntaxKind::Number => {
                let token = self.bump();
                let value = self.number_value(&token)?;
                Some(Expr::new(ExprKind::Number(value), token.span))
            }
            SyntaxKind::StringLiteral => {
                let token = self.bump();
                let text = self.string_content(&token).to_string();
                Some(Expr::new(ExprKind::String(text), token.span))
            }
            SyntaxKind::BraceOpen => self.parse_object(),
            SyntaxKind::BracketOpen => self.parse_array(),
            SyntaxKind::AngleOpen => self.parse_angle(),
            _ => self.error_found(DiagnosticKind::ExpectedValue),
        }
    }

    /// `{ "a": 1, "b"?: <=x> }`
    fn parse_object(&mut self) -> Option<Expr> {
        let open = self.bump(); // consume '{'
        let mut fields = Vec::new();

        if !self.currently_is(SyntaxKind::BraceClose) {
            loop {
                fields.push(self.parse_field()?);
                if self.eat_token(SyntaxKind::Comma).is_none() {
                    break;
                }
            }
        }

        let close = self.expect(SyntaxKind::BraceClose, "`,` or `}`")?;
        let span = TextRange::new(open.span.start(), close.span.end());
        Some(Expr::new(ExprKind::Object(fields), span))
    }

    fn parse_field(&mut self) -> Option<Field> {
        let Some(key) = self.eat_token(SyntaxKind::StringLiteral) else {
            return self.error_found(DiagnosticKind::ExpectedKey);
        };
        let optional = self.eat_token(SyntaxKind::Question).is_some();
        self.expect(SyntaxKind::Colon, "`:` after key")?;
        let value = self.parse_value()?;

        Some(Field {
            key: self.string_content(&key).to_string(),
            key_span: key.span,
            optional,
            value,
        })
    }

    /// `[ 0: 1, 2?: <=x> ]`
    fn parse_array(&mut self) -> Option<Expr> {
        let open = self.bump(); // consume '['
        let mut elements = Vec::new();

        if !self.currently_is(SyntaxKind::BracketClose) {
            loop {
                elements.push(self.parse_element()?);
                if self.eat_token(SyntaxKind::Comma).is_none() {
                    break;
                }
            }
        }

        let close = self.expect(SyntaxKind::BracketClose, "`,` or `]`")?;
        let span = TextRange::new(open.span.start(), close.span.end());
        Some(Expr::new(ExprKind::Array(elements), span))
    }

    fn parse_element(&mut self) -> Option<Element> {
        let Some(index) = self.eat_token(SyntaxKind::Number) else {
            return self.error_found(DiagnosticKind::ExpectedIndex);
        };
        let position = self.index_value(&index)?;
        let optional = self.eat_token(SyntaxKind::Question).is_some();
        self.expect(SyntaxKind::Colon, "`:` after index")?;
        let value = self.parse_value()?;

        Some(Element {
            index: position,
            index_span: index.span,
            optional,
            value,
        })
    }

    /// `<=name>`, `<=name> value` or `<name.chain?>`
    fn parse_angle(&mut self) -> Option<Expr> {
        let open = self.bump(); // consume '<'

        if self.eat_token(SyntaxKind::Equals).is_some() {
            let name = self.parse_ident()?;
            let close = self.expect(SyntaxKind::AngleClose, "`>` to close binding")?;

            if VALUE_FIRST.contains(self.current()) {
                let value = self.parse_value()?;
                let span = TextRange::new(open.span.start(), value.span.end());
                let bound = BoundLiteral {
                    name,
                    value: Box::new(value),
                };
                return Some(Expr::new(ExprKind::BoundLiteral(bound), span));
            }

            let span = TextRange::new(open.span.start(), close.span.end());
            return Some(Expr::new(ExprKind::Binding(name), span));
        }

        let mut reference = Reference::new(self.parse_segment()?);
        while self.eat_token(SyntaxKind::Dot).is_some() {
            reference.tail.push(self.parse_segment()?);
        }

        let close = self.expect(SyntaxKind::AngleClose, "`.` or `>` in reference")?;
        let span = TextRange::new(open.span.start(), close.span.end());
        Some(Expr::new(ExprKind::Reference(reference), span))
    }

    fn parse_segment(&mut self) -> Option<Segment> {
        let ident = self.parse_ident()?;
        let optional = self.eat_token(SyntaxKind::Question).is_some();
        Some(Segment { ident, optional })
    }

    fn parse_ident(&mut self) -> Option<Ident> {
        let Some(token) = self.eat_token(SyntaxKind::Id) else {
            return self.error_found(DiagnosticKind::ExpectedIdentifier);
        };
        Some(Ident {
            name: self.text(&token).to_string(),
            span: token.span,
        })
    }

    /// Text between the quotes. The lexer guarantees both quotes are present.
    fn string_content(&self, token: &Token) -> &str {
        let text = self.text(token);
        &text[1..text.len() - 1]
    }

    fn number_value(&mut self, token: &Token) -> Option<f64> {
        let text = self.text(token);
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => self.error_at(
                DiagnosticKind::MalformedNumber,
                token.span,
                format!("`{}`", text),
            ),
        }
    }

    /// Array indices must be non-negative integers that fit in `usize`.
    fn index_value(&mut self, token: &Token) -> Option<usize> {
        let value = self.number_value(token)?;
        if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
            return Some(value as usize);
        }
        let text = self.text(token);
        self.error_at(DiagnosticKind::InvalidIndex, token.span, format!("`{}`", text))
    }
}
