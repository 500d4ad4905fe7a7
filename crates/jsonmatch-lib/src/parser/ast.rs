//! Pattern AST.
//!
//! Built once by the parser, validated once, then read-only. Every node keeps
//! the span of source text it was parsed from so diagnostics can point at it.

use rowan::TextRange;

/// A pattern node with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: TextRange,
}

/// The closed set of pattern node variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `null`
    Null,
    /// `true` | `false`
    Boolean(bool),
    /// `12`, `-0.5`
    Number(f64),
    /// `"text"`, compared verbatim
    String(String),
    /// `<=name>`: capture the value here
    Binding(Ident),
    /// `<name>`: require a value equal to an earlier capture
    Reference(Reference),
    /// `<=name> value`: capture the value here and require it to match `value`
    BoundLiteral(BoundLiteral),
    /// `{"key": value, "opt"?: value}`
    Object(Vec<Field>),
    /// `[0: value, 3?: value]`
    Array(Vec<Element>),
}

impl Expr {
    pub fn new(kind: ExprKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: TextRange,
}

impl Ident {
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// `<a.b?.c>`
///
/// Only the first segment takes part in validation and matching. The rest of
/// the chain is kept so it renders back unchanged, but constrains nothing.
/// The first segment is held apart, so a chain is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub head: Segment,
    pub tail: Vec<Segment>,
}

impl Reference {
    pub fn new(head: Segment) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// The referenced binding.
    pub fn name(&self) -> &Ident {
        &self.head.ident
    }

    /// Every segment of the chain, head first.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        std::iter::once(&self.head).chain(&self.tail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub ident: Ident,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundLiteral {
    pub name: Ident,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub key_span: TextRange,
    pub optional: bool,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub index: usize,
    pub index_span: TextRange,
    pub optional: bool,
    pub value: Expr,
}
