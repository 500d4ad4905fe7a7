//! Binding soundness and uniqueness checks.
//!
//! Pre-order, left to right. Bindings made by a field are visible to every
//! later sibling and to everything nested in those siblings, which is the
//! scoping rule references are checked against. Traversal order, not
//! document order, decides what "earlier" means.

use std::collections::HashMap;
use std::ops::ControlFlow;

use indexmap::IndexMap;
use rowan::TextRange;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::ast::{BoundLiteral, Element, Expr, ExprKind, Field, Ident, Reference};

/// Validates a whole pattern, stopping at the first violation.
pub fn validate(root: &Expr) -> Result<(), Diagnostics> {
    let mut validator = Validator::new();
    match validator.visit(root) {
        ControlFlow::Continue(()) => Ok(()),
        ControlFlow::Break(()) => Err(validator.diagnostics),
    }
}

/// Validation context threaded through one pass.
///
/// `bound` holds every name proven bound so far, with the span that bound it.
/// `binding_stack` holds the names of enclosing bound literals whose
/// sub-pattern is being visited; they are not bound yet.
#[derive(Debug, Default)]
pub struct Validator<'a> {
    bound: IndexMap<&'a str, TextRange>,
    binding_stack: Vec<&'a Ident>,
    diagnostics: Diagnostics,
}

impl<'a> Validator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names bound so far, in binding order.
    pub fn bound_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.bound.keys().copied()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn visit(&mut self, expr: &'a Expr) -> ControlFlow<()> {
        match &expr.kind {
            ExprKind::Null | ExprKind::Boolean(_) | ExprKind::Number(_) | ExprKind::String(_) => {
                ControlFlow::Continue(())
            }
            ExprKind::Binding(name) => self.bind(name),
            ExprKind::Reference(reference) => self.check_reference(reference),
            ExprKind::BoundLiteral(bound) => self.visit_bound_literal(bound),
            ExprKind::Object(fields) => self.visit_object(fields),
            ExprKind::Array(elements) => self.visit_array(elements),
        }
    }

    fn visit_object(&mut self, fields: &'a [Field]) -> ControlFlow<()> {
        let mut keys: HashMap<&str, TextRange> = HashMap::new();
        for field in fields {
            if let Some(&first) = keys.get(field.key.as_str()) {
                return self.fail(
                    DiagnosticKind::DuplicateKey,
                    field.key_span,
                    format!("\"{}\"", field.key),
                    Some(("first defined here", first)),
                );
            }
            keys.insert(&field.key, field.key_span);
        }

        for field in fields {
            self.visit(&field.value)?;
        }
        ControlFlow::Continue(())
    }

    fn visit_array(&mut self, elements: &'a [Element]) -> ControlFlow<()> {
        let mut indices: HashMap<usize, TextRange> = HashMap::new();
        for element in elements {
            if let Some(&first) = indices.get(&element.index) {
                return self.fail(
                    DiagnosticKind::DuplicateIndex,
                    element.index_span,
                    element.index.to_string(),
                    Some(("first defined here", first)),
                );
            }
            indices.insert(element.index, element.index_span);
        }

        for element in elements {
            self.visit(&element.value)?;
        }
        ControlFlow::Continue(())
    }

    fn visit_bound_literal(&mut self, bound: &'a BoundLiteral) -> ControlFlow<()> {
        self.check_unbound(&bound.name)?;

        self.binding_stack.push(&bound.name);
        let flow = self.visit(&bound.value);
        self.binding_stack.pop();
        flow?;

        self.bind(&bound.name)
    }

    fn check_reference(&mut self, reference: &'a Reference) -> ControlFlow<()> {
        let name = reference.name();

        if let Some(binder) = self
            .binding_stack
            .iter()
            .find(|binder| binder.name == name.name)
        {
            let binder_span = binder.span;
            return self.fail(
                DiagnosticKind::SelfReference,
                name.span,
                &name.name,
                Some(("bound here", binder_span)),
            );
        }

        if !self.bound.contains_key(name.as_str()) {
            return self.fail(DiagnosticKind::UnboundReference, name.span, &name.name, None);
        }

        ControlFlow::Continue(())
    }

    fn bind(&mut self, name: &'a Ident) -> ControlFlow<()> {
        self.check_unbound(name)?;
        self.bound.insert(&name.name, name.span);
        ControlFlow::Continue(())
    }

    fn check_unbound(&mut self, name: &Ident) -> ControlFlow<()> {
        match self.bound.get(name.as_str()) {
            Some(&first) => self.fail(
                DiagnosticKind::DuplicateBinding,
                name.span,
                &name.name,
                Some(("first bound here", first)),
            ),
            None => ControlFlow::Continue(()),
        }
    }

    fn fail(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        detail: impl Into<String>,
        related: Option<(&str, TextRange)>,
    ) -> ControlFlow<()> {
        let mut builder = self.diagnostics.report(kind, range).message(detail);
        if let Some((msg, range)) = related {
            builder = builder.related_to(msg, range);
        }
        builder.emit();
        ControlFlow::Break(())
    }
}
