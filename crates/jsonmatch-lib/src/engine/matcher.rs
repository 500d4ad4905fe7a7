//! Matching a validated pattern against one JSON document.
//!
//! The document is split lazily: each object or array boundary is decoded once
//! into raw member texts, scalars are compared on their raw text, and only
//! captures and back-references decode into [`Value`]s.

use std::collections::HashMap;

use jsonmatch_core::{Bindings, structural_eq};
use serde::Deserialize;
use serde_json::Value;
use serde_json::value::RawValue;

use super::error::{MatchError, MatchErrorKind, PathSegment, excerpt};
use super::literal;
use crate::parser::ast::{BoundLiteral, Element, Expr, ExprKind, Field, Ident, Reference};

/// Matches `document` against `pattern`, returning every capture on success.
///
/// The pattern must have passed validation; the matcher re-checks binding
/// uniqueness but trusts that references follow their bindings.
pub fn interpret(pattern: &Expr, document: &str) -> Result<Bindings, MatchError> {
    let raw: &RawValue = serde_json::from_str(document).map_err(|err| {
        MatchError::new(Vec::new(), MatchErrorKind::InvalidDocument(err.to_string()))
    })?;

    let mut matcher = Matcher::default();
    matcher.match_value(pattern, raw)?;
    Ok(matcher.bindings)
}

/// State of one match attempt.
///
/// `bindings` is the environment every node sees: captures from the caller's
/// side of the tree and from earlier siblings, nothing from later ones.
#[derive(Debug, Default)]
struct Matcher {
    path: Vec<PathSegment>,
    bindings: Bindings,
}

impl Matcher {
    fn match_value(&mut self, expr: &Expr, raw: &RawValue) -> Result<(), MatchError> {
        let text = raw.get();
        match &expr.kind {
            ExprKind::Null => literal::match_null(text).map_err(|kind| self.fail(kind)),
            ExprKind::Boolean(b) => literal::match_boolean(*b, text).map_err(|kind| self.fail(kind)),
            ExprKind::Number(n) => literal::match_number(*n, text).map_err(|kind| self.fail(kind)),
            ExprKind::String(s) => literal::match_string(s, text).map_err(|kind| self.fail(kind)),
            ExprKind::Binding(name) => {
                let value = self.decode(raw)?;
                self.bind(name, value)
            }
            ExprKind::Reference(reference) => self.match_reference(reference, raw),
            ExprKind::BoundLiteral(bound) => self.match_bound_literal(bound, raw),
            ExprKind::Object(fields) => self.match_object(fields, raw),
            ExprKind::Array(elements) => self.match_array(elements, raw),
        }
    }

    fn match_object(&mut self, fields: &[Field], raw: &RawValue) -> Result<(), MatchError> {
        let text = raw.get();
        if !text.starts_with('{') {
            return Err(self.fail(MatchErrorKind::NotAnObject {
                found: excerpt(text),
            }));
        }
        let members: HashMap<String, &RawValue> = serde_json::from_str(text)
            .map_err(|err| self.fail(MatchErrorKind::InvalidDocument(err.to_string())))?;

        for field in fields {
            let Some(&member) = members.get(&field.key) else {
                if field.optional {
                    continue;
                }
                return Err(self.fail(MatchErrorKind::MissingField {
                    key: field.key.clone(),
                }));
            };

            self.path.push(PathSegment::Key(field.key.clone()));
            self.match_value(&field.value, member)?;
            self.path.pop();
        }
        Ok(())
    }

    fn match_array(&mut self, elements: &[Element], raw: &RawValue) -> Result<(), MatchError> {
        let text = raw.get();
        if !text.starts_with('[') {
            return Err(self.fail(MatchErrorKind::NotAnArray {
                found: excerpt(text),
            }));
        }
        let items: Vec<&RawValue> = serde_json::from_str(text)
            .map_err(|err| self.fail(MatchErrorKind::InvalidDocument(err.to_string())))?;

        // Declaration order, not index order, decides which bindings a later element sees.
        for element in elements {
            let Some(&item) = items.get(element.index) else {
                if element.optional {
                    continue;
                }
                return Err(self.fail(MatchErrorKind::IndexOutOfRange {
                    index: element.index,
                    len: items.len(),
                }));
            };

            self.path.push(PathSegment::Index(element.index));
            self.match_value(&element.value, item)?;
            self.path.pop();
        }
        Ok(())
    }

    fn match_reference(&mut self, reference: &Reference, raw: &RawValue) -> Result<(), MatchError> {
        let name = reference.name();
        let found = self.decode(raw)?;

        let Some(expected) = self.bindings.get(name.as_str()) else {
            return Err(self.fail(MatchErrorKind::UnavailableReference {
                name: name.name.clone(),
            }));
        };

        if !structural_eq(expected, &found) {
            return Err(self.fail(MatchErrorKind::ReferenceMismatch {
                name: name.name.clone(),
                expected: excerpt(&expected.to_string()),
                found: excerpt(raw.get()),
            }));
        }
        Ok(())
    }

    /// Constrain first, then capture: the sub-pattern never sees its own name.
    fn match_bound_literal(
        &mut self,
        bound: &BoundLiteral,
        raw: &RawValue,
    ) -> Result<(), MatchError> {
        self.match_value(&bound.value, raw)?;
        let value = self.decode(raw)?;
        self.bind(&bound.name, value)
    }

    fn bind(&mut self, name: &Ident, value: Value) -> Result<(), MatchError> {
        self.bindings
            .try_insert(name.as_str(), value)
            .map_err(|dup| self.fail(MatchErrorKind::DuplicateBinding { name: dup.0 }))
    }

    /// Any nesting the splitter accepted must decode too, so serde_json's
    /// depth limit is lifted and the stack grows on demand instead.
    fn decode(&self, raw: &RawValue) -> Result<Value, MatchError> {
        let mut deserializer = serde_json::Deserializer::from_str(raw.get());
        deserializer.disable_recursion_limit();
        let deserializer = serde_stacker::Deserializer::new(&mut deserializer);
        Value::deserialize(deserializer)
            .map_err(|err| self.fail(MatchErrorKind::InvalidDocument(err.to_string())))
    }

    fn fail(&self, kind: MatchErrorKind) -> MatchError {
        MatchError::new(self.path.clone(), kind)
    }
}
