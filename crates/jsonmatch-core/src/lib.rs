#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Value model shared by the jsonmatch engine and its callers.
//!
//! - [`Bindings`]: the name → value environment produced by one match
//! - [`structural_eq`]: deep equality used to check back-references

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};


// ============================================================================
// Structural Equality
// ============================================================================

/// Deep equality over decoded JSON values.
///
/// Objects compare by key set and per-key value, ignoring key order.
/// Arrays compare element-wise and are order-sensitive.
/// Numbers compare by value, so `1` and `1.0` are equal.
pub fn structural_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_eq(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| structural_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| structural_eq(x, y)))
        }
        _ => false,
    }
}

fn numbers_eq(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

// ============================================================================
// Bindings
// ============================================================================

/// Attempt to capture a name that is already bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("binding `{0}` already exists and cannot be overwritten")]
pub struct DuplicateBinding(pub String);

/// Captured values of one successful match, keyed by binding name.
///
/// Names are unique. Iteration follows capture order, which makes output
/// deterministic, but equality between two `Bindings` ignores it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Bindings(IndexMap<String, Value>);

impl Bindings {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Captures `value` under `name`, refusing to overwrite an existing capture.
    pub fn try_insert(
        &mut self,
        name: impl Into<String>,
        value: Value,
    ) -> Result<(), DuplicateBinding> {
        let name = name.into();
        if self.0.contains_key(&name) {
            return Err(DuplicateBinding(name));
        }
        self.0.insert(name, value);
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Converts to a JSON object, e.g. for re-encoding by a caller.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl PartialEq for Bindings {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|w| structural_eq(v, w)))
    }
}
