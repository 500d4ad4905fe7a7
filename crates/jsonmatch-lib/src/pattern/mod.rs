//! The public face of the pattern language.
//!
//! A [`Pattern`] is parsed and validated in one step by [`PatternBuilder`];
//! nothing unvalidated ever escapes. Once built it is immutable, so one
//! pattern can serve any number of concurrent [`interpret`](Pattern::interpret)
//! calls.

mod printer;

#[cfg(test)]
mod pattern_tests;
#[cfg(test)]
mod printer_tests;

use std::fmt;

use jsonmatch_core::Bindings;

pub use printer::PatternPrinter;

use crate::analyze::validate;
use crate::engine::{self, MatchError};
use crate::parser::{Expr, Parser};
use crate::{Error, Result};

const DEFAULT_RECURSION_FUEL: u32 = 512;

/// A parsed and validated pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    source: String,
    root: Expr,
}

impl Pattern {
    /// Parses and validates `source` with default limits.
    pub fn parse(source: &str) -> Result<Self> {
        PatternBuilder::new(source).build()
    }

    /// The text this pattern was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Matches one JSON document, returning the captured bindings.
    ///
    /// Each call starts from empty bindings. On failure no partial bindings
    /// are returned.
    pub fn interpret(&self, document: &str) -> std::result::Result<Bindings, MatchError> {
        engine::interpret(&self.root, document)
    }

    /// Re-runs validation. Always succeeds for a pattern returned by [`parse`](Self::parse).
    pub fn validate(&self) -> Result<()> {
        validate(&self.root).map_err(Error::PatternValidateError)
    }

    /// Canonical multi-line rendering that parses back to an equivalent pattern.
    pub fn render(&self) -> String {
        PatternPrinter::new(&self.root).dump()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        PatternPrinter::new(&self.root).format(f)
    }
}

impl std::str::FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Configures limits before parsing a [`Pattern`].
#[derive(Debug, Clone)]
pub struct PatternBuilder<'s> {
    source: &'s str,
    recursion_fuel: Option<u32>,
}

impl<'s> PatternBuilder<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// Set nesting depth limit. None = infinite.
    ///
    /// Exceeding it makes [`build`](Self::build) return
    /// [`Error::RecursionLimitExceeded`].
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    pub fn build(self) -> Result<Pattern> {
        let root = Parser::new(self.source)
            .with_recursion_fuel(self.recursion_fuel)
            .parse()?;
        validate(&root).map_err(Error::PatternValidateError)?;

        Ok(Pattern {
            source: self.source.to_string(),
            root,
        })
    }
}
