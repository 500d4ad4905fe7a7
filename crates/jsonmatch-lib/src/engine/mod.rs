//! Pattern matching engine.

pub mod error;
mod literal;
pub mod matcher;


pub use error::{MatchError, MatchErrorKind, PathSegment};
pub use matcher::interpret;
