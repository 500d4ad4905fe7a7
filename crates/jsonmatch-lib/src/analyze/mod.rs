//! Static analysis of parsed patterns.
//!
//! A single pass today: [`validate`] proves every reference is bound before
//! use and that no key, index or binding name collides.

pub mod validate;


pub use validate::{Validator, validate};
