pub mod check;
pub mod fmt;
pub mod matching;
pub mod pattern_loader;

#[cfg(test)]
mod matching_tests;
