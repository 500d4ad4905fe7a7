use serde_json::json;

use super::{Pattern, PatternBuilder};
use crate::Error;

impl Pattern {
    #[track_caller]
    pub fn expect_valid(src: &str) -> Self {
        match Pattern::parse(src) {
            Ok(pattern) => pattern,
            Err(err) => panic!("Expected valid pattern, got error:\n{}", err),
        }
    }

    /// Diagnostics of a rejected pattern, one `error:` line each.
    #[track_caller]
    pub fn expect_invalid(src: &str) -> String {
        let err = match Pattern::parse(src) {
            Ok(pattern) => panic!("Expected invalid pattern, got:\n{}", pattern),
            Err(err) => err,
        };
        match err.diagnostics() {
            Some(diagnostics) => diagnostics.printer().render(),
            None => err.to_string(),
        }
    }

    #[track_caller]
    pub fn expect_render(src: &str) -> String {
        Self::expect_valid(src).render()
    }
}

#[test]
fn parse_returns_validated_pattern() {
    let pattern = Pattern::expect_valid(r#"{"a": <=x>, "b": <x>}"#);

    assert_eq!(pattern.source(), r#"{"a": <=x>, "b": <x>}"#);
    assert!(pattern.validate().is_ok());
}

#[test]
fn validation_is_idempotent() {
    let pattern = Pattern::expect_valid(r#"[0: <=x> {"id": <=y>}, 1: [0: <x>, 1: <y>]]"#);

    let first = pattern.validate();
    let second = pattern.validate();

    assert!(first.is_ok());
    assert!(second.is_ok());
}

#[test]
fn parse_and_validate_errors_stay_apart() {
    let parse = Pattern::parse(r#"{"a" 1}"#).unwrap_err();
    let validate = Pattern::parse(r#"{"a": <x>}"#).unwrap_err();

    assert!(matches!(parse, Error::PatternParseError(_)));
    assert!(matches!(validate, Error::PatternValidateError(_)));
}

#[test]
fn error_display_chains_diagnostics() {
    let err = Pattern::parse(r#"{"a": <x>}"#).unwrap_err();

    insta::assert_snapshot!(err, @"pattern validation failed: reference to `x` before it was bound at 7..8");
}

#[test]
fn from_str_parses() {
    let pattern: Pattern = "<=all>".parse().unwrap();

    let bindings = pattern.interpret("[1, 2]").unwrap();
    assert_eq!(bindings.get("all"), Some(&json!([1, 2])));
}

#[test]
fn crate_level_parse_is_shorthand() {
    let pattern = crate::parse(r#"{"k": <=v>}"#).unwrap();

    assert_eq!(pattern, Pattern::expect_valid(r#"{"k": <=v>}"#));
}

#[test]
fn recursion_fuel_bounds_nesting() {
    let src = format!("{}1{}", "[0: ".repeat(10), "]".repeat(10));

    let err = PatternBuilder::new(&src)
        .with_recursion_fuel(Some(5))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));

    let pattern = PatternBuilder::new(&src)
        .with_recursion_fuel(Some(11))
        .build()
        .unwrap();
    assert!(pattern.interpret("[[[[[[[[[[1]]]]]]]]]]").is_ok());
}

#[test]
fn default_recursion_fuel_rejects_deep_nesting() {
    let src = format!("{}null{}", "[0: ".repeat(600), "]".repeat(600));

    let err = Pattern::parse(&src).unwrap_err();

    assert!(matches!(err, Error::RecursionLimitExceeded));
    assert!(err.diagnostics().is_none());
}

#[test]
fn unlimited_recursion_fuel() {
    let src = format!("{}null{}", "{\"a\": ".repeat(100), "}".repeat(100));

    let pattern = PatternBuilder::new(&src)
        .with_recursion_fuel(None)
        .build()
        .unwrap();

    assert_eq!(pattern.source(), src);
}

#[test]
fn pattern_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Pattern>();

    let pattern = Pattern::expect_valid(r#"{"n": <=n>}"#);
    std::thread::scope(|s| {
        for n in 0..4 {
            let pattern = &pattern;
            s.spawn(move || {
                let bindings = pattern.interpret(&format!(r#"{{"n": {}}}"#, n)).unwrap();
                assert_eq!(bindings.get("n"), Some(&json!(n)));
            });
        }
    });
}

#[test]
fn each_interpret_starts_fresh() {
    let pattern = Pattern::expect_valid(r#"{"a": <=x>}"#);

    let first = pattern.interpret(r#"{"a": 1}"#).unwrap();
    let second = pattern.interpret(r#"{"a": 2}"#).unwrap();

    assert_eq!(first.get("x"), Some(&json!(1)));
    assert_eq!(second.get("x"), Some(&json!(2)));
    assert_eq!(second.len(), 1);
}
