use indoc::indoc;

use super::Pattern;

/// Renders, re-parses, and checks the second rendering is stable.
#[track_caller]
fn round_trip(src: &str) -> String {
    let rendered = Pattern::expect_render(src);
    let reparsed = Pattern::expect_render(&rendered);
    assert_eq!(rendered, reparsed, "rendering is not a fixed point");
    rendered
}

#[test]
fn scalars() {
    insta::assert_snapshot!(round_trip("null"), @"null");
    insta::assert_snapshot!(round_trip("true"), @"true");
    insta::assert_snapshot!(round_trip("false"), @"false");
    insta::assert_snapshot!(round_trip("42"), @"42");
    insta::assert_snapshot!(round_trip("-2.5"), @"-2.5");
    insta::assert_snapshot!(round_trip("1.0"), @"1");
    insta::assert_snapshot!(round_trip(r#""hello world""#), @r#""hello world""#);
}

#[test]
fn empty_containers() {
    insta::assert_snapshot!(round_trip("{}"), @"{}");
    insta::assert_snapshot!(round_trip("[]"), @"[]");
    insta::assert_snapshot!(round_trip(r#"{"a": {}, "b": []}"#), @r#"
    {
        "a": {},
        "b": []
    }
    "#);
}

#[test]
fn object_fields() {
    let src = r#"{"name": "tool", "version"?: <=v>, "stable": true}"#;

    insta::assert_snapshot!(round_trip(src), @r#"
    {
        "name": "tool",
        "version"?: <=v>,
        "stable": true
    }
    "#);
}

#[test]
fn array_elements_keep_declaration_order() {
    insta::assert_snapshot!(round_trip("[3: null, 0?: 1, 1: <=x>]"), @r"
    [
        3: null,
        0?: 1,
        1: <=x>
    ]
    ");
}

#[test]
fn nested_structures() {
    let src = indoc! {r#"
        {"items": [0: {"id": <=first>, "tags": [0: "a"]}], "owner": {"id": <first>}}
    "#};

    insta::assert_snapshot!(round_trip(src), @r#"
    {
        "items": [
            0: {
                "id": <=first>,
                "tags": [
                    0: "a"
                ]
            }
        ],
        "owner": {
            "id": <first>
        }
    }
    "#);
}

#[test]
fn bound_literal() {
    insta::assert_snapshot!(round_trip(r#"<=doc> {"kind": "user"}"#), @r#"
    <=doc> {
        "kind": "user"
    }
    "#);
    insta::assert_snapshot!(round_trip(r#"[0: <=x> 1, 1: <x>]"#), @r"
    [
        0: <=x> 1,
        1: <x>
    ]
    ");
}

#[test]
fn reference_chain() {
    let src = r#"{"a": <=user>, "b": <user.address?.city>, "c"?: <user?>}"#;

    insta::assert_snapshot!(round_trip(src), @r#"
    {
        "a": <=user>,
        "b": <user.address?.city>,
        "c"?: <user?>
    }
    "#);
}

#[test]
fn display_matches_render() {
    let pattern = Pattern::expect_valid(r#"{"a": [0: <=x>]}"#);

    assert_eq!(pattern.to_string(), pattern.render());
}

#[test]
fn rendered_pattern_matches_same_documents() {
    let src = r#"{"x": <=a>, "y"?: [1: <a>], "z": <=b> {"k": -0.5}}"#;
    let original = Pattern::expect_valid(src);
    let reparsed = Pattern::expect_valid(&original.render());

    let documents = [
        r#"{"x": 1, "y": [0, 1], "z": {"k": -0.5}}"#,
        r#"{"x": 1, "z": {"k": -0.5, "extra": true}}"#,
        r#"{"x": 1, "y": [1], "z": {"k": -0.5}}"#,
        r#"{"x": 1, "y": [0, 2], "z": {"k": -0.5}}"#,
        r#"{"x": "s", "z": {"k": 0.5}}"#,
        r#"[1, 2]"#,
    ];

    for document in documents {
        let a = original.interpret(document);
        let b = reparsed.interpret(document);
        assert_eq!(a.is_ok(), b.is_ok(), "diverged on {document}");
        if let (Ok(a), Ok(b)) = (a, b) {
            assert_eq!(a, b, "bindings diverged on {document}");
        }
    }
}
