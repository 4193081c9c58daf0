use minic::parser::accept_expression;
use minic::parser::lexer::{tokenize, tokenize_source};
use minic::parser::parse::MAX_NESTING;
use std::fs;
use std::path::Path;

#[test]
fn test_accepts_demo_expression() {
    let path = Path::new("demos/arith.mc");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let tokens = tokenize_source(&source);
    assert_eq!(tokens.len(), 15);
    assert!(accept_expression(&tokens).is_ok());
}

#[test]
fn test_accepts_unary_and_nesting() {
    for source in ["-1", "((2))", "1 / 2 * -(3 + 4)", "-(-(1))"] {
        let result = accept_expression(&tokenize(source));
        assert!(result.is_ok(), "{} rejected: {:?}", source, result);
    }
}

#[test]
fn test_rejects_at_first_bad_token() {
    let cases = [
        ("1 + * 2", 2, Some("*")),
        ("(1 + 2", 4, None),
        ("1 2", 1, Some("2")),
        ("", 0, None),
        ("x + 1", 0, Some("x")),
        ("1 < 2", 1, Some("<")),
        ("1 % 2", 1, Some("%")),
        ("--1", 1, Some("-")),
    ];

    for (source, position, found) in cases {
        let err = accept_expression(&tokenize(source)).unwrap_err();
        assert_eq!(err.position, position, "position for {:?}", source);
        assert_eq!(err.found.as_deref(), found, "found for {:?}", source);
    }
}

#[test]
fn test_deep_nesting_is_an_error_not_a_crash() {
    let levels = 200_000;
    let source = format!("{}1{}", "( ".repeat(levels), " )".repeat(levels));

    let err = accept_expression(&tokenize_source(&source)).unwrap_err();
    assert_eq!(err.message, "Expression nested too deeply");
    assert_eq!(err.position, MAX_NESTING);
}
