//! Malformed input: every parse terminates, keeps every byte, and reports
//! errors where they occur.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use common::kinds;
use pretty_assertions::assert_eq;
use sharp_ir::TokenKind;
use sharp_parse::{
    parse_compilation_unit, parse_expression, parse_statement, ParseErrorKind, ParseOptions,
};

const MALFORMED: &[&str] = &[
    "",
    ")",
    "((((",
    "))))",
    "a +",
    "x switch {",
    "x switch { 1 => , => 2 }",
    "x switch { case 1: a; }",
    "e is",
    "e is (",
    "e is { X: }",
    "e is [1, .. ..]",
    "e is not and or",
    "(int a, ) => x",
    "new",
    "new int[",
    "F(out var)",
    "switch (x) { case",
    "switch { default: }",
    "if (a",
    "while",
    "{ { { }",
    "a ? b",
    "a ?? throw",
    "(A<B)c",
    "@",
    "\"unterminated",
    "var (a, b =",
    "x switch { _ when => 1 }",
    "} ] ) ; ,",
];

#[test]
fn malformed_inputs_round_trip() {
    common::init_tracing();
    let options = ParseOptions::default();
    for source in MALFORMED {
        for output in [
            parse_expression(source, &options),
            parse_statement(source, &options),
            parse_compilation_unit(source, &options),
        ] {
            assert_eq!(output.reconstruct(), *source, "lost text for {source:?}");
            assert_eq!(output.eof.kind, TokenKind::Eof);
        }
    }
}

#[test]
fn malformed_inputs_report_errors() {
    common::init_tracing();
    let options = ParseOptions::default();
    for source in MALFORMED.iter().filter(|s| !s.is_empty()) {
        let output = parse_compilation_unit(source, &options);
        assert!(output.has_errors(), "no error for {source:?}");
    }
}

#[test]
fn diagnostics_point_into_source() {
    let options = ParseOptions::default();
    for source in MALFORMED {
        let output = parse_compilation_unit(source, &options);
        for diagnostic in &output.diagnostics {
            assert!(
                diagnostic.span.end as usize <= source.len(),
                "{source:?}: {diagnostic:?}"
            );
        }
    }
}

#[test]
fn statement_after_error_is_still_parsed() {
    let output = parse_compilation_unit("a = ; b = 1;", &ParseOptions::default());
    assert_eq!(kinds(&output), vec![ParseErrorKind::ExpressionExpected]);
    let sharp_parse::Root::CompilationUnit(unit) = &output.root else {
        panic!("expected a compilation unit");
    };
    assert_eq!(unit.stmts.len(), 2);
}

#[test]
fn deep_parentheses_report_once() {
    common::init_tracing();
    let source = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
    let output = parse_expression(&source, &ParseOptions::default());
    assert_eq!(kinds(&output), vec![ParseErrorKind::NestingTooDeep]);
    assert_eq!(output.reconstruct(), source);
}

#[test]
fn deep_list_patterns_report_once() {
    let source = format!("e is {}{}", "[".repeat(10_000), "]".repeat(10_000));
    let output = parse_expression(&source, &ParseOptions::default());
    assert_eq!(kinds(&output), vec![ParseErrorKind::NestingTooDeep]);
    assert_eq!(output.reconstruct(), source);
}

#[test]
fn unclosed_nesting_terminates() {
    for open in ["(", "{"] {
        let source = open.repeat(10_000);
        let output = parse_compilation_unit(&source, &ParseOptions::default());
        let too_deep = output
            .diagnostics
            .iter()
            .filter(|d| d.kind == ParseErrorKind::NestingTooDeep)
            .count();
        assert_eq!(too_deep, 1, "{open}");
        assert_eq!(output.reconstruct(), source);
    }
}
