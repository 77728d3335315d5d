//! Switch expression and switch statement tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::tests::shape::{clean_expr, clean_stmt, expr, stmt};
use crate::{parse_expression, parse_statement, ParseErrorKind, ParseOptions};
use pretty_assertions::assert_eq;
use sharp_ir::ast::StmtKind;
use sharp_ir::TokenKind;

fn expr_errors(source: &str) -> Vec<ParseErrorKind> {
    let output = parse_expression(source, &ParseOptions::default());
    assert_eq!(output.reconstruct(), source);
    output.diagnostics.into_iter().map(|d| d.kind).collect()
}

fn stmt_errors(source: &str) -> Vec<ParseErrorKind> {
    let output = parse_statement(source, &ParseOptions::default());
    assert_eq!(output.reconstruct(), source);
    output.diagnostics.into_iter().map(|d| d.kind).collect()
}

fn missing(expected: TokenKind) -> ParseErrorKind {
    ParseErrorKind::MissingToken { expected }
}

// Switch expressions

#[test]
fn test_switch_expression_arms() {
    assert_eq!(
        clean_expr("x switch { 1 => a, _ => b }"),
        "(switch x [(const 1) => a] [_ => b])"
    );
    assert_eq!(clean_expr("x switch { _ => 1, }"), "(switch x [_ => 1])");
    assert_eq!(clean_expr("x switch { }"), "(switch x)");
    assert_eq!(
        clean_expr("x switch { > 0 and < 5 => 1, (1, 2) => 2 }"),
        "(switch x [(and (> 0) (< 5)) => 1] [(recursive ((const 1), (const 2))) => 2])"
    );
}

#[test]
fn test_switch_expression_when_clause() {
    assert_eq!(
        clean_expr("x switch { int n when n > 0 => n, _ => 0 }"),
        "(switch x [(decl int n) when (> n 0) => n] [_ => 0])"
    );
    // The first `when` ends the pattern; the second is an identifier.
    assert_eq!(
        clean_expr("x switch { int when when > 0 => 1 }"),
        "(switch x [(type int) when (> when 0) => 1])"
    );
}

#[test]
fn test_switch_expression_binds_tighter_than_additive() {
    assert_eq!(
        clean_expr("x switch { _ => 1 } + 2"),
        "(+ (switch x [_ => 1]) 2)"
    );
    assert_eq!(
        clean_expr("a + x switch { _ => 1 }"),
        "(+ a (switch x [_ => 1]))"
    );
    assert_eq!(
        clean_expr("x switch { _ => y switch { _ => 1 } }"),
        "(switch x [_ => (switch y [_ => 1])])"
    );
}

#[test]
fn test_range_after_switch_is_a_warning() {
    assert_eq!(expr("x switch { _ => 1 } .. 2"), "(.. (switch x [_ => 1]) 2)");
    assert_eq!(
        expr_errors("x switch { _ => 1 } .. 2"),
        vec![ParseErrorKind::PrecedenceWarning {
            operator: TokenKind::DotDot
        }]
    );
}

#[test]
fn test_switch_without_brace_ends_expression() {
    assert_eq!(expr("x switch"), "x");
    assert_eq!(
        expr_errors("x switch"),
        vec![ParseErrorKind::UnexpectedToken {
            found: TokenKind::Switch
        }]
    );
}

#[test]
fn test_arm_separator_recovery() {
    assert_eq!(
        expr("x switch { 1 => a 2 => b }"),
        "(switch x [(const 1) => a] [(const 2) => b])"
    );
    assert_eq!(
        expr_errors("x switch { 1 => a 2 => b }"),
        vec![missing(TokenKind::Comma)]
    );

    assert_eq!(
        expr("x switch { 1 => a; 2 => b }"),
        "(switch x [(const 1) => a] [(const 2) => b])"
    );
    assert_eq!(
        expr_errors("x switch { 1 => a; 2 => b }"),
        vec![missing(TokenKind::Comma)]
    );
}

#[test]
fn test_colon_in_place_of_arrow() {
    assert_eq!(expr("x switch { 1 : a }"), "(switch x [(const 1) => a])");
    assert_eq!(
        expr_errors("x switch { 1 : a }"),
        vec![missing(TokenKind::FatArrow)]
    );
}

#[test]
fn test_case_keyword_in_arm() {
    assert_eq!(expr("x switch { case 1 => a }"), "(switch x [(const 1) => a])");
    assert_eq!(
        expr_errors("x switch { case 1 => a }"),
        vec![ParseErrorKind::BadCaseInSwitchArm]
    );
}

#[test]
fn test_arm_without_pattern() {
    assert_eq!(expr("x switch { => 1 }"), "(switch x [(const ?) => 1])");
    assert_eq!(expr_errors("x switch { => 1 }"), vec![ParseErrorKind::MissingPattern]);
}

#[test]
fn test_unclosed_switch_expression() {
    assert_eq!(expr("x switch { _ => 1"), "(switch x [_ => 1])");
    assert_eq!(
        expr_errors("x switch { _ => 1"),
        vec![missing(TokenKind::RBrace)]
    );
}

// Switch statements

#[test]
fn test_switch_statement_sections() {
    assert_eq!(
        clean_stmt("switch (x) { case 1: break; default: return; }"),
        "(switch-stmt x [case 1: break;] [default: (return -);])"
    );
    assert_eq!(
        clean_stmt("switch (x) { case 1: case 2: y(); break; }"),
        "(switch-stmt x [case 1: case 2: (call y); break;])"
    );
    assert_eq!(clean_stmt("switch (x) { }"), "(switch-stmt x)");
}

#[test]
fn test_case_constants_and_patterns() {
    assert_eq!(
        clean_stmt("switch (o) { case int n when n > 0: break; case string: break; }"),
        "(switch-stmt o [case-pattern (decl int n) when (> n 0): break;] [case string: break;])"
    );
    assert_eq!(
        clean_stmt("switch (c) { case Color.Red: break; }"),
        "(switch-stmt c [case (. Color Red): break;])"
    );
    assert_eq!(
        clean_stmt("switch (n) { case > 0 and < 10: break; }"),
        "(switch-stmt n [case-pattern (and (> 0) (< 10)): break;])"
    );
}

#[test]
fn test_case_with_when_is_always_a_pattern() {
    assert_eq!(
        clean_stmt("switch (n) { case 1 when flag: break; }"),
        "(switch-stmt n [case-pattern (const 1) when flag: break;])"
    );
}

#[test]
fn test_default_expression_inside_section() {
    assert_eq!(
        clean_stmt("switch (x) { case 1: default(int); break; }"),
        "(switch-stmt x [case 1: (default int); break;])"
    );
}

#[test]
fn test_tuple_governing_expression() {
    let output = parse_statement(
        "switch (a, b) { case (1, 2): break; }",
        &ParseOptions::default(),
    );
    assert!(output.diagnostics.is_empty());
    let StmtKind::Switch(switch) = &output.arena.stmt(output.stmt().unwrap()).kind else {
        panic!("expected a switch statement");
    };
    // The tuple supplies the parentheses.
    assert!(switch.open_paren.is_none());
    assert!(switch.close_paren.is_none());
    assert_eq!(
        crate::tests::shape::render(&output),
        "(switch-stmt (tuple a, b) [case-pattern (recursive ((const 1), (const 2))): break;])"
    );
}

#[test]
fn test_governing_without_parentheses() {
    assert_eq!(
        stmt("switch x { default: break; }"),
        "(switch-stmt x [default: break;])"
    );
    assert_eq!(
        stmt_errors("switch x { default: break; }"),
        vec![missing(TokenKind::LParen), missing(TokenKind::RParen)]
    );

    assert_eq!(
        stmt("switch (a) + b { }"),
        "(switch-stmt (+ (paren a) b))"
    );
    assert_eq!(stmt_errors("switch (a) + b { }"), vec![missing(TokenKind::LParen)]);
}

#[test]
fn test_discard_case_is_an_error() {
    assert_eq!(
        stmt("switch (x) { case _: break; }"),
        "(switch-stmt x [case-pattern _: break;])"
    );
    assert_eq!(
        stmt_errors("switch (x) { case _: break; }"),
        vec![ParseErrorKind::DiscardPatternInSwitchStatement]
    );
}

#[test]
fn test_case_without_value() {
    assert_eq!(
        stmt("switch (x) { case : break; }"),
        "(switch-stmt x [case ?: break;])"
    );
    assert_eq!(
        stmt_errors("switch (x) { case : break; }"),
        vec![ParseErrorKind::ExpressionExpected]
    );
}

#[test]
fn test_statements_before_first_label_are_skipped() {
    assert_eq!(
        stmt("switch (x) { y; case 1: break; }"),
        "(switch-stmt x [case 1: break;])"
    );
    assert_eq!(
        stmt_errors("switch (x) { y; case 1: break; }"),
        vec![
            ParseErrorKind::UnexpectedToken {
                found: TokenKind::Ident
            },
            ParseErrorKind::UnexpectedToken {
                found: TokenKind::Semicolon
            },
        ]
    );
}
