//! Inputs that read more than one way, checked through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

#[allow(dead_code)]
mod common;

use pretty_assertions::assert_eq;
use sharp_ir::ast::{ExprKind, PatternKind, StmtKind, TyKind};
use sharp_parse::{parse_expression, parse_statement, ParseOptions, ParseOutput};

fn clean(source: &str) -> ParseOutput {
    common::init_tracing();
    let output = parse_expression(source, &ParseOptions::default());
    assert!(
        output.diagnostics.is_empty(),
        "{source:?}: {:?}",
        output.diagnostics
    );
    assert_eq!(output.reconstruct(), source);
    output
}

fn root_kind(output: &ParseOutput) -> &ExprKind {
    &output.arena.expr(output.expr().unwrap()).kind
}

#[test]
fn cast_versus_parenthesized_expression() {
    let output = clean("(A)b");
    assert!(matches!(root_kind(&output), ExprKind::Cast { .. }));

    let output = clean("(a)-b");
    let ExprKind::Binary { left, .. } = root_kind(&output) else {
        panic!("expected subtraction");
    };
    assert!(matches!(
        output.arena.expr(*left).kind,
        ExprKind::Parenthesized { .. }
    ));

    // A predefined type is always a cast.
    let output = clean("(int)-1");
    assert!(matches!(root_kind(&output), ExprKind::Cast { .. }));
}

#[test]
fn generic_invocation_versus_comparisons() {
    let output = clean("F(a < b, c > (d))");
    let ExprKind::Invocation { args, .. } = root_kind(&output) else {
        panic!("expected invocation");
    };
    assert_eq!(args.args.len(), 1);

    let output = clean("F(a < b, c > d)");
    let ExprKind::Invocation { args, .. } = root_kind(&output) else {
        panic!("expected invocation");
    };
    assert_eq!(args.args.len(), 2);
}

#[test]
fn nullable_type_versus_conditional() {
    let output = clean("x is int ? 1 : 0");
    let ExprKind::Conditional { condition, .. } = root_kind(&output) else {
        panic!("expected conditional");
    };
    let ExprKind::IsType { ty, .. } = output.arena.expr(*condition).kind else {
        panic!("expected type test");
    };
    assert!(matches!(output.arena.ty(ty).kind, TyKind::Predefined(_)));

    let output = clean("x is int?");
    let ExprKind::IsType { ty, .. } = root_kind(&output) else {
        panic!("expected type test");
    };
    assert!(matches!(output.arena.ty(*ty).kind, TyKind::Nullable { .. }));
}

#[test]
fn type_test_versus_pattern() {
    let output = clean("e is A.B");
    assert!(matches!(root_kind(&output), ExprKind::IsType { .. }));

    let output = clean("e is A.B c");
    let ExprKind::IsPattern { pattern, .. } = root_kind(&output) else {
        panic!("expected pattern test");
    };
    assert!(matches!(
        output.arena.pattern(*pattern).kind,
        PatternKind::Declaration { .. }
    ));

    let output = clean("e is 1");
    assert!(matches!(root_kind(&output), ExprKind::IsPattern { .. }));
}

#[test]
fn when_is_keyword_only_in_switch() {
    let output = clean("x switch { int when when > 0 => 1 }");
    let ExprKind::Switch { arms, .. } = root_kind(&output) else {
        panic!("expected switch");
    };
    let arm = &arms.items[0];
    assert!(arm.when_clause.is_some());
    assert!(matches!(
        output.arena.pattern(arm.pattern).kind,
        PatternKind::Type(_)
    ));

    let output = clean("e is int when");
    let ExprKind::IsPattern { pattern, .. } = root_kind(&output) else {
        panic!("expected pattern test");
    };
    assert!(matches!(
        output.arena.pattern(*pattern).kind,
        PatternKind::Declaration { .. }
    ));
}

#[test]
fn local_declaration_versus_expression_statement() {
    common::init_tracing();
    let options = ParseOptions::default();

    let output = parse_statement("a * b;", &options);
    let stmt = output.arena.stmt(output.stmt().unwrap());
    assert!(matches!(stmt.kind, StmtKind::LocalDeclaration { .. }));

    let output = parse_statement("a * b + c;", &options);
    let stmt = output.arena.stmt(output.stmt().unwrap());
    assert!(matches!(stmt.kind, StmtKind::Expression { .. }));

    let output = parse_statement("List<int> xs;", &options);
    let stmt = output.arena.stmt(output.stmt().unwrap());
    assert!(matches!(stmt.kind, StmtKind::LocalDeclaration { .. }));
}

#[test]
fn shift_is_composed_only_from_adjacent_gt() {
    let output = clean("F<List<int>>(x)");
    let ExprKind::Invocation { args, .. } = root_kind(&output) else {
        panic!("expected generic invocation");
    };
    assert_eq!(args.args.len(), 1);

    let output = clean("a >> 2");
    let ExprKind::Binary { op, .. } = root_kind(&output) else {
        panic!("expected shift");
    };
    assert_eq!(op.text(&output.source), ">>");
}
