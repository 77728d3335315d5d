//! Source-order traversal of the syntax tree.
//!
//! Every node's tokens and children are visited in the order they appear in
//! the source. Missing tokens are visited too (they are zero width), so a
//! visitor that concatenates `source[token.full_span]` rebuilds the input.
//!
//! Default `visit_*` methods call the matching `walk_*` function. Override a
//! `visit_*` method to observe a node, and call `walk_*` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountMissing(usize);
//!
//! impl<'ast> Visitor<'ast> for CountMissing {
//!     fn visit_token(&mut self, token: &'ast Token) {
//!         if token.is_missing() {
//!             self.0 += 1;
//!         }
//!     }
//! }
//! ```

use crate::ast::{
    Argument, ArgumentList, Designation, ExprId, ExprKind, InitializerExpr, LambdaBody,
    LambdaParams, ListElement, PatId, PatternKind, PositionalClause, PropertyClause,
    SeparatedList, SimpleName, StmtId, StmtKind, Subpattern, SubpatternName, SwitchArm,
    SwitchLabel, SwitchSection, SyntaxArena, TyId, TyKind, TypeArgumentList, WhenClause,
};
use crate::Token;

/// Source-order syntax visitor.
pub trait Visitor<'ast> {
    /// Called for every token, including missing ones.
    fn visit_token(&mut self, token: &'ast Token);

    fn visit_expr(&mut self, id: ExprId, arena: &'ast SyntaxArena) {
        walk_expr(self, id, arena);
    }

    fn visit_ty(&mut self, id: TyId, arena: &'ast SyntaxArena) {
        walk_ty(self, id, arena);
    }

    fn visit_pattern(&mut self, id: PatId, arena: &'ast SyntaxArena) {
        walk_pattern(self, id, arena);
    }

    fn visit_stmt(&mut self, id: StmtId, arena: &'ast SyntaxArena) {
        walk_stmt(self, id, arena);
    }

    fn visit_designation(&mut self, designation: &'ast Designation, arena: &'ast SyntaxArena) {
        walk_designation(self, designation, arena);
    }
}

fn walk_list<'ast, V, T>(
    visitor: &mut V,
    list: &'ast SeparatedList<T>,
    arena: &'ast SyntaxArena,
    mut item: impl FnMut(&mut V, &'ast T, &'ast SyntaxArena),
) where
    V: Visitor<'ast> + ?Sized,
{
    for element in list.elements() {
        match element {
            ListElement::Item(value) => item(visitor, value, arena),
            ListElement::Separator(token) => visitor.visit_token(token),
        }
    }
}

fn walk_simple_name<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    name: &'ast SimpleName,
    arena: &'ast SyntaxArena,
) {
    visitor.visit_token(&name.identifier);
    if let Some(args) = &name.type_args {
        walk_type_args(visitor, args, arena);
    }
}

fn walk_type_args<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    args: &'ast TypeArgumentList,
    arena: &'ast SyntaxArena,
) {
    visitor.visit_token(&args.open);
    walk_list(visitor, &args.args, arena, |v, ty, a| v.visit_ty(*ty, a));
    visitor.visit_token(&args.close);
}

fn walk_argument<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    arg: &'ast Argument,
    arena: &'ast SyntaxArena,
) {
    if let Some(nc) = &arg.name_colon {
        visitor.visit_token(&nc.name);
        visitor.visit_token(&nc.colon);
    }
    if let Some(kw) = &arg.ref_kind {
        visitor.visit_token(kw);
    }
    visitor.visit_expr(arg.expr, arena);
}

fn walk_argument_list<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    args: &'ast ArgumentList,
    arena: &'ast SyntaxArena,
) {
    visitor.visit_token(&args.open);
    walk_list(visitor, &args.args, arena, walk_argument);
    visitor.visit_token(&args.close);
}

fn walk_when_clause<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    clause: &'ast WhenClause,
    arena: &'ast SyntaxArena,
) {
    visitor.visit_token(&clause.when_kw);
    visitor.visit_expr(clause.condition, arena);
}

fn walk_switch_arm<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    arm: &'ast SwitchArm,
    arena: &'ast SyntaxArena,
) {
    visitor.visit_pattern(arm.pattern, arena);
    if let Some(clause) = &arm.when_clause {
        walk_when_clause(visitor, clause, arena);
    }
    visitor.visit_token(&arm.arrow);
    visitor.visit_expr(arm.expr, arena);
}

fn walk_initializer<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    init: &'ast InitializerExpr,
    arena: &'ast SyntaxArena,
) {
    visitor.visit_token(&init.open);
    walk_list(visitor, &init.elements, arena, |v, e, a| v.visit_expr(*e, a));
    visitor.visit_token(&init.close);
}

/// Walk an expression's tokens and children.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: ExprId,
    arena: &'ast SyntaxArena,
) {
    match &arena.expr(id).kind {
        ExprKind::Name(name) => walk_simple_name(visitor, name, arena),
        ExprKind::MemberAccess {
            receiver,
            operator,
            name,
        } => {
            visitor.visit_expr(*receiver, arena);
            visitor.visit_token(operator);
            walk_simple_name(visitor, name, arena);
        }
        ExprKind::Literal(tok)
        | ExprKind::This(tok)
        | ExprKind::Base(tok)
        | ExprKind::PredefinedType(tok) => visitor.visit_token(tok),
        ExprKind::Parenthesized { open, inner, close } => {
            visitor.visit_token(open);
            visitor.visit_expr(*inner, arena);
            visitor.visit_token(close);
        }
        ExprKind::Tuple {
            open,
            elements,
            close,
        } => {
            visitor.visit_token(open);
            walk_list(visitor, elements, arena, walk_argument);
            visitor.visit_token(close);
        }
        ExprKind::Cast {
            open,
            ty,
            close,
            operand,
        } => {
            visitor.visit_token(open);
            visitor.visit_ty(*ty, arena);
            visitor.visit_token(close);
            visitor.visit_expr(*operand, arena);
        }
        ExprKind::Prefix { op, operand } => {
            visitor.visit_token(op);
            visitor.visit_expr(*operand, arena);
        }
        ExprKind::Postfix { operand, op } => {
            visitor.visit_expr(*operand, arena);
            visitor.visit_token(op);
        }
        ExprKind::Binary { left, op, right } => {
            visitor.visit_expr(*left, arena);
            visitor.visit_token(op);
            visitor.visit_expr(*right, arena);
        }
        ExprKind::Assignment { target, op, value } => {
            visitor.visit_expr(*target, arena);
            visitor.visit_token(op);
            visitor.visit_expr(*value, arena);
        }
        ExprKind::Conditional {
            condition,
            question,
            when_true,
            colon,
            when_false,
        } => {
            visitor.visit_expr(*condition, arena);
            visitor.visit_token(question);
            visitor.visit_expr(*when_true, arena);
            visitor.visit_token(colon);
            visitor.visit_expr(*when_false, arena);
        }
        ExprKind::Range { start, op, end } => {
            if let Some(start) = start {
                visitor.visit_expr(*start, arena);
            }
            visitor.visit_token(op);
            if let Some(end) = end {
                visitor.visit_expr(*end, arena);
            }
        }
        ExprKind::IsType { operand, is_kw, ty } => {
            visitor.visit_expr(*operand, arena);
            visitor.visit_token(is_kw);
            visitor.visit_ty(*ty, arena);
        }
        ExprKind::IsPattern {
            operand,
            is_kw,
            pattern,
        } => {
            visitor.visit_expr(*operand, arena);
            visitor.visit_token(is_kw);
            visitor.visit_pattern(*pattern, arena);
        }
        ExprKind::As { operand, as_kw, ty } => {
            visitor.visit_expr(*operand, arena);
            visitor.visit_token(as_kw);
            visitor.visit_ty(*ty, arena);
        }
        ExprKind::Switch {
            governing,
            switch_kw,
            open,
            arms,
            close,
        } => {
            visitor.visit_expr(*governing, arena);
            visitor.visit_token(switch_kw);
            visitor.visit_token(open);
            walk_list(visitor, arms, arena, walk_switch_arm);
            visitor.visit_token(close);
        }
        ExprKind::Invocation { callee, args } => {
            visitor.visit_expr(*callee, arena);
            walk_argument_list(visitor, args, arena);
        }
        ExprKind::ElementAccess { receiver, args } => {
            visitor.visit_expr(*receiver, arena);
            walk_argument_list(visitor, args, arena);
        }
        ExprKind::Lambda {
            params,
            arrow,
            body,
        } => {
            match params {
                LambdaParams::Simple(tok) => visitor.visit_token(tok),
                LambdaParams::Parenthesized {
                    open,
                    params,
                    close,
                } => {
                    visitor.visit_token(open);
                    walk_list(visitor, params, arena, |v, param, a| {
                        if let Some(ty) = param.ty {
                            v.visit_ty(ty, a);
                        }
                        v.visit_token(&param.name);
                    });
                    visitor.visit_token(close);
                }
            }
            visitor.visit_token(arrow);
            match body {
                LambdaBody::Expr(expr) => visitor.visit_expr(*expr, arena),
                LambdaBody::Block(stmt) => visitor.visit_stmt(*stmt, arena),
            }
        }
        ExprKind::Throw { throw_kw, operand } => {
            visitor.visit_token(throw_kw);
            visitor.visit_expr(*operand, arena);
        }
        ExprKind::TypeOperator {
            keyword,
            open,
            ty,
            close,
        } => {
            visitor.visit_token(keyword);
            visitor.visit_token(open);
            visitor.visit_ty(*ty, arena);
            visitor.visit_token(close);
        }
        ExprKind::Checked {
            keyword,
            open,
            inner,
            close,
        } => {
            visitor.visit_token(keyword);
            visitor.visit_token(open);
            visitor.visit_expr(*inner, arena);
            visitor.visit_token(close);
        }
        ExprKind::ObjectCreation {
            new_kw,
            ty,
            args,
            initializer,
        } => {
            visitor.visit_token(new_kw);
            if let Some(ty) = ty {
                visitor.visit_ty(*ty, arena);
            }
            if let Some(args) = args {
                walk_argument_list(visitor, args, arena);
            }
            if let Some(init) = initializer {
                walk_initializer(visitor, init, arena);
            }
        }
        ExprKind::Declaration { ty, designation } => {
            visitor.visit_ty(*ty, arena);
            visitor.visit_designation(designation, arena);
        }
        ExprKind::OmittedArraySize => {}
    }
}

/// Walk a type's tokens and children.
pub fn walk_ty<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: TyId,
    arena: &'ast SyntaxArena,
) {
    match &arena.ty(id).kind {
        TyKind::Predefined(tok) => visitor.visit_token(tok),
        TyKind::Name(name) => walk_simple_name(visitor, name, arena),
        TyKind::Qualified { left, dot, right } => {
            visitor.visit_ty(*left, arena);
            visitor.visit_token(dot);
            walk_simple_name(visitor, right, arena);
        }
        TyKind::Array { element, ranks } => {
            visitor.visit_ty(*element, arena);
            for rank in ranks {
                visitor.visit_token(&rank.open);
                walk_list(visitor, &rank.sizes, arena, |v, e, a| v.visit_expr(*e, a));
                visitor.visit_token(&rank.close);
            }
        }
        TyKind::Nullable { element, question } => {
            visitor.visit_ty(*element, arena);
            visitor.visit_token(question);
        }
        TyKind::Pointer { element, star } => {
            visitor.visit_ty(*element, arena);
            visitor.visit_token(star);
        }
        TyKind::Tuple {
            open,
            elements,
            close,
        } => {
            visitor.visit_token(open);
            walk_list(visitor, elements, arena, |v, el, a| {
                v.visit_ty(el.ty, a);
                if let Some(name) = &el.name {
                    v.visit_token(name);
                }
            });
            visitor.visit_token(close);
        }
    }
}

fn walk_subpattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    sub: &'ast Subpattern,
    arena: &'ast SyntaxArena,
) {
    match &sub.prefix {
        Some(SubpatternName::Name(nc)) => {
            visitor.visit_token(&nc.name);
            visitor.visit_token(&nc.colon);
        }
        Some(SubpatternName::Expression { expr, colon }) => {
            visitor.visit_expr(*expr, arena);
            visitor.visit_token(colon);
        }
        None => {}
    }
    visitor.visit_pattern(sub.pattern, arena);
}

fn walk_positional<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    clause: &'ast PositionalClause,
    arena: &'ast SyntaxArena,
) {
    visitor.visit_token(&clause.open);
    walk_list(visitor, &clause.subpatterns, arena, walk_subpattern);
    visitor.visit_token(&clause.close);
}

fn walk_property<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    clause: &'ast PropertyClause,
    arena: &'ast SyntaxArena,
) {
    visitor.visit_token(&clause.open);
    walk_list(visitor, &clause.subpatterns, arena, walk_subpattern);
    visitor.visit_token(&clause.close);
}

/// Walk a pattern's tokens and children.
pub fn walk_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: PatId,
    arena: &'ast SyntaxArena,
) {
    match &arena.pattern(id).kind {
        PatternKind::Discard(tok) => visitor.visit_token(tok),
        PatternKind::Var {
            var_kw,
            designation,
        } => {
            visitor.visit_token(var_kw);
            visitor.visit_designation(designation, arena);
        }
        PatternKind::Declaration { ty, designation } => {
            visitor.visit_ty(*ty, arena);
            visitor.visit_designation(designation, arena);
        }
        PatternKind::Constant(expr) => visitor.visit_expr(*expr, arena),
        PatternKind::Recursive {
            ty,
            positional,
            property,
            designation,
        } => {
            if let Some(ty) = ty {
                visitor.visit_ty(*ty, arena);
            }
            if let Some(clause) = positional {
                walk_positional(visitor, clause, arena);
            }
            if let Some(clause) = property {
                walk_property(visitor, clause, arena);
            }
            if let Some(designation) = designation {
                visitor.visit_designation(designation, arena);
            }
        }
        PatternKind::Relational { op, operand } => {
            visitor.visit_token(op);
            visitor.visit_expr(*operand, arena);
        }
        PatternKind::Type(ty) => visitor.visit_ty(*ty, arena),
        PatternKind::And {
            left,
            and_kw: kw,
            right,
        }
        | PatternKind::Or {
            left,
            or_kw: kw,
            right,
        } => {
            visitor.visit_pattern(*left, arena);
            visitor.visit_token(kw);
            visitor.visit_pattern(*right, arena);
        }
        PatternKind::Not { not_kw, operand } => {
            visitor.visit_token(not_kw);
            visitor.visit_pattern(*operand, arena);
        }
        PatternKind::Parenthesized { open, inner, close } => {
            visitor.visit_token(open);
            visitor.visit_pattern(*inner, arena);
            visitor.visit_token(close);
        }
        PatternKind::List {
            open,
            patterns,
            close,
            designation,
        } => {
            visitor.visit_token(open);
            walk_list(visitor, patterns, arena, |v, p, a| v.visit_pattern(*p, a));
            visitor.visit_token(close);
            if let Some(designation) = designation {
                visitor.visit_designation(designation, arena);
            }
        }
        PatternKind::Slice { dot_dot, pattern } => {
            visitor.visit_token(dot_dot);
            if let Some(pattern) = pattern {
                visitor.visit_pattern(*pattern, arena);
            }
        }
    }
}

/// Walk a designation's tokens.
pub fn walk_designation<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    designation: &'ast Designation,
    arena: &'ast SyntaxArena,
) {
    match designation {
        Designation::Single(tok) | Designation::Discard(tok) => visitor.visit_token(tok),
        Designation::Parenthesized {
            open,
            designations,
            close,
        } => {
            visitor.visit_token(open);
            walk_list(visitor, designations, arena, |v, d, a| {
                v.visit_designation(d, a);
            });
            visitor.visit_token(close);
        }
    }
}

fn walk_switch_section<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    section: &'ast SwitchSection,
    arena: &'ast SyntaxArena,
) {
    for label in &section.labels {
        match label {
            SwitchLabel::Case {
                case_kw,
                value,
                colon,
            } => {
                visitor.visit_token(case_kw);
                visitor.visit_expr(*value, arena);
                visitor.visit_token(colon);
            }
            SwitchLabel::CasePattern {
                case_kw,
                pattern,
                when_clause,
                colon,
            } => {
                visitor.visit_token(case_kw);
                visitor.visit_pattern(*pattern, arena);
                if let Some(clause) = when_clause {
                    walk_when_clause(visitor, clause, arena);
                }
                visitor.visit_token(colon);
            }
            SwitchLabel::Default { default_kw, colon } => {
                visitor.visit_token(default_kw);
                visitor.visit_token(colon);
            }
        }
    }
    for stmt in &section.stmts {
        visitor.visit_stmt(*stmt, arena);
    }
}

/// Walk a statement's tokens and children.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: StmtId,
    arena: &'ast SyntaxArena,
) {
    match &arena.stmt(id).kind {
        StmtKind::Block(block) => {
            visitor.visit_token(&block.open);
            for stmt in &block.stmts {
                visitor.visit_stmt(*stmt, arena);
            }
            visitor.visit_token(&block.close);
        }
        StmtKind::Expression { expr, semicolon } => {
            visitor.visit_expr(*expr, arena);
            visitor.visit_token(semicolon);
        }
        StmtKind::LocalDeclaration {
            ty,
            declarators,
            semicolon,
        } => {
            visitor.visit_ty(*ty, arena);
            walk_list(visitor, declarators, arena, |v, decl, a| {
                v.visit_token(&decl.name);
                if let Some(init) = &decl.initializer {
                    v.visit_token(&init.eq);
                    v.visit_expr(init.value, a);
                }
            });
            visitor.visit_token(semicolon);
        }
        StmtKind::Switch(switch) => {
            visitor.visit_token(&switch.switch_kw);
            if let Some(open) = &switch.open_paren {
                visitor.visit_token(open);
            }
            visitor.visit_expr(switch.governing, arena);
            if let Some(close) = &switch.close_paren {
                visitor.visit_token(close);
            }
            visitor.visit_token(&switch.open_brace);
            for section in &switch.sections {
                walk_switch_section(visitor, section, arena);
            }
            visitor.visit_token(&switch.close_brace);
        }
        StmtKind::If {
            if_kw,
            open,
            condition,
            close,
            then_branch,
            else_clause,
        } => {
            visitor.visit_token(if_kw);
            visitor.visit_token(open);
            visitor.visit_expr(*condition, arena);
            visitor.visit_token(close);
            visitor.visit_stmt(*then_branch, arena);
            if let Some(clause) = else_clause {
                visitor.visit_token(&clause.else_kw);
                visitor.visit_stmt(clause.body, arena);
            }
        }
        StmtKind::While {
            while_kw,
            open,
            condition,
            close,
            body,
        } => {
            visitor.visit_token(while_kw);
            visitor.visit_token(open);
            visitor.visit_expr(*condition, arena);
            visitor.visit_token(close);
            visitor.visit_stmt(*body, arena);
        }
        StmtKind::Return {
            return_kw: kw,
            expr,
            semicolon,
        }
        | StmtKind::Throw {
            throw_kw: kw,
            expr,
            semicolon,
        } => {
            visitor.visit_token(kw);
            if let Some(expr) = expr {
                visitor.visit_expr(*expr, arena);
            }
            visitor.visit_token(semicolon);
        }
        StmtKind::Break {
            break_kw: kw,
            semicolon,
        }
        | StmtKind::Continue {
            continue_kw: kw,
            semicolon,
        } => {
            visitor.visit_token(kw);
            visitor.visit_token(semicolon);
        }
        StmtKind::Empty { semicolon } => visitor.visit_token(semicolon),
    }
}

/// Collects every token reachable from a node, in source order.
#[derive(Default, Debug)]
pub struct TokenCollector {
    pub tokens: Vec<Token>,
}

impl<'ast> Visitor<'ast> for TokenCollector {
    fn visit_token(&mut self, token: &'ast Token) {
        self.tokens.push(*token);
    }
}

#[cfg(test)]
mod tests;
