//! Compact s-expression rendering of parse trees for assertions.
//!
//! Operators and keywords print as their source text, missing tokens print
//! as `?`, absent optional operands print as `-`.

use sharp_ir::ast::{
    Argument, ArgumentList, Designation, ExprKind, LambdaBody, LambdaParams, PatternKind,
    SimpleName, StmtKind, Subpattern, SubpatternName, SwitchLabel, SyntaxArena, TyKind,
    WhenClause,
};
use sharp_ir::{ExprId, PatId, StmtId, Token, TyId};

use crate::{ParseOptions, ParseOutput, Root};

pub(crate) struct Shape<'a> {
    arena: &'a SyntaxArena,
    source: &'a str,
}

impl<'a> Shape<'a> {
    pub(crate) fn new(arena: &'a SyntaxArena, source: &'a str) -> Self {
        Shape { arena, source }
    }

    fn tok(&self, token: &Token) -> String {
        if token.is_missing() {
            "?".to_string()
        } else {
            token.text(self.source).to_string()
        }
    }

    fn name(&self, name: &SimpleName) -> String {
        let mut text = self.tok(&name.identifier);
        if let Some(args) = &name.type_args {
            let args: Vec<_> = args.args.iter().map(|ty| self.ty(*ty)).collect();
            text.push('<');
            text.push_str(&args.join(", "));
            text.push('>');
        }
        text
    }

    fn opt_expr(&self, expr: Option<ExprId>) -> String {
        expr.map_or_else(|| "-".to_string(), |e| self.expr(e))
    }

    fn argument(&self, arg: &Argument) -> String {
        let mut parts = Vec::new();
        if let Some(name_colon) = &arg.name_colon {
            parts.push(format!("{}:", self.tok(&name_colon.name)));
        }
        if let Some(ref_kind) = &arg.ref_kind {
            parts.push(self.tok(ref_kind));
        }
        parts.push(self.expr(arg.expr));
        parts.join(" ")
    }

    fn arguments(&self, args: &ArgumentList) -> Vec<String> {
        args.args.iter().map(|a| self.argument(a)).collect()
    }

    fn when(&self, clause: Option<&WhenClause>) -> String {
        clause.map_or_else(String::new, |w| format!(" when {}", self.expr(w.condition)))
    }

    pub(crate) fn expr(&self, id: ExprId) -> String {
        match &self.arena.expr(id).kind {
            ExprKind::Name(name) => self.name(name),
            ExprKind::MemberAccess {
                receiver,
                operator,
                name,
            } => format!(
                "({} {} {})",
                self.tok(operator),
                self.expr(*receiver),
                self.name(name)
            ),
            ExprKind::Literal(t)
            | ExprKind::This(t)
            | ExprKind::Base(t)
            | ExprKind::PredefinedType(t) => self.tok(t),
            ExprKind::Parenthesized { inner, .. } => format!("(paren {})", self.expr(*inner)),
            ExprKind::Tuple { elements, .. } => {
                let items: Vec<_> = elements.iter().map(|a| self.argument(a)).collect();
                format!("(tuple {})", items.join(", "))
            }
            ExprKind::Cast { ty, operand, .. } => {
                format!("(cast {} {})", self.ty(*ty), self.expr(*operand))
            }
            ExprKind::Prefix { op, operand } => {
                format!("({} {})", self.tok(op), self.expr(*operand))
            }
            ExprKind::Postfix { operand, op } => {
                format!("(post{} {})", self.tok(op), self.expr(*operand))
            }
            ExprKind::Binary { left, op, right }
            | ExprKind::Assignment {
                target: left,
                op,
                value: right,
            } => format!(
                "({} {} {})",
                self.tok(op),
                self.expr(*left),
                self.expr(*right)
            ),
            ExprKind::Conditional {
                condition,
                when_true,
                when_false,
                ..
            } => format!(
                "(? {} {} {})",
                self.expr(*condition),
                self.expr(*when_true),
                self.expr(*when_false)
            ),
            ExprKind::Range { start, end, .. } => {
                format!("(.. {} {})", self.opt_expr(*start), self.opt_expr(*end))
            }
            ExprKind::IsType { operand, ty, .. } => {
                format!("(is {} {})", self.expr(*operand), self.ty(*ty))
            }
            ExprKind::IsPattern {
                operand, pattern, ..
            } => format!(
                "(is-pattern {} {})",
                self.expr(*operand),
                self.pattern(*pattern)
            ),
            ExprKind::As { operand, ty, .. } => {
                format!("(as {} {})", self.expr(*operand), self.ty(*ty))
            }
            ExprKind::Switch {
                governing, arms, ..
            } => {
                let mut text = format!("(switch {}", self.expr(*governing));
                for arm in arms.iter() {
                    text.push_str(&format!(
                        " [{}{} => {}]",
                        self.pattern(arm.pattern),
                        self.when(arm.when_clause.as_ref()),
                        self.expr(arm.expr)
                    ));
                }
                text.push(')');
                text
            }
            ExprKind::Invocation { callee, args } => {
                let mut parts = vec![self.expr(*callee)];
                parts.extend(self.arguments(args));
                format!("(call {})", parts.join(" "))
            }
            ExprKind::ElementAccess { receiver, args } => {
                let mut parts = vec![self.expr(*receiver)];
                parts.extend(self.arguments(args));
                format!("(index {})", parts.join(" "))
            }
            ExprKind::Lambda { params, body, .. } => {
                let params = match params {
                    LambdaParams::Simple(name) => self.tok(name),
                    LambdaParams::Parenthesized { params, .. } => {
                        let params: Vec<_> = params
                            .iter()
                            .map(|p| match p.ty {
                                Some(ty) => format!("{} {}", self.ty(ty), self.tok(&p.name)),
                                None => self.tok(&p.name),
                            })
                            .collect();
                        format!("({})", params.join(", "))
                    }
                };
                let body = match body {
                    LambdaBody::Expr(e) => self.expr(*e),
                    LambdaBody::Block(s) => self.stmt(*s),
                };
                format!("(lambda {params} {body})")
            }
            ExprKind::Throw { operand, .. } => format!("(throw {})", self.expr(*operand)),
            ExprKind::TypeOperator { keyword, ty, .. } => {
                format!("({} {})", self.tok(keyword), self.ty(*ty))
            }
            ExprKind::Checked { keyword, inner, .. } => {
                format!("({} {})", self.tok(keyword), self.expr(*inner))
            }
            ExprKind::ObjectCreation {
                ty,
                args,
                initializer,
                ..
            } => {
                let mut text = String::from("(new");
                if let Some(ty) = ty {
                    text.push(' ');
                    text.push_str(&self.ty(*ty));
                }
                if let Some(args) = args {
                    text.push_str(&format!(" ({})", self.arguments(args).join(", ")));
                }
                if let Some(init) = initializer {
                    let items: Vec<_> = init.elements.iter().map(|e| self.expr(*e)).collect();
                    text.push_str(&format!(" {{{}}}", items.join(", ")));
                }
                text.push(')');
                text
            }
            ExprKind::Declaration { ty, designation } => {
                format!("(decl {} {})", self.ty(*ty), self.designation(designation))
            }
            ExprKind::OmittedArraySize => String::new(),
        }
    }

    pub(crate) fn ty(&self, id: TyId) -> String {
        match &self.arena.ty(id).kind {
            TyKind::Predefined(t) => self.tok(t),
            TyKind::Name(name) => self.name(name),
            TyKind::Qualified { left, dot, right } => {
                format!("{}{}{}", self.ty(*left), self.tok(dot), self.name(right))
            }
            TyKind::Array { element, ranks } => {
                let mut text = self.ty(*element);
                for rank in ranks {
                    let sizes: Vec<_> = rank.sizes.iter().map(|e| self.expr(*e)).collect();
                    text.push('[');
                    text.push_str(&sizes.join(","));
                    text.push(']');
                }
                text
            }
            TyKind::Nullable { element, .. } => format!("{}?", self.ty(*element)),
            TyKind::Pointer { element, .. } => format!("{}*", self.ty(*element)),
            TyKind::Tuple { elements, .. } => {
                let items: Vec<_> = elements
                    .iter()
                    .map(|e| match &e.name {
                        Some(name) => format!("{} {}", self.ty(e.ty), self.tok(name)),
                        None => self.ty(e.ty),
                    })
                    .collect();
                format!("({})", items.join(", "))
            }
        }
    }

    fn designation(&self, designation: &Designation) -> String {
        match designation {
            Designation::Single(t) | Designation::Discard(t) => self.tok(t),
            Designation::Parenthesized { designations, .. } => {
                let items: Vec<_> = designations.iter().map(|d| self.designation(d)).collect();
                format!("({})", items.join(", "))
            }
        }
    }

    fn subpattern(&self, sub: &Subpattern) -> String {
        let pattern = self.pattern(sub.pattern);
        match &sub.prefix {
            None => pattern,
            Some(SubpatternName::Name(nc)) => format!("{}: {}", self.tok(&nc.name), pattern),
            Some(SubpatternName::Expression { expr, .. }) => {
                format!("{}: {}", self.expr(*expr), pattern)
            }
        }
    }

    pub(crate) fn pattern(&self, id: PatId) -> String {
        match &self.arena.pattern(id).kind {
            PatternKind::Discard(_) => "_".to_string(),
            PatternKind::Var { designation, .. } => {
                format!("(var {})", self.designation(designation))
            }
            PatternKind::Declaration { ty, designation } => {
                format!("(decl {} {})", self.ty(*ty), self.designation(designation))
            }
            PatternKind::Constant(e) => format!("(const {})", self.expr(*e)),
            PatternKind::Recursive {
                ty,
                positional,
                property,
                designation,
            } => {
                let mut parts = vec!["recursive".to_string()];
                if let Some(ty) = ty {
                    parts.push(self.ty(*ty));
                }
                if let Some(clause) = positional {
                    let subs: Vec<_> = clause.subpatterns.iter().map(|s| self.subpattern(s)).collect();
                    parts.push(format!("({})", subs.join(", ")));
                }
                if let Some(clause) = property {
                    let subs: Vec<_> = clause.subpatterns.iter().map(|s| self.subpattern(s)).collect();
                    parts.push(format!("{{{}}}", subs.join(", ")));
                }
                if let Some(d) = designation {
                    parts.push(self.designation(d));
                }
                format!("({})", parts.join(" "))
            }
            PatternKind::Relational { op, operand } => {
                format!("({} {})", self.tok(op), self.expr(*operand))
            }
            PatternKind::Type(ty) => format!("(type {})", self.ty(*ty)),
            PatternKind::And { left, right, .. } => {
                format!("(and {} {})", self.pattern(*left), self.pattern(*right))
            }
            PatternKind::Or { left, right, .. } => {
                format!("(or {} {})", self.pattern(*left), self.pattern(*right))
            }
            PatternKind::Not { operand, .. } => format!("(not {})", self.pattern(*operand)),
            PatternKind::Parenthesized { inner, .. } => {
                format!("(paren-pattern {})", self.pattern(*inner))
            }
            PatternKind::List {
                patterns,
                designation,
                ..
            } => {
                let items: Vec<_> = patterns.iter().map(|p| self.pattern(*p)).collect();
                let mut text = format!("[{}]", items.join(", "));
                if let Some(d) = designation {
                    text.push(' ');
                    text.push_str(&self.designation(d));
                }
                text
            }
            PatternKind::Slice { pattern, .. } => match pattern {
                Some(p) => format!("(.. {})", self.pattern(*p)),
                None => "..".to_string(),
            },
        }
    }

    pub(crate) fn stmt(&self, id: StmtId) -> String {
        match &self.arena.stmt(id).kind {
            StmtKind::Block(block) => {
                let stmts: Vec<_> = block.stmts.iter().map(|s| self.stmt(*s)).collect();
                format!("{{{}}}", stmts.join(" "))
            }
            StmtKind::Expression { expr, .. } => format!("{};", self.expr(*expr)),
            StmtKind::LocalDeclaration {
                ty, declarators, ..
            } => {
                let items: Vec<_> = declarators
                    .iter()
                    .map(|d| match &d.initializer {
                        Some(init) => format!("{} = {}", self.tok(&d.name), self.expr(init.value)),
                        None => self.tok(&d.name),
                    })
                    .collect();
                format!("(local {} {});", self.ty(*ty), items.join(", "))
            }
            StmtKind::Switch(switch) => {
                let mut text = format!("(switch-stmt {}", self.expr(switch.governing));
                for section in &switch.sections {
                    text.push_str(" [");
                    let labels: Vec<_> = section.labels.iter().map(|l| self.label(l)).collect();
                    text.push_str(&labels.join(" "));
                    for stmt in &section.stmts {
                        text.push(' ');
                        text.push_str(&self.stmt(*stmt));
                    }
                    text.push(']');
                }
                text.push(')');
                text
            }
            StmtKind::If {
                condition,
                then_branch,
                else_clause,
                ..
            } => {
                let mut text = format!("(if {} {}", self.expr(*condition), self.stmt(*then_branch));
                if let Some(clause) = else_clause {
                    text.push_str(&format!(" else {}", self.stmt(clause.body)));
                }
                text.push(')');
                text
            }
            StmtKind::While {
                condition, body, ..
            } => format!("(while {} {})", self.expr(*condition), self.stmt(*body)),
            StmtKind::Return { expr, .. } => format!("(return {});", self.opt_expr(*expr)),
            StmtKind::Throw { expr, .. } => format!("(throw {});", self.opt_expr(*expr)),
            StmtKind::Break { .. } => "break;".to_string(),
            StmtKind::Continue { .. } => "continue;".to_string(),
            StmtKind::Empty { .. } => ";".to_string(),
        }
    }

    fn label(&self, label: &SwitchLabel) -> String {
        match label {
            SwitchLabel::Case { value, .. } => format!("case {}:", self.expr(*value)),
            SwitchLabel::CasePattern {
                pattern,
                when_clause,
                ..
            } => format!(
                "case-pattern {}{}:",
                self.pattern(*pattern),
                self.when(when_clause.as_ref())
            ),
            SwitchLabel::Default { .. } => "default:".to_string(),
        }
    }

    /// Render whatever the parse started from.
    pub(crate) fn root(&self, root: &Root) -> String {
        match root {
            Root::Expr(id) => self.expr(*id),
            Root::Stmt(id) => self.stmt(*id),
            Root::CompilationUnit(unit) => {
                let stmts: Vec<_> = unit.stmts.iter().map(|s| self.stmt(*s)).collect();
                stmts.join(" ")
            }
        }
    }
}

/// Render an output's root.
pub(crate) fn render(output: &ParseOutput) -> String {
    Shape::new(&output.arena, &output.source).root(&output.root)
}

/// Parse an expression on the latest version and render it.
pub(crate) fn expr(source: &str) -> String {
    render(&crate::parse_expression(source, &ParseOptions::default()))
}

/// Parse a statement on the latest version and render it.
pub(crate) fn stmt(source: &str) -> String {
    render(&crate::parse_statement(source, &ParseOptions::default()))
}

/// Parse an expression that must be free of diagnostics and must
/// reconstruct exactly, and render it.
pub(crate) fn clean_expr(source: &str) -> String {
    let output = crate::parse_expression(source, &ParseOptions::default());
    assert!(
        output.diagnostics.is_empty(),
        "unexpected diagnostics for {source:?}: {:?}",
        output.diagnostics
    );
    assert_eq!(output.reconstruct(), source);
    render(&output)
}

/// Statement counterpart of [`clean_expr`].
pub(crate) fn clean_stmt(source: &str) -> String {
    let output = crate::parse_statement(source, &ParseOptions::default());
    assert!(
        output.diagnostics.is_empty(),
        "unexpected diagnostics for {source:?}: {:?}",
        output.diagnostics
    );
    assert_eq!(output.reconstruct(), source);
    render(&output)
}
