//! Statement nodes.

use super::{ExprId, PatId, SeparatedList, StmtId, TyId, WhenClause};
use crate::{Span, Token};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub open: Token,
    pub stmts: Vec<StmtId>,
    pub close: Token,
}

/// `= value`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EqualsValue {
    pub eq: Token,
    pub value: ExprId,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VariableDeclarator {
    pub name: Token,
    pub initializer: Option<EqualsValue>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElseClause {
    pub else_kw: Token,
    pub body: StmtId,
}

/// One label of a switch section. Each ends with `:`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SwitchLabel {
    /// `case constant:`
    Case {
        case_kw: Token,
        value: ExprId,
        colon: Token,
    },
    /// `case pattern when cond:`
    CasePattern {
        case_kw: Token,
        pattern: PatId,
        when_clause: Option<WhenClause>,
        colon: Token,
    },
    Default {
        default_kw: Token,
        colon: Token,
    },
}

impl SwitchLabel {
    pub fn keyword(&self) -> Token {
        match self {
            SwitchLabel::Case { case_kw, .. } | SwitchLabel::CasePattern { case_kw, .. } => {
                *case_kw
            }
            SwitchLabel::Default { default_kw, .. } => *default_kw,
        }
    }
}

/// Labels followed by the statements they guard.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchSection {
    pub labels: Vec<SwitchLabel>,
    pub stmts: Vec<StmtId>,
}

/// `switch (expr) { sections }`
///
/// A parenthesized governing expression is unwrapped into `open_paren` and
/// `close_paren`; a tuple governing expression keeps its own parentheses and
/// leaves both `None`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchStatement {
    pub switch_kw: Token,
    pub open_paren: Option<Token>,
    pub governing: ExprId,
    pub close_paren: Option<Token>,
    pub open_brace: Token,
    pub sections: Vec<SwitchSection>,
    pub close_brace: Token,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Block(Block),
    Expression {
        expr: ExprId,
        semicolon: Token,
    },
    LocalDeclaration {
        ty: TyId,
        declarators: SeparatedList<VariableDeclarator>,
        semicolon: Token,
    },
    Switch(SwitchStatement),
    If {
        if_kw: Token,
        open: Token,
        condition: ExprId,
        close: Token,
        then_branch: StmtId,
        else_clause: Option<ElseClause>,
    },
    While {
        while_kw: Token,
        open: Token,
        condition: ExprId,
        close: Token,
        body: StmtId,
    },
    Return {
        return_kw: Token,
        expr: Option<ExprId>,
        semicolon: Token,
    },
    Throw {
        throw_kw: Token,
        expr: Option<ExprId>,
        semicolon: Token,
    },
    Break {
        break_kw: Token,
        semicolon: Token,
    },
    Continue {
        continue_kw: Token,
        semicolon: Token,
    },
    Empty {
        semicolon: Token,
    },
}
