//! Expression nodes.

use super::{ExprId, PatId, SeparatedList, StmtId, TyId};
use crate::{Span, Token};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    /// Span of the first through last non-missing token.
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// A missing-identifier placeholder.
    pub fn is_missing_name(&self) -> bool {
        matches!(&self.kind, ExprKind::Name(name) if name.identifier.is_missing() && name.type_args.is_none())
    }
}

/// `identifier` or `identifier<type-args>`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SimpleName {
    pub identifier: Token,
    pub type_args: Option<TypeArgumentList>,
}

impl SimpleName {
    pub fn plain(identifier: Token) -> Self {
        SimpleName {
            identifier,
            type_args: None,
        }
    }
}

/// `< T, U >`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeArgumentList {
    pub open: Token,
    pub args: SeparatedList<TyId>,
    pub close: Token,
}

/// `name:` prefix of an argument or subpattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NameColon {
    pub name: Token,
    pub colon: Token,
}

/// Invocation or tuple argument: `name: ref expr`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Argument {
    pub name_colon: Option<NameColon>,
    /// `ref`, `out` or `in`.
    pub ref_kind: Option<Token>,
    pub expr: ExprId,
}

/// `( args )` or `[ args ]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArgumentList {
    pub open: Token,
    pub args: SeparatedList<Argument>,
    pub close: Token,
}

/// `when condition`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WhenClause {
    pub when_kw: Token,
    pub condition: ExprId,
}

/// `pattern when condition => expr`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchArm {
    pub pattern: PatId,
    pub when_clause: Option<WhenClause>,
    pub arrow: Token,
    pub expr: ExprId,
}

/// Lambda parameter: `name` or `Type name`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LambdaParam {
    pub ty: Option<TyId>,
    pub name: Token,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum LambdaParams {
    /// `x => ...`
    Simple(Token),
    /// `(x, int y) => ...`
    Parenthesized {
        open: Token,
        params: SeparatedList<LambdaParam>,
        close: Token,
    },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum LambdaBody {
    Expr(ExprId),
    /// Always a `StmtKind::Block`.
    Block(StmtId),
}

/// `{ e, e }` after `new T`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InitializerExpr {
    pub open: Token,
    pub elements: SeparatedList<ExprId>,
    pub close: Token,
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// `x`, `List<int>`; a missing identifier is the universal placeholder.
    Name(SimpleName),
    /// `a.b`, `a->b`, `a::b`
    MemberAccess {
        receiver: ExprId,
        operator: Token,
        name: SimpleName,
    },
    /// Numeric, string, char, `true`, `false`, `null`, `default`.
    Literal(Token),
    This(Token),
    Base(Token),
    /// `int` used as an expression (`int.MaxValue`).
    PredefinedType(Token),
    Parenthesized {
        open: Token,
        inner: ExprId,
        close: Token,
    },
    Tuple {
        open: Token,
        elements: SeparatedList<Argument>,
        close: Token,
    },
    Cast {
        open: Token,
        ty: TyId,
        close: Token,
        operand: ExprId,
    },
    Prefix {
        op: Token,
        operand: ExprId,
    },
    Postfix {
        operand: ExprId,
        op: Token,
    },
    Binary {
        left: ExprId,
        op: Token,
        right: ExprId,
    },
    Assignment {
        target: ExprId,
        op: Token,
        value: ExprId,
    },
    Conditional {
        condition: ExprId,
        question: Token,
        when_true: ExprId,
        colon: Token,
        when_false: ExprId,
    },
    /// `a..b`, `..b`, `a..`, `..`
    Range {
        start: Option<ExprId>,
        op: Token,
        end: Option<ExprId>,
    },
    /// `e is Type`
    IsType {
        operand: ExprId,
        is_kw: Token,
        ty: TyId,
    },
    /// `e is pattern`
    IsPattern {
        operand: ExprId,
        is_kw: Token,
        pattern: PatId,
    },
    As {
        operand: ExprId,
        as_kw: Token,
        ty: TyId,
    },
    /// `e switch { arms }`
    Switch {
        governing: ExprId,
        switch_kw: Token,
        open: Token,
        arms: SeparatedList<SwitchArm>,
        close: Token,
    },
    Invocation {
        callee: ExprId,
        args: ArgumentList,
    },
    ElementAccess {
        receiver: ExprId,
        args: ArgumentList,
    },
    Lambda {
        params: LambdaParams,
        arrow: Token,
        body: LambdaBody,
    },
    Throw {
        throw_kw: Token,
        operand: ExprId,
    },
    /// `typeof(T)`, `sizeof(T)`, `default(T)`
    TypeOperator {
        keyword: Token,
        open: Token,
        ty: TyId,
        close: Token,
    },
    /// `checked(e)`, `unchecked(e)`
    Checked {
        keyword: Token,
        open: Token,
        inner: ExprId,
        close: Token,
    },
    ObjectCreation {
        new_kw: Token,
        ty: Option<TyId>,
        args: Option<ArgumentList>,
        initializer: Option<InitializerExpr>,
    },
    /// `out var x`, `out int x`, `(var a, var b) = ...`
    Declaration {
        ty: TyId,
        designation: super::Designation,
    },
    /// Empty size slot in `new int[]`.
    OmittedArraySize,
}
