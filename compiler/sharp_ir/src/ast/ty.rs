//! Type nodes.

use super::{ExprId, SeparatedList, SimpleName, TyId};
use crate::{Span, Token};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ty {
    pub kind: TyKind,
    pub span: Span,
}

impl Ty {
    pub fn new(kind: TyKind, span: Span) -> Self {
        Ty { kind, span }
    }
}

/// `[ , , ]` or `[ 10 ]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RankSpecifier {
    pub open: Token,
    /// Size expressions; `ExprKind::OmittedArraySize` when unsized.
    pub sizes: SeparatedList<ExprId>,
    pub close: Token,
}

/// `int x` inside a tuple type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TupleElement {
    pub ty: TyId,
    pub name: Option<Token>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TyKind {
    /// `int`, `string`, `object`, ...
    Predefined(Token),
    Name(SimpleName),
    /// `A.B`, `A::B`
    Qualified {
        left: TyId,
        dot: Token,
        right: SimpleName,
    },
    Array {
        element: TyId,
        ranks: Vec<RankSpecifier>,
    },
    Nullable {
        element: TyId,
        question: Token,
    },
    Pointer {
        element: TyId,
        star: Token,
    },
    Tuple {
        open: Token,
        elements: SeparatedList<TupleElement>,
        close: Token,
    },
}
