//! Flat syntax tree using arena allocation.
//!
//! Nodes refer to each other through typed `u32` ids into [`SyntaxArena`]
//! pools. Every node keeps the tokens it was built from, in source order,
//! so the tree is lossless: walking it with [`crate::visit`] reproduces the
//! token sequence of the input.
//!
//! # Module Structure
//!
//! - `expr`: expressions, argument lists, switch expression arms
//! - `ty`: types (names, generics, arrays, pointers, tuples)
//! - `pattern`: patterns, subpatterns, designations
//! - `stmt`: statements and switch statement sections

mod arena;
mod expr;
mod pattern;
mod stmt;
mod ty;

pub use arena::{ArenaMark, SyntaxArena};
pub use expr::{
    Argument, ArgumentList, Expr, ExprKind, InitializerExpr, LambdaBody, LambdaParam,
    LambdaParams, NameColon, SimpleName, SwitchArm, TypeArgumentList, WhenClause,
};
pub use pattern::{
    Designation, Pattern, PatternKind, PositionalClause, PropertyClause, Subpattern,
    SubpatternName,
};
pub use stmt::{
    Block, ElseClause, EqualsValue, Stmt, StmtKind, SwitchLabel, SwitchSection, SwitchStatement,
    VariableDeclarator,
};
pub use ty::{RankSpecifier, TupleElement, Ty, TyKind};

use crate::Token;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                $name(raw)
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

define_id!(
    /// Index of an expression in [`SyntaxArena`].
    ExprId
);
define_id!(
    /// Index of a type in [`SyntaxArena`].
    TyId
);
define_id!(
    /// Index of a pattern in [`SyntaxArena`].
    PatId
);
define_id!(
    /// Index of a statement in [`SyntaxArena`].
    StmtId
);

/// Items interleaved with separator tokens: `item (sep item)* sep?`.
///
/// Invariant: `separators.len()` is `items.len()` (trailing separator) or
/// `items.len() - 1`, or both are zero.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SeparatedList<T> {
    pub items: Vec<T>,
    pub separators: Vec<Token>,
}

impl<T> Default for SeparatedList<T> {
    fn default() -> Self {
        SeparatedList {
            items: Vec::new(),
            separators: Vec::new(),
        }
    }
}

impl<T> SeparatedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single item, no separators.
    pub fn single(item: T) -> Self {
        SeparatedList {
            items: vec![item],
            separators: Vec::new(),
        }
    }

    pub fn push_item(&mut self, item: T) {
        debug_assert_eq!(self.items.len(), self.separators.len());
        self.items.push(item);
    }

    pub fn push_separator(&mut self, separator: Token) {
        debug_assert_eq!(self.items.len(), self.separators.len() + 1);
        self.separators.push(separator);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Whether the last element is a separator.
    pub fn has_trailing_separator(&self) -> bool {
        !self.separators.is_empty() && self.separators.len() == self.items.len()
    }

    /// Items and separators in source order.
    pub fn elements(&self) -> impl Iterator<Item = ListElement<'_, T>> {
        self.items.iter().enumerate().flat_map(move |(i, item)| {
            std::iter::once(ListElement::Item(item))
                .chain(self.separators.get(i).map(ListElement::Separator))
        })
    }
}

/// One element of a [`SeparatedList`] in source order.
#[derive(Debug)]
pub enum ListElement<'a, T> {
    Item(&'a T),
    Separator(&'a Token),
}

/// Root of a parsed compilation unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CompilationUnit {
    pub stmts: Vec<StmtId>,
}
