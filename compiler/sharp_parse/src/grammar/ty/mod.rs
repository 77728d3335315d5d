//! Type Parsing
//!
//! Types appear in declarations, casts, `typeof` and type arguments, and in
//! expression positions that double as types: after `is`, `as` and `out`,
//! inside patterns, and as elements of a parenthesized expression that may
//! be a tuple of declarations. [`TypeMode`] tells the suffix loop and the
//! generic-name check which position it is in.

mod scan;

pub(crate) use scan::ScanTypeFlags;

use sharp_ir::ast::{
    RankSpecifier, SeparatedList, SimpleName, TupleElement, Ty, TyKind, TypeArgumentList,
};
use sharp_ir::{ExprId, TokenKind, TyId};

use crate::error::ErrorContext;
use crate::recovery::EXPR_START;
use crate::{ParseErrorKind, Parser};

/// Where a type is being parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TypeMode {
    /// Declarations, casts, `typeof`, type arguments.
    Normal,
    /// Right after `is`.
    AfterIs,
    /// Inside a pattern.
    DefinitePattern,
    /// After `out` in an argument list.
    AfterOut,
    /// Right after `as`.
    AsExpression,
    /// After `new`; rank specifiers may carry sizes.
    NewExpression,
    /// First element of a parenthesized expression that may be a tuple.
    FirstElementOfPossibleTupleLiteral,
    /// A later element of a tuple literal.
    AfterTupleComma,
}

impl TypeMode {
    /// `?` and `*` after the type may belong to the surrounding expression.
    fn is_expression_tail(self) -> bool {
        matches!(
            self,
            TypeMode::AfterIs | TypeMode::DefinitePattern | TypeMode::AsExpression
        )
    }

    pub(crate) fn name_mode(self) -> NameMode {
        match self {
            TypeMode::Normal | TypeMode::AsExpression | TypeMode::NewExpression => NameMode::Type,
            TypeMode::AfterIs | TypeMode::DefinitePattern | TypeMode::AfterOut => {
                NameMode::Pattern
            }
            TypeMode::FirstElementOfPossibleTupleLiteral => NameMode::TupleFirst,
            TypeMode::AfterTupleComma => NameMode::TupleLater,
        }
    }
}

/// How `name <` decides between type arguments and a less-than operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum NameMode {
    /// `<` always opens type arguments.
    Type,
    /// Commit only when the token after `>` is in `GENERIC_FOLLOW`.
    Expression,
    /// As `Expression`, and an identifier or `{` after `>` also commits.
    Pattern,
    /// As `Expression`, and `identifier ,` after `>` also commits.
    TupleFirst,
    /// As `Expression`, and `identifier ,` or `identifier )` also commits.
    TupleLater,
}

/// The last suffix taken, which limits the next one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Suffix {
    None,
    Nullable,
    Pointer,
    Array,
}

impl Parser<'_> {
    /// Parse a type. Never fails; a missing type is a missing identifier
    /// name with a `TypeExpected` diagnostic.
    pub(crate) fn parse_type(&mut self, mode: TypeMode) -> TyId {
        self.guarded(|p| p.parse_type_core(mode), Self::missing_type)
    }

    fn parse_type_core(&mut self, mode: TypeMode) -> TyId {
        let start = self.current_span().start;
        let mut ty = self.parse_underlying_type(mode);
        let mut last = Suffix::None;
        loop {
            match self.current_kind() {
                TokenKind::Question if self.question_is_nullable(last, mode) => {
                    let question = self.advance();
                    ty = self.alloc_ty(
                        TyKind::Nullable {
                            element: ty,
                            question,
                        },
                        start,
                    );
                    last = Suffix::Nullable;
                }
                TokenKind::Star if self.star_is_pointer(last, mode) => {
                    let star = self.advance();
                    ty = self.alloc_ty(TyKind::Pointer { element: ty, star }, start);
                    last = Suffix::Pointer;
                }
                TokenKind::LBracket if self.rank_follows(mode) => {
                    let mut ranks = Vec::new();
                    while self.check(TokenKind::LBracket) && self.rank_follows(mode) {
                        ranks.push(self.parse_rank_specifier());
                    }
                    ty = self.alloc_ty(TyKind::Array { element: ty, ranks }, start);
                    last = Suffix::Array;
                }
                _ => break,
            }
        }
        ty
    }

    fn parse_underlying_type(&mut self, mode: TypeMode) -> TyId {
        let kind = self.current_kind();
        if kind == TokenKind::Ident {
            return self.parse_qualified_type(mode);
        }
        if kind.is_predefined_type() {
            let start = self.current_span().start;
            let keyword = self.advance();
            return self.alloc_ty(TyKind::Predefined(keyword), start);
        }
        if kind == TokenKind::LParen {
            return self.parse_tuple_type();
        }
        let span = self.current_span();
        self.error(ParseErrorKind::TypeExpected, span);
        self.missing_type()
    }

    /// `A`, `A<B>`, `A.B<C>.D`, `A::B`
    fn parse_qualified_type(&mut self, mode: TypeMode) -> TyId {
        let start = self.current_span().start;
        let first = self.parse_simple_name(mode.name_mode());
        let mut ty = self.alloc_ty(TyKind::Name(first), start);
        while matches!(self.current_kind(), TokenKind::Dot | TokenKind::ColonColon)
            && self.peek_kind_at(1) == TokenKind::Ident
        {
            let dot = self.advance();
            let right = self.parse_simple_name(mode.name_mode());
            ty = self.alloc_ty(
                TyKind::Qualified {
                    left: ty,
                    dot,
                    right,
                },
                start,
            );
        }
        ty
    }

    /// `identifier` with optional type arguments, decided by `mode`.
    pub(crate) fn parse_simple_name(&mut self, mode: NameMode) -> SimpleName {
        let identifier = self.expect_ident();
        let type_args = if self.check(TokenKind::Lt) && self.type_arguments_commit(mode) {
            Some(self.parse_type_argument_list())
        } else {
            None
        };
        SimpleName {
            identifier,
            type_args,
        }
    }

    fn parse_type_argument_list(&mut self) -> TypeArgumentList {
        self.in_error_context(ErrorContext::TypeArguments, |p| {
            let open = p.advance();
            let mut args = SeparatedList::new();
            loop {
                args.push_item(p.parse_type(TypeMode::Normal));
                match p.eat(TokenKind::Comma) {
                    Some(comma) => args.push_separator(comma),
                    None => break,
                }
            }
            let close = p.expect(TokenKind::Gt);
            TypeArgumentList { open, args, close }
        })
    }

    /// `(T1 name, T2, ...)`
    fn parse_tuple_type(&mut self) -> TyId {
        let start = self.current_span().start;
        self.in_error_context(ErrorContext::TupleType, |p| {
            let open = p.advance();
            let mut elements = SeparatedList::new();
            loop {
                let ty = p.parse_type(TypeMode::Normal);
                let name = p.eat(TokenKind::Ident);
                elements.push_item(TupleElement { ty, name });
                match p.eat(TokenKind::Comma) {
                    Some(comma) => elements.push_separator(comma),
                    None => break,
                }
            }
            let close = p.expect(TokenKind::RParen);
            p.alloc_ty(
                TyKind::Tuple {
                    open,
                    elements,
                    close,
                },
                start,
            )
        })
    }

    /// `[ , , ]` or, after `new`, `[ size, size ]`.
    fn parse_rank_specifier(&mut self) -> RankSpecifier {
        let open = self.advance();
        let mut sizes = SeparatedList::new();
        loop {
            let size = if self.check(TokenKind::Comma)
                || self.check(TokenKind::RBracket)
                || !self.can_start_expression()
            {
                self.omitted_array_size()
            } else {
                self.parse_expression()
            };
            sizes.push_item(size);
            match self.eat(TokenKind::Comma) {
                Some(comma) => sizes.push_separator(comma),
                None => break,
            }
        }
        let close = self.expect(TokenKind::RBracket);
        RankSpecifier { open, sizes, close }
    }

    fn omitted_array_size(&mut self) -> ExprId {
        let start = self.current_span().start;
        self.arena.alloc_expr(sharp_ir::ast::Expr::new(
            sharp_ir::ast::ExprKind::OmittedArraySize,
            sharp_ir::Span::point(start),
        ))
    }

    /// Whether the `?` at the cursor makes the type nullable.
    pub(crate) fn question_is_nullable(&self, last: Suffix, mode: TypeMode) -> bool {
        if matches!(last, Suffix::Nullable | Suffix::Pointer) {
            return false;
        }
        if !mode.is_expression_tail() {
            return true;
        }
        if last == Suffix::Array {
            return false;
        }
        let next = self.peek_kind_at(1);
        next == TokenKind::LBracket || !EXPR_START.contains(&next)
    }

    /// Whether the run of `*` at the cursor is pointer syntax.
    pub(crate) fn star_is_pointer(&self, last: Suffix, mode: TypeMode) -> bool {
        if last == Suffix::Array {
            return false;
        }
        let mut n = 0;
        while self.peek_kind_at(n) == TokenKind::Star {
            n += 1;
        }
        let after = self.peek_kind_at(n);
        match mode {
            TypeMode::AfterIs | TypeMode::DefinitePattern => {
                after == TokenKind::Ident
                    || after == TokenKind::LBracket
                    || !EXPR_START.contains(&after)
            }
            TypeMode::AsExpression => !EXPR_START.contains(&after),
            TypeMode::FirstElementOfPossibleTupleLiteral | TypeMode::AfterTupleComma => {
                after == TokenKind::LBracket
            }
            TypeMode::Normal | TypeMode::AfterOut | TypeMode::NewExpression => true,
        }
    }

    /// `[` at the cursor opens a rank specifier.
    ///
    /// Only `new` takes sizes; elsewhere the brackets may hold commas only,
    /// so `a[0]` stays an element access.
    pub(crate) fn rank_follows(&self, mode: TypeMode) -> bool {
        if mode == TypeMode::NewExpression {
            return true;
        }
        let mut n = 1;
        while self.peek_kind_at(n) == TokenKind::Comma {
            n += 1;
        }
        self.peek_kind_at(n) == TokenKind::RBracket
    }

    pub(crate) fn alloc_ty(&mut self, kind: TyKind, start: u32) -> TyId {
        let span = self.span_from(start);
        self.arena.alloc_ty(Ty::new(kind, span))
    }

    /// Missing-identifier type placeholder. Consumes nothing.
    pub(crate) fn missing_type(&mut self) -> TyId {
        let identifier = self.cursor.missing(TokenKind::Ident);
        let span = sharp_ir::Span::point(identifier.span.start);
        self.arena
            .alloc_ty(Ty::new(TyKind::Name(SimpleName::plain(identifier)), span))
    }
}
