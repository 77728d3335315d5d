//! Primary Expression Parsing
//!
//! Terms: names, literals, `this`/`base`, `typeof`/`sizeof`/`default`,
//! `checked`, object creation, and everything that starts with `(` (casts,
//! lambdas, tuples, parenthesized expressions).

use sharp_ir::ast::{
    Argument, ArgumentList, ExprKind, InitializerExpr, LambdaBody, LambdaParam, LambdaParams,
    NameColon, SeparatedList, TyKind,
};
use sharp_ir::{ExprId, TokenKind};

use super::Precedence;
use crate::error::ErrorContext;
use crate::grammar::{Trailing, TypeMode};
use crate::recovery::STRUCTURAL;
use crate::{Feature, ParseContext, ParseErrorKind, Parser};

impl Parser<'_> {
    /// A term and its postfix operators. Lambdas take no postfix.
    pub(crate) fn parse_term(&mut self, precedence: Precedence) -> ExprId {
        let start = self.current_span().start;
        let term = self.parse_term_without_postfix(precedence);
        if matches!(self.arena.expr(term).kind, ExprKind::Lambda { .. }) {
            return term;
        }
        self.parse_postfix(term, start)
    }

    fn parse_term_without_postfix(&mut self, precedence: Precedence) -> ExprId {
        let start = self.current_span().start;
        match self.current_kind() {
            TokenKind::TypeOf | TokenKind::SizeOf => self.parse_type_operator(),
            TokenKind::Default if self.peek_kind_at(1) == TokenKind::LParen => {
                self.parse_type_operator()
            }
            TokenKind::Default => {
                let keyword = self.advance();
                self.check_feature(Feature::DefaultLiteral, keyword.span);
                self.alloc_expr(ExprKind::Literal(keyword), start)
            }
            TokenKind::Checked | TokenKind::Unchecked => {
                let keyword = self.advance();
                let open = self.expect(TokenKind::LParen);
                let inner = self.parse_expression();
                let close = self.expect(TokenKind::RParen);
                self.alloc_expr(
                    ExprKind::Checked {
                        keyword,
                        open,
                        inner,
                        close,
                    },
                    start,
                )
            }
            TokenKind::Ident => {
                if precedence == Precedence::Expression
                    && self.peek_kind_at(1) == TokenKind::FatArrow
                {
                    return self.parse_simple_lambda();
                }
                let mode = self.expression_name_mode();
                let name = self.parse_simple_name(mode);
                self.alloc_expr(ExprKind::Name(name), start)
            }
            TokenKind::This => {
                let token = self.advance();
                self.alloc_expr(ExprKind::This(token), start)
            }
            TokenKind::Base => {
                let token = self.advance();
                self.alloc_expr(ExprKind::Base(token), start)
            }
            kind if kind.is_literal() => {
                let token = self.advance();
                self.alloc_expr(ExprKind::Literal(token), start)
            }
            TokenKind::LParen => self.parse_paren_term(precedence),
            TokenKind::New => self.parse_object_creation(),
            kind if kind.is_predefined_type() => {
                let keyword = self.advance();
                if !self.check(TokenKind::Dot) {
                    self.error(ParseErrorKind::ExpressionExpected, keyword.span);
                }
                self.alloc_expr(ExprKind::PredefinedType(keyword), start)
            }
            _ => {
                let span = self.current_span();
                self.error(ParseErrorKind::ExpressionExpected, span);
                self.missing_name_expr()
            }
        }
    }

    /// `typeof(T)`, `sizeof(T)`, `default(T)`
    fn parse_type_operator(&mut self) -> ExprId {
        let start = self.current_span().start;
        let keyword = self.advance();
        let open = self.expect(TokenKind::LParen);
        let ty = self.parse_type(TypeMode::Normal);
        let close = self.expect(TokenKind::RParen);
        self.alloc_expr(
            ExprKind::TypeOperator {
                keyword,
                open,
                ty,
                close,
            },
            start,
        )
    }

    fn parse_paren_term(&mut self, precedence: Precedence) -> ExprId {
        if self.look_ahead(|p| p.scan_cast(false)) {
            return self.parse_cast();
        }
        if precedence == Precedence::Expression && self.is_parenthesized_lambda() {
            return self.parse_parenthesized_lambda();
        }
        self.parse_paren_or_tuple()
    }

    /// `(T) operand`
    fn parse_cast(&mut self) -> ExprId {
        let start = self.current_span().start;
        let open = self.advance();
        let ty = self.parse_type(TypeMode::Normal);
        let close = self.expect(TokenKind::RParen);
        let operand = self.parse_sub_expression(Precedence::Cast);
        self.alloc_expr(
            ExprKind::Cast {
                open,
                ty,
                close,
                operand,
            },
            start,
        )
    }

    /// `(e)`, or a tuple `(a, b)` whose elements may be named or declared.
    fn parse_paren_or_tuple(&mut self) -> ExprId {
        let start = self.current_span().start;
        let open = self.advance();
        let first = self.parse_tuple_element(TypeMode::FirstElementOfPossibleTupleLiteral);

        if !self.check(TokenKind::Comma) && first.name_colon.is_none() {
            let close = self.expect(TokenKind::RParen);
            return self.alloc_expr(
                ExprKind::Parenthesized {
                    open,
                    inner: first.expr,
                    close,
                },
                start,
            );
        }

        self.in_error_context(ErrorContext::TupleExpression, |p| {
            let mut elements = SeparatedList::single(first);
            if let Some(comma) = p.eat(TokenKind::Comma) {
                elements.push_separator(comma);
                let rest = p.parse_separated(
                    TokenKind::RParen,
                    STRUCTURAL,
                    Trailing::Placeholder,
                    Self::can_start_argument,
                    |p| p.parse_tuple_element(TypeMode::AfterTupleComma),
                    Self::missing_argument,
                );
                if rest.is_empty() {
                    let missing = p.missing_argument();
                    elements.push_item(missing);
                } else {
                    elements.items.extend(rest.items);
                    elements.separators.extend(rest.separators);
                }
            } else {
                // `(name: e)` needs a second element.
                let span = p.current_span();
                p.error(
                    ParseErrorKind::MissingToken {
                        expected: TokenKind::Comma,
                    },
                    span,
                );
            }
            let close = p.expect(TokenKind::RParen);
            p.check_feature(Feature::Tuples, open.span);
            p.alloc_expr(
                ExprKind::Tuple {
                    open,
                    elements,
                    close,
                },
                start,
            )
        })
    }

    /// `name: e` or `e`, where `e` may be a declaration.
    fn parse_tuple_element(&mut self, mode: TypeMode) -> Argument {
        let name_colon = self.parse_name_colon();
        let expr = self.parse_expression_or_declaration(mode, true);
        Argument {
            name_colon,
            ref_kind: None,
            expr,
        }
    }

    /// `identifier :` at the cursor.
    pub(crate) fn parse_name_colon(&mut self) -> Option<NameColon> {
        if self.check(TokenKind::Ident) && self.peek_kind_at(1) == TokenKind::Colon {
            let name = self.advance();
            let colon = self.advance();
            Some(NameColon { name, colon })
        } else {
            None
        }
    }

    // Lambdas

    /// `x => body`
    fn parse_simple_lambda(&mut self) -> ExprId {
        let start = self.current_span().start;
        self.in_error_context(ErrorContext::Lambda, |p| {
            let name = p.advance();
            let arrow = p.advance();
            let body = p.parse_lambda_body();
            p.alloc_expr(
                ExprKind::Lambda {
                    params: LambdaParams::Simple(name),
                    arrow,
                    body,
                },
                start,
            )
        })
    }

    /// `(a, b) => body`, `(int a, T b) => body`, `() => body`
    fn parse_parenthesized_lambda(&mut self) -> ExprId {
        let start = self.current_span().start;
        self.in_error_context(ErrorContext::Lambda, |p| {
            let open = p.advance();
            let mut params = SeparatedList::new();
            if !p.check(TokenKind::RParen) {
                loop {
                    params.push_item(p.parse_lambda_param());
                    match p.eat(TokenKind::Comma) {
                        Some(comma) => params.push_separator(comma),
                        None => break,
                    }
                }
            }
            let close = p.expect(TokenKind::RParen);
            let arrow = p.expect(TokenKind::FatArrow);
            let body = p.parse_lambda_body();
            p.alloc_expr(
                ExprKind::Lambda {
                    params: LambdaParams::Parenthesized {
                        open,
                        params,
                        close,
                    },
                    arrow,
                    body,
                },
                start,
            )
        })
    }

    fn parse_lambda_param(&mut self) -> LambdaParam {
        if self.check(TokenKind::Ident)
            && matches!(
                self.peek_kind_at(1),
                TokenKind::Comma | TokenKind::RParen
            )
        {
            return LambdaParam {
                ty: None,
                name: self.advance(),
            };
        }
        let ty = self.parse_type(TypeMode::Normal);
        let name = self.expect_ident();
        LambdaParam { ty: Some(ty), name }
    }

    /// Lambda bodies start from a clean context: `when` and `and` are
    /// identifiers again.
    fn parse_lambda_body(&mut self) -> LambdaBody {
        self.with_context(ParseContext::new(), |p| {
            if p.check(TokenKind::LBrace) {
                LambdaBody::Block(p.parse_block_statement())
            } else {
                LambdaBody::Expr(p.parse_expression())
            }
        })
    }

    // Object creation

    /// `new T(args) { init }`, `new T[n]`, `new(args)`
    fn parse_object_creation(&mut self) -> ExprId {
        let start = self.current_span().start;
        self.in_error_context(ErrorContext::ObjectCreation, |p| {
            let new_kw = p.advance();
            let ty = if p.check(TokenKind::LParen) {
                None
            } else {
                Some(p.parse_type(TypeMode::NewExpression))
            };
            let mut args = if p.check(TokenKind::LParen) {
                Some(p.parse_argument_list())
            } else {
                None
            };
            let initializer = if p.check(TokenKind::LBrace) {
                Some(p.parse_initializer())
            } else {
                None
            };
            let is_array =
                ty.is_some_and(|ty| matches!(p.arena.ty(ty).kind, TyKind::Array { .. }));
            if args.is_none() && initializer.is_none() && !is_array {
                let span = p.current_span();
                p.error(
                    ParseErrorKind::MissingToken {
                        expected: TokenKind::LParen,
                    },
                    span,
                );
                args = Some(ArgumentList {
                    open: p.cursor.missing(TokenKind::LParen),
                    args: SeparatedList::new(),
                    close: p.cursor.missing(TokenKind::RParen),
                });
            }
            p.alloc_expr(
                ExprKind::ObjectCreation {
                    new_kw,
                    ty,
                    args,
                    initializer,
                },
                start,
            )
        })
    }

    /// `{ e, e, }`
    fn parse_initializer(&mut self) -> InitializerExpr {
        let open = self.advance();
        let elements = self.parse_separated(
            TokenKind::RBrace,
            STRUCTURAL,
            Trailing::Allowed,
            Self::can_start_expression,
            Self::parse_expression,
            |p| {
                let span = p.current_span();
                p.error(ParseErrorKind::ExpressionExpected, span);
                p.missing_name_expr()
            },
        );
        let close = self.expect(TokenKind::RBrace);
        InitializerExpr {
            open,
            elements,
            close,
        }
    }
}
