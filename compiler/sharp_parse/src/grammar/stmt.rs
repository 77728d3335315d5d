//! Statement Parsing
//!
//! Blocks, local declarations, expression statements and the small set of
//! control-flow statements that host expressions and patterns.

use sharp_ir::ast::{
    Block, CompilationUnit, ElseClause, EqualsValue, SeparatedList, Stmt, StmtKind,
    VariableDeclarator,
};
use sharp_ir::{ExprId, StmtId, TokenKind};

use crate::error::ErrorContext;
use crate::grammar::TypeMode;
use crate::recovery::{synchronize, STMT_RECOVERY, STMT_START};
use crate::Parser;

impl Parser<'_> {
    /// Parse one statement.
    pub(crate) fn parse_statement(&mut self) -> StmtId {
        self.guarded(Self::parse_statement_inner, |p| {
            let start = p.current_span().start;
            let semicolon = p.cursor.missing(TokenKind::Semicolon);
            p.alloc_stmt(StmtKind::Empty { semicolon }, start)
        })
    }

    fn parse_statement_inner(&mut self) -> StmtId {
        let start = self.current_span().start;
        match self.current_kind() {
            TokenKind::LBrace => self.parse_block_statement(),
            TokenKind::Semicolon => {
                let semicolon = self.advance();
                self.alloc_stmt(StmtKind::Empty { semicolon }, start)
            }
            TokenKind::Switch => self.parse_switch_statement(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => {
                let while_kw = self.advance();
                let open = self.expect(TokenKind::LParen);
                let condition = self.parse_expression();
                let close = self.expect(TokenKind::RParen);
                let body = self.parse_statement();
                self.alloc_stmt(
                    StmtKind::While {
                        while_kw,
                        open,
                        condition,
                        close,
                        body,
                    },
                    start,
                )
            }
            TokenKind::Return => {
                let return_kw = self.advance();
                let expr = self.parse_optional_statement_expression();
                let semicolon = self.expect(TokenKind::Semicolon);
                self.alloc_stmt(
                    StmtKind::Return {
                        return_kw,
                        expr,
                        semicolon,
                    },
                    start,
                )
            }
            TokenKind::Throw => {
                let throw_kw = self.advance();
                let expr = self.parse_optional_statement_expression();
                let semicolon = self.expect(TokenKind::Semicolon);
                self.alloc_stmt(
                    StmtKind::Throw {
                        throw_kw,
                        expr,
                        semicolon,
                    },
                    start,
                )
            }
            TokenKind::Break => {
                let break_kw = self.advance();
                let semicolon = self.expect(TokenKind::Semicolon);
                self.alloc_stmt(
                    StmtKind::Break {
                        break_kw,
                        semicolon,
                    },
                    start,
                )
            }
            TokenKind::Continue => {
                let continue_kw = self.advance();
                let semicolon = self.expect(TokenKind::Semicolon);
                self.alloc_stmt(
                    StmtKind::Continue {
                        continue_kw,
                        semicolon,
                    },
                    start,
                )
            }
            _ if self.is_possible_local_declaration() => self.parse_local_declaration(),
            _ => {
                let expr = self.parse_expression();
                let semicolon = self.expect(TokenKind::Semicolon);
                self.alloc_stmt(StmtKind::Expression { expr, semicolon }, start)
            }
        }
    }

    /// `{ stmts }`
    pub(crate) fn parse_block_statement(&mut self) -> StmtId {
        let start = self.current_span().start;
        self.in_error_context(ErrorContext::Block, |p| {
            let open = p.expect(TokenKind::LBrace);
            let mut stmts = Vec::new();
            loop {
                match p.current_kind() {
                    TokenKind::RBrace | TokenKind::Eof | TokenKind::RParen | TokenKind::RBracket => {
                        break
                    }
                    _ => p.parse_statement_into(&mut stmts),
                }
            }
            let close = p.expect(TokenKind::RBrace);
            p.alloc_stmt(StmtKind::Block(Block { open, stmts, close }), start)
        })
    }

    /// Every statement up to `Eof`. Stray closers are skipped.
    pub(crate) fn parse_compilation_unit_body(&mut self) -> CompilationUnit {
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end() {
            self.parse_statement_into(&mut stmts);
        }
        CompilationUnit { stmts }
    }

    /// Parse a statement into `stmts`, or skip a run of tokens that cannot
    /// start one with a single diagnostic. Always consumes at least one token
    /// when not at `Eof`.
    fn parse_statement_into(&mut self, stmts: &mut Vec<StmtId>) {
        if !self.can_start_statement() {
            self.skip_unexpected();
            synchronize(&mut self.cursor, STMT_RECOVERY);
            return;
        }
        let before = self.cursor.position();
        stmts.push(self.parse_statement());
        if self.cursor.position() == before {
            self.skip_unexpected();
        }
    }

    #[inline]
    pub(crate) fn can_start_statement(&self) -> bool {
        STMT_START.contains(&self.current_kind())
    }

    fn parse_if_statement(&mut self) -> StmtId {
        let start = self.current_span().start;
        let if_kw = self.advance();
        let open = self.expect(TokenKind::LParen);
        let condition = self.parse_expression();
        let close = self.expect(TokenKind::RParen);
        let then_branch = self.parse_statement();
        let else_clause = self.eat(TokenKind::Else).map(|else_kw| ElseClause {
            else_kw,
            body: self.parse_statement(),
        });
        self.alloc_stmt(
            StmtKind::If {
                if_kw,
                open,
                condition,
                close,
                then_branch,
                else_clause,
            },
            start,
        )
    }

    /// The operand of `return` and `throw`, absent before `;`.
    fn parse_optional_statement_expression(&mut self) -> Option<ExprId> {
        if self.check(TokenKind::Semicolon) || !self.can_start_expression() {
            return None;
        }
        Some(self.parse_expression())
    }

    /// `T a = 1, b;`
    fn parse_local_declaration(&mut self) -> StmtId {
        let start = self.current_span().start;
        self.in_error_context(ErrorContext::LocalDeclaration, |p| {
            let ty = p.parse_type(TypeMode::Normal);
            let mut declarators = SeparatedList::new();
            declarators.push_item(p.parse_variable_declarator());
            while let Some(comma) = p.eat(TokenKind::Comma) {
                declarators.push_separator(comma);
                declarators.push_item(p.parse_variable_declarator());
            }
            let semicolon = p.expect(TokenKind::Semicolon);
            p.alloc_stmt(
                StmtKind::LocalDeclaration {
                    ty,
                    declarators,
                    semicolon,
                },
                start,
            )
        })
    }

    fn parse_variable_declarator(&mut self) -> VariableDeclarator {
        let name = self.expect_ident();
        let initializer = self.eat(TokenKind::Eq).map(|eq| EqualsValue {
            eq,
            value: self.parse_expression(),
        });
        VariableDeclarator { name, initializer }
    }

    pub(crate) fn alloc_stmt(&mut self, kind: StmtKind, start: u32) -> StmtId {
        let span = self.span_from(start);
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }
}
