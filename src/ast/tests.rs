//! Unit tests for the AST printer and token re-serialization.

use crate::{
    tokens::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::{
    ast::{Expr, Stmt},
    expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, Program, ReturnStmt},
};

fn ident(name: &str) -> Expr {
    Expr::Identifier(Identifier {
        token: MK_TOKEN!(TokenKind::Identifier, name),
        value: String::from(name),
    })
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerLiteral {
        token: MK_TOKEN!(TokenKind::Int, value.to_string()),
        value,
    })
}

fn infix(left: Expr, kind: TokenKind, operator: &str, right: Expr) -> Expr {
    Expr::Infix(InfixExpr {
        token: MK_TOKEN!(kind, operator),
        left: Box::new(left),
        operator: String::from(operator),
        right: Box::new(right),
    })
}

#[test]
fn test_display_let_statement() {
    let stmt = Stmt::Let(LetStmt {
        token: MK_TOKEN!(TokenKind::Let, "let"),
        name: Identifier {
            token: MK_TOKEN!(TokenKind::Identifier, "total"),
            value: String::from("total"),
        },
        value: infix(
            ident("a"),
            TokenKind::Plus,
            "+",
            infix(ident("b"), TokenKind::Asterisk, "*", int(2)),
        ),
    });

    assert_eq!(stmt.to_string(), "let total = a + b * 2;");
}

#[test]
fn test_display_prefix_is_glued() {
    let expr = Expr::Prefix(PrefixExpr {
        token: MK_TOKEN!(TokenKind::Minus, "-"),
        operator: String::from("-"),
        right: Box::new(ident("x")),
    });
    let stmt = Stmt::Return(ReturnStmt {
        token: MK_TOKEN!(TokenKind::Return, "return"),
        value: expr,
    });

    assert_eq!(stmt.to_string(), "return -x;");
}

#[test]
fn test_expr_token_is_operator_for_infix() {
    let expr = infix(ident("a"), TokenKind::LessThan, "<", ident("b"));

    assert_eq!(expr.token().kind, TokenKind::LessThan);
}

#[test]
fn test_program_to_tokens() {
    let program = Program {
        statements: vec![Stmt::Expression(ExpressionStmt {
            token: MK_TOKEN!(TokenKind::Identifier, "a"),
            expression: infix(ident("a"), TokenKind::Plus, "+", int(1)),
        })],
    };

    let kinds: Vec<TokenKind> = program.to_tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Int,
            TokenKind::Eol,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
    assert_eq!(program.to_tokens(), vec![Token::eof()]);
}

#[test]
fn test_program_display_one_statement_per_line() {
    let program = Program {
        statements: vec![
            Stmt::Expression(ExpressionStmt {
                token: MK_TOKEN!(TokenKind::Identifier, "a"),
                expression: ident("a"),
            }),
            Stmt::Expression(ExpressionStmt {
                token: MK_TOKEN!(TokenKind::Int, "5"),
                expression: int(5),
            }),
        ],
    };

    assert_eq!(program.to_string(), "a;\n5;");
}
