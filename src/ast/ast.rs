use std::fmt::Display;

use crate::tokens::tokens::Token;

use super::{
    expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Statement
///
/// The closed set of statement forms. Each variant keeps the token that introduced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    /// Returns the token that introduced the statement.
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Let(stmt) => &stmt.token,
            Stmt::Return(stmt) => &stmt.token,
            Stmt::Expression(stmt) => &stmt.token,
        }
    }

    /// Appends the canonical token form of the statement, terminator included.
    pub fn push_tokens(&self, out: &mut Vec<Token>) {
        match self {
            Stmt::Let(stmt) => stmt.push_tokens(out),
            Stmt::Return(stmt) => stmt.push_tokens(out),
            Stmt::Expression(stmt) => stmt.push_tokens(out),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
///
/// New literal or operator forms are added as variants here and registered
/// in the parser lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Expr {
    /// Returns the token that introduced the expression. For infix
    /// expressions this is the operator.
    pub fn token(&self) -> &Token {
        match self {
            Expr::Identifier(expr) => &expr.token,
            Expr::Integer(expr) => &expr.token,
            Expr::Prefix(expr) => &expr.token,
            Expr::Infix(expr) => &expr.token,
        }
    }

    /// Appends the tokens that parse back into this expression.
    pub fn push_tokens(&self, out: &mut Vec<Token>) {
        match self {
            Expr::Identifier(expr) => out.push(expr.token.clone()),
            Expr::Integer(expr) => out.push(expr.token.clone()),
            Expr::Prefix(expr) => {
                out.push(expr.token.clone());
                expr.right.push_tokens(out);
            }
            Expr::Infix(expr) => {
                expr.left.push_tokens(out);
                out.push(expr.token.clone());
                expr.right.push_tokens(out);
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => write!(f, "{}", expr),
            Expr::Integer(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Infix(expr) => write!(f, "{}", expr),
        }
    }
}
