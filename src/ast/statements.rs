use std::{fmt::Display, slice::Iter};

use crate::{
    tokens::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::{
    ast::{Expr, Stmt},
    expressions::Identifier,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Expr,
}

impl LetStmt {
    pub fn push_tokens(&self, out: &mut Vec<Token>) {
        out.push(self.token.clone());
        out.push(self.name.token.clone());
        out.push(MK_TOKEN!(TokenKind::Equal, "="));
        self.value.push_tokens(out);
        out.push(MK_TOKEN!(TokenKind::Eol, ";"));
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token.value, self.name, self.value)
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
}

impl ReturnStmt {
    pub fn push_tokens(&self, out: &mut Vec<Token>) {
        out.push(self.token.clone());
        self.value.push_tokens(out);
        out.push(MK_TOKEN!(TokenKind::Eol, ";"));
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.token.value, self.value)
    }
}

/// A bare expression used as a statement. `token` is the first token of the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
}

impl ExpressionStmt {
    pub fn push_tokens(&self, out: &mut Vec<Token>) {
        self.expression.push_tokens(out);
        out.push(MK_TOKEN!(TokenKind::Eol, ";"));
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};", self.expression)
    }
}

/// The statements recognised in one token stream, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Re-serializes the program into an `Eof`-terminated token stream.
    ///
    /// Parsing the result yields a program equal to `self` whenever `self`
    /// came out of the parser.
    pub fn to_tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        for stmt in self.iter() {
            stmt.push_tokens(&mut tokens);
        }
        tokens.push(Token::eof());
        tokens
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, stmt) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
