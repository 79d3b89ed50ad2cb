use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    tokens::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strength of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

lazy_static! {
    /// Infix operator precedences. Every operator here is left-associative.
    pub static ref PRECEDENCES: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equal, BindingPower::Equals);
        map.insert(TokenKind::NotEqual, BindingPower::Equals);
        map.insert(TokenKind::LessThan, BindingPower::LessGreater);
        map.insert(TokenKind::GreaterThan, BindingPower::LessGreater);
        map.insert(TokenKind::Plus, BindingPower::Sum);
        map.insert(TokenKind::Minus, BindingPower::Sum);
        map.insert(TokenKind::Slash, BindingPower::Product);
        map.insert(TokenKind::Asterisk, BindingPower::Product);
        map
    };
}

/// Returns the infix binding power of `kind`, or `Lowest` when it has none.
pub fn precedence_of(kind: TokenKind) -> BindingPower {
    PRECEDENCES
        .get(&kind)
        .copied()
        .unwrap_or(BindingPower::Lowest)
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.led(TokenKind::Equal, parse_infix_expr);
    parser.led(TokenKind::NotEqual, parse_infix_expr);

    // Relational
    parser.led(TokenKind::LessThan, parse_infix_expr);
    parser.led(TokenKind::GreaterThan, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, parse_infix_expr);
    parser.led(TokenKind::Minus, parse_infix_expr);
    parser.led(TokenKind::Slash, parse_infix_expr);
    parser.led(TokenKind::Asterisk, parse_infix_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Int, parse_primary_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so each parse owns its own
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
