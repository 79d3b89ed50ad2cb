use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    parser::{expr::parse_expr, lookups::BindingPower},
    tokens::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    if let Some(handler) = handler {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Equal)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.skip_terminator();

    Ok(Stmt::Let(LetStmt {
        token: start_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.skip_terminator();

    Ok(Stmt::Return(ReturnStmt {
        token: start_token,
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;
    parser.skip_terminator();

    Ok(Stmt::Expression(ExpressionStmt {
        token: start_token,
        expression,
    }))
}
