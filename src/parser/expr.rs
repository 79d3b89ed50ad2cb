use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::TokenKind,
};

use super::{
    lookups::{precedence_of, BindingPower},
    parser::Parser,
};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// On return the cursor sits on the last token of the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let depth = parser.depth();
    let result = parse_expr_inner(parser, bp);
    parser.unwind_to(depth);

    result
}

fn parse_expr_inner(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_expr()?;

    // First parse NUD
    let token_kind = parser.current_token_kind();
    trace!("parse_expr: {} at {:?}", token_kind, bp);

    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixHandler { kind: token_kind },
                parser.current_position(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, fold it into lhs
    loop {
        let kind = parser.peek_token_kind();
        let led = match parser.get_led_lookup().get(&kind) {
            Some(led) => *led,
            None => break,
        };

        let power = precedence_of(kind);
        if power <= bp {
            break;
        }

        parser.advance();
        // Every fold nests `left` one level deeper.
        parser.enter_expr()?;
        left = led(parser, left, power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Int => {
            let is_digits =
                !token.value.is_empty() && token.value.bytes().all(|b| b.is_ascii_digit());

            match token.value.parse::<i64>() {
                Ok(value) if is_digits => Ok(Expr::Integer(IntegerLiteral { token, value })),
                _ => Err(Error::new(
                    ErrorImpl::IntegerParse {
                        literal: token.value,
                    },
                    parser.current_position(),
                )),
            }
        }
        TokenKind::Identifier => Ok(Expr::Identifier(Identifier {
            value: token.value.clone(),
            token,
        })),
        kind => Err(Error::new(
            ErrorImpl::NoPrefixHandler { kind },
            parser.current_position(),
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
