//! Unit tests for the token model.

use super::tokens::{Token, TokenKind};

#[test]
fn test_kind_display_is_lowercase_name() {
    assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    assert_eq!(TokenKind::Equal.to_string(), "equal");
    assert_eq!(TokenKind::NotEqual.to_string(), "not_equal");
    assert_eq!(TokenKind::Eof.to_string(), "eof");
}

#[test]
fn test_eof_sentinel() {
    let token = Token::eof();
    assert_eq!(token.kind, TokenKind::Eof);
    assert!(token.value.is_empty());
}

#[test]
fn test_token_display() {
    assert_eq!(Token::new(TokenKind::Int, "10").to_string(), "int (10)");
    assert_eq!(Token::new(TokenKind::Plus, "+").to_string(), "plus");
}

#[test]
fn test_mk_tokens_appends_eof() {
    let tokens = crate::MK_TOKENS![(Let, "let"), (Identifier, "x")];

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], crate::MK_TOKEN!(TokenKind::Let, "let"));
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}
