use std::fmt::Display;

use thiserror::Error;

use crate::tokens::tokens::TokenKind;

/// A diagnostic recorded by the parser.
///
/// `position` is the index of the offending token in the input stream. Positions
/// past the end of the stream refer to the repeated `Eof` sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: usize) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixHandler { .. } => "NoPrefixHandler",
            ErrorImpl::IntegerParse { .. } => "IntegerParse",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            // The Eof sentinel has no text to show
            ErrorImpl::UnexpectedToken { literal, .. } if literal.is_empty() => ErrorTip::None,
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Equal,
                literal,
                ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, a binding needs `=` before its value",
                literal
            )),
            ErrorImpl::UnexpectedToken { literal, .. } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", literal))
            }
            ErrorImpl::NoPrefixHandler { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ErrorImpl::IntegerParse { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels deep",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
        literal: String,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixHandler { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParse { literal: String },
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
