//! Token model consumed by the parser.
//!
//! Tokens arrive already classified: a `TokenKind` tag plus the literal text
//! it was produced from. This module only describes them; turning source text
//! into tokens happens elsewhere.

pub mod tokens;

#[cfg(test)]
mod tests;
