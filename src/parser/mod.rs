//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, bare expressions)
//! - Expression parsing (prefix and infix operators, literals)
//! - Error recovery and reporting
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. Adding an
//! operator means registering a handler in `lookups`; the climbing loop stays as is.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
