#![allow(clippy::module_inception)]

//! A Pratt parser that turns a pre-lexed token stream into statements and
//! expressions, collecting diagnostics instead of stopping at the first one.
//!
//! ```ignore
//! let (parser, program) = parse(MK_TOKENS![(Let, "let"), (Identifier, "x"), (Equal, "="), (Int, "5")]);
//! assert!(parser.errors().is_empty());
//! ```

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod tokens;
