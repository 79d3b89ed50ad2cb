//! Utility macros for the parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_TOKENS!` - Creates an `Eof`-terminated token stream
//!
//! These macros keep hand-built token streams readable in the driver and in tests.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        $crate::tokens::tokens::Token {
            kind: $kind,
            value: String::from($value),
        }
    };
}

/// Creates a token stream from `(kind, literal)` pairs and appends the `Eof` sentinel.
///
/// # Example
///
/// ```ignore
/// let tokens = MK_TOKENS![(Let, "let"), (Identifier, "x"), (Equal, "="), (Int, "5")];
/// ```
#[macro_export]
macro_rules! MK_TOKENS {
    ($(($kind:ident, $value:expr)),* $(,)?) => {
        vec![
            $($crate::MK_TOKEN!($crate::tokens::tokens::TokenKind::$kind, $value),)*
            $crate::tokens::tokens::Token::eof(),
        ]
    };
}
