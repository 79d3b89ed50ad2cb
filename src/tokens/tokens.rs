use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Eol, // ;

    Identifier,
    Int,

    Equal,    // =
    NotEqual, // !=
    Bang,     // !

    LessThan,
    GreaterThan,

    Plus,
    Minus,
    Slash,
    Asterisk,

    // Reserved
    Let,
    Return,
}

impl TokenKind {
    /// Lowercase name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Eol => "eol",
            TokenKind::Identifier => "identifier",
            TokenKind::Int => "int",
            TokenKind::Equal => "equal",
            TokenKind::NotEqual => "not_equal",
            TokenKind::Bang => "bang",
            TokenKind::LessThan => "less_than",
            TokenKind::GreaterThan => "greater_than",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Slash => "slash",
            TokenKind::Asterisk => "asterisk",
            TokenKind::Let => "let",
            TokenKind::Return => "return",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    /// The sentinel handed out once the stream is exhausted.
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Int]) {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
