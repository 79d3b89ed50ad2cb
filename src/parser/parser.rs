//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser is a cursor over a pre-lexed token stream with one token
//! of lookahead, plus lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//!
//! Failures never abort the run. A failed statement is dropped, its error is
//! logged and the cursor resynchronizes according to [`Recovery`].

use std::{collections::HashMap, mem};

use tracing::{debug, trace};

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::{Token, TokenKind},
};

use super::{
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, StmtHandler,
        StmtLookup,
    },
    stmt::parse_stmt,
};

/// Where the cursor resumes after a statement fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Skip to the next `Eol` (or `Eof`) so the following statement starts clean.
    #[default]
    SkipToTerminator,
    /// Only the program loop's single advance past the failure point.
    AdvanceOne,
}

/// Tunables for a parse run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    pub recovery: Recovery,
    /// Maximum expression nesting before `NestingTooDeep` is reported. Both
    /// recursive operands and operators folded into a left operand count.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            recovery: Recovery::default(),
            max_depth: 1024,
        }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the peek token in `tokens`
    pos: usize,
    current: Token,
    peek: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    options: ParserOptions,
    /// Current expression nesting
    depth: usize,
}

impl Parser {
    /// Creates a parser over `tokens` with default options.
    ///
    /// The stream should end with a single `Eof`; reading past the end yields
    /// the `Eof` sentinel, so a stream without one still terminates.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_options(tokens, ParserOptions::default())
    }

    pub fn with_options(tokens: Vec<Token>, options: ParserOptions) -> Self {
        let current = tokens.first().cloned().unwrap_or_else(Token::eof);
        let peek = tokens.get(1).cloned().unwrap_or_else(Token::eof);

        let mut parser = Parser {
            tokens,
            pos: 1,
            current,
            peek,
            errors: Vec::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            options,
            depth: 0,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Index of the peek token. Grows by exactly one per `advance`.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Index of the current token, used to locate diagnostics.
    pub fn current_position(&self) -> usize {
        self.pos - 1
    }

    /// Shifts peek into current and pulls the next token into peek.
    pub fn advance(&mut self) {
        self.pos += 1;
        let next = self.tokens.get(self.pos).cloned().unwrap_or_else(Token::eof);
        self.current = mem::replace(&mut self.peek, next);
        trace!("advance: current = {}", self.current);
    }

    /// Advances onto the peek token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// The token now under the cursor, or an `UnexpectedToken` error located at
    /// the peek token. The cursor does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    actual: self.peek.kind,
                    literal: self.peek.value.clone(),
                },
                self.pos,
            ));
        }

        self.advance();
        Ok(self.current.clone())
    }

    /// Consumes an optional `Eol` following the statement just parsed.
    pub fn skip_terminator(&mut self) {
        if self.peek.kind == TokenKind::Eol {
            self.advance();
        }
    }

    /// Returns the diagnostics recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// Its binding power comes from the precedence table.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Enters one level of expression nesting.
    pub fn enter_expr(&mut self) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.options.max_depth,
                },
                self.current_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    /// Current expression nesting.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Unwinds the nesting counter to a level saved by the caller.
    pub fn unwind_to(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Parses statements until the cursor reaches `Eof`.
    ///
    /// Statement handlers leave the cursor on their last consumed token; the
    /// loop then advances once. Failed statements are logged and skipped.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::Eof {
            match parse_stmt(self) {
                Ok(stmt) => {
                    debug!("parsed statement: {}", stmt);
                    program.statements.push(stmt);
                }
                Err(error) => {
                    debug!(
                        position = error.get_position(),
                        "dropping statement: {}", error
                    );
                    self.errors.push(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        program
    }

    fn synchronize(&mut self) {
        if self.options.recovery == Recovery::AdvanceOne {
            return;
        }

        while !self
            .current
            .is_one_of_many(&[TokenKind::Eol, TokenKind::Eof])
        {
            self.advance();
        }
        debug!("resynchronized at token {}", self.current_position());
    }
}

/// Parses a token stream into a [`Program`].
///
/// This is the main entry point for parsing.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, whose `errors()` hold the diagnostics
/// - The statements that parsed successfully, in source order
pub fn parse(tokens: Vec<Token>) -> (Parser, Program) {
    parse_with_options(tokens, ParserOptions::default())
}

pub fn parse_with_options(tokens: Vec<Token>, options: ParserOptions) -> (Parser, Program) {
    let mut parser = Parser::with_options(tokens, options);
    let program = parser.parse_program();

    (parser, program)
}
