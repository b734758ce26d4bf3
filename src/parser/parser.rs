//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the `Parser` cursor and the `parse` entry point.
//! The cursor reads a borrowed token slice left to right with one token of
//! lookahead; it never moves backwards.

use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    SourceLocation,
};

use super::stmt::parse_stmt;

/// Deepest syntax tree the parser will build. Statements, expressions, types,
/// prefix operators and each link of an operator chain all count as a level.
pub const MAX_NESTING: usize = 128;

/// Parsing state over a borrowed token sequence.
pub struct Parser<'a> {
    /// The tokens being parsed, owned by the caller
    tokens: &'a [Token],
    /// Index of the current (lookahead) token
    pos: usize,
    /// Nesting levels currently open, bounded by `MAX_NESTING`
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Returns the current token without advancing, `None` at end of input.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token, `None` at end of input.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    fn previous_token(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|pos| self.tokens.get(pos))
    }

    /// Advances to the next token and returns the one consumed.
    ///
    /// Fails with an end-of-input error if there is nothing left to consume.
    pub fn advance(&mut self) -> Result<&'a Token, Error> {
        let token = self.current_token().ok_or_else(|| self.unexpected_end())?;
        self.pos += 1;
        Ok(token)
    }

    /// Consumes the current token if it is of the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// "expected X, got Y" error at the current token, or an end-of-input
    /// error naming the expected kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&'a Token, Error> {
        let Some(token) = self.current_token() else {
            let (after, location) = self.describe_previous();
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInputExpecting {
                    after,
                    expected: expected_kind.to_string(),
                },
                location,
            ));
        };

        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind.to_string(),
                    received: token.to_string(),
                },
                token.location.clone(),
            ));
        }

        self.pos += 1;
        Ok(token)
    }

    /// Opens a nesting level, failing once `MAX_NESTING` levels are open.
    ///
    /// A failed parse is abandoned, so levels left open by an early `?`
    /// return are never observed.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING {
            let location = match self.current_token() {
                Some(token) => token.location.clone(),
                None => self.describe_previous().1,
            };
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING },
                location,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Runs `rule` one nesting level deeper.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser<'a>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.enter()?;
        let result = rule(&mut *self);
        self.leave(1);
        result
    }

    /// Error for input ending where more tokens were required, located at the
    /// last token consumed.
    pub fn unexpected_end(&self) -> Error {
        let (after, location) = self.describe_previous();
        Error::new(ErrorImpl::UnexpectedEndOfInput { after }, location)
    }

    /// Error for a token no grammar alternative accepts.
    pub fn unexpected_token(&self, token: &Token) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.to_string(),
            },
            token.location.clone(),
        )
    }

    fn describe_previous(&self) -> (String, SourceLocation) {
        match self.previous_token() {
            Some(token) => (token.to_string(), token.location.clone()),
            None => (String::from("start of input"), SourceLocation::null()),
        }
    }
}

/// Parses a sequence of tokens into its top-level statements.
///
/// Statements are parsed until the tokens are exhausted. The first syntax
/// error aborts the whole parse; no partial statement list is returned.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, Error> {
    let mut parser = Parser::new(tokens);
    let mut body = vec![];

    while parser.has_tokens() {
        match parse_stmt(&mut parser) {
            Ok(stmt) => body.push(stmt),
            Err(error) => {
                tracing::debug!(%error, "parsing failed");
                return Err(error);
            }
        }
    }

    tracing::debug!(statement_count = body.len(), "parsed");
    Ok(body)
}
