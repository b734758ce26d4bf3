use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    SourceLocation, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Turns the text matched by a pattern into a token, or `None` if the text
/// is skipped.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; two-character symbols must precede their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEqual, "!=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessThan, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterThan, ">") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftBrace, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightBrace, "}") },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftBracket, "[") },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightBracket, "]") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
    ];
}

/// Scanner state for a single source text.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    file: Arc<str>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: &str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            file: Arc::from(file),
        }
    }

    /// The current line, starting at 1 and advanced by every newline consumed.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(Arc::clone(&self.file), self.line)
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scans the next token, skipping whitespace.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while !self.at_eof() {
            let remaining = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remaining)
                    .map(|found| (pattern.handler, found.as_str()))
            });

            let Some((handler, text)) = matched else {
                let token = remaining.chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    self.location(),
                ));
            };

            let token = handler(self, text);
            self.advance_n(text.len());

            if token.is_some() {
                return Ok(token);
            }
        }

        Ok(None)
    }
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Integer, String::from(matched), lexer.location()))
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let newlines = matched.bytes().filter(|byte| *byte == b'\n').count();
    lexer.line = lexer.line.saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
    None
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        Some(MK_TOKEN!(*kind, String::from(matched), lexer.location()))
    } else {
        Some(MK_TOKEN!(TokenKind::Identifier, String::from(matched), lexer.location()))
    }
}

/// Converts source text into its token sequence.
///
/// `file` is only used to label token locations. Scanning stops at the first
/// character no pattern accepts; no partial token list is returned.
#[tracing::instrument(skip_all, fields(file = file, source_len = source.len()))]
pub fn tokenize(source: &str, file: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        match lexer.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break,
            Err(error) => {
                tracing::debug!(%error, "lexing failed");
                return Err(error);
            }
        }
    }

    tracing::debug!(token_count = tokens.len(), lines = lexer.line(), "tokenized");
    Ok(tokens)
}
