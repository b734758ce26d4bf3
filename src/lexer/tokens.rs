use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::SourceLocation;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("var", TokenKind::Var);
        map.insert("int", TokenKind::Int);
        map.insert("char", TokenKind::Char);
        map.insert("array", TokenKind::Array);
        map.insert("of", TokenKind::Of);
        map.insert("ptr", TokenKind::Ptr);
        map.insert("to", TokenKind::To);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Integer,
    Identifier,

    Assign,   // =
    Equals,   // ==
    NotEqual, // !=
    Not,      // !, lexed but never accepted by the grammar

    LessThan,
    GreaterThan,

    Plus,
    Minus,
    Star,
    Slash,
    Ampersand,

    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semicolon,

    // Reserved
    If,
    Else,
    While,
    Var,
    Int,
    Char,
    Array,
    Of,
    Ptr,
    To,
}

impl TokenKind {
    /// The fixed spelling of a symbol or keyword token, `None` for the
    /// literal kinds whose text varies.
    pub fn canonical(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Integer | TokenKind::Identifier => return None,
            TokenKind::Assign => "=",
            TokenKind::Equals => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Not => "!",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Ampersand => "&",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Var => "var",
            TokenKind::Int => "int",
            TokenKind::Char => "char",
            TokenKind::Array => "array",
            TokenKind::Of => "of",
            TokenKind::Ptr => "ptr",
            TokenKind::To => "to",
        };

        Some(text)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.canonical() {
            Some(text) => write!(f, "'{}'", text),
            None if *self == TokenKind::Integer => write!(f, "integer"),
            None => write!(f, "identifier"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme: exact source text for integers and identifiers, the
    /// canonical spelling for everything else.
    pub value: String,
    pub location: SourceLocation,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Integer, TokenKind::Identifier]) {
            write!(f, "'{}'", self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One-line dump used by the `--tokens` driver mode.
    pub fn debug(&self) -> String {
        format!("{} {:?} ({})", self.location, self.kind, self.value)
    }
}
