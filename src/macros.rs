//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-spelling tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$location` - The source location
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), lexer.location());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $location:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            location: $location,
        }
    };
}

/// Creates a default lexer handler for a token with a fixed spelling.
///
/// The generated handler ignores the matched text and emits a token whose
/// lexeme is the canonical `$value`, located at the lexer's current line.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The canonical spelling
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            Some($crate::MK_TOKEN!($kind, String::from($value), lexer.location()))
        }
    };
}
