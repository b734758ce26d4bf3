#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use lexer::lexer::tokenize;
pub use parser::parser::parse;

/// A (file, line) pair attached to every token and AST node for diagnostics.
///
/// The file name is an opaque label, never interpreted as a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: Arc<str>,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: Arc<str>, line: u32) -> Self {
        SourceLocation { file, line }
    }

    /// Location used when an error has no token to point at (parsing an
    /// empty token sequence directly through a sub-rule).
    pub fn null() -> Self {
        SourceLocation {
            file: Arc::from("<null>"),
            line: 1,
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line ending.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders an error as a multi-line diagnostic against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (unexpected ';', is a type missing?)
/// -> main.src:3
///   |
/// 3 | var x ;
///   |
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let location = error.get_location();
    let line_str = location.line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", location));
    out.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_line(source, location.line) {
        out.push_str(&format!("{} | {}\n", line_str, line_text.trim()));
        out.push_str(&format!("{:>padding$}\n", "|"));
    }

    out
}
