use std::fmt::Display;

use thiserror::Error;

use crate::SourceLocation;

/// A lexing or parsing failure.
///
/// Every error is terminal for the `tokenize`/`parse` call that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[{location}] {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    location: SourceLocation,
}

/// The stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: SourceLocation) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lex,
            _ => ErrorKind::Parse,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedEndOfInputExpecting { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidArrayLength { .. } => "InvalidArrayLength",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::ExpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {}, found {}",
                expected, received
            )),
            ErrorImpl::UnexpectedEndOfInput { after } => ErrorTip::Suggestion(format!(
                "Input ends after {}, is the statement complete?",
                after
            )),
            ErrorImpl::UnexpectedEndOfInputExpecting { after, expected } => {
                ErrorTip::Suggestion(format!(
                    "Input ends after {}, did you miss {}?",
                    after, expected
                ))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: {}, no statement, expression or type starts here",
                token
            )),
            ErrorImpl::InvalidArrayLength { token } => ErrorTip::Suggestion(format!(
                "Invalid array length: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "More than {} nested levels, split the statement or use a variable",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Token descriptions inside these variants are already rendered for display
/// (`'x'`, `';'`, `identifier`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid character '{token}'")]
    UnrecognisedToken { token: String },
    #[error("expected {expected}, got {received}")]
    ExpectedToken { expected: String, received: String },
    #[error("unexpected end of input after {after}")]
    UnexpectedEndOfInput { after: String },
    #[error("unexpected end of input after {after}, expected {expected}")]
    UnexpectedEndOfInputExpecting { after: String, expected: String },
    #[error("unexpected {token}")]
    UnexpectedToken { token: String },
    #[error("invalid static array size '{token}'")]
    InvalidArrayLength { token: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
