//! Error types and error handling for the front end.
//!
//! This module defines the single error value shared by the lexer and the
//! parser. It includes:
//!
//! - An error structure carrying the source location it was raised at
//! - Specific error variants for lexing and parsing failures
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;
