//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a sequence of tokens
//! into a sequence of top-level statements. It is a recursive-descent parser
//! with one token of lookahead and no backtracking, and handles:
//!
//! - Statement parsing (declarations, assignments, control flow, blocks)
//! - Expression parsing, one function per precedence level
//! - Type parsing for declaration annotations
//! - Error reporting at the first failure
//!
//! Statements and types are dispatched on their leading token through lookup
//! tables; expression precedence is encoded in the call structure instead.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
