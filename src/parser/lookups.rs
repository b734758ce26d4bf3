use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{statements::Stmt, types::Type},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::*, types::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type TypeHandler = fn(&mut Parser) -> Result<Type, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type TypeLookup = HashMap<TokenKind, TypeHandler>;

lazy_static! {
    /// Statements introduced by a dedicated token. Anything else is parsed as
    /// an expression or assignment statement.
    pub static ref STMT_LOOKUP: StmtLookup = {
        let mut map: StmtLookup = HashMap::new();
        map.insert(TokenKind::Semicolon, parse_empty_stmt);
        map.insert(TokenKind::Var, parse_var_decl_stmt);
        map.insert(TokenKind::If, parse_if_stmt);
        map.insert(TokenKind::While, parse_while_stmt);
        map.insert(TokenKind::LeftBrace, parse_block_stmt);
        map
    };

    pub static ref TYPE_LOOKUP: TypeLookup = {
        let mut map: TypeLookup = HashMap::new();
        map.insert(TokenKind::Int, parse_primitive_type);
        map.insert(TokenKind::Char, parse_primitive_type);
        map.insert(TokenKind::Array, parse_array_type);
        map.insert(TokenKind::Ptr, parse_pointer_type);
        map.insert(TokenKind::LeftParen, parse_grouping_type);
        map
    };
}
