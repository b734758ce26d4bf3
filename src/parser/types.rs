//! Type parsing implementation.
//!
//! This module handles parsing of the type annotations that follow a
//! variable name in a declaration:
//!
//! - Primitive types (`int`, `char`)
//! - Fixed-length array types (`array(16) of int`)
//! - Pointer types (`ptr to char`)
//! - Parenthesised types
//!
//! The leading token selects the handler through `TYPE_LOOKUP`.

use crate::{
    ast::types::{ArrayType, PointerType, Primitive, PrimitiveType, Type},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::TYPE_LOOKUP, parser::Parser};

// type := 'int' | 'char'
//       | 'array' '(' INTEGER ')' 'of' type
//       | 'ptr' 'to' type
//       | '(' type ')'
pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let Some(token) = parser.current_token() else {
        return Err(parser.unexpected_end());
    };

    match TYPE_LOOKUP.get(&token.kind) {
        Some(handler) => parser.nested(*handler),
        None => Err(parser.unexpected_token(token)),
    }
}

pub fn parse_primitive_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.advance()?;

    let primitive = match token.kind {
        TokenKind::Int => Primitive::Int,
        TokenKind::Char => Primitive::Char,
        _ => return Err(parser.unexpected_token(token)),
    };

    Ok(Type::Primitive(PrimitiveType {
        primitive,
        location: token.location.clone(),
    }))
}

pub fn parse_array_type(parser: &mut Parser) -> Result<Type, Error> {
    let location = parser.expect(TokenKind::Array)?.location.clone();

    parser.expect(TokenKind::LeftParen)?;
    let size = parser.expect(TokenKind::Integer)?;
    let length = size.value.parse::<u32>().map_err(|_| {
        Error::new(
            ErrorImpl::InvalidArrayLength {
                token: size.value.clone(),
            },
            size.location.clone(),
        )
    })?;
    parser.expect(TokenKind::RightParen)?;
    parser.expect(TokenKind::Of)?;

    let underlying = parse_type(parser)?;

    Ok(Type::Array(ArrayType {
        length,
        underlying: Box::new(underlying),
        location,
    }))
}

pub fn parse_pointer_type(parser: &mut Parser) -> Result<Type, Error> {
    let location = parser.expect(TokenKind::Ptr)?.location.clone();

    parser.expect(TokenKind::To)?;
    let underlying = parse_type(parser)?;

    Ok(Type::Pointer(PointerType {
        underlying: Box::new(underlying),
        location,
    }))
}

pub fn parse_grouping_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::LeftParen)?;
    let ty = parse_type(parser)?;
    parser.expect(TokenKind::RightParen)?;

    Ok(ty)
}
