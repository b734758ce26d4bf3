use crate::{
    ast::statements::{
        AssignmentStmt, BlockStmt, EmptyStmt, ExpressionStmt, IfStmt, Stmt, VarDeclStmt, WhileStmt,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::STMT_LOOKUP, parser::Parser, types::parse_type};

// statement := ';'
//            | 'var' IDENT type ';'
//            | 'if' expr statement ['else' statement]
//            | 'while' expr statement
//            | block
//            | expr '=' expr ';'
//            | expr ';'
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let Some(kind) = parser.current_token_kind() else {
        return Err(parser.unexpected_end());
    };

    match STMT_LOOKUP.get(&kind) {
        Some(handler) => parser.nested(*handler),
        None => parser.nested(parse_expression_stmt),
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;

    let Some(middle) = parser.current_token() else {
        return Err(parser.unexpected_end());
    };

    if middle.kind == TokenKind::Assign {
        parser.advance()?;
        let value = parse_expr(parser)?;
        parser.expect(TokenKind::Semicolon)?;

        return Ok(Stmt::Assignment(AssignmentStmt {
            assignee: expression,
            value,
            location: middle.location.clone(),
        }));
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let location = parser.expect(TokenKind::Semicolon)?.location.clone();

    Ok(Stmt::Empty(EmptyStmt { location }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let location = parser.expect(TokenKind::Var)?.location.clone();

    let identifier = parser.expect(TokenKind::Identifier)?.value.clone();
    let explicit_type = parse_type(parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Declaration(VarDeclStmt {
        identifier,
        explicit_type,
        location,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let location = parser.expect(TokenKind::If)?.location.clone();

    let condition = parse_expr(parser)?;
    let then_body = parse_stmt(parser)?;

    // A trailing `else` always belongs to the innermost `if` still being parsed.
    let else_body = if parser.current_token_kind() == Some(TokenKind::Else) {
        parser.advance()?;
        parse_stmt(parser)?
    } else {
        Stmt::Empty(EmptyStmt {
            location: location.clone(),
        })
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body: Box::new(then_body),
        else_body: Box::new(else_body),
        location,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let location = parser.expect(TokenKind::While)?.location.clone();

    let condition = parse_expr(parser)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body: Box::new(body),
        location,
    }))
}

// block := '{' {statement} '}'
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let location = parser.expect(TokenKind::LeftBrace)?.location.clone();

    let mut body = Vec::new();
    while parser.has_tokens() && parser.current_token_kind() != Some(TokenKind::RightBrace) {
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::RightBrace)?;

    Ok(Stmt::Block(BlockStmt { body, location }))
}
