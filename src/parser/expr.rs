use crate::{
    ast::expressions::{
        BinaryExpr, BinaryOp, Expr, IntegerExpr, PrefixExpr, SubscriptExpr, SymbolExpr, UnaryOp,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

// Precedence, loosest first: equality, comparison, sum, product, subscript,
// terminal. Each level parses its operands with the next tighter level.
//
// Every nested expression and every link of an operator chain opens a
// nesting level on the parser, which bounds the depth of the tree.

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_equality_expr)
}

/// Returns the operator if the current token is one of `kinds`.
fn match_operator(parser: &Parser, kinds: &[TokenKind]) -> Option<BinaryOp> {
    parser
        .current_token_kind()
        .filter(|kind| kinds.contains(kind))
        .and_then(BinaryOp::from_token_kind)
}

fn make_binary(operator: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOperator(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

// equality := comparison {('==' | '!=') comparison}
pub fn parse_equality_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_comparison_expr(parser)?;
    let mut chained = 0;

    while let Some(operator) = match_operator(parser, &[TokenKind::Equals, TokenKind::NotEqual]) {
        parser.enter()?;
        chained += 1;

        parser.advance()?;
        let right = parse_comparison_expr(parser)?;
        left = make_binary(operator, left, right);
    }

    parser.leave(chained);
    Ok(left)
}

// comparison := sum [('<' | '>') sum]
//
// Not a loop: `a < b < c` is rejected.
pub fn parse_comparison_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_sum_expr(parser)?;

    match match_operator(parser, &[TokenKind::LessThan, TokenKind::GreaterThan]) {
        Some(operator) => {
            parser.advance()?;
            let right = parse_sum_expr(parser)?;
            Ok(make_binary(operator, left, right))
        }
        None => Ok(left),
    }
}

// sum := product {('+' | '-') product}
pub fn parse_sum_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_product_expr(parser)?;
    let mut chained = 0;

    while let Some(operator) = match_operator(parser, &[TokenKind::Plus, TokenKind::Minus]) {
        parser.enter()?;
        chained += 1;

        parser.advance()?;
        let right = parse_product_expr(parser)?;
        left = make_binary(operator, left, right);
    }

    parser.leave(chained);
    Ok(left)
}

// product := subscript {('*' | '/') subscript}
pub fn parse_product_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_subscript_expr(parser)?;
    let mut chained = 0;

    while let Some(operator) = match_operator(parser, &[TokenKind::Star, TokenKind::Slash]) {
        parser.enter()?;
        chained += 1;

        parser.advance()?;
        let right = parse_subscript_expr(parser)?;
        left = make_binary(operator, left, right);
    }

    parser.leave(chained);
    Ok(left)
}

// subscript := terminal {'[' expr ']'}
pub fn parse_subscript_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut base = parse_terminal_expr(parser)?;
    let mut chained = 0;

    while parser.current_token_kind() == Some(TokenKind::LeftBracket) {
        parser.enter()?;
        chained += 1;

        parser.advance()?;
        let index = parse_expr(parser)?;
        parser.expect(TokenKind::RightBracket)?;

        base = Expr::Subscript(SubscriptExpr {
            base: Box::new(base),
            index: Box::new(index),
        });
    }

    parser.leave(chained);
    Ok(base)
}

// terminal := INTEGER | IDENT | '(' expr ')'
//           | '-' terminal | '*' terminal | '&' terminal
pub fn parse_terminal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(token) = parser.current_token() else {
        return Err(parser.unexpected_end());
    };

    match token.kind {
        TokenKind::Integer | TokenKind::Identifier => parse_primary_expr(parser),
        TokenKind::LeftParen => parse_grouping_expr(parser),
        TokenKind::Minus | TokenKind::Star | TokenKind::Ampersand => parse_prefix_expr(parser),
        _ => Err(parser.unexpected_token(token)),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    match token.kind {
        TokenKind::Integer => Ok(Expr::IntegerLiteral(IntegerExpr {
            value: token.value.clone(),
            location: token.location.clone(),
        })),
        TokenKind::Identifier => Ok(Expr::VariableReference(SymbolExpr {
            value: token.value.clone(),
            location: token.location.clone(),
        })),
        _ => Err(parser.unexpected_token(token)),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::LeftParen)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::RightParen)?;

    Ok(expr)
}

// Prefix operators take a terminal, so they stack (`&*p`) but never take a
// binary expression as their operand.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        let operator_token = parser.advance()?;
        let Some(operator) = UnaryOp::from_token_kind(operator_token.kind) else {
            return Err(parser.unexpected_token(operator_token));
        };

        let right_expr = parse_terminal_expr(parser)?;

        Ok(Expr::UnaryOperator(PrefixExpr {
            operator,
            right_expr: Box::new(right_expr),
        }))
    })
}
