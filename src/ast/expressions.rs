use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, SourceLocation};

use super::ast::Node;

/// Expression
///
/// Every expression owns its children; sub-trees are never shared.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerLiteral(IntegerExpr),
    VariableReference(SymbolExpr),
    BinaryOperator(BinaryExpr),
    UnaryOperator(PrefixExpr),
    Subscript(SubscriptExpr),
}

// LITERALS

/// Integer Expression
///
/// Keeps the literal's spelling; numeric interpretation belongs to a later stage.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: String,
    pub location: SourceLocation,
}

/// Symbol Expression
/// A reference to a variable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub location: SourceLocation,
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,
}

impl BinaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::LessThan => Some(BinaryOp::LessThan),
            TokenKind::GreaterThan => Some(BinaryOp::GreaterThan),
            TokenKind::Equals => Some(BinaryOp::Equal),
            TokenKind::NotEqual => Some(BinaryOp::NotEqual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Dereference,
    Negate,
    AddressOf,
}

impl UnaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<UnaryOp> {
        match kind {
            TokenKind::Star => Some(UnaryOp::Dereference),
            TokenKind::Minus => Some(UnaryOp::Negate),
            TokenKind::Ampersand => Some(UnaryOp::AddressOf),
            _ => None,
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Binary Expression
/// Anchored at its left operand.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Prefix Expression
/// Anchored at its operand.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: UnaryOp,
    pub right_expr: Box<Expr>,
}

/// `base[index]`, anchored at `base`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptExpr {
    pub base: Box<Expr>,
    pub index: Box<Expr>,
}

impl Node for Expr {
    fn get_location(&self) -> &SourceLocation {
        match self {
            Expr::IntegerLiteral(expr) => &expr.location,
            Expr::VariableReference(expr) => &expr.location,
            Expr::BinaryOperator(expr) => expr.left.get_location(),
            Expr::UnaryOperator(expr) => expr.right_expr.get_location(),
            Expr::Subscript(expr) => expr.base.get_location(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::IntegerLiteral(expr) => write!(f, "{}", expr.value),
            Expr::VariableReference(expr) => write!(f, "{}", expr.value),
            Expr::BinaryOperator(expr) => write!(
                f,
                "BinaryOperator[{}, {}, {}]",
                expr.operator, expr.left, expr.right
            ),
            Expr::UnaryOperator(expr) => {
                write!(f, "UnaryOperator[{}, {}]", expr.operator, expr.right_expr)
            }
            Expr::Subscript(expr) => write!(f, "Subscript[{}, {}]", expr.base, expr.index),
        }
    }
}
