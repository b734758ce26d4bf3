use std::fmt::Display;

use crate::SourceLocation;

use super::{
    ast::{join, Node},
    expressions::Expr,
    types::Type,
};

/// Statement
///
/// Each variant wraps a payload struct holding the node's children and, for
/// variants introduced by a keyword or operator, the location of that token.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Empty(EmptyStmt),
    Expression(ExpressionStmt),
    Assignment(AssignmentStmt),
    Declaration(VarDeclStmt),
    If(IfStmt),
    While(WhileStmt),
    Block(BlockStmt),
}

/// A bare `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStmt {
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// `assignee = value;`, anchored at the `=`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub assignee: Expr,
    pub value: Expr,
    pub location: SourceLocation,
}

/// `var identifier type;`, anchored at `var`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub explicit_type: Type,
    pub location: SourceLocation,
}

/// `if condition then_body [else else_body]`, anchored at `if`.
///
/// Without an `else` clause `else_body` is `Stmt::Empty`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Box<Stmt>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub location: SourceLocation,
}

/// `{ ... }`, anchored at the opening brace.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub location: SourceLocation,
}

impl Node for Stmt {
    fn get_location(&self) -> &SourceLocation {
        match self {
            Stmt::Empty(stmt) => &stmt.location,
            Stmt::Expression(stmt) => stmt.expression.get_location(),
            Stmt::Assignment(stmt) => &stmt.location,
            Stmt::Declaration(stmt) => &stmt.location,
            Stmt::If(stmt) => &stmt.location,
            Stmt::While(stmt) => &stmt.location,
            Stmt::Block(stmt) => &stmt.location,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Empty(_) => write!(f, "Empty[]"),
            Stmt::Expression(stmt) => write!(f, "ExpressionStatement[{}]", stmt.expression),
            Stmt::Assignment(stmt) => write!(f, "Assignment[{}, {}]", stmt.assignee, stmt.value),
            Stmt::Declaration(stmt) => {
                write!(f, "Declaration[{}, {}]", stmt.identifier, stmt.explicit_type)
            }
            Stmt::If(stmt) => write!(
                f,
                "If[{}, {}, {}]",
                stmt.condition, stmt.then_body, stmt.else_body
            ),
            Stmt::While(stmt) => write!(f, "While[{}, {}]", stmt.condition, stmt.body),
            Stmt::Block(stmt) => write!(f, "Block[{}]", join(&stmt.body)),
        }
    }
}
