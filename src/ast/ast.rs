use std::fmt::{Debug, Display};

use crate::SourceLocation;

/// Node Trait
///
/// Implemented by the three node families (`Stmt`, `Expr`, `Type`). Each
/// family is a closed enum, so consumers match on it exhaustively; this trait
/// only covers what every node has in common.
pub trait Node: Debug + Display {
    /// Returns the location the node is anchored at.
    ///
    /// Composite expressions delegate to a child instead of storing their own.
    fn get_location(&self) -> &SourceLocation;
}

/// Joins rendered nodes with `", "`, as used inside the bracketed notation.
pub(crate) fn join<T: Display>(nodes: &[T]) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
