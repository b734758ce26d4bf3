/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait shared by every node family
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
/// - types: Definitions for type annotations and their sizes
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
