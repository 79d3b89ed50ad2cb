/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Stmt` and `Expr` sum types
/// - expressions: Definitions for the expression node structs
/// - statements: Definitions for the statement node structs and `Program`
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
