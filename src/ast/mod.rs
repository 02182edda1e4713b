/// AST (Abstract Syntax Tree) module
/// Contains the immutable tree produced by a parse
///
/// Submodules:
/// - ast: The Expr and Stmt sum types, the SourceFile root and labeled access
/// - expressions: Expression nodes and operators
/// - statements: Assignment and expression statements
pub mod ast;
pub mod expressions;
pub mod statements;
