/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: the `AstNode` enum and its node-type tags
/// - expressions: operators, calls, constants, names and collection literals
/// - statements: blocks, control flow and definitions
/// - types: type descriptors as written in source
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
