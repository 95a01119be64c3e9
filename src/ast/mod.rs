/// AST (Abstract Syntax Tree) module
/// Contains the file-level node types built by the parser
///
/// Submodules:
/// - ast: The node trait and wrapper for nodes owned by a body parser
/// - nodes: Source file, namespace, alias, attribute and template nodes
pub mod ast;
pub mod nodes;
