//! Parser module for building the file-level tree.
//!
//! This module contains the recursive-descent parser that turns the
//! header token stream into a `SourceFileNode`:
//!
//! - `parser`: parser state, token helpers and the `parse_file` entry point
//! - `decl`: the file production and the delpackage, namespace and alias rules
//! - `template`: template nodes, body delegation and line-number remapping

pub mod decl;
pub mod parser;
pub mod template;
