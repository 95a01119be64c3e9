//! Lexical analysis for the file level of a template file.
//!
//! The lexer is modal: in its default mode it recognizes the outer tags,
//! dotted identifiers, quoted attribute values and comments. A template
//! open tag switches it into a mode that swallows the whole template, up
//! to and including the closing tag, as a single token. Doc comments are
//! not emitted as tokens; they ride along on the next token instead.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
