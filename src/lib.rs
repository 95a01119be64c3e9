#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

use crate::{errors::diagnostics::Diagnostic, lexer::tokens::Token};

pub mod ast;
pub mod body;
pub mod errors;
pub mod ids;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use parser::parser::{parse_file, ParseOutcome};

extern crate regex;

/// A point in the source text. Lines and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

/// The extent of a token. `end` is the position of the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A file path plus begin/end line and column, as exposed on nodes and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file_path: Arc<String>,
    pub begin_line: u32,
    pub begin_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl SourceLocation {
    /// A location that only names the file, for problems not tied to any token.
    pub fn unknown(file_path: Arc<String>) -> Self {
        SourceLocation {
            file_path,
            begin_line: 0,
            begin_column: 0,
            end_line: 0,
            end_column: 0,
        }
    }

    pub fn from_span(file_path: Arc<String>, span: &Span) -> Self {
        SourceLocation {
            file_path,
            begin_line: span.start.line,
            begin_column: span.start.column,
            end_line: span.end.line,
            end_column: span.end.column,
        }
    }

    pub fn from_token(file_path: Arc<String>, token: &Token) -> Self {
        Self::from_span(file_path, &token.span)
    }

    /// Covers everything from the start of `first` to the end of `last`.
    pub fn from_tokens(file_path: Arc<String>, first: &Token, last: &Token) -> Self {
        SourceLocation {
            file_path,
            begin_line: first.span.start.line,
            begin_column: first.span.start.column,
            end_line: last.span.end.line,
            end_column: last.span.end.column,
        }
    }

    pub fn is_known(&self) -> bool {
        self.begin_line > 0
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_known() {
            write!(f, "{}:{}:{}", self.file_path, self.begin_line, self.begin_column)
        } else {
            write!(f, "{}", self.file_path)
        }
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


pub fn display_diagnostic(diagnostic: &Diagnostic, source: &str) {
    /*
        Error: message
        -> foo.soy:20:9
           |
        20 | {namespace a.b unknown="x"}
           | ---------------^
    */

    let location = &diagnostic.location;

    match &diagnostic.tip {
        Some(tip) => println!("Error: {} ({})", diagnostic.message, tip),
        None => println!("Error: {}", diagnostic.message),
    }
    println!("-> {}", location);

    let line_text = match get_line_at_position(source, location.begin_line) {
        Some(text) => text,
        None => return,
    };

    let line_string = location.begin_line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let column = location.begin_column as usize;
    let arrows = column.saturating_sub(removed_whitespace).max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
