//! The seam between the file parser and the parser for template bodies.
//!
//! The file parser cuts each template's body out of the file and hands it
//! to a `BodyParser` together with the position of the template's open
//! tag. Whatever the body parser returns is attached to the template node;
//! its failures are turned into diagnostics by the caller.

use std::sync::Arc;

use crate::{
    ast::{ast::NodeWrapper, nodes::RawTextNode},
    errors::{diagnostics::ErrorReporter, errors::BodyParseError},
    ids::IdGenerator,
    SourceLocation,
};

/// What a body parser produces for one template.
#[derive(Debug, Clone, Default)]
pub struct ParsedBody {
    pub header: Vec<NodeWrapper>,
    pub body: Vec<NodeWrapper>,
}

pub trait BodyParser {
    /// Parses one template body.
    ///
    /// `start_line` and `start_column` are where the template's open tag
    /// begins in the file. Implementations may report through `reporter`
    /// directly, but a returned `Err` is reported by the caller.
    fn parse_body(
        &self,
        body_text: &str,
        file_path: &Arc<String>,
        start_line: u32,
        start_column: u32,
        id_gen: &mut IdGenerator,
        reporter: &mut dyn ErrorReporter,
    ) -> Result<ParsedBody, BodyParseError>;
}

/// Keeps the whole body as a single raw-text node and declares nothing.
///
/// The node's location is approximate. It begins at the template's open tag,
/// since only the tag's start is known here, and the end column of a body
/// that stays on the open tag's line is measured from that same point.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawTextBodyParser;

impl BodyParser for RawTextBodyParser {
    fn parse_body(
        &self,
        body_text: &str,
        file_path: &Arc<String>,
        start_line: u32,
        start_column: u32,
        id_gen: &mut IdGenerator,
        _reporter: &mut dyn ErrorReporter,
    ) -> Result<ParsedBody, BodyParseError> {
        if body_text.is_empty() {
            return Ok(ParsedBody::default());
        }

        let newlines = body_text.matches('\n').count() as u32;
        let last_line = body_text.rsplit('\n').next().unwrap_or(body_text);
        let end_column = if newlines == 0 {
            start_column + last_line.chars().count() as u32 - 1
        } else {
            last_line.chars().count().max(1) as u32
        };

        let node = RawTextNode {
            id: id_gen.gen_id(),
            text: String::from(body_text),
            location: SourceLocation {
                file_path: Arc::clone(file_path),
                begin_line: start_line,
                begin_column: start_column,
                end_line: start_line + newlines,
                end_column,
            },
        };

        Ok(ParsedBody {
            header: vec![],
            body: vec![NodeWrapper::new(node)],
        })
    }
}
