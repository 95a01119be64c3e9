//! Templates: split the captured token, hand the body to the body parser
//! and move any failure back into file coordinates.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{
    ast::nodes::{TemplateKind, TemplateNode},
    errors::{diagnostics::TEMPLATE_BODY_FAILURE, errors::Error},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

lazy_static! {
    static ref LINE_NUMBER: Regex = Regex::new("line (\\d+)").unwrap();
}

/// Template := OpenBasicCaptured | OpenDelegateCaptured
///
/// A body that fails to parse is reported and leaves the node without
/// header or body; it never stops the rest of the file from parsing.
pub fn parse_template(parser: &mut Parser, namespace: Option<&str>) -> Result<TemplateNode, Error> {
    let kind = match parser.current_token_kind() {
        TokenKind::BasicTemplate => TemplateKind::Basic,
        TokenKind::DelegateTemplate => TemplateKind::Delegate,
        _ => return Err(parser.unexpected("{template or {deltemplate")),
    };

    let token = parser.advance().clone();
    let location = parser.location_of(&token);

    let mut template = TemplateNode::new(
        parser.advance_id(),
        kind,
        command_text(&token.value, kind),
        token.doc_comment,
        location.clone(),
        namespace,
    );

    let start = token.span.start;
    match parser.parse_body(body_text(&token.value), start.line, start.column) {
        Ok(parsed) => {
            template.header = Some(parsed.header);
            template.body = Some(parsed.body);
        }
        Err(error) => {
            let message = remap_line_number(error.message(), start.line);
            let file = parser.file().to_string();
            parser.report(
                location,
                &TEMPLATE_BODY_FAILURE,
                &[file.as_str(), template.display_name(), message.as_str()],
            );
        }
    }

    Ok(template)
}

/// The name and attributes between the template keyword and the `}` ending the open tag.
pub fn command_text(template_text: &str, kind: TemplateKind) -> String {
    let open_tag = match template_text.find('}') {
        Some(end) => &template_text[..end],
        None => template_text,
    };

    let command = open_tag.strip_prefix(kind.open_tag()).unwrap_or(open_tag);
    String::from(command.trim())
}

/// Everything after the open tag and before the closing tag.
///
/// The closer is removed by cutting at the last `{` in the text.
pub fn body_text(template_text: &str) -> &str {
    let body_start = template_text.find('}').map(|end| end + 1).unwrap_or(0);
    let body_end = template_text.rfind('{').unwrap_or(template_text.len());

    if body_end <= body_start {
        return "";
    }

    &template_text[body_start..body_end]
}

/// Shifts the first `line N` in `message` by `line_offset`. Columns are not adjusted,
/// and a line number that would not fit is left as written.
pub fn remap_line_number(message: &str, line_offset: u32) -> String {
    LINE_NUMBER
        .replacen(message, 1, |caps: &Captures| {
            caps[1]
                .parse::<u64>()
                .ok()
                .and_then(|line| line.checked_add(u64::from(line_offset)))
                .map(|line| format!("line {}", line))
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
