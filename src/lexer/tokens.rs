use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("autoescape", TokenKind::Autoescape);
        map.insert("requirecss", TokenKind::RequireCss);
        map.insert("cssbase", TokenKind::CssBase);
        map.insert("as", TokenKind::As);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    /// A single character (or unterminated construct) that no rule accepts.
    Unexpected,

    DottedIdent,
    String, // quotes stripped

    CloseCurly,
    Assignment, // =

    // Outer tags
    DelPackage, // {delpackage
    Namespace,  // {namespace
    Alias,      // {alias

    // A whole template: open tag, body and closer in one token
    BasicTemplate,    // {template ...}...{/template}
    DelegateTemplate, // {deltemplate ...}...{/deltemplate}

    // Reserved
    Autoescape,
    RequireCss,
    CssBase,
    As,
}

impl TokenKind {
    pub fn is_attribute_key(&self) -> bool {
        matches!(
            self,
            TokenKind::Autoescape | TokenKind::RequireCss | TokenKind::CssBase
        )
    }

    pub fn is_template(&self) -> bool {
        matches!(self, TokenKind::BasicTemplate | TokenKind::DelegateTemplate)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    /// The `/** ... */` comment that was pending when this token was emitted.
    pub doc_comment: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// The text to quote in a syntax error. Template tokens are cut down to their open tag.
    pub fn display_text(&self) -> &str {
        match self.kind {
            TokenKind::EOF => "end of file",
            TokenKind::BasicTemplate | TokenKind::DelegateTemplate => {
                match self.value.find('}') {
                    Some(end) => &self.value[..=end],
                    None => &self.value,
                }
            }
            TokenKind::Unexpected => self.value.lines().next().unwrap_or(""),
            _ => &self.value,
        }
    }
}
