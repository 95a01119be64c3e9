//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed literals

/// Creates a Token instance with no doc comment attached.
///
/// The lexer attaches any pending doc comment when the token is pushed.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::CloseCurly, "}".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
            doc_comment: None,
        }
    };
}

/// Creates a default lexer handler for a fixed literal.
///
/// Generates a handler that emits a token with the given kind and
/// advances the lexer past the literal.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\}").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer<'_>, _matched: &str| {
            let start = lexer.pos();
            let span = lexer.span_of(start, start + $value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
        }
    };
}
