//! Unit tests for the lexer module.
//!
//! Covers the outer tags, dotted identifiers, attribute values, comments,
//! doc-comment attachment, whole-template capture, positions and the
//! "unexpected" token for input no rule accepts.

use super::{
    lexer::{tokenize, Lexer, LexerMode},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_header_tags() {
    let tokens = tokenize("{delpackage pkg}\n{namespace a.b}\n{alias x.y}\n");

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::DelPackage,
            TokenKind::DottedIdent,
            TokenKind::CloseCurly,
            TokenKind::Namespace,
            TokenKind::DottedIdent,
            TokenKind::CloseCurly,
            TokenKind::Alias,
            TokenKind::DottedIdent,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].value, "pkg");
    assert_eq!(tokens[4].value, "a.b");
}

#[test]
fn test_tokenize_dotted_identifier_with_spaces() {
    let tokens = tokenize("boo . foo .\n goo");

    assert_eq!(tokens[0].kind, TokenKind::DottedIdent);
    assert_eq!(tokens[0].value, "boo.foo.goo");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_reserved_words() {
    assert_eq!(
        kinds("autoescape requirecss cssbase as"),
        vec![
            TokenKind::Autoescape,
            TokenKind::RequireCss,
            TokenKind::CssBase,
            TokenKind::As,
            TokenKind::EOF,
        ]
    );
    // Not a reserved word, just a name.
    assert_eq!(kinds("unknownattr"), vec![TokenKind::DottedIdent, TokenKind::EOF]);
}

#[test]
fn test_tokenize_attribute() {
    let tokens = tokenize("autoescape=\"strict\"");

    assert_eq!(tokens[0].kind, TokenKind::Autoescape);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "strict");
}

#[test]
fn test_tokenize_string_ends_at_embedded_quote() {
    let tokens = tokenize(r#""a\"b""#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\\");
    assert_eq!(tokens[1].kind, TokenKind::DottedIdent);
    assert_eq!(tokens[1].value, "b");
    assert_eq!(tokens[2].kind, TokenKind::Unexpected);
    assert_eq!(tokens[2].value, "\"");
}

#[test]
fn test_tokenize_comments_are_skipped() {
    let source = "// line comment\n/* block\n comment */ {alias a} /**/ // trailing";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Alias,
            TokenKind::DottedIdent,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_captures_whole_template() {
    let source = "{template .foo}\n  Hello {$name}!\n{/template}\n";
    let tokens = tokenize(source);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::BasicTemplate);
    assert_eq!(tokens[0].value, "{template .foo}\n  Hello {$name}!\n{/template}");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_captures_delegate_template() {
    let source = "{deltemplate my.button variant=\"'x'\"}\n{/template}\n{/deltemplate}";
    let tokens = tokenize(source);

    // A basic closer does not end a delegate template.
    assert_eq!(tokens[0].kind, TokenKind::DelegateTemplate);
    assert!(tokens[0].value.ends_with("{/template}\n{/deltemplate}"));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_template_without_name_is_unexpected() {
    assert_eq!(kinds("{template}")[0], TokenKind::Unexpected);
    assert_eq!(kinds("{templatex .a}")[0], TokenKind::Unexpected);
}

#[test]
fn test_tokenize_unterminated_template() {
    let tokens = tokenize("{template .foo}\nbody with no end\n");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Unexpected);
    assert!(tokens[0].value.starts_with("{template .foo}"));
    assert_eq!(tokens[0].display_text(), "{template .foo}");
}

#[test]
fn test_tokenize_unterminated_comment() {
    let tokens = tokenize("{alias a} /* no end");

    assert_eq!(tokens[3].kind, TokenKind::Unexpected);
    assert_eq!(tokens[3].value, "/* no end");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unexpected_characters() {
    let tokens = tokenize("{namespace a.b} @ é");

    assert_eq!(tokens[3].kind, TokenKind::Unexpected);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[4].kind, TokenKind::Unexpected);
    assert_eq!(tokens[4].value, "é");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_doc_comment_attaches_to_next_token() {
    let source = "/** Says hello. */\n{template .hello}hi{/template}";
    let tokens = tokenize(source);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].doc_comment.as_deref(), Some("/** Says hello. */"));
}

#[test]
fn test_doc_comment_attaches_to_any_ordinary_token() {
    let tokens = tokenize("/** Not for a template. */ {alias a}");

    assert_eq!(tokens[0].kind, TokenKind::Alias);
    assert!(tokens[0].doc_comment.is_some());
    assert!(tokens[1].doc_comment.is_none());
}

#[test]
fn test_nearer_doc_comment_wins() {
    let source = "/** first */\n/** second */\n{template .a}{/template}";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].doc_comment.as_deref(), Some("/** second */"));
}

#[test]
fn test_doc_comment_at_end_of_input_is_dropped() {
    let tokens = tokenize("{alias a}\n/** dangling */\n");

    assert_eq!(tokens.len(), 4);
    assert!(tokens.iter().all(|token| token.doc_comment.is_none()));
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("{namespace a}\n\n  {template .b}\nx\n{/template}");

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[0].span.end.column, 10);
    assert_eq!(tokens[1].span.start.column, 12);

    let template = &tokens[3];
    assert_eq!(template.kind, TokenKind::BasicTemplate);
    assert_eq!(template.span.start.line, 3);
    assert_eq!(template.span.start.column, 3);
    assert_eq!(template.span.end.line, 5);
    assert_eq!(template.span.end.column, 11);
}

#[test]
fn test_lexer_starts_in_default_mode() {
    let lexer = Lexer::new("{namespace a}");

    assert_eq!(lexer.mode(), LexerMode::Default);
    assert_eq!(lexer.pos(), 0);
    assert!(!lexer.at_eof());
    assert_eq!(lexer.at(), Some('{'));
}

#[test]
fn test_tokenize_empty_input() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}
