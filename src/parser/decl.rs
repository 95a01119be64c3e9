use std::sync::Arc;

use crate::{
    ast::nodes::{AliasDeclaration, Attribute, FileKind, NamespaceDeclaration, SourceFileNode},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, template::parse_template};

/// File := [DelegatePackage] [Namespace] Alias* Template* EOF
///
/// Ordering is enforced only by the sequence of the rules: a tag that
/// shows up after its slot has passed is an ordinary unexpected token.
pub fn parse_source_file(parser: &mut Parser, file_kind: FileKind) -> Result<SourceFileNode, Error> {
    // The file node's id comes before any template id.
    let id = parser.advance_id();

    let delegate_package = if parser.current_token_kind() == TokenKind::DelPackage {
        Some(parse_delpackage(parser)?)
    } else {
        None
    };

    let namespace = if parser.current_token_kind() == TokenKind::Namespace {
        Some(parse_namespace(parser)?)
    } else {
        None
    };

    let mut aliases = Vec::new();
    while parser.current_token_kind() == TokenKind::Alias {
        aliases.push(parse_alias(parser)?);
    }

    let namespace_name = namespace.as_ref().map(|namespace| namespace.name.clone());
    let mut templates = Vec::new();
    while parser.current_token_kind().is_template() {
        templates.push(parse_template(parser, namespace_name.as_deref())?);
    }

    if parser.has_tokens() {
        let expected = if !templates.is_empty() {
            "a template or end of file"
        } else if namespace.is_some() || !aliases.is_empty() {
            "{alias, a template or end of file"
        } else if delegate_package.is_some() {
            "{namespace, {alias, a template or end of file"
        } else {
            "{delpackage, {namespace, {alias, a template or end of file"
        };
        return Err(parser.unexpected(expected));
    }

    Ok(SourceFileNode {
        id,
        file_path: Arc::clone(parser.file()),
        file_kind,
        delegate_package,
        namespace,
        aliases,
        templates,
    })
}

/// DelegatePackage := '{delpackage' DottedIdent '}'
pub fn parse_delpackage(parser: &mut Parser) -> Result<String, Error> {
    parser.expect(TokenKind::DelPackage, "{delpackage")?;
    let name = parser.expect(TokenKind::DottedIdent, "a delegate package name")?.value;
    parser.expect(TokenKind::CloseCurly, "}")?;

    Ok(name)
}

/// Namespace := '{namespace' DottedIdent Attribute* '}'
pub fn parse_namespace(parser: &mut Parser) -> Result<NamespaceDeclaration, Error> {
    let start = parser.expect(TokenKind::Namespace, "{namespace")?;
    let name = parser.expect(TokenKind::DottedIdent, "a namespace name")?.value;

    let mut attributes = Vec::new();
    while parser.current_token_kind().is_attribute_key() {
        attributes.push(parse_attribute(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly, "an attribute or }")?;

    Ok(NamespaceDeclaration {
        name,
        attributes,
        location: parser.location_between(&start, &end),
    })
}

/// Attribute := ('autoescape' | 'requirecss' | 'cssbase') '=' QuotedString
pub fn parse_attribute(parser: &mut Parser) -> Result<Attribute, Error> {
    if !parser.current_token_kind().is_attribute_key() {
        return Err(parser.unexpected("autoescape, requirecss or cssbase"));
    }

    let name = parser.advance().value.clone();
    parser.expect(TokenKind::Assignment, "=")?;
    let value = parser.expect(TokenKind::String, "a quoted attribute value")?.value;

    Ok(Attribute { name, value })
}

/// Alias := '{alias' DottedIdent ['as' DottedIdent] '}'
pub fn parse_alias(parser: &mut Parser) -> Result<AliasDeclaration, Error> {
    let start = parser.expect(TokenKind::Alias, "{alias")?;
    let target = parser.expect(TokenKind::DottedIdent, "an aliased namespace")?.value;

    let local_name = if parser.current_token_kind() == TokenKind::As {
        parser.advance();
        Some(parser.expect(TokenKind::DottedIdent, "an alias name")?.value)
    } else {
        None
    };

    let expected = if local_name.is_some() { "}" } else { "as or }" };
    let end = parser.expect(TokenKind::CloseCurly, expected)?;

    Ok(AliasDeclaration {
        target,
        local_name,
        location: parser.location_between(&start, &end),
    })
}
