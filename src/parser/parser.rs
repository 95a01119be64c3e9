//! Parser state and the entry point for parsing one file.
//!
//! The parser walks the header token stream with one token of lookahead
//! and no backtracking. Header-grammar failures are returned as `Error`
//! and abort the file; template bodies are parsed by a `BodyParser` and
//! their failures are reported without stopping the parse.

use std::sync::Arc;

use crate::{
    ast::nodes::{FileKind, SourceFileNode},
    body::{BodyParser, ParsedBody},
    errors::{
        diagnostics::{ErrorReporter, MessageTemplate, SYNTAX_ERROR},
        errors::{BodyParseError, Error, ErrorImpl, ErrorTip},
    },
    ids::IdGenerator,
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    SourceLocation,
};

use super::decl::parse_source_file;

/// The main parser structure that maintains parsing state.
///
/// Besides the token stream it borrows the collaborators supplied by the
/// caller for this one parse: the body parser, the id generator and the
/// error reporter.
pub struct Parser<'a> {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The path of the source file being parsed
    file: Arc<String>,
    body_parser: &'a dyn BodyParser,
    id_gen: &'a mut IdGenerator,
    reporter: &'a mut dyn ErrorReporter,
}

impl<'a> Parser<'a> {
    pub fn new(
        tokens: Vec<Token>,
        file: Arc<String>,
        body_parser: &'a dyn BodyParser,
        id_gen: &'a mut IdGenerator,
        reporter: &'a mut dyn ErrorReporter,
    ) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            body_parser,
            id_gen,
            reporter,
        }
    }

    /// Returns the current token without advancing. Past the end this is the EOF token.
    pub fn current_token(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token. Never moves past EOF.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos.min(self.tokens.len().saturating_sub(1));
        if self.current_token_kind() != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Builds the error for the current token, which is not what the grammar allows here.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();
        let error_impl = if token.kind == TokenKind::Unexpected {
            ErrorImpl::UnrecognisedToken {
                token: String::from(token.display_text()),
            }
        } else {
            ErrorImpl::UnexpectedToken {
                token: String::from(token.display_text()),
                expected: String::from(expected),
            }
        };

        Error::new(error_impl, self.location_of(token))
    }

    /// Expects a token of the specified kind; `expected` describes it in the error.
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(expected));
        }

        Ok(self.advance().clone())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn file(&self) -> &Arc<String> {
        &self.file
    }

    pub fn location_of(&self, token: &Token) -> SourceLocation {
        SourceLocation::from_token(Arc::clone(&self.file), token)
    }

    pub fn location_between(&self, first: &Token, last: &Token) -> SourceLocation {
        SourceLocation::from_tokens(Arc::clone(&self.file), first, last)
    }

    /// Takes the next id from the shared generator.
    pub fn advance_id(&mut self) -> u64 {
        self.id_gen.gen_id()
    }

    /// Runs the body parser over one template body.
    pub fn parse_body(
        &mut self,
        body_text: &str,
        start_line: u32,
        start_column: u32,
    ) -> Result<ParsedBody, BodyParseError> {
        self.body_parser.parse_body(
            body_text,
            &self.file,
            start_line,
            start_column,
            &mut *self.id_gen,
            &mut *self.reporter,
        )
    }

    pub fn report(&mut self, location: SourceLocation, template: &MessageTemplate, args: &[&str]) {
        self.reporter.report(location, template, args);
    }

    pub fn report_with_tip(
        &mut self,
        location: SourceLocation,
        template: &MessageTemplate,
        args: &[&str],
        tip: ErrorTip,
    ) {
        self.reporter.report_with_tip(location, template, args, tip);
    }
}

/// The result of one `parse_file` call.
///
/// A tree may be present even when the parse failed (for example when
/// only a template body was broken). Check `is_failed` first.
#[derive(Debug)]
pub struct ParseOutcome {
    pub file: Option<SourceFileNode>,
    failed: bool,
}

impl ParseOutcome {
    /// Whether any diagnostic was reported during this parse.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// The tree, only if the parse succeeded.
    pub fn into_result(self) -> Option<SourceFileNode> {
        if self.failed {
            None
        } else {
            self.file
        }
    }
}

/// Parses the full text of one file.
///
/// Every problem ends up in `reporter`; success is decided solely by
/// whether anything was reported during this call.
pub fn parse_file(
    source: &str,
    file_path: &str,
    file_kind: FileKind,
    body_parser: &dyn BodyParser,
    id_gen: &mut IdGenerator,
    reporter: &mut dyn ErrorReporter,
) -> ParseOutcome {
    let checkpoint = reporter.checkpoint();
    let file = Arc::new(String::from(file_path));

    let tokens = tokenize(source);
    let mut parser = Parser::new(tokens, file, body_parser, id_gen, &mut *reporter);

    let file_node = match parse_source_file(&mut parser, file_kind) {
        Ok(node) => Some(node),
        Err(error) => {
            let message = error.to_string();
            parser.report_with_tip(
                error.get_location().clone(),
                &SYNTAX_ERROR,
                &[message.as_str()],
                error.get_tip(),
            );
            None
        }
    };

    ParseOutcome {
        file: file_node,
        failed: reporter.errors_since(&checkpoint),
    }
}
