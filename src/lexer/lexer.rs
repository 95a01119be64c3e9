use lazy_static::lazy_static;
use regex::Regex;

use crate::{ast::nodes::TemplateKind, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Rules for `LexerMode::Default`, tried in order. Every pattern is anchored.
    static ref DEFAULT_PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//[^\\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^/\\*\\*/").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^/\\*\\*").unwrap(), handler: doc_comment_handler },
        RegexPattern { regex: Regex::new("^/\\*").unwrap(), handler: comment_handler },
        RegexPattern { regex: Regex::new("^\\{template\\s+[^}]+\\}").unwrap(), handler: basic_template_handler },
        RegexPattern { regex: Regex::new("^\\{deltemplate\\s+[^}]+\\}").unwrap(), handler: delegate_template_handler },
        RegexPattern { regex: Regex::new("^\\{delpackage").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::DelPackage, "{delpackage") },
        RegexPattern { regex: Regex::new("^\\{namespace").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Namespace, "{namespace") },
        RegexPattern { regex: Regex::new("^\\{alias").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Alias, "{alias") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        // No escapes: an embedded quote ends the literal.
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern {
            regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*(\\s*\\.\\s*[a-zA-Z_][a-zA-Z0-9_]*)*").unwrap(),
            handler: symbol_handler,
        },
    ];
}

/// The lexical state. Transitions happen only on literal matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerMode {
    Default,
    /// Inside `/* ... */`; discarded.
    MultilineComment,
    /// Inside `/** ... */`; captured as the pending doc comment.
    DocComment,
    /// After a template open tag, until the matching closer.
    TemplateBody(TemplateKind),
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    mode: LexerMode,
    /// Where the construct spanning several modes (comment, template) began.
    token_start: usize,
    pending_doc_comment: Option<String>,
    line_starts: Vec<usize>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(idx, _)| idx + 1));

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            mode: LexerMode::Default,
            token_start: 0,
            pending_doc_comment: None,
            line_starts,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn mode(&self) -> LexerMode {
        self.mode
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Emits an ordinary token, attaching and clearing the pending doc comment.
    pub fn push(&mut self, mut token: Token) {
        token.doc_comment = self.pending_doc_comment.take();
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position_at(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|start| *start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self.source[line_start..offset].chars().count() + 1;

        Position {
            offset: offset as u32,
            line: line as u32,
            column: column as u32,
        }
    }

    /// The span of `source[start..end]`, ending on its last character.
    pub fn span_of(&self, start: usize, end: usize) -> Span {
        let last = self.source[start..end]
            .char_indices()
            .last()
            .map(|(idx, _)| start + idx)
            .unwrap_or(start);

        Span {
            start: self.position_at(start),
            end: self.position_at(last),
        }
    }

    fn lex_default(&mut self) {
        let remaining = self.remainder();

        for pattern in DEFAULT_PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(remaining) {
                (pattern.handler)(self, matched.as_str());
                return;
            }
        }

        let len = self.at().map(char::len_utf8).unwrap_or(1);
        let span = self.span_of(self.pos, self.pos + len);
        self.push(MK_TOKEN!(
            TokenKind::Unexpected,
            String::from(&remaining[..len]),
            span
        ));
        self.advance_n(len);
    }

    fn skip_comment(&mut self) {
        match self.remainder().find("*/") {
            Some(end) => {
                self.advance_n(end + 2);
                self.mode = LexerMode::Default;
            }
            None => self.unterminated(),
        }
    }

    fn capture_doc_comment(&mut self) {
        match self.remainder().find("*/") {
            Some(end) => {
                self.advance_n(end + 2);
                // A later doc comment replaces an earlier one.
                self.pending_doc_comment = Some(String::from(&self.source[self.token_start..self.pos]));
                self.mode = LexerMode::Default;
            }
            None => self.unterminated(),
        }
    }

    fn capture_template(&mut self, kind: TemplateKind) {
        let closer = kind.close_tag();

        match self.remainder().find(closer) {
            Some(end) => {
                self.advance_n(end + closer.len());
                let span = self.span_of(self.token_start, self.pos);
                let token_kind = match kind {
                    TemplateKind::Basic => TokenKind::BasicTemplate,
                    TemplateKind::Delegate => TokenKind::DelegateTemplate,
                };
                self.push(MK_TOKEN!(
                    token_kind,
                    String::from(&self.source[self.token_start..self.pos]),
                    span
                ));
                self.mode = LexerMode::Default;
            }
            None => self.unterminated(),
        }
    }

    /// End of input inside a comment or template body: the rest becomes one unexpected token.
    fn unterminated(&mut self) {
        let end = self.source.len();
        let span = self.span_of(self.token_start, end);
        self.push(MK_TOKEN!(
            TokenKind::Unexpected,
            String::from(&self.source[self.token_start..end]),
            span
        ));
        self.pos = end;
        self.mode = LexerMode::Default;
    }

    fn finish(mut self) -> Vec<Token> {
        // A doc comment with nothing after it is dropped.
        self.pending_doc_comment = None;

        let position = self.position_at(self.source.len());
        self.tokens.push(MK_TOKEN!(
            TokenKind::EOF,
            String::from("EOF"),
            Span {
                start: position,
                end: position
            }
        ));
        self.tokens
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn comment_handler(lexer: &mut Lexer, matched: &str) {
    lexer.token_start = lexer.pos;
    lexer.advance_n(matched.len());
    lexer.mode = LexerMode::MultilineComment;
}

fn doc_comment_handler(lexer: &mut Lexer, matched: &str) {
    lexer.token_start = lexer.pos;
    lexer.advance_n(matched.len());
    lexer.mode = LexerMode::DocComment;
}

fn basic_template_handler(lexer: &mut Lexer, matched: &str) {
    lexer.token_start = lexer.pos;
    lexer.advance_n(matched.len());
    lexer.mode = LexerMode::TemplateBody(TemplateKind::Basic);
}

fn delegate_template_handler(lexer: &mut Lexer, matched: &str) {
    lexer.token_start = lexer.pos;
    lexer.advance_n(matched.len());
    lexer.mode = LexerMode::TemplateBody(TemplateKind::Delegate);
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    let string_literal = String::from(&matched[1..matched.len() - 1]);
    let span = lexer.span_of(lexer.pos, lexer.pos + matched.len());

    lexer.push(MK_TOKEN!(TokenKind::String, string_literal, span));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span_of(lexer.pos, lexer.pos + matched.len());

    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        lexer.push(MK_TOKEN!(*kind, String::from(matched), span));
    } else {
        let value: String = matched.chars().filter(|c| !c.is_whitespace()).collect();
        lexer.push(MK_TOKEN!(TokenKind::DottedIdent, value, span));
    }

    lexer.advance_n(matched.len());
}

/// Splits a whole file into header tokens, ending with exactly one EOF token.
///
/// Never fails: characters no rule accepts come out as `TokenKind::Unexpected`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        match lex.mode() {
            LexerMode::Default => lex.lex_default(),
            LexerMode::MultilineComment => lex.skip_comment(),
            LexerMode::DocComment => lex.capture_doc_comment(),
            LexerMode::TemplateBody(kind) => lex.capture_template(kind),
        }
    }

    // Input ended right after an opener (`/*`, `/**`, or a template open tag).
    if lex.mode != LexerMode::Default {
        lex.unterminated();
    }

    lex.finish()
}
