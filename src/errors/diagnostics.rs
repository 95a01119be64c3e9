use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{errors::errors::ErrorTip, SourceLocation};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new("\\{(\\d+)\\}").unwrap();
}

/// A message with positional `{0}`, `{1}`, ... slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTemplate {
    pub name: &'static str,
    pub format: &'static str,
}

impl MessageTemplate {
    pub const fn new(name: &'static str, format: &'static str) -> Self {
        MessageTemplate { name, format }
    }

    /// Fills the slots in one pass; slots without an argument are left as written.
    pub fn format(&self, args: &[&str]) -> String {
        PLACEHOLDER
            .replace_all(self.format, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|idx| args.get(idx))
                    .map(|arg| arg.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

pub const SYNTAX_ERROR: MessageTemplate = MessageTemplate::new("SyntaxError", "{0}");

pub const TEMPLATE_BODY_FAILURE: MessageTemplate =
    MessageTemplate::new("TemplateBodyFailure", "In file {0}, template {1}: {2}");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub name: &'static str,
    pub location: SourceLocation,
    pub message: String,
    pub tip: Option<String>,
}

/// A mark in a reporter's history; see `ErrorReporter::errors_since`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Where parse problems go. Shared across many parse calls; not synchronized.
pub trait ErrorReporter {
    fn checkpoint(&self) -> Checkpoint;
    /// Whether anything was reported after `checkpoint` was taken.
    fn errors_since(&self, checkpoint: &Checkpoint) -> bool;
    fn report(&mut self, location: SourceLocation, template: &MessageTemplate, args: &[&str]);

    /// Like `report`, with a hint for fixing the problem. Reporters that
    /// cannot keep the hint drop it.
    fn report_with_tip(
        &mut self,
        location: SourceLocation,
        template: &MessageTemplate,
        args: &[&str],
        _tip: ErrorTip,
    ) {
        self.report(location, template, args);
    }
}

/// An in-memory reporter that keeps every diagnostic in order.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn since(&self, checkpoint: &Checkpoint) -> &[Diagnostic] {
        &self.diagnostics[checkpoint.0.min(self.diagnostics.len())..]
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl ErrorReporter for Diagnostics {
    fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.diagnostics.len())
    }

    fn errors_since(&self, checkpoint: &Checkpoint) -> bool {
        self.diagnostics.len() > checkpoint.0
    }

    fn report(&mut self, location: SourceLocation, template: &MessageTemplate, args: &[&str]) {
        self.report_with_tip(location, template, args, ErrorTip::None);
    }

    fn report_with_tip(
        &mut self,
        location: SourceLocation,
        template: &MessageTemplate,
        args: &[&str],
        tip: ErrorTip,
    ) {
        self.diagnostics.push(Diagnostic {
            name: template.name,
            location,
            message: template.format(args),
            tip: tip.suggestion(),
        });
    }
}
