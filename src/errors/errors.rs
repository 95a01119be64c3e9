use std::fmt::Display;

use thiserror::Error;

use crate::SourceLocation;

/// A header-grammar failure. Fatal for the file that raised it.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    location: SourceLocation,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: SourceLocation) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } if token.starts_with("{template") => {
                ErrorTip::Suggestion(String::from("Template is missing its {/template} closing tag"))
            }
            ErrorImpl::UnrecognisedToken { token } if token.starts_with("{deltemplate") => {
                ErrorTip::Suggestion(String::from(
                    "Template is missing its {/deltemplate} closing tag",
                ))
            }
            ErrorImpl::UnrecognisedToken { token } if token.starts_with("/*") => {
                ErrorTip::Suggestion(String::from("Comment is missing its closing */"))
            }
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                token, expected
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl ErrorTip {
    pub fn suggestion(self) -> Option<String> {
        match self {
            ErrorTip::None => None,
            ErrorTip::Suggestion(suggestion) => Some(suggestion),
        }
    }
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised input {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token {token:?} (expected {expected})")]
    UnexpectedToken { token: String, expected: String },
}

/// The ways a Body Parser can fail. Each carries the parser's own message,
/// which may mention a position as `line N, column M` relative to the body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BodyParseError {
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Lexer(String),
    #[error("{0}")]
    LegacySyntax(String),
}

impl BodyParseError {
    pub fn message(&self) -> &str {
        match self {
            BodyParseError::Parse(message)
            | BodyParseError::Lexer(message)
            | BodyParseError::LegacySyntax(message) => message,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            BodyParseError::Parse(_) => "ParseError",
            BodyParseError::Lexer(_) => "LexerError",
            BodyParseError::LegacySyntax(_) => "LegacySyntaxError",
        }
    }
}
