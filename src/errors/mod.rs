//! Error types and diagnostic reporting for the parser.
//!
//! - `errors`: typed header-grammar errors and Body Parser failures
//! - `diagnostics`: message templates, the `ErrorReporter` sink and its
//!   in-memory implementation

pub mod diagnostics;
pub mod errors;
