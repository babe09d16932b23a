//! Diagnostics for the scholarly search query parser.
//!
//! Malformed *user* input is never an error — it surfaces as a `MalformedQueryWords` leaf in the
//! tree (see `crate::ast::QueryItem::Malformed`). [`ParseError`] exists only for the narrow set
//! of genuinely fatal, programmer-facing misuses described on [`ParseError::EmptyTokenStream`].

use miette::Diagnostic;
use thiserror::Error;

/// Fatal, non-user-facing parser errors.
///
/// ## Notes
/// - `query_syntax::parse` never returns this: it always lexes at least an `Eof` token before
///   constructing a [`crate::parser::Parser`].
/// - This exists for callers that build a [`crate::parser::Parser`] directly from a hand-rolled
///   token slice (e.g. in tests or tooling) and hand it an empty one.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("parser was constructed with an empty token stream (expected at least an Eof token)")]
    #[diagnostic(code(query_syntax::empty_token_stream))]
    EmptyTokenStream,
}
