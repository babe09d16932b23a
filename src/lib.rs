#![forbid(unsafe_code)]
//! Scholarly-literature search query parser.
//!
//! Converts end-user search strings — the hybrid SPIRES keyword-prefix dialect and the Invenio
//! colon-delimited dialect, free text, booleans, negation, grouping, ranges/comparisons, and
//! nested meta-relations — into a structured query tree, grounded on the grammar engine in
//! [`query_syntax`].
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result`/`Option` with `?`, never `.unwrap()`/`.expect()` outside tests.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable.
//! - **True invariants**: a panic that would mean a bug in this crate uses
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub use query_syntax::ast;
pub use query_syntax::diagnostics;
pub use query_syntax::{parse, Query};
