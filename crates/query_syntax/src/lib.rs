//! Lexer, AST, and grammar engine for the scholarly search query parser.
//!
//! The grammar recognizes two overlapping keyword dialects — SPIRES-style whitespace-prefixed
//! keywords (`author ellis`) and Invenio-style colon-delimited keywords (`author:ellis`) — plus
//! free text, boolean connectives, negation, grouping, ranges, comparisons, and nested
//! meta-relations (`citedby:...`). Malformed input is never rejected outright: whatever the
//! grammar can't place surfaces as a [`ast::QueryItem::Malformed`] leaf alongside whatever did
//! parse.
//!
//! ```
//! use query_syntax::parse;
//!
//! let query = parse("author ellis and title higgs");
//! assert_eq!(query.0.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
mod lexer;
mod parser;

pub use ast::Query;
pub use parser::parse;
