//! Canonical keyword and nestable-relation vocabulary for the scholarly search query parser.
//!
//! This crate is intentionally small and dependency-free, in the spirit of a registry-first
//! vocabulary module: a stable identifier ([`KeywordId`]) plus a `const` metadata table
//! ([`KEYWORDS`]) mapping every surface spelling (alias or canonical) to it.
//!
//! ## Notes
//! - Lookup via [`lookup_alias`] is case-insensitive.
//! - `ac` is deliberately ambiguous between [`KeywordId::ExactAuthor`] and
//!   [`KeywordId::AuthorCount`] (see the alias table). [`lookup_alias`] resolves it by table
//!   order (exact-author wins); callers that need the author-count reading for a numeric value
//!   do so explicitly — see `query_syntax`'s keyword-query production.
//! - This registry is pure: no IO, no global state.
//!
//! ## Examples
//! ```rust
//! use query_vocab::{lookup_alias, KeywordId};
//!
//! assert_eq!(lookup_alias("au"), Some(KeywordId::Author));
//! assert_eq!(lookup_alias("AU"), Some(KeywordId::Author));
//! assert_eq!(lookup_alias("not_a_keyword"), None);
//! ```

use std::fmt;

/// Stable identifier for every canonical keyword this vocabulary recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Author,
    Title,
    Journal,
    Date,
    DateUpdated,
    Collaboration,
    TypeCode,
    ExactAuthor,
    AuthorCount,
    Topcite,
    Cite,
    Fulltext,
    Recid,
    Volume,
}

impl fmt::Display for KeywordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(canonical_str(*self))
    }
}

/// Metadata for a single keyword: its canonical spelling plus every accepted alias.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// Registry of every recognized keyword.
///
/// ## Notes
/// - Order matters for ambiguous spellings: [`lookup_alias`] returns the first match, so
///   `ExactAuthor` (whose aliases include `ac`) must precede `AuthorCount` for the `ac`
///   disambiguation rule documented on [`KeywordId`] to hold.
pub const KEYWORDS: &[KeywordInfo] = &[
    KeywordInfo {
        id: KeywordId::Author,
        canonical: "author",
        aliases: &["a", "au", "author"],
    },
    KeywordInfo {
        id: KeywordId::Title,
        canonical: "title",
        aliases: &["t", "ti", "title"],
    },
    KeywordInfo {
        id: KeywordId::Journal,
        canonical: "journal",
        aliases: &["j", "journal"],
    },
    KeywordInfo {
        id: KeywordId::Date,
        canonical: "date",
        aliases: &["d", "date"],
    },
    KeywordInfo {
        id: KeywordId::DateUpdated,
        canonical: "date-updated",
        aliases: &["du", "date-updated"],
    },
    KeywordInfo {
        id: KeywordId::Collaboration,
        canonical: "collaboration",
        aliases: &["cn", "collaboration"],
    },
    KeywordInfo {
        id: KeywordId::TypeCode,
        canonical: "type-code",
        aliases: &["tc", "type-code"],
    },
    // Must precede `AuthorCount`: `ac` resolves to exact-author by table order.
    KeywordInfo {
        id: KeywordId::ExactAuthor,
        canonical: "exact-author",
        aliases: &["ac", "exactauthor", "exact-author"],
    },
    KeywordInfo {
        id: KeywordId::AuthorCount,
        canonical: "author-count",
        aliases: &["ac", "author-count"],
    },
    KeywordInfo {
        id: KeywordId::Topcite,
        canonical: "topcite",
        aliases: &["cited", "topcite"],
    },
    KeywordInfo {
        id: KeywordId::Cite,
        canonical: "cite",
        aliases: &["reference", "cite"],
    },
    KeywordInfo {
        id: KeywordId::Fulltext,
        canonical: "fulltext",
        aliases: &["fulltext"],
    },
    KeywordInfo {
        id: KeywordId::Recid,
        canonical: "recid",
        aliases: &["recid"],
    },
    KeywordInfo {
        id: KeywordId::Volume,
        canonical: "volume",
        aliases: &["vol", "volume"],
    },
];

/// Every nestable relation name. These may appear wherever a keyword may, but produce a
/// `NestedKeywordQuery` rather than a plain keyword query.
pub const NESTABLE_RELATIONS: &[&str] = &["citedby", "refersto", "citedbyx", "referstox"];

/// Look up a surface spelling (alias or canonical) case-insensitively.
///
/// Returns the first matching [`KeywordId`] in [`KEYWORDS`] table order.
pub fn lookup_alias(raw: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|info| info.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(raw)))
        .map(|info| info.id)
}

/// Return the canonical spelling for a resolved [`KeywordId`].
pub fn canonical_str(id: KeywordId) -> &'static str {
    KEYWORDS
        .iter()
        .find(|info| info.id == id)
        .map(|info| info.canonical)
        .expect("every KeywordId has a KEYWORDS entry")
}

/// Return `true` if `raw` (case-insensitive) names a nestable relation.
pub fn is_nestable_relation(raw: &str) -> bool {
    NESTABLE_RELATIONS.iter().any(|rel| rel.eq_ignore_ascii_case(raw))
}
