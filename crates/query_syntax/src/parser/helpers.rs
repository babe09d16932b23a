// Shared predicates used by both the statement grammar (keyword.rs) and the value-gluing
// grammar (value.rs) to decide, at any given token, whether what follows reads as a fresh
// keyword-led clause or as more of the value currently being assembled.

use crate::ast::{Connective, Span};
use crate::lexer::{Token, TokenKind};
use query_vocab::{is_nestable_relation, lookup_alias};

use super::Parser;

impl Parser {
    pub(super) fn word_text(&self, pos: usize) -> Option<&str> {
        match &self.tokens.get(pos)?.kind {
            TokenKind::Word(w) => Some(w),
            _ => None,
        }
    }

    pub(super) fn is_reserved_connective_word(word: &str) -> bool {
        word == "&" || word == "|" || word.eq_ignore_ascii_case("and") || word.eq_ignore_ascii_case("or")
    }

    pub(super) fn connective_for(word: &str) -> Option<Connective> {
        if word == "&" || word.eq_ignore_ascii_case("and") {
            Some(Connective::And)
        } else if word == "|" || word.eq_ignore_ascii_case("or") {
            Some(Connective::Or)
        } else {
            None
        }
    }

    /// Consume an explicit statement-level connective (`and`, `or`, `&`, `|`, `+`) if present.
    pub(super) fn try_consume_connective(&mut self) -> Option<Connective> {
        let word = self.word_text(self.pos)?;
        if word == "+" {
            self.advance();
            return Some(Connective::And);
        }
        let op = Self::connective_for(word)?;
        self.advance();
        Some(op)
    }

    /// True when the word at `pos` is itself `not` (case-insensitive) — never a valid value
    /// fragment, always a fresh negation.
    pub(super) fn is_not_word(word: &str) -> bool {
        word.eq_ignore_ascii_case("not")
    }

    /// The core disambiguation predicate: does the token at `pos` read as the *start* of a fresh
    /// keyword-led clause — a recognized alias or nestable relation,
    /// immediately followed by something that could plausibly serve as its value/body — rather
    /// than as a continuation of an in-progress value?
    ///
    /// A leading `-` is stripped before the alias check so `-author` and `-refersto` are
    /// recognized the same as their bare spellings (`title e-10 and -author d'hoker`).
    pub(super) fn looks_like_keyword_clause_start(&self, pos: usize) -> bool {
        let Some(word) = self.word_text(pos) else { return false };
        let stripped = word.strip_prefix('-').unwrap_or(word);
        if stripped.is_empty() {
            return false;
        }
        let is_keyword_like = lookup_alias(stripped).is_some() || is_nestable_relation(stripped);
        if !is_keyword_like {
            return false;
        }
        match self.tokens.get(pos + 1).map(|t| &t.kind) {
            None | Some(TokenKind::Eof) | Some(TokenKind::RParen) => false,
            Some(TokenKind::Word(next)) => {
                !(Self::is_reserved_connective_word(next) || Self::is_not_word(next) || next == "+")
            }
            _ => true,
        }
    }

    /// If the current token is a `Word` starting with a leading `-` longer than one character
    /// (e.g. `-ac`, `-refersto`), strip the `-` in place without advancing, so the next parse
    /// step sees the bare keyword at the same position.
    pub(super) fn strip_leading_dash_in_place(&mut self) -> bool {
        let pos = self.pos;
        let Some(word) = self.word_text(pos) else { return false };
        if word.len() > 1 && word.starts_with('-') {
            let new_text = word[1..].to_string();
            let old_span = self.tokens[pos].span;
            self.tokens[pos] = Token::new(
                TokenKind::Word(new_text),
                Span::new(old_span.start + 1, old_span.end),
            );
            true
        } else {
            false
        }
    }
}
