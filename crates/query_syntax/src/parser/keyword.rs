// Statement/Expression/SimpleQuery grammar: booleans, negation, grouping, the two keyword
// dialects, nested meta-relations, and the handful of worked-out ambiguities.

use crate::ast::{
    BooleanQuery, Connective, Expression, KeywordQuery, KeywordRef, NestedKeywordQuery, SimpleQuery, Spanned,
    Statement,
};
use crate::lexer::TokenKind;
use query_vocab::{is_nestable_relation, lookup_alias, KeywordId};

use super::value::{CmpKind, DialectMode};
use super::Parser;

impl Parser {
    fn can_start_expression(&self) -> bool {
        match self.current_kind() {
            TokenKind::Word(w) => !Self::is_reserved_connective_word(w),
            TokenKind::LParen | TokenKind::Quoted(..) => true,
            TokenKind::Colon | TokenKind::RParen | TokenKind::Eof => false,
        }
    }

    /// `left (AND|OR) right`, right-recursive so a chain of any length nests as a single spine.
    /// If an explicit or implicit connective is found but the right-hand `Statement` fails to
    /// parse at all (e.g. `and` followed only by another reserved word, as in `title and foo`
    /// — no, that case fails earlier — or `... and and`), the connective is un-consumed and
    /// `left` is returned as a complete `Statement` on its own; the caller decides what to do
    /// with whatever is left unconsumed.
    pub(crate) fn parse_statement(&mut self) -> Option<Spanned<Statement>> {
        let start = self.pos;
        let left = self.parse_expression()?;
        let before_connective = self.checkpoint();

        if let Some(op) = self.try_consume_connective() {
            if let Some(right) = self.parse_statement() {
                return Some(Spanned::new(
                    Statement::Boolean(Box::new(BooleanQuery { left, op, right })),
                    self.span_from(start),
                ));
            }
            self.restore(before_connective);
        } else if self.can_start_expression() {
            if let Some(right) = self.parse_statement() {
                return Some(Spanned::new(
                    Statement::Boolean(Box::new(BooleanQuery {
                        left,
                        op: Connective::And,
                        right,
                    })),
                    self.span_from(start),
                ));
            }
        }

        Some(Spanned::new(Statement::Expression(Box::new(left)), self.span_from(start)))
    }

    fn parse_expression(&mut self) -> Option<Spanned<Expression>> {
        let start = self.pos;
        self.maybe_strip_find_prefix();
        if let Some(word) = self.word_text(self.pos).map(str::to_string) {
            if Self::is_not_word(&word) || word == "-" {
                self.advance();
                let inner = self.parse_expression()?;
                return Some(Spanned::new(Expression::Not(Box::new(inner)), self.span_from(start)));
            }
            if word.len() > 1 && word.starts_with('-') {
                self.strip_leading_dash_in_place();
                let inner = self.parse_expression()?;
                return Some(Spanned::new(Expression::Not(Box::new(inner)), self.span_from(start)));
            }
        }
        if matches!(self.current_kind(), TokenKind::LParen) {
            self.advance();
            let inner = self.parse_statement()?;
            if matches!(self.current_kind(), TokenKind::RParen) {
                self.advance();
            }
            return Some(Spanned::new(
                Expression::Parenthesized(Box::new(inner)),
                self.span_from(start),
            ));
        }
        let simple = self.parse_simple_query()?;
        Some(Spanned::new(Expression::Simple(simple), self.span_from(start)))
    }

    /// Consume a leading `find`/`fin`/`f` prefix. Unconditional rather than requiring the next
    /// token to be a recognized keyword: `find (j phys.rev. and vol d85) or (...)` has `find`
    /// immediately followed by `(`, not a keyword word. Called from `parse_expression` itself
    /// (rather than from `parse_simple_query`) so a `(` left behind after stripping still reaches
    /// the grouping/negation dispatch instead of falling into value-gluing.
    fn maybe_strip_find_prefix(&mut self) {
        let Some(word) = self.word_text(self.pos).map(str::to_string) else { return };
        let is_prefix = matches!(word.to_ascii_lowercase().as_str(), "find" | "fin" | "f");
        let has_more = !matches!(self.tokens.get(self.pos + 1).map(|t| &t.kind), None | Some(TokenKind::Eof));
        if is_prefix && has_more {
            self.advance();
        }
    }

    fn parse_simple_query(&mut self) -> Option<SimpleQuery> {
        if let Some(word) = self.word_text(self.pos).map(str::to_string) {
            if is_nestable_relation(&word) {
                self.advance();
                if matches!(self.current_kind(), TokenKind::Colon) {
                    self.advance();
                }
                let body = self.parse_expression()?;
                return Some(SimpleQuery::Nested(NestedKeywordQuery {
                    relation: word,
                    body: Box::new(body),
                }));
            }

            if lookup_alias(&word).is_some() {
                self.advance();
                let is_invenio = matches!(self.current_kind(), TokenKind::Colon);
                if is_invenio {
                    self.advance();
                }
                let mode = if is_invenio { DialectMode::Invenio } else { DialectMode::Spires };
                let id = self.resolve_ac(&word);
                let value = self.parse_value(mode)?;
                let keyword = KeywordRef::Known(id);
                return Some(SimpleQuery::Keyword(if is_invenio {
                    KeywordQuery::Invenio {
                        keyword,
                        value: Box::new(value),
                    }
                } else {
                    KeywordQuery::Spires {
                        keyword,
                        value: Box::new(value),
                    }
                }));
            }

            if let Some((alias, kind, rest)) = self.split_glued_operator(&word) {
                if let Some(id) = lookup_alias(&alias) {
                    let span = self.current().span;
                    self.advance();
                    let value = Spanned::new(Self::wrap_comparison(kind, rest), span);
                    return Some(SimpleQuery::Keyword(KeywordQuery::Spires {
                        keyword: KeywordRef::Known(id),
                        value: Box::new(value),
                    }));
                }
            }

            if matches!(self.tokens.get(self.pos + 1).map(|t| &t.kind), Some(TokenKind::Colon)) {
                self.advance();
                self.advance();
                let value = self.parse_value(DialectMode::Invenio)?;
                return Some(SimpleQuery::Keyword(KeywordQuery::Invenio {
                    keyword: KeywordRef::Unknown(word),
                    value: Box::new(value),
                }));
            }
        }

        let value = self.parse_value(DialectMode::Spires)?;
        Some(SimpleQuery::Bare(value))
    }

    /// `ac` is ambiguous between exact-author and author-count; the vocabulary resolves it to
    /// exact-author by table order, but two shapes of upcoming value mean the user meant
    /// author-count instead: a numeric token (ignoring a trailing `+`), or a comparison operator
    /// (`ac < 50`, `ac >= ...`) — exact-author values are never compared numerically.
    fn resolve_ac(&self, raw: &str) -> KeywordId {
        let resolved = lookup_alias(raw).expect("caller already confirmed this resolves");
        if raw.eq_ignore_ascii_case("ac") {
            if let Some(first) = self.word_text(self.pos) {
                let digits = first.trim_end_matches('+');
                let looks_numeric = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());
                if looks_numeric || Self::comparison_op_word(first).is_some() {
                    return KeywordId::AuthorCount;
                }
            }
        }
        resolved
    }

    /// Handle `d<=2005`-style input where the alias, a comparison operator, and the start of the
    /// value are all glued into a single token with no surrounding whitespace.
    fn split_glued_operator(&self, word: &str) -> Option<(String, CmpKind, String)> {
        let mut aliases: Vec<&str> = query_vocab::KEYWORDS.iter().flat_map(|info| info.aliases.iter().copied()).collect();
        aliases.sort_by_key(|a| std::cmp::Reverse(a.len()));
        for alias in aliases {
            if word.len() <= alias.len() || !word[..alias.len()].eq_ignore_ascii_case(alias) {
                continue;
            }
            let rest = &word[alias.len()..];
            for (symbol, kind) in [
                (">=", CmpKind::Ge),
                ("<=", CmpKind::Le),
                (">", CmpKind::Gt),
                ("<", CmpKind::Lt),
            ] {
                if let Some(operand) = rest.strip_prefix(symbol) {
                    if !operand.is_empty() {
                        return Some((alias.to_string(), kind, operand.to_string()));
                    }
                }
            }
        }
        None
    }
}
