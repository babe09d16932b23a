// Value gluing: turns a run of plain-word tokens into a `Value`, applying the and/or-continuation
// heuristic and the dash-continuation heuristic along the way.

use crate::ast::{RangeOp, SimpleValueBooleanQuery, SimpleValueOrNested, Spanned, Value};
use crate::lexer::TokenKind;

use super::Parser;

/// Which dialect introduced the value currently being parsed. Plain adjacency (no `and`/`or`
/// between two words) behaves differently per dialect: once an Invenio `key:` colon has been
/// seen, a bare following word is *never* reinterpreted as a fresh keyword unless it is itself
/// immediately followed by a colon — the dialect, once chosen for a scope, sticks. A SPIRES
/// value (or a bare top-level value, which behaves the same way) instead always checks whether
/// the next word reads as a fresh keyword-led clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialectMode {
    Invenio,
    Spires,
}

pub(super) enum CmpKind {
    Gt,
    Ge,
    Lt,
    Le,
}

impl Parser {
    pub(super) fn comparison_op_word(word: &str) -> Option<CmpKind> {
        match word {
            ">" => Some(CmpKind::Gt),
            ">=" => Some(CmpKind::Ge),
            "<" => Some(CmpKind::Lt),
            "<=" => Some(CmpKind::Le),
            _ if word.eq_ignore_ascii_case("after") => Some(CmpKind::Gt),
            _ if word.eq_ignore_ascii_case("before") => Some(CmpKind::Lt),
            _ => None,
        }
    }

    pub(super) fn wrap_comparison(kind: CmpKind, operand: String) -> Value {
        match kind {
            CmpKind::Gt => Value::GreaterThan(operand),
            CmpKind::Ge => Value::GreaterEqual(operand),
            CmpKind::Lt => Value::LessThan(operand),
            CmpKind::Le => Value::LessEqual(operand),
        }
    }

    /// `date >2013`-style input: the operator and the start of the operand are glued into one
    /// token with no space between them, but (unlike `d<=2005`) the keyword itself was already
    /// consumed as a separate token. Tries the symbol forms only — `after`/`before` are whole
    /// words and never appear glued to their operand.
    fn split_leading_operator(word: &str) -> Option<(CmpKind, &str)> {
        for (symbol, kind) in [(">=", CmpKind::Ge), ("<=", CmpKind::Le), (">", CmpKind::Gt), ("<", CmpKind::Lt)] {
            if let Some(rest) = word.strip_prefix(symbol) {
                if !rest.is_empty() {
                    return Some((kind, rest));
                }
            }
        }
        None
    }

    /// Entry point for parsing a keyword's value, or a bare top-level value. Returns `None` when
    /// there is nothing at all usable at the current position (EOF, a stray `)`, a bare `:`, or
    /// a reserved connective/`not` with nothing in front of it) — this is what lets
    /// `title and foo` fail as a whole rather than silently treating `and` as a value.
    pub(crate) fn parse_value(&mut self, mode: DialectMode) -> Option<Spanned<Value>> {
        let start = self.pos;
        if self.is_eof() || matches!(self.current_kind(), TokenKind::RParen | TokenKind::Colon) {
            return None;
        }
        if let Some(word) = self.word_text(self.pos) {
            if Self::is_reserved_connective_word(word) || Self::is_not_word(word) {
                return None;
            }
            // A bare `=` is an alternate key-value separator (`date = 1987` reads like
            // `date:1987`), not a comparison operator — there is no `Equal` wrapper node.
            if word == "=" {
                self.advance();
                if self.is_eof() || matches!(self.current_kind(), TokenKind::RParen | TokenKind::Colon) {
                    return None;
                }
                return Some(Spanned::new(self.parse_value_chain(mode), self.span_from(start)));
            }
            if let Some(kind) = Self::comparison_op_word(word) {
                self.advance();
                if self.is_eof() || matches!(self.current_kind(), TokenKind::RParen | TokenKind::Colon) {
                    return None;
                }
                let operand = self.glue_plain_run(mode);
                let value = Self::wrap_comparison(kind, operand.trim().to_string());
                return Some(Spanned::new(value, self.span_from(start)));
            }
            if let Some((kind, rest)) = Self::split_leading_operator(word) {
                let mut operand = rest.to_string();
                self.advance();
                let more = self.glue_plain_run(mode);
                if !more.is_empty() {
                    operand.push(' ');
                    operand.push_str(&more);
                }
                let value = Self::wrap_comparison(kind, operand.trim().to_string());
                return Some(Spanned::new(value, self.span_from(start)));
            }
        }
        match self.current_kind().clone() {
            TokenKind::Quoted(_, text) => {
                self.advance();
                Some(Spanned::new(Value::Complex(text), self.span_from(start)))
            }
            TokenKind::LParen => {
                self.advance();
                let value = self.parse_value_chain(mode);
                if matches!(self.current_kind(), TokenKind::RParen) {
                    self.advance();
                }
                Some(Spanned::new(value, self.span_from(start)))
            }
            _ => Some(Spanned::new(self.parse_value_chain(mode), self.span_from(start))),
        }
    }

    /// Glue a plain-word run, then decide whether a following `and`/`or` extends the value
    /// (producing a `SimpleValueBooleanQuery`) or belongs to the enclosing statement grammar.
    fn parse_value_chain(&mut self, mode: DialectMode) -> Value {
        let left_text = self.glue_plain_run(mode);
        if let Some(word) = self.word_text(self.pos) {
            if let Some(op) = Self::connective_for(word) {
                let checkpoint = self.checkpoint();
                self.advance();
                let commits = matches!(self.current_kind(), TokenKind::Word(_))
                    && !self.looks_like_keyword_clause_start(self.pos);
                if commits {
                    let right = self.parse_value_chain_rhs(mode);
                    return Value::Boolean(SimpleValueBooleanQuery {
                        left: left_text.trim().to_string(),
                        op,
                        right,
                    });
                }
                self.restore(checkpoint);
            }
        }
        Self::finalize_simple_value(left_text)
    }

    /// The right-hand side of a `SimpleValueBooleanQuery`: another plain-word run, possibly
    /// itself extended by a further `and`/`or` into a nested chain.
    fn parse_value_chain_rhs(&mut self, mode: DialectMode) -> SimpleValueOrNested {
        let left_text = self.glue_plain_run(mode);
        if let Some(word) = self.word_text(self.pos) {
            if let Some(op) = Self::connective_for(word) {
                let checkpoint = self.checkpoint();
                self.advance();
                let commits = matches!(self.current_kind(), TokenKind::Word(_))
                    && !self.looks_like_keyword_clause_start(self.pos);
                if commits {
                    let right = self.parse_value_chain_rhs(mode);
                    return SimpleValueOrNested::Nested(Box::new(SimpleValueBooleanQuery {
                        left: left_text.trim().to_string(),
                        op,
                        right,
                    }));
                }
                self.restore(checkpoint);
            }
        }
        SimpleValueOrNested::Simple(left_text.trim().to_string())
    }

    fn finalize_simple_value(text: String) -> Value {
        let trimmed = text.trim();
        if let Some(idx) = trimmed.find("->") {
            let from = trimmed[..idx].trim().to_string();
            let to = trimmed[idx + 2..].trim().to_string();
            return Value::Range(RangeOp { from, to });
        }
        if trimmed.chars().count() > 1 && trimmed.ends_with('+') {
            return Value::GreaterEqual(trimmed[..trimmed.len() - 1].trim_end().to_string());
        }
        Value::Simple(trimmed.to_string())
    }

    /// Glue consecutive word tokens into one literal run, stopping at whatever the grammar
    /// elsewhere needs to see fresh: a reserved connective, `not`, a solitary `+`, a `Quoted`
    /// literal, a `Colon`, `RParen`, or `Eof`. A solitary `-` is resolved by
    /// [`Self::looks_like_keyword_clause_start`]; a parenthesis reached mid-run (not as the very
    /// first token) is swallowed whole as literal text via
    /// [`Self::consume_balanced_literal_parens`].
    fn glue_plain_run(&mut self, mode: DialectMode) -> String {
        let mut text = String::new();
        loop {
            match self.current_kind().clone() {
                TokenKind::Word(w) if w == "-" => {
                    let dash_starts_keyword = self
                        .tokens
                        .get(self.pos + 1)
                        .is_some_and(|_| self.looks_like_keyword_clause_start(self.pos + 1));
                    if dash_starts_keyword {
                        break;
                    }
                    self.advance();
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push('-');
                }
                TokenKind::Word(w) if w == "+" || Self::is_not_word(&w) || Self::is_reserved_connective_word(&w) => {
                    break;
                }
                TokenKind::Word(w) => {
                    let stops_here = match mode {
                        DialectMode::Spires => self.looks_like_keyword_clause_start(self.pos),
                        DialectMode::Invenio => {
                            matches!(self.tokens.get(self.pos + 1).map(|t| &t.kind), Some(TokenKind::Colon))
                        }
                    };
                    if stops_here {
                        break;
                    }
                    self.advance();
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(&w);
                }
                TokenKind::LParen => {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    self.consume_balanced_literal_parens(&mut text);
                }
                TokenKind::Colon | TokenKind::RParen | TokenKind::Quoted(..) | TokenKind::Eof => break,
            }
        }
        text
    }

    /// Swallow a balanced `(...)` group as literal surface text (no and/or reinterpretation,
    /// unlike a *leading* parenthesized value — see `parse_value`'s `LParen` arm). Grounded in
    /// inputs like `C-12(vec-p,vec-n)N-12 (g.s.,1+)`, which stays one flat `SimpleValue`.
    fn consume_balanced_literal_parens(&mut self, text: &mut String) {
        let mut depth: i32 = 0;
        loop {
            match self.current_kind().clone() {
                TokenKind::LParen => {
                    text.push('(');
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen => {
                    text.push(')');
                    depth -= 1;
                    self.advance();
                    if depth <= 0 {
                        break;
                    }
                }
                TokenKind::Word(w) => {
                    text.push_str(&w);
                    self.advance();
                }
                TokenKind::Colon => {
                    text.push(':');
                    self.advance();
                }
                TokenKind::Quoted(_, s) => {
                    text.push_str(&s);
                    self.advance();
                }
                TokenKind::Eof => break,
            }
        }
    }
}
