use crate::ast::*;
use crate::lexer::{lex, Token, TokenKind};

/// Recursive-descent parser over a fixed token stream.
///
/// `tokens` is owned (not borrowed) rather than matching the more common `&'a [Token]` slice: the
/// leading-dash production (`-ac`, `-author`, `-refersto:...`) needs to strip a single leading `-`
/// off a `Word` token in place, without consuming it, so a later lookup of the very same position
/// sees the bare keyword. A borrowed slice can't support that in-place rewrite.
pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub(super) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    pub(super) fn checkpoint(&self) -> usize {
        self.pos
    }

    pub(super) fn restore(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    pub(super) fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Span from the token at `start` through the last token already consumed.
    pub(super) fn span_from(&self, start: usize) -> Span {
        let last = self.pos.saturating_sub(1).max(start).min(self.tokens.len() - 1);
        Span::new(self.tokens[start].span.start, self.tokens[last].span.end)
    }

    /// Parse the full token stream into a [`Query`].
    ///
    /// At most one [`Statement`] item is ever produced (everything that can chain into it via
    /// explicit or implicit conjunction does), optionally followed by a single trailing
    /// [`QueryItem::Malformed`] tail holding whatever the grammar couldn't place.
    pub fn parse_query(&mut self) -> Query {
        if self.is_eof() {
            return Query::empty(Span::new(0, 0));
        }

        let start = self.pos;
        match self.parse_statement() {
            Some(stmt) => {
                let mut items = vec![stmt.map(QueryItem::Statement)];
                if !self.is_eof() {
                    items.push(self.capture_malformed_tail());
                }
                Query::items(items)
            }
            None => {
                self.pos = start;
                Query::items(vec![self.capture_malformed_tail()])
            }
        }
    }

    /// Tokenize the remainder of the stream on whitespace (our tokens already respect whitespace
    /// boundaries) and wrap it as a single `MalformedQueryWords` leaf.
    fn capture_malformed_tail(&mut self) -> Spanned<QueryItem> {
        let start = self.pos;
        let mut words = Vec::new();
        while !self.is_eof() {
            words.push(self.advance().text().to_string());
        }
        let span = if words.is_empty() {
            self.current().span
        } else {
            Span::new(self.tokens[start].span.start, self.tokens[self.pos.saturating_sub(1)].span.end)
        };
        Spanned::new(QueryItem::Malformed(words), span)
    }
}

impl<T> Spanned<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned::new(f(self.node), self.span)
    }
}

/// Lex and parse `input` into a [`Query`].
///
/// Collapses the conceptual `(remainder, tree)` pair into just the tree: a successful parse
/// always consumes every token (any leftover becomes a `MalformedQueryWords` item *inside* the
/// tree, never a separate remainder string).
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn parse(input: &str) -> Query {
    let tokens = lex(input);
    let mut parser = Parser::new(tokens);
    parser.parse_query()
}
