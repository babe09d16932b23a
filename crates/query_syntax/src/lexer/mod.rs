//! Tokenizer for the scholarly search query language.
//!
//! Unlike a keyword-vocabulary scanner that only ever needs to recognize a fixed ASCII alphabet,
//! this lexer has to scan arbitrary human free text — author names, article titles, fullwidth
//! punctuation pasted from other tools — so it works over `char`s, not bytes, and never rejects a
//! character as "not part of a word".

pub mod tokens;

use crate::ast::Span;
pub use tokens::{QuoteKind, Token, TokenKind};

pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    len: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            len: input.len(),
        }
    }

    /// Scan the entire input into a token stream, always ending with exactly one [`TokenKind::Eof`].
    pub fn lex(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek_pos() {
                None => {
                    tokens.push(Token::new(TokenKind::Eof, Span::new(self.len, self.len)));
                    break;
                }
                Some(start) => tokens.push(self.scan_token(start)),
            }
        }
        tokens
    }

    fn peek_pos(&mut self) -> Option<usize> {
        self.chars.peek().map(|(i, _)| *i)
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, c)) = self.chars.peek().copied() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    /// Dispatch on the first character of a fresh token boundary.
    fn scan_token(&mut self, start: usize) -> Token {
        let (_, c) = self.chars.next().expect("peek_pos guarantees a char at start");
        match c {
            '(' => Token::new(TokenKind::LParen, Span::new(start, start + 1)),
            ')' => Token::new(TokenKind::RParen, Span::new(start, start + 1)),
            ':' => Token::new(TokenKind::Colon, Span::new(start, start + 1)),
            '\'' => self.scan_quoted(start, '\'', QuoteKind::Single),
            '"' => self.scan_quoted(start, '"', QuoteKind::Double),
            '/' => self.scan_quoted(start, '/', QuoteKind::Regex),
            _ => self.scan_word(start),
        }
    }

    /// Consume through the matching closing delimiter, inclusive of both delimiters. If the
    /// input ends before a closing delimiter appears, the literal runs to end of input — this
    /// parser never rejects input outright, it leaves recovery to the caller.
    fn scan_quoted(&mut self, start: usize, delim: char, kind: QuoteKind) -> Token {
        let mut end = self.len;
        loop {
            match self.chars.next() {
                Some((i, c)) if c == delim => {
                    end = i + c.len_utf8();
                    break;
                }
                Some(_) => continue,
                None => break,
            }
        }
        let text = self.input[start..end].to_string();
        Token::new(TokenKind::Quoted(kind, text), Span::new(start, end))
    }

    /// A maximal run of non-whitespace, non-colon characters. Quote characters and slashes are
    /// ordinary word characters here — they only start a distinct token at a fresh boundary (see
    /// `scan_token`). `(`/`)` are ordinary word characters too, but only while balanced *within
    /// this word* (`SU(2)`, `C-12(vec-p,vec-n)N-12`): a `)` with no matching `(` opened since this
    /// word started is a real grouping delimiter and ends the word instead, so `d85)` lexes as
    /// `Word("d85")` + `RParen` rather than swallowing the close into the word.
    fn scan_word(&mut self, start: usize) -> Token {
        let mut end = start + self.input[start..].chars().next().map(char::len_utf8).unwrap_or(0);
        let mut paren_depth: i32 = 0;
        while let Some((i, c)) = self.chars.peek().copied() {
            if c.is_whitespace() || c == ':' {
                break;
            }
            if c == ')' && paren_depth <= 0 {
                break;
            }
            match c {
                '(' => paren_depth += 1,
                ')' => paren_depth -= 1,
                _ => {}
            }
            end = i + c.len_utf8();
            self.chars.next();
        }
        let text = self.input[start..end].to_string();
        Token::new(TokenKind::Word(text), Span::new(start, end))
    }
}

/// Convenience wrapper around [`Lexer::lex`].
pub fn lex(input: &str) -> Vec<Token> {
    Lexer::new(input).lex()
}
