//! Identifier and keyword lexing.
//!
//! Identifiers are ASCII-only: a letter or `_` to start, then letters,
//! digits, or `_`. A leading `@` escapes keyword recognition (`@class` is
//! an identifier named `class`, never the `class` keyword) and is part of
//! the emitted lexeme.

use crate::keyword::is_keyword;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, an `@`-escaped identifier, or a keyword.
    pub fn lex_identifier_or_keyword(&mut self) -> Token {
        let span = self.current_span();
        let escaped = self.cursor.peek_current() == '@';
        if escaped {
            self.cursor.advance();
        }
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(self.token_start).to_string();
        let kind = if !escaped && is_keyword(&lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, lexeme, span)
    }
}
