//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct: the character cursor
//! plus the bookkeeping needed to stamp every emitted token with the
//! position of its first character, and the top-level dispatch that
//! routes each lookahead character to a sub-reader.

use sharpc_util::Span;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Lexer for the C#-like source language.
///
/// Single-pass, left-to-right, synchronous. Owns a [`Cursor`] over the
/// source text and nothing else; there is no shared state between
/// instances, so lexing multiple files in parallel just means
/// constructing one `Lexer` per file.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset of the first character of the token currently being read.
    pub(crate) token_start: usize,
    /// Line of `token_start` (1-based).
    token_start_line: u32,
    /// Column of `token_start` (1-based).
    token_start_column: u32,

    /// Whether a leading UTF-8 BOM has already been checked for.
    bom_checked: bool,

    /// Count of tokens successfully emitted so far (excluding `EndOfFile`),
    /// surfaced in [`LexError::UnrecognizedCharacter`] so a diagnostic can
    /// say roughly how far into the file the lexer got.
    pub(crate) tokens_emitted: usize,
}

/// Characters of source shown either side of an unrecognized character in
/// its error context window.
pub(crate) const ERROR_CONTEXT_RADIUS: usize = 5;

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
            tokens_emitted: 0,
        }
    }

    /// Lexes the entire input and returns the token sequence, terminated by
    /// exactly one [`TokenKind::EndOfFile`].
    ///
    /// Consumes the lexer: it is a one-shot, single-pass operation and there
    /// is nothing useful to do with a `Lexer` once the whole input has been
    /// scanned.
    pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, comments, and preprocessor lines first, then
    /// dispatches on the current lookahead character. Returns
    /// `Token::eof` once the input is exhausted; callers keep calling
    /// `next_token` (or use [`Lexer::lex`]) until they see it.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(Token::eof(self.current_span()));
        }

        let result = self.dispatch();
        if result.is_ok() {
            self.tokens_emitted += 1;
        }
        result
    }

    fn dispatch(&mut self) -> Result<Token, LexError> {
        match self.cursor.peek_current() {
            ';' => Ok(self.single(TokenKind::Semicolon)),
            ',' => Ok(self.single(TokenKind::Comma)),
            '{' => Ok(self.single(TokenKind::OpenBrace)),
            '}' => Ok(self.single(TokenKind::CloseBrace)),
            '(' => Ok(self.single(TokenKind::OpenParen)),
            ')' => Ok(self.single(TokenKind::CloseParen)),
            '[' => Ok(self.single(TokenKind::OpenBracket)),
            ']' => Ok(self.single(TokenKind::CloseBracket)),
            '~' => Ok(self.single(TokenKind::Tilde)),

            ':' => Ok(self.lex_colon()),
            '.' => self.lex_dot(),
            '/' => Ok(self.lex_slash()),
            '=' => Ok(self.lex_equals()),
            '+' => Ok(self.lex_plus()),
            '-' => Ok(self.lex_minus()),
            '*' => Ok(self.lex_asterisk()),
            '%' => Ok(self.lex_percent()),
            '&' => Ok(self.lex_ampersand()),
            '|' => Ok(self.lex_bar()),
            '^' => Ok(self.lex_caret()),
            '!' => Ok(self.lex_exclamation()),
            '?' => Ok(self.lex_question()),
            '<' => Ok(self.lex_less_than()),
            '>' => Ok(self.lex_greater_than()),

            '"' => self.lex_quoted(false, false),
            '\'' => self.lex_char_literal(),
            '@' => self.lex_at(),
            '$' => self.lex_dollar(),

            c if c == '_' || is_ident_start(c) => Ok(self.lex_identifier_or_keyword()),
            c if c.is_ascii_digit() => self.lex_number(),

            c => {
                let span = self.current_span();
                let context = self
                    .cursor
                    .context_window(self.token_start, ERROR_CONTEXT_RADIUS)
                    .to_string();
                let token_count = self.tokens_emitted;
                self.cursor.advance();
                Err(LexError::UnrecognizedCharacter {
                    character: c,
                    span,
                    context,
                    token_count,
                })
            }
        }
    }

    /// Consumes the current character and emits a single-character token of
    /// the given kind.
    fn single(&mut self, kind: TokenKind) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// Reports a lexical error at the current token's starting position.
    pub fn report_error(&self, message: String) -> LexError {
        LexError::UnsupportedConstruct {
            description: message,
            span: self.current_span(),
        }
    }

    /// The [`Span`] covering the token currently being read: from
    /// `token_start` to the cursor's current byte position, stamped with
    /// the line/column the token started on.
    pub(crate) fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .lex()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_ends_with_single_eof() {
        let ks = kinds("x");
        assert_eq!(ks.last(), Some(&TokenKind::EndOfFile));
        assert_eq!(ks.iter().filter(|k| **k == TokenKind::EndOfFile).count(), 1);
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn test_simple_declaration() {
        assert_eq!(
            kinds("int x = 1;"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::NumericLiteral,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_comparison_chain() {
        assert_eq!(
            kinds("a == b != c"),
            vec![
                TokenKind::Identifier,
                TokenKind::EqualsEquals,
                TokenKind::Identifier,
                TokenKind::ExclamationEquals,
                TokenKind::Identifier,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_at_escaped_identifier_is_not_keyword() {
        let tokens = Lexer::new("@class").lex().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "@class");
    }

    #[test]
    fn test_unrecognized_character_errors() {
        let err = Lexer::new("`").lex().unwrap_err();
        assert!(matches!(err, LexError::UnrecognizedCharacter { character: '`', .. }));
    }

    #[test]
    fn test_unrecognized_character_carries_context_and_token_count() {
        let err = Lexer::new("int x = `;").lex().unwrap_err();
        match err {
            LexError::UnrecognizedCharacter { context, token_count, .. } => {
                assert!(context.contains('`'));
                assert_eq!(token_count, 3); // `int`, `x`, `=` already emitted
            }
            other => panic!("expected UnrecognizedCharacter, got {other:?}"),
        }
    }

    #[test]
    fn test_preprocessor_line_is_skipped() {
        assert_eq!(
            kinds("#if DEBUG\nint x;"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_underscore_alone_is_identifier() {
        assert_eq!(kinds("_"), vec![TokenKind::Identifier, TokenKind::EndOfFile]);
    }
}
