//! Comment, preprocessor-line, and whitespace skipping.
//!
//! This module handles skipping line and block comments. Block comments do
//! not nest: the first `*/` encountered after an opening `/*` closes it,
//! matching the language's comment grammar. Preprocessor directives
//! (`#if`, `#endif`, ...) are not modelled; a line starting with `#` is
//! consumed to its terminating newline and produces no token, same as a
//! line comment.

use crate::error::LexError;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a block comment body, starting just after the opening `/*`.
    pub fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start = self.current_span();
        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedLiteral {
                    kind: "block comment",
                    span: start,
                });
            }

            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }

            self.cursor.advance();
        }
    }

    /// Skips all whitespace characters and comments (both line and block).
    ///
    /// Called before lexing each token. Also strips a leading UTF-8 BOM the
    /// first time it runs.
    pub fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.remaining().starts_with('\u{FEFF}') {
                self.cursor.advance();
            }
        }

        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                }
                '/' => {
                    let next = self.cursor.peek_char(1);
                    if next == '/' {
                        self.skip_line_comment();
                    } else if next == '*' {
                        self.cursor.advance();
                        self.cursor.advance();
                        self.skip_block_comment()?;
                    } else {
                        return Ok(());
                    }
                }
                '#' => self.skip_preprocessor_line(),
                _ => return Ok(()),
            }
        }
    }

    /// Skips a line comment (from `//` to end of line, exclusive).
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    /// Skips a preprocessor line (from `#` to end of line, exclusive).
    ///
    /// Only line skipping is modelled; conditional-compilation semantics
    /// (`#if`/`#endif` nesting) are out of scope for this lexer.
    fn skip_preprocessor_line(&mut self) {
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn lex_after_skip(source: &str) -> TokenKind {
        let mut lexer = Lexer::new(source);
        lexer.skip_whitespace_and_comments().unwrap();
        lexer.next_token().unwrap().kind
    }

    #[test]
    fn test_skip_whitespace() {
        assert_eq!(lex_after_skip("   hello"), TokenKind::Identifier);
    }

    #[test]
    fn test_skip_line_comment() {
        assert_eq!(lex_after_skip("// comment\nhello"), TokenKind::Identifier);
    }

    #[test]
    fn test_skip_block_comment() {
        assert_eq!(lex_after_skip("/* comment */hello"), TokenKind::Identifier);
    }

    #[test]
    fn test_block_comment_does_not_nest() {
        let mut lexer = Lexer::new("/* outer /* inner */ outer */");
        lexer.skip_whitespace_and_comments().unwrap();
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, "outer");
    }

    #[test]
    fn test_skip_preprocessor_line() {
        assert_eq!(lex_after_skip("#if DEBUG\nhello"), TokenKind::Identifier);
    }

    #[test]
    fn test_preprocessor_line_at_eof_has_no_token() {
        let tokens = Lexer::new("#pragma warning disable").lex().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_unterminated_block_comment_errors() {
        let mut lexer = Lexer::new("/* never closes");
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(
            err,
            crate::error::LexError::UnterminatedLiteral { .. }
        ));
    }
}
