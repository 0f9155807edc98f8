//! String and character literal lexing.
//!
//! Six string forms share one reader: plain (`"..."`), verbatim
//! (`@"..."`), interpolated (`$"..."`), and the two verbatim-interpolated
//! orderings (`$@"..."`, `@$"..."`). The sigil-dispatch methods
//! ([`Lexer::lex_at`], [`Lexer::lex_dollar`]) live here too, since their
//! only job is deciding which combination of `verbatim`/`interpolated`
//! flags to hand to [`Lexer::lex_quoted`].

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Dispatches on `@`: a verbatim-string sigil, the verbatim half of a
    /// combined verbatim-interpolated sigil (`@$"..."`), or an escaped
    /// identifier (`@class`).
    pub(crate) fn lex_at(&mut self) -> Result<Token, LexError> {
        if self.cursor.peek(1) == '"' {
            self.cursor.advance();
            return self.lex_quoted(true, false);
        }
        if self.cursor.peek(1) == '$' && self.cursor.peek(2) == '"' {
            self.cursor.advance();
            self.cursor.advance();
            return self.lex_quoted(true, true);
        }
        Ok(self.lex_identifier_or_keyword())
    }

    /// Dispatches on `$`: an interpolated-string sigil, or the
    /// interpolated half of a combined verbatim-interpolated sigil
    /// (`$@"..."`). A bare `$` with no following string is not a token
    /// this language defines.
    pub(crate) fn lex_dollar(&mut self) -> Result<Token, LexError> {
        if self.cursor.peek(1) == '"' {
            self.cursor.advance();
            return self.lex_quoted(false, true);
        }
        if self.cursor.peek(1) == '@' && self.cursor.peek(2) == '"' {
            self.cursor.advance();
            self.cursor.advance();
            return self.lex_quoted(true, true);
        }
        let span = self.current_span();
        let context = self
            .cursor
            .context_window(self.token_start, crate::lexer::core::ERROR_CONTEXT_RADIUS)
            .to_string();
        let token_count = self.tokens_emitted;
        let c = self.cursor.consume();
        Err(LexError::UnrecognizedCharacter {
            character: c,
            span,
            context,
            token_count,
        })
    }

    /// Reads a string literal body starting at the opening `"` (any
    /// leading sigils have already been consumed by the caller).
    ///
    /// `verbatim`: `""` inside the body is a literal quote, backslashes
    /// are not escape introducers, and the terminator is a `"` not
    /// immediately followed by another `"`.
    ///
    /// `interpolated`: brace nesting is tracked; `{{`/`}}` at depth 0 are
    /// literal brace pairs, a lone `{` opens a hole (raising depth), the
    /// matching `}` closes it, and while depth > 0 a `"` does not
    /// terminate the literal.
    pub(crate) fn lex_quoted(&mut self, verbatim: bool, interpolated: bool) -> Result<Token, LexError> {
        let span = self.current_span();

        if !verbatim
            && !interpolated
            && self.cursor.peek_current() == '"'
            && self.cursor.peek(1) == '"'
            && self.cursor.peek(2) == '"'
        {
            return Err(LexError::UnsupportedConstruct {
                description: "triple-quoted raw string literal".to_string(),
                span,
            });
        }

        self.cursor.advance(); // opening quote
        let mut depth: u32 = 0;

        loop {
            if self.cursor.is_at_end() {
                let kind = match (verbatim, interpolated) {
                    (_, true) => "interpolated string",
                    (true, false) => "verbatim string",
                    (false, false) => "string",
                };
                return Err(LexError::UnterminatedLiteral { kind, span });
            }

            let c = self.cursor.peek_current();

            if interpolated && c == '{' {
                if depth == 0 && self.cursor.peek(1) == '{' {
                    self.cursor.advance();
                    self.cursor.advance();
                } else {
                    depth += 1;
                    self.cursor.advance();
                }
                continue;
            }

            if interpolated && c == '}' {
                if depth == 0 && self.cursor.peek(1) == '}' {
                    self.cursor.advance();
                    self.cursor.advance();
                } else {
                    depth = depth.saturating_sub(1);
                    self.cursor.advance();
                }
                continue;
            }

            if depth > 0 {
                // Inside an interpolation hole: raw passthrough. A `"`
                // here belongs to an expression, not to this literal.
                self.cursor.advance();
                continue;
            }

            if !verbatim && c == '\n' {
                return Err(LexError::UnterminatedLiteral {
                    kind: if interpolated { "interpolated string" } else { "string" },
                    span,
                });
            }

            if c == '"' {
                if verbatim {
                    if self.cursor.peek(1) == '"' {
                        self.cursor.advance();
                        self.cursor.advance();
                        continue;
                    }
                    self.cursor.advance();
                    break;
                }
                self.cursor.advance();
                break;
            }

            if !verbatim && c == '\\' {
                self.cursor.advance();
                if !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
                continue;
            }

            self.cursor.advance();
        }

        let lexeme = self.cursor.slice_from(self.token_start).to_string();
        let kind = if interpolated {
            TokenKind::InterpolatedStringLiteral
        } else {
            TokenKind::StringLiteral
        };
        Ok(Token::new(kind, lexeme, span))
    }

    /// Lexes a character literal: `'`, one character (two if it is a
    /// backslash escape), then a closing `'`.
    ///
    /// Unlike the string readers, which preserve escapes verbatim, this
    /// validates an escape target against [`KNOWN_ESCAPES`]: an
    /// unrecognised escape here is a lex error, not a deferred-resolution
    /// concern (`\x`/`\u`/`\U` are intentionally exempt).
    pub fn lex_char_literal(&mut self) -> Result<Token, LexError> {
        let span = self.current_span();
        self.cursor.advance(); // opening '

        if self.cursor.is_at_end() {
            return Err(LexError::UnterminatedLiteral {
                kind: "character",
                span,
            });
        }
        let c = self.cursor.consume();
        if c == '\\' {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedLiteral {
                    kind: "character",
                    span,
                });
            }
            let escape = self.cursor.consume();
            if !KNOWN_ESCAPES.contains(&escape) && !matches!(escape, 'x' | 'u' | 'U') {
                return Err(LexError::UnknownEscapeSequence { escape, span });
            }
        }

        if self.cursor.peek_current() != '\'' {
            return Err(LexError::UnterminatedLiteral {
                kind: "character",
                span,
            });
        }
        self.cursor.advance(); // closing '

        let lexeme = self.cursor.slice_from(self.token_start).to_string();
        Ok(Token::new(TokenKind::CharLiteral, lexeme, span))
    }
}

/// Escape targets the character-literal validator and any later
/// escape-resolving consumer recognise. String readers never consult this:
/// they pass escapes through raw.
const KNOWN_ESCAPES: [char; 11] = ['\\', 'a', 'b', 'f', 'n', 'r', 't', 'v', '\'', '"', '0'];
