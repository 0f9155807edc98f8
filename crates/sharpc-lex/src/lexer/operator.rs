//! Operator and punctuation lexing.
//!
//! Every method here consumes the first character of its operator family
//! and then does maximal munch against the compound/doubled/assign forms
//! enumerated in the token model. None of these can fail: an operator
//! character with no valid continuation simply falls back to its
//! single-character form.

use crate::token::Token;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// `:` or `::`.
    pub fn lex_colon(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char(':') {
            TokenKind::ColonColon
        } else {
            TokenKind::Colon
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `.`, `..`, or the start of a numeric literal (`.5`).
    ///
    /// Numeric dispatch happens one level up in `next_token`, which checks
    /// whether the character after `.` is a digit before calling here.
    pub fn lex_dot(&mut self) -> Result<Token, crate::error::LexError> {
        if self.cursor.peek(1).is_ascii_digit() {
            return self.lex_number();
        }
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('.') {
            TokenKind::DotDot
        } else {
            TokenKind::Dot
        };
        Ok(Token::new(kind, self.cursor.slice_from(self.token_start), span))
    }

    /// `/` or `/=`. Comment forms (`//`, `/*`) are consumed earlier by
    /// [`Lexer::skip_whitespace_and_comments`], so by the time dispatch
    /// reaches here neither is possible.
    pub fn lex_slash(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::SlashEquals
        } else {
            TokenKind::Slash
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `=`, `==`, or `=>`.
    pub fn lex_equals(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::EqualsEquals
        } else if self.cursor.match_char('>') {
            TokenKind::EqualsGreaterThan
        } else {
            TokenKind::Equals
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `+`, `++`, or `+=`.
    pub fn lex_plus(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('+') {
            TokenKind::PlusPlus
        } else if self.cursor.match_char('=') {
            TokenKind::PlusEquals
        } else {
            TokenKind::Plus
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `-`, `--`, or `-=`.
    ///
    /// The source this lexer is modelled on compared the second character
    /// against `'+'` here, which meant `"--"` was never recognized as
    /// `MinusMinus`. Fixed: the second-character check is against `'-'`.
    pub fn lex_minus(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('-') {
            TokenKind::MinusMinus
        } else if self.cursor.match_char('=') {
            TokenKind::MinusEquals
        } else {
            TokenKind::Minus
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `*` or `*=`.
    pub fn lex_asterisk(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::AsteriskEquals
        } else {
            TokenKind::Asterisk
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `%` or `%=`.
    pub fn lex_percent(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::PercentEquals
        } else {
            TokenKind::Percent
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `&`, `&&`, or `&=`. Note `"&&="` lexes as `AmpersandAmpersand` then
    /// `Equals`: there is no `&&=` operator, so the `=` starts its own
    /// token.
    pub fn lex_ampersand(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('&') {
            TokenKind::AmpersandAmpersand
        } else if self.cursor.match_char('=') {
            TokenKind::AmpersandEquals
        } else {
            TokenKind::Ampersand
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `|`, `||`, or `|=`.
    pub fn lex_bar(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('|') {
            TokenKind::BarBar
        } else if self.cursor.match_char('=') {
            TokenKind::BarEquals
        } else {
            TokenKind::Bar
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `^` or `^=`.
    pub fn lex_caret(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::CaretEquals
        } else {
            TokenKind::Caret
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `!` or `!=`.
    pub fn lex_exclamation(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::ExclamationEquals
        } else {
            TokenKind::Exclamation
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `?`, `??`, or `??=`.
    pub fn lex_question(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('?') {
            if self.cursor.match_char('=') {
                TokenKind::QuestionQuestionEquals
            } else {
                TokenKind::QuestionQuestion
            }
        } else {
            TokenKind::Question
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `<` or `<=`.
    pub fn lex_less_than(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::LessThanEquals
        } else {
            TokenKind::LessThan
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// `>` or `>=`.
    pub fn lex_greater_than(&mut self) -> Token {
        let span = self.current_span();
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::GreaterThanEquals
        } else {
            TokenKind::GreaterThan
        };
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }
}
