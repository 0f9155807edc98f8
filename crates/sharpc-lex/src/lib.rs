//! Lexical analysis for a C#-like curly-brace object-oriented language.
//!
//! The entry point is [`Lexer`]: construct one over a source string with
//! [`Lexer::new`], then either pull tokens one at a time with
//! [`Lexer::next_token`] or take the whole stream with [`Lexer::lex`]. Lexing
//! is single-pass and fails fast: the first lexical error aborts the run and
//! is returned as a [`LexError`] rather than collected alongside whatever
//! tokens were already produced.
//!
//! ```
//! use sharpc_lex::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("int x = 1;").lex().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! ```

mod cursor;
#[cfg(test)]
mod edge_cases;
pub mod error;
pub mod keyword;
mod lexer;
#[cfg(test)]
mod properties;
pub mod token;
pub mod unicode;

pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Decimal, NumericValue, Token, TokenKind};

/// Convenience wrapper around `Lexer::new(source).lex()`.
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).lex()
}
