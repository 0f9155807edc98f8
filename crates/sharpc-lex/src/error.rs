//! Lexer error types.
//!
//! Every lexical error is fatal: the driver stops at the first one rather
//! than attempting recovery, so each variant carries enough context (the
//! offending text and a `Span`) to build a single good diagnostic from.

use sharpc_util::Span;
use thiserror::Error;

/// Everything that can go wrong while lexing a source file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error(
        "unrecognized character '{character}' at line {}, column {} (near \"{context}\", after {token_count} token(s))",
        .span.line, .span.column
    )]
    UnrecognizedCharacter {
        character: char,
        span: Span,
        /// Source text within a few characters of `character`, for a
        /// diagnostic a human can place in the file without re-opening it.
        context: String,
        /// How many tokens this lex run had already emitted before failing.
        token_count: usize,
    },

    #[error("malformed numeric literal '{lexeme}': {reason}")]
    MalformedNumericLiteral {
        lexeme: String,
        reason: String,
        span: Span,
    },

    #[error("unknown escape sequence '\\{escape}' at line {}, column {}", .span.line, .span.column)]
    UnknownEscapeSequence { escape: char, span: Span },

    #[error("unterminated {kind} literal starting at line {}, column {}", .span.line, .span.column)]
    UnterminatedLiteral { kind: &'static str, span: Span },

    #[error("unsupported construct: {description}")]
    UnsupportedConstruct { description: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnrecognizedCharacter { span, .. }
            | LexError::MalformedNumericLiteral { span, .. }
            | LexError::UnknownEscapeSequence { span, .. }
            | LexError::UnterminatedLiteral { span, .. }
            | LexError::UnsupportedConstruct { span, .. } => *span,
        }
    }
}

pub type LexResult<T> = Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessor() {
        let span = Span::new(0, 1, 1, 1);
        let err = LexError::UnrecognizedCharacter {
            character: '`',
            span,
            context: "`".to_string(),
            token_count: 0,
        };
        assert_eq!(err.span(), span);
    }

    #[test]
    fn test_display_messages_are_non_empty() {
        let span = Span::new(0, 1, 2, 3);
        let errs = [
            LexError::UnrecognizedCharacter {
                character: '`',
                span,
                context: "x = `;".to_string(),
                token_count: 3,
            },
            LexError::MalformedNumericLiteral {
                lexeme: "0x".into(),
                reason: "empty literal after prefix".into(),
                span,
            },
            LexError::UnknownEscapeSequence { escape: 'q', span },
            LexError::UnterminatedLiteral {
                kind: "string",
                span,
            },
            LexError::UnsupportedConstruct {
                description: "triple-quoted raw string".into(),
                span,
            },
        ];
        for err in errs {
            assert!(!err.to_string().is_empty());
        }
    }
}
