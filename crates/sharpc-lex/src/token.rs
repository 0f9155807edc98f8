//! The token model produced by the lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source slice it came from
//! and the [`Span`] it occupies. Numeric literals additionally carry a parsed
//! [`NumericValue`] so downstream stages never have to re-parse the lexeme.

use sharpc_util::Span;

/// The closed set of lexical categories this lexer recognizes.
///
/// Keywords are not split into per-word variants: `TokenKind::Keyword` covers
/// all of them, and the exact word lives in the token's `lexeme`. This keeps
/// the enum from growing a variant per reserved word and matches how the
/// interner already tracks "is this word reserved" via `Symbol::is_known`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A non-keyword identifier, including `@`-escaped ones (`@class`).
    Identifier,
    /// Any of the 77 reserved words.
    Keyword,
    /// An integer or floating-point literal; see `Token::value`.
    NumericLiteral,
    /// A plain or verbatim string literal (`"..."`, `@"..."`).
    StringLiteral,
    /// An interpolated string literal (`$"..."`, `$@"..."`, `@$"..."`).
    InterpolatedStringLiteral,
    /// A character literal (`'a'`, `'\n'`).
    CharLiteral,
    /// Emitted once at the end of input; always the final token.
    EndOfFile,

    Semicolon,
    Comma,
    Dot,
    DotDot,
    Colon,
    ColonColon,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Tilde,

    Equals,
    EqualsEquals,
    EqualsGreaterThan,
    LessThan,
    LessThanEquals,
    GreaterThan,
    GreaterThanEquals,
    Plus,
    PlusPlus,
    PlusEquals,
    Minus,
    MinusMinus,
    MinusEquals,
    Asterisk,
    AsteriskEquals,
    Slash,
    SlashEquals,
    Percent,
    PercentEquals,
    Ampersand,
    AmpersandAmpersand,
    AmpersandEquals,
    Bar,
    BarBar,
    BarEquals,
    Caret,
    CaretEquals,
    Exclamation,
    ExclamationEquals,
    Question,
    QuestionQuestion,
    QuestionQuestionEquals,
}

/// A parsed numeric literal value, narrowed to the smallest type that can
/// represent it (see `lexer::number`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
}

/// A fixed-point approximation of C#'s 128-bit `decimal`: `mantissa / 10^scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    pub mantissa: i128,
    pub scale: u32,
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text this token was lexed from, including any
    /// prefix/suffix/sigil characters (`0x1F`, `@class`, `$"hi {x}"`).
    pub lexeme: String,
    pub position: Span,
    /// Populated only for `TokenKind::NumericLiteral`.
    pub value: Option<NumericValue>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
            value: None,
        }
    }

    pub fn with_value(
        kind: TokenKind,
        lexeme: impl Into<String>,
        position: Span,
        value: NumericValue,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
            value: Some(value),
        }
    }

    pub fn eof(position: Span) -> Self {
        Self::new(TokenKind::EndOfFile, "", position)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}
