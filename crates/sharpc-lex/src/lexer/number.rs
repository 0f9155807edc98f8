//! Numeric literal lexing.
//!
//! Handles decimal, hexadecimal (`0x`) and binary (`0b`) integers, and
//! floating-point/decimal literals, narrowing integers to the smallest of
//! `i32`/`u32`/`i64`/`u64` that can hold them.

use crate::error::LexError;
use crate::token::{Decimal, NumericValue, Token, TokenKind};
use crate::Lexer;

const SUFFIX_CHARS: [char; 10] = ['u', 'U', 'l', 'L', 'f', 'F', 'd', 'D', 'm', 'M'];

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal starting at the current cursor position.
    pub fn lex_number(&mut self) -> Result<Token, LexError> {
        let start_byte = self.token_start;
        let span_start = self.current_span();

        let mut is_hex = false;
        let mut is_bin = false;
        if self.cursor.peek_current() == '0' {
            match self.cursor.peek(1) {
                'x' | 'X' => {
                    is_hex = true;
                    self.cursor.advance();
                    self.cursor.advance();
                }
                'b' | 'B' => {
                    is_bin = true;
                    self.cursor.advance();
                    self.cursor.advance();
                }
                _ => {}
            }
        }

        let mut digits = String::new();
        let mut saw_dot = false;
        let mut last_was_underscore = false;

        loop {
            let c = self.cursor.peek_current();

            if c == '_' {
                self.cursor.advance();
                last_was_underscore = true;
                continue;
            }

            if is_bin {
                if c == '0' || c == '1' {
                    digits.push(c);
                    self.cursor.advance();
                    last_was_underscore = false;
                    continue;
                }
                if c.is_ascii_digit() {
                    return Err(LexError::MalformedNumericLiteral {
                        lexeme: self.cursor.slice_from(start_byte).to_string(),
                        reason: "non-binary digit inside a binary literal".to_string(),
                        span: span_start,
                    });
                }
            } else if is_hex {
                if c.is_ascii_hexdigit() {
                    digits.push(c);
                    self.cursor.advance();
                    last_was_underscore = false;
                    continue;
                }
            } else {
                if c.is_ascii_digit() {
                    digits.push(c);
                    self.cursor.advance();
                    last_was_underscore = false;
                    continue;
                }
                if !saw_dot && c == '.' {
                    let next = self.cursor.peek(1);
                    if next.is_ascii_digit() || next.is_ascii_alphabetic() {
                        saw_dot = true;
                        digits.push('.');
                        self.cursor.advance();
                        last_was_underscore = false;
                        continue;
                    }
                }
            }

            break;
        }

        if last_was_underscore {
            return Err(LexError::MalformedNumericLiteral {
                lexeme: self.cursor.slice_from(start_byte).to_string(),
                reason: "trailing underscore".to_string(),
                span: span_start,
            });
        }

        let mut suffix = String::new();
        let c = self.cursor.peek_current();
        if SUFFIX_CHARS.contains(&c) {
            suffix.push(c.to_ascii_lowercase());
            self.cursor.advance();
            let c2 = self.cursor.peek_current();
            let pair = matches!(
                (c.to_ascii_lowercase(), c2.to_ascii_lowercase()),
                ('u', 'l') | ('l', 'u')
            );
            if pair {
                suffix.push(c2.to_ascii_lowercase());
                self.cursor.advance();
            }
        }

        let lexeme = self.cursor.slice_from(start_byte).to_string();

        if digits.is_empty() {
            return Err(LexError::MalformedNumericLiteral {
                lexeme,
                reason: "no digits in numeric literal".to_string(),
                span: span_start,
            });
        }

        let value = parse_numeric_value(&digits, &suffix, saw_dot, is_hex, is_bin, &lexeme, span_start)?;

        Ok(Token::with_value(
            TokenKind::NumericLiteral,
            lexeme,
            span_start,
            value,
        ))
    }
}

fn narrow_u64(value: u64) -> NumericValue {
    if let Ok(v) = i32::try_from(value) {
        NumericValue::I32(v)
    } else if let Ok(v) = u32::try_from(value) {
        NumericValue::U32(v)
    } else if let Ok(v) = i64::try_from(value) {
        NumericValue::I64(v)
    } else {
        NumericValue::U64(value)
    }
}

fn parse_decimal(digits: &str) -> Option<Decimal> {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };
    let scale = frac_part.len() as u32;
    let combined = format!("{int_part}{frac_part}");
    combined.parse::<i128>().ok().map(|mantissa| Decimal { mantissa, scale })
}

#[allow(clippy::too_many_arguments)]
fn parse_numeric_value(
    digits: &str,
    suffix: &str,
    saw_dot: bool,
    is_hex: bool,
    is_bin: bool,
    lexeme: &str,
    span: sharpc_util::Span,
) -> Result<NumericValue, LexError> {
    let malformed = |reason: &str| LexError::MalformedNumericLiteral {
        lexeme: lexeme.to_string(),
        reason: reason.to_string(),
        span,
    };

    if is_hex || is_bin {
        let radix = if is_hex { 16 } else { 2 };
        let value = u64::from_str_radix(digits, radix).map_err(|_| malformed("value does not fit in 64 bits"))?;
        return Ok(narrow_u64(value));
    }

    let is_float_like = saw_dot || matches!(suffix, "f" | "d" | "m");

    if !is_float_like {
        let value: u64 = digits.parse().map_err(|_| malformed("value does not fit in 64 bits"))?;
        return Ok(narrow_u64(value));
    }

    let normalized = if let Some(stripped) = digits.strip_prefix('.') {
        format!("0.{stripped}")
    } else {
        digits.to_string()
    };

    match suffix {
        "f" => normalized
            .parse::<f32>()
            .map(NumericValue::F32)
            .map_err(|_| malformed("invalid floating point literal")),
        "m" => parse_decimal(&normalized)
            .map(NumericValue::Decimal)
            .ok_or_else(|| malformed("invalid decimal literal")),
        _ => normalized
            .parse::<f64>()
            .map(NumericValue::F64)
            .map_err(|_| malformed("invalid floating point literal")),
    }
}

#[cfg(test)]
mod tests {
    use crate::token::NumericValue;
    use crate::Lexer;

    fn lex_num(source: &str) -> NumericValue {
        let mut lexer = Lexer::new(source);
        lexer.next_token().unwrap().value.unwrap()
    }

    #[test]
    fn test_decimal_integer_narrowing() {
        assert_eq!(lex_num("0"), NumericValue::I32(0));
        assert_eq!(lex_num("42"), NumericValue::I32(42));
        assert_eq!(lex_num("2147483647"), NumericValue::I32(2147483647));
        assert_eq!(lex_num("2147483648"), NumericValue::U32(2147483648));
        assert_eq!(lex_num("4294967296"), NumericValue::I64(4294967296));
        assert_eq!(
            lex_num("18446744073709551615"),
            NumericValue::U64(18446744073709551615)
        );
    }

    #[test]
    fn test_underscore_separators() {
        assert_eq!(lex_num("1_000_000"), NumericValue::I32(1_000_000));
    }

    #[test]
    fn test_hex_and_binary() {
        assert_eq!(lex_num("0xFF"), NumericValue::I32(0xFF));
        assert_eq!(lex_num("0xFFFFFFFF"), NumericValue::U32(0xFFFFFFFF));
        assert_eq!(lex_num("0b1010"), NumericValue::I32(0b1010));
    }

    #[test]
    fn test_suffix_does_not_change_narrowing() {
        assert_eq!(lex_num("0xFFFFFFFFu"), NumericValue::U32(0xFFFFFFFF));
        assert_eq!(lex_num("100L"), NumericValue::I32(100));
    }

    #[test]
    fn test_float_suffixes() {
        assert!(matches!(lex_num("1.5f"), NumericValue::F32(v) if (v - 1.5).abs() < 1e-6));
        assert!(matches!(lex_num("1.5d"), NumericValue::F64(v) if (v - 1.5).abs() < 1e-9));
        assert!(matches!(lex_num("1.5"), NumericValue::F64(v) if (v - 1.5).abs() < 1e-9));
        assert!(matches!(lex_num("100d"), NumericValue::F64(v) if (v - 100.0).abs() < 1e-9));
    }

    #[test]
    fn test_decimal_suffix() {
        match lex_num("1.5m") {
            NumericValue::Decimal(d) => {
                assert_eq!(d.mantissa, 15);
                assert_eq!(d.scale, 1);
            }
            other => panic!("expected Decimal, got {other:?}"),
        }
    }

    #[test]
    fn test_leading_dot_float() {
        assert!(matches!(lex_num(".5"), NumericValue::F64(v) if (v - 0.5).abs() < 1e-9));
    }

    #[test]
    fn test_dot_dot_disambiguation() {
        let mut lexer = Lexer::new("5..10");
        let first = lexer.next_token().unwrap();
        assert_eq!(first.value, Some(NumericValue::I32(5)));
        let dotdot = lexer.next_token().unwrap();
        assert_eq!(dotdot.kind, crate::token::TokenKind::DotDot);
        let second = lexer.next_token().unwrap();
        assert_eq!(second.value, Some(NumericValue::I32(10)));
    }

    #[test]
    fn test_trailing_underscore_is_malformed() {
        let mut lexer = Lexer::new("1_");
        assert!(matches!(
            lexer.next_token(),
            Err(crate::error::LexError::MalformedNumericLiteral { .. })
        ));
    }

    #[test]
    fn test_invalid_digit_in_binary_literal_is_malformed() {
        let mut lexer = Lexer::new("0b102");
        assert!(matches!(
            lexer.next_token(),
            Err(crate::error::LexError::MalformedNumericLiteral { .. })
        ));
    }

    #[test]
    fn test_u64_overflow_is_malformed() {
        let mut lexer = Lexer::new("99999999999999999999");
        assert!(matches!(
            lexer.next_token(),
            Err(crate::error::LexError::MalformedNumericLiteral { .. })
        ));
    }
}
