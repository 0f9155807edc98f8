//! Boundary behaviours and end-to-end scenarios.
//!
//! Collects the cross-cutting cases that don't belong to any single
//! sub-reader: ambiguous-prefix disambiguation, narrowing round-trips, and
//! full small-program tokenizations.

#[cfg(test)]
mod tests {
    use crate::token::{NumericValue, TokenKind};
    use crate::Lexer;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .lex()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn values(source: &str) -> Vec<Option<NumericValue>> {
        Lexer::new(source)
            .lex()
            .unwrap()
            .into_iter()
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn test_numeric_narrowing_chain() {
        assert_eq!(values("0")[0], Some(NumericValue::I32(0)));
        assert_eq!(values("2147483647")[0], Some(NumericValue::I32(2147483647)));
        assert_eq!(values("2147483648")[0], Some(NumericValue::U32(2147483648)));
        assert_eq!(values("4294967296")[0], Some(NumericValue::I64(4294967296)));
    }

    #[test]
    fn test_digit_separators_match_unseparated_value() {
        assert_eq!(values("1_000_000")[0], values("1000000")[0]);
    }

    #[test]
    fn test_radix_forms() {
        assert_eq!(values("0xFF")[0], Some(NumericValue::I32(255)));
        assert_eq!(values("0b1010")[0], Some(NumericValue::I32(10)));
        assert_eq!(
            values("0xFFFFFFFFu")[0],
            Some(NumericValue::U32(4294967295))
        );
    }

    #[test]
    fn test_dot_dot_range_boundary() {
        assert_eq!(
            kinds("5..10"),
            vec![
                TokenKind::NumericLiteral,
                TokenKind::DotDot,
                TokenKind::NumericLiteral,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_leading_dot_float_boundary() {
        let toks = Lexer::new(".5").lex().unwrap();
        assert_eq!(toks[0].kind, TokenKind::NumericLiteral);
        assert_eq!(toks[0].value, Some(NumericValue::F64(0.5)));
    }

    #[test]
    fn test_equals_greater_than_then_equals_boundary() {
        assert_eq!(
            kinds("=>="),
            vec![
                TokenKind::EqualsGreaterThan,
                TokenKind::Equals,
                TokenKind::EndOfFile
            ]
        );
    }

    #[test]
    fn test_ampersand_ampersand_equals_boundary() {
        assert_eq!(
            kinds("&&="),
            vec![
                TokenKind::AmpersandAmpersand,
                TokenKind::Equals,
                TokenKind::EndOfFile
            ]
        );
    }

    #[test]
    fn test_scenario_simple_declaration() {
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
    fn test_scenario_comparison_chain() {
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
    fn test_scenario_at_escaped_identifier_is_not_keyword() {
        let tokens = Lexer::new("@class").lex().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "@class");
    }

    #[test]
    fn test_scenario_plain_string() {
        let tokens = Lexer::new("\"hi\"").lex().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, "\"hi\"");
    }

    #[test]
    fn test_scenario_verbatim_doubled_quote() {
        let tokens = Lexer::new(r#"@"a""b""#).lex().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, r#"@"a""b""#);
    }

    #[test]
    fn test_scenario_interpolated_hole_does_not_terminate() {
        let tokens = Lexer::new(r#"$"x={1+2}""#).lex().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::InterpolatedStringLiteral);
        assert_eq!(tokens[0].lexeme, r#"$"x={1+2}""#);
    }

    #[test]
    fn test_identifier_lexemes_are_never_keywords_ignoring_at() {
        let source = "foo bar @class baz @public qux";
        for token in Lexer::new(source).lex().unwrap() {
            if token.kind == TokenKind::Identifier {
                let unescaped = token.lexeme.strip_prefix('@').unwrap_or(&token.lexeme);
                assert!(!crate::keyword::is_keyword(unescaped));
            }
        }
    }

    #[test]
    fn test_every_numeric_literal_has_a_value() {
        let source = "1 2.5 0xFF 0b10 1_000 42u 3.0f 9.9m";
        for token in Lexer::new(source).lex().unwrap() {
            if token.kind == TokenKind::NumericLiteral {
                assert!(token.value.is_some());
            }
        }
    }

    #[test]
    fn test_token_stream_ends_with_exactly_one_eof() {
        let source = "class Foo { int x = 1; }";
        let tokens = Lexer::new(source).lex().unwrap();
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
        assert_eq!(
            tokens
                .iter()
                .filter(|t| t.kind == TokenKind::EndOfFile)
                .count(),
            1
        );
    }
}
