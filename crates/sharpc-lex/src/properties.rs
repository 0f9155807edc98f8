//! Property-based tests over the numeric narrowing chain and the string
//! terminator state machine, grounded in the same `proptest` dev-dependency
//! carried in this crate's `Cargo.toml`.

#[cfg(test)]
mod tests {
    use crate::token::{NumericValue, TokenKind};
    use crate::Lexer;
    use proptest::prelude::*;

    fn lex_one(source: &str) -> crate::token::Token {
        let tokens = Lexer::new(source).lex().unwrap();
        assert_eq!(tokens.len(), 2, "expected exactly one token plus EndOfFile for {source:?}");
        tokens.into_iter().next().unwrap()
    }

    proptest! {
        #[test]
        fn test_decimal_integers_always_narrow_to_an_integral_kind(digits in "[1-9][0-9]{0,18}") {
            let token = lex_one(&digits);
            prop_assert_eq!(token.kind, TokenKind::NumericLiteral);
            prop_assert!(matches!(
                token.value,
                Some(NumericValue::I32(_))
                    | Some(NumericValue::U32(_))
                    | Some(NumericValue::I64(_))
                    | Some(NumericValue::U64(_))
            ));
        }

        #[test]
        fn test_digit_separators_never_change_the_parsed_value(digits in "[1-9][0-9]{0,8}") {
            let with_separators: String = digits
                .chars()
                .enumerate()
                .map(|(i, c)| if i > 0 && i % 3 == 0 { format!("_{c}") } else { c.to_string() })
                .collect();
            let plain = lex_one(&digits);
            let separated = lex_one(&with_separators);
            prop_assert_eq!(plain.value, separated.value);
        }

        #[test]
        fn test_hex_literal_parses_as_unsigned_narrowing_of_its_value(digits in "[0-9a-fA-F]{1,8}") {
            let source = format!("0x{digits}");
            let token = lex_one(&source);
            prop_assert_eq!(token.kind, TokenKind::NumericLiteral);
            prop_assert!(token.value.is_some());
        }

        #[test]
        fn test_plain_string_body_without_quote_or_backslash_round_trips(body in "[^\"\\\\\n]{0,64}") {
            let source = format!("\"{body}\"");
            let token = lex_one(&source);
            prop_assert_eq!(token.kind, TokenKind::StringLiteral);
            prop_assert_eq!(token.lexeme, source);
        }

        #[test]
        fn test_verbatim_string_with_doubled_quotes_always_terminates(
            segments in prop::collection::vec("[a-zA-Z0-9 ]{0,8}", 1..5)
        ) {
            let body = segments.join("\"\"");
            let source = format!("@\"{body}\"");
            let token = lex_one(&source);
            prop_assert_eq!(token.kind, TokenKind::StringLiteral);
            prop_assert_eq!(token.lexeme, source);
        }

        #[test]
        fn test_identifier_text_without_at_is_never_reclassified_as_keyword(
            name in "[a-zA-Z_][a-zA-Z0-9_]{0,20}"
        ) {
            let token = lex_one(&name);
            if crate::keyword::is_keyword(&name) {
                prop_assert_eq!(token.kind, TokenKind::Keyword);
            } else {
                prop_assert_eq!(token.kind, TokenKind::Identifier);
            }
        }
    }
}
