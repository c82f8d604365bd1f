use super::*;
use crate::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn tokenize_collects_all_tokens() {
    let tokens = tokenize("foo 123 1.0 , $ true false, \"zzz\" blah: 42.0").map(|tokens| {
        tokens
            .iter()
            .map(|t| (t.kind, t.text))
            .collect::<Vec<_>>()
    });
    assert_eq!(
        tokens,
        Ok(vec![
            (TokenKind::Identifier, "foo"),
            (TokenKind::Number, "123"),
            (TokenKind::Number, "1.0"),
            (TokenKind::Symbol, ","),
            (TokenKind::Symbol, "$"),
            (TokenKind::Identifier, "true"),
            (TokenKind::Identifier, "false"),
            (TokenKind::Symbol, ","),
            (TokenKind::String, "zzz"),
            (TokenKind::Identifier, "blah"),
            (TokenKind::Symbol, ":"),
            (TokenKind::Number, "42.0"),
        ])
    );
}

#[test]
fn tokenize_surfaces_newlines() {
    let kinds = tokenize("a\nb").map(|tokens| tokens.iter().map(|t| t.kind).collect::<Vec<_>>());
    assert_eq!(
        kinds,
        Ok(vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier
        ])
    );
}

#[test]
fn tokenize_empty_source() {
    assert_eq!(tokenize(""), Ok(vec![]));
}

#[test]
fn tokenize_stops_at_error() {
    let err = tokenize("ok 1.2.3 never").map(|_| ()).unwrap_err();
    assert_eq!(err.kind, crate::ScanErrorKind::MalformedNumber);
}

#[test]
fn iterator_ignoring_newlines() {
    let mut lexer = Lexer::new("a\n\nb\n");
    let texts: Vec<&str> = lexer.tokens(true).filter_map(Result::ok).map(|t| t.text).collect();
    assert_eq!(texts, vec!["a", "b"]);
    assert!(lexer.is_at_end());
}

#[test]
fn iterator_is_fused_after_error() {
    let mut lexer = Lexer::new("a \u{7} b");
    let mut tokens = lexer.tokens(false);
    assert!(matches!(tokens.next(), Some(Ok(_))));
    assert!(matches!(tokens.next(), Some(Err(_))));
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}

#[test]
fn iterator_can_be_resumed_from_lexer() {
    let mut lexer = Lexer::new("a b c");
    let first: Vec<&str> = lexer.tokens(false).take(1).filter_map(Result::ok).map(|t| t.text).collect();
    assert_eq!(first, vec!["a"]);
    assert_eq!(lexer.expect_identifier(), Ok("b"));
    assert_eq!(lexer.tokens(false).count(), 1);
}
