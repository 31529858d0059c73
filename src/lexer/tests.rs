use super::*;
use crate::error::ForgeError;

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input)
        .tokenize()
        .expect("Failed to tokenize")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_full_forge_example() {
    let input = r#"
# main config
global = "hello";
include "conf.d/*.cfg"
primary {
  port = 8080
  ratio = 0.5
  enabled = true
  missing = null
  home = $HOME
  alias = .port
  items = [1, "two"]
}
"#;

    let expected = vec![
        TokenKind::Newline,
        TokenKind::Comment,
        TokenKind::Newline,
        TokenKind::Identifier,
        TokenKind::Equal,
        TokenKind::String,
        TokenKind::Semicolon,
        TokenKind::Newline,
        TokenKind::Include,
        TokenKind::String,
        TokenKind::Newline,
        TokenKind::Identifier,
        TokenKind::LBrace,
        TokenKind::Newline,
        TokenKind::Identifier,
        TokenKind::Equal,
        TokenKind::Integer,
        TokenKind::Newline,
        TokenKind::Identifier,
        TokenKind::Equal,
        TokenKind::Float,
        TokenKind::Newline,
        TokenKind::Identifier,
        TokenKind::Equal,
        TokenKind::Boolean,
        TokenKind::Newline,
        TokenKind::Identifier,
        TokenKind::Equal,
        TokenKind::Null,
        TokenKind::Newline,
        TokenKind::Identifier,
        TokenKind::Equal,
        TokenKind::Environment,
        TokenKind::Newline,
        TokenKind::Identifier,
        TokenKind::Equal,
        TokenKind::Period,
        TokenKind::Identifier,
        TokenKind::Newline,
        TokenKind::Identifier,
        TokenKind::Equal,
        TokenKind::LBracket,
        TokenKind::Integer,
        TokenKind::Comma,
        TokenKind::String,
        TokenKind::RBracket,
        TokenKind::Newline,
        TokenKind::RBrace,
        TokenKind::Newline,
        TokenKind::Eof,
    ];

    assert_eq!(kinds(input), expected);
}

#[test]
fn test_token_positions() {
    let mut lexer = Lexer::new("a = 1\n  b = \"x\"");

    assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::Identifier, "a", 1, 1)));
    assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::Equal, "=", 1, 3)));
    assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::Integer, "1", 1, 5)));
    assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::Newline, "\n", 1, 6)));
    assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::Identifier, "b", 2, 3)));
    assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::Equal, "=", 2, 5)));
    assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::String, "x", 2, 7)));
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn test_string_escapes() {
    let mut lexer = Lexer::new(r#""line\n\ttab \"quoted\" \\ \'s\' \q""#);
    let tok = lexer.next_token().expect("Failed to get token");
    assert_eq!(tok.kind, TokenKind::String);
    assert_eq!(tok.literal, "line\n\ttab \"quoted\" \\ 's' q");
}

#[test]
fn test_single_quoted_string() {
    let mut lexer = Lexer::new(r#"'it "works"'"#);
    let tok = lexer.next_token().unwrap();
    assert_eq!(tok.literal, r#"it "works""#);
}

#[test]
fn test_unclosed_string_error() {
    let mut lexer = Lexer::new("name = \"oops");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    assert_eq!(
        lexer.next_token(),
        Err(ForgeError::UnclosedString {
            quote: '"',
            line: 1,
            column: 8,
        })
    );
}

#[test]
fn test_trailing_backslash_is_unclosed() {
    let mut lexer = Lexer::new("\"abc\\");
    assert!(matches!(lexer.next_token(), Err(ForgeError::UnclosedString { .. })));
}

#[test]
fn test_number_shapes() {
    let cases = [
        ("42", TokenKind::Integer),
        ("-7", TokenKind::Integer),
        ("+3", TokenKind::Integer),
        ("3.14", TokenKind::Float),
        ("-0.5", TokenKind::Float),
        ("1e10", TokenKind::Float),
        ("2.5E-3", TokenKind::Float),
        // shape only, conversion fails later in the parser
        ("1.2.3", TokenKind::Float),
    ];

    for (input, kind) in cases {
        let tok = Lexer::new(input).next_token().unwrap();
        assert_eq!(tok.kind, kind, "input {input}");
        assert_eq!(tok.literal, input);
    }
}

#[test]
fn test_keywords_case_insensitive() {
    let tokens = Lexer::new("TRUE False NULL Include truely").tokenize().unwrap();
    let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.literal.as_str())).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::Boolean, "TRUE"),
            (TokenKind::Boolean, "False"),
            (TokenKind::Null, "NULL"),
            (TokenKind::Include, "Include"),
            (TokenKind::Identifier, "truely"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn test_comment_literal() {
    let tokens = Lexer::new("a = 1 #  trailing note \n").tokenize().unwrap();
    let comment = tokens.iter().find(|t| t.kind == TokenKind::Comment).unwrap();
    assert_eq!(comment.literal, "trailing note");
    assert_eq!(comment.column, 7);
}

#[test]
fn test_environment_token() {
    let tok = Lexer::new("$HOME_DIR2").next_token().unwrap();
    assert_eq!(tok, Token::new(TokenKind::Environment, "HOME_DIR2", 1, 1));
}

#[test]
fn test_bare_dollar_is_error() {
    assert_eq!(
        Lexer::new("$ x").next_token(),
        Err(ForgeError::UnexpectedCharacter {
            character: '$',
            line: 1,
            column: 1,
        })
    );
}

#[test]
fn test_unexpected_character() {
    let mut lexer = Lexer::new("a = @");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.position(), Some((1, 5)));
    assert_eq!(err.code(), 102);
}

#[test]
fn test_lone_minus_is_error() {
    assert!(matches!(
        Lexer::new("- 1").next_token(),
        Err(ForgeError::UnexpectedCharacter { character: '-', .. })
    ));
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(
        kinds("a = 1\r\nb = 2\r\n"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Integer,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Integer,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}
