use super::scanner::{
    bump, is_ident_char, is_ident_start, peek_char, peek_nth, skip_whitespace, take_while,
};
use super::*;
use crate::error::ForgeError;

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token> {
    skip_whitespace(lexer);

    let line = lexer.line;
    let column = lexer.column + 1;

    match peek_char(lexer) {
        None => Ok(Token::new(TokenKind::Eof, "", line, column)),
        Some('\n') => tokenize_symbol(lexer, TokenKind::Newline, line, column),
        Some(';') => tokenize_symbol(lexer, TokenKind::Semicolon, line, column),
        Some(',') => tokenize_symbol(lexer, TokenKind::Comma, line, column),
        Some('.') => tokenize_symbol(lexer, TokenKind::Period, line, column),
        Some('=') => tokenize_symbol(lexer, TokenKind::Equal, line, column),
        Some('{') => tokenize_symbol(lexer, TokenKind::LBrace, line, column),
        Some('}') => tokenize_symbol(lexer, TokenKind::RBrace, line, column),
        Some('[') => tokenize_symbol(lexer, TokenKind::LBracket, line, column),
        Some(']') => tokenize_symbol(lexer, TokenKind::RBracket, line, column),
        Some('#') => tokenize_comment(lexer, line, column),
        Some('$') => tokenize_environment(lexer, line, column),
        Some(quote @ ('"' | '\'')) => tokenize_string(lexer, quote, line, column),
        Some(c) if c.is_ascii_digit() => tokenize_number(lexer, line, column),
        Some('-' | '+') if peek_nth(lexer, 1).is_some_and(|c| c.is_ascii_digit()) => {
            tokenize_number(lexer, line, column)
        }
        Some(c) if is_ident_start(c) => tokenize_identifier_or_keyword(lexer, line, column),
        Some(ch) => Err(ForgeError::UnexpectedCharacter {
            character: ch,
            line,
            column,
        }),
    }
}

fn tokenize_symbol(lexer: &mut Lexer, kind: TokenKind, line: usize, column: usize) -> Result<Token> {
    let ch = bump(lexer).map(String::from).unwrap_or_default();
    Ok(Token::new(kind, ch, line, column))
}

fn tokenize_comment(lexer: &mut Lexer, line: usize, column: usize) -> Result<Token> {
    bump(lexer); // consume '#'
    let text = take_while(lexer, |c| c != '\n');
    Ok(Token::new(TokenKind::Comment, text.trim(), line, column))
}

fn tokenize_environment(lexer: &mut Lexer, line: usize, column: usize) -> Result<Token> {
    if !peek_nth(lexer, 1).is_some_and(is_ident_start) {
        bump(lexer);
        return Err(ForgeError::UnexpectedCharacter {
            character: '$',
            line,
            column,
        });
    }
    bump(lexer); // consume '$'
    let name = take_while(lexer, is_ident_char);
    Ok(Token::new(TokenKind::Environment, name, line, column))
}

fn tokenize_string(lexer: &mut Lexer, quote: char, line: usize, column: usize) -> Result<Token> {
    bump(lexer); // consume opening quote
    let mut content = String::new();

    loop {
        match bump(lexer) {
            None => {
                return Err(ForgeError::UnclosedString {
                    quote,
                    line,
                    column,
                });
            }
            Some(ch) if ch == quote => break,
            Some('\\') => {
                let Some(next_ch) = bump(lexer) else {
                    return Err(ForgeError::UnclosedString {
                        quote,
                        line,
                        column,
                    });
                };
                let escaped = match next_ch {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '0' => '\0',
                    other => other,
                };
                content.push(escaped);
            }
            Some(ch) => content.push(ch),
        }
    }

    Ok(Token::new(TokenKind::String, content, line, column))
}

/// Classifies the digit shape only; conversion happens in the parser.
fn tokenize_number(lexer: &mut Lexer, line: usize, column: usize) -> Result<Token> {
    let mut num = String::new();
    if let Some(sign @ ('-' | '+')) = peek_char(lexer) {
        num.push(sign);
        bump(lexer);
    }

    num.push_str(&take_while(lexer, |c| c.is_ascii_digit() || c == '.'));
    let mut kind = if num.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    if let Some(marker @ ('e' | 'E')) = peek_char(lexer) {
        num.push(marker);
        bump(lexer);
        if let Some(sign @ ('-' | '+')) = peek_char(lexer) {
            num.push(sign);
            bump(lexer);
        }
        num.push_str(&take_while(lexer, |c| c.is_ascii_digit()));
        kind = TokenKind::Float;
    }

    Ok(Token::new(kind, num, line, column))
}

fn tokenize_identifier_or_keyword(lexer: &mut Lexer, line: usize, column: usize) -> Result<Token> {
    let ident = take_while(lexer, is_ident_char);

    // Keywords are case-insensitive; the literal keeps the source spelling
    let kind = match ident.to_ascii_lowercase().as_str() {
        "true" | "false" => TokenKind::Boolean,
        "null" => TokenKind::Null,
        "include" => TokenKind::Include,
        _ => TokenKind::Identifier,
    };

    Ok(Token::new(kind, ident, line, column))
}
