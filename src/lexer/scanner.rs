use super::*;

/// Advance the cursor and update line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.input.get(lexer.pos).copied();
    if let Some(c) = curr {
        lexer.pos += 1;
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 0;
        } else {
            lexer.column += 1;
        }
    }
    curr
}

/// Peek at the current character without consuming it
pub(super) fn peek_char(lexer: &Lexer) -> Option<char> {
    lexer.input.get(lexer.pos).copied()
}

/// Peek `offset` characters past the current one
pub(super) fn peek_nth(lexer: &Lexer, offset: usize) -> Option<char> {
    lexer.input.get(lexer.pos + offset).copied()
}

/// Skip insignificant whitespace. Newlines are tokens and are left in place.
pub(super) fn skip_whitespace(lexer: &mut Lexer) {
    while let Some(c) = peek_char(lexer) {
        match c {
            ' ' | '\t' | '\r' => {
                bump(lexer);
            }
            _ => break,
        }
    }
}

/// Consume characters while `pred` holds, collecting them
pub(super) fn take_while(lexer: &mut Lexer, pred: impl Fn(char) -> bool) -> String {
    let mut out = String::new();
    while let Some(c) = peek_char(lexer) {
        if !pred(c) {
            break;
        }
        out.push(c);
        bump(lexer);
    }
    out
}

pub(super) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(super) fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
