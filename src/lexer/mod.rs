// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::error::Result;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // --- literals ---
    Identifier,
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Environment,
    Comment,

    // --- keywords ---
    Include,

    // --- punctuation ---
    Semicolon,
    Comma,
    Period,
    Equal,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // --- layout ---
    Newline,
    Eof,
}

impl TokenKind {
    /// Tokens that may follow a complete setting or include. Only `;` and
    /// newlines belong to the statement; the others are left for the caller.
    pub fn is_terminator(self) -> bool {
        matches!(
            self,
            TokenKind::Semicolon | TokenKind::Newline | TokenKind::RBrace | TokenKind::Comment | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Null => "NULL",
            TokenKind::Environment => "ENVIRONMENT",
            TokenKind::Comment => "COMMENT",
            TokenKind::Include => "INCLUDE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Period => "PERIOD",
            TokenKind::Equal => "EQUAL",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A lexed token with its literal text and the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            literal: literal.into(),
            line,
            column,
        }
    }

    /// Human readable form used in syntax errors.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Newline => "NEWLINE".to_string(),
            TokenKind::Eof => "EOF".to_string(),
            _ => format!("{} '{}'", self.kind, self.literal),
        }
    }
}

/// The scanner. Owns its input so the parser can swap lexers while expanding includes.
pub struct Lexer {
    input: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Produce the next token. Once the input is exhausted every call returns `Eof`.
    pub fn next_token(&mut self) -> Result<Token> {
        tokenizer::next_token(self)
    }

    /// Drain the whole input, including the final `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[cfg(test)]
mod tests;
