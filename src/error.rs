// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

use crate::value::ValueType;

pub type Result<T> = std::result::Result<T, ForgeError>;

/// The main error type for forge lexing, parsing, resolution and I/O.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForgeError {
    /// Raised when a string literal is not closed.
    #[error("unclosed string starting with '{quote}' at line <{line}> column <{column}>")]
    UnclosedString {
        quote: char,
        line: usize,
        column: usize,
    },

    /// Raised for characters that cannot start any token.
    #[error("unexpected character '{character}' at line <{line}> column <{column}>")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
    },

    #[error("syntax error line <{line}> column <{column}>: {message}{}", format_hint(.hint))]
    Syntax {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
    },

    #[error("invalid number '{literal}' at line <{line}> column <{column}>: {reason}")]
    InvalidNumber {
        literal: String,
        line: usize,
        column: usize,
        reason: String,
    },

    #[error("setting not found: {path}")]
    NotFound { path: String },

    #[error("circular reference: {path}")]
    CircularReference { path: String },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueType,
        found: ValueType,
    },

    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("conversion failed: {message}")]
    Conversion { message: String },

    #[error("file error '{path}': {message}")]
    File { path: String, message: String },

    #[error("invalid include pattern '{pattern}': {message}")]
    Glob { pattern: String, message: String },
}

fn format_hint(hint: &Option<String>) -> String {
    hint.as_ref().map_or(String::new(), |h| format!(" (hint: {h})"))
}

impl ForgeError {
    pub(crate) fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        ForgeError::Syntax {
            message: message.into(),
            line,
            column,
            hint: None,
        }
    }

    pub(crate) fn file(path: impl Into<String>, err: &std::io::Error) -> Self {
        ForgeError::File {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Attach a hint to a syntax error. Other variants are returned unchanged.
    pub(crate) fn with_hint(self, text: impl Into<String>) -> Self {
        match self {
            ForgeError::Syntax {
                message,
                line,
                column,
                ..
            } => ForgeError::Syntax {
                message,
                line,
                column,
                hint: Some(text.into()),
            },
            other => other,
        }
    }

    /// Stable numeric code: 1xx lexical, 2xx syntax, 3xx resolution, 4xx type, 5xx I/O.
    pub fn code(&self) -> u32 {
        match self {
            ForgeError::UnclosedString { .. } => 101,
            ForgeError::UnexpectedCharacter { .. } => 102,
            ForgeError::Syntax { .. } => 201,
            ForgeError::InvalidNumber { .. } => 202,
            ForgeError::NotFound { .. } => 301,
            ForgeError::CircularReference { .. } => 302,
            ForgeError::TypeMismatch { .. } => 401,
            ForgeError::OutOfRange { .. } => 402,
            ForgeError::Conversion { .. } => 403,
            ForgeError::File { .. } => 501,
            ForgeError::Glob { .. } => 502,
        }
    }

    /// Source position for errors raised while reading input, if any.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ForgeError::UnclosedString { line, column, .. }
            | ForgeError::UnexpectedCharacter { line, column, .. }
            | ForgeError::Syntax { line, column, .. }
            | ForgeError::InvalidNumber { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}
