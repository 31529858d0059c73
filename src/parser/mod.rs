// Author: Dustin Pilgrim
// License: MIT

use std::io::Read;

use crate::error::{ForgeError, Result};
use crate::fs::{FileSystem, NativeFs};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::value::{Section, Value};

mod document;
mod include;
mod value;

/// Recursive-descent parser building a [`Section`] tree from forge source.
///
/// Include directives are expanded in place through the parser's
/// [`FileSystem`]; relative include patterns are anchored on the directory of
/// the entry file given to [`Parser::from_file`].
pub struct Parser {
    fs: Box<dyn FileSystem>,
    files: Vec<String>,
    settings: Section,
    lexer: Lexer,
    peek: Token,
    stack: Vec<String>,
}

impl Parser {
    /// Parser over in-memory source using the native file system for includes.
    pub fn new(input: &str) -> Result<Self> {
        Self::with_fs(NativeFs, input)
    }

    pub fn with_fs(fs: impl FileSystem + 'static, input: &str) -> Result<Self> {
        Self::build(Box::new(fs), input, Vec::new())
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let source = read_to_string(reader, "<reader>")?;
        Self::new(&source)
    }

    /// Open `path` as the entry file.
    pub fn from_file(path: &str) -> Result<Self> {
        Self::from_file_with_fs(NativeFs, path)
    }

    pub fn from_file_with_fs(fs: impl FileSystem + 'static, path: &str) -> Result<Self> {
        let source = include::read_source(&fs, path)?;
        Self::build(Box::new(fs), &source, vec![path.to_string()])
    }

    fn build(fs: Box<dyn FileSystem>, input: &str, files: Vec<String>) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let peek = lexer.next_token()?;
        Ok(Parser {
            fs,
            files,
            settings: Section::new(),
            lexer,
            peek,
            stack: Vec::new(),
        })
    }

    /// Parse the whole input, expanding includes. The first error aborts the parse.
    pub fn parse(&mut self) -> Result<()> {
        document::parse_statements(self)?;
        document::check_balanced(self)
    }

    pub fn settings(&self) -> &Section {
        &self.settings
    }

    pub fn into_settings(self) -> Section {
        self.settings
    }

    /// Every file parsed so far, entry file first.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub(crate) fn has_parsed(&self, filename: &str) -> bool {
        self.files.iter().any(|f| f == filename)
    }

    pub(crate) fn bump(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.peek, next))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.peek
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.peek.kind != kind {
            return Err(self.unexpected(&format!("'{}'", kind)));
        }
        self.bump()
    }

    /// Syntax error at `token`.
    pub(crate) fn error_at(&self, token: &Token, message: impl Into<String>) -> ForgeError {
        ForgeError::syntax(message, token.line, token.column)
    }

    /// "expected X instead found Y" at the lookahead token.
    pub(crate) fn unexpected(&self, expected: &str) -> ForgeError {
        self.error_at(
            &self.peek,
            format!("expected {} instead found {}", expected, self.peek.describe()),
        )
    }

    /// Settings, includes and comments go to the innermost open section.
    pub(crate) fn current_section(&mut self) -> &mut Section {
        let mut section = &mut self.settings;
        for name in &self.stack {
            section = section.add_section(name.as_str());
        }
        section
    }

    pub(crate) fn set(&mut self, name: String, value: Value) {
        self.current_section().set(name, value);
    }
}

fn read_to_string(mut reader: impl Read, name: &str) -> Result<String> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(|e| ForgeError::file(name, &e))?;
    Ok(source)
}
