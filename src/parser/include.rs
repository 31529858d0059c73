use std::path::Path;

use super::*;
use crate::fs::normalize;

/// `include "pattern"` splices every matching file into the current section.
///
/// Relative patterns are anchored on the entry file's directory, whichever
/// file the directive appears in. A file already parsed in this session is
/// skipped; the check compares path strings as the file system returns them,
/// so two spellings of one file are both parsed.
pub(super) fn parse_include(parser: &mut Parser) -> Result<()> {
    let tok = parser.bump()?;
    if tok.kind != TokenKind::String {
        return Err(parser
            .error_at(&tok, format!("expected STRING instead found {}", tok.describe()))
            .with_hint("include takes a quoted file name or glob pattern"));
    }

    // Validate the terminator now, consume it once the includes are done
    if !parser.peek().kind.is_terminator() {
        return Err(parser.unexpected("'SEMICOLON' or 'NEWLINE'"));
    }

    let pattern = anchor_pattern(parser.files.first(), &tok.literal);
    let filenames = parser.fs.glob(&pattern).map_err(|e| ForgeError::Glob {
        pattern: pattern.clone(),
        message: e.to_string(),
    })?;
    tracing::debug!(pattern = %pattern, matches = filenames.len(), "expanding include");

    for filename in filenames {
        if parser.has_parsed(&filename) {
            tracing::debug!(file = %filename, "skipping include, already parsed");
            continue;
        }

        let source = read_source(parser.fs.as_ref(), &filename)?;
        // Marked before descending so a file that includes itself stops here
        parser.files.push(filename.clone());
        parser.current_section().add_include(filename.as_str());
        parse_source(parser, &source)?;
    }

    document::end_statement(parser)
}

fn anchor_pattern(entry: Option<&String>, pattern: &str) -> String {
    if Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    match entry {
        Some(entry) => {
            let dir = Path::new(entry).parent().unwrap_or_else(|| Path::new(""));
            normalize(&dir.join(pattern)).to_string_lossy().into_owned()
        }
        None => pattern.to_string(),
    }
}

/// Read a whole file through the file system. The handle is dropped before returning.
pub(super) fn read_source(fs: &dyn FileSystem, path: &str) -> Result<String> {
    tracing::debug!(file = path, "opening config file");
    let reader = fs.open(path).map_err(|e| ForgeError::file(path, &e))?;
    read_to_string(reader, path)
}

/// Run the statement loop over `source`, then put the includer's lexer back.
fn parse_source(parser: &mut Parser, source: &str) -> Result<()> {
    let mut lexer = Lexer::new(source);
    let first = lexer.next_token()?;
    let saved_lexer = std::mem::replace(&mut parser.lexer, lexer);
    let saved_peek = std::mem::replace(&mut parser.peek, first);

    let result = document::parse_statements(parser);

    parser.lexer = saved_lexer;
    parser.peek = saved_peek;
    result
}
