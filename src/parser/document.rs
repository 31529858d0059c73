use super::*;

/// Statement loop shared by the entry file and every included file.
///
/// Included files run on the same section stack as their includer: a `}` in
/// an included file may close a section the includer opened, and a section
/// left open is closed by whatever follows the include. Stack balance is
/// checked once, by [`Parser::parse`].
pub(super) fn parse_statements(parser: &mut Parser) -> Result<()> {
    loop {
        let tok = parser.bump()?;
        match tok.kind {
            TokenKind::Eof => return Ok(()),
            TokenKind::Newline | TokenKind::Semicolon => {}
            TokenKind::Comment => {
                parser.current_section().add_comment(tok.literal);
            }
            TokenKind::Include => include::parse_include(parser)?,
            TokenKind::Identifier => parse_identifier_statement(parser, tok)?,
            TokenKind::RBrace => end_section(parser, &tok)?,
            _ => {
                return Err(parser.error_at(&tok, format!("unexpected token {}", tok.describe())));
            }
        }
    }
}

/// The whole document is parsed; every opened section must have been closed.
pub(super) fn check_balanced(parser: &Parser) -> Result<()> {
    if parser.stack.is_empty() {
        return Ok(());
    }
    Err(parser
        .error_at(parser.peek(), "expected end of section, instead found EOF")
        .with_hint(format!("close section '{}' with '}}'", parser.stack.join("."))))
}

/// `name {` opens a section, `name =` starts a setting.
fn parse_identifier_statement(parser: &mut Parser, name: Token) -> Result<()> {
    match parser.peek().kind {
        TokenKind::LBrace => {
            parser.bump()?;
            parser.current_section().add_section(name.literal.as_str());
            parser.stack.push(name.literal);
            tracing::trace!(section = %parser.stack.join("."), depth = parser.stack.len(), "open section");
            Ok(())
        }
        TokenKind::Equal => {
            parser.bump()?;
            parse_setting(parser, name.literal)
        }
        _ => Err(parser
            .unexpected("'=' or '{'")
            .with_hint(format!("'{}' must start a setting or a section", name.literal))),
    }
}

fn parse_setting(parser: &mut Parser, name: String) -> Result<()> {
    let value = value::parse_value(parser)?;
    end_statement(parser)?;
    parser.set(name, value);
    Ok(())
}

/// A setting or include ends at `;` or a newline, which are consumed, or
/// right before `}`, a trailing comment, or the end of input.
pub(super) fn end_statement(parser: &mut Parser) -> Result<()> {
    match parser.peek().kind {
        TokenKind::Semicolon | TokenKind::Newline => {
            parser.bump()?;
            Ok(())
        }
        kind if kind.is_terminator() => Ok(()),
        _ => Err(parser.unexpected("'SEMICOLON' or 'NEWLINE'")),
    }
}

fn end_section(parser: &mut Parser, tok: &Token) -> Result<()> {
    if parser.stack.is_empty() {
        return Err(parser.error_at(tok, "unexpected section end '}'"));
    }
    tracing::trace!(section = %parser.stack.join("."), depth = parser.stack.len(), "close section");
    parser.stack.pop();
    Ok(())
}
