use super::*;
use crate::value::Reference;

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value> {
    let tok = parser.bump()?;
    match tok.kind {
        TokenKind::String => Ok(Value::String(tok.literal)),
        TokenKind::Boolean => Ok(Value::Boolean(tok.literal.eq_ignore_ascii_case("true"))),
        TokenKind::Null => Ok(Value::Null),
        TokenKind::Integer => parse_integer(&tok),
        TokenKind::Float => parse_float(&tok),
        TokenKind::Period => parse_relative_reference(parser),
        TokenKind::Identifier => parse_absolute_reference(parser, tok.literal),
        TokenKind::Environment => Ok(parse_environment(&tok.literal)),
        TokenKind::LBracket => parse_list(parser),
        _ => Err(parser.error_at(
            &tok,
            format!(
                "expected STRING, INTEGER, FLOAT, BOOLEAN, NULL, ENVIRONMENT, reference or list, instead found {}",
                tok.describe()
            ),
        )),
    }
}

fn parse_integer(tok: &Token) -> Result<Value> {
    tok.literal
        .parse::<i64>()
        .map(Value::Integer)
        .map_err(|e| invalid_number(tok, e.to_string()))
}

fn parse_float(tok: &Token) -> Result<Value> {
    let f = tok
        .literal
        .parse::<f64>()
        .map_err(|e| invalid_number(tok, e.to_string()))?;
    if !f.is_finite() {
        return Err(invalid_number(tok, "number too large".to_string()));
    }
    Ok(Value::Float(f))
}

fn invalid_number(tok: &Token, reason: String) -> ForgeError {
    ForgeError::InvalidNumber {
        literal: tok.literal.clone(),
        line: tok.line,
        column: tok.column,
        reason,
    }
}

/// Environment variables are read once, at parse time. Unset means empty.
fn parse_environment(name: &str) -> Value {
    match std::env::var(name) {
        Ok(value) => Value::String(value),
        Err(_) => {
            tracing::debug!(variable = name, "environment variable not set, using empty string");
            Value::String(String::new())
        }
    }
}

/// `.a.b` resolves from the section open right now. The leading period is consumed.
fn parse_relative_reference(parser: &mut Parser) -> Result<Value> {
    let first = parser
        .expect(TokenKind::Identifier)
        .map_err(|e| e.with_hint("a relative reference is a period followed by a name, e.g. '.port'"))?;
    let path = parse_reference_path(parser, first.literal)?;
    Ok(Value::Reference(Reference::relative(path, parser.stack.clone())))
}

/// `a.b` resolves from the document root.
fn parse_absolute_reference(parser: &mut Parser, first: String) -> Result<Value> {
    let path = parse_reference_path(parser, first)?;
    Ok(Value::Reference(Reference::absolute(path)))
}

fn parse_reference_path(parser: &mut Parser, first: String) -> Result<String> {
    let mut path = first;
    while parser.peek().kind == TokenKind::Period {
        parser.bump()?;
        let segment = parser.expect(TokenKind::Identifier)?;
        path.push('.');
        path.push_str(&segment.literal);
    }
    Ok(path)
}

/// Elements are separated by commas and/or newlines; a trailing comma is fine.
fn parse_list(parser: &mut Parser) -> Result<Value> {
    let mut items = Vec::new();

    loop {
        skip_list_padding(parser)?;
        match parser.peek().kind {
            TokenKind::RBracket => {
                parser.bump()?;
                return Ok(Value::List(items));
            }
            TokenKind::Eof => return Err(parser.unexpected("']'")),
            _ => {}
        }

        items.push(parse_value(parser)?);

        skip_list_padding(parser)?;
        if parser.peek().kind == TokenKind::Comma {
            parser.bump()?;
        }
    }
}

/// Newlines and comments inside a list carry no meaning.
fn skip_list_padding(parser: &mut Parser) -> Result<()> {
    while matches!(parser.peek().kind, TokenKind::Newline | TokenKind::Comment) {
        parser.bump()?;
    }
    Ok(())
}
