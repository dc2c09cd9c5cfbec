//! Finds the first `CREATE TABLE` statement in an arbitrary SQL script.
//!
//! The scan is token based: comments and quoted spans are single tokens, so a
//! `CREATE TABLE` inside `-- ...`, `/* ... */` or a string never matches, and
//! parentheses inside quotes never affect the nesting depth.

use crate::lexer::{
    Lexer,
    token::{Token, TokenKind},
};
use std::iter::Peekable;
use tracing::{debug, warn};

/// Byte-exact slices of a located `CREATE TABLE` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateTableStatement<'a> {
    /// From `CREATE` through the terminating `;`, or to end of input.
    pub text: &'a str,
    /// Byte offset of `CREATE` in the scanned script.
    pub offset: usize,
    /// Table name as written, schema qualifier included.
    pub name: &'a str,
    /// Text between the outer parentheses of the clause list.
    pub body: &'a str,
    /// Table options after the closing parenthesis, without the `;`.
    pub options: &'a str,
    /// False when the input ended before the clause list closed.
    pub balanced: bool,
}

/// Returns the first `CREATE TABLE` statement of `script` verbatim, or an
/// empty string when there is none outside comments.
pub fn extract_first_create_table(script: &str) -> &str {
    locate_create_table(script).map_or("", |stmt| stmt.text)
}

pub fn locate_create_table(script: &str) -> Option<CreateTableStatement<'_>> {
    let mut tokens = Lexer::significant(script).peekable();

    let (start, mut head_end) = loop {
        let token = tokens.next()?;
        if !token.is_keyword("CREATE") {
            continue;
        }
        if let Some(table_kw) = skip_to_table_keyword(&mut tokens) {
            break (token.span.0, table_kw.span.1);
        }
    };

    if let Some(end) = skip_if_not_exists(&mut tokens) {
        head_end = end;
    }
    let (name, name_end) = table_name(&mut tokens, script);
    head_end = name_end.unwrap_or(head_end);

    let mut stmt = CreateTableStatement {
        text: &script[start..],
        offset: start,
        name,
        body: "",
        options: "",
        balanced: true,
    };

    // `CREATE TABLE t LIKE s;` has no clause list
    let open = loop {
        match tokens.next() {
            Some(t) if t.kind == TokenKind::LeftParen => break t,
            Some(t) if t.kind == TokenKind::Semicolon => {
                stmt.text = &script[start..t.span.1];
                stmt.options = &script[head_end..t.span.0];
                debug!(table = %stmt.name, offset = start, "Located CREATE TABLE without clause list");
                return Some(stmt);
            }
            Some(_) => continue,
            None => {
                stmt.balanced = false;
                warn!(table = %stmt.name, offset = start, "CREATE TABLE has no clause list before end of input");
                return Some(stmt);
            }
        }
    };

    let body_start = open.span.1;
    let mut depth = 1usize;
    let mut body_end = None;
    for t in tokens.by_ref() {
        match t.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => {
                depth -= 1;
                if depth == 0 {
                    body_end = Some(t.span);
                    break;
                }
            }
            _ => {}
        }
    }

    let Some((body_end, options_start)) = body_end else {
        stmt.body = &script[body_start..];
        stmt.balanced = false;
        warn!(table = %stmt.name, offset = start, depth, "Unbalanced parentheses in CREATE TABLE, using text up to end of input");
        return Some(stmt);
    };
    stmt.body = &script[body_start..body_end];

    let (options_end, end) = tokens
        .find(|t| t.kind == TokenKind::Semicolon)
        .map_or((script.len(), script.len()), |t| t.span);
    stmt.options = &script[options_start..options_end];
    stmt.text = &script[start..end];

    debug!(
        table = %stmt.name,
        offset = start,
        len = stmt.text.len(),
        "Located CREATE TABLE statement"
    );
    Some(stmt)
}

/// Consumes `[OR REPLACE] [TEMPORARY] TABLE` after `CREATE` and returns the
/// `TABLE` token. Leaves the offending token in place on mismatch.
fn skip_to_table_keyword<'a, I>(tokens: &mut Peekable<I>) -> Option<Token<'a>>
where
    I: Iterator<Item = Token<'a>>,
{
    if tokens.next_if(|t| t.is_keyword("OR")).is_some() {
        tokens.next_if(|t| t.is_keyword("REPLACE"))?;
    }
    tokens.next_if(|t| t.is_keyword("TEMPORARY"));
    tokens.next_if(|t| t.is_keyword("TABLE"))
}

/// Consumes `IF NOT EXISTS`, returning the end offset of the last token.
fn skip_if_not_exists<'a, I>(tokens: &mut Peekable<I>) -> Option<usize>
where
    I: Iterator<Item = Token<'a>>,
{
    let mut end = tokens.next_if(|t| t.is_keyword("IF"))?.span.1;
    for keyword in ["NOT", "EXISTS"] {
        if let Some(t) = tokens.next_if(|t| t.is_keyword(keyword)) {
            end = t.span.1;
        }
    }
    Some(end)
}

/// Reads `name` or `schema.name`. Returns the verbatim text and, when a name
/// was present, its end offset.
fn table_name<'a, I>(tokens: &mut Peekable<I>, script: &'a str) -> (&'a str, Option<usize>)
where
    I: Iterator<Item = Token<'a>>,
{
    let mut span: Option<(usize, usize)> = None;
    while let Some(part) = tokens.next_if(|t| t.kind.is_identifier()) {
        let begin = span.map_or(part.span.0, |(begin, _)| begin);
        span = Some((begin, part.span.1));
        if tokens.next_if(|t| t.kind == TokenKind::Dot).is_none() {
            break;
        }
    }
    match span {
        Some((begin, end)) => (&script[begin..end], Some(end)),
        None => ("", None),
    }
}
