//! Splits a `CREATE TABLE` clause list into top-level clauses and classifies
//! each one by its leading keywords.

use crate::lexer::{
    Lexer,
    token::{Token, TokenKind},
};
use crate::table::IndexKind;
use std::iter::Peekable;

/// One top-level entry of the clause list. `definition` is always the
/// verbatim clause text, trimmed of surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause<'a> {
    PrimaryKey {
        definition: &'a str,
    },
    ForeignKey {
        name: &'a str,
        definition: &'a str,
    },
    Index {
        name: &'a str,
        kind: IndexKind,
        definition: &'a str,
    },
    /// Column definitions, check constraints and anything else the model
    /// does not track.
    Other {
        definition: &'a str,
    },
}

impl<'a> Clause<'a> {
    pub fn definition(&self) -> &'a str {
        match self {
            Clause::PrimaryKey { definition }
            | Clause::ForeignKey { definition, .. }
            | Clause::Index { definition, .. }
            | Clause::Other { definition } => definition,
        }
    }
}

/// Splits on commas at parenthesis depth zero. Quoted spans and comments are
/// single tokens, so commas inside them never split.
pub fn split_clauses(body: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for token in Lexer::new(body) {
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => depth = depth.saturating_sub(1),
            TokenKind::Comma if depth == 0 => {
                push_trimmed(&mut clauses, &body[start..token.span.0]);
                start = token.span.1;
            }
            _ => {}
        }
    }
    push_trimmed(&mut clauses, &body[start..]);

    clauses
}

fn push_trimmed<'a>(clauses: &mut Vec<&'a str>, clause: &'a str) {
    let clause = clause.trim();
    if !clause.is_empty() {
        clauses.push(clause);
    }
}

pub fn parse_clauses(body: &str) -> impl Iterator<Item = Clause<'_>> {
    split_clauses(body).into_iter().map(classify)
}

/// Classifies a single trimmed clause. Precedence: `PRIMARY KEY`, then
/// `CONSTRAINT ... FOREIGN KEY`, then the index forms, then everything else.
pub fn classify(clause: &str) -> Clause<'_> {
    let mut tokens = Lexer::significant(clause).peekable();
    let other = Clause::Other { definition: clause };

    let Some(first) = tokens.next() else {
        return other;
    };

    if first.is_keyword("PRIMARY") {
        return primary_key(&mut tokens, clause).unwrap_or(other);
    }

    if first.is_keyword("CONSTRAINT") {
        let symbol = tokens
            .next_if(|t| {
                t.kind == TokenKind::QuotedIdent
                    || (t.kind == TokenKind::Word
                        && !t.is_any_keyword(&["PRIMARY", "FOREIGN", "UNIQUE", "CHECK"]))
            })
            .map_or("", |t| t.lexeme);

        let Some(kind) = tokens.next() else {
            return other;
        };
        return if kind.is_keyword("PRIMARY") {
            primary_key(&mut tokens, clause).unwrap_or(other)
        } else if kind.is_keyword("FOREIGN") && !symbol.is_empty() {
            match tokens.next() {
                Some(t) if t.is_keyword("KEY") => Clause::ForeignKey {
                    name: symbol,
                    definition: clause,
                },
                _ => other,
            }
        } else if kind.is_keyword("UNIQUE") {
            tokens.next_if(|t| t.is_any_keyword(&["KEY", "INDEX"]));
            index(&mut tokens, IndexKind::Unique, symbol, clause)
        } else {
            other
        };
    }

    let kind = if first.is_any_keyword(&["KEY", "INDEX"]) {
        IndexKind::Plain
    } else if first.is_keyword("UNIQUE") {
        IndexKind::Unique
    } else if first.is_keyword("FULLTEXT") {
        IndexKind::Fulltext
    } else if first.is_keyword("SPATIAL") {
        IndexKind::Spatial
    } else {
        return other;
    };

    if kind != IndexKind::Plain {
        tokens.next_if(|t| t.is_any_keyword(&["KEY", "INDEX"]));
    }
    index(&mut tokens, kind, "", clause)
}

fn primary_key<'a, I>(tokens: &mut Peekable<I>, clause: &'a str) -> Option<Clause<'a>>
where
    I: Iterator<Item = Token<'a>>,
{
    tokens.next_if(|t| t.is_keyword("KEY"))?;
    Some(Clause::PrimaryKey { definition: clause })
}

/// Reads the optional index name following the keyword group. `USING` starts
/// an index type, not a name.
fn index<'a, I>(tokens: &mut Peekable<I>, kind: IndexKind, fallback: &'a str, clause: &'a str) -> Clause<'a>
where
    I: Iterator<Item = Token<'a>>,
{
    let name = tokens
        .next_if(|t| t.kind.is_identifier() && !t.is_keyword("USING"))
        .map_or(fallback, |t| t.lexeme);

    Clause::Index {
        name,
        kind,
        definition: clause,
    }
}

/// Column named by the first key part of an index clause, as written. `None`
/// when the first key part is an expression.
pub fn first_key_part(definition: &str) -> Option<&str> {
    let mut tokens = Lexer::significant(definition).skip_while(|t| t.kind != TokenKind::LeftParen);
    tokens.next()?;
    tokens
        .next()
        .filter(|t| t.kind.is_identifier())
        .map(|t| t.lexeme)
}
