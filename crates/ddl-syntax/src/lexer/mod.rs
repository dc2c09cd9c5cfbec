//! Tokenizer for MySQL/MariaDB DDL text, driven by `grammar/ddl.pest`.
//!
//! The grammar accepts any input: every byte belongs to exactly one token,
//! and unterminated comments or quoted spans simply run to the end of the
//! input. Token spans are byte offsets into the original text, so callers
//! can slice the source verbatim.

use crate::{
    lexer::token::{Token, TokenKind},
    parser::{DdlParser, Rule},
};
use pest::{
    Parser,
    iterators::{Pair, Pairs},
};
use tracing::warn;

pub mod token;

pub struct Lexer<'a> {
    pairs: Option<Pairs<'a, Rule>>,
    /// Whole input as one token, used only if the grammar rejects it.
    fallback: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        match DdlParser::parse(Rule::tokens, input) {
            Ok(pairs) => Lexer {
                pairs: Some(pairs),
                fallback: None,
            },
            Err(err) => {
                warn!(error = %err, "Tokenizer rejected input, keeping it as a single token");
                Lexer {
                    pairs: None,
                    fallback: (!input.is_empty()).then_some(Token {
                        kind: TokenKind::Other,
                        lexeme: input,
                        span: (0, input.len()),
                    }),
                }
            }
        }
    }

    /// Tokens of `input` with whitespace and comments removed.
    pub fn significant(input: &'a str) -> impl Iterator<Item = Token<'a>> {
        Lexer::new(input).filter(|token| !token.kind.is_trivia())
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        match self.pairs.as_mut() {
            Some(pairs) => pairs.find_map(token),
            None => self.fallback.take(),
        }
    }
}

fn token(pair: Pair<'_, Rule>) -> Option<Token<'_>> {
    let kind = match pair.as_rule() {
        Rule::whitespace => TokenKind::Whitespace,
        Rule::line_comment => TokenKind::LineComment,
        Rule::block_comment => TokenKind::BlockComment,
        Rule::quoted_ident => TokenKind::QuotedIdent,
        Rule::string => TokenKind::String,
        Rule::lparen => TokenKind::LeftParen,
        Rule::rparen => TokenKind::RightParen,
        Rule::comma => TokenKind::Comma,
        Rule::semicolon => TokenKind::Semicolon,
        Rule::dot => TokenKind::Dot,
        Rule::equals => TokenKind::Equals,
        Rule::word => TokenKind::Word,
        Rule::other => TokenKind::Other,
        // EOI and the silent helper rules
        _ => return None,
    };
    let span = pair.as_span();
    Some(Token {
        kind,
        lexeme: span.as_str(),
        span: (span.start(), span.end()),
    })
}
