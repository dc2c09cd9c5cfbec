use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub span: (usize, usize),
}

impl Token<'_> {
    /// Case-insensitive match against a bare keyword. Quoted identifiers
    /// never match, so `` `key` `` is not the `KEY` keyword.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Word && self.lexeme.eq_ignore_ascii_case(keyword)
    }

    pub fn is_any_keyword(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.is_keyword(kw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Words and quoted spans
    Word,
    QuotedIdent, // `name`
    String,      // 'text' or "text"

    // Trivia
    Whitespace,
    LineComment,  // -- text, # text
    BlockComment, // /* text */

    // Delimiters
    LeftParen,  // (
    RightParen, // )
    Comma,      // ,
    Semicolon,  // ;
    Dot,        // .
    Equals,     // =

    // Any other single character
    Other,
}

impl TokenKind {
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::QuotedIdent)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word => write!(f, "word"),
            TokenKind::QuotedIdent => write!(f, "quoted identifier"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::LineComment => write!(f, "line comment"),
            TokenKind::BlockComment => write!(f, "block comment"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Equals => write!(f, "="),
            TokenKind::Other => write!(f, "symbol"),
        }
    }
}
