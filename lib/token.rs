use std::fmt;

use crate::position::Range;

pub const FUNCTION: &str = "함수";
pub const BRANCH: &str = "만약";
pub const ELSE: &str = "아니면";
pub const RETURN: &str = "리턴";
pub const TRUE: &str = "참";
pub const FALSE: &str = "거짓";

/// Lexeme that marks a list literal as a table when written directly after `[`.
pub const TABLE_MARKER: &str = "!";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Operator,
    Identifier,
    Keyword,
    Number,
    Boolean,
    String,
    GroupDelimiter,
    BlockDelimiter,
    ListDelimiter,
    Separator,
    Illegal,
    IllegalString,
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Operator => "operator",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::String => "string",
            TokenKind::GroupDelimiter => "group delimiter",
            TokenKind::BlockDelimiter => "block delimiter",
            TokenKind::ListDelimiter => "list delimiter",
            TokenKind::Separator => "separator",
            TokenKind::Illegal => "illegal",
            TokenKind::IllegalString => "illegal string",
            TokenKind::End => "end",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub range: Range,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, range: Range) -> Self {
        Self {
            kind,
            value: value.into(),
            range,
        }
    }

    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::End => write!(f, "end of input"),
            _ => write!(f, "{}", self.value),
        }
    }
}

/// Pull interface the parser consumes tokens through. The parser only ever
/// looks at the current token; there is no lookahead and no push-back.
pub trait TokenSource {
    /// The current token, not yet consumed.
    fn read(&self) -> &Token;

    /// Consumes the current token and fetches the next one.
    fn advance(&mut self);

    fn is_end(&self) -> bool {
        self.read().kind == TokenKind::End
    }
}
