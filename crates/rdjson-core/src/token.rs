//! Tokens produced by the [`Lexer`](crate::lexer::Lexer) and consumed by the
//! [`Parser`](crate::parser::Parser).

use crate::types::Number;
use std::fmt;

/// A 1-based row/column location in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// The location of the first character of any input.
    pub const START: Position = Position { row: 1, col: 1 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// The kind of a token. Literal kinds carry their decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(Number),
    /// String contents with escape sequences left as written.
    String(String),
    Bool(bool),
    Null,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    EndOfInput,
}

impl TokenKind {
    /// True for the kinds that can stand on their own as a value
    /// (`Number`, `String`, `Bool`, `Null`).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_) | TokenKind::String(_) | TokenKind::Bool(_) | TokenKind::Null
        )
    }

    /// Compare kinds while ignoring any literal payload.
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::String(s) => write!(f, "string \"{}\"", s),
            TokenKind::Bool(b) => write!(f, "{}", b),
            TokenKind::Null => f.write_str("null"),
            TokenKind::LBrace => f.write_str("'{'"),
            TokenKind::RBrace => f.write_str("'}'"),
            TokenKind::LBracket => f.write_str("'['"),
            TokenKind::RBracket => f.write_str("']'"),
            TokenKind::Colon => f.write_str("':'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Position) -> Self {
        Self { kind, pos }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
