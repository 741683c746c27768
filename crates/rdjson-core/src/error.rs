//! Error types for lexing, parsing and loading JSON text.

use crate::token::{Position, TokenKind};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning JSON text into a [`Value`](crate::Value).
///
/// Every variant except `Io` carries the 1-based row and column where the
/// problem was detected. All of them abort the parse; there is no partial
/// result.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The lexer met a character that cannot begin or continue a token.
    /// `found` is `None` when the input ended in the middle of a token.
    #[error("invalid character {} at row {row}, column {col}", describe_char(.found))]
    Character {
        found: Option<char>,
        row: usize,
        col: usize,
    },

    /// A string literal had no closing quote. The position is the opening quote.
    #[error("unterminated string starting at row {row}, column {col}")]
    UnterminatedString { row: usize, col: usize },

    /// The parser met a token the grammar does not allow at this point.
    #[error("unexpected {found} at row {row}, column {col}, expected {expected}")]
    Syntax {
        found: TokenKind,
        expected: &'static str,
        row: usize,
        col: usize,
    },

    /// Containers were nested deeper than the configured limit.
    #[error("nesting deeper than {max_depth} levels at row {row}, column {col}")]
    DepthLimitExceeded {
        max_depth: usize,
        row: usize,
        col: usize,
    },

    /// The input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JsonError {
    pub(crate) fn character(found: Option<char>, pos: Position) -> Self {
        JsonError::Character {
            found,
            row: pos.row,
            col: pos.col,
        }
    }

    pub(crate) fn syntax(found: TokenKind, expected: &'static str, pos: Position) -> Self {
        JsonError::Syntax {
            found,
            expected,
            row: pos.row,
            col: pos.col,
        }
    }

    /// Where in the input the error was detected, if it came from the text itself.
    pub fn position(&self) -> Option<Position> {
        match self {
            JsonError::Character { row, col, .. }
            | JsonError::UnterminatedString { row, col }
            | JsonError::Syntax { row, col, .. }
            | JsonError::DepthLimitExceeded { row, col, .. } => Some(Position::new(*row, *col)),
            JsonError::Io { .. } => None,
        }
    }

    /// True for errors raised by the lexer.
    pub fn is_character_error(&self) -> bool {
        matches!(
            self,
            JsonError::Character { .. } | JsonError::UnterminatedString { .. }
        )
    }

    /// True for grammar violations found by the parser.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, JsonError::Syntax { .. })
    }

    /// True when the input was well-formed so far but nested too deeply.
    pub fn is_depth_error(&self) -> bool {
        matches!(self, JsonError::DepthLimitExceeded { .. })
    }
}

/// Renders the offending character of a `Character` error.
fn describe_char(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{:?}", c),
        None => "end of input".to_string(),
    }
}

/// Convenience alias used throughout rdjson-core.
pub type Result<T> = std::result::Result<T, JsonError>;
