//! Lexer: turns JSON text into a stream of [`Token`]s.
//!
//! The lexer walks the input one `char` at a time and hands out one token per
//! call to [`Lexer::next_token`]. It keeps its own row/column cursor so every
//! token and every error can point back into the source.
//!
//! # Key design decisions
//!
//! - **Cursor semantics**: `col` is the column of the current character. A
//!   newline bumps `row` and puts `col` back to 1 for the next character. Once
//!   the input is exhausted the cursor sits one column past the last
//!   character, which is where a missing character would have been.
//! - **Raw strings**: escape sequences are not decoded. A backslash and the
//!   character after it are copied into the string as written; the only thing
//!   an escape does is stop `\"` from closing the literal.
//! - **Numbers**: the integer part is either a single `0` or starts with
//!   `1`-`9`, so `01` fails at the `1`. A fraction or exponent makes the
//!   number a float. Integers that overflow `i64` keep their digits as
//!   `Number::BigInteger` instead of failing.
//! - **No recovery**: after an error the lexer state is unspecified and the
//!   caller is expected to stop.

use crate::error::{JsonError, Result};
use crate::token::{Position, Token, TokenKind};
use crate::types::Number;
use std::str::Chars;

/// Pull-based tokenizer over an in-memory string.
pub struct Lexer<'a> {
    chars: Chars<'a>,
    current: Option<char>,
    row: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut chars = text.chars();
        let current = chars.next();
        Self {
            chars,
            current,
            row: 1,
            col: 1,
        }
    }

    /// Current cursor position (the character about to be examined).
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Scan the next token. Once the input is exhausted this keeps returning
    /// `EndOfInput`.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        let start = self.position();

        let Some(c) = self.current else {
            return Ok(Token::new(TokenKind::EndOfInput, start));
        };

        let kind = match c {
            '{' => self.punct(TokenKind::LBrace),
            '}' => self.punct(TokenKind::RBrace),
            '[' => self.punct(TokenKind::LBracket),
            ']' => self.punct(TokenKind::RBracket),
            ':' => self.punct(TokenKind::Colon),
            ',' => self.punct(TokenKind::Comma),
            '"' => TokenKind::String(self.string(start)?),
            '-' | '0'..='9' => TokenKind::Number(self.number(start)?),
            't' => {
                self.keyword("true")?;
                TokenKind::Bool(true)
            }
            'f' => {
                self.keyword("false")?;
                TokenKind::Bool(false)
            }
            'n' => {
                self.keyword("null")?;
                TokenKind::Null
            }
            _ => return Err(self.error()),
        };

        Ok(Token::new(kind, start))
    }

    /// Move past the current character, keeping row/column in step.
    fn advance(&mut self) {
        match self.current {
            Some('\n') => {
                self.row += 1;
                self.col = 1;
            }
            Some(_) => self.col += 1,
            None => return,
        }
        self.current = self.chars.next();
    }

    fn error(&self) -> JsonError {
        JsonError::character(self.current, self.position())
    }

    fn current_is_digit(&self) -> bool {
        self.current.is_some_and(|c| c.is_ascii_digit())
    }

    fn skip_whitespace(&mut self) {
        while self.current.is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn punct(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Scan a string literal. The cursor is on the opening quote.
    fn string(&mut self, start: Position) -> Result<String> {
        let mut out = String::new();
        self.advance();
        loop {
            match self.current {
                None => {
                    return Err(JsonError::UnterminatedString {
                        row: start.row,
                        col: start.col,
                    })
                }
                Some('"') => {
                    self.advance();
                    return Ok(out);
                }
                Some('\\') => {
                    out.push('\\');
                    self.advance();
                    // The escaped character goes in untouched, even if it is a quote.
                    if let Some(escaped) = self.current {
                        out.push(escaped);
                        self.advance();
                    }
                }
                Some(c) => {
                    out.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Scan a number. The cursor is on `-` or the first digit.
    fn number(&mut self, start: Position) -> Result<Number> {
        let mut lexeme = String::new();
        let mut is_float = false;

        if self.current == Some('-') {
            self.push_current(&mut lexeme);
        }

        match self.current {
            Some('0') => {
                self.push_current(&mut lexeme);
                if self.current_is_digit() {
                    return Err(self.error());
                }
            }
            Some(c) if c.is_ascii_digit() => self.push_digits(&mut lexeme),
            _ => return Err(self.error()),
        }

        if self.current == Some('.') {
            is_float = true;
            self.push_current(&mut lexeme);
            self.push_digits(&mut lexeme);
        }

        if matches!(self.current, Some('e' | 'E')) {
            is_float = true;
            self.push_current(&mut lexeme);
            if matches!(self.current, Some('+' | '-')) {
                self.push_current(&mut lexeme);
            }
            if !self.current_is_digit() {
                return Err(self.error());
            }
            self.push_digits(&mut lexeme);
        }

        if is_float {
            lexeme
                .parse::<f64>()
                .map(Number::Float)
                .map_err(|_| JsonError::character(lexeme.chars().next(), start))
        } else {
            // The grammar already holds, so a failed parse means the value overflows.
            Ok(match lexeme.parse::<i64>() {
                Ok(n) => Number::Integer(n),
                Err(_) => Number::BigInteger(lexeme),
            })
        }
    }

    fn push_current(&mut self, lexeme: &mut String) {
        if let Some(c) = self.current {
            lexeme.push(c);
            self.advance();
        }
    }

    fn push_digits(&mut self, lexeme: &mut String) {
        while self.current_is_digit() {
            self.push_current(lexeme);
        }
    }

    /// Match `word` character by character.
    fn keyword(&mut self, word: &str) -> Result<()> {
        for expected in word.chars() {
            if self.current != Some(expected) {
                return Err(self.error());
            }
            self.advance();
        }
        Ok(())
    }
}

/// Scan `text` to completion. The last token is always `EndOfInput`.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(text);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is_end();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
