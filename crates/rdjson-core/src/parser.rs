//! Recursive-descent parser: builds a [`Value`] tree from the lexer's tokens.
//!
//! One method per grammar rule, one token of lookahead:
//!
//! ```text
//! value   := object | array | STRING | NUMBER | BOOL | NULL
//! object  := '{' [ STRING ':' value (',' STRING ':' value)* ] '}'
//! array   := '[' [ value (',' value)* ] ']'
//! ```
//!
//! Any value is accepted at the root, bare literals included. The root must be
//! followed by the end of input.
//!
//! Duplicate object keys overwrite earlier ones: the last value wins and the
//! key stays where it first appeared.

use crate::error::{JsonError, Result};
use crate::lexer::Lexer;
use crate::options::ParseOptions;
use crate::token::{Token, TokenKind};
use crate::types::{Map, Value};
use tracing::{debug, trace};

/// Parse JSON text into a value tree.
///
/// Zero-length input is not an error: it yields `Ok(None)`. Anything else
/// must be exactly one JSON value, optionally surrounded by whitespace.
///
/// ```
/// use rdjson_core::{parse, Value};
///
/// let value = parse(r#"{"a": [1, 2.5]}"#).unwrap().unwrap();
/// assert_eq!(value.get("a").and_then(|a| a.get_index(0)), Some(&Value::from(1i64)));
/// assert_eq!(parse("").unwrap(), None);
/// ```
pub fn parse(text: &str) -> Result<Option<Value>> {
    parse_with_options(text, &ParseOptions::default())
}

/// [`parse`] with explicit options.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Option<Value>> {
    if text.is_empty() {
        debug!("empty input, nothing to parse");
        return Ok(None);
    }
    Parser::with_options(text, *options)
        .and_then(Parser::parse)
        .map(Some)
        .inspect_err(|e| debug!(error = %e, "parse failed"))
}

/// A single-use parser over one input buffer.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a parser and read the first token.
    pub fn new(text: &'a str) -> Result<Self> {
        Self::with_options(text, ParseOptions::default())
    }

    pub fn with_options(text: &'a str, options: ParseOptions) -> Result<Self> {
        let mut lexer = Lexer::new(text);
        let current = lexer.next_token()?;
        trace!(token = %current.kind, pos = %current.pos, "token");
        Ok(Self {
            lexer,
            current,
            depth: 0,
            options,
        })
    }

    /// Parse one root value and require the end of input after it.
    pub fn parse(mut self) -> Result<Value> {
        debug!(max_depth = self.options.max_depth(), "parsing json text");
        let value = self.value()?;
        if !self.current.is_end() {
            return Err(self.unexpected("end of input"));
        }
        debug!(kind = value.type_name(), "parsed json text");
        Ok(value)
    }

    /// Pull the next token from the lexer and return the one it replaces.
    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        trace!(token = %next.kind, pos = %next.pos, "token");
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the current token if it has the expected kind.
    fn eat(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token> {
        if self.current.kind.same_kind(&kind) {
            self.advance()
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> JsonError {
        JsonError::syntax(self.current.kind.clone(), expected, self.current.pos)
    }

    fn value(&mut self) -> Result<Value> {
        let value = match &mut self.current.kind {
            TokenKind::LBrace => return self.object(),
            TokenKind::LBracket => return self.array(),
            TokenKind::Number(n) => Value::Number(n.clone()),
            TokenKind::String(s) => Value::String(std::mem::take(s)),
            TokenKind::Bool(b) => Value::Bool(*b),
            TokenKind::Null => Value::Null,
            _ => return Err(self.unexpected("a value")),
        };
        self.advance()?;
        Ok(value)
    }

    fn array(&mut self) -> Result<Value> {
        self.enter()?;
        self.eat(TokenKind::LBracket, "'['")?;
        let mut items = Vec::new();

        if !matches!(self.current.kind, TokenKind::RBracket) {
            loop {
                items.push(self.value()?);
                match self.current.kind {
                    TokenKind::Comma => {
                        self.advance()?;
                    }
                    TokenKind::RBracket => break,
                    _ => return Err(self.unexpected("',' or ']'")),
                }
            }
        }

        self.eat(TokenKind::RBracket, "']'")?;
        self.leave();
        Ok(Value::Array(items))
    }

    fn object(&mut self) -> Result<Value> {
        self.enter()?;
        self.eat(TokenKind::LBrace, "'{'")?;
        let mut map = Map::new();

        if !matches!(self.current.kind, TokenKind::RBrace) {
            loop {
                let key = self.key()?;
                self.eat(TokenKind::Colon, "':'")?;
                let value = self.value()?;
                map.insert(key, value);
                match self.current.kind {
                    TokenKind::Comma => {
                        self.advance()?;
                    }
                    TokenKind::RBrace => break,
                    _ => return Err(self.unexpected("',' or '}'")),
                }
            }
        }

        self.eat(TokenKind::RBrace, "'}'")?;
        self.leave();
        Ok(Value::Object(map))
    }

    fn key(&mut self) -> Result<String> {
        let key = match &mut self.current.kind {
            TokenKind::String(s) => std::mem::take(s),
            _ => return Err(self.unexpected("a string key")),
        };
        self.advance()?;
        Ok(key)
    }

    /// Step into a container, refusing to go past `max_depth`.
    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth() {
            return Err(JsonError::DepthLimitExceeded {
                max_depth: self.options.max_depth(),
                row: self.current.pos.row,
                col: self.current.pos.col,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
