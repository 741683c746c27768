//! # rdjson-core
//!
//! A small, self-contained JSON parser: a character-level lexer with row/column
//! tracking feeding a recursive-descent parser that builds a [`Value`] tree.
//!
//! It decodes and nothing else. There is no serializer, no streaming API and
//! no escape-sequence decoding: string contents are kept exactly as written
//! between the quotes.
//!
//! ## Quick start
//!
//! ```rust
//! use rdjson_core::{parse, Value};
//!
//! let value = parse(r#"{"a":1,"b":[true,false,null]}"#).unwrap().unwrap();
//! let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
//! assert_eq!(keys, ["a", "b"]);
//! assert_eq!(value.get("a").and_then(Value::as_i64), Some(1));
//!
//! // Errors carry the position they were detected at.
//! let err = parse("tru").unwrap_err();
//! assert_eq!(err.to_string(), "invalid character end of input at row 1, column 4");
//! ```
//!
//! ## Modules
//!
//! - [`lexer`]: text → [`Token`] stream
//! - [`parser`]: tokens → [`Value`] tree
//! - [`types`]: [`Value`] and [`Number`]
//! - [`token`]: [`Token`], [`TokenKind`], [`Position`]
//! - [`options`]: [`ParseOptions`] (nesting limit)
//! - [`load`]: read a file, then parse it
//! - [`error`]: [`JsonError`]

pub mod error;
pub mod lexer;
pub mod load;
pub mod options;
pub mod parser;
pub mod token;
pub mod types;

pub use error::{JsonError, Result};
pub use lexer::{tokenize, Lexer};
pub use load::{load_from_file, load_from_text};
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
pub use parser::{parse, parse_with_options, Parser};
pub use token::{Position, Token, TokenKind};
pub use types::{Map, Number, Value};
