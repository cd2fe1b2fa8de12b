//! # entrychk-json
//!
//! **Tier 1 (JSON Engine)**
//!
//! A self-contained JSON parse engine: lexer, recursive-descent parser,
//! arena-owned parse tree, and the conversion layers the semantic checks
//! rely on: numeric width probing across every integer and float width
//! the toolkit exposes, and byte-oriented string escape decoding/encoding.
//!
//! ## What belongs here
//! * Tokenizing and parsing JSON text into a [`Tree`]
//! * Numeric literal width probing ([`number`])
//! * String escape codec ([`strings`])
//! * Serializing a tree back to JSON text
//!
//! ## What does NOT belong here
//! * Schema knowledge or semantic validation (see `entrychk-sem`)
//! * File I/O and CLI concerns
//!
//! Lex and parse errors abort the document via `Result`; conversion
//! failures (a number fitting no width, a lone surrogate) mark the node
//! `converted = false` and parsing continues, so a later semantic pass
//! can report them in context.

mod lex;
mod parse;
mod tree;

pub mod number;
pub mod strings;

pub use lex::{LexError, Lexer, Token, TokenKind};
pub use parse::{parse_json, parse_json_with, ParseError, ParserConfig, JSON_MAX_DEPTH};
pub use tree::{Node, NodeId, NodeKind, Tree};
