//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into a stream
//! of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Numbers, lowercase identifiers and the arithmetic operators
//! - Byte positions on every token for error reporting
//! - Whitespace, line continuations and `{ ... }` comments

pub mod lexer;
pub mod tokens;
