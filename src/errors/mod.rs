//! Error types and error handling for the parser.
//!
//! This module defines the closed set of errors a parse can end with:
//!
//! - Lexical errors (invalid characters, unterminated comments)
//! - Syntax errors (unexpected tokens, unexpected end of input)
//! - The nesting limit guarding against unbounded recursion
//!
//! Every error carries the byte position it was raised at.

pub mod errors;
