//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens into
//! a tree of statements and expressions. It uses a Pratt parser for
//! expressions with precedence and associativity taken from a static table,
//! and handles:
//!
//! - Statement parsing (assignment vs. bare expression)
//! - Expression parsing (binary and unary operators, grouping, literals)
//! - A nesting limit so hostile input fails instead of exhausting the stack
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
