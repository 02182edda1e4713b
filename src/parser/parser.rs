//! Parser implementation for building the syntax tree.
//!
//! This module contains the Parser struct and the `parse` entry point.
//! Expressions are parsed by precedence climbing driven by NUD/LED handler
//! tables; statements are handled in `stmt`.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers and associativity for operator precedence

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::{SourceFile, Stmt},
    config::{ParseOptions, StatementMode},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, Associativity, BPLookup, BindingPower, LEDHandler, LEDLookup,
        NUDHandler, NUDLookup,
    },
    stmt::parse_stmt,
};

/// The parser state for one parse.
///
/// Holds the token stream, the cursor into it and the handler tables. Nothing
/// is shared between parses.
pub struct Parser {
    /// The list of tokens to parse, always ending with `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Current expression nesting
    depth: usize,
    /// Nesting at which the parse gives up
    max_depth: usize,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for binding powers (precedence) and associativity
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>, options: &ParseOptions) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(Position::null);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span { start: end, end }
            ));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser, options.power_associativity);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token `n` places ahead, `EOF` past the end.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if current + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Consumes a token of the given kind or fails with a syntax error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected(expected_kind.describe()))
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Builds the error for finding the current token where `expected` was
    /// required.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();

        let error = if token.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from(expected),
            }
        } else {
            ErrorImpl::UnexpectedToken {
                expected: String::from(expected),
                found: token.value.clone(),
            }
        };

        Error::new(error, token.span.start)
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Enters one level of expression nesting.
    pub fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::new(
                ErrorImpl::InputTooComplex {
                    limit: self.max_depth,
                },
                self.get_position(),
            ));
        }
        Ok(())
    }

    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        associativity: Associativity,
        led_fn: LEDHandler,
    ) {
        self.binding_power_lookup
            .insert(kind, (binding_power, associativity));
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }
}

/// Parses a token stream into a `SourceFile`.
///
/// In `Single` mode the body holds exactly one statement and anything after
/// it is an error. In `Repeated` mode statements are read until `EOF`.
/// The first error aborts the parse.
pub fn parse(tokens: Vec<Token>, options: &ParseOptions) -> Result<SourceFile, Error> {
    let mut parser = Parser::new(tokens, options);

    let result = parse_body(&mut parser, options.mode);
    if let Err(error) = &result {
        debug!("parse failed: {}", error);
    }

    Ok(SourceFile {
        body: result?,
        span: Span {
            start: Position::null(),
            end: parser.get_position(),
        },
    })
}

fn parse_body(parser: &mut Parser, mode: StatementMode) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![];

    match mode {
        StatementMode::Single => {
            body.push(parse_stmt(parser)?);

            if parser.has_tokens() {
                return Err(parser.unexpected(TokenKind::EOF.describe()));
            }
        }
        StatementMode::Repeated => {
            while parser.has_tokens() {
                body.push(parse_stmt(parser)?);
            }
        }
    }

    Ok(body)
}
