use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Precedence levels, weakest first.
///
/// Assignment sits above all of these but is only recognised at statement
/// level, so it never takes part in operator folding.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Exponent,
    Unary,
}

impl BindingPower {
    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// The next tighter level, used as the floor for a left-associative
    /// operator's right operand.
    pub fn next(&self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative => BindingPower::Exponent,
            BindingPower::Exponent | BindingPower::Unary => BindingPower::Unary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

lazy_static! {
    /// Binary operators with their level and grouping.
    ///
    /// `**` groups to the left like every other operator here.
    pub static ref PRECEDENCE_TABLE: HashMap<TokenKind, (BindingPower, Associativity)> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, (BindingPower::Additive, Associativity::Left));
        map.insert(TokenKind::Dash, (BindingPower::Additive, Associativity::Left));
        map.insert(TokenKind::Star, (BindingPower::Multiplicative, Associativity::Left));
        map.insert(TokenKind::Slash, (BindingPower::Multiplicative, Associativity::Left));
        map.insert(TokenKind::StarStar, (BindingPower::Exponent, Associativity::Left));
        map
    };
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower, Associativity) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser, power_associativity: Associativity) {
    // Binary operators
    for (kind, (binding_power, associativity)) in PRECEDENCE_TABLE.iter() {
        let associativity = if *kind == TokenKind::StarStar {
            power_associativity
        } else {
            *associativity
        };
        parser.led(*kind, *binding_power, associativity, parse_binary_expr);
    }

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Plus, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, (BindingPower, Associativity)>;
