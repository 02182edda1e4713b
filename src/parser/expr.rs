use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, BinaryOperator, IdentifierExpr, NumberExpr, ParenExpr, UnaryExpr,
            UnaryOperator,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{Associativity, BindingPower},
    parser::Parser,
};

/// Parses an expression whose operators all bind at least as tightly as `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    trace!("parse_expr({:?}): next token = {}", bp, parser.current_token());
    parser.enter()?;

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("expression"));
    };

    let mut left = nud(parser)?;

    // Fold operators while they bind at least as tightly as the floor.
    // Every fold deepens the tree by one, so it counts against the limit.
    let mut folds = 0;
    while let Some((operator_bp, associativity)) = parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        if operator_bp < bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&parser.current_token_kind()).copied() else {
            return Err(parser.unexpected("operator"));
        };

        parser.enter()?;
        folds += 1;

        left = led(parser, left, operator_bp, associativity)?;
    }

    for _ in 0..=folds {
        parser.exit();
    }
    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();
            Ok(Expr::Number(NumberExpr {
                value: token.value.clone(),
                span: token.span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Identifier(IdentifierExpr {
                name: token.value.clone(),
                span: token.span,
            }))
        }
        _ => Err(parser.unexpected("number or identifier")),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
    associativity: Associativity,
) -> Result<Expr, Error> {
    let Some(operator) = BinaryOperator::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected("binary operator"));
    };
    parser.advance();

    // A left-associative operator may not reappear at its own level on the right.
    let right_bp = match associativity {
        Associativity::Left => bp.next(),
        Associativity::Right => bp,
    };
    let right = parse_expr(parser, right_bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(operator) = UnaryOperator::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected("`+` or `-`"));
    };
    let start = parser.advance().span.start;

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        span: Span {
            start,
            end: operand.get_span().end,
        },
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span.start;
    let inner = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::CloseParen)?.span.end;

    Ok(Expr::Paren(ParenExpr {
        inner: Box::new(inner),
        span: Span { start, end },
    }))
}
