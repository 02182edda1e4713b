use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{AssignmentStmt, ExpressionStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Parses one statement.
///
/// Both statement forms can start with an identifier, so the assignment form
/// is tried first: an identifier immediately followed by `=` commits to it.
/// Anything else is parsed as an expression, the identifier included.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    trace!("parse_stmt: next token = {}", parser.current_token());

    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_kind(1) == TokenKind::Assignment
    {
        return parse_assignment_stmt(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: *expression.get_span(),
        expression,
    }))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    // The value is a plain expression, so `x = y = 1` stops before the second `=`.
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        span: Span {
            start: target.span.start,
            end: value.get_span().end,
        },
        target: IdentifierExpr {
            name: target.value,
            span: target.span,
        },
        value,
    }))
}
