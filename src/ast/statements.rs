use std::fmt::Display;

use crate::Span;

use super::{ast::Expr, expressions::IdentifierExpr};

/// `name = expression`. Only an identifier can be assigned to, and the value
/// is a plain expression, never another assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentStmt {
    pub target: IdentifierExpr,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

impl Display for AssignmentStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
