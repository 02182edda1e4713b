use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BinaryExpr, IdentifierExpr, NumberExpr, ParenExpr, UnaryExpr},
    statements::{AssignmentStmt, ExpressionStmt},
};

/// Expression Types
///
/// Every node exclusively owns its children, so a tree is always acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(NumberExpr),
    Identifier(IdentifierExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Paren(ParenExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::Identifier(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Paren(expr) => &expr.span,
        }
    }

    /// Name of the grammar rule that produced this node.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number",
            Expr::Identifier(_) => "identifier",
            Expr::Unary(_) => "unary_expression",
            Expr::Binary(_) => "binary_expression",
            Expr::Paren(_) => "parentheses_expression",
        }
    }

    /// Looks up a child by its grammar label: `lhs` and `rhs` on binary
    /// expressions, `expr` on unary and parenthesized ones.
    pub fn field(&self, name: &str) -> Option<&Expr> {
        match (self, name) {
            (Expr::Binary(expr), "lhs") => Some(expr.left.as_ref()),
            (Expr::Binary(expr), "rhs") => Some(expr.right.as_ref()),
            (Expr::Unary(expr), "expr") => Some(expr.operand.as_ref()),
            (Expr::Paren(expr), "expr") => Some(expr.inner.as_ref()),
            _ => None,
        }
    }

    /// The `op` label, for nodes that have one.
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            Expr::Unary(expr) => Some(expr.operator.symbol()),
            Expr::Binary(expr) => Some(expr.operator.symbol()),
            _ => None,
        }
    }

    /// Shape of the tree as an S-expression, without positions.
    pub fn to_sexp(&self) -> String {
        match self {
            Expr::Number(expr) => expr.value.clone(),
            Expr::Identifier(expr) => expr.name.clone(),
            Expr::Unary(expr) => format!("({} {})", expr.operator, expr.operand.to_sexp()),
            Expr::Binary(expr) => format!(
                "({} {} {})",
                expr.operator,
                expr.left.to_sexp(),
                expr.right.to_sexp()
            ),
            Expr::Paren(expr) => format!("(group {})", expr.inner.to_sexp()),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(expr) => expr.fmt(f),
            Expr::Identifier(expr) => expr.fmt(f),
            Expr::Unary(expr) => expr.fmt(f),
            Expr::Binary(expr) => expr.fmt(f),
            Expr::Paren(expr) => expr.fmt(f),
        }
    }
}

/// Statement Types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Assignment(_) => "assignment",
            Stmt::Expression(stmt) => stmt.expression.kind_name(),
        }
    }

    /// The expression on the right of an assignment, or the statement itself.
    pub fn expression(&self) -> &Expr {
        match self {
            Stmt::Assignment(stmt) => &stmt.value,
            Stmt::Expression(stmt) => &stmt.expression,
        }
    }

    pub fn to_sexp(&self) -> String {
        match self {
            Stmt::Assignment(stmt) => format!("(= {} {})", stmt.target, stmt.value.to_sexp()),
            Stmt::Expression(stmt) => stmt.expression.to_sexp(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Assignment(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
        }
    }
}

/// Root of a parse: the statements in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl SourceFile {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Display for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, stmt) in self.body.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
