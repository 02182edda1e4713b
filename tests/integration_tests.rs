//! Integration tests for the public parsing API.
//!
//! These tests drive the whole pipeline from source text through
//! tokenization and parsing, and check the tree through its labeled view.

use std::thread;

use arith_parser::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{BinaryOperator, UnaryOperator},
    },
    config::{ParseOptions, StatementMode},
    display_error,
    errors::errors::ErrorImpl,
    parse_statement, parse_statements, parse_with_options,
};

#[test]
fn test_parse_statement_examples() {
    let cases = [
        ("1+2*3", "(+ 1 (* 2 3))"),
        ("1-2-3", "(- (- 1 2) 3)"),
        ("2**3**2", "(** (** 2 3) 2)"),
        ("-1*2", "(* (- 1) 2)"),
        ("(1+2)*3", "(* (group (+ 1 2)) 3)"),
        ("x = 1+2", "(= x (+ 1 2))"),
    ];

    for (source, expected) in cases {
        let stmt = parse_statement(source).unwrap();
        assert_eq!(stmt.to_sexp(), expected, "source: {}", source);
    }
}

#[test]
fn test_labeled_access() {
    let stmt = parse_statement("x = a * (b - 1)").unwrap();

    let Stmt::Assignment(assignment) = &stmt else {
        panic!("expected an assignment");
    };
    assert_eq!(assignment.target.name, "x");
    assert_eq!(stmt.kind_name(), "assignment");

    let value = stmt.expression();
    assert_eq!(value.kind_name(), "binary_expression");
    assert_eq!(value.operator(), Some("*"));
    assert_eq!(value.field("lhs").map(Expr::kind_name), Some("identifier"));

    let grouped = value.field("rhs").unwrap();
    assert_eq!(grouped.kind_name(), "parentheses_expression");

    let inner = grouped.field("expr").unwrap();
    let Expr::Binary(binary) = inner else {
        panic!("expected a binary expression");
    };
    assert_eq!(binary.operator, BinaryOperator::Subtract);
    assert!(matches!(binary.right.as_ref(), Expr::Number(number) if number.as_u64() == Some(1)));

    assert!(value.field("expr").is_none());
    assert!(value.field("op").is_none());
}

#[test]
fn test_unary_labeled_access() {
    let stmt = parse_statement("-x").unwrap();
    let expr = stmt.expression();

    assert_eq!(expr.kind_name(), "unary_expression");
    assert_eq!(expr.operator(), Some("-"));
    assert_eq!(expr.field("expr").map(|e| e.to_string()), Some("x".to_string()));

    let Expr::Unary(unary) = expr else {
        panic!("expected a unary expression");
    };
    assert_eq!(unary.operator, UnaryOperator::Minus);
}

#[test]
fn test_number_literal_keeps_text() {
    let stmt = parse_statement("99999999999999999999999").unwrap();
    let Expr::Number(number) = stmt.expression() else {
        panic!("expected a number");
    };

    assert_eq!(number.value, "99999999999999999999999");
    assert_eq!(number.as_u64(), None);
}

#[test]
fn test_lexical_errors_surface_from_parse() {
    let error = parse_statement("{ abc").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::UnterminatedComment);

    let error = parse_statement("x&1").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '&' });
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_chained_assignment_fails() {
    let error = parse_statement("x=y=1").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_statements() {
    let shapes = |source: &str| {
        parse_statements(source)
            .unwrap()
            .iter()
            .map(Stmt::to_sexp)
            .collect::<Vec<_>>()
    };

    // No separators: a leading `-` on the next line continues the expression.
    assert_eq!(
        shapes("a = 1\nb = a ** 2 {square}\n-b"),
        vec!["(= a 1)", "(= b (- (** a 2) b))"]
    );
    assert_eq!(
        shapes("a = 1\nb = a ** 2 {square}\n(b)"),
        vec!["(= a 1)", "(= b (** a 2))", "(group b)"]
    );

    assert!(parse_statements("").unwrap().is_empty());
}

#[test]
fn test_long_flat_chain_is_too_complex() {
    let source = vec!["1"; 400_000].join("+");
    let error = parse_statement(&source).unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::InputTooComplex { limit: 256 });

    let options = ParseOptions::default().with_mode(StatementMode::Repeated);
    let error = parse_with_options(&source, &options).unwrap_err();
    assert_eq!(error.get_error_name(), "InputTooComplex");
}

#[test]
fn test_error_is_std_error() {
    let error = parse_statement("(1").unwrap_err();
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(error);

    assert_eq!(
        boxed.to_string(),
        "unexpected end of input: expected `)` at position 2"
    );
}

#[test]
fn test_display_error_for_syntax_error() {
    let source = "x = (1 + 2";
    let error = parse_statement(source).unwrap_err();
    let rendered = display_error(&error, source, "input.expr");

    assert_eq!(
        rendered,
        "Error: UnexpectedEndOfInput (Expected `)` before the end of input)\n\
         -> input.expr\n  |\n1 | x = (1 + 2\n  | ----------^\n"
    );
}

#[test]
fn test_parallel_parses() {
    let handles = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let source = format!("v = {} + {} * x", i, i + 1);
                parse_statement(&source)
            })
        })
        .collect::<Vec<_>>();

    for (i, handle) in handles.into_iter().enumerate() {
        let stmt = handle.join().unwrap().unwrap();
        assert_eq!(stmt.to_sexp(), format!("(= v (+ {} (* {} x)))", i, i + 1));
    }
}

/// Small deterministic generator so the round-trip check covers many shapes.
struct Generator(u64);

impl Generator {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }

    fn space(&mut self) -> &'static str {
        [" ", "", "  ", " {c} ", "\t", "\\\n"][self.next(6) as usize]
    }

    fn expr(&mut self, depth: u32) -> String {
        if depth == 0 {
            return ["0", "7", "42", "x", "total", "_n"][self.next(6) as usize].to_string();
        }

        match self.next(5) {
            0 => self.expr(0),
            1 => format!("{}{}", ["-", "+"][self.next(2) as usize], self.expr(depth - 1)),
            2 => format!("({}{}{})", self.space(), self.expr(depth - 1), self.space()),
            _ => {
                let op = ["+", "-", "*", "/", "**"][self.next(5) as usize];
                let left = self.expr(depth - 1);
                let gap = self.space();
                let right = self.expr(depth - 1);
                format!("{}{}{} {}", left, gap, op, right)
            }
        }
    }

    fn stmt(&mut self) -> String {
        let expr = self.expr(5);
        if self.next(3) == 0 {
            format!("x{}={}{}", self.space(), self.space(), expr)
        } else {
            expr
        }
    }
}

#[test]
fn test_canonical_form_round_trips() {
    let mut generator = Generator(0x5eed);

    for _ in 0..500 {
        let source = generator.stmt();
        let first = parse_statement(&source).unwrap_or_else(|e| panic!("{}: {}", source, e));

        let printed = first.to_string();
        let second = parse_statement(&printed).unwrap_or_else(|e| panic!("{}: {}", printed, e));

        assert_eq!(first.to_sexp(), second.to_sexp(), "source: {}", source);
        assert_eq!(printed, second.to_string());
    }
}

#[test]
fn test_canonical_form_round_trips_with_right_associative_power() {
    let options = ParseOptions::default()
        .with_power_associativity(arith_parser::parser::lookups::Associativity::Right)
        .with_mode(StatementMode::Repeated);
    let mut generator = Generator(42);

    for _ in 0..200 {
        let source = generator.stmt();
        let first = parse_with_options(&source, &options).unwrap();
        let second = parse_with_options(&first.to_string(), &options).unwrap();

        let shapes = |file: &arith_parser::ast::ast::SourceFile| {
            file.iter().map(Stmt::to_sexp).collect::<Vec<_>>()
        };
        assert_eq!(shapes(&first), shapes(&second), "source: {}", source);
    }
}
