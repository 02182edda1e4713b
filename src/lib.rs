#![allow(clippy::module_inception)]

use crate::{
    ast::ast::{SourceFile, Stmt},
    config::{ParseOptions, StatementMode},
    errors::errors::{Error, ErrorImpl, ErrorTip},
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses exactly one statement.
pub fn parse_statement(source: &str) -> Result<Stmt, Error> {
    let mut file = parse_with_options(source, &ParseOptions::default())?;

    file.body.pop().ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("statement"),
            },
            file.span.end,
        )
    })
}

/// Parses zero or more statements written back to back.
pub fn parse_statements(source: &str) -> Result<Vec<Stmt>, Error> {
    let options = ParseOptions::default().with_mode(StatementMode::Repeated);
    Ok(parse_with_options(source, &options)?.body)
}

pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<SourceFile, Error> {
    let tokens = lexer::lexer::tokenize(source)?;
    parser::parser::parse(tokens, options)
}

/// Returns the 1-based line number, the line text and the column of `position`.
pub fn get_line_at_position(source: &str, pos: usize) -> Option<(usize, String, usize)> {
    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last character of the final line.
    match source.rsplit_once('\n') {
        Some((_, last)) if !source.ends_with('\n') => {
            Some((line_number - 1, last.to_string(), last.len()))
        }
        Some(_) => Some((line_number, String::new(), 0)),
        None => Some((1, source.to_string(), source.len())),
    }
}


/// Renders an error with the offending line and a caret under the failing column.
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnexpectedToken (...)
        -> input.expr
          |
        1 | x = (1 + 2
          | ----------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
