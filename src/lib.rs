//! # cuentas
//!
//! cuentas is an interactive calculator for real-valued expressions written
//! in Rust. It parses and evaluates arithmetic over named variables,
//! predefined mathematical constants, and a small set of unary functions,
//! one statement per input line.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::{
    ast::Statement,
    error::{EvalError, ParserError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Token, tokenize},
        parser::core::Parser,
        symbol_table::SymbolTable,
    },
};

/// Defines the structure of parsed statements.
///
/// This module declares the `Expression`, `Assignment` and `Statement` types
/// that represent the syntactic structure of an input line as a tree. The
/// AST is built by the parser, walked by the evaluator, and cloned into
/// evaluation errors.
///
/// # Responsibilities
/// - Defines the three expression shapes and the statement sum.
/// - Enforces the token-kind invariants of each node at construction.
/// - Provides deep cloning, structural equality and pretty-printing.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// This module defines the two error families that can be raised while
/// processing a statement. Both carry enough context (the offending token or
/// a clone of the offending subexpression) to explain the fault, and both
/// know how to print their tagged diagnostic form.
///
/// # Responsibilities
/// - Defines the parser-error and evaluation-error taxonomies.
/// - Attaches the problem token or expression to every failure.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// This module ties together the lexer, the token stream, the parser, the
/// evaluator and the symbol table to provide a complete pipeline from one
/// line of input to a value or a diagnostic.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides the entry points used by the REPL driver.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The successful result of running one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// The line was an expression; this is its value.
    Value(f64),
    /// The line was an assignment; this is the variable that was stored.
    VariableStored(String),
}

/// Any failure produced while running one input line.
///
/// Unions the lexical check with the two error families so the driver can
/// treat every diagnostic uniformly.
#[derive(Debug, Clone, PartialEq)]
pub enum LineError {
    /// The scanner flagged part of the line as unrecognizable.
    Lexical {
        /// The error token produced by the scanner.
        token: Token,
    },
    /// The parser rejected the statement.
    Parse(ParserError),
    /// The evaluator rejected the statement.
    Eval(EvalError),
}

impl LineError {
    /// Returns the diagnostic tag printed ahead of the message.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Lexical { .. } => "<ERROR LÉXICO>",
            Self::Parse(error) => error.tag(),
            Self::Eval(error) => error.tag(),
        }
    }

    /// Writes the tagged one-line form of the error to a sink.
    ///
    /// # Errors
    /// Propagates any I/O error raised by the sink.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Lexical { .. } => writeln!(out, "{} {}", self.tag(), self),
            Self::Parse(error) => error.print_to(out),
            Self::Eval(error) => error.print_to(out),
        }
    }
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical { .. } => {
                write!(f, "Se ha detectado un token de error en la entrada")
            },
            Self::Parse(error) => error.fmt(f),
            Self::Eval(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical { .. } => None,
            Self::Parse(error) => Some(error),
            Self::Eval(error) => Some(error),
        }
    }
}

impl From<ParserError> for LineError {
    fn from(error: ParserError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for LineError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

/// Runs one line of input against a symbol table.
///
/// The line is tokenized, refused if the scanner flagged any part of it,
/// parsed into a statement, and finally evaluated (for an expression) or
/// executed (for an assignment). A failed assignment leaves the symbol
/// table untouched.
///
/// # Errors
/// Returns a [`LineError`] for a lexical, parse or evaluation failure.
///
/// # Examples
/// ```
/// use cuentas::{LineOutcome, interpreter::symbol_table::SymbolTable, run_line};
///
/// let mut symbols = SymbolTable::default();
///
/// // Expressions yield their value.
/// let outcome = run_line("(3 + 4) * 5 - 6 / 2^2", &mut symbols).unwrap();
/// assert_eq!(outcome, LineOutcome::Value(33.5));
///
/// // Assignments report the stored variable.
/// let outcome = run_line("a = 2 + 2", &mut symbols).unwrap();
/// assert_eq!(outcome, LineOutcome::VariableStored("a".to_string()));
///
/// // 'b' is not defined here, so the line fails.
/// assert!(run_line("a + b", &mut symbols).is_err());
/// ```
pub fn run_line(line: &str, symbols: &mut SymbolTable) -> Result<LineOutcome, LineError> {
    let tokens = tokenize(line);
    if let Some(bad) = tokens.iter().find(|token| matches!(token, Token::Error)) {
        return Err(LineError::Lexical { token: bad.clone() });
    }

    let mut parser = Parser::new(tokens);
    match parser.parse_next_statement()? {
        Statement::Expression(expression) => {
            Ok(LineOutcome::Value(evaluate(&expression, symbols)?))
        },
        Statement::Assignment(assignment) => {
            assignment.execute(symbols)?;
            Ok(LineOutcome::VariableStored(assignment.variable_name().to_owned()))
        },
    }
}
