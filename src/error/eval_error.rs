use std::io::{self, Write};

use crate::{ast::Expression, interpreter::lexer::Token};

/// Represents all errors that can occur while evaluating an expression.
///
/// An evaluation error aborts the whole statement. Each variant owns a deep
/// clone of the (sub)expression that caused it, taken at the moment of the
/// failure, so diagnostics can pretty-print the offending operation even
/// after the original tree is gone.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Catch-all evaluation failure with a custom message.
    Evaluation {
        /// Details about the failure.
        message: String,
        /// The (sub)expression being evaluated when the failure occurred.
        problem: Expression,
    },
    /// An identifier was read that is not present in the symbol table.
    UndefinedVariable {
        /// The operand expression holding the unknown identifier.
        problem: Expression,
    },
    /// A division whose right-hand side evaluated to zero (either sign).
    DivideByZero {
        /// The whole division expression.
        problem: Expression,
    },
    /// An operation produced a value outside the real numbers.
    ComplexResult {
        /// The expression whose result came out non-real.
        problem: Expression,
    },
}

impl EvalError {
    /// Returns the expression that caused the failure.
    #[must_use]
    pub const fn problem_expr(&self) -> &Expression {
        match self {
            Self::Evaluation { problem, .. }
            | Self::UndefinedVariable { problem }
            | Self::DivideByZero { problem }
            | Self::ComplexResult { problem } => problem,
        }
    }

    /// Returns the diagnostic tag printed ahead of the message.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Evaluation { .. } => "<ERROR DE EVALUACIÓN>",
            Self::UndefinedVariable { .. } => "<VARIABLE NO DEFINIDA>",
            Self::DivideByZero { .. } => "<DIVISIÓN POR CERO>",
            Self::ComplexResult { .. } => "<RESULTADO COMPLEJO>",
        }
    }

    /// Writes the tagged one-line form of the error to a sink.
    ///
    /// # Errors
    /// Propagates any I/O error raised by the sink.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} {}", self.tag(), self)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Evaluation { message, problem } => {
                write!(f, "{message} (en la expresión {problem})")
            },

            Self::UndefinedVariable { problem } => match problem {
                Expression::Operand(Token::Identifier(name)) => {
                    write!(f, "No se ha definido la variable `{name}`")
                },
                other => write!(f, "No se ha definido la variable de la expresión {other}"),
            },

            Self::DivideByZero { problem } => {
                write!(f, "División por cero en la expresión {problem}")
            },

            Self::ComplexResult { problem } => {
                write!(f, "El resultado de la expresión {problem} no es un número real")
            },
        }
    }
}

impl std::error::Error for EvalError {}
