use std::io::{self, Write};

use crate::interpreter::lexer::Token;

/// Display names of the five binary-operator token kinds, in precedence
/// order. This is the expected-kind list reported by
/// [`ParserError::ExpectedOperator`].
pub const BINARY_OPERATOR_KINDS: &[&str] =
    &["Plus ('+')", "Minus ('-')", "Asterisk ('*')", "Slash ('/')", "Caret ('^')"];

/// Represents all errors that can occur while parsing a statement.
///
/// A parse error aborts the whole statement; the parser attempts no recovery
/// and produces no partial tree. Each variant carries the token (by value,
/// not by reference) that made the parser give up, so diagnostics can point
/// at the exact spot.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserError {
    /// Catch-all syntactic failure with a custom message.
    Syntax {
        /// Details about the failure.
        message: String,
        /// The token the parser was looking at.
        token:   Token,
    },
    /// The parser needed one of a specific set of token kinds and found
    /// something else.
    ExpectedToken {
        /// Display names of the kinds that would have been legal here.
        expected: &'static [&'static str],
        /// The token actually found.
        found:    Token,
    },
    /// An expression was followed by something that is not a binary
    /// operator.
    ExpectedOperator {
        /// The token found where an operator should be.
        found: Token,
    },
    /// A parenthesized subexpression was not closed properly.
    MismatchedParentheses {
        /// The opening parenthesis token.
        paren:  Token,
        /// The token found where `)` was required.
        nearby: Token,
    },
}

impl ParserError {
    /// Returns the token that made the parser stop.
    #[must_use]
    pub const fn problem_token(&self) -> &Token {
        match self {
            Self::Syntax { token, .. } => token,
            Self::ExpectedToken { found, .. } | Self::ExpectedOperator { found } => found,
            Self::MismatchedParentheses { nearby, .. } => nearby,
        }
    }

    /// Returns the diagnostic tag printed ahead of the message.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "<GENERIC PARSER ERROR>",
            Self::ExpectedToken { .. } => "<INVALID TOKEN>",
            Self::ExpectedOperator { .. } => "<EXPECTED OPERATOR>",
            Self::MismatchedParentheses { .. } => "<MISMATCHED PARENTHESES>",
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

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax { message, token } => write!(f, "{message} (at token {token})"),

            Self::ExpectedToken { expected, found } => {
                if expected.len() == 1 {
                    write!(f, "Expected token {}, got {found}", expected[0])
                } else {
                    write!(f, "Expected one of {}, got {found}", expected.join(", "))
                }
            },

            Self::ExpectedOperator { found } => write!(f,
                                                       "Expected one of {}, got {found}",
                                                       BINARY_OPERATOR_KINDS.join(", ")),

            Self::MismatchedParentheses { paren, nearby } => {
                write!(f, "Mismatched parenthesis {paren} near token {nearby}")
            },
        }
    }
}

impl std::error::Error for ParserError {}
