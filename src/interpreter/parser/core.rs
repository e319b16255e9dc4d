use crate::{
    ast::Expression,
    error::ParserError,
    interpreter::{lexer::Token, token_stream::TokenStream},
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// [`ParserError`] describing the failure.
pub type ParseResult<T> = Result<T, ParserError>;

/// Display names of the token kinds that may start an expression: the
/// operands, an opening parenthesis, and every unary operator.
const EXPRESSION_STARTERS: &[&str] = &["Number",
                                       "Identifier",
                                       "Left Parenthesis ('(')",
                                       "Plus ('+')",
                                       "Minus ('-')",
                                       "Sqrt function",
                                       "Log function",
                                       "Sin function",
                                       "Cos function",
                                       "Tan function",
                                       "Arcsin function",
                                       "Arccos function",
                                       "Arctan function"];

/// A precedence-climbing parser over a token stream.
///
/// The parser consumes tokens and produces [`Statement`](crate::ast::Statement)
/// values; all grammar state lives in the recursion, so the only observable
/// state is the stream cursor. Errors abort the statement being parsed and
/// leave the stream wherever the failure was detected.
///
/// # Example
/// ```
/// use cuentas::interpreter::{lexer::tokenize, parser::core::Parser};
///
/// let mut parser = Parser::new(tokenize("a = 2 + 2"));
/// let statement = parser.parse_next_statement().unwrap();
///
/// assert!(!statement.is_expression());
/// ```
#[derive(Debug)]
pub struct Parser {
    pub(in crate::interpreter::parser) tokens: TokenStream,
}

impl Parser {
    /// Creates a parser over anything convertible to a token stream, such
    /// as the vector returned by
    /// [`tokenize`](crate::interpreter::lexer::tokenize).
    #[must_use]
    pub fn new(tokens: impl Into<TokenStream>) -> Self {
        Self { tokens: tokens.into() }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing; it starts the
    /// recursive worker below every real binding power so that any operator
    /// may extend the first operand.
    ///
    /// # Errors
    /// Returns a [`ParserError`] when the tokens do not form a valid
    /// expression.
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expression_recursive(-1)
    }

    /// The precedence-climbing worker.
    ///
    /// Parses one left-hand side (an operand, a parenthesized subexpression,
    /// or a unary operator applied to a recursively parsed operand), then
    /// loops extending it with binary operators while their binding power
    /// allows. `minimal_binding_power` rejects operators not strong enough
    /// to extend the current subexpression: the right-associative `^` stops
    /// only on strictly weaker power, every left-associative operator also
    /// stops on equal power, which is exactly what makes `a ^ b ^ c` group
    /// rightward and `a - b - c` leftward.
    fn parse_expression_recursive(&mut self, minimal_binding_power: i8) -> ParseResult<Expression> {
        let first = self.tokens.next();
        let mut lhs = match first {
            Token::Number(_) | Token::Identifier(_) => Expression::operand(first),

            Token::ParenL => {
                // The binding power resets inside the parentheses.
                let inner = self.parse_expression_recursive(0)?;
                let closing = self.tokens.next();
                if closing != Token::ParenR {
                    return Err(ParserError::MismatchedParentheses { paren:  first,
                                                                    nearby: closing, });
                }
                inner
            },

            ref unary if unary.is_unary_operator() => {
                let binding_power = match unary.unary_binding_power() {
                    Some(power) => power,
                    None => unreachable!("every unary operator token has a binding power"),
                };
                let operand = self.parse_expression_recursive(binding_power)?;
                Expression::unary(first, operand)
            },

            other => {
                return Err(ParserError::ExpectedToken { expected: EXPRESSION_STARTERS,
                                                        found:    other, });
            },
        };

        loop {
            let operator = self.tokens.peek();
            match operator {
                // The end of the expression; a containing parenthesized
                // sub-parse consumes the closer itself.
                Token::EndOfInput | Token::Newline | Token::ParenR => return Ok(lhs),
                _ => {},
            }

            let Some(binding_power) = operator.binary_binding_power() else {
                return Err(ParserError::ExpectedOperator { found: operator.clone() });
            };

            if (operator.is_right_associative() && binding_power < minimal_binding_power)
               || (!operator.is_right_associative() && binding_power <= minimal_binding_power)
            {
                return Ok(lhs);
            }

            let operator = self.tokens.next();
            let rhs = self.parse_expression_recursive(binding_power)?;
            lhs = Expression::binary(operator, lhs, rhs);
        }
    }
}
