use crate::{
    ast::{Assignment, Statement},
    error::ParserError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// The expected-kind list reported when an assignment is missing its `=`.
const ASSIGN_KIND: &[&str] = &["Assign ('=')"];

impl Parser {
    /// Parses the next statement from the stream.
    ///
    /// A statement is either an assignment (`<identifier> = <expression>`)
    /// or a standalone expression. The dispatch uses one token of
    /// lookahead: a leading identifier is consumed to inspect the token
    /// after it, and given back to the stream when no `=` follows, so
    /// expression parsing sees the untouched input.
    ///
    /// # Errors
    /// Returns a [`ParserError`] when neither form can be parsed; the
    /// parser does not recover or produce partial statements.
    ///
    /// # Example
    /// ```
    /// use cuentas::interpreter::{lexer::tokenize, parser::core::Parser};
    ///
    /// let statement = Parser::new(tokenize("2 + 2")).parse_next_statement().unwrap();
    /// assert!(statement.is_expression());
    ///
    /// let statement = Parser::new(tokenize("a = 2")).parse_next_statement().unwrap();
    /// assert_eq!(statement.as_assignment().unwrap().variable_name(), "a");
    /// ```
    pub fn parse_next_statement(&mut self) -> ParseResult<Statement> {
        if matches!(self.tokens.peek(), Token::Identifier(_)) {
            let identifier = self.tokens.next();
            if matches!(self.tokens.peek(), Token::Assign) {
                return Ok(Statement::Assignment(self.parse_assignment(identifier)?));
            }
            self.tokens.give_back(identifier);
        }
        Ok(Statement::Expression(self.parse_expression()?))
    }

    /// Parses an assignment whose identifier token has already been
    /// consumed by the caller.
    ///
    /// Verifies and consumes the `=`, then parses the right-hand side as an
    /// ordinary expression.
    ///
    /// # Errors
    /// Returns [`ParserError::ExpectedToken`] when the current token is not
    /// `=`, or any error raised while parsing the right-hand side.
    ///
    /// # Panics
    /// Panics when `variable` is not an `Identifier` token; the statement
    /// dispatch guarantees it is.
    pub fn parse_assignment(&mut self, variable: Token) -> ParseResult<Assignment> {
        if !matches!(self.tokens.peek(), Token::Assign) {
            return Err(ParserError::ExpectedToken { expected: ASSIGN_KIND,
                                                    found:    self.tokens.peek().clone(), });
        }
        self.tokens.next();

        let value = self.parse_expression()?;
        Ok(Assignment::new(variable, value))
    }
}
