use crate::{
    ast::Expression,
    error::EvalError,
    interpreter::{
        evaluator::{binary, unary},
        lexer::Token,
        symbol_table::SymbolTable,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression against a symbol table.
///
/// The walk is a pure function of the tree and the table: no state is
/// mutated, so re-evaluating the same expression against the same table
/// yields bitwise the same value. Children of a binary operation are
/// evaluated left to right, which makes errors in the left operand win over
/// errors in the right one.
///
/// # Errors
/// Returns an [`EvalError`] carrying a clone of the offending
/// (sub)expression: an unknown identifier, a zero denominator, or an
/// operation whose result is not a real number.
///
/// # Example
/// ```
/// use cuentas::interpreter::{
///     evaluator::core::evaluate,
///     lexer::tokenize,
///     parser::core::Parser,
///     symbol_table::SymbolTable,
/// };
///
/// let expr = Parser::new(tokenize("(3 + 4) * 5")).parse_expression().unwrap();
/// let value = evaluate(&expr, &SymbolTable::default()).unwrap();
///
/// assert_eq!(value, 35.0);
/// ```
pub fn evaluate(expression: &Expression, symbols: &SymbolTable) -> EvalResult<f64> {
    match expression {
        Expression::Operand(token) => evaluate_operand(expression, token, symbols),
        Expression::Binary { operator, lhs, rhs } => {
            binary::evaluate_binary(expression, operator, lhs, rhs, symbols)
        },
        Expression::Unary { operator, operand } => {
            unary::evaluate_unary(expression, operator, operand, symbols)
        },
    }
}

/// Evaluates a leaf: a number yields its payload, an identifier is resolved
/// through the symbol table.
fn evaluate_operand(node: &Expression, token: &Token, symbols: &SymbolTable) -> EvalResult<f64> {
    match token {
        Token::Number(value) => Ok(*value),
        Token::Identifier(_) => {
            symbols.get(token)
                   .ok_or_else(|| EvalError::UndefinedVariable { problem: node.clone() })
        },
        other => unreachable!("operand expressions hold only numbers and identifiers, got {other}"),
    }
}
