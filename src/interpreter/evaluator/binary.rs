use crate::{
    ast::Expression,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        lexer::Token,
        symbol_table::SymbolTable,
    },
};

/// Evaluates a binary operation node.
///
/// Both operands are evaluated first, left before right. Division checks
/// the denominator against zero (an IEEE zero of either sign compares equal
/// to `0.0`); every operation checks its result for NaN, which `powf`
/// produces for fractional powers of negative bases. Infinities are not an
/// error and propagate into further operations as-is.
///
/// `node` is the whole binary expression; errors own a clone of it.
pub(in crate::interpreter::evaluator) fn evaluate_binary(node: &Expression,
                                                         operator: &Token,
                                                         lhs: &Expression,
                                                         rhs: &Expression,
                                                         symbols: &SymbolTable)
                                                         -> EvalResult<f64> {
    let lhs_value = evaluate(lhs, symbols)?;
    let rhs_value = evaluate(rhs, symbols)?;

    let result = match operator {
        Token::Plus => lhs_value + rhs_value,
        Token::Minus => lhs_value - rhs_value,
        Token::Asterisk => lhs_value * rhs_value,
        Token::Slash => {
            if rhs_value == 0.0 {
                return Err(EvalError::DivideByZero { problem: node.clone() });
            }
            lhs_value / rhs_value
        },
        Token::Caret => lhs_value.powf(rhs_value),
        other => unreachable!("binary expressions hold only binary operators, got {other}"),
    };

    if result.is_nan() {
        return Err(EvalError::ComplexResult { problem: node.clone() });
    }
    Ok(result)
}
