use crate::{
    ast::Expression,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        lexer::Token,
        symbol_table::SymbolTable,
    },
};

/// Evaluates a unary operation node.
///
/// The prefix signs are the identity and the negation. The functions check
/// their domain before computing, so a value that would leave the reals
/// (`sqrt` of a negative, `log` of a non-positive, `arcsin`/`arccos`
/// outside `[-1, 1]`) reports a complex-result error instead of a NaN. The
/// trigonometric functions work in radians. As in binary evaluation, a NaN
/// result is promoted to a complex-result error and infinities pass
/// through.
///
/// `node` is the whole unary expression; errors own a clone of it.
pub(in crate::interpreter::evaluator) fn evaluate_unary(node: &Expression,
                                                        operator: &Token,
                                                        operand: &Expression,
                                                        symbols: &SymbolTable)
                                                        -> EvalResult<f64> {
    let value = evaluate(operand, symbols)?;

    let result = match operator {
        Token::Plus => value,
        Token::Minus => -value,
        Token::FuncSqrt => {
            if value < 0.0 {
                return Err(EvalError::ComplexResult { problem: node.clone() });
            }
            value.sqrt()
        },
        Token::FuncLog => {
            if value <= 0.0 {
                return Err(EvalError::ComplexResult { problem: node.clone() });
            }
            value.ln()
        },
        Token::FuncSin => value.sin(),
        Token::FuncCos => value.cos(),
        Token::FuncTan => value.tan(),
        Token::FuncArcsin => {
            if value.abs() > 1.0 {
                return Err(EvalError::ComplexResult { problem: node.clone() });
            }
            value.asin()
        },
        Token::FuncArccos => {
            if value.abs() > 1.0 {
                return Err(EvalError::ComplexResult { problem: node.clone() });
            }
            value.acos()
        },
        Token::FuncArctan => value.atan(),
        other => unreachable!("unary expressions hold only unary operators, got {other}"),
    };

    if result.is_nan() {
        return Err(EvalError::ComplexResult { problem: node.clone() });
    }
    Ok(result)
}
