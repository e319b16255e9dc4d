use std::collections::HashMap;

use cuentas::{
    LineError, LineOutcome,
    ast::{Expression, Statement},
    error::{EvalError, ParserError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Token, tokenize},
        parser::core::Parser,
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
    run_line,
};

fn parse(input: &str) -> Statement {
    Parser::new(tokenize(input)).parse_next_statement()
                                .unwrap_or_else(|e| panic!("failed to parse `{input}`: {e}"))
}

fn parse_expr(input: &str) -> Expression {
    match parse(input) {
        Statement::Expression(expression) => expression,
        Statement::Assignment(_) => panic!("`{input}` parsed as an assignment"),
    }
}

fn parse_error(input: &str) -> ParserError {
    match Parser::new(tokenize(input)).parse_next_statement() {
        Ok(statement) => panic!("`{input}` parsed as {statement:?} but was expected to fail"),
        Err(error) => error,
    }
}

fn eval_str(input: &str, symbols: &SymbolTable) -> Result<f64, EvalError> {
    evaluate(&parse_expr(input), symbols)
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn table(entries: &[(&str, f64)]) -> SymbolTable {
    SymbolTable::from_map(entries.iter()
                                 .map(|(name, value)| ((*name).to_string(), *value))
                                 .collect::<HashMap<_, _>>())
}

#[test]
fn simple_addition() {
    assert_eq!(eval_str("2 + 2", &SymbolTable::default()).unwrap(), 4.0);
}

#[test]
fn chained_addition() {
    assert_eq!(eval_str("1 + 2 + 3 + 4 + 5", &SymbolTable::default()).unwrap(), 15.0);
}

#[test]
fn compound_expression() {
    assert_eq!(eval_str("(3 + 4) * 5 - 6 / 2^2", &SymbolTable::default()).unwrap(), 33.5);
}

#[test]
fn variables_resolve_through_the_table() {
    let symbols = table(&[("a", 7.0), ("b", 3.0), ("c", 2.0), ("d", 0.5)]);
    assert_eq!(eval_str("(a + 1 - b * c) / d", &symbols).unwrap(), 4.0);
}

#[test]
fn assignment_stores_the_evaluated_value() {
    let mut symbols = table(&[("b", 3.0)]);
    let statement = parse("a = 2 + 2 * b");

    let assignment = statement.as_assignment().expect("expected an assignment");
    assignment.execute(&mut symbols).unwrap();

    assert_eq!(symbols.get(&ident("a")), Some(8.0));
}

#[test]
fn unary_operator_chain() {
    assert_eq!(eval_str("+-(2 - -2)*+3", &SymbolTable::default()).unwrap(), -12.0);
}

#[test]
fn unary_functions_apply_to_their_operand() {
    let symbols = SymbolTable::default();
    assert_eq!(eval_str("sqrt(2 + 2)", &symbols).unwrap(), 2.0);
    assert_eq!(eval_str("sqrt 4", &symbols).unwrap(), 2.0);
    assert_eq!(eval_str("sin 0", &symbols).unwrap(), 0.0);
    assert_eq!(eval_str("arctan 0", &symbols).unwrap(), 0.0);
    assert!((eval_str("log euler", &symbols).unwrap() - 1.0).abs() < 1e-15);
}

#[test]
fn division_by_zero_reports_the_whole_division() {
    let error = eval_str("1 / (1 - 1)", &SymbolTable::default()).unwrap_err();

    assert!(matches!(error, EvalError::DivideByZero { .. }));
    assert_eq!(error.problem_expr(), &parse_expr("1 / (1 - 1)"));
    assert_eq!(error.problem_expr().to_string(),
               "<Bin-op <Operand <Number 1>> <Slash> \
                <Bin-op <Operand <Number 1>> <Minus> <Operand <Number 1>>>>");
}

#[test]
fn negative_zero_denominator_is_still_zero() {
    let error = eval_str("1 / -0", &SymbolTable::default()).unwrap_err();
    assert!(matches!(error, EvalError::DivideByZero { .. }));
}

#[test]
fn fractional_power_of_a_negative_base_is_complex() {
    let error = eval_str("(0 - 1) ^ 0.5", &SymbolTable::default()).unwrap_err();
    assert!(matches!(error, EvalError::ComplexResult { .. }));
}

#[test]
fn out_of_domain_functions_are_complex() {
    let symbols = SymbolTable::default();
    assert!(matches!(eval_str("sqrt -1", &symbols),
                     Err(EvalError::ComplexResult { .. })));
    assert!(matches!(eval_str("log(0 - 2)", &symbols),
                     Err(EvalError::ComplexResult { .. })));
    assert!(matches!(eval_str("arcsin 2", &symbols),
                     Err(EvalError::ComplexResult { .. })));
    assert!(matches!(eval_str("arccos -2", &symbols),
                     Err(EvalError::ComplexResult { .. })));
}

#[test]
fn undefined_variable_reports_the_operand() {
    let symbols = table(&[("a", 5.0), ("b", 2.0)]);
    let error = eval_str("(1 + a * b) / c", &symbols).unwrap_err();

    assert!(matches!(error, EvalError::UndefinedVariable { .. }));
    assert_eq!(error.problem_expr(), &Expression::operand(ident("c")));
    assert_eq!(error.to_string(), "No se ha definido la variable `c`");
}

#[test]
fn left_operand_errors_win() {
    // Both operands are faulty; the left one is evaluated first.
    let error = eval_str("(1 / 0) + c", &SymbolTable::default()).unwrap_err();
    assert!(matches!(error, EvalError::DivideByZero { .. }));
}

#[test]
fn dangling_operator_is_a_syntax_error() {
    let error = parse_error("5 + 3 * a - ^ (2");
    assert!(matches!(error, ParserError::ExpectedToken { found: Token::Caret, .. }));
    assert_eq!(error.problem_token(), &Token::Caret);
}

#[test]
fn missing_closing_parenthesis_is_reported() {
    let error = parse_error("(2 + 3");
    assert!(matches!(error,
                     ParserError::MismatchedParentheses { paren:  Token::ParenL,
                                                          nearby: Token::EndOfInput, }));
}

#[test]
fn operand_after_operand_expects_an_operator() {
    let error = parse_error("2 2");
    assert!(matches!(error, ParserError::ExpectedOperator { found: Token::Number(_) }));
}

#[test]
fn assignment_target_must_be_a_leading_identifier() {
    let error = parse_error("(a) = 2");
    assert!(matches!(error, ParserError::ExpectedOperator { found: Token::Assign }));
}

#[test]
fn addition_binds_looser_than_multiplication() {
    assert_eq!(parse_expr("a + b * c"),
               Expression::binary(Token::Plus,
                                  Expression::operand(ident("a")),
                                  Expression::binary(Token::Asterisk,
                                                     Expression::operand(ident("b")),
                                                     Expression::operand(ident("c")))));
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(parse_expr("a - b - c"),
               Expression::binary(Token::Minus,
                                  Expression::binary(Token::Minus,
                                                     Expression::operand(ident("a")),
                                                     Expression::operand(ident("b"))),
                                  Expression::operand(ident("c"))));
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(parse_expr("a ^ b ^ c"),
               Expression::binary(Token::Caret,
                                  Expression::operand(ident("a")),
                                  Expression::binary(Token::Caret,
                                                     Expression::operand(ident("b")),
                                                     Expression::operand(ident("c")))));
}

#[test]
fn prefix_sign_binds_tighter_than_exponentiation() {
    assert_eq!(parse_expr("-a ^ 2"),
               Expression::binary(Token::Caret,
                                  Expression::unary(Token::Minus, Expression::operand(ident("a"))),
                                  Expression::operand(Token::Number(2.0))));
}

#[test]
fn parentheses_are_transparent_in_the_tree() {
    assert_eq!(parse_expr("(a + b)"), parse_expr("a + b"));
    assert_eq!(parse_expr("((2))"), parse_expr("2"));
}

#[test]
fn parsing_is_deterministic() {
    assert_eq!(parse("a = sqrt(b + 1) * 2"), parse("a = sqrt(b + 1) * 2"));
}

#[test]
fn clones_are_equal_and_disjoint() {
    let original = parse_expr("1 + 2 * sqrt x");
    let copy = original.clone();

    assert_eq!(copy, original);
    drop(original);

    // The clone remains fully usable on its own.
    let symbols = table(&[("x", 4.0)]);
    assert_eq!(evaluate(&copy, &symbols).unwrap(), 5.0);
}

#[test]
fn evaluation_is_pure() {
    let symbols = table(&[("x", 0.3)]);
    let expression = parse_expr("sin x / cos x ^ 2");

    let first = evaluate(&expression, &symbols).unwrap();
    let second = evaluate(&expression, &symbols).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn failed_assignment_leaves_the_table_unchanged() {
    let mut symbols = SymbolTable::default();
    let before = symbols.clone();

    assert!(run_line("a = 1 / 0", &mut symbols).is_err());
    assert_eq!(symbols, before);
    assert_eq!(symbols.get(&ident("a")), None);
}

#[test]
fn default_table_seeds_the_constants() {
    let symbols = SymbolTable::default();

    assert_eq!(symbols.len(), 4);
    assert_eq!(symbols.get(&ident("pi")), Some(std::f64::consts::PI));
    assert_eq!(symbols.get(&ident("euler")), Some(std::f64::consts::E));
    assert_eq!(symbols.get(&ident("phi")), Some(1.618_033_988_749_894_8));
    assert_eq!(symbols.get(&ident("eulerMascheroni")), Some(0.577_215_664_901_532_9));
}

#[test]
fn from_map_lets_the_caller_override_a_constant() {
    let symbols = table(&[("pi", 3.0)]);
    assert_eq!(symbols.get(&ident("pi")), Some(3.0));
    assert_eq!(symbols.len(), 4);
}

#[test]
fn reset_restores_the_seeded_state() {
    let mut symbols = table(&[("pi", 3.0), ("x", 1.0)]);
    symbols.reset();

    assert_eq!(symbols, SymbolTable::default());
    assert_eq!(symbols.get(&ident("x")), None);
}

#[test]
fn lexical_errors_are_refused() {
    assert!(tokenize("a = 2 + @").contains(&Token::Error));
    assert!(matches!(run_line("a = 2 + @", &mut SymbolTable::default()),
                     Err(LineError::Lexical { token: Token::Error })));
}

#[test]
fn function_words_are_carved_out_of_identifiers() {
    assert_eq!(tokenize("sqrt x"), vec![Token::FuncSqrt, ident("x")]);
    assert_eq!(tokenize("sqrtx"), vec![ident("sqrtx")]);
    assert_eq!(tokenize("Sqrt"), vec![ident("Sqrt")]);
}

#[test]
fn overflow_to_infinity_is_a_stored_value() {
    let mut symbols = SymbolTable::default();

    let outcome = run_line("a = 10 ^ 400", &mut symbols).unwrap();
    assert_eq!(outcome, LineOutcome::VariableStored("a".to_string()));
    assert_eq!(symbols.get(&ident("a")), Some(f64::INFINITY));

    // Infinities propagate; only NaN is promoted to a complex result.
    assert_eq!(eval_str("a + 1", &symbols).unwrap(), f64::INFINITY);
    assert!(matches!(eval_str("a - a", &symbols),
                     Err(EvalError::ComplexResult { .. })));
}

#[test]
fn run_line_reports_expression_values_and_stores() {
    let mut symbols = SymbolTable::default();

    assert_eq!(run_line("b = 3", &mut symbols).unwrap(),
               LineOutcome::VariableStored("b".to_string()));
    assert_eq!(run_line("2 + 2 * b", &mut symbols).unwrap(), LineOutcome::Value(8.0));
}

#[test]
fn bare_identifier_is_an_expression_statement() {
    // The dispatch consumes the identifier looking for `=` and gives it
    // back when none follows.
    let symbols = table(&[("a", 2.5)]);
    assert_eq!(eval_str("a", &symbols).unwrap(), 2.5);
}

#[test]
fn token_stream_keeps_its_sentinel() {
    let mut stream = TokenStream::new(tokenize("1 +"));

    assert!(!stream.at_end());
    assert_eq!(stream.next(), Token::Number(1.0));
    assert_eq!(stream.next(), Token::Plus);
    assert!(stream.at_end());
    assert_eq!(stream.next(), Token::EndOfInput);
    assert_eq!(stream.next(), Token::EndOfInput);

    let mut empty = TokenStream::new(Vec::new());
    assert!(empty.at_end());
    assert_eq!(empty.next(), Token::EndOfInput);
}

#[test]
fn token_stream_gives_tokens_back() {
    let mut stream = TokenStream::new(tokenize("a = 1"));

    let first = stream.next();
    assert_eq!(stream.peek(), &Token::Assign);
    stream.give_back(first);
    assert_eq!(stream.peek(), &ident("a"));
}

#[test]
fn binding_power_tables() {
    assert_eq!(Token::Plus.binary_binding_power(), Some(1));
    assert_eq!(Token::Minus.binary_binding_power(), Some(1));
    assert_eq!(Token::Asterisk.binary_binding_power(), Some(2));
    assert_eq!(Token::Slash.binary_binding_power(), Some(2));
    assert_eq!(Token::Caret.binary_binding_power(), Some(3));
    assert_eq!(Token::ParenL.binary_binding_power(), None);

    assert_eq!(Token::Plus.unary_binding_power(), Some(5));
    assert_eq!(Token::Minus.unary_binding_power(), Some(5));
    for function in [Token::FuncSqrt,
                     Token::FuncLog,
                     Token::FuncSin,
                     Token::FuncCos,
                     Token::FuncTan,
                     Token::FuncArcsin,
                     Token::FuncArccos,
                     Token::FuncArctan]
    {
        assert_eq!(function.unary_binding_power(), Some(4));
        assert!(function.is_unary_operator());
        assert!(!function.is_binary_operator());
    }

    assert!(Token::Caret.is_right_associative());
    assert!(!Token::Minus.is_right_associative());
}

#[test]
fn token_roles_and_payloads() {
    assert_eq!(Token::Number(2.5).number(), Some(2.5));
    assert_eq!(Token::Plus.number(), None);
    assert_eq!(ident("x").identifier_name(), Some("x"));
    assert_eq!(Token::Number(1.0).identifier_name(), None);

    assert!(Token::Minus.is_operator());
    assert!(Token::FuncCos.is_operator());
    assert!(!Token::ParenL.is_operator());
}
