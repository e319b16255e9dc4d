/// The lexer module tokenizes source input for further parsing.
///
/// It defines the closed [`lexer::Token`] set together with the operator
/// role and binding-power queries the parser relies on, and the `tokenize`
/// entry point that turns a line of text into tokens.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Flags unrecognizable slices as error tokens instead of aborting.
/// - Answers operand/operator/associativity/binding-power queries.
pub mod lexer;

/// The token stream module provides the consumable sequence the parser
/// reads from.
///
/// # Responsibilities
/// - Owns the token vector and guarantees the end-of-input sentinel.
/// - Exposes peek/advance/pushback cursor operations.
pub mod token_stream;

/// The symbol table module stores variable bindings across statements.
///
/// # Responsibilities
/// - Maps identifier names to real values.
/// - Seeds the predefined mathematical constants.
/// - Supports merge-construction from caller maps and resetting.
pub mod symbol_table;

/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Implements precedence climbing over the binding-power tables.
/// - Reports syntax errors carrying the offending token.
pub mod parser;

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions against a symbol
/// table, performs the arithmetic and function operations, and produces a
/// real value or a typed evaluation error.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves identifiers through the symbol table.
/// - Reports evaluation errors such as division by zero, carrying the
///   offending subexpression.
pub mod evaluator;
