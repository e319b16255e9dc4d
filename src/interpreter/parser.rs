/// Core expression parsing.
///
/// Defines the [`core::Parser`] type and the precedence-climbing worker that
/// turns a token stream into expression trees.
pub mod core;

/// Statement parsing.
///
/// Implements the statement dispatch between plain expressions and
/// assignments, including the one-token lookahead and restore that
/// distinguishes them.
pub mod statement;
