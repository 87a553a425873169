/// Evaluator state, limits, and the public entry points.
///
/// Owns the lexer and the single look-ahead token, enforces the nesting limit,
/// and checks that nothing follows the top-level expression.
pub mod core;

/// Binary operator levels of the grammar.
///
/// Evaluates the left-associative `+ -` and `* /` levels and the
/// right-associative `**` level.
pub mod binary;

/// Prefix signs and primary expressions.
///
/// Handles unary `+`/`-`, numeric literals, and parenthesised groups.
pub mod unary;
