/// The evaluator module holds the arithmetic applied to evaluated operands.
///
/// It knows nothing about tokens or positions; it computes a value or names
/// the [`ErrorKind`](crate::error::ErrorKind) that prevents one. The parser
/// attaches the position.
pub mod evaluator;
/// The lexer module tokenizes source text on demand.
///
/// The lexer reads the input buffer and hands out one token at a time, each
/// tagged with the 1-based character position where it starts.
///
/// # Responsibilities
/// - Skips whitespace between tokens while keeping positions exact.
/// - Scans numeric literals and the operators `+ - * / ** ( )`.
/// - Turns unknown characters into `Invalid` tokens instead of failing.
pub mod lexer;
/// The parser module evaluates while it parses.
///
/// A recursive-descent parser pulls tokens from the lexer with a single token
/// of look-ahead and computes the result directly, without building a syntax
/// tree.
///
/// # Responsibilities
/// - Implements operator precedence and associativity.
/// - Reports the first error together with its position.
/// - Guards the recursion against excessive nesting.
pub mod parser;
