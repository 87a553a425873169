//! # pyarith
//!
//! pyarith evaluates arithmetic expressions written with Python-style
//! operators: integers and floats, `+ - * / **`, parentheses, and unary
//! signs. Tokenizing and evaluation happen in a single pass, and the first
//! problem is reported as a 1-based character position.
//!
//! ```
//! use pyarith::{evaluate, render};
//!
//! assert_eq!(render(&evaluate("2 + 3 * 4")), "14");
//! assert_eq!(render(&evaluate("1 / (2 - 2)")), "ERROR:3");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for evaluation and file handling.
///
/// Evaluation errors carry an error kind and the position of the token that
/// stopped the evaluator. File errors wrap the underlying I/O failure with
/// the path involved.
pub mod error;
/// Lexing and single-pass evaluation.
///
/// Ties together the lexer, the recursive-descent evaluator, and the
/// arithmetic helpers behind the public entry points.
pub mod interpreter;
/// Operator enums shared by the parser and the arithmetic helpers.
pub mod operator;
/// File pipeline used by the command line tool.
///
/// Reads input files, strips comment lines, evaluates them, and writes one
/// result line per file.
pub mod pipeline;
/// Rendering and input preparation helpers.
pub mod util;

pub use crate::{
    error::{ErrorKind, EvalError},
    interpreter::parser::core::{
        DEFAULT_MAX_DEPTH, EvalResult, Evaluator, Limits, evaluate, evaluate_with,
    },
};
use crate::util::num::format_number;

/// Renders an evaluation outcome the way it is written to result files.
///
/// A value is formatted with [`format_number`]; an error becomes
/// `ERROR:<position>`. No trailing newline is added.
///
/// # Examples
/// ```
/// use pyarith::{evaluate, render};
///
/// assert_eq!(render(&evaluate("6 / 3")), "2");
/// assert_eq!(render(&evaluate("1 / 3")), "0.333333333333333");
/// assert_eq!(render(&evaluate("2 + @")), "ERROR:5");
/// ```
#[must_use]
pub fn render(outcome: &EvalResult<f64>) -> String {
    match outcome {
        Ok(value) => format_number(*value),
        Err(error) => format!("ERROR:{}", error.position),
    }
}
