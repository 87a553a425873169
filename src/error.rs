/// Evaluation errors.
///
/// Defines the error kinds that can stop an evaluation, together with the
/// 1-based character position at which the evaluator could not proceed.
/// Lexical problems, grammar violations, and numeric-domain failures all
/// collapse into a single position.
pub mod eval_error;
/// File and directory errors.
///
/// Contains the errors raised by the batch pipeline while reading inputs,
/// listing directories, or writing result files. These never originate from
/// the evaluator itself.
pub mod io_error;

pub use eval_error::{ErrorKind, EvalError};
pub use io_error::IoError;
