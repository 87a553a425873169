use crate::{error::ErrorKind, operator::BinaryOperator};

/// Applies a binary operator to two already evaluated operands.
///
/// Addition, subtraction, and multiplication follow IEEE-754 and never fail.
/// Division and exponentiation are routed through [`eval_div`] and
/// [`eval_pow`], which reject results outside the real numbers.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The computed value, or the [`ErrorKind`] to report at the operator's
/// position.
///
/// # Example
/// ```
/// use pyarith::{interpreter::evaluator::binary::eval_binary, operator::BinaryOperator};
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 7.0, 2.5), Ok(4.5));
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> Result<f64, ErrorKind> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => eval_div(left, right),
        BinaryOperator::Pow => eval_pow(left, right),
    }
}

/// Divides `left` by `right`.
///
/// A divisor that compares equal to zero (including `-0.0`) is rejected
/// before dividing.
///
/// # Example
/// ```
/// use pyarith::{error::ErrorKind, interpreter::evaluator::binary::eval_div};
///
/// assert_eq!(eval_div(6.0, 3.0), Ok(2.0));
/// assert_eq!(eval_div(5.0, 0.0), Err(ErrorKind::DivisionByZero));
/// ```
#[allow(clippy::float_cmp)]
pub fn eval_div(left: f64, right: f64) -> Result<f64, ErrorKind> {
    if right == 0.0 {
        return Err(ErrorKind::DivisionByZero);
    }
    Ok(left / right)
}

/// Raises `base` to `exponent` with the platform's `powf`.
///
/// Any non-finite result is an error: a negative base with a fractional
/// exponent (`NaN`), zero to a negative power, or overflow to infinity.
///
/// # Example
/// ```
/// use pyarith::{error::ErrorKind, interpreter::evaluator::binary::eval_pow};
///
/// assert_eq!(eval_pow(2.0, 10.0), Ok(1024.0));
/// assert_eq!(eval_pow(-8.0, 0.5), Err(ErrorKind::InvalidExponentiation));
/// assert_eq!(eval_pow(0.0, -1.0), Err(ErrorKind::InvalidExponentiation));
/// ```
pub fn eval_pow(base: f64, exponent: f64) -> Result<f64, ErrorKind> {
    let result = base.powf(exponent);
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ErrorKind::InvalidExponentiation)
    }
}
