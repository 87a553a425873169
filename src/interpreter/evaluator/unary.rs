use crate::operator::UnaryOperator;

/// Applies a prefix sign to an evaluated operand.
///
/// # Example
/// ```
/// use pyarith::{interpreter::evaluator::unary::eval_unary, operator::UnaryOperator};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 4.0), -4.0);
/// assert_eq!(eval_unary(UnaryOperator::Plus, -4.0), -4.0);
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Negate => -value,
    }
}
