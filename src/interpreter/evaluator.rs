/// Binary arithmetic on evaluated operands.
///
/// Implements `+ - * / **` on `f64`, rejecting division by zero and
/// exponentiation results that are not finite.
pub mod binary;

/// Unary sign application.
pub mod unary;
