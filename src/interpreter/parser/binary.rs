use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::binary::eval_binary,
        lexer::Token,
        parser::core::{EvalResult, Evaluator},
    },
    operator::BinaryOperator,
};

impl Evaluator<'_> {
    /// Parses and evaluates addition and subtraction.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// The value of the expression, or the first error met inside it.
    pub fn parse_expression(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_term()?;
        while let Some(op) = token_to_binary_operator(self.current().token)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = self.current().position;
            self.advance();
            let right = self.parse_term()?;
            left = apply(op, left, right, position)?;
        }
        Ok(left)
    }

    /// Parses and evaluates multiplication and division.
    ///
    /// Handles left-associative operators `*` and `/`. A zero divisor is
    /// blamed on the `/` that introduced it, even when the divisor is a
    /// parenthesised sub-expression.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub fn parse_term(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_factor()?;
        while let Some(op) = token_to_binary_operator(self.current().token)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = self.current().position;
            self.advance();
            let right = self.parse_factor()?;
            left = apply(op, left, right, position)?;
        }
        Ok(left)
    }

    /// Parses and evaluates exponentiation.
    ///
    /// Exponentiation is right-associative: `a ** b ** c` is evaluated as
    /// `a ** (b ** c)`. The exponent is a `power`, not a `factor`, so a sign
    /// directly after `**` is rejected.
    ///
    /// The rule is: `power := primary ("**" power)?`
    pub fn parse_power(&mut self) -> EvalResult<f64> {
        let base = self.parse_primary()?;
        if self.current().token != Token::Pow {
            return Ok(base);
        }

        let position = self.current().position;
        self.advance();
        let exponent = self.nested(position, Self::parse_power)?;
        apply(BinaryOperator::Pow, base, exponent, position)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use pyarith::{
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
///     operator::BinaryOperator,
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Pow), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Pow => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Combines two operands, attaching `position` to any numeric failure.
fn apply(op: BinaryOperator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    trace!(%op, left, right, position, "applying binary operator");
    eval_binary(op, left, right).map_err(|kind| EvalError::new(kind, position))
}
