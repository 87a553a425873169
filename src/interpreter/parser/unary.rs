use tracing::trace;

use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::unary::eval_unary,
        lexer::Token,
        parser::core::{EvalResult, Evaluator},
    },
    operator::UnaryOperator,
};

impl Evaluator<'_> {
    /// Parses and evaluates a signed factor.
    ///
    /// Prefix signs bind looser than `**`, so `-2 ** 2` is `-(2 ** 2)`.
    /// Signs may be repeated: `--2` is `2`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | power
    /// ```
    pub fn parse_factor(&mut self) -> EvalResult<f64> {
        let Some(op) = token_to_unary_operator(self.current().token) else {
            return self.parse_power();
        };

        let position = self.current().position;
        self.advance();
        let value = self.nested(position, Self::parse_factor)?;
        trace!(%op, value, position, "applying unary operator");
        Ok(eval_unary(op, value))
    }

    /// Parses a primary (atomic) expression.
    ///
    /// A missing `)` is blamed on the `(` it should close, not on whatever
    /// token was found instead.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | "(" expression ")"
    /// ```
    pub fn parse_primary(&mut self) -> EvalResult<f64> {
        match self.current().token {
            Token::Number(value) => {
                self.advance();
                Ok(value)
            },
            Token::LParen => self.parse_grouping(),
            _ => self.unexpected(),
        }
    }

    /// Parses a parenthesised expression. The look-ahead must be `(`.
    fn parse_grouping(&mut self) -> EvalResult<f64> {
        let open = self.current().position;
        self.advance();
        let value = self.nested(open, Self::parse_expression)?;
        if self.current().token != Token::RParen {
            return Self::fail(ErrorKind::UnmatchedParenthesis, open);
        }
        self.advance();
        Ok(value)
    }
}

/// Maps a token to its prefix sign operator, if it is one.
#[must_use]
pub const fn token_to_unary_operator(token: Token) -> Option<UnaryOperator> {
    match token {
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Negate),
        _ => None,
    }
}
