use tracing::debug;

use crate::{
    error::{ErrorKind, EvalError},
    interpreter::lexer::{Lexer, SpannedToken, Token},
};

/// Result type used by the parser/evaluator.
///
/// Every parsing function either yields the value of the construct it
/// consumed or the first [`EvalError`] met on the way. Because `?` stops the
/// descent at that point, nothing that runs later can replace the recorded
/// error.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default limit for nested parentheses, unary signs, and exponents.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Resource limits applied to a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth before evaluation fails with
    /// [`ErrorKind::NestingTooDeep`].
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Single-pass evaluator state for one input buffer.
///
/// Holds the lexer, exactly one look-ahead token, and the current nesting
/// depth. An `Evaluator` is created per evaluation and consumed by
/// [`Evaluator::evaluate`]; nothing is shared between evaluations, so
/// independent buffers can be evaluated on separate threads.
///
/// Grammar, from lowest to highest precedence:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := ("+" | "-") factor | power
///     power      := primary ("**" power)?
///     primary    := NUMBER | "(" expression ")"
/// ```
pub struct Evaluator<'src> {
    lexer:   Lexer<'src>,
    current: SpannedToken,
    depth:   usize,
    limits:  Limits,
}

impl<'src> Evaluator<'src> {
    /// Creates an evaluator over `source` and lexes the first token.
    #[must_use]
    pub fn new(source: &'src str, limits: Limits) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self { lexer,
               current,
               depth: 0,
               limits }
    }

    /// Evaluates the whole buffer.
    ///
    /// After the top-level expression, the look-ahead must be the end of
    /// input; anything else is reported at the leftover token's position.
    ///
    /// # Errors
    /// Returns the first [`EvalError`] encountered.
    ///
    /// # Example
    /// ```
    /// use pyarith::interpreter::parser::core::{Evaluator, Limits};
    ///
    /// let value = Evaluator::new("2 + 3 * 4", Limits::default()).evaluate();
    /// assert_eq!(value, Ok(14.0));
    /// ```
    pub fn evaluate(mut self) -> EvalResult<f64> {
        let result = self.parse_expression()
                         .and_then(|value| self.expect_end(value));
        match &result {
            Ok(value) => debug!(value, "evaluation finished"),
            Err(e) => debug!(kind = ?e.kind, position = e.position, "evaluation failed"),
        }
        result
    }

    /// Accepts `value` only if the whole input has been consumed.
    fn expect_end(&self, value: f64) -> EvalResult<f64> {
        match self.current.token {
            Token::End => Ok(value),
            Token::Invalid => Self::fail(ErrorKind::InvalidCharacter, self.current.position),
            _ => Self::fail(ErrorKind::TrailingInput, self.current.position),
        }
    }

    /// The look-ahead token.
    pub(in crate::interpreter::parser) const fn current(&self) -> SpannedToken {
        self.current
    }

    /// Discards the look-ahead and lexes the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Builds the error result for `kind` at `position`.
    pub(in crate::interpreter::parser) fn fail<T>(kind: ErrorKind,
                                                 position: usize)
                                                 -> EvalResult<T> {
        Err(EvalError::new(kind, position))
    }

    /// Reports the look-ahead as something that cannot start an operand.
    ///
    /// Unknown characters keep their own kind so the diagnostic stays precise;
    /// the position is the token's either way.
    pub(in crate::interpreter::parser) fn unexpected<T>(&self) -> EvalResult<T> {
        let kind = match self.current.token {
            Token::Invalid => ErrorKind::InvalidCharacter,
            _ => ErrorKind::UnexpectedToken,
        };
        Self::fail(kind, self.current.position)
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// `position` is blamed if the level would exceed
    /// [`Limits::max_depth`].
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    position: usize,
                                                    parse: impl FnOnce(&mut Self)
                                                                       -> EvalResult<T>)
                                                    -> EvalResult<T> {
        if self.depth >= self.limits.max_depth {
            return Self::fail(ErrorKind::NestingTooDeep, position);
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

/// Evaluates `source` with the default [`Limits`].
///
/// # Errors
/// Returns the first [`EvalError`] encountered.
///
/// # Example
/// ```
/// use pyarith::interpreter::parser::core::evaluate;
///
/// assert_eq!(evaluate("2 ** 3 ** 2"), Ok(512.0));
/// assert_eq!(evaluate("(1 + 2").unwrap_err().position, 1);
/// ```
pub fn evaluate(source: &str) -> EvalResult<f64> {
    evaluate_with(source, Limits::default())
}

/// Evaluates `source` under explicit `limits`.
///
/// # Errors
/// Returns the first [`EvalError`] encountered.
pub fn evaluate_with(source: &str, limits: Limits) -> EvalResult<f64> {
    Evaluator::new(source, limits).evaluate()
}
