/// Classifies why an evaluation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The lexer met a character that is not part of the grammar, or a
    /// numeric literal that overflows to infinity.
    InvalidCharacter,
    /// A number or `(` was expected but an operator, `)` or the end of input
    /// was found.
    UnexpectedToken,
    /// A `(` was never closed. Reported at the opening parenthesis.
    UnmatchedParenthesis,
    /// The right operand of `/` evaluated to exactly zero.
    DivisionByZero,
    /// `**` produced a result that is not a finite real number.
    InvalidExponentiation,
    /// Tokens remain after a complete expression.
    TrailingInput,
    /// Parentheses, unary signs, or exponents are nested deeper than the
    /// configured limit.
    NestingTooDeep,
}

impl ErrorKind {
    /// Short human readable description of the error kind.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidCharacter => "invalid character",
            Self::UnexpectedToken => "expected a number or '('",
            Self::UnmatchedParenthesis => "unmatched parenthesis",
            Self::DivisionByZero => "division by zero",
            Self::InvalidExponentiation => "result of '**' is not a finite real number",
            Self::TrailingInput => "unexpected input after the expression",
            Self::NestingTooDeep => "expression is nested too deeply",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// The first error encountered while evaluating an input buffer.
///
/// `position` is the 1-based character offset of the offending token in the
/// buffer handed to the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvalError {
    /// What went wrong.
    pub kind:     ErrorKind,
    /// 1-based character offset of the token blamed for the error.
    pub position: usize,
}

impl EvalError {
    /// Creates an error of the given kind at `position`.
    #[must_use]
    pub const fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error at position {}: {}.",
               self.position,
               self.kind.description())
    }
}

impl std::error::Error for EvalError {}
