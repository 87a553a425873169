use logos::Logos;
use tracing::trace;

/// Raw token produced by logos before positions are resolved.
///
/// Whitespace (space, tab, newline, carriage return) is skipped here. Anything
/// logos cannot match surfaces as an error and becomes [`Token::Invalid`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.` or `1e-3`.
    /// The optional exponent is picked up by [`parse_number`].
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    Pow,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Represents a lexical token in the source input.
///
/// Unlike the raw logos output, this enum also models the end of input and
/// characters that are not part of the grammar, so the evaluator always has a
/// token to look at.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal. Signs are never part of the literal.
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `**`
    Pow,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input.
    End,
    /// A character the grammar does not know, or a numeric literal too large
    /// for an `f64`. Positioned at its first character.
    Invalid,
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Number(value) => Self::Number(value),
            RawToken::Plus => Self::Plus,
            RawToken::Minus => Self::Minus,
            RawToken::Star => Self::Star,
            RawToken::Pow => Self::Pow,
            RawToken::Slash => Self::Slash,
            RawToken::LParen => Self::LParen,
            RawToken::RParen => Self::RParen,
        }
    }
}

/// A token together with the position where it starts.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SpannedToken {
    /// The token itself.
    pub token:    Token,
    /// 1-based character offset of the first character of the token.
    pub position: usize,
}

impl SpannedToken {
    /// Pairs `token` with its starting `position`.
    #[must_use]
    pub const fn new(token: Token, position: usize) -> Self {
        Self { token, position }
    }
}

/// Pull-based tokenizer over a borrowed input buffer.
///
/// Positions are counted in characters, not bytes, and include any whitespace
/// skipped before a token. Character counting is incremental, so lexing a
/// whole buffer stays linear.
///
/// # Example
/// ```
/// use pyarith::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("  2 ** 3");
/// let first = lexer.next_token();
/// assert_eq!(first.token, Token::Number(2.0));
/// assert_eq!(first.position, 3);
///
/// let pow = lexer.next_token();
/// assert_eq!(pow.token, Token::Pow);
/// assert_eq!(pow.position, 5);
/// ```
pub struct Lexer<'src> {
    inner:         logos::Lexer<'src, RawToken>,
    /// Byte offset up to which characters have been counted.
    counted_bytes: usize,
    /// Number of characters in the source before `counted_bytes`.
    counted_chars: usize,
    /// Set once `End` has been handed out through the iterator.
    finished:      bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:         RawToken::lexer(source),
               counted_bytes: 0,
               counted_chars: 0,
               finished:      false, }
    }

    /// The buffer being tokenized.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }

    /// Scans the next token and advances past it.
    ///
    /// Once the input is exhausted every further call returns [`Token::End`]
    /// at the same position.
    pub fn next_token(&mut self) -> SpannedToken {
        let spanned = match self.inner.next() {
            Some(Ok(raw)) => {
                let position = self.position_of(self.inner.span().start);
                SpannedToken::new(raw.into(), position)
            },
            Some(Err(())) => {
                let start = self.inner.span().start;
                self.realign_to_char_boundary();
                SpannedToken::new(Token::Invalid, self.position_of(start))
            },
            None => {
                let end = self.source().len();
                SpannedToken::new(Token::End, self.position_of(end))
            },
        };
        trace!(token = ?spanned.token, position = spanned.position, "lexed token");
        spanned
    }

    /// Converts a byte offset into a 1-based character position.
    ///
    /// Offsets must be requested in non-decreasing order.
    fn position_of(&mut self, byte: usize) -> usize {
        if byte > self.counted_bytes {
            let skipped = self.source()
                              .get(self.counted_bytes..byte)
                              .map_or(0, |s| s.chars().count());
            self.counted_chars += skipped;
            self.counted_bytes = byte;
        }
        self.counted_chars + 1
    }

    /// Makes sure an error token never ends in the middle of a multi-byte
    /// character, so that the next span starts on a character boundary.
    fn realign_to_char_boundary(&mut self) {
        let source = self.source();
        let end = self.inner.span().end;
        let aligned = (end..=source.len()).find(|&i| source.is_char_boundary(i))
                                          .unwrap_or(end);
        self.inner.bump(aligned - end);
    }
}

impl Iterator for Lexer<'_> {
    type Item = SpannedToken;

    /// Yields every token including a single trailing [`Token::End`].
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let spanned = self.next_token();
        if spanned.token == Token::End {
            self.finished = true;
        }
        Some(spanned)
    }
}

/// Parses a numeric literal from the current token slice.
///
/// The regexes only cover the mantissa. An exponent (`e`/`E`, optional sign,
/// at least one digit) directly after it is consumed here; an `e` that is not
/// followed by digits is left for the next token.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float or overflows to infinity,
///   which turns the whole literal into an error token.
fn parse_number(lex: &mut logos::Lexer<RawToken>) -> Option<f64> {
    let exponent = exponent_len(lex.remainder());
    lex.bump(exponent);
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|value| value.is_finite())
}

/// Length in bytes of a well-formed exponent suffix at the start of `rest`, or
/// zero if there is none.
fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes.iter()
                      .skip(1 + sign)
                      .take_while(|b| b.is_ascii_digit())
                      .count();
    if digits == 0 { 0 } else { 1 + sign + digits }
}
