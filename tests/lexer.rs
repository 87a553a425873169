use pretty_assertions::assert_eq;
use pyarith::interpreter::lexer::{Lexer, SpannedToken, Token};

fn tokens(src: &str) -> Vec<(Token, usize)> {
    Lexer::new(src).map(|SpannedToken { token, position }| (token, position))
                   .collect()
}

#[test]
fn operators_and_numbers() {
    assert_eq!(tokens("12+3.5*(4-.25)/2**2"),
               vec![(Token::Number(12.0), 1),
                    (Token::Plus, 3),
                    (Token::Number(3.5), 4),
                    (Token::Star, 7),
                    (Token::LParen, 8),
                    (Token::Number(4.0), 9),
                    (Token::Minus, 10),
                    (Token::Number(0.25), 11),
                    (Token::RParen, 14),
                    (Token::Slash, 15),
                    (Token::Number(2.0), 16),
                    (Token::Pow, 17),
                    (Token::Number(2.0), 19),
                    (Token::End, 20)]);
}

#[test]
fn whitespace_is_counted_in_positions() {
    assert_eq!(tokens("  1 \t*\n\r 2  "),
               vec![(Token::Number(1.0), 3),
                    (Token::Star, 6),
                    (Token::Number(2.0), 10),
                    (Token::End, 13)]);
}

#[test]
fn star_star_is_a_single_token() {
    assert_eq!(tokens("2***3"),
               vec![(Token::Number(2.0), 1),
                    (Token::Pow, 2),
                    (Token::Star, 4),
                    (Token::Number(3.0), 5),
                    (Token::End, 6)]);
    assert_eq!(tokens("2* *3"),
               vec![(Token::Number(2.0), 1),
                    (Token::Star, 2),
                    (Token::Star, 4),
                    (Token::Number(3.0), 5),
                    (Token::End, 6)]);
}

#[test]
fn exponents_need_digits() {
    assert_eq!(tokens("1e3"), vec![(Token::Number(1000.0), 1), (Token::End, 4)]);
    assert_eq!(tokens("1e+"),
               vec![(Token::Number(1.0), 1),
                    (Token::Invalid, 2),
                    (Token::Plus, 3),
                    (Token::End, 4)]);
}

#[test]
fn unknown_characters_are_invalid_tokens() {
    assert_eq!(tokens("1 # 2"),
               vec![(Token::Number(1.0), 1),
                    (Token::Invalid, 3),
                    (Token::Number(2.0), 5),
                    (Token::End, 6)]);
    assert_eq!(tokens("."), vec![(Token::Invalid, 1), (Token::End, 2)]);
}

#[test]
fn positions_count_characters_not_bytes() {
    assert_eq!(tokens("é+ü 1"),
               vec![(Token::Invalid, 1),
                    (Token::Plus, 2),
                    (Token::Invalid, 3),
                    (Token::Number(1.0), 5),
                    (Token::End, 6)]);
}

#[test]
fn end_is_sticky() {
    let mut lexer = Lexer::new("7 ");
    assert_eq!(lexer.next_token(), SpannedToken::new(Token::Number(7.0), 1));
    assert_eq!(lexer.next_token(), SpannedToken::new(Token::End, 3));
    assert_eq!(lexer.next_token(), SpannedToken::new(Token::End, 3));
    assert_eq!(lexer.source(), "7 ");
}

#[test]
fn positions_never_decrease() {
    let src = " (1.5 + 2) ** 3 /\n4 - @ 5e2 ";
    let positions: Vec<usize> = Lexer::new(src).map(|t| t.position).collect();
    assert!(positions.windows(2).all(|w| w[0] <= w[1]), "{positions:?}");
}

#[test]
fn out_of_range_literals_are_invalid() {
    assert_eq!(tokens("1e999+1"),
               vec![(Token::Invalid, 1),
                    (Token::Plus, 6),
                    (Token::Number(1.0), 7),
                    (Token::End, 8)]);
    assert_eq!(tokens("1e308"), vec![(Token::Number(1e308), 1), (Token::End, 6)]);
}
