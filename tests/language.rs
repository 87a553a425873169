use pyarith::{
    ErrorKind, EvalError, Limits, evaluate, evaluate_with,
    operator::{BinaryOperator, UnaryOperator},
    render,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-12,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_rendered(src: &str, expected: &str) {
    assert_eq!(render(&evaluate(src)), expected, "rendering {src:?}");
}

fn assert_error(src: &str, kind: ErrorKind, position: usize) {
    match evaluate(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e, EvalError::new(kind, position), "evaluating {src:?}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", 14.0);
    assert_value("2+3*4**2", 50.0);
    assert_value("10-4-3", 3.0);
    assert_value("100/10/5", 2.0);
    assert_value("2*3/4", 1.5);
    assert_value("(2+3)*(4-1)/5", 3.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2**3**2", 512.0);
    assert_value("2**2**3", 256.0);
    assert_value("(2**3)**2", 64.0);
}

#[test]
fn unary_signs() {
    assert_value("-2**2", -4.0);
    assert_value("(-2)**2", 4.0);
    assert_value("--2", 2.0);
    assert_value("+-+3", -3.0);
    assert_value("-(2+3)*2", -10.0);
    assert_value("2*-3", -6.0);
    assert_value("2 - -3", 5.0);
}

#[test]
fn sign_after_power_operator_is_rejected() {
    assert_error("2**-1", ErrorKind::UnexpectedToken, 4);
    assert_value("2**(-1)", 0.5);
}

#[test]
fn parentheses() {
    assert_value("(1+2)*3", 9.0);
    assert_value("((((7))))", 7.0);
    assert_error("(1+2", ErrorKind::UnmatchedParenthesis, 1);
    assert_error("((1)", ErrorKind::UnmatchedParenthesis, 1);
    assert_error("2*(3+)", ErrorKind::UnexpectedToken, 6);
    assert_error("()", ErrorKind::UnexpectedToken, 2);
    assert_error("(1+2))", ErrorKind::TrailingInput, 6);
}

#[test]
fn unmatched_parenthesis_is_blamed_on_the_opener() {
    assert_error("1 + (2 * 3", ErrorKind::UnmatchedParenthesis, 5);
    assert_error("(1 @ 2)", ErrorKind::UnmatchedParenthesis, 1);
    assert_error("(1 2)", ErrorKind::UnmatchedParenthesis, 1);
}

#[test]
fn division_by_zero() {
    assert_error("5/0", ErrorKind::DivisionByZero, 2);
    assert_error("1/(2-2)", ErrorKind::DivisionByZero, 2);
    assert_error("1 + 8 / 0.0", ErrorKind::DivisionByZero, 7);
    assert_error("1/-0", ErrorKind::DivisionByZero, 2);
    assert_value("0/5", 0.0);
}

#[test]
fn invalid_exponentiation() {
    assert_error("(-8)**(1/3)", ErrorKind::InvalidExponentiation, 5);
    assert_error("0**(0-1)", ErrorKind::InvalidExponentiation, 2);
    assert_error("10**400", ErrorKind::InvalidExponentiation, 3);
    assert_value("(-8)**(1/1)", -8.0);
    assert_value("0**0", 1.0);
}

#[test]
fn first_error_wins() {
    assert_error("(1/0) + (2", ErrorKind::DivisionByZero, 3);
    assert_error("1/0/0", ErrorKind::DivisionByZero, 2);
    assert_error("2 + @ + 5/0", ErrorKind::InvalidCharacter, 5);
}

#[test]
fn trailing_input() {
    assert_error("2+2)", ErrorKind::TrailingInput, 4);
    assert_error("2 3", ErrorKind::TrailingInput, 3);
    assert_error("1.2.3", ErrorKind::TrailingInput, 4);
}

#[test]
fn invalid_characters() {
    assert_error("2+@", ErrorKind::InvalidCharacter, 3);
    assert_error(".", ErrorKind::InvalidCharacter, 1);
    assert_error("2e", ErrorKind::InvalidCharacter, 2);
    assert_error("2 ^ 3", ErrorKind::InvalidCharacter, 3);
    assert_error("1+2 €", ErrorKind::InvalidCharacter, 5);
    assert_error("π+1", ErrorKind::InvalidCharacter, 1);
    assert_error("2 + é", ErrorKind::InvalidCharacter, 5);
}

#[test]
fn missing_operands() {
    assert_error("", ErrorKind::UnexpectedToken, 1);
    assert_error("   ", ErrorKind::UnexpectedToken, 4);
    assert_error("1 +", ErrorKind::UnexpectedToken, 4);
    assert_error("* 2", ErrorKind::UnexpectedToken, 1);
    assert_error("2 ** ", ErrorKind::UnexpectedToken, 6);
}

#[test]
fn number_literals() {
    assert_value("1.5+.5", 2.0);
    assert_value("3.", 3.0);
    assert_value("1e3+1", 1001.0);
    assert_value("2.5E-1*4", 1.0);
    assert_value("007", 7.0);
}

#[test]
fn positions_count_skipped_whitespace() {
    assert_error("1 +\n\t 2 * (3", ErrorKind::UnmatchedParenthesis, 11);
    assert_error("\r\n\r\n5 / 0", ErrorKind::DivisionByZero, 7);
}

#[test]
fn rendering() {
    assert_rendered("6/3", "2");
    assert_rendered("1/3", "0.333333333333333");
    assert_rendered("-0", "0");
    assert_rendered("0.1+0.2", "0.3");
    assert_rendered("2**0.5", "1.4142135623731");
    assert_rendered("7/2", "3.5");
    assert_rendered("5/0", "ERROR:2");
    assert_rendered("(1+2", "ERROR:1");
}

#[test]
fn nesting_limit() {
    let ok = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_value(&ok, 1.0);

    let too_deep = format!("{}1{}", "(".repeat(201), ")".repeat(201));
    assert_error(&too_deep, ErrorKind::NestingTooDeep, 201);

    let signs = format!("{}1", "-".repeat(300));
    assert_error(&signs, ErrorKind::NestingTooDeep, 201);
    assert_eq!(evaluate_with(&signs, Limits { max_depth: 1000 }), Ok(1.0));

    let powers = format!("1{}", "**1".repeat(250));
    assert_error(&powers, ErrorKind::NestingTooDeep, 602);
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["2**3**2", "1/(2-2)", "(1+2", "1/3"] {
        assert_eq!(evaluate(src), evaluate(src));
    }
}

#[test]
fn independent_evaluations_run_in_parallel() {
    let inputs = ["2+3*4", "5/0", "(1+2", "2**10"];
    let results = std::thread::scope(|scope| {
        let handles = inputs.map(|src| scope.spawn(move || evaluate(src)));
        handles.map(|handle| handle.join().unwrap())
    });
    assert_eq!(results,
               [Ok(14.0),
                Err(EvalError::new(ErrorKind::DivisionByZero, 2)),
                Err(EvalError::new(ErrorKind::UnmatchedParenthesis, 1)),
                Ok(1024.0)]);
}

#[test]
fn error_display() {
    let e = evaluate("5/0").unwrap_err();
    assert_eq!(e.to_string(), "Error at position 2: division by zero.");
}

#[test]
fn literals_overflowing_to_infinity_are_rejected() {
    assert_error("1e999", ErrorKind::InvalidCharacter, 1);
    assert_error("2 + 1e999", ErrorKind::InvalidCharacter, 5);
    assert_error("1e999-1e999", ErrorKind::InvalidCharacter, 1);
    assert_rendered("1e999-1e999", "ERROR:1");
}

#[test]
fn operators_display_as_written() {
    let binary = [BinaryOperator::Add,
                  BinaryOperator::Sub,
                  BinaryOperator::Mul,
                  BinaryOperator::Div,
                  BinaryOperator::Pow].map(|op| op.to_string());
    assert_eq!(binary, ["+", "-", "*", "/", "**"]);
    assert_eq!(UnaryOperator::Plus.to_string(), "+");
    assert_eq!(UnaryOperator::Negate.to_string(), "-");
}
