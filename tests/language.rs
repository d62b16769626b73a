use std::fs;

use lineal::{
    ast::BinaryOperator,
    clear_bindings,
    error::{EvalError, LangError, SyntaxError},
    evaluate,
    interpreter::{
        evaluator::core::Environment,
        scanner::core::Scanner,
        value::{core::{Value, ValueKind},
                vec2::Vec2},
    },
    parse, run_line,
};
use walkdir::WalkDir;

fn assert_scalar(env: &mut Environment, src: &str, expected: f64) {
    match run_line(src, env) {
        Ok(Value::Scalar(n)) => {
            assert!((n - expected).abs() < 1e-9,
                    "'{src}' evaluated to {n}, expected {expected}");
        },
        other => panic!("'{src}' did not evaluate to a scalar: {other:?}"),
    }
}

fn assert_vector(env: &mut Environment, src: &str, expected: Vec2) {
    match run_line(src, env) {
        Ok(Value::Vector(v)) => assert_eq!(v, expected, "'{src}' evaluated to {v}"),
        other => panic!("'{src}' did not evaluate to a vector: {other:?}"),
    }
}

fn assert_syntax_error(env: &mut Environment, src: &str) -> SyntaxError {
    match run_line(src, env) {
        Err(LangError::Syntax(error)) => error,
        other => panic!("'{src}' did not fail with a syntax error: {other:?}"),
    }
}

fn assert_eval_error(env: &mut Environment, src: &str) -> EvalError {
    match run_line(src, env) {
        Err(LangError::Eval(error)) => error,
        other => panic!("'{src}' did not fail with an evaluation error: {other:?}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    let mut env = Environment::new();

    assert_scalar(&mut env, "x = 3 + 4", 7.0);
    assert_scalar(&mut env, "x * 2", 14.0);
    assert_scalar(&mut env, "7 * 9", 63.0);
    assert_scalar(&mut env, "8 - 5", 3.0);
    assert_scalar(&mut env, "10 / 2", 5.0);
    assert_scalar(&mut env, "y = x", 7.0);
    assert_scalar(&mut env, "y", 7.0);
}

#[test]
fn operator_precedence_and_grouping() {
    let mut env = Environment::new();

    assert_scalar(&mut env, "1 + 2 * 3", 7.0);
    assert_scalar(&mut env, "(1 + 2) * 3", 9.0);
    assert_scalar(&mut env, "10 - 2 - 3", 5.0);
    assert_scalar(&mut env, "8 / 2 / 2", 2.0);
    assert_scalar(&mut env, "16 / (4 / 2)", 8.0);
    assert_scalar(&mut env, "((5))", 5.0);
}

#[test]
fn vector_arithmetic_is_componentwise() {
    let mut env = Environment::new();

    assert_vector(&mut env, "[1, 2] + [3, 4]", Vec2::new(4.0, 6.0));
    assert_vector(&mut env, "[5, 6] - [1, 2]", Vec2::new(4.0, 4.0));
    assert_vector(&mut env, "[2, 3] * [4, 5]", Vec2::new(8.0, 15.0));
    assert_vector(&mut env, "[8, 4] / [2, 4]", Vec2::new(4.0, 1.0));
}

#[test]
fn mixed_operands_require_the_vector_on_the_left() {
    let mut env = Environment::new();

    assert_vector(&mut env, "[8, 4] / 2", Vec2::new(4.0, 2.0));
    assert_vector(&mut env, "[1, 2] * 3", Vec2::new(3.0, 6.0));
    assert_vector(&mut env, "[1, 2] + 10", Vec2::new(11.0, 12.0));
    assert_vector(&mut env, "[5, 6] - 1", Vec2::new(4.0, 5.0));

    for src in ["2 / [8, 4]", "3 * [1, 2]", "10 + [1, 2]", "1 - [5, 6]"] {
        match assert_eval_error(&mut env, src) {
            EvalError::UnsupportedOperation { left, right, .. } => {
                assert_eq!(left, ValueKind::Scalar);
                assert_eq!(right, ValueKind::Vector);
            },
            other => panic!("'{src}' raised the wrong error: {other:?}"),
        }
    }
}

#[test]
fn addition_and_multiplication_commute() {
    let mut env = Environment::new();

    assert_eq!(run_line("1.5 + 2", &mut env).unwrap(),
               run_line("2 + 1.5", &mut env).unwrap());
    assert_eq!(run_line("1.5 * 2", &mut env).unwrap(),
               run_line("2 * 1.5", &mut env).unwrap());
    assert_eq!(run_line("[1, 2] + [3, 4]", &mut env).unwrap(),
               run_line("[3, 4] + [1, 2]", &mut env).unwrap());
    assert_eq!(run_line("[1, 2] * [3, 4]", &mut env).unwrap(),
               run_line("[3, 4] * [1, 2]", &mut env).unwrap());
}

#[test]
fn division_round_trips_within_epsilon() {
    let mut env = Environment::new();

    run_line("a = 9.5", &mut env).unwrap();
    run_line("b = 4", &mut env).unwrap();
    assert_scalar(&mut env, "(a / b) * b", 9.5);
}

#[test]
fn division_by_zero_is_error() {
    let mut env = Environment::new();

    assert!(matches!(assert_eval_error(&mut env, "1 / 0"), EvalError::DivisionByZero));
    assert!(matches!(assert_eval_error(&mut env, "[1, 2] / [0, 1]"),
                     EvalError::DivisionByZero));
    assert!(matches!(assert_eval_error(&mut env, "[1, 2] / 0"), EvalError::DivisionByZero));
    assert!(matches!(assert_eval_error(&mut env, "1 / (2 - 2)"), EvalError::DivisionByZero));

    assert_scalar(&mut env, "0 / 5", 0.0);
    assert_vector(&mut env, "[0, 0] / [1, 2]", Vec2::new(0.0, 0.0));
}

#[test]
fn unknown_variables_are_reported_by_name() {
    let mut env = Environment::new();

    match assert_eval_error(&mut env, "y + 1") {
        EvalError::UndefinedVariable { name } => assert_eq!(name, "y"),
        other => panic!("unexpected error: {other:?}"),
    }

    match assert_eval_error(&mut env, "pos = speed * 2") {
        EvalError::UndefinedVariable { name } => assert_eq!(name, "speed"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(env.lookup("pos").is_none());
}

#[test]
fn the_left_operand_is_evaluated_first() {
    let mut env = Environment::new();

    assert!(matches!(assert_eval_error(&mut env, "w + 1 / 0"),
                     EvalError::UndefinedVariable { .. }));
}

#[test]
fn sessions_are_independent() {
    let mut first = Environment::new();
    let mut second = Environment::new();

    run_line("x = 1", &mut first).unwrap();

    match assert_eval_error(&mut second, "x") {
        EvalError::UndefinedVariable { name } => assert_eq!(name, "x"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn clearing_removes_every_binding() {
    let mut env = Environment::new();

    run_line("x = 1", &mut env).unwrap();
    run_line("v = [1, 2]", &mut env).unwrap();

    clear_bindings(&mut env);

    assert!(matches!(run_line("x", &mut env),
                     Err(LangError::Eval(EvalError::UndefinedVariable { .. }))));
    assert_scalar(&mut env, "x = 2", 2.0);
}

#[test]
fn parsing_records_assignments_but_not_expressions() {
    let mut env = Environment::new();

    parse("w * 3", &mut env).unwrap();
    assert!(env.lookup("w").is_none());

    parse("w = 2 + 3", &mut env).unwrap();
    assert_eq!(env.lookup("w"), Some(Value::Scalar(5.0)));
}

#[test]
fn assignment_values_record_at_parse_time() {
    let mut env = Environment::new();
    run_line("x = 3", &mut env).unwrap();

    // Parsing alone already updates the binding.
    let statement = parse("x = x + 1", &mut env).unwrap();
    assert_eq!(env.lookup("x"), Some(Value::Scalar(4.0)));

    // Evaluating the parsed assignment applies it against the new binding.
    assert_eq!(evaluate(&statement, &mut env).unwrap(), Value::Scalar(5.0));
    assert_eq!(env.lookup("x"), Some(Value::Scalar(5.0)));
}

#[test]
fn failed_assignments_record_nothing() {
    let mut env = Environment::new();

    assert_eval_error(&mut env, "q = 1 / 0");
    assert!(env.lookup("q").is_none());

    assert_eval_error(&mut env, "q = w + 1");
    assert!(env.lookup("q").is_none());

    assert_syntax_error(&mut env, "q = 5 )");
    assert!(env.lookup("q").is_none());
}

#[test]
fn assignments_require_an_expression() {
    let mut env = Environment::new();

    assert!(matches!(assert_syntax_error(&mut env, "x ="),
                     SyntaxError::ExpectedExpression { found: None, .. }));
    assert!(matches!(assert_syntax_error(&mut env, "x = )"),
                     SyntaxError::ExpectedExpression { found: Some(')'), .. }));
    assert!(env.lookup("x").is_none());
}

#[test]
fn operators_require_a_right_hand_operand() {
    let mut env = Environment::new();

    assert!(matches!(assert_syntax_error(&mut env, "5 +"),
                     SyntaxError::MissingOperand { operator: BinaryOperator::Add, .. }));
    assert!(matches!(assert_syntax_error(&mut env, "5 * 3 -"),
                     SyntaxError::MissingOperand { operator: BinaryOperator::Sub, .. }));
    assert!(matches!(assert_syntax_error(&mut env, "x = 5 /"),
                     SyntaxError::MissingOperand { operator: BinaryOperator::Div, .. }));
    assert!(env.lookup("x").is_none());
}

#[test]
fn compound_assignment_is_not_supported() {
    let mut env = Environment::new();
    run_line("x = 2", &mut env).unwrap();

    assert!(matches!(assert_syntax_error(&mut env, "x += 3"),
                     SyntaxError::MissingOperand { operator: BinaryOperator::Add, .. }));
    assert_scalar(&mut env, "x", 2.0);
}

#[test]
fn groups_must_be_closed_and_non_empty() {
    let mut env = Environment::new();

    match assert_syntax_error(&mut env, "(1 + 2 * 3") {
        SyntaxError::ExpectedCharacter { expected, found, .. } => {
            assert_eq!(expected, ')');
            assert_eq!(found, None);
        },
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(matches!(assert_syntax_error(&mut env, "()"),
                     SyntaxError::ExpectedExpression { found: Some(')'), .. }));
    assert!(matches!(assert_syntax_error(&mut env, "("),
                     SyntaxError::ExpectedExpression { found: None, .. }));
}

#[test]
fn trailing_input_is_rejected() {
    let mut env = Environment::new();

    match assert_syntax_error(&mut env, "[1, 2] = x") {
        SyntaxError::TrailingInput { found, .. } => assert_eq!(found, '='),
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(matches!(assert_syntax_error(&mut env, "(1 + 2))"),
                     SyntaxError::TrailingInput { found: ')', .. }));
}

#[test]
fn malformed_numbers_are_rejected() {
    let mut env = Environment::new();

    for src in ["007", "01", "1.", "1.2.3", "-x", "-"] {
        assert!(matches!(assert_syntax_error(&mut env, src),
                         SyntaxError::MalformedNumber { .. }),
                "'{src}' should be a malformed number");
    }

    assert_scalar(&mut env, "0", 0.0);
    assert_scalar(&mut env, "0.5", 0.5);
    assert_scalar(&mut env, "0.05", 0.05);
}

#[test]
fn negative_numbers_parse_inside_expressions() {
    let mut env = Environment::new();

    assert_scalar(&mut env, "-3.25", -3.25);
    assert_scalar(&mut env, "5 * -3", -15.0);
    assert_scalar(&mut env, "5 - -3", 8.0);
    assert_vector(&mut env, "[-1, -2] + [1, 2]", Vec2::new(0.0, 0.0));
}

#[test]
fn variables_terminate_only_before_operators_or_delimiters() {
    let mut env = Environment::new();
    run_line("x = 2", &mut env).unwrap();

    match assert_syntax_error(&mut env, "ab3") {
        SyntaxError::InvalidVariableTermination { name, found, .. } => {
            assert_eq!(name, "ab");
            assert_eq!(found, '3');
        },
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(matches!(assert_syntax_error(&mut env, "x[1, 2]"),
                     SyntaxError::InvalidVariableTermination { .. }));

    assert_scalar(&mut env, "(1 + x)", 3.0);
    assert_scalar(&mut env, "x + x", 4.0);
}

#[test]
fn vector_components_must_be_numeric_literals() {
    let mut env = Environment::new();
    run_line("x = 1", &mut env).unwrap();

    assert!(matches!(assert_syntax_error(&mut env, "[x, 2]"),
                     SyntaxError::ExpectedNumber { found: Some('x'), .. }));
    assert!(matches!(assert_syntax_error(&mut env, "[1, x]"),
                     SyntaxError::ExpectedNumber { found: Some('x'), .. }));
    assert!(matches!(assert_syntax_error(&mut env, "[(1), 2]"),
                     SyntaxError::ExpectedNumber { found: Some('(') , .. }));
}

#[test]
fn incomplete_vectors_name_what_is_missing() {
    let mut env = Environment::new();

    assert!(matches!(assert_syntax_error(&mut env, "[1; 2]"),
                     SyntaxError::ExpectedCharacter { expected: ',', .. }));
    assert!(matches!(assert_syntax_error(&mut env, "[1, 2"),
                     SyntaxError::ExpectedCharacter { expected: ']', .. }));
    assert!(matches!(assert_syntax_error(&mut env, "[1,"),
                     SyntaxError::ExpectedNumber { found: None, .. }));
    assert!(matches!(assert_syntax_error(&mut env, "[]"),
                     SyntaxError::ExpectedNumber { found: Some(']'), .. }));
}

#[test]
fn inputs_with_no_statement_are_invalid() {
    let mut env = Environment::new();

    for src in ["", "   ", ".5", "= 5", "+", "*2"] {
        assert!(matches!(assert_syntax_error(&mut env, src), SyntaxError::InvalidStatement),
                "'{src}' should be an invalid statement");
    }
}

#[test]
fn whitespace_is_insignificant() {
    let mut env = Environment::new();

    assert_scalar(&mut env, "  1   +2 ", 3.0);
    assert_vector(&mut env, " v = [ 1 , 2.5 ] ", Vec2::new(1.0, 2.5));
    assert_vector(&mut env, "v*[2,2]", Vec2::new(2.0, 5.0));
}

#[test]
fn results_format_like_their_kind() {
    let mut env = Environment::new();

    assert_eq!(run_line("[1, 2] + [3, 4]", &mut env).unwrap().to_string(), "[4, 6]");
    assert_eq!(run_line("3.5 + 3.5", &mut env).unwrap().to_string(), "7");
    assert_eq!(run_line("10 / 4", &mut env).unwrap().to_string(), "2.5");
}

#[test]
fn scanner_marks_restore_and_validate() {
    let mut scanner = Scanner::new("a + b");

    assert_eq!(scanner.position(), 0);
    scanner.advance();

    let mark = scanner.mark();
    scanner.advance();
    scanner.reset(mark).unwrap();
    assert_eq!(scanner.position(), 1);

    // Resetting to the end of the stripped input is allowed.
    scanner.reset(3).unwrap();
    assert!(scanner.at_end());

    assert!(matches!(scanner.reset(4), Err(SyntaxError::InvalidMark { mark: 4, length: 3 })));
}

#[test]
fn match_char_consumes_only_on_a_match() {
    let mut scanner = Scanner::new("(x)");

    assert!(!scanner.match_char('['));
    assert_eq!(scanner.position(), 0);

    assert!(scanner.match_char('('));
    assert_eq!(scanner.position(), 1);
}

#[test]
fn scanner_reports_the_end_of_input() {
    let scanner = Scanner::new("  ");

    assert!(scanner.at_end());
    assert!(matches!(scanner.current_char(),
                     Err(SyntaxError::UnexpectedEndOfInput { position: 0 })));
}

#[test]
fn example_scripts_run_clean() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "lineal")
                                     })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let mut env = Environment::new();

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            count += 1;
            if let Err(e) = run_line(line, &mut env) {
                panic!("Line {} of {:?} failed:\n{}\nError: {}", i + 1, path, line, e);
            }
        }
    }

    assert!(count > 0, "No script lines found in tests/scripts");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/scripts/example.lineal").expect("missing file");
    let mut env = Environment::new();
    let mut last = None;

    for line in script.lines().filter(|l| !l.trim().is_empty()) {
        last = Some(run_line(line, &mut env).unwrap_or_else(|e| panic!("'{line}' failed: {e}")));
    }

    assert_eq!(last, Some(Value::Scalar(16.0)));
}
