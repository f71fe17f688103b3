use std::fs;

use spi::{
    Session,
    error::{EvalError, ParseError, RuntimeError},
    evaluate,
    interpreter::lexer::TokenKind,
};
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_spi_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = evaluate(&code) {
                panic!("spi example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No spi examples found in docs/src");
}

fn extract_spi_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```spi") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn value_of(src: &str) -> i64 {
    match Session::new().evaluate_line(src) {
        Ok(Some(value)) => value,
        other => panic!("{src:?} did not evaluate to a value: {other:?}"),
    }
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(value_of("9 - 3 - 4"), 2);
    for (a, b, c) in [(0, 0, 0), (1, 2, 3), (10, 4, 3), (100, 1, 99), (7, 7, 7)] {
        assert_eq!(value_of(&format!("{a} - {b} - {c}")), a - b - c);
    }
}

#[test]
fn operator_precedence() {
    assert_eq!(value_of("2 + 3 * 4"), 14);
    assert_eq!(value_of("(2 + 3) * 4"), 20);
    assert_eq!(value_of("7 + 3 * (10 / (12 / (3 + 1) - 1))"), 22);
    assert_eq!(value_of("14 + 2 * 3 - 6 / 2"), 17);
}

#[test]
fn unary_chaining() {
    assert_eq!(value_of("--9"), 9);
    assert_eq!(value_of("-(3+4)"), -7);
    assert_eq!(value_of("5 - - - + - 3"), 8);
    assert_eq!(value_of("5 - - - + - (3 + 4) - +2"), 10);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(value_of("  7   +   2 "), value_of("7+2"));
    assert_eq!(value_of("7+2"), 9);
}

#[test]
fn integer_division_truncates() {
    assert_eq!(value_of("7 / 2"), 3);
    assert_eq!(value_of("-7 / 2"), -3);
}

#[test]
fn program_populates_scope() {
    let mut session = Session::new();
    assert_eq!(session.evaluate_line("BEGIN x := 2; y := x + 3; END."), Ok(None));

    let scope = session.inspect_scope();
    assert_eq!(scope.len(), 2);
    assert_eq!(scope["x"], 2);
    assert_eq!(scope["y"], 5);
}

#[test]
fn later_assignment_wins() {
    let mut session = Session::new();
    session.evaluate_line("BEGIN a := 1; a := a + 1; END.").unwrap();

    let scope = session.inspect_scope();
    assert_eq!(scope.len(), 1);
    assert_eq!(scope["a"], 2);
}

#[test]
fn undefined_variable_leaves_scope_empty() {
    let mut session = Session::new();
    let err = session.evaluate_line("BEGIN y := z + 1; END.").unwrap_err();

    assert!(matches!(err,
                     EvalError::Runtime(RuntimeError::UndefinedVariable { ref name, .. }) if name == "z"));
    assert!(session.inspect_scope().is_empty());
}

#[test]
fn syntax_error_does_not_end_the_session() {
    let mut session = Session::new();
    let err = session.evaluate_line("BEGIN x := ; END.").unwrap_err();
    assert!(matches!(err, EvalError::Parse(ParseError::InvalidSyntax { .. })));

    assert_eq!(session.evaluate_line("BEGIN x := 4; END."), Ok(None));
    assert_eq!(session.evaluate_line("x * x"), Ok(Some(16)));
}

#[test]
fn expressions_read_the_session_scope() {
    let mut session = Session::new();
    session.evaluate_line("BEGIN number := 2; a := number; b := 10 * a + 10 * number / 4; c := a - - b END.")
           .unwrap();

    let scope = session.inspect_scope();
    assert_eq!(scope["number"], 2);
    assert_eq!(scope["a"], 2);
    assert_eq!(scope["b"], 25);
    assert_eq!(scope["c"], 27);
    assert_eq!(session.evaluate_line("c - b"), Ok(Some(2)));
}

#[test]
fn reserved_words_fold_in_any_case() {
    let mut session = Session::new();
    assert_eq!(session.evaluate_line("begin x := 1 end."), Ok(None));
    assert_eq!(session.evaluate_line("Begin y := 2 End."), Ok(None));
    assert_eq!(session.inspect_scope().len(), 2);

    let tokens = spi::tokenize("begin BEGIN").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Begin);
    assert_eq!(tokens[1].kind, TokenKind::Begin);
}

#[test]
fn lexical_errors() {
    let mut session = Session::new();
    assert_eq!(session.evaluate_line("2 ^ 3"),
               Err(EvalError::Parse(ParseError::InvalidCharacter { character: '^',
                                                                   position:  2, })));
    assert!(matches!(session.evaluate_line("BEGIN x : 1 END."),
                     Err(EvalError::Parse(ParseError::InvalidCharacter { character: ':',
                                                                         .. }))));
}

#[test]
fn arithmetic_anomalies_are_errors() {
    let mut session = Session::new();
    assert!(matches!(session.evaluate_line("1 / 0"),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero { position: 2 }))));
    assert!(matches!(session.evaluate_line("9223372036854775807 + 1"),
                     Err(EvalError::Runtime(RuntimeError::Overflow { .. }))));
    assert!(matches!(session.evaluate_line("BEGIN q := 5 / (2 - 2) END."),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert!(session.inspect_scope().is_empty());
}

#[test]
fn error_messages_name_the_problem() {
    let mut session = Session::new();
    let message = session.evaluate_line("BEGIN a := b END.").unwrap_err().to_string();
    assert_eq!(message, "Error at position 11: Undefined variable 'b'.");

    let message = session.evaluate_line("(1").unwrap_err().to_string();
    assert_eq!(message,
               "Error at position 2: Invalid syntax, expected RPAREN but found Token(EOF, None).");
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let mut session = Session::new();
    session.evaluate_line("BEGIN keep := 3 END.").unwrap();

    let lines = [format!("{}1{}", "(".repeat(2000), ")".repeat(2000)),
                 format!("{}1", "- ".repeat(20_000)),
                 format!("BEGIN {}{}END.", "BEGIN ".repeat(5000), "END ".repeat(5000)),
                 format!("1{}", " + 1".repeat(20_000))];
    for line in &lines {
        assert!(matches!(session.evaluate_line(line),
                         Err(EvalError::Parse(ParseError::NestingTooDeep { .. }))));
        assert_eq!(session.evaluate_line("keep + 1"), Ok(Some(4)));
    }

    let nested = format!("{}keep{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(session.evaluate_line(&nested), Ok(Some(3)));
    assert_eq!(session.inspect_scope().len(), 1);
}

#[test]
fn smallest_integer_needs_an_expression() {
    let mut session = Session::new();
    assert!(matches!(session.evaluate_line("-9223372036854775808"),
                     Err(EvalError::Parse(ParseError::LiteralTooLarge { position: 1, .. }))));
    assert_eq!(session.evaluate_line("-9223372036854775807 - 1"), Ok(Some(i64::MIN)));
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.spi").expect("missing file");
    assert_eq!(evaluate(&script).unwrap(), Some(26));
}
