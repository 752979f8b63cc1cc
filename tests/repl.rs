use monkey_treewalk::repl;

fn session(lines: &[&str]) -> Vec<String> {
    let input = lines.join("\n");
    let mut output = Vec::new();
    repl::start(input.as_bytes(), &mut output).expect("session failed");

    String::from_utf8(output)
        .expect("output is not utf-8")
        .split(">> ")
        .skip(1)
        .map(str::to_owned)
        .collect()
}

#[test]
fn bindings_accumulate_across_lines() {
    let transcript = session(&[
        "let add = fn(a, b) { a + b };",
        "let x = 40;",
        "add(x, 2)",
    ]);

    assert_eq!(transcript, vec!["", "", "42\n", ""]);
}

#[test]
fn closures_survive_between_lines() {
    let transcript = session(&[
        "let newAdder = fn(x) { fn(y) { x + y } };",
        "let addTwo = newAdder(2);",
        "addTwo(3);",
        "addTwo",
    ]);

    assert_eq!(transcript, vec!["", "", "5\n", "fn(y) { (x + y) }\n", ""]);
}

#[test]
fn syntax_errors_are_listed_and_not_evaluated() {
    let transcript = session(&["let = 5; let y 1;", "y"]);

    assert_eq!(
        transcript,
        vec![
            "\texpected next token to be Ident, got Assign instead\n\
             \texpected next token to be Assign, got Int instead\n",
            "ERROR: identifier not found: y\n",
            "",
        ]
    );
}

#[test]
fn runtime_errors_keep_the_session_alive() {
    let transcript = session(&["5 + true;", "let a = 1;", "foobar", "a"]);

    assert_eq!(
        transcript,
        vec![
            "ERROR: type mismatch: INTEGER + BOOLEAN\n",
            "",
            "ERROR: identifier not found: foobar\n",
            "1\n",
            "",
        ]
    );
}

#[test]
fn null_and_boolean_results_are_printed() {
    let transcript = session(&["if (false) { 10 }", "1 < 2", "!5"]);

    assert_eq!(transcript, vec!["null\n", "true\n", "false\n", ""]);
}

#[test]
fn missing_paren_reports_an_error() {
    let transcript = session(&["(1 + 2"]);

    assert_eq!(
        transcript,
        vec!["\texpected next token to be RParen, got Eof instead\n", ""]
    );
}
