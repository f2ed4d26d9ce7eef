mod common;

use common::run;

#[test]
fn string_literals_print_verbatim() {
    let (out, _) = run("print \"a string\"; print \"\";");
    assert_eq!(out, "a string\n\n");
}

#[test]
fn strings_concatenate_with_plus() {
    let (out, _) = run("print \"foo\" + \"bar\";");
    assert_eq!(out, "foobar\n");
}

#[test]
fn string_literal_can_span_multiple_lines() {
    let (out, err) = run("var a = \"1\n2\n3\"; print a;");
    assert_eq!(out, "1\n2\n3\n");
    assert_eq!(err, "");
}

#[test]
fn unterminated_string_is_a_syntax_error_that_stops_execution() {
    let (out, err) = run("print \"oops;");
    assert_eq!(out, "");
    assert_eq!(err, "[line 1] Error: Unterminated string.\n");
}
