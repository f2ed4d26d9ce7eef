mod common;

use common::run;

#[test]
fn calling_a_number_is_a_runtime_error() {
    let (_, err) = run("var n = 1; n();");
    assert_eq!(err, "Can only call functions and classes.\n[line 1]\n");
}

#[test]
fn calling_a_string_is_a_runtime_error() {
    let (_, err) = run("\"not a function\"();");
    assert_eq!(err, "Can only call functions and classes.\n[line 1]\n");
}

#[test]
fn calling_nil_is_a_runtime_error() {
    let (_, err) = run("nil();");
    assert_eq!(err, "Can only call functions and classes.\n[line 1]\n");
}

#[test]
fn arguments_are_evaluated_left_to_right_before_the_call() {
    let source = "
        fun identity(x) { return x; }
        var log = \"\";
        fun trace(tag, value) { log = log + tag; return value; }
        print identity(trace(\"a\", 1)) + identity(trace(\"b\", 2));
        print log;
    ";
    let (out, _) = run(source);
    assert_eq!(out, "3\nab\n");
}

#[test]
fn declaring_a_call_with_more_than_255_arguments_is_a_parse_error() {
    let args: Vec<String> = (0..256).map(|i| i.to_string()).collect();
    let source = format!("fun f() {{}} f({});", args.join(", "));
    let (_, err) = run(&source);
    assert!(err.contains("Can't have more than 255 arguments."));
}
