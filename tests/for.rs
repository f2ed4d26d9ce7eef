mod common;

use common::run;

#[test]
fn for_loop_counts_as_expected() {
    let (out, _) = run("for (var i = 0; i < 3; i = i + 1) print i;");
    assert_eq!(out, "0\n1\n2\n");
}

#[test]
fn increment_still_runs_when_the_body_is_a_single_expression_statement() {
    let source = "
        var count = 0;
        for (var i = 0; i < 5; i = i + 1) count = count + 1;
        print count;
    ";
    let (out, _) = run(source);
    assert_eq!(out, "5\n");
}

#[test]
fn all_clauses_are_optional() {
    let source = "
        var i = 0;
        for (;;) {
            if (i >= 3) return;
            print i;
            i = i + 1;
        }
    ";
    // `return` at top level surfaces as a runtime error (§4.5), which is
    // the cleanest way to break out of an infinite for loop from script
    // top-level code without a `break` statement.
    let (out, err) = run(source);
    assert_eq!(out, "0\n1\n2\n");
    assert!(err.contains("Can't return from top-level code."));
}

#[test]
fn for_loop_scopes_its_initializer_to_the_loop() {
    let (_, err) = run("for (var i = 0; i < 1; i = i + 1) {} print i;");
    assert!(err.contains("Undefined variable 'i'."));
}
