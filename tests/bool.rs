mod common;

use common::run;

#[test]
fn equality_is_defined_between_booleans() {
    let (out, _) = run(
        "print true == true; print true == false; print false == true; print false == false;",
    );
    assert_eq!(out, "true\nfalse\nfalse\ntrue\n");
}

#[test]
fn equality_across_types_is_always_false_and_never_errors() {
    let (out, err) = run("print true == 1; print true == \"true\"; print false == nil;");
    assert_eq!(out, "false\nfalse\nfalse\n");
    assert_eq!(err, "");
}

#[test]
fn not_negates_truthiness() {
    let (out, _) = run("print !true; print !false; print !!true;");
    assert_eq!(out, "false\ntrue\ntrue\n");
}
