mod common;

use common::run;

#[test]
fn return_with_no_value_yields_nil() {
    let (out, _) = run("fun f() { return; } print f();");
    assert_eq!(out, "nil\n");
}

#[test]
fn return_inside_an_if_branch_exits_the_enclosing_call() {
    let source = "
        fun f() {
            if (true) { return \"early\"; }
            return \"late\";
        }
        print f();
    ";
    let (out, _) = run(source);
    assert_eq!(out, "early\n");
}

#[test]
fn return_inside_a_while_loop_exits_the_enclosing_call() {
    let source = "
        fun firstEven(limit) {
            var i = 0;
            while (i < limit) {
                if (i == 2) return i;
                i = i + 1;
            }
            return -1;
        }
        print firstEven(10);
    ";
    let (out, _) = run(source);
    assert_eq!(out, "2\n");
}

#[test]
fn return_at_top_level_is_a_clean_runtime_error() {
    let (_, err) = run("return 1;");
    assert_eq!(err, "Can't return from top-level code.\n[line 1]\n");
}
