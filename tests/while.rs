mod common;

use common::run;

#[test]
fn while_loop_runs_until_the_condition_is_falsey() {
    let (out, _) = run("var i = 0; while (i < 3) { print i; i = i + 1; }");
    assert_eq!(out, "0\n1\n2\n");
}

#[test]
fn while_loop_with_a_false_condition_never_runs_the_body() {
    let (out, err) = run("while (false) print \"never\";");
    assert_eq!(out, "");
    assert_eq!(err, "");
}

#[test]
fn closures_created_inside_a_while_body_capture_their_own_iteration_state() {
    let source = "
        var closures = \"\";
        fun makeClosures() {
            var i = 1;
            var fns = nil;
            var capture;
            while (i < 4) {
                var copy = i;
                fun show() { print copy; }
                if (i == 1) { capture = show; }
                i = i + 1;
            }
            return capture;
        }
        var f = makeClosures();
        f();
    ";
    let (out, _) = run(source);
    assert_eq!(out, "1\n");
}
