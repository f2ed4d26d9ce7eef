mod common;

use common::run;

#[test]
fn empty_block_is_legal() {
    let (out, err) = run("{} print \"ok\";");
    assert_eq!(out, "ok\n");
    assert_eq!(err, "");
}

#[test]
fn nested_scopes_resolve_to_the_nearest_binding() {
    let (out, _) = run("var a = \"outer\"; { var a = \"inner\"; print a; } print a;");
    assert_eq!(out, "inner\nouter\n");
}
