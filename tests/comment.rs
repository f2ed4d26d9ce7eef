mod common;

use common::run;

#[test]
fn line_comment_at_end_of_file_is_ignored() {
    let (out, err) = run("print \"ok\"; // trailing comment, no newline after it");
    assert_eq!(out, "ok\n");
    assert_eq!(err, "");
}

#[test]
fn source_consisting_only_of_a_comment_produces_no_output() {
    let (out, err) = run("// nothing to see here");
    assert_eq!(out, "");
    assert_eq!(err, "");
}

#[test]
fn comment_does_not_interfere_with_unicode_in_surrounding_code() {
    let (out, _) = run("// café\nprint \"café\";");
    assert_eq!(out, "café\n");
}
