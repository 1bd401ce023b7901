use jklex::analysis::ErrorCode;

use crate::support::{analyze, lines, messages};

#[test]
fn kotlin_initializers_are_checked() {
    let analysis = analyze(
        "var a: Int = 3.14\nvar b: Float = 'c'\nvar c: Char = \"hello\"\nvar d: Int = 20",
    );
    assert_eq!(
        messages(&analysis, ErrorCode::E1),
        vec![
            "E1-TypeMismatch: Int 'a' cannot take '3.14'",
            "E1-TypeMismatch: Float 'b' cannot take ''c''",
            "E1-TypeMismatch: Char 'c' must take a char literal, got '\"hello\"'",
        ]
    );
    assert_eq!(lines(&analysis, ErrorCode::E1), vec![1, 2, 3]);
}

#[test]
fn java_initializers_are_checked_through_the_symbol_table() {
    let analysis = analyze("int badInt1 = 3.14;\nfloat ok = 21.9;\nchar badChar1 = \"wrong\";");
    assert_eq!(
        messages(&analysis, ErrorCode::E1),
        vec![
            "E1-TypeMismatch: int 'badInt1' cannot take '3.14'",
            "E1-TypeMismatch: char 'badChar1' must take a char literal, got '\"wrong\"'",
        ]
    );
}

#[test]
fn reassignment_uses_declared_type() {
    let analysis = analyze("var n: Long = 1\nn = 2.5f\nn = 7\nn = n + 1");
    assert_eq!(
        messages(&analysis, ErrorCode::E1),
        vec!["E1-TypeMismatch: Long 'n' cannot take '2.5f'"]
    );
    assert_eq!(lines(&analysis, ErrorCode::E1), vec![2]);
}

#[test]
fn boolean_values_fit_floats_only() {
    let analysis = analyze(
        "var f: Float = true\ndouble d = false;\nvar flag: Int = true\nvar c: Char = false",
    );
    assert_eq!(
        messages(&analysis, ErrorCode::E1),
        vec![
            "E1-TypeMismatch: Int 'flag' cannot take 'true'",
            "E1-TypeMismatch: Char 'c' must take a char literal, got 'false'",
        ]
    );
    assert_eq!(lines(&analysis, ErrorCode::E1), vec![3, 4]);
}

#[test]
fn untyped_and_string_targets_accept_anything() {
    let analysis = analyze("var s: String = 'c'\nvar u = 1\nu = \"text\"");
    assert!(messages(&analysis, ErrorCode::E1).is_empty());
}

#[test]
fn one_mismatch_per_assignment() {
    let analysis = analyze("int x = 'c';");
    assert_eq!(analysis.summary().e1, 1);
}
