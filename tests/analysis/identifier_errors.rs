use jklex::analysis::ErrorCode;

use crate::support::{analyze, lines, messages};

#[test]
fn use_before_later_declaration_is_reported() {
    let analysis = analyze("undeclaredVar = 10\nvar undeclaredVar: Int\nundeclaredVar = 11");
    assert_eq!(
        messages(&analysis, ErrorCode::E3),
        vec!["E3-IdentifierError: 'undeclaredVar' used before declaration"]
    );
    assert_eq!(lines(&analysis, ErrorCode::E3), vec![1]);
}

#[test]
fn assignment_and_use_on_same_token_report_once() {
    let analysis = analyze("preDecl=99;");
    assert_eq!(analysis.summary().e3, 1);
}

#[test]
fn every_undeclared_use_is_reported() {
    let analysis = analyze("int a;\na = b + c;");
    assert_eq!(
        messages(&analysis, ErrorCode::E3),
        vec![
            "E3-IdentifierError: 'b' used before declaration",
            "E3-IdentifierError: 'c' used before declaration",
        ]
    );
}

#[test]
fn declared_names_are_clean() {
    let analysis = analyze("var x: Int = 1\nx = x + 1");
    assert!(analysis.is_clean(), "{:?}", analysis.diagnostics);
}
