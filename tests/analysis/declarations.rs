use jklex::analysis::DeclaredType;

use crate::support::analyze;

fn declared(source: &str) -> Vec<(String, DeclaredType)> {
    analyze(source)
        .declarations
        .into_iter()
        .map(|declaration| (declaration.name, declaration.declared_type))
        .collect()
}

fn named(name: &str) -> DeclaredType {
    DeclaredType::Named(name.to_string())
}

#[test]
fn java_declarations_take_the_keyword_as_type() {
    assert_eq!(
        declared("int x;\nfloat y = 2.0;\nchar c;"),
        vec![
            ("x".to_string(), named("int")),
            ("y".to_string(), named("float")),
            ("c".to_string(), named("char")),
        ]
    );
}

#[test]
fn kotlin_annotations_set_the_type() {
    assert_eq!(
        declared("var x: Int\nval name: String = \"k\"\nvar maybe: String? = null"),
        vec![
            ("x".to_string(), named("Int")),
            ("name".to_string(), named("String")),
            ("maybe".to_string(), named("String")),
        ]
    );
}

#[test]
fn untyped_kotlin_binding_is_unknown() {
    assert_eq!(
        declared("var len = maybe"),
        vec![("len".to_string(), DeclaredType::Unknown)]
    );
}

#[test]
fn any_keyword_before_an_identifier_declares_it() {
    assert_eq!(
        declared("fun main() {}\nclass Box"),
        vec![
            ("main".to_string(), named("fun")),
            ("Box".to_string(), named("class")),
        ]
    );
}

#[test]
fn first_declaration_keeps_its_type() {
    let analysis = analyze("int x;\nvar x: Float = 1.5");
    assert_eq!(analysis.declarations.len(), 1);
    assert_eq!(analysis.declarations[0].declared_type, named("int"));
    assert_eq!(analysis.declarations[0].line.value(), 1);
}

#[test]
fn declaration_records_token_position() {
    let analysis = analyze("x = 1\nint x");
    let declaration = &analysis.declarations[0];
    assert_eq!(declaration.token_index, 4);
    assert_eq!(analysis.tokens[declaration.token_index].lexeme, "x");
}
