use jklex::analysis::Analyzer;
use jklex::report::render_json;
use serde_json::Value;

fn json(source: &str) -> Value {
    let analysis = Analyzer::default()
        .analyze(source)
        .expect("analysis should succeed");
    let text = render_json(&analysis).expect("serialization should succeed");
    serde_json::from_str(&text).expect("output should be valid json")
}

#[test]
fn tokens_use_report_labels() {
    let value = json("int x = 'c'");
    assert_eq!(value["tokens"][0]["kind"], "KEYWORD");
    assert_eq!(value["tokens"][0]["lexeme"], "int");
    assert_eq!(value["tokens"][0]["line"], 1);
    assert_eq!(value["tokens"][3]["kind"], "CHAR");
    assert_eq!(value["tokens"][3]["span"]["start"], 8);
}

#[test]
fn diagnostics_and_summary_are_included() {
    let value = json("int x = 'c'");
    assert_eq!(value["diagnostics"][0]["code"], "E1");
    assert_eq!(value["diagnostics"][0]["message"], "int 'x' cannot take ''c''");
    assert_eq!(value["summary"]["e1"], 1);
    assert_eq!(value["summary"]["total"], 1);
    assert_eq!(value["declarations"][0]["declared_type"], "int");
}

#[test]
fn lexical_warnings_are_tagged() {
    let value = json("/* open");
    assert_eq!(value["comments"][0]["text"], "/* open");
    assert_eq!(value["lex_warnings"][0]["kind"], "UnterminatedBlockComment");
    assert_eq!(
        value["lex_warnings"][0]["diagnostic"]["code"],
        "UnterminatedBlockComment"
    );
}
