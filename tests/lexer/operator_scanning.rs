use jklex::lexer::{OperatorKind, TokenKind, tokenize};

fn operators(input: &str) -> Vec<OperatorKind> {
    tokenize(input)
        .expect("scan should succeed")
        .tokens
        .iter()
        .filter_map(|token| token.operator())
        .collect()
}

#[test]
fn kotlin_operators_use_longest_match() {
    assert_eq!(
        operators("a?.b ?: c .. d"),
        vec![OperatorKind::SafeCall, OperatorKind::Elvis, OperatorKind::Range]
    );
}

#[test]
fn comparison_and_logical_pairs() {
    assert_eq!(
        operators("== != <= >= && || < > !"),
        vec![
            OperatorKind::Equal,
            OperatorKind::NotEqual,
            OperatorKind::LessEqual,
            OperatorKind::GreaterEqual,
            OperatorKind::AndAnd,
            OperatorKind::OrOr,
            OperatorKind::Less,
            OperatorKind::Greater,
            OperatorKind::Bang,
        ]
    );
}

#[test]
fn triple_equals_splits_into_pair_and_single() {
    assert_eq!(operators("==="), vec![OperatorKind::Equal, OperatorKind::Assign]);
}

#[test]
fn adjacent_operators_without_spaces() {
    assert_eq!(
        operators("i++<=-1"),
        vec![
            OperatorKind::Plus,
            OperatorKind::Plus,
            OperatorKind::LessEqual,
            OperatorKind::Minus,
        ]
    );
}

#[test]
fn parentheses_are_operators_and_braces_are_separators() {
    let output = tokenize("f(x) { a[0]; b, c: d }").expect("scan should succeed");
    let classes: Vec<(String, &str)> = output
        .tokens
        .iter()
        .filter(|token| !matches!(token.kind, TokenKind::Identifier | TokenKind::Number))
        .map(|token| (token.lexeme.clone(), token.kind.label()))
        .collect();
    assert_eq!(
        classes,
        vec![
            ("(".to_string(), "OPERATOR"),
            (")".to_string(), "OPERATOR"),
            ("{".to_string(), "SEPARATOR"),
            ("[".to_string(), "SEPARATOR"),
            ("]".to_string(), "SEPARATOR"),
            (";".to_string(), "SEPARATOR"),
            (",".to_string(), "SEPARATOR"),
            (":".to_string(), "SEPARATOR"),
            ("}".to_string(), "SEPARATOR"),
        ]
    );
}

#[test]
fn relational_classification() {
    assert!(OperatorKind::LessEqual.is_relational());
    assert!(OperatorKind::NotEqual.is_relational());
    assert!(!OperatorKind::Assign.is_relational());
    assert!(!OperatorKind::AndAnd.is_relational());
}
