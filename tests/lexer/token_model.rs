use jklex::lexer::{LexStep, Lexer, TokenKind, tokenize};

fn kinds_and_lexemes(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input)
        .expect("scan should succeed")
        .tokens
        .into_iter()
        .map(|token| (token.kind, token.lexeme))
        .collect()
}

#[test]
fn keywords_and_identifiers_are_distinguished() {
    let tokens = kinds_and_lexemes("int count\nval Name");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Keyword, "int".to_string()),
            (TokenKind::Identifier, "count".to_string()),
            (TokenKind::Keyword, "val".to_string()),
            (TokenKind::Identifier, "Name".to_string()),
        ]
    );
}

#[test]
fn kotlin_type_names_are_keywords() {
    let tokens = kinds_and_lexemes("String Boolean Long lateinit");
    assert!(tokens.iter().all(|(kind, _)| *kind == TokenKind::Keyword));
}

#[test]
fn identifiers_may_contain_digits_and_underscores() {
    let tokens = kinds_and_lexemes("_tmp a1_b2 9lives");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Identifier, "_tmp".to_string()),
            (TokenKind::Identifier, "a1_b2".to_string()),
            (TokenKind::Number, "9lives".to_string()),
        ]
    );
}

#[test]
fn tokens_record_their_starting_line() {
    let output = tokenize("a\n\n  b\r\nc").expect("scan should succeed");
    let lines: Vec<u32> = output.tokens.iter().map(|token| token.line.value()).collect();
    assert_eq!(lines, vec![1, 3, 4]);
}

#[test]
fn spans_cover_the_lexeme() {
    let input = "x = 42";
    let output = tokenize(input).expect("scan should succeed");
    for token in &output.tokens {
        assert_eq!(token.span.slice(input), token.lexeme);
    }
}

#[test]
fn unrecognized_characters_are_skipped() {
    let tokens = kinds_and_lexemes("@Override fun π # $ `x`");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Identifier, "Override".to_string()),
            (TokenKind::Keyword, "fun".to_string()),
            (TokenKind::Identifier, "x".to_string()),
        ]
    );
}

#[test]
fn labels_are_stable() {
    let output = tokenize("int x = 'c' + \"s\" ; import a.b").expect("scan should succeed");
    let labels: Vec<&str> = output.tokens.iter().map(|token| token.kind.label()).collect();
    assert_eq!(
        labels,
        vec![
            "KEYWORD",
            "IDENTIFIER",
            "OPERATOR",
            "CHAR",
            "OPERATOR",
            "STRING",
            "SEPARATOR",
            "KEYWORD",
            "NAMESPACE",
        ]
    );
}

#[test]
fn next_token_reports_end_of_input_repeatedly() {
    let mut lexer = Lexer::new("   \n");
    assert_eq!(lexer.next_token().expect("scan should succeed"), LexStep::EndOfInput);
    assert_eq!(lexer.next_token().expect("scan should succeed"), LexStep::EndOfInput);
}
