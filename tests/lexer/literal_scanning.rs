use jklex::lexer::{DiagnosticCode, RecoverableLexError, TokenKind, tokenize};

#[test]
fn numbers_keep_fraction_and_suffix() {
    let output = tokenize("2.5f 10L 3.14 0..19").expect("scan should succeed");
    let numbers: Vec<&str> = output
        .tokens
        .iter()
        .map(|token| {
            assert_eq!(token.kind, TokenKind::Number);
            token.lexeme.as_str()
        })
        .collect();
    assert_eq!(numbers, vec!["2.5f", "10L", "3.14", "0..19"]);
}

#[test]
fn char_literals_with_and_without_escapes() {
    let output = tokenize(r"'A' '\n' '\''").expect("scan should succeed");
    let chars: Vec<&str> = output.tokens.iter().map(|token| token.lexeme.as_str()).collect();
    assert_eq!(chars, vec!["'A'", r"'\n'", r"'\''"]);
    assert!(output.warnings.is_empty());
}

#[test]
fn string_literal_keeps_escapes_verbatim() {
    let output = tokenize(r#"val s = "say \"hi\"\t""#).expect("scan should succeed");
    assert_eq!(output.tokens[3].kind, TokenKind::StringLiteral);
    assert_eq!(output.tokens[3].lexeme, r#""say \"hi\"\t""#);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    let output = tokenize("s = \"abc\nnext").expect("scan should succeed");
    let last = output.tokens.last().expect("string token");
    assert_eq!(last.lexeme, "\"abc\nnext");
    assert_eq!(last.line.value(), 1);
    match output.warnings.as_slice() {
        [RecoverableLexError::UnterminatedStringLiteral(diagnostic)] => {
            assert_eq!(diagnostic.code, DiagnosticCode::UnterminatedStringLiteral);
            assert_eq!(diagnostic.near_text.as_deref(), Some("\"abc"));
            assert_eq!(
                diagnostic.suggestion.as_deref(),
                Some("close the string literal with `\"`.")
            );
        }
        other => panic!("unexpected warnings: {other:?}"),
    }
}

#[test]
fn char_literal_missing_close_keeps_following_text() {
    let output = tokenize("c = 'ab'").expect("scan should succeed");
    let lexemes: Vec<&str> = output.tokens.iter().map(|token| token.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["c", "=", "'a", "b", "'"]);
    assert_eq!(output.warnings.len(), 2);
    assert!(
        output
            .warnings
            .iter()
            .all(|warning| warning.diagnostic().code == DiagnosticCode::UnterminatedCharLiteral)
    );
}
