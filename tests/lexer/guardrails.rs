use jklex::lexer::{
    DiagnosticCode, FatalLexError, LexStep, Lexer, LexerLimits, LexerOptions,
};

#[test]
fn token_exceeding_limit_returns_token_size_error() {
    let mut lexer = Lexer::with_options(
        "abcdef\n",
        LexerOptions {
            limits: LexerLimits {
                max_token_bytes: 4,
                ..Default::default()
            },
        },
    );

    match lexer.next_token() {
        Err(FatalLexError::TokenSizeLimitExceeded(diagnostic)) => {
            assert_eq!(diagnostic.code, DiagnosticCode::TokenSizeLimitExceeded);
            assert_eq!(
                diagnostic.message,
                "token size exceeded configured limit (4 bytes)"
            );
            assert_eq!(diagnostic.near_text.as_deref(), Some("abcde"));
            assert_eq!(
                diagnostic.suggestion.as_deref(),
                Some("reduce token size or raise lexer token-size limit.")
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn oversized_comment_is_rejected_too() {
    let mut lexer = Lexer::with_options(
        "// a long comment",
        LexerOptions {
            limits: LexerLimits {
                max_token_bytes: 8,
                ..Default::default()
            },
        },
    );
    assert!(matches!(
        lexer.next_token(),
        Err(FatalLexError::TokenSizeLimitExceeded(_))
    ));
}

#[test]
fn token_count_limit_stops_scanning() {
    let mut lexer = Lexer::with_options(
        "a b c",
        LexerOptions {
            limits: LexerLimits {
                max_tokens: 2,
                ..Default::default()
            },
        },
    );

    for expected in ["a", "b"] {
        match lexer.next_token().expect("within limit") {
            LexStep::Token(token) => assert_eq!(token.lexeme, expected),
            other => panic!("unexpected step: {other:?}"),
        }
    }

    match lexer.next_token() {
        Err(error @ FatalLexError::TokenCountLimitExceeded(_)) => {
            assert_eq!(
                error.diagnostic().message,
                "token count exceeded configured limit (2 tokens)"
            );
            assert_eq!(
                error.to_string(),
                "line 1: token count exceeded configured limit (2 tokens)"
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn default_limits_accept_large_inputs() {
    let input = "var x: Int = 1\n".repeat(5_000);
    let output = Lexer::new(&input).tokenize().expect("scan should succeed");
    assert_eq!(output.tokens.len(), 30_000);
}
