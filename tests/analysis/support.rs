use jklex::analysis::{Analysis, Analyzer, ErrorCode};

pub fn analyze(source: &str) -> Analysis {
    Analyzer::default()
        .analyze(source)
        .expect("analysis should succeed")
}

pub fn messages(analysis: &Analysis, code: ErrorCode) -> Vec<String> {
    analysis
        .diagnostics_with(code)
        .map(ToString::to_string)
        .collect()
}

pub fn lines(analysis: &Analysis, code: ErrorCode) -> Vec<u32> {
    analysis
        .diagnostics_with(code)
        .map(|diagnostic| diagnostic.line.value())
        .collect()
}
