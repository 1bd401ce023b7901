use jklex::analysis::Analyzer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn analysis_never_panics_and_counts_add_up(
        input in "(var |val |int |x|y|vaar|= |< |>= |== |1|2.5|'c'|\"s\"|: Int |;|\\n){0,64}"
    ) {
        let analysis = Analyzer::default().analyze(&input).expect("analysis should succeed");
        let summary = analysis.summary();
        prop_assert_eq!(summary.total, analysis.diagnostics.len());
        prop_assert_eq!(summary.e1 + summary.e2 + summary.e3 + summary.e4, summary.total);
        for diagnostic in &analysis.diagnostics {
            prop_assert!(diagnostic.token_index < analysis.tokens.len());
        }
        for pair in analysis.diagnostics.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
    }
}
