//! Fuzz target for the analysis engine.
//!
//! Structured input drives a small table and a request; every combination
//! must produce a result with matching label/data lengths or an error.

#![no_main]

use arbitrary::Arbitrary;
use datalens::analysis::AnalysisEngine;
use datalens::inference::StatisticalAnalyzer;
use datalens::{AnalysisRequest, DataTable};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    rows: Vec<(String, String, String)>,
    analysis_type: String,
    column: Option<String>,
    group_by_col: Option<String>,
}

fuzz_target!(|input: Input| {
    if input.rows.len() > 1_000 {
        return;
    }

    let table = DataTable::new(
        vec!["a".into(), "b".into(), "c".into()],
        input.rows.into_iter().map(|(a, b, c)| vec![a, b, c]).collect(),
    );
    let schema = StatisticalAnalyzer::new().analyze_table(&table);
    let request = AnalysisRequest {
        analysis_type: Some(input.analysis_type),
        column: input.column,
        group_by_col: input.group_by_col,
    };

    if let Ok(result) = AnalysisEngine::new().analyze(&table, &schema, &request) {
        assert_eq!(result.labels.len(), result.data.len());
    }
});
