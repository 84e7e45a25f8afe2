//! Fuzz target for timestamp parsing.
//!
//! The regex prefilter and chrono formats must not panic on any string,
//! and a value that parses must round-trip through resampling.

#![no_main]

use datalens::analysis::AnalysisEngine;
use datalens::inference::{parse_timestamp, StatisticalAnalyzer};
use datalens::{AnalysisRequest, DataTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1_000 {
        return;
    }

    let Ok(value) = std::str::from_utf8(data) else {
        return;
    };

    if parse_timestamp(value).is_some() {
        let table = DataTable::new(vec!["when".into()], vec![vec![value.to_string()]]);
        let schema = StatisticalAnalyzer::new().analyze_table(&table);
        let result = AnalysisEngine::new()
            .analyze(&table, &schema, &AnalysisRequest::new("resample_quarter", "when"));
        assert!(result.is_ok());
    }
});
