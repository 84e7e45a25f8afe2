//! Fuzz target for the CSV parser and schema inference.
//!
//! Arbitrary bytes must either parse into a table whose rows all match the
//! header width, or fail with an error. Never a panic.

#![no_main]

use datalens::inference::StatisticalAnalyzer;
use datalens::{Parser, SuggestionEngine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(table) = Parser::new().parse_bytes(data) {
        assert!(table.rows.iter().all(|row| row.len() == table.column_count()));

        let schema = StatisticalAnalyzer::new().analyze_table(&table);
        let _ = SuggestionEngine::new().generate(&schema);
    }
});
