//! Example: run every suggested analysis on a dataset.
//!
//! Usage:
//!   cargo run --example analyze -- <dataset_dir> <dataset_id>
//!
//! Example:
//!   cargo run --example analyze -- datasets sales

use std::env;

use datalens::{AnalysisRequest, ColumnType, Datalens};

fn main() -> datalens::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example analyze -- <dataset_dir> <dataset_id>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- datasets sales");
        std::process::exit(1);
    }

    let datalens = Datalens::new(&args[1]);
    let id = &args[2];

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Datalens Analysis: {}", id);
    println!("{}", separator);
    println!();

    let dataset = datalens.load(id)?;

    println!("## Schema ({} columns, {} rows)", dataset.schema.column_count(), dataset.table.row_count());
    println!();
    for col in &dataset.schema.columns {
        println!(
            "  {:20} {:10} distinct={:<5} missing={}",
            col.name,
            col.inferred_type.to_string(),
            col.statistics.unique_count,
            col.statistics.null_count
        );
    }
    println!();

    // Group-style suggestions need a grouping column; use the first text one
    let group_by = dataset
        .schema
        .columns
        .iter()
        .find(|c| c.inferred_type == ColumnType::String)
        .map(|c| c.name.clone());

    let report = datalens.suggest(id)?;
    println!("## Suggestions ({} total)", report.suggestions.len());
    println!();

    for (i, suggestion) in report.suggestions.iter().enumerate() {
        println!("  {}. [{}] {}", i + 1, suggestion.id, suggestion.text);

        let mut request = AnalysisRequest::new(suggestion.analysis_type.as_str(), &suggestion.column);
        if suggestion.requires_group_by() {
            match &group_by {
                Some(group) => request = request.with_group_by(group),
                None => {
                    println!("     skipped: no text column to group by");
                    println!();
                    continue;
                }
            }
        }

        match datalens.analyze(id, &request) {
            Ok(result) => {
                println!("     {} ({:?})", result.title, result.chart_type);
                for (label, value) in result.labels.iter().zip(&result.data) {
                    println!("       {:>16}  {}", label.to_string(), value);
                }
            }
            Err(e) => println!("     failed: {}", e),
        }
        println!();
    }

    println!("{}", separator);

    Ok(())
}
