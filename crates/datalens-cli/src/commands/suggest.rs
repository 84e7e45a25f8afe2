//! Suggest command - show the analyses proposed for a dataset.

use std::path::PathBuf;

use colored::Colorize;
use datalens::Datalens;

pub fn run(dir: PathBuf, dataset: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let datalens = Datalens::new(dir);
    let report = datalens.suggest(&dataset)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Column table only; suggestions come from the facade above
    let loaded = datalens.load(&dataset)?;

    println!(
        "{} {} ({} rows)",
        "Dataset".cyan().bold(),
        dataset.white().bold(),
        loaded.table.row_count()
    );
    println!();
    println!("{}", "Columns:".yellow().bold());
    for column in &loaded.schema.columns {
        println!(
            "  {:20} {:10} {} distinct, {:.0}% missing",
            column.name,
            column.inferred_type.to_string(),
            column.statistics.unique_count,
            column.null_percentage()
        );
    }
    println!();

    if report.suggestions.is_empty() {
        println!("{}", "No analyses to suggest for this dataset".yellow());
        return Ok(());
    }

    println!("{}", "Suggestions:".yellow().bold());
    for suggestion in &report.suggestions {
        let group_note = if suggestion.requires_group_by() {
            " (needs --group-by)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:24} {}{}",
            suggestion.id.green(),
            suggestion.text,
            group_note
        );
    }

    println!();
    if let Some(first) = report.suggestions.first() {
        println!(
            "Run {} to try one",
            format!(
                "datalens analyze {} --type {} --column {}",
                dataset, first.analysis_type, first.column
            )
            .cyan()
            .bold()
        );
    }

    Ok(())
}
