//! Analyze command - run one analysis and print the chart data.

use std::path::PathBuf;

use colored::Colorize;
use datalens::{AnalysisRequest, AnalysisResult, AnalysisType, Datalens};

/// Width of the widest bar in the text chart.
const BAR_WIDTH: usize = 40;

pub fn run(
    dir: PathBuf,
    dataset: String,
    analysis_type: AnalysisType,
    column: String,
    group_by: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut request = AnalysisRequest::new(analysis_type.as_str(), column);
    if let Some(group_by) = group_by {
        request = request.with_group_by(group_by);
    }

    let result = Datalens::new(dir).analyze(&dataset, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_chart(&result);
    Ok(())
}

fn print_chart(result: &AnalysisResult) {
    println!(
        "{} {}",
        result.title.cyan().bold(),
        format!("({:?} chart)", result.chart_type).to_lowercase().dimmed()
    );
    println!();

    if result.is_empty() {
        println!("{}", "No data".yellow());
        return;
    }

    let labels: Vec<String> = result.labels.iter().map(|l| l.to_string()).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = result
        .data
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));

    for (label, value) in labels.iter().zip(&result.data) {
        if !value.is_finite() {
            println!("  {:>width$}  {}", label, "-".dimmed(), width = label_width);
            continue;
        }

        let filled = if max > 0.0 {
            ((value.abs() / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "  {:>width$}  {} {}",
            label,
            "█".repeat(filled).green(),
            format_value(*value),
            width = label_width
        );
    }
}

/// Whole numbers print without a fractional part.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
