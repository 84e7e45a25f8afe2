//! Integration tests for Datalens.

use std::fs;

use tempfile::TempDir;

use datalens::{
    AnalysisRequest, AnalysisType, ChartType, Datalens, DatalensConfig, DatalensError, Label,
    SuggestionConfig,
};

/// Helper to create a dataset directory holding the given CSV files.
fn create_datasets(files: &[(&str, &str)]) -> (TempDir, Datalens) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (id, content) in files {
        fs::write(dir.path().join(format!("{}.csv", id)), content)
            .expect("Failed to write dataset");
    }
    let datalens = Datalens::new(dir.path());
    (dir, datalens)
}

fn text(labels: &[&str]) -> Vec<Label> {
    labels.iter().map(|l| Label::from(*l)).collect()
}

const SALES: &str = "order_date,region,product,amount,note\n\
                     2024-01-03,east,widget,10,first order\n\
                     2024-01-17,west,gadget,4.5,\n\
                     2024-03-09,east,widget,7,rush\n\
                     2024-03-28,north,gizmo,NA,refund pending\n";

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_list_datasets() {
    let (_dir, datalens) = create_datasets(&[("sales", SALES), ("empty", "a,b\n")]);
    assert_eq!(datalens.list_datasets().unwrap(), vec!["empty", "sales"]);
}

#[test]
fn test_list_missing_directory() {
    let datalens = Datalens::new("/nonexistent/datalens");
    assert!(datalens.list_datasets().unwrap().is_empty());
}

// =============================================================================
// Suggestions
// =============================================================================

#[test]
fn test_suggestions_for_sales() {
    let (_dir, datalens) = create_datasets(&[("sales", SALES)]);
    let report = datalens.suggest("sales").unwrap();

    assert_eq!(
        report.columns,
        vec!["order_date", "region", "product", "amount", "note"]
    );

    let ids: Vec<&str> = report.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "month_order_date",
            "quarter_order_date",
            "count_region",
            "count_product",
            "sum_amount",
            "avg_amount",
            "count_note",
        ]
    );
    assert_eq!(report.suggestions[0].analysis_type, AnalysisType::ResampleMonth);
    assert_eq!(report.suggestions[1].analysis_type, AnalysisType::ResampleQuarter);
}

#[test]
fn test_high_cardinality_text_gets_no_suggestion() {
    let mut content = String::from("name,score\n");
    for i in 0..25 {
        content.push_str(&format!("person_{},{}\n", i, i % 5));
    }
    let (_dir, datalens) = create_datasets(&[("people", &content)]);

    let report = datalens.suggest("people").unwrap();
    assert!(report.suggestions.iter().all(|s| s.column != "name"));
    assert_eq!(report.suggestions.len(), 2);
}

#[test]
fn test_only_one_temporal_column() {
    let content = "created,updated,qty\n\
                   2024-01-01,2024-02-01,1\n\
                   2024-01-05,2024-02-09,2\n";
    let (_dir, datalens) = create_datasets(&[("events", content)]);

    let report = datalens.suggest("events").unwrap();
    let resamples: Vec<&str> = report
        .suggestions
        .iter()
        .filter(|s| s.analysis_type.is_resample())
        .map(|s| s.column.as_str())
        .collect();
    assert_eq!(resamples, vec!["created", "created"]);
}

#[test]
fn test_suggest_honors_configured_threshold() {
    let (dir, _) = create_datasets(&[("sales", SALES)]);
    let config = DatalensConfig {
        suggestions: SuggestionConfig {
            categorical_threshold: 3,
        },
        ..DatalensConfig::with_dataset_dir(dir.path())
    };
    let datalens = Datalens::with_config(config);

    // Every text column has 3 distinct values
    let report = datalens.suggest("sales").unwrap();
    let ids: Vec<&str> = report.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["month_order_date", "quarter_order_date", "sum_amount", "avg_amount"]
    );
}

#[test]
fn test_suggestions_unknown_dataset() {
    let (_dir, datalens) = create_datasets(&[]);
    let err = datalens.suggest("ghost").unwrap_err();
    assert!(err.is_not_found());
}

// =============================================================================
// Analysis
// =============================================================================

#[test]
fn test_group_sum_example() {
    let (_dir, datalens) = create_datasets(&[("t", "A,group\n1,x\n2,x\n3,y\n")]);
    let request = AnalysisRequest::new("group_sum", "A").with_group_by("group");

    let result = datalens.analyze("t", &request).unwrap();
    assert_eq!(result.chart_type, ChartType::Bar);
    assert_eq!(result.labels, text(&["x", "y"]));
    assert_eq!(result.data, vec![3.0, 3.0]);
}

#[test]
fn test_group_avg_skips_missing_values() {
    let (_dir, datalens) = create_datasets(&[("sales", SALES)]);
    let request = AnalysisRequest::new("group_avg", "amount").with_group_by("region");

    let result = datalens.analyze("sales", &request).unwrap();
    assert_eq!(result.labels, text(&["east", "north", "west"]));
    assert_eq!(result.data[0], 8.5);
    assert!(result.data[1].is_nan());
    assert_eq!(result.data[2], 4.5);
}

#[test]
fn test_value_counts_example() {
    let (_dir, datalens) = create_datasets(&[("t", "c\na\na\nb\n")]);
    let result = datalens
        .analyze("t", &AnalysisRequest::new("value_counts", "c"))
        .unwrap();

    assert_eq!(result.chart_type, ChartType::Pie);
    assert_eq!(result.labels, text(&["a", "b"]));
    assert_eq!(result.data, vec![2.0, 1.0]);
}

#[test]
fn test_resample_month_gap_filled() {
    let (_dir, datalens) = create_datasets(&[("sales", SALES)]);
    let result = datalens
        .analyze("sales", &AnalysisRequest::new("resample_month", "order_date"))
        .unwrap();

    assert_eq!(result.chart_type, ChartType::Line);
    assert_eq!(result.labels, text(&["2024-01", "2024-02", "2024-03"]));
    assert_eq!(result.data, vec![2.0, 0.0, 2.0]);
}

#[test]
fn test_resample_quarter() {
    let content = "when\n2023-12-30\n2024-05-01\n2024-05-02\n";
    let (_dir, datalens) = create_datasets(&[("log", content)]);
    let result = datalens
        .analyze("log", &AnalysisRequest::new("resample_quarter", "when"))
        .unwrap();

    assert_eq!(result.labels, text(&["2023Q4", "2024Q1", "2024Q2"]));
    assert_eq!(result.data, vec![1.0, 0.0, 2.0]);
}

#[test]
fn test_numeric_group_keys_are_numbers() {
    let content = "year,units\n2024,5\n2023,1\n2024,2\n";
    let (_dir, datalens) = create_datasets(&[("t", content)]);
    let request = AnalysisRequest::new("group_sum", "units").with_group_by("year");

    let result = datalens.analyze("t", &request).unwrap();
    assert_eq!(result.labels, vec![Label::Integer(2023), Label::Integer(2024)]);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["labels"], serde_json::json!([2023, 2024]));
    assert_eq!(json["data"], serde_json::json!([1, 7]));
}

#[test]
fn test_duplicate_columns_are_each_reachable() {
    let content = "g,v,v\nx,1,10\nx,2,20\ny,3,30\n";
    let (_dir, datalens) = create_datasets(&[("dup", content)]);

    let report = datalens.suggest("dup").unwrap();
    assert_eq!(report.columns, vec!["g", "v", "v.1"]);
    let ids: Vec<&str> = report.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["count_g", "sum_v", "avg_v", "sum_v.1", "avg_v.1"]);

    let first = datalens
        .analyze("dup", &AnalysisRequest::new("group_sum", "v").with_group_by("g"))
        .unwrap();
    assert_eq!(first.data, vec![3.0, 3.0]);

    let second = datalens
        .analyze("dup", &AnalysisRequest::new("group_sum", "v.1").with_group_by("g"))
        .unwrap();
    assert_eq!(second.data, vec![30.0, 30.0]);
}

#[test]
fn test_unknown_column_is_invalid_request() {
    let (_dir, datalens) = create_datasets(&[("sales", SALES)]);
    let request = AnalysisRequest::new("group_sum", "profit").with_group_by("region");

    let err = datalens.analyze("sales", &request).unwrap_err();
    assert!(matches!(err, DatalensError::InvalidRequest(_)));
}

#[test]
fn test_analyze_unknown_dataset() {
    let (_dir, datalens) = create_datasets(&[]);
    let err = datalens
        .analyze("ghost", &AnalysisRequest::new("value_counts", "c"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_unreadable_csv_is_client_error() {
    let (dir, datalens) = create_datasets(&[]);
    fs::write(dir.path().join("broken.csv"), b"a,b\n\xff\xfe,1\n").unwrap();

    let err = datalens.suggest("broken").unwrap_err();
    assert!(matches!(err, DatalensError::Csv(_)));
    assert!(err.is_client_error());
}

#[test]
fn test_repeated_analysis_is_byte_identical() {
    let (_dir, datalens) = create_datasets(&[("sales", SALES)]);
    let request = AnalysisRequest::new("value_counts", "region").with_group_by("product");

    let first = serde_json::to_string(&datalens.analyze("sales", &request).unwrap()).unwrap();
    let second = serde_json::to_string(&datalens.analyze("sales", &request).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_changes_on_disk_are_picked_up() {
    let (dir, datalens) = create_datasets(&[("t", "c\na\n")]);
    let request = AnalysisRequest::new("value_counts", "c");
    assert_eq!(datalens.analyze("t", &request).unwrap().data, vec![1.0]);

    fs::write(dir.path().join("t.csv"), "c\na\na\n").unwrap();
    assert_eq!(datalens.analyze("t", &request).unwrap().data, vec![2.0]);
}
