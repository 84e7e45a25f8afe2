//! Group-by and frequency aggregations over a [`DataTable`].

use indexmap::IndexMap;

use crate::input::DataTable;
use crate::schema::ColumnSchema;

use super::types::Label;

/// Per-group reduction applied to the target column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
    Mean,
}

#[derive(Debug)]
struct GroupAccumulator {
    label: Label,
    sum: f64,
    count: usize,
}

impl GroupAccumulator {
    fn finish(&self, aggregation: Aggregation) -> f64 {
        match aggregation {
            Aggregation::Sum => self.sum,
            Aggregation::Mean if self.count == 0 => f64::NAN,
            Aggregation::Mean => self.sum / self.count as f64,
        }
    }
}

/// Reduce `target` per distinct value of `group`.
///
/// Rows with a missing group key are dropped; missing target values are
/// skipped. Groups come back in ascending key order.
pub fn group_aggregate(
    table: &DataTable,
    target: &ColumnSchema,
    group: &ColumnSchema,
    aggregation: Aggregation,
) -> (Vec<Label>, Vec<f64>) {
    let mut groups: IndexMap<String, GroupAccumulator> = IndexMap::new();

    let keys = table.column_values(group.position);
    let values = table.column_values(target.position);

    for (key, value) in keys.zip(values) {
        if DataTable::is_null_value(key) {
            continue;
        }

        let label = Label::from_cell(key, group.inferred_type);
        let acc = groups
            .entry(label.to_string())
            .or_insert_with(|| GroupAccumulator {
                label,
                sum: 0.0,
                count: 0,
            });

        if DataTable::is_null_value(value) {
            continue;
        }
        if let Ok(number) = value.trim().parse::<f64>() {
            acc.sum += number;
            acc.count += 1;
        }
    }

    let mut groups: Vec<GroupAccumulator> = groups.into_values().collect();
    groups.sort_by(|a, b| a.label.sort_cmp(&b.label));

    let data = groups.iter().map(|g| g.finish(aggregation)).collect();
    let labels = groups.into_iter().map(|g| g.label).collect();
    (labels, data)
}

/// Count occurrences of each distinct non-null value of `column`.
///
/// Values are ordered by descending count; ties keep first-appearance order.
pub fn value_counts(table: &DataTable, column: &ColumnSchema) -> (Vec<Label>, Vec<f64>) {
    let mut counts: IndexMap<String, (Label, usize)> = IndexMap::new();

    for value in table.column_values(column.position) {
        if DataTable::is_null_value(value) {
            continue;
        }
        let label = Label::from_cell(value, column.inferred_type);
        counts.entry(label.to_string()).or_insert((label, 0)).1 += 1;
    }

    let mut counts: Vec<(Label, usize)> = counts.into_values().collect();
    // Stable sort preserves first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(label, count)| (label, count as f64))
        .unzip()
}
