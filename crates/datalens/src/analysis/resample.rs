//! Calendar bucketing of a temporal column.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDateTime};

use crate::error::{DatalensError, Result};
use crate::inference::parse_timestamp;
use crate::input::DataTable;
use crate::schema::ColumnSchema;

use super::types::Label;

/// Width of a resampling bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Month,
    Quarter,
}

impl Granularity {
    /// Sequential index of the bucket containing `ts`. Consecutive buckets
    /// have consecutive indices, which makes gap-filling a plain range.
    fn bucket_index(&self, ts: &NaiveDateTime) -> i64 {
        let year = ts.year() as i64;
        let month0 = ts.month0() as i64;
        match self {
            Granularity::Month => year * 12 + month0,
            Granularity::Quarter => year * 4 + month0 / 3,
        }
    }

    /// Render a bucket index as `YYYY-MM` or `YYYYQn`.
    fn bucket_label(&self, index: i64) -> String {
        match self {
            Granularity::Month => {
                format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1)
            }
            Granularity::Quarter => {
                format!("{:04}Q{}", index.div_euclid(4), index.rem_euclid(4) + 1)
            }
        }
    }

    /// Adjective used in chart titles.
    pub fn adjective(&self) -> &'static str {
        match self {
            Granularity::Month => "Monthly",
            Granularity::Quarter => "Quarterly",
        }
    }
}

/// Count rows per calendar bucket of `column`.
///
/// Every non-null value must parse as a date; the column is re-parsed
/// whatever its inferred type. Buckets run from the earliest to the latest
/// observed value, with zero counts for empty buckets in between.
pub fn resample_counts(
    table: &DataTable,
    column: &ColumnSchema,
    granularity: Granularity,
) -> Result<(Vec<Label>, Vec<f64>)> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();

    for value in table.column_values(column.position) {
        if DataTable::is_null_value(value) {
            continue;
        }
        let ts = parse_timestamp(value).ok_or_else(|| {
            DatalensError::invalid(format!(
                "Column '{}' contains a value that is not a date: '{}'",
                column.name, value
            ))
        })?;
        *counts.entry(granularity.bucket_index(&ts)).or_insert(0) += 1;
    }

    let (Some(&first), Some(&last)) = (counts.keys().next(), counts.keys().next_back()) else {
        return Ok((Vec::new(), Vec::new()));
    };

    Ok((first..=last)
        .map(|index| {
            let count = counts.get(&index).copied().unwrap_or(0);
            (Label::Text(granularity.bucket_label(index)), count as f64)
        })
        .unzip())
}
