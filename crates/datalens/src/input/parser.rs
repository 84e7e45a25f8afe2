//! CSV parser producing a [`DataTable`].

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{DatalensError, Result};
use super::source::DataTable;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            quote: b'"',
        }
    }
}

/// Parses CSV dataset files.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file into a data table.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<DataTable> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| DatalensError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.parse_bytes(&contents)
    }

    /// Parse bytes directly.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = Vec::new();
        for result in reader.records() {
            records.push(result?);
        }

        let headers: Vec<String> = if self.config.has_header {
            reader
                .headers()?
                .iter()
                .map(|s| s.trim_start_matches('\u{feff}').to_string())
                .collect()
        } else {
            let width = records.iter().map(|r| r.len()).max().unwrap_or(0);
            (0..width).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(DatalensError::EmptyData("No columns found".to_string()));
        }
        let headers = dedupe_headers(headers);

        let expected_cols = headers.len();
        let rows = records
            .iter()
            .map(|record| {
                let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                // Short rows are padded with missing values, long rows truncated
                row.resize(expected_cols, String::new());
                row
            })
            .collect();

        Ok(DataTable::new(headers, rows))
    }
}

/// Make column names unique: repeats of `v` become `v.1`, `v.2`, ...,
/// skipping any name already used elsewhere in the header.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let original: HashSet<String> = headers.iter().cloned().collect();
    let mut used: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut suffixes: HashMap<String, usize> = HashMap::new();

    headers
        .into_iter()
        .map(|name| {
            if used.insert(name.clone()) {
                return name;
            }
            let suffix = suffixes.entry(name.clone()).or_insert(0);
            loop {
                *suffix += 1;
                let candidate = format!("{}.{}", name, suffix);
                if !original.contains(&candidate) && used.insert(candidate.clone()) {
                    tracing::debug!(column = %name, renamed = %candidate, "duplicate column renamed");
                    return candidate;
                }
            }
        })
        .collect()
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"name,age,city\nAlice,30,NYC\nBob,25,LA";
        let table = parser.parse_bytes(data).unwrap();

        assert_eq!(table.headers, vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("Alice"));
        assert_eq!(table.get(1, 1), Some("25"));
    }

    #[test]
    fn test_ragged_rows_are_normalized() {
        let parser = Parser::new();
        let data = b"a,b,c\n1,2\n3,4,5,6\n";
        let table = parser.parse_bytes(data).unwrap();

        assert_eq!(table.rows[0], vec!["1", "2", ""]);
        assert_eq!(table.rows[1], vec!["3", "4", "5"]);
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let parser = Parser::new();
        let table = parser.parse_bytes(b"a,b\n").unwrap();

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let parser = Parser::new();
        let err = parser.parse_bytes(b"").unwrap_err();
        assert!(matches!(err, DatalensError::EmptyData(_)));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let parser = Parser::with_config(ParserConfig {
            delimiter: b';',
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"a;b\n1;2\n").unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.get(0, 1), Some("2"));
    }

    #[test]
    fn test_duplicate_headers_are_renamed() {
        let parser = Parser::new();
        let table = parser.parse_bytes(b"g,v,v\nx,1,10\nx,2,20\ny,3,30\n").unwrap();

        assert_eq!(table.headers, vec!["g", "v", "v.1"]);
        assert_eq!(table.column_values(2).collect::<Vec<_>>(), vec!["10", "20", "30"]);
    }

    #[test]
    fn test_duplicate_headers_skip_taken_suffixes() {
        let parser = Parser::new();
        let table = parser.parse_bytes(b"v,v,v.1,v\n1,2,3,4\n").unwrap();

        assert_eq!(table.headers, vec!["v", "v.2", "v.1", "v.3"]);
    }

    #[test]
    fn test_missing_file() {
        let parser = Parser::new();
        let err = parser.parse_file("/nonexistent/dataset.csv").unwrap_err();
        assert!(matches!(err, DatalensError::Io { .. }));
    }
}
