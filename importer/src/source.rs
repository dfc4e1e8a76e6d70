//! CSV reading for the importer.
//!
//! Columns are located by header name. Cells are kept raw: an empty cell is
//! reported as `None`, anything else (even pure whitespace) is passed on.
//! Rows made only of delimiters are still rows; truly empty lines are
//! dropped by the csv reader itself.

use std::io::Read;

use anyhow::{Context, Result};

/// One data row, before any defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRow {
    pub name: Option<String>,
    pub region: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Default)]
struct Columns {
    name: Option<usize>,
    region: Option<usize>,
    created_at: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut columns = Self::default();

        for (i, header) in headers.iter().enumerate() {
            match header.trim() {
                "name" => columns.name = Some(i),
                "region" => columns.region = Some(i),
                "created_at" => columns.created_at = Some(i),
                _ => {},
            }
        }

        columns
    }
}

pub fn read_rows<R: Read>(reader: R) -> Result<Vec<ImportRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().context("reading csv headers")?.clone();
    let columns = Columns::from_headers(&headers);
    if columns.name.is_none() {
        tracing::warn!("csv has no name column, every row will be skipped");
    }

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading csv record {}", line + 1))?;

        let cell = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| record.get(i))
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        rows.push(ImportRow {
            name: cell(columns.name),
            region: cell(columns.region),
            created_at: cell(columns.created_at),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_columns_by_header_name() {
        let csv = "created_at,region,name\n1700000000,EU,Iron Wolves\n";

        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(
            rows,
            vec![ImportRow {
                name: Some("Iron Wolves".into()),
                region: Some("EU".into()),
                created_at: Some("1700000000".into()),
            }]
        );
    }

    #[test]
    fn empty_cells_and_short_rows_are_none() {
        let csv = "name,region,created_at\nA,,\nB\n";

        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].region, None);
        assert_eq!(rows[0].created_at, None);
        assert_eq!(rows[1].name.as_deref(), Some("B"));
        assert_eq!(rows[1].region, None);
    }

    #[test]
    fn delimiter_only_rows_are_kept() {
        let csv = "name,region,created_at\nA,EU,\n,,\n";

        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ImportRow::default());
    }

    #[test]
    fn whitespace_cells_are_kept() {
        let csv = "name,region\nA,  \n";

        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].region.as_deref(), Some("  "));
    }

    #[test]
    fn missing_optional_columns() {
        let csv = "name\nSolo\n";

        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(
            rows,
            vec![ImportRow {
                name: Some("Solo".into()),
                ..Default::default()
            }]
        );
    }
}
