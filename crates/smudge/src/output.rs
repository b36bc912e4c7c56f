//! Writers for generated tables and analysis reports.

use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, SmudgeError};
use crate::input::DataTable;
use crate::report::QualityReport;

/// Write a table as delimited text, reusing the input delimiter.
pub fn write_csv(table: &DataTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SmudgeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(table.delimiter)
        .from_writer(file);

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush().map_err(|e| SmudgeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Write a table as a JSON array of objects. Null cells become JSON null.
pub fn write_json(table: &DataTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let objects: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let mut map = Map::new();
            for (header, cell) in table.headers.iter().zip(row.iter()) {
                let value = if DataTable::is_null_value(cell) {
                    Value::Null
                } else {
                    Value::String(cell.clone())
                };
                map.insert(header.clone(), value);
            }
            Value::Object(map)
        })
        .collect();

    let file = File::create(path).map_err(|e| SmudgeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::to_writer_pretty(file, &Value::Array(objects))?;

    Ok(())
}

/// Write the plain-text analysis report alongside the generated data.
pub fn write_report(report: &QualityReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|e| SmudgeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    file.write_all(report.to_text().as_bytes())
        .map_err(|e| SmudgeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Parser;

    fn make_table() -> DataTable {
        DataTable::new(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec!["1".to_string(), "alice".to_string()],
                vec!["2".to_string(), String::new()],
            ],
            b',',
        )
    }

    #[test]
    fn test_csv_round_trip() {
        let table = make_table();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&table, &path).unwrap();

        let parser = Parser::new();
        let (read_back, _) = parser.parse_file(&path).unwrap();
        assert_eq!(read_back.headers, table.headers);
        assert_eq!(read_back.rows, table.rows);
    }

    #[test]
    fn test_json_nulls() {
        let table = make_table();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_json(&table, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[1]["name"], serde_json::Value::Null);
        assert_eq!(value[0]["name"], "alice");
    }
}
