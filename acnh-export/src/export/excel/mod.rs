//! Workbook loading
//!
//! Loads a named sheet into an in-memory table keyed by its header row,
//! with calamine cells coerced to JSON values.

use std::io::{Read, Seek};

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, Xlsx};
use serde_json::{Map, Value, json};

/// One sheet loaded into memory, rows keyed by the header row
pub struct SheetTable {
    headers: Vec<String>,
    rows: Vec<Map<String, Value>>,
}

impl SheetTable {
    /// Load a named sheet; the first row defines the column names
    pub fn from_workbook<RS: Read + Seek>(workbook: &mut Xlsx<RS>, sheet: &str) -> Result<Self> {
        let range = workbook
            .worksheet_range(sheet)
            .with_context(|| format!("failed to read sheet '{}'", sheet))?;

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .with_context(|| format!("sheet '{}' has no header row", sheet))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|c| match c {
                Data::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .collect();

        let mut rows = Vec::new();
        for cells in sheet_rows {
            // Skip trailing/blank rows
            if cells.iter().all(|c| matches!(c, Data::Empty)) {
                continue;
            }
            let mut row = Map::new();
            for (idx, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                let cell = cells.get(idx).unwrap_or(&Data::Empty);
                row.insert(header.clone(), cell_to_value(cell));
            }
            rows.push(row);
        }

        Ok(SheetTable { headers, rows })
    }

    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.rows
    }

    /// Rewrite one column in place, row by row
    ///
    /// Row numbers in error context are 1-based spreadsheet rows (the
    /// header is row 1).
    pub fn normalize_column<F>(&mut self, column: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        if !self.headers.iter().any(|h| h == column) {
            bail!("sheet has no column '{}'", column);
        }
        for (idx, row) in self.rows.iter_mut().enumerate() {
            let current = row.get(column).cloned().unwrap_or(Value::Null);
            let normalized = f(&current)
                .with_context(|| format!("column '{}', row {}", column, idx + 2))?;
            row.insert(column.to_string(), normalized);
        }
        Ok(())
    }
}

/// Convert a calamine cell to a JSON value
pub fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) if s.is_empty() => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => json!(*i),
        Data::Float(f) => {
            // Excel stores every number as a float; whole values are ints here
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                json!(*f as i64)
            } else {
                json!(*f)
            }
        }
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => Value::String(format!("{}", dt)),
        Data::DateTimeIso(s) => Value::String(s.clone()),
        Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_value_coercions() {
        assert_eq!(cell_to_value(&Data::Empty), Value::Null);
        assert_eq!(cell_to_value(&Data::String(String::new())), Value::Null);
        assert_eq!(cell_to_value(&Data::String("NA".into())), json!("NA"));
        assert_eq!(cell_to_value(&Data::Int(3)), json!(3));
        assert_eq!(cell_to_value(&Data::Float(42.0)), json!(42));
        assert_eq!(cell_to_value(&Data::Float(2.5)), json!(2.5));
    }
}
