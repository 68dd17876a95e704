//! Per-sheet orchestration
//!
//! Applies the category's column normalizers in place, then maps every row
//! through the category's field table to produce the ordered output records.

use std::io::{Read, Seek};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use calamine::Xlsx;
use serde_json::{Map, Value};

use super::excel::SheetTable;
use super::normalize::{clean, extract_png_url, process_time, title_case};
use super::types::{ALL_TIME_COLUMNS, CategorySpec, Extract, Hemisphere, MONTH_COLUMNS, MONTHS};
use super::writer;

/// Dump one category: sheet -> normalized records -> JSON file
pub fn dump_category<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    spec: &CategorySpec,
    out_dir: &Path,
) -> Result<()> {
    log::info!("dumping sheet '{}'", spec.sheet);
    let records = sheet_records(workbook, spec)?;
    let path = writer::write_records(out_dir, spec.sheet, &records)?;
    log::info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Load a category's sheet and build its full record list
pub fn sheet_records<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    spec: &CategorySpec,
) -> Result<Vec<Map<String, Value>>> {
    let mut table = SheetTable::from_workbook(workbook, spec.sheet)?;

    for column in spec.image_columns {
        table.normalize_column(column, |value| {
            Ok(match value {
                Value::String(s) => extract_png_url(s)
                    .map(|url| Value::String(url.to_string()))
                    .unwrap_or(Value::Null),
                _ => Value::Null,
            })
        })?;
    }

    for column in spec.time_columns {
        table.normalize_column(column, |value| match value {
            Value::Null => Ok(Value::Null),
            Value::String(s) => Ok(Value::String(process_time(s)?)),
            other => bail!("expected text, found {}", other),
        })?;
    }

    for column in spec.clean_columns {
        table.normalize_column(column, |value| match value {
            Value::String(s) => Ok(Value::String(clean(s))),
            other => bail!("expected text, found {}", other),
        })?;
    }

    table.normalize_column("Name", |value| match value {
        Value::String(s) => Ok(Value::String(title_case(s))),
        other => bail!("expected text, found {}", other),
    })?;

    let mut records = Vec::with_capacity(table.rows().len());
    for (idx, row) in table.rows().iter().enumerate() {
        let record = build_record(spec, row)
            .with_context(|| format!("sheet '{}', row {}", spec.sheet, idx + 2))?;
        records.push(record);
    }
    Ok(records)
}

/// Build one output record from a normalized row, in field-table order
pub fn build_record(spec: &CategorySpec, row: &Map<String, Value>) -> Result<Map<String, Value>> {
    let mut record = Map::new();
    for field in spec.fields {
        let value = apply_extract(&field.extract, row)
            .map_err(|msg| anyhow!("field '{}': {}", field.name, msg))?;
        record.insert(field.name.to_string(), value);
    }
    Ok(record)
}

/// Apply one extraction rule to a row
fn apply_extract(extract: &Extract, row: &Map<String, Value>) -> Result<Value, String> {
    match extract {
        Extract::Int(column) => int_cell(row, column).map(Value::from),

        Extract::Text(column) => text_cell(row, column).map(Value::String),

        Extract::TextOrNull(column) => Ok(match row.get(*column) {
            Some(Value::String(s)) => Value::String(s.clone()),
            _ => Value::Null,
        }),

        Extract::IntOrNa(column) => match row.get(*column) {
            Some(Value::String(s)) if s == "NA" => Ok(Value::Null),
            _ => int_cell(row, column).map(Value::from),
        },

        Extract::Equals(column, literal) => Ok(Value::Bool(matches!(
            row.get(*column),
            Some(Value::String(s)) if s == literal
        ))),

        Extract::SecondWord(column) => {
            let text = text_cell(row, column)?;
            let token = text
                .split_whitespace()
                .nth(1)
                .ok_or_else(|| format!("'{}' has no second token: '{}'", column, text))?;
            token
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| format!("'{}' token is not an integer: '{}'", column, token))
        }

        Extract::Months(hemisphere) => Ok(Value::Object(collapse_months(row, *hemisphere))),

        Extract::FirstTime => Ok(first_time(row).map(Value::String).unwrap_or(Value::Null)),
    }
}

/// Month-by-month availability for one hemisphere
///
/// Runs after time normalization, so "NA" cells have already collapsed to
/// the empty string and any populated window reads as present.
pub fn collapse_months(row: &Map<String, Value>, hemisphere: Hemisphere) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, month) in MONTHS.iter().zip(MONTH_COLUMNS.iter()) {
        let column = format!("{} {}", hemisphere.prefix(), month);
        let present = matches!(row.get(&column), Some(Value::String(s)) if !s.is_empty());
        map.insert((*key).to_string(), Value::Bool(present));
    }
    map
}

/// First populated time window, NH Jan..Dec then SH Jan..Dec
///
/// The sheet repeats one canonical window across every populated month, so
/// the first hit stands in for the whole record.
pub fn first_time(row: &Map<String, Value>) -> Option<String> {
    ALL_TIME_COLUMNS.iter().find_map(|column| match row.get(*column) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    })
}

fn int_cell(row: &Map<String, Value>, column: &str) -> Result<i64, String> {
    match row.get(column) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| format!("'{}' is not an integer", column)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("'{}' is not an integer: '{}'", column, s)),
        Some(other) => Err(format!("'{}' is not an integer: {}", column, other)),
        None => Err(format!("missing column '{}'", column)),
    }
}

fn text_cell(row: &Map<String, Value>, column: &str) -> Result<String, String> {
    match row.get(column) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("'{}' is not text: {}", column, other)),
        None => Err(format!("missing column '{}'", column)),
    }
}
