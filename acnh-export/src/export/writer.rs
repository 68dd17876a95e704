//! JSON output files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Write one category's records as a pretty-printed JSON array
///
/// The file is named after the lowercased sheet name ("Sea Creatures" ->
/// "sea creatures.json") and fully overwritten on every run.
pub fn write_records(
    out_dir: &Path,
    sheet: &str,
    records: &[Map<String, Value>],
) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.json", sheet.to_lowercase()));
    let json = serde_json::to_string_pretty(records)
        .with_context(|| format!("failed to serialize records for sheet '{}'", sheet))?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_records_pretty_json() {
        let dir = std::env::temp_dir().join("acnh-export-writer-test");
        fs::create_dir_all(&dir).unwrap();

        let record = json!({"name": "Coelacanth", "sell": 15000})
            .as_object()
            .unwrap()
            .clone();
        let path = write_records(&dir, "Sea Creatures", &[record]).unwrap();

        assert!(path.ends_with("sea creatures.json"));
        let written = fs::read_to_string(&path).unwrap();
        // 2-space indented array of objects
        assert!(written.starts_with("[\n  {\n    "));
        let parsed: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["name"], json!("Coelacanth"));

        fs::remove_file(&path).ok();
    }
}
