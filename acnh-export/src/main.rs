//! One-shot exporter: `acnh.xlsx` -> `json/<sheet>.json`
//!
//! Reads the curated ACNH data workbook from the working directory and
//! rewrites one normalized JSON file per category sheet. Any malformed
//! cell aborts the run; fix the spreadsheet and rerun.

mod export;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Xlsx, open_workbook};

use export::types::catalog::CATEGORIES;

/// Workbook read from the working directory, as published
const WORKBOOK_PATH: &str = "acnh.xlsx";
/// Output directory for the per-sheet JSON files
const OUTPUT_DIR: &str = "json";

fn main() -> Result<()> {
    env_logger::init();

    let mut workbook: Xlsx<_> = open_workbook(WORKBOOK_PATH)
        .with_context(|| format!("failed to open workbook '{}'", WORKBOOK_PATH))?;

    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory '{}'", out_dir.display()))?;

    for spec in &CATEGORIES {
        export::dump_category(&mut workbook, spec, out_dir)?;
    }

    log::info!("all sheets exported");
    Ok(())
}
