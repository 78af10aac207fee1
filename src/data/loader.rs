use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{Dataset, Row};

/// Name of the CSV column holding row labels.
const LABEL_COLUMN: &str = "label";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `{ "title": "...", "rows": [{ "label": "...", "entries": {...} }] }`
/// * `.csv`  – a `label` column plus one numeric column per category
pub fn load_file(path: &Path) -> Result<Dataset> {
    let dataset = match extension(path).as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    dataset
        .validate()
        .with_context(|| format!("validating {}", path.display()))?;
    Ok(dataset)
}

/// Write a dataset in the format implied by the file extension.
pub fn save_file(dataset: &Dataset, path: &Path) -> Result<()> {
    match extension(path).as_str() {
        "json" => save_json(dataset, path),
        "csv" => save_csv(dataset, path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("writing {}", path.display()))
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON")
}

fn save_json(dataset: &Dataset, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(dataset).context("serializing JSON")?;
    std::fs::write(path, text).context("writing JSON file")
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// CSV layout:  header row `label,<category>,<category>,...`.
/// Each record is one row; an empty cell means the row has no entry for that
/// category.  The dataset title is the file stem.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let label_idx = headers
        .iter()
        .position(|h| h == LABEL_COLUMN)
        .context("CSV missing 'label' column")?;

    let mut seen = BTreeSet::new();
    for key in &headers {
        if !seen.insert(key.as_str()) {
            bail!("CSV column '{key}' appears more than once");
        }
    }

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let label = record.get(label_idx).unwrap_or("").to_string();
        let mut entries = BTreeMap::new();
        for (col_idx, cell) in record.iter().enumerate() {
            if col_idx == label_idx {
                continue;
            }
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            let key = &headers[col_idx];
            let value = cell.parse::<f64>().with_context(|| {
                format!("Row {row_no}, column '{key}': '{cell}' is not a number")
            })?;
            entries.insert(key.clone(), value);
        }

        rows.push(Row { label, entries });
    }

    let title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    Ok(Dataset { title, rows })
}

fn save_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let categories = dataset.categories();
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;

    let header = std::iter::once(LABEL_COLUMN).chain(categories.iter().map(String::as_str));
    writer.write_record(header).context("writing CSV header")?;

    for row in &dataset.rows {
        let cells = std::iter::once(row.label.clone()).chain(categories.iter().map(|c| {
            row.entries
                .get(c)
                .map(|v| v.to_string())
                .unwrap_or_default()
        }));
        writer
            .write_record(cells)
            .with_context(|| format!("writing row '{}'", row.label))?;
    }

    writer.flush().context("flushing CSV")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::example::example_dataset;

    #[test]
    fn json_round_trip_keeps_example() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("investments.json");
        save_file(example_dataset(), &path).unwrap();
        let loaded = load_file(&path).unwrap();
        assert_eq!(&loaded, example_dataset());
    }

    #[test]
    fn csv_takes_title_from_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Project Investments.csv");
        save_file(example_dataset(), &path).unwrap();
        let loaded = load_file(&path).unwrap();
        assert_eq!(&loaded, example_dataset());
    }

    #[test]
    fn csv_empty_cells_are_absent_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.csv");
        std::fs::write(&path, "label,A,B\nr1,1.5,\nr2,,2\n").unwrap();
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.title, "sparse");
        assert_eq!(ds.rows[0], Row::new("r1", [("A", 1.5)]));
        assert_eq!(ds.rows[1], Row::new("r2", [("B", 2.0)]));
    }

    #[test]
    fn csv_rejects_non_numeric_cell() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "label,A\nr1,lots\n").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("'lots' is not a number"));
    }

    #[test]
    fn csv_requires_label_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nolabel.csv");
        std::fs::write(&path, "name,A\nr1,1\n").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing 'label' column"));
    }

    #[test]
    fn csv_rejects_duplicate_category_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dup.csv");
        std::fs::write(&path, "label,A, A\nr1,1,2\n").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("CSV column 'A' appears more than once"));
    }

    #[test]
    fn json_with_empty_key_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty_key.json");
        std::fs::write(
            &path,
            r#"{"title":"t","rows":[{"label":"r","entries":{"":1.0}}]}"#,
        )
        .unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("empty key"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("data.parquet")).unwrap_err();
        assert!(format!("{err:#}").contains("Unsupported file extension: .parquet"));
    }
}
