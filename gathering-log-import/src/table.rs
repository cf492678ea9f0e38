//! Reading raw gathering-log CSV exports into rows of cells.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Source file not found: {0}")]
    SourceUnavailable(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

/// Read all rows after the header from a CSV export.
///
/// A missing file is [`TableError::SourceUnavailable`]. Rows may differ in
/// width; records that fail to decode are skipped with a warning.
pub fn read_table(path: &Path) -> Result<Vec<Vec<String>>, TableError> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(TableError::SourceUnavailable(path.to_path_buf()));
        }
        Err(e) => {
            return Err(TableError::Csv {
                path: path.to_path_buf(),
                source: e.into(),
            });
        }
    };
    Ok(read_rows(file))
}

/// Read all rows after the header from CSV content.
pub fn read_rows<R: Read>(reader: R) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(e) => log::warn!("Skipping malformed CSV row: {e}"),
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_skipped_and_widths_may_vary() {
        let csv = "Level,Item,Region,Area,Location,Time\n\
                   1-5,,,,,\n\
                   FALSE,Copper Ore,La Noscea,Lower La Noscea,Bronze Lake\n";
        let rows = read_rows(csv.as_bytes());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "1-5");
        assert_eq!(rows[1].len(), 5);
        assert_eq!(rows[1][1], "Copper Ore");
    }

    #[test]
    fn quoted_cells_keep_commas() {
        let csv = "h\nFALSE,\"Ore, Raw\",Thanalan,\"Western Thanalan\",\"Hammerlea, North\",\n";
        let rows = read_rows(csv.as_bytes());
        assert_eq!(rows[0][1], "Ore, Raw");
        assert_eq!(rows[0][4], "Hammerlea, North");
        assert_eq!(rows[0][5], "");
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = read_table(&tmp.path().join("Mining and Quarrying.csv"));
        assert!(matches!(result, Err(TableError::SourceUnavailable(_))));
    }
}
