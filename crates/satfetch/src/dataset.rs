//! Typed access to the input dataset.
//!
//! Records are read from a CSV file with required columns `id`, `lat` and
//! `long`. Column presence is validated once, before any row is parsed, so
//! a malformed dataset fails before any network activity.

use std::path::Path;

use serde::Deserialize;

/// Columns every dataset must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["id", "lat", "long"];

/// A single geocoded record of the input dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// Opaque identifier, used as the image file stem
    pub id: String,
    /// Latitude of the record's location
    pub lat: f64,
    /// Longitude of the record's location
    #[serde(rename = "long")]
    pub lon: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Record id {id:?} on row {row} is not filesystem-safe")]
    UnsafeId { row: usize, id: String },
}

/// Load all records from the dataset at `path`.
///
/// Fails fast if any of [`REQUIRED_COLUMNS`] is absent from the header row,
/// enumerating every missing column, and rejects ids that cannot be used as
/// a file name.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<Record>().enumerate() {
        let record = row?;
        if !is_path_safe(&record.id) {
            // Row number as seen in the file: 1-based, after the header.
            return Err(DatasetError::UnsafeId {
                row: index + 2,
                id: record.id,
            });
        }
        records.push(record);
    }

    Ok(records)
}

/// An id is safe when it maps to a plain file name: ASCII alphanumerics,
/// `-`, `_` and `.`, non-empty and not starting with a dot.
fn is_path_safe(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("failed to write dataset");
        file
    }

    #[test]
    fn loads_records_and_ignores_extra_columns() {
        let file = write_dataset("id,lat,long,price\n42,51.5,-0.12,10000\nA-1,40.7,-74.0,20000\n");
        let records = load_records(file.path()).unwrap();
        assert_eq!(
            records,
            vec![
                Record {
                    id: "42".to_string(),
                    lat: 51.5,
                    lon: -0.12,
                },
                Record {
                    id: "A-1".to_string(),
                    lat: 40.7,
                    lon: -74.0,
                },
            ]
        );
    }

    #[test]
    fn missing_columns_are_enumerated() {
        let file = write_dataset("id,price\n42,10000\n");
        let err = load_records(file.path()).unwrap_err();
        match err {
            DatasetError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["lat".to_string(), "long".to_string()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn missing_lat_column_fails_before_rows_are_parsed() {
        // The second row would fail to parse as a Record, but column
        // validation must reject the dataset first.
        let file = write_dataset("id,long\n42,-0.12\nnot-a-number,oops\n");
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumns(_)));
    }

    #[test]
    fn unsafe_id_is_rejected_with_row_number() {
        let file = write_dataset("id,lat,long\nok_1,1.0,2.0\n../evil,3.0,4.0\n");
        let err = load_records(file.path()).unwrap_err();
        match err {
            DatasetError::UnsafeId { row, id } => {
                assert_eq!(row, 3);
                assert_eq!(id, "../evil");
            }
            other => panic!("expected UnsafeId, got {other:?}"),
        }
    }

    #[test]
    fn path_safety_rules() {
        assert!(is_path_safe("42"));
        assert!(is_path_safe("A-1_b.2"));
        assert!(!is_path_safe(""));
        assert!(!is_path_safe(".hidden"));
        assert!(!is_path_safe("a/b"));
        assert!(!is_path_safe("a\\b"));
        assert!(!is_path_safe("sp ace"));
    }
}
