use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort an import. No partial results are returned.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid reader")]
    InvalidReader,
    #[error("input has no header line")]
    EmptyInput,
    #[error("missing column name '{column}' in the first line of the file")]
    MissingColumn { column: String },
    #[error("record on line {line}: wrong number of fields")]
    FieldCount { line: u64, expected: u64, found: u64 },
    #[error("unable to open file: {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("csv error: {0}")]
    Csv(csv::Error),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = err.kind()
        {
            return ImportError::FieldCount {
                line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
                expected: *expected_len,
                found: *len,
            };
        }
        ImportError::Csv(err)
    }
}

/// Failures scoped to a single data row. The row is skipped and the import
/// carries on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("email field not found at line {line}")]
    MissingField { line: u64 },
    #[error("invalid email format")]
    InvalidEmail,
}

pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unequal_lengths_maps_to_field_count() {
        let data = "a,b,c\n1,2,3\n4,5\n";
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(data.as_bytes());
        let err = reader
            .records()
            .find_map(|record| record.err())
            .expect("mismatched record");

        match ImportError::from(err) {
            ImportError::FieldCount {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn messages_name_the_problem() {
        let missing = ImportError::MissingColumn {
            column: "email".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "missing column name 'email' in the first line of the file"
        );
        assert_eq!(
            LineError::MissingField { line: 7 }.to_string(),
            "email field not found at line 7"
        );
        assert_eq!(ImportError::InvalidReader.to_string(), "invalid reader");
    }
}
