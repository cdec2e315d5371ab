use csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::domain::email_domain;
use crate::error::{ImportError, LineError, Result};
use crate::stats::{DomainCounts, EmailGroup, ImportReport, SkippedLine};
use crate::ImporterConfig;

/// Builds a CSV reader with the settings every import relies on: the header
/// is read as an ordinary record and rows must match its field count.
pub fn csv_reader<R: Read>(rdr: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(rdr)
}

/// Groups customer records by the domain of their email address.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    config: ImporterConfig,
}

impl Importer {
    pub fn new(config: ImporterConfig) -> Self {
        Self { config }
    }

    /// Reads the header and every data row from `reader`, returning the
    /// domains sorted by name.
    pub fn import<R: Read>(&self, reader: Option<&mut Reader<R>>) -> Result<Vec<EmailGroup>> {
        self.import_report(reader).map(|report| report.groups)
    }

    pub fn import_from_read<R: Read>(&self, rdr: R) -> Result<Vec<EmailGroup>> {
        let mut reader = csv_reader(rdr);
        self.import(Some(&mut reader))
    }

    /// Like [`Importer::import`], also reporting how many rows were read
    /// and skipped.
    pub fn import_report<R: Read>(&self, reader: Option<&mut Reader<R>>) -> Result<ImportReport> {
        let start_time = Instant::now();
        let reader = reader.ok_or(ImportError::InvalidReader)?;
        info!(
            action = "start",
            component = "import",
            email_column = %self.config.email_column,
            "Starting customer import"
        );

        let email_index = self.resolve_header(reader)?;

        let mut counts = DomainCounts::new();
        let mut record = StringRecord::new();
        let mut rows_read = 0;
        let mut skipped = Vec::new();

        while reader.read_record(&mut record)? {
            rows_read += 1;
            let line = record_line(&record);

            if let Err(e) = process_line(&record, email_index, &mut counts, line) {
                warn!(
                    action = "skip",
                    component = "line_processor",
                    line_number = line,
                    error = %e,
                    "skip line {}: {}",
                    line,
                    e
                );
                skipped.push(SkippedLine { line, error: e });
            }
        }

        let groups = counts.into_sorted();

        info!(
            action = "complete",
            component = "import",
            unique_domains = groups.len(),
            rows_read,
            rows_skipped = skipped.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Customer import completed"
        );

        Ok(ImportReport {
            groups,
            rows_read,
            skipped,
        })
    }

    /// Imports the configured source file.
    pub fn import_file(&self) -> Result<Vec<EmailGroup>> {
        self.import_file_report().map(|report| report.groups)
    }

    pub fn import_file_report(&self) -> Result<ImportReport> {
        let path = &self.config.source_path;
        info!(action = "open", component = "source_file", path = ?path, "Opening customer file");

        let file = File::open(path).map_err(|source| ImportError::Open {
            path: path.clone(),
            source,
        })?;
        // csv::Reader buffers internally; the file closes when the reader drops
        let mut reader = csv_reader(file);
        self.import_report(Some(&mut reader))
    }

    fn resolve_header<R: Read>(&self, reader: &mut Reader<R>) -> Result<usize> {
        let mut header = StringRecord::new();
        if !reader.read_record(&mut header)? {
            return Err(ImportError::EmptyInput);
        }

        let column = &self.config.email_column;
        match header.iter().position(|name| name == column) {
            Some(index) => {
                info!(
                    action = "resolve",
                    component = "header",
                    column = %column,
                    index,
                    "Email column located"
                );
                Ok(index)
            }
            None => {
                let err = ImportError::MissingColumn {
                    column: column.clone(),
                };
                error!(action = "resolve", component = "header", error = %err, "Header is missing the email column");
                Err(err)
            }
        }
    }
}

/// Line on which `record` starts, counting the header as line 1. A quoted
/// field spanning several lines moves later records further down.
pub fn record_line(record: &StringRecord) -> u64 {
    // Set by `Reader::read_record` for every record it yields
    record.position().map(|pos| pos.line()).unwrap_or_default()
}

/// Counts the domain of one data row's email field.
pub fn process_line(
    record: &StringRecord,
    email_index: usize,
    counts: &mut DomainCounts,
    line: u64,
) -> std::result::Result<(), LineError> {
    let email = record
        .get(email_index)
        .ok_or(LineError::MissingField { line })?;
    let domain = email_domain(email).ok_or(LineError::InvalidEmail)?;
    counts.record(domain);
    Ok(())
}
