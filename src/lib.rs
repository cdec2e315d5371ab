pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod importer;
pub mod output;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use config::ImporterConfig;
pub use error::{ImportError, LineError};
pub use importer::{csv_reader, Importer};
pub use stats::{DomainCounts, EmailGroup, ImportReport, SkippedLine};
