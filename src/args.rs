use clap::Parser;
use std::path::PathBuf;

use crate::config::{ImporterConfig, DEFAULT_EMAIL_COLUMN, DEFAULT_SOURCE_PATH};

#[derive(Parser, Debug)]
#[command(
    name = "domain-tally",
    about = "Count customer records per email domain in a CSV file",
    version,
    long_about = None
)]
pub struct Args {
    /// CSV file to import
    #[arg(short, long, default_value = DEFAULT_SOURCE_PATH)]
    pub source: PathBuf,

    /// Header name of the email column
    #[arg(short, long, default_value = DEFAULT_EMAIL_COLUMN)]
    pub column: String,

    /// Number of domains to display
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn importer_config(&self) -> ImporterConfig {
        ImporterConfig::default()
            .with_source_path(&self.source)
            .with_email_column(self.column.as_str())
    }
}
