use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_PATH: &str = "customers.csv";
pub const DEFAULT_EMAIL_COLUMN: &str = "email";

/// Settings fixed for the lifetime of an [`Importer`](crate::Importer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImporterConfig {
    pub source_path: PathBuf,
    pub email_column: String,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            email_column: DEFAULT_EMAIL_COLUMN.to_string(),
        }
    }
}

impl ImporterConfig {
    pub fn with_source_path(mut self, path: impl AsRef<Path>) -> Self {
        self.source_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_email_column(mut self, column: impl Into<String>) -> Self {
        self.email_column = column.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ImporterConfig::default();
        assert_eq!(config.source_path, PathBuf::from("customers.csv"));
        assert_eq!(config.email_column, "email");
    }

    #[test]
    fn overrides_keep_other_fields() {
        let config = ImporterConfig::default().with_email_column("MAIL");
        assert_eq!(config.email_column, "MAIL");
        assert_eq!(config.source_path, PathBuf::from(DEFAULT_SOURCE_PATH));

        let config = config.with_source_path("/tmp/other.csv");
        assert_eq!(config.source_path, PathBuf::from("/tmp/other.csv"));
        assert_eq!(config.email_column, "MAIL");
    }
}
