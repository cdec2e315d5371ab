use std::collections::HashMap;

use crate::error::LineError;

/// One output row: a domain and the number of records using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailGroup {
    pub domain: String,
    pub count: usize,
}

impl EmailGroup {
    pub fn new(domain: impl Into<String>, count: usize) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}

/// Running per-domain tally for a single import.
#[derive(Debug, Default)]
pub struct DomainCounts {
    counts: HashMap<String, usize>,
}

impl DomainCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of an already normalized domain.
    pub fn record(&mut self, domain: String) {
        *self.counts.entry(domain).or_insert(0) += 1;
    }

    /// Consumes the tally, ordering groups by domain (byte order).
    pub fn into_sorted(self) -> Vec<EmailGroup> {
        let mut groups: Vec<EmailGroup> = self
            .counts
            .into_iter()
            .map(|(domain, count)| EmailGroup { domain, count })
            .collect();
        // Keys are unique, so an unstable sort is still deterministic
        groups.sort_unstable_by(|a, b| a.domain.cmp(&b.domain));
        groups
    }
}

/// A data row left out of the tally, with the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: u64,
    pub error: LineError,
}

#[derive(Debug)]
pub struct ImportReport {
    pub groups: Vec<EmailGroup>,
    pub rows_read: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ImportReport {
    pub fn rows_skipped(&self) -> usize {
        self.skipped.len()
    }

    pub fn total_counted(&self) -> usize {
        self.groups.iter().map(|group| group.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_domain_regardless_of_insertion_order() {
        let mut forward = DomainCounts::new();
        let mut backward = DomainCounts::new();
        let domains = ["woothemes.com", "cnet.com", "google.fr", "github.io"];

        for domain in domains {
            forward.record(domain.to_string());
        }
        for domain in domains.iter().rev() {
            backward.record(domain.to_string());
        }

        let forward = forward.into_sorted();
        assert_eq!(forward, backward.into_sorted());
        let names: Vec<&str> = forward.iter().map(|g| g.domain.as_str()).collect();
        assert_eq!(names, ["cnet.com", "github.io", "google.fr", "woothemes.com"]);
    }

    #[test]
    fn counts_repeats() {
        let mut counts = DomainCounts::new();
        counts.record("google.fr".to_string());
        counts.record("google.fr".to_string());
        counts.record("cnet.com".to_string());

        assert_eq!(
            counts.into_sorted(),
            vec![EmailGroup::new("cnet.com", 1), EmailGroup::new("google.fr", 2)]
        );
    }

    #[test]
    fn byte_order_puts_digits_before_letters() {
        let mut counts = DomainCounts::new();
        counts.record("b.com".to_string());
        counts.record("360.cn".to_string());
        counts.record("a.com".to_string());

        let names: Vec<String> = counts.into_sorted().into_iter().map(|g| g.domain).collect();
        assert_eq!(names, ["360.cn", "a.com", "b.com"]);
    }

    #[test]
    fn report_totals_follow_groups_and_skips() {
        let report = ImportReport {
            groups: vec![EmailGroup::new("cnet.com", 1), EmailGroup::new("google.fr", 3)],
            rows_read: 5,
            skipped: vec![SkippedLine {
                line: 4,
                error: LineError::InvalidEmail,
            }],
        };
        assert_eq!(report.total_counted(), 4);
        assert_eq!(report.rows_skipped(), 1);
        assert_eq!(report.total_counted() + report.rows_skipped(), report.rows_read);
    }

    #[test]
    fn empty_tally_yields_no_groups() {
        assert!(DomainCounts::new().into_sorted().is_empty());
    }
}
