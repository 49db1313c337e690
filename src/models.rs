use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One row of the scraped IRS catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub filename: String,
    pub description: String,
}

impl FormRecord {
    pub fn new(filename: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            description: description.into(),
        }
    }
}

/// Revision year parsed from a form description.
///
/// `Unknown` orders before every known year so that undated forms sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevisionYear {
    Unknown,
    Known(u16),
}

impl RevisionYear {
    pub fn as_known(&self) -> Option<u16> {
        match self {
            RevisionYear::Known(year) => Some(*year),
            RevisionYear::Unknown => None,
        }
    }
}

impl fmt::Display for RevisionYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionYear::Known(year) => write!(f, "{}", year),
            RevisionYear::Unknown => f.write_str("unknown"),
        }
    }
}

/// A form selected for download together with its revision year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub filename: String,
    pub year: RevisionYear,
}

/// Where a single form should land on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub filename: String,
    pub directory: PathBuf,
}

impl DownloadTarget {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Skipped,
    Downloaded(usize),
    NotFound,
}

/// Running counters for one downloader run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub not_found: usize,
}

impl DownloadSummary {
    pub fn record(&mut self, outcome: DownloadOutcome) {
        match outcome {
            DownloadOutcome::Skipped => self.skipped += 1,
            DownloadOutcome::Downloaded(_) => self.downloaded += 1,
            DownloadOutcome::NotFound => self.not_found += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.not_found
    }
}

impl fmt::Display for DownloadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done: {} downloaded, {} already present, {} not found.",
            self.downloaded, self.skipped, self.not_found
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sorts_first() {
        let mut years = vec![
            RevisionYear::Known(2025),
            RevisionYear::Unknown,
            RevisionYear::Known(1999),
        ];
        years.sort();
        assert_eq!(
            years,
            vec![
                RevisionYear::Unknown,
                RevisionYear::Known(1999),
                RevisionYear::Known(2025)
            ]
        );
    }

    #[test]
    fn test_year_directory_names() {
        assert_eq!(RevisionYear::Known(2024).to_string(), "2024");
        assert_eq!(RevisionYear::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_summary_counters() {
        let mut summary = DownloadSummary::default();
        summary.record(DownloadOutcome::Downloaded(10));
        summary.record(DownloadOutcome::Skipped);
        summary.record(DownloadOutcome::NotFound);
        summary.record(DownloadOutcome::Skipped);
        assert_eq!(summary.downloaded, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.total(), 4);
        assert_eq!(
            summary.to_string(),
            "Done: 1 downloaded, 2 already present, 1 not found."
        );
    }
}
