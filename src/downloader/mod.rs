//! Sequential form downloader
//!
//! Each target is handled in order: skip if the file is already on disk,
//! otherwise fetch once and write the body verbatim. A 404 is an ordinary
//! outcome; any other failure ends the run.

use crate::catalog::{self, legacy};
use crate::config::Config;
use crate::errors::FormsError;
use crate::format::human_size;
use crate::metadata;
use crate::models::{Candidate, DownloadOutcome, DownloadSummary, DownloadTarget};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, info};

pub mod http;

pub use http::HttpFormSource;

/// Result of asking the remote server for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Found(Vec<u8>),
    NotFound,
}

/// Anything that can hand back the bytes of a form by filename.
#[async_trait]
pub trait FormSource: Send + Sync {
    async fn fetch(&self, filename: &str) -> Result<FetchResult, FormsError>;
}

pub struct Downloader<S> {
    source: S,
}

impl<S: FormSource> Downloader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Handle a single target. No truncated-file cleanup is attempted if the
    /// write fails part way.
    pub async fn download_one(&self, target: &DownloadTarget) -> Result<DownloadOutcome, FormsError> {
        let dest = target.path();
        if dest.exists() {
            debug!("{} already present at {}", target.filename, dest.display());
            return Ok(DownloadOutcome::Skipped);
        }

        tokio::fs::create_dir_all(&target.directory).await?;

        match self.source.fetch(&target.filename).await? {
            FetchResult::Found(content) => {
                tokio::fs::write(&dest, &content).await?;
                Ok(DownloadOutcome::Downloaded(content.len()))
            }
            FetchResult::NotFound => Ok(DownloadOutcome::NotFound),
        }
    }

    /// Download every target in order and print a status line for each.
    pub async fn run(&self, targets: &[DownloadTarget]) -> Result<DownloadSummary, FormsError> {
        let mut summary = DownloadSummary::default();

        for target in targets {
            let outcome = self.download_one(target).await?;
            println!("  {:<50} {}", target.filename, status_label(outcome));
            summary.record(outcome);
        }

        println!();
        println!("{}", summary);
        info!(
            "Finished: {} downloaded, {} skipped, {} not found",
            summary.downloaded, summary.skipped, summary.not_found
        );
        Ok(summary)
    }
}

fn status_label(outcome: DownloadOutcome) -> String {
    match outcome {
        DownloadOutcome::Skipped => "skipped (exists)".to_string(),
        DownloadOutcome::Downloaded(size) => format!("OK ({})", human_size(size)),
        DownloadOutcome::NotFound => "404".to_string(),
    }
}

/// Bucket each candidate under `forms_dir/<year-or-unknown>/`.
pub fn metadata_targets(candidates: &[Candidate], forms_dir: &Path) -> Vec<DownloadTarget> {
    candidates
        .iter()
        .map(|candidate| DownloadTarget {
            filename: candidate.filename.clone(),
            directory: forms_dir.join(candidate.year.to_string()),
        })
        .collect()
}

/// Place every filename flat under `forms_dir/<year>/`.
pub fn legacy_targets(filenames: &[String], forms_dir: &Path, year: u16) -> Vec<DownloadTarget> {
    let directory = forms_dir.join(year.to_string());
    filenames
        .iter()
        .map(|filename| DownloadTarget {
            filename: filename.clone(),
            directory: directory.clone(),
        })
        .collect()
}

/// Metadata-driven mode: load the catalog, filter it and download.
pub async fn download_from_metadata<S: FormSource>(
    source: S,
    config: &Config,
    years: &[u16],
) -> Result<DownloadSummary> {
    let records = metadata::load_metadata(&config.metadata_path())?;
    let candidates = catalog::candidates_from_metadata(&records, years);
    let targets = metadata_targets(&candidates, &config.forms_dir);

    let scope = if years.is_empty() {
        "all years".to_string()
    } else {
        years.iter().map(u16::to_string).collect::<Vec<_>>().join(", ")
    };
    println!(
        "Downloading {} IRS forms ({}) into {}/",
        targets.len(),
        scope,
        config.forms_dir.display()
    );
    println!();

    Ok(Downloader::new(source).run(&targets).await?)
}

/// Deprecated literal-list mode: filter the built-in list and download it
/// flat into one year directory.
pub async fn download_legacy<S: FormSource>(
    source: S,
    config: &Config,
    year: u16,
) -> Result<DownloadSummary> {
    let filenames = catalog::candidates_from_list(legacy::LEGACY_FORMS);
    let targets = legacy_targets(&filenames, &config.forms_dir, year);

    println!(
        "Downloading {} IRS forms for tax year {} into {}/",
        targets.len(),
        year,
        config.forms_dir.join(year.to_string()).display()
    );
    println!();

    Ok(Downloader::new(source).run(&targets).await?)
}
