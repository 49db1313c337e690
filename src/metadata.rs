//! Reading and writing the scraped `metadata.json` catalog

use crate::errors::FormsError;
use crate::models::FormRecord;
use std::path::Path;
use tracing::{debug, info};

/// Load the catalog written by the scraper.
pub fn load_metadata(path: &Path) -> Result<Vec<FormRecord>, FormsError> {
    if !path.exists() {
        return Err(FormsError::MetadataMissing(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path)?;
    let records: Vec<FormRecord> =
        serde_json::from_str(&raw).map_err(|source| FormsError::MetadataParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded {} metadata records from {}", records.len(), path.display());
    Ok(records)
}

/// Write the catalog as an indented JSON array, replacing any previous file.
pub fn save_metadata(path: &Path, records: &[FormRecord]) -> Result<(), FormsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;

    info!("Saved {} metadata records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_metadata_reports_hint() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("metadata.json");

        let err = load_metadata(&path).unwrap_err();
        assert!(matches!(err, FormsError::MetadataMissing(_)));
        assert!(err.to_string().contains("irsforms scrape"));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("metadata.json");
        let records = vec![
            FormRecord::new("f1040.pdf", "2025 Form 1040"),
            FormRecord::new("fw9.pdf", "2024 Form W-9"),
        ];

        save_metadata(&path, &records).unwrap();
        assert_eq!(load_metadata(&path).unwrap(), records);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {"));
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("metadata.json");

        save_metadata(&path, &[FormRecord::new("f1040.pdf", "2025 Form 1040")]).unwrap();
        save_metadata(&path, &[]).unwrap();
        assert!(load_metadata(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("metadata.json");
        std::fs::write(&path, r#"[{"filename": "f1040.pdf"}]"#).unwrap();

        let err = load_metadata(&path).unwrap_err();
        assert!(matches!(err, FormsError::MetadataParse { .. }));
    }
}
