//! CSV output writing
//!
//! Renders the final record set to a single CSV file, written once at the
//! end of the run. The file name pattern accepts a `{now}` placeholder
//! that is replaced with a run timestamp.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::RestaurantRecord;

/// CSV writer bound to an output directory
pub struct CsvWriter {
    output_dir: PathBuf,
}

impl CsvWriter {
    /// Create a writer, creating the output directory if needed
    pub fn new(output_dir: &Path) -> Result<Self> {
        fs::create_dir_all(output_dir).context("Failed to create output directory")?;

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Resolve the output path for a file name pattern
    ///
    /// `{now}` in the pattern is replaced with `now` formatted as
    /// `%Y%m%d%H%M%S`.
    #[must_use]
    pub fn resolve_path(&self, pattern: &str, now: DateTime<Local>) -> PathBuf {
        let stamp = now.format("%Y%m%d%H%M%S").to_string();
        let file_name = pattern.replace("{now}", &stamp);
        self.output_dir.join(file_name)
    }

    /// Write all records as one CSV file and return its path
    ///
    /// One row per record, header row from the record field names. Absent
    /// optional fields serialize as empty cells, distinct from zero.
    pub fn write(&self, records: &[RestaurantRecord], pattern: &str) -> Result<PathBuf> {
        let path = self.resolve_path(pattern, Local::now());

        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;

        for record in records {
            writer
                .serialize(record)
                .with_context(|| format!("Failed to serialize record {}", record.sequence_id))?;
        }

        writer.flush().context("Failed to flush output file")?;

        tracing::info!(path = %path.display(), rows = records.len(), "Wrote output file");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record(id: u64) -> RestaurantRecord {
        RestaurantRecord {
            sequence_id: id,
            url: format!("https://tabelog.com/tokyo/{id}/"),
            name: Some(format!("店 {id}")),
            genre: Some("寿司".to_string()),
            score: Some(3.58),
            budget_lunch: None,
            budget_dinner: Some("￥10,000～￥14,999".to_string()),
            review_count: Some(12),
            bookmark_count: None,
            http_status: 200,
            error: None,
        }
    }

    #[test]
    fn test_resolve_path_substitutes_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();

        let now = Local.with_ymd_and_hms(2025, 2, 17, 20, 0, 5).unwrap();
        let path = writer.resolve_path("restaurant_data_{now}.csv", now);

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "restaurant_data_20250217200005.csv"
        );
    }

    #[test]
    fn test_resolve_path_without_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();

        let now = Local.with_ymd_and_hms(2025, 2, 17, 20, 0, 5).unwrap();
        let path = writer.resolve_path("fixed.csv", now);
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "fixed.csv");
    }

    #[test]
    fn test_write_records_with_absent_fields() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();

        let records = vec![sample_record(0), sample_record(1)];
        let path = writer.write(&records, "out.csv").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();

        let header = lines.next().unwrap();
        assert_eq!(
            header,
            "sequence_id,url,name,genre,score,budget_lunch,budget_dinner,review_count,bookmark_count,http_status,error"
        );

        let first = lines.next().unwrap();
        // budget_lunch and bookmark_count are absent: empty cells, not zeros
        assert!(first.starts_with("0,https://tabelog.com/tokyo/0/,店 0,寿司,3.58,,"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_write_empty_batch_produces_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();

        let path = writer.write(&[], "empty.csv").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        // serde-driven headers are only emitted with the first record
        assert!(content.is_empty() || content.lines().count() <= 1);
    }

    #[test]
    fn test_new_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        assert!(CsvWriter::new(&nested).is_ok());
        assert!(nested.is_dir());
    }
}
