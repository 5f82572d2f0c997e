//! Append-only CSV history of finalized delivery records

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use delivery_domain::model::{DeliveryRecord, LogEntry, LOG_HEADER, LOG_TIMESTAMP_FORMAT};
use delivery_domain::repository::RecordLogRepository;
use delivery_types::{Error, Result};
use tracing::debug;

/// History log at a fixed path; the header row is written with the first entry
#[derive(Debug, Clone)]
pub struct FileRecordLog {
    path: PathBuf,
}

impl FileRecordLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log at `<data_dir>/delivery_log.csv`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("delivery_log.csv"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn needs_header(&self) -> bool {
        fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true)
    }

    /// Whether a non-empty log lacks a final newline (hand-edited files)
    fn missing_final_newline(&self) -> io::Result<bool> {
        let mut file = File::open(&self.path)?;
        if file.metadata()?.len() == 0 {
            return Ok(false);
        }
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}

impl RecordLogRepository for FileRecordLog {
    fn append(&self, record: &DeliveryRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::storage_write(&self.path, e))?;
        }
        let write_header = self.needs_header();
        let terminate_last_line = !write_header
            && self
                .missing_final_newline()
                .map_err(|e| Error::storage_write(&self.path, e))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::storage_write(&self.path, e))?;
        if terminate_last_line {
            file.write_all(b"\n")
                .map_err(|e| Error::storage_write(&self.path, e))?;
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            writer
                .write_record(LOG_HEADER)
                .map_err(|e| Error::storage_write(&self.path, e))?;
        }
        let entry = LogEntry::from(record);
        writer
            .write_record(entry.to_row())
            .map_err(|e| Error::storage_write(&self.path, e))?;
        writer.flush().map_err(|e| Error::storage_write(&self.path, e))?;

        debug!(customer = %entry.customer, path = %self.path.display(), "appended delivery to log");
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<LogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| Error::storage_unavailable(&self.path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| Error::storage_unavailable(&self.path, e))?
            .clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        if !headers.iter().eq(LOG_HEADER) {
            return Err(Error::storage_unavailable(
                &self.path,
                format!("unexpected header: {}", headers.iter().collect::<Vec<_>>().join(",")),
            ));
        }

        let mut entries = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let row_num = row_idx + 2;
            let record = result
                .map_err(|e| Error::storage_unavailable(&self.path, format!("row {}: {}", row_num, e)))?;
            let field = |i: usize| record.get(i).unwrap_or("").to_string();

            let date = NaiveDateTime::parse_from_str(&field(0), LOG_TIMESTAMP_FORMAT).map_err(|_| {
                Error::storage_unavailable(
                    &self.path,
                    format!("row {}: invalid date '{}'", row_num, field(0)),
                )
            })?;

            entries.push(LogEntry {
                date,
                customer: field(1),
                address: field(2),
                product: field(3),
                quantity: field(4),
                unit: field(5),
            });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use delivery_domain::model::{FieldSet, FormLayout};
    use delivery_types::FieldName;
    use tempfile::tempdir;

    fn record(customer: &str, hour: u32) -> DeliveryRecord {
        let fields: FieldSet = FieldName::ALL
            .into_iter()
            .map(|f| (f, f.as_str().to_lowercase()))
            .collect::<FieldSet>()
            .with(FieldName::Customer, customer);
        let at = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(hour, 15, 30)
            .unwrap();
        DeliveryRecord::finalize(fields, &FormLayout::default(), at).unwrap()
    }

    #[test]
    fn test_missing_log_is_empty() {
        let dir = tempdir().unwrap();
        let log = FileRecordLog::in_dir(dir.path());
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_first_append_writes_header() {
        let dir = tempdir().unwrap();
        let log = FileRecordLog::in_dir(dir.path());
        log.append(&record("Acme Farms", 9)).unwrap();
        log.append(&record("Beta Co", 10)).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            content,
            "Date,Customer,Address,Product,Quantity,Type\n\
             2024-02-29 09:15:30,Acme Farms,address,product,quantity,type\n\
             2024-02-29 10:15:30,Beta Co,address,product,quantity,type\n"
        );
    }

    #[test]
    fn test_read_back_entries() {
        let dir = tempdir().unwrap();
        let log = FileRecordLog::in_dir(dir.path());
        let first = record("Acme Farms, Macheke", 9);
        log.append(&first).unwrap();

        let entries = log.read_all().unwrap();
        assert_eq!(entries, vec![LogEntry::from(&first)]);
        assert_eq!(entries[0].customer, "Acme Farms, Macheke");
    }

    #[test]
    fn test_append_after_unterminated_last_line() {
        let dir = tempdir().unwrap();
        let log = FileRecordLog::in_dir(dir.path());
        fs::write(
            log.path(),
            "Date,Customer,Address,Product,Quantity,Type\n2024-02-28 07:00:00,Acme,Rd,Maize,10,Ton",
        )
        .unwrap();

        log.append(&record("Beta Co", 9)).unwrap();

        let entries = log.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].unit, "Ton");
        assert_eq!(entries[1].customer, "Beta Co");
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let dir = tempdir().unwrap();
        let log = FileRecordLog::in_dir(dir.path());
        fs::write(
            log.path(),
            "Date,Customer,Address,Product,Quantity,Type\n29/02/2024,Acme,Rd,Maize,10,Ton\n",
        )
        .unwrap();

        let err = log.read_all().unwrap_err();
        assert!(matches!(err, Error::StorageUnavailable { .. }));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_unexpected_header_is_rejected() {
        let dir = tempdir().unwrap();
        let log = FileRecordLog::in_dir(dir.path());
        fs::write(log.path(), "When,Who\n2024-01-01 00:00:00,Acme\n").unwrap();
        assert!(matches!(log.read_all(), Err(Error::StorageUnavailable { .. })));
    }
}
