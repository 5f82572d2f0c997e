//! CSV-backed lookup lists
//!
//! All lookup fields share one file. The header row names the columns and
//! every stored value occupies its own row, with the other columns empty:
//!
//! ```text
//! Customer,Transporter,Driver,TruckReg,TrailerReg,Product
//! Acme Farms,,,,,
//! ,,,,,Maize
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use delivery_domain::model::LookupList;
use delivery_domain::repository::LookupRepository;
use delivery_types::{Error, FieldName, Result};
use tempfile::NamedTempFile;
use tracing::debug;

/// In-memory copy of the lookup file
#[derive(Debug)]
struct LookupTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl LookupTable {
    fn empty() -> Self {
        Self {
            headers: FieldName::LOOKUP.iter().map(|f| f.as_str().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn column(&self, field: FieldName) -> Option<usize> {
        self.headers.iter().position(|h| h == field.as_str())
    }

    /// Column index for `field`, appending the column if the header lacks it
    fn column_or_insert(&mut self, field: FieldName) -> usize {
        if let Some(idx) = self.column(field) {
            return idx;
        }
        self.headers.push(field.as_str().to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    fn values(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |row| row.get(idx))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Lookup repository stored in a single CSV file.
///
/// The file is re-read on every call and rewritten on every insertion, so it
/// is the only state. Concurrent writers are not coordinated.
#[derive(Debug, Clone)]
pub struct FileLookupStore {
    path: PathBuf,
}

impl FileLookupStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/delivery_data.csv`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("delivery_data.csv"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<Option<LookupTable>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| Error::storage_unavailable(&self.path, e))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| Error::storage_unavailable(&self.path, e))?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            // A blank file is a fresh store; a blank header above data is not
            if reader.records().next().is_none() {
                return Ok(None);
            }
            return Err(Error::storage_unavailable(&self.path, "row 1: empty header"));
        }

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let row_num = row_idx + 2; // header is row 1
            let record = result
                .map_err(|e| Error::storage_unavailable(&self.path, format!("row {}: {}", row_num, e)))?;
            if record.iter().all(str::is_empty) {
                return Err(Error::storage_unavailable(
                    &self.path,
                    format!("row {} has no value", row_num),
                ));
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Some(LookupTable { headers, rows }))
    }

    /// Rewrite the whole file through a sibling temp file, so a failed
    /// write leaves the previous contents in place
    fn write_table(&self, table: &LookupTable) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| Error::storage_write(&self.path, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::storage_write(&self.path, e))?;
        {
            let mut writer = csv::Writer::from_writer(tmp.as_file_mut());
            writer
                .write_record(&table.headers)
                .map_err(|e| Error::storage_write(&self.path, e))?;
            for row in &table.rows {
                writer
                    .write_record(row)
                    .map_err(|e| Error::storage_write(&self.path, e))?;
            }
            writer.flush().map_err(|e| Error::storage_write(&self.path, e))?;
        }
        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::storage_write(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| Error::storage_write(&self.path, e.error))?;
        Ok(())
    }
}

impl LookupRepository for FileLookupStore {
    fn load_all(&self, field: FieldName) -> Result<Vec<String>> {
        let Some(table) = self.read_table()? else {
            return Ok(Vec::new());
        };
        let Some(idx) = table.column(field) else {
            return Ok(Vec::new());
        };
        let list = LookupList::from_values(field, table.values(idx));
        Ok(list.values().to_vec())
    }

    fn upsert_if_new(&self, field: FieldName, value: &str) -> Result<bool> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }

        let mut table = self.read_table()?.unwrap_or_else(LookupTable::empty);
        let idx = table.column_or_insert(field);
        if table.values(idx).any(|v| v == value) {
            return Ok(false);
        }

        let mut row = vec![String::new(); table.headers.len()];
        row[idx] = value.to_string();
        table.rows.push(row);
        self.write_table(&table)?;

        debug!(field = %field, value, path = %self.path.display(), "stored new lookup value");
        Ok(true)
    }
}
