// table.rs - Typed, header-on-create delimited tables.
//
// A table is one CSV file whose first line is the header. Loads never fail
// hard: a missing or malformed file yields an empty result plus a diagnostic,
// and individual rows that do not decode are skipped. Saves either rewrite the
// whole file (header included) or append rows after the existing content,
// writing the header only when the file is new or empty. Appended rows follow
// the column order of the header already on disk.
//
// There is no transactional guarantee: a crash mid-save can leave a partially
// written file.

use std::fs::{self, File, OpenOptions};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// A row type that can be stored in a [`Table`].
///
/// `COLUMNS` must list the header names in the same order the type's fields
/// serialize.
pub trait Record: Serialize + DeserializeOwned {
    /// Header names, in serialization order.
    const COLUMNS: &'static [&'static str];
}

/// How [`Table::save`] treats existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Replace the file, header included.
    Overwrite,
    /// Add rows after the existing content. The header is written only if
    /// the file did not exist or was empty.
    Append,
}

/// A delimited table of `T` rows backed by a single file.
#[derive(Debug, Clone)]
pub struct Table<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Table<T> {
    /// Bind a table to a file path. Nothing is touched on disk.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _record: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load every decodable row, in file order.
    ///
    /// A missing or malformed table is logged and treated as empty.
    pub fn load(&self) -> Vec<T> {
        match self.try_load() {
            Ok(rows) => rows,
            Err(StoreError::Missing { path }) => {
                tracing::info!(table = %path.display(), "table does not exist yet, treating as empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(table = %self.path.display(), "could not load table: {}", e);
                Vec::new()
            }
        }
    }

    /// Load every decodable row, surfacing table-level failures.
    ///
    /// Rows that fail to decode are still skipped (with a warning) rather
    /// than failing the whole load.
    pub fn try_load(&self) -> Result<Vec<T>, StoreError> {
        if !self.exists() {
            return Err(StoreError::Missing {
                path: self.path.clone(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|source| self.csv_error(source))?;

        let headers = reader
            .headers()
            .map_err(|source| self.csv_error(source))?
            .clone();

        // An empty file has no header yet; nothing to read.
        if headers.is_empty() {
            return Ok(Vec::new());
        }

        self.check_columns(&headers)?;

        let mut rows = Vec::new();
        for (index, result) in reader.deserialize::<T>().enumerate() {
            match result {
                Ok(row) => rows.push(row),
                Err(e) => {
                    // Line 1 is the header.
                    tracing::warn!(
                        table = %self.path.display(),
                        line = index + 2,
                        "skipping malformed row: {}",
                        e
                    );
                }
            }
        }

        tracing::debug!(table = %self.path.display(), rows = rows.len(), "loaded table");
        Ok(rows)
    }

    /// Write rows using the given mode.
    pub fn save(&self, records: &[T], mode: SaveMode) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let existing = match mode {
            SaveMode::Overwrite => None,
            SaveMode::Append => self.existing_header()?,
        };
        let write_header = existing.is_none();
        let layout = match &existing {
            Some(headers) => self.column_layout(headers)?,
            None => None,
        };

        let file = match mode {
            SaveMode::Overwrite => File::create(&self.path),
            SaveMode::Append => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path),
        }
        .map_err(|source| self.io_error(source))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            writer
                .write_record(T::COLUMNS)
                .map_err(|source| self.csv_error(source))?;
        }
        for record in records {
            match &layout {
                None => writer.serialize(record),
                Some(layout) => {
                    let fields = self.fields_of(record)?;
                    let row: Vec<&str> = layout
                        .iter()
                        .map(|index| index.and_then(|i| fields.get(i)).unwrap_or(""))
                        .collect();
                    writer.write_record(&row)
                }
            }
            .map_err(|source| self.csv_error(source))?;
        }
        writer.flush().map_err(|source| self.io_error(source))?;

        tracing::debug!(
            table = %self.path.display(),
            rows = records.len(),
            ?mode,
            "saved table"
        );
        Ok(())
    }

    /// Create the table with just its header if it does not exist yet.
    /// Returns `true` when a new file was written.
    pub fn ensure_exists(&self) -> Result<bool, StoreError> {
        if self.exists() {
            return Ok(false);
        }
        self.save(&[], SaveMode::Overwrite)?;
        Ok(true)
    }

    fn has_content(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.len() > 0)
            .unwrap_or(false)
    }

    /// Header of a non-empty table on disk, `None` when a header still has
    /// to be written.
    fn existing_header(&self) -> Result<Option<csv::StringRecord>, StoreError> {
        if !self.has_content() {
            return Ok(None);
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|source| self.csv_error(source))?;
        let headers = reader
            .headers()
            .map_err(|source| self.csv_error(source))?
            .clone();
        Ok(if headers.is_empty() { None } else { Some(headers) })
    }

    fn check_columns(&self, headers: &csv::StringRecord) -> Result<(), StoreError> {
        let missing: Vec<String> = T::COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .map(|column| column.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Schema {
                path: self.path.clone(),
                missing,
            })
        }
    }

    /// For each header column, the index of the matching field in `COLUMNS`.
    /// `None` when the header is already in `COLUMNS` order.
    fn column_layout(
        &self,
        headers: &csv::StringRecord,
    ) -> Result<Option<Vec<Option<usize>>>, StoreError> {
        if headers.iter().eq(T::COLUMNS.iter().copied()) {
            return Ok(None);
        }
        self.check_columns(headers)?;
        tracing::debug!(
            table = %self.path.display(),
            "header order differs from record order, reordering appended rows"
        );
        Ok(Some(
            headers
                .iter()
                .map(|h| T::COLUMNS.iter().position(|column| *column == h))
                .collect(),
        ))
    }

    /// Serialized fields of one record, in `COLUMNS` order.
    fn fields_of(&self, record: &T) -> Result<csv::StringRecord, StoreError> {
        let mut buffer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        buffer
            .serialize(record)
            .map_err(|source| self.csv_error(source))?;
        let bytes = buffer
            .into_inner()
            .map_err(|e| self.io_error(e.into_error()))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes.as_slice());
        match reader.records().next() {
            Some(row) => row.map_err(|source| self.csv_error(source)),
            None => Ok(csv::StringRecord::new()),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, source: csv::Error) -> StoreError {
        StoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}
