//! The report table: an ordered header row plus string cells, read from and
//! written back to delimited text.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("report not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to access report: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed report: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to replace {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Report rows with their column order preserved. Blank cells are empty
/// strings.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Read-only view of one report row.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    dataset: &'a Dataset,
    index: usize,
}

impl<'a> Row<'a> {
    /// Raw value of a column, or `None` when the report has no such column.
    pub fn field(&self, name: &str) -> Option<&'a str> {
        let column = self.dataset.column(name)?;
        Some(self.dataset.cell(self.index, column))
    }
}

impl Dataset {
    /// Build from headers and rows; short rows are padded with blanks.
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        for row in &mut rows {
            if row.len() < headers.len() {
                row.resize(headers.len(), String::new());
            }
        }
        Self { headers, rows }
    }

    pub fn read(path: impl AsRef<Path>, delimiter: u8) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DatasetError::Missing(path.to_path_buf()));
        }
        Self::from_reader(File::open(path)?, delimiter)
    }

    pub fn from_reader<R: Read>(input: R, delimiter: u8) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_reader(input);
        let headers = reader.headers()?.iter().map(String::from).collect();
        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(String::from).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()?;
        Ok(Self::new(headers, rows))
    }

    /// Write to `path` through a temporary file in the same directory, so the
    /// previous contents survive any failure.
    pub fn write(&self, path: impl AsRef<Path>, delimiter: u8) -> Result<(), DatasetError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        self.to_writer(&mut staged, delimiter)?;
        staged.as_file().sync_all()?;
        // Keep the mode of the file being replaced; temp files start as 0600.
        if let Ok(existing) = std::fs::metadata(path) {
            staged.as_file().set_permissions(existing.permissions())?;
        }
        staged
            .persist(path)
            .map_err(|err| DatasetError::Persist {
                path: path.to_path_buf(),
                source: err.error,
            })?;
        Ok(())
    }

    pub fn to_writer<W: Write>(&self, output: W, delimiter: u8) -> Result<(), DatasetError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(output);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Position of `name`, appending a blank column if it does not exist.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(column) = self.column(name) {
            return column;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    pub fn row(&self, index: usize) -> Row<'_> {
        Row {
            dataset: self,
            index,
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows[row][column].as_str()
    }

    pub fn set(&mut self, row: usize, column: usize, value: impl Into<String>) {
        self.rows[row][column] = value.into();
    }
}
