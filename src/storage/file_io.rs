//! CSV file I/O helpers
//!
//! Rows are appended in place; nothing is ever rewritten. The header row is
//! written once by [`super::init`] and skipped on read.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

/// Read every data row of a CSV file, checking the header first
///
/// Rows are returned in file order. Blank lines are skipped. The first row
/// that fails to decode aborts the read.
pub fn read_csv<T, P>(path: P, expected_header: &[&str]) -> Result<Vec<T>, BudgetError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| BudgetError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()?;
    let found: Vec<&str> = headers.iter().collect();
    if found != expected_header {
        return Err(BudgetError::parse(
            1,
            format!(
                "unexpected header '{}', expected '{}'",
                found.join(","),
                expected_header.join(",")
            ),
        ));
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Write a single header row, replacing any existing content
pub fn write_header<P: AsRef<Path>>(path: P, header: &[&str]) -> Result<(), BudgetError> {
    let path = path.as_ref();

    let file = File::create(path)
        .map_err(|e| BudgetError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = WriterBuilder::new().from_writer(file);
    writer.write_record(header)?;
    writer
        .flush()
        .map_err(|e| BudgetError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Append one serialized row to the end of a CSV file
///
/// If the file does not end with a newline (for example after a hand edit),
/// one is written first so the new row starts on its own line.
pub fn append_csv<T, P>(path: P, row: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            BudgetError::Io(format!("Failed to open {} for writing: {}", path.display(), e))
        })?;

    if !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.serialize(row)?;
    writer
        .flush()
        .map_err(|e| BudgetError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Check whether a file is empty or its last byte is a newline
fn ends_with_newline(file: &mut File) -> Result<bool, BudgetError> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }

    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
