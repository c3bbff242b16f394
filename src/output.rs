use crate::error::ExportError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};
use tempfile::NamedTempFile;

fn write_err(path: &str, source: std::io::Error) -> ExportError {
    ExportError::OutputWrite {
        path: path.to_string(),
        source,
    }
}

/// Write `value` as pretty JSON (2-space indent, UTF-8), atomically.
///
/// The document is serialized to a temp file in the destination directory
/// and renamed over the target, so a failure mid-run leaves the previous
/// snapshot intact.
pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), ExportError> {
    let s = serde_json::to_string_pretty(value)?;
    let dir = Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_err(path, e))?;
    tmp.write_all(s.as_bytes()).map_err(|e| write_err(path, e))?;
    tmp.persist(path).map_err(|e| write_err(path, e.error))?;
    Ok(())
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
