//! Load workbooks into [`Table`]s without letting failures escape.
//!
//! [`try_load_table`] reports what went wrong; [`load_table`] and
//! [`load_all`] turn every failure into a logged diagnostic and an absent
//! table so a batch of inputs never aborts half-way.

use crate::table::{Cell, Table};
use calamine::{open_workbook_auto, Data, DataType, Reader};
use fnv::FnvHashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file {0} not found")]
    NotFound(PathBuf),
    #[error("{path} has no worksheets")]
    NoWorksheet { path: PathBuf },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Bool(b) => Cell::Bool(*b),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) if dt.is_duration() => Cell::Text(data.to_string()),
        // unparseable ISO strings stay textual
        Data::DateTime(_) | Data::DateTimeIso(_) => data
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::Text(data.to_string())),
        other => Cell::Text(other.to_string()),
    }
}

/// Read the first worksheet of `path`; the first row becomes the header.
pub fn try_load_table(path: impl AsRef<Path>) -> Result<Table, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let read_err = |source: calamine::Error| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(read_err)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(read_err)?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|r| r.iter().map(|d| d.to_string()).collect())
        .unwrap_or_default();
    let data = rows.map(|r| r.iter().map(to_cell).collect()).collect();
    Ok(Table::new(headers, data))
}

/// Load one table, logging and returning `None` on any failure.
pub fn load_table(path: impl AsRef<Path>) -> Option<Table> {
    let path = path.as_ref();
    match try_load_table(path) {
        Ok(table) => {
            let (rows, cols) = table.shape();
            log::info!("loaded {} ({} rows x {} cols)", path.display(), rows, cols);
            Some(table)
        }
        Err(e @ LoadError::NotFound(_)) => {
            log::warn!("{e}");
            None
        }
        Err(e) => {
            log::error!("{e}");
            None
        }
    }
}

/// Load every `(name, path)` entry. All names appear in the result.
pub fn load_all<I, K, P>(entries: I) -> FnvHashMap<String, Option<Table>>
where
    I: IntoIterator<Item = (K, P)>,
    K: Into<String>,
    P: AsRef<Path>,
{
    entries
        .into_iter()
        .map(|(name, path)| (name.into(), load_table(path)))
        .collect()
}
