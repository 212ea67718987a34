//! In-memory table read from the first worksheet of a workbook.

use chrono::NaiveDateTime;
use fnv::FnvHashMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    DateTime(NaiveDateTime),
    Text(String),
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(x) => write!(f, "{x}"),
            Cell::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

fn dedupe_headers(headers: &mut [String]) {
    let mut seen: FnvHashMap<String, usize> = FnvHashMap::default();
    for h in headers.iter_mut() {
        let mut count = seen.get(h.as_str()).copied().unwrap_or(0);
        if count > 0 {
            let base = std::mem::take(h);
            let mut renamed = format!("{base}.{count}");
            while seen.contains_key(&renamed) {
                count += 1;
                renamed = format!("{base}.{count}");
            }
            seen.insert(base, count + 1);
            *h = renamed;
        }
        seen.insert(h.clone(), 1);
    }
}

/// Header row plus data rows. Every row has one cell per header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table, naming blank headers `Unnamed: <index>`, suffixing
    /// repeated headers `.1`, `.2`, ... and padding short rows with empty
    /// cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).fold(headers.len(), usize::max);
        let mut headers = headers;
        headers.resize(width, String::new());
        for (i, h) in headers.iter_mut().enumerate() {
            if h.trim().is_empty() {
                *h = format!("Unnamed: {i}");
            }
        }
        dedupe_headers(&mut headers);
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, Cell::Empty);
                r
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// (data rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|r| &r[idx]).collect())
    }
}
