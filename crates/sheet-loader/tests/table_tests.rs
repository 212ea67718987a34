// Host-side tests for the in-memory table.

use chrono::NaiveDate;
use sheet_loader::{Cell, Table};

fn sample() -> Table {
    Table::new(
        vec!["Timestamp".into(), "".into(), "Power".into()],
        vec![
            vec![Cell::Text("2017-01-01".into()), Cell::Int(1), Cell::Float(2.5)],
            vec![Cell::Text("2017-01-02".into())],
        ],
    )
}

#[test]
fn blank_headers_get_positional_names() {
    let t = sample();
    assert_eq!(t.headers(), ["Timestamp", "Unnamed: 1", "Power"]);
}

#[test]
fn repeated_headers_get_numbered_suffixes() {
    let t = Table::new(
        vec!["Timestamp".into(), "a".into(), "a".into(), "a.1".into(), "a".into()],
        vec![vec![
            Cell::Empty,
            Cell::Int(1),
            Cell::Int(2),
            Cell::Int(3),
            Cell::Int(4),
        ]],
    );
    assert_eq!(t.headers(), ["Timestamp", "a", "a.1", "a.1.1", "a.2"]);
    assert_eq!(t.column("a").unwrap(), vec![&Cell::Int(1)]);
    assert_eq!(t.column("a.1").unwrap(), vec![&Cell::Int(2)]);
    assert_eq!(t.column("a.2").unwrap(), vec![&Cell::Int(4)]);
}

#[test]
fn short_rows_are_padded() {
    let t = sample();
    assert_eq!(t.shape(), (2, 3));
    assert!(t.rows()[1][2].is_empty());
}

#[test]
fn wide_rows_extend_headers() {
    let t = Table::new(vec!["a".into()], vec![vec![Cell::Int(1), Cell::Int(2)]]);
    assert_eq!(t.headers(), ["a", "Unnamed: 1"]);
    assert_eq!(t.shape(), (1, 2));
}

#[test]
fn column_lookup() {
    let t = sample();
    let power = t.column("Power").unwrap();
    assert_eq!(power, vec![&Cell::Float(2.5), &Cell::Empty]);
    assert!(t.column("Wind").is_none());
}

#[test]
fn numeric_view_of_cells() {
    assert_eq!(Cell::Int(3).as_f64(), Some(3.0));
    assert_eq!(Cell::Float(0.5).as_f64(), Some(0.5));
    assert_eq!(Cell::Text("3".into()).as_f64(), None);
    assert_eq!(Cell::Bool(true).to_string(), "true");
    assert_eq!(Cell::Empty.to_string(), "");
}

#[test]
fn datetime_cells() {
    let dt = NaiveDate::from_ymd_opt(2017, 1, 1)
        .unwrap()
        .and_hms_opt(0, 10, 0)
        .unwrap();
    let cell = Cell::DateTime(dt);
    assert_eq!(cell.as_datetime(), Some(dt));
    assert_eq!(cell.as_f64(), None);
    assert_eq!(cell.to_string(), "2017-01-01 00:10:00");
    assert_eq!(Cell::Float(42736.0).as_datetime(), None);
}

#[test]
fn default_table_is_empty() {
    let t = Table::default();
    assert!(t.is_empty());
    assert_eq!(t.shape(), (0, 0));
}
