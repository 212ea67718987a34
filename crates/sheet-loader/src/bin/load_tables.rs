use anyhow::{anyhow, Result};
use std::path::PathBuf;

// Workbooks the wind-turbine study reads when no arguments are given.
const DEFAULT_ENTRIES: [(&str, &str); 6] = [
    ("data_2017", "data/raw/Onsite-MetMast-SCADA-data-2017.xlsx"),
    ("scada_2017", "data/raw/Wind-Turbine-SCADA-signals-2017_0.xlsx"),
    ("failures_2017", "data/raw/opendata-wind-failures-2017.xlsx"),
    ("data_2016", "data/raw/Onsite-MetMast-SCADA-data-2016.xlsx"),
    ("scada_2016", "data/raw/Wind-Turbine-SCADA-signals-2016.xlsx"),
    ("failures_2016", "data/raw/Historical-Failure-Logbook-2016.xlsx"),
];

/// Parse a `name=path` argument.
fn parse_entry(arg: &str) -> Result<(String, PathBuf)> {
    let (name, path) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected name=path, got {arg:?}"))?;
    let name = name.trim();
    if name.is_empty() || path.trim().is_empty() {
        return Err(anyhow!("expected name=path, got {arg:?}"));
    }
    Ok((name.to_string(), PathBuf::from(path.trim())))
}

fn entries_from_args(args: &[String]) -> Result<Vec<(String, PathBuf)>> {
    if args.is_empty() {
        return Ok(DEFAULT_ENTRIES
            .iter()
            .map(|(n, p)| (n.to_string(), PathBuf::from(p)))
            .collect());
    }
    args.iter().map(|a| parse_entry(a)).collect()
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let entries = entries_from_args(&args)?;
    let mut names: Vec<String> = entries.iter().map(|(n, _)| n.clone()).collect();
    names.sort();
    names.dedup();

    let tables = sheet_loader::load_all(entries);
    for name in &names {
        match tables.get(name).and_then(Option::as_ref) {
            Some(t) => {
                let (rows, cols) = t.shape();
                log::info!("{name}: {rows} rows x {cols} cols");
            }
            None => log::info!("{name}: absent"),
        }
    }
    Ok(())
}
