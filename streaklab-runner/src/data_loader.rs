//! Return-table loading for the runner.
//!
//! Reads a comma-separated table whose first column is the trading date and
//! whose remaining columns are company identifiers holding daily percentage
//! returns. Empty cells and the usual missing-value tokens become `None`.
//! A daily return below -100% is impossible and is rejected.
//!
//! Synthetic tables are a developer-only mode (benchmarks, demos). Results
//! computed on synthetic data are tagged.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use streaklab_core::{CompanyColumn, ReturnTable, TableError};

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input has no header row")]
    EmptyHeader,

    #[error("header has a date column but no company columns")]
    NoCompanies,

    #[error("line {line}, company '{company}': cannot parse return '{value}'")]
    InvalidValue {
        line: usize,
        company: String,
        value: String,
    },

    #[error("line {line}, company '{company}': return {value}% is below -100%")]
    OutOfRange {
        line: usize,
        company: String,
        value: f64,
    },

    #[error("table error: {0}")]
    Table(#[from] TableError),
}

/// Where a table came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DataSource {
    Csv { path: String },
    Synthetic { seed: u64 },
}

/// A loaded table with provenance.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: ReturnTable,
    pub source: DataSource,
    /// BLAKE3 over dates, companies and every cell.
    pub dataset_hash: String,
}

impl LoadedTable {
    pub fn is_synthetic(&self) -> bool {
        matches!(self.source, DataSource::Synthetic { .. })
    }
}

/// Smallest daily return a price can produce.
pub const MIN_DAILY_RETURN_PCT: f64 = -100.0;

/// Tokens treated as a missing return, compared case-insensitively.
/// Same set pandas `read_csv` uses by default.
const MISSING_TOKENS: [&str; 15] = [
    "", "nan", "-nan", "na", "n/a", "#n/a", "#n/a n/a", "#na", "<na>", "null", "none",
    "-1.#ind", "1.#ind", "-1.#qnan", "1.#qnan",
];

/// Load a CSV file from disk.
pub fn load_table(path: &Path) -> Result<LoadedTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = read_table(file)?;
    let dataset_hash = compute_dataset_hash(&table);

    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        companies = table.company_count(),
        missing_rate = table.missing_rate(),
        "loaded return table"
    );

    Ok(LoadedTable {
        table,
        source: DataSource::Csv {
            path: path.display().to_string(),
        },
        dataset_hash,
    })
}

/// Parse a return table from any CSV reader.
pub fn read_table<R: Read>(reader: R) -> Result<ReturnTable, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::EmptyHeader);
    }
    if headers.len() < 2 {
        return Err(LoadError::NoCompanies);
    }

    let companies: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
    let mut dates = Vec::new();
    let mut returns: Vec<Vec<Option<f64>>> = vec![Vec::new(); companies.len()];

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let line = i + 2;
        dates.push(record.get(0).unwrap_or_default().to_string());

        for (col, company) in companies.iter().enumerate() {
            let raw = record.get(col + 1).unwrap_or_default();
            let cell = parse_cell(raw).ok_or_else(|| LoadError::InvalidValue {
                line,
                company: company.clone(),
                value: raw.to_string(),
            })?;
            if let Some(value) = cell.filter(|v| *v < MIN_DAILY_RETURN_PCT) {
                return Err(LoadError::OutOfRange {
                    line,
                    company: company.clone(),
                    value,
                });
            }
            returns[col].push(cell);
        }
    }

    let columns = companies
        .into_iter()
        .zip(returns)
        .map(|(company, returns)| CompanyColumn { company, returns })
        .collect();

    Ok(ReturnTable::new(dates, columns)?)
}

/// `Some(None)` for a missing token, `Some(Some(v))` for a number, `None`
/// for anything unparseable.
fn parse_cell(raw: &str) -> Option<Option<f64>> {
    if MISSING_TOKENS.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        return Some(None);
    }
    raw.parse::<f64>().ok().map(Some)
}

/// Write a table back out as CSV (date column first).
pub fn write_table_csv(table: &ReturnTable, path: &Path) -> anyhow::Result<()> {
    use anyhow::Context;

    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;

    let mut header = vec!["Date".to_string()];
    header.extend(table.companies().map(str::to_string));
    wtr.write_record(&header)?;

    for (row, date) in table.dates().iter().enumerate() {
        let mut record = vec![date.clone()];
        for column in table.columns() {
            record.push(match column.returns[row] {
                Some(v) => format!("{v}"),
                None => String::new(),
            });
        }
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Compute a deterministic BLAKE3 hash over the whole table.
///
/// Missing cells hash as a single marker byte so that a gap and a zero
/// return produce different hashes.
pub fn compute_dataset_hash(table: &ReturnTable) -> String {
    let mut hasher = blake3::Hasher::new();

    for date in table.dates() {
        hasher.update(date.as_bytes());
        hasher.update(&[0]);
    }
    for column in table.columns() {
        hasher.update(column.company.as_bytes());
        hasher.update(&[0]);
        for cell in &column.returns {
            match cell {
                Some(v) => {
                    hasher.update(&[1]);
                    hasher.update(&v.to_le_bytes());
                }
                None => {
                    hasher.update(&[2]);
                }
            }
        }
    }

    hasher.finalize().to_hex().to_string()
}

/// Generate a deterministic synthetic return table.
///
/// Company identifiers look like six-digit KOSPI codes. Dates are weekdays
/// starting 2024-01-02. Roughly 2% of cells are missing.
pub fn synthetic_table(companies: usize, days: usize, seed: u64) -> Result<LoadedTable, LoadError> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);

    let mut dates = Vec::with_capacity(days);
    let mut current = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap_or_default();
    while dates.len() < days {
        let weekday = current.weekday();
        if weekday != chrono::Weekday::Sat && weekday != chrono::Weekday::Sun {
            dates.push(current.format("%Y-%m-%d").to_string());
        }
        current += chrono::Duration::days(1);
    }

    let columns: Vec<CompanyColumn> = (0..companies)
        .map(|i| {
            let returns = (0..days)
                .map(|_| {
                    if rng.gen_bool(0.02) {
                        None
                    } else {
                        let r: f64 = rng.gen_range(-3.0..3.0);
                        Some((r * 100.0).round() / 100.0)
                    }
                })
                .collect();
            CompanyColumn {
                company: format!("{:06}", (i + 1) * 10),
                returns,
            }
        })
        .collect();

    let table = ReturnTable::new(dates, columns)?;
    let dataset_hash = compute_dataset_hash(&table);

    tracing::warn!(companies, days, seed, "generated synthetic return table");

    Ok(LoadedTable {
        table,
        source: DataSource::Synthetic { seed },
        dataset_hash,
    })
}
