//! Typed daily-return table.
//!
//! A `ReturnTable` is a date axis plus one return column per company, all of
//! the same length. Cells are `Option<f64>`: `None` marks a missing return.
//! Non-finite values are normalized to `None` on construction.
//!
//! Per-company analysis works on a `CompanySeries`, built under an explicit
//! `MissingPolicy`. With `Drop` the timeline is compressed: index `i + 1` in
//! the series is the next *retained* day, which may be several table rows
//! later.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while assembling a table.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("column '{company}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        company: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate company column '{0}'")]
    DuplicateCompany(String),
}

/// How missing returns are handled when deriving a `CompanySeries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Remove missing values; neighbours become adjacent.
    #[default]
    Drop,
    /// Linearly fill interior gaps. Leading and trailing gaps are dropped.
    Interpolate,
}

/// One company's return column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyColumn {
    pub company: String,
    pub returns: Vec<Option<f64>>,
}

/// Immutable return table: ordered date labels and company columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnTable {
    dates: Vec<String>,
    columns: Vec<CompanyColumn>,
}

impl ReturnTable {
    /// Build a table, validating column lengths and company uniqueness.
    pub fn new(dates: Vec<String>, columns: Vec<CompanyColumn>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(columns.len());
        let mut normalized = Vec::with_capacity(columns.len());

        for mut column in columns {
            if column.returns.len() != dates.len() {
                return Err(TableError::LengthMismatch {
                    company: column.company,
                    expected: dates.len(),
                    actual: column.returns.len(),
                });
            }
            if !seen.insert(column.company.clone()) {
                return Err(TableError::DuplicateCompany(column.company));
            }
            for cell in column.returns.iter_mut() {
                if matches!(cell, Some(v) if !v.is_finite()) {
                    *cell = None;
                }
            }
            normalized.push(column);
        }

        Ok(Self {
            dates,
            columns: normalized,
        })
    }

    /// Date labels, one per row, in trading order.
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Company columns in header order.
    pub fn columns(&self) -> &[CompanyColumn] {
        &self.columns
    }

    pub fn companies(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.company.as_str())
    }

    pub fn column(&self, company: &str) -> Option<&CompanyColumn> {
        self.columns.iter().find(|c| c.company == company)
    }

    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    pub fn company_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.dates.is_empty()
    }

    /// Fraction of cells that are missing, across all columns.
    pub fn missing_rate(&self) -> f64 {
        let total = self.row_count() * self.company_count();
        if total == 0 {
            return 0.0;
        }
        let missing: usize = self
            .columns
            .iter()
            .map(|c| c.returns.iter().filter(|r| r.is_none()).count())
            .sum();
        missing as f64 / total as f64
    }

    /// Derive the series for one company, or `None` if the company is unknown.
    pub fn series(&self, company: &str, policy: MissingPolicy) -> Option<CompanySeries> {
        self.column(company)
            .map(|c| CompanySeries::from_column(c, policy))
    }
}

/// Ordered, gap-free returns for one company.
///
/// `rows[i]` is the table row that `values[i]` came from. Interpolated values
/// keep the row they were filled into.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySeries {
    pub company: String,
    pub values: Vec<f64>,
    pub rows: Vec<usize>,
}

impl CompanySeries {
    pub fn from_column(column: &CompanyColumn, policy: MissingPolicy) -> Self {
        let (values, rows) = match policy {
            MissingPolicy::Drop => drop_missing(&column.returns),
            MissingPolicy::Interpolate => interpolate_missing(&column.returns),
        };
        Self {
            company: column.company.clone(),
            values,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn drop_missing(cells: &[Option<f64>]) -> (Vec<f64>, Vec<usize>) {
    cells
        .iter()
        .enumerate()
        .filter_map(|(row, cell)| cell.map(|v| (v, row)))
        .unzip()
}

fn interpolate_missing(cells: &[Option<f64>]) -> (Vec<f64>, Vec<usize>) {
    let observed: Vec<usize> = cells
        .iter()
        .enumerate()
        .filter_map(|(row, cell)| cell.map(|_| row))
        .collect();

    let (Some(&first), Some(&last)) = (observed.first(), observed.last()) else {
        return (Vec::new(), Vec::new());
    };

    let mut values = Vec::with_capacity(last - first + 1);
    let mut rows = Vec::with_capacity(last - first + 1);

    for pair in observed.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (va, vb) = (cells[a].unwrap_or_default(), cells[b].unwrap_or_default());
        let span = (b - a) as f64;
        for row in a..b {
            values.push(va + (vb - va) * (row - a) as f64 / span);
            rows.push(row);
        }
    }
    values.push(cells[last].unwrap_or_default());
    rows.push(last);

    (values, rows)
}
