use crate::indicator::indicator_columns;
use crate::table::{Table, TableError};
use crate::value::Value;
use itertools::Itertools as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which columns the cleaning stage drops, fills and encodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    columns_to_drop: Vec<String>,
    categorical_columns: Vec<String>,
    fill_column: String,
    fill_value: String,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns_to_drop<S: Into<String>>(
        mut self,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.columns_to_drop = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn categorical_columns<S: Into<String>>(
        mut self,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categorical_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn fill(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.fill_column = column.into();
        self.fill_value = value.into();
        self
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            columns_to_drop: ["deck", "embarked", "class", "age"]
                .iter()
                .map(|&c| c.to_owned())
                .collect(),
            categorical_columns: vec!["sex".to_owned(), "embark_town".to_owned()],
            fill_column: "embark_town".to_owned(),
            fill_value: "Southampton".to_owned(),
        }
    }
}

/// Returns a cleaned copy of `table`.
///
/// Exact duplicate rows are removed, the configured columns dropped, missing
/// cells of the fill column replaced by the fill value, and indicator
/// columns for each categorical column appended after the remaining columns.
pub fn clean(table: &Table, options: &CleanOptions) -> Result<Table, CleanError> {
    table.require_columns(&options.columns_to_drop)?;
    table.require_columns(&options.categorical_columns)?;
    table.require_columns(&[&options.fill_column])?;

    let mut cleaned = drop_duplicates(table);
    let duplicates = table.rows_len() - cleaned.rows_len();
    cleaned.drop_columns(&options.columns_to_drop)?;

    let mut filled = 0;
    for v in cleaned.column_mut(&options.fill_column)? {
        if v.is_missing() {
            *v = Value::text(options.fill_value.as_str());
            filled += 1;
        }
    }

    let mut indicators = Vec::new();
    for column in &options.categorical_columns {
        indicators.extend(indicator_columns(&cleaned, column)?);
    }
    let indicators_len = indicators.len();
    for indicator in indicators {
        cleaned.push_column(indicator.name, indicator.values)?;
    }

    tracing::debug!(
        rows = cleaned.rows_len(),
        columns = cleaned.columns_len(),
        duplicates,
        filled,
        indicators = indicators_len,
        "cleaned table"
    );
    Ok(cleaned)
}

/// Keeps the first occurrence of every distinct row, in the original order.
pub fn drop_duplicates(table: &Table) -> Table {
    let rows = (0..table.rows_len())
        .unique_by(|&i| table.row(i).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    table.take_rows(&rows)
}

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CleanError {
    #[error("cannot clean table: {0}")]
    Schema(#[from] TableError),
}
