use crate::table::{Table, TableError};
use crate::value::Value;
use itertools::Itertools as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorColumn {
    pub name: String,
    pub values: Vec<Value>,
}

/// Derives 0/1 indicator columns for every category of `column` but the first.
///
/// Categories are the distinct non-missing values in sorted order; the
/// smallest one is the reference and gets no column. A missing cell is 0 in
/// every indicator.
pub fn indicator_columns(table: &Table, column: &str) -> Result<Vec<IndicatorColumn>, TableError> {
    let values = table.column(column)?;
    let columns = values
        .iter()
        .filter(|v| !v.is_missing())
        .unique()
        .sorted()
        .skip(1)
        .map(|category| IndicatorColumn {
            name: format!("{}_{}", column, category),
            values: values
                .iter()
                .map(|v| Value::number(if v == category { 1.0 } else { 0.0 }))
                .collect(),
        })
        .collect();
    Ok(columns)
}
