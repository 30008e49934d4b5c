use crate::table::{Table, TableError};
use crate::value::Value;
use std::cmp::Reverse;
use thiserror::Error;

/// Fills missing cells of one column with its most frequent value.
///
/// The value is learned from a single table with [`ModeImputer::fit`] and
/// then applied unchanged to any number of tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeImputer {
    column: String,
    value: Value,
}

impl ModeImputer {
    /// Learns the most frequent non-missing value of `column`.
    ///
    /// Ties go to the value that appears first in row order.
    pub fn fit(table: &Table, column: &str) -> Result<Self, ImputeError> {
        let value = table
            .value_counts(column)?
            .into_iter()
            .filter(|(v, _)| !v.is_missing())
            .min_by_key(|&(_, count)| Reverse(count))
            .map(|(v, _)| v.clone())
            .ok_or_else(|| ImputeError::NoValues {
                column: column.to_owned(),
            })?;
        tracing::debug!(column, value = %value, "fitted mode imputer");
        Ok(Self {
            column: column.to_owned(),
            value,
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replaces every missing cell of the column, returning how many were filled.
    pub fn transform(&self, table: &mut Table) -> Result<usize, ImputeError> {
        let mut filled = 0;
        for v in table.column_mut(&self.column)? {
            if v.is_missing() {
                *v = self.value.clone();
                filled += 1;
            }
        }
        Ok(filled)
    }
}

/// Fits a [`ModeImputer`] on `train` alone and applies it to all three subsets in place.
pub fn impute(
    train: &mut Table,
    validate: &mut Table,
    test: &mut Table,
    column: &str,
) -> Result<ModeImputer, ImputeError> {
    let imputer = ModeImputer::fit(train, column)?;
    let filled = imputer.transform(train)?
        + imputer.transform(validate)?
        + imputer.transform(test)?;
    tracing::debug!(column, filled, "imputed missing values");
    Ok(imputer)
}

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImputeError {
    #[error("cannot impute: {0}")]
    Schema(#[from] TableError),

    #[error("column {column:?} has no non-missing values to impute from")]
    NoValues { column: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn towns(values: &[Option<&str>]) -> anyhow::Result<Table> {
        let column = values.iter().map(|&v| Value::from(v)).collect();
        Ok(Table::new(vec!["embark_town"], vec![column])?)
    }

    #[test]
    fn impute_uses_train_only() -> anyhow::Result<()> {
        let mut train = towns(&[
            Some("Southampton"),
            Some("Southampton"),
            Some("Cherbourg"),
            None,
        ])?;
        let mut validate = towns(&[None, Some("Cherbourg"), Some("Cherbourg")])?;
        let mut test = towns(&[Some("Queenstown"), None, Some("Queenstown")])?;

        let imputer = impute(&mut train, &mut validate, &mut test, "embark_town")?;
        assert_eq!(imputer.column(), "embark_town");
        assert_eq!(imputer.value(), &Value::text("Southampton"));

        let s = Some("Southampton");
        let c = Some("Cherbourg");
        let q = Some("Queenstown");
        assert_eq!(train, towns(&[s, s, c, s])?);
        assert_eq!(validate, towns(&[s, c, c])?);
        assert_eq!(test, towns(&[q, s, q])?);
        Ok(())
    }

    #[test]
    fn ties_go_to_first_seen() -> anyhow::Result<()> {
        let table = towns(&[
            None,
            Some("Queenstown"),
            Some("Cherbourg"),
            Some("Cherbourg"),
            Some("Queenstown"),
        ])?;
        let imputer = ModeImputer::fit(&table, "embark_town")?;
        assert_eq!(imputer.value(), &Value::text("Queenstown"));
        Ok(())
    }

    #[test]
    fn missing_is_never_the_mode() -> anyhow::Result<()> {
        let table = towns(&[None, None, None, Some("Cherbourg")])?;
        let imputer = ModeImputer::fit(&table, "embark_town")?;
        assert_eq!(imputer.value(), &Value::text("Cherbourg"));
        Ok(())
    }

    #[test]
    fn transform_counts_and_leaves_other_columns() -> anyhow::Result<()> {
        let mut table = Table::from_rows(
            vec!["embark_town", "age"],
            vec![
                vec![Value::Missing, Value::Missing],
                vec![Value::text("Cherbourg"), Value::from(30.0)],
                vec![Value::Missing, Value::from(40.0)],
            ],
        )?;
        let imputer = ModeImputer::fit(&table, "embark_town")?;
        assert_eq!(imputer.transform(&mut table)?, 2);
        assert_eq!(imputer.transform(&mut table)?, 0);
        assert_eq!(table.column("age")?[0], Value::Missing);
        assert_eq!(table.row_labels(), &[0, 1, 2]);
        Ok(())
    }

    #[test]
    fn all_missing_fails() -> anyhow::Result<()> {
        let mut train = towns(&[None, None])?;
        let mut validate = towns(&[Some("Cherbourg")])?;
        let mut test = towns(&[Some("Cherbourg")])?;
        assert_eq!(
            impute(&mut train, &mut validate, &mut test, "embark_town"),
            Err(ImputeError::NoValues {
                column: "embark_town".to_owned()
            })
        );
        Ok(())
    }

    #[test]
    fn missing_column_fails() -> anyhow::Result<()> {
        let table = towns(&[Some("Cherbourg")])?;
        let imputer = ModeImputer::fit(&table, "embark_town")?;

        let mut other = Table::new(vec!["sex"], vec![vec![Value::Missing]])?;
        assert_eq!(
            imputer.transform(&mut other),
            Err(ImputeError::Schema(TableError::MissingColumn {
                column: "embark_town".to_owned()
            }))
        );
        Ok(())
    }
}
