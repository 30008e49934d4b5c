use crate::value::Value;
use std::collections::HashMap;
use thiserror::Error;

/// An in-memory table of named columns.
///
/// Every row carries a label: its position in the table it was first built
/// as. Labels survive row filtering and subsetting, so rows of a split can be
/// traced back to the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
    row_labels: Vec<usize>,
}

impl Table {
    pub fn new<S: Into<String>>(
        names: Vec<S>,
        columns: Vec<Vec<Value>>,
    ) -> Result<Self, TableError> {
        let names = names.into_iter().map(Into::into).collect::<Vec<String>>();
        if names.len() != columns.len() {
            return Err(TableError::ColumnCountMismatch {
                names: names.len(),
                columns: columns.len(),
            });
        }

        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(TableError::DuplicateColumn {
                    column: name.clone(),
                });
            }
        }

        let rows_len = columns.first().map_or(0, |c| c.len());
        if let Some(i) = columns.iter().position(|c| c.len() != rows_len) {
            return Err(TableError::RowSizeMismatch {
                column: names[i].clone(),
            });
        }

        Ok(Self {
            names,
            columns,
            row_labels: (0..rows_len).collect(),
        })
    }

    pub fn from_rows<S: Into<String>>(
        names: Vec<S>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self, TableError> {
        let names = names.into_iter().map(Into::into).collect::<Vec<String>>();
        let mut columns = vec![Vec::with_capacity(rows.len()); names.len()];
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != names.len() {
                return Err(TableError::RowWidthMismatch {
                    row: i,
                    expected: names.len(),
                    actual: row.len(),
                });
            }
            for (column, v) in columns.iter_mut().zip(row) {
                column.push(v);
            }
        }
        Self::new(names, columns)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn rows_len(&self) -> usize {
        self.row_labels.len()
    }

    pub fn columns_len(&self) -> usize {
        self.names.len()
    }

    pub fn row_labels(&self) -> &[usize] {
        &self.row_labels
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn column(&self, name: &str) -> Result<&[Value], TableError> {
        let i = self.require(name)?;
        Ok(&self.columns[i])
    }

    pub fn column_mut(&mut self, name: &str) -> Result<&mut [Value], TableError> {
        let i = self.require(name)?;
        Ok(&mut self.columns[i])
    }

    pub fn row(&self, row: usize) -> impl '_ + Iterator<Item = &Value> + Clone {
        self.columns.iter().map(move |c| &c[row])
    }

    pub fn require_columns<S: AsRef<str>>(&self, names: &[S]) -> Result<(), TableError> {
        for name in names {
            self.require(name.as_ref())?;
        }
        Ok(())
    }

    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Value>,
    ) -> Result<(), TableError> {
        let name = name.into();
        if self.contains_column(&name) {
            return Err(TableError::DuplicateColumn { column: name });
        }
        if values.len() != self.rows_len() {
            return Err(TableError::RowSizeMismatch { column: name });
        }
        self.names.push(name);
        self.columns.push(values);
        Ok(())
    }

    /// Removes the given columns. Nothing is removed unless all of them exist.
    pub fn drop_columns<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), TableError> {
        self.require_columns(names)?;
        for name in names {
            if let Some(i) = self.position(name.as_ref()) {
                self.names.remove(i);
                self.columns.remove(i);
            }
        }
        Ok(())
    }

    /// Builds a table holding the given row positions, in the given order.
    pub fn take_rows(&self, rows: &[usize]) -> Self {
        Self {
            names: self.names.clone(),
            columns: self
                .columns
                .iter()
                .map(|c| rows.iter().map(|&i| c[i].clone()).collect())
                .collect(),
            row_labels: rows.iter().map(|&i| self.row_labels[i]).collect(),
        }
    }

    /// Counts the values of a column, in order of first appearance.
    pub fn value_counts(&self, name: &str) -> Result<Vec<(&Value, usize)>, TableError> {
        let mut index = HashMap::new();
        let mut counts: Vec<(&Value, usize)> = Vec::new();
        for v in self.column(name)? {
            let i = *index.entry(v).or_insert_with(|| {
                counts.push((v, 0));
                counts.len() - 1
            });
            counts[i].1 += 1;
        }
        Ok(counts)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    fn require(&self, name: &str) -> Result<usize, TableError> {
        self.position(name)
            .ok_or_else(|| TableError::MissingColumn {
                column: name.to_owned(),
            })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("required column {column:?} is missing")]
    MissingColumn { column: String },

    #[error("column {column:?} already exists")]
    DuplicateColumn { column: String },

    #[error("column {column:?} has a different row count from others")]
    RowSizeMismatch { column: String },

    #[error("row {row} has {actual} values but the table has {expected} columns")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{names} column names were given for {columns} columns")]
    ColumnCountMismatch { names: usize, columns: usize },
}
