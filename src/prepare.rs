use crate::clean::{clean, CleanError, CleanOptions};
use crate::split::{split, Split, SplitError, SplitOptions};
use crate::table::Table;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareOptions {
    clean: CleanOptions,
    split: SplitOptions,
}

impl PrepareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clean(mut self, options: CleanOptions) -> Self {
        self.clean = options;
        self
    }

    pub fn split(mut self, options: SplitOptions) -> Self {
        self.split = options;
        self
    }
}

/// Cleans `table` and splits the result into train, validate and test subsets.
///
/// Mode imputation is not part of this sequence. Cleaning already fills
/// every missing cell of the fill column, so callers that want mode
/// imputation run [`ModeImputer`](crate::ModeImputer) on the returned subsets.
pub fn prepare(table: &Table, options: &PrepareOptions) -> Result<Split, PrepareError> {
    let cleaned = clean(table, &options.clean)?;
    let split = split(&cleaned, &options.split)?;
    Ok(split)
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PrepareError {
    #[error(transparent)]
    Clean(#[from] CleanError),

    #[error(transparent)]
    Split(#[from] SplitError),
}
