//! Preparation of the passenger survival table for modelling.
//!
//! [`prepare`] removes duplicate rows, drops unused columns, fills missing
//! embarkation towns and appends indicator columns, then splits the rows into
//! stratified train, validate and test subsets. [`impute`] fills a column's
//! missing values with the mode learned from the train subset alone.
pub use clean::{clean, drop_duplicates, CleanError, CleanOptions};
pub use impute::{impute, ImputeError, ModeImputer};
pub use indicator::{indicator_columns, IndicatorColumn};
pub use prepare::{prepare, PrepareError, PrepareOptions};
pub use split::{split, stratified_partition, Split, SplitError, SplitOptions};
pub use table::{Table, TableError};
pub use value::Value;

mod clean;
mod functions;
mod impute;
mod indicator;
mod prepare;
mod split;
mod table;
mod value;

#[cfg(test)]
mod test_data;
