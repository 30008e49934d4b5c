use crate::functions;
use crate::table::{Table, TableError};
use crate::value::Value;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    label: String,
    test_fraction: f64,
    validate_fraction: f64,
    seed: u64,
}

impl SplitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, column: impl Into<String>) -> Self {
        self.label = column.into();
        self
    }

    /// Fraction of all rows that goes to the test subset.
    pub fn test_fraction(mut self, fraction: f64) -> Self {
        self.test_fraction = fraction;
        self
    }

    /// Fraction of the non-test rows that goes to the validate subset.
    pub fn validate_fraction(mut self, fraction: f64) -> Self {
        self.validate_fraction = fraction;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            label: "survived".to_owned(),
            test_fraction: 0.2,
            validate_fraction: 0.3,
            seed: 123,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Table,
    pub validate: Table,
    pub test: Table,
}

/// Splits `table` into train, validate and test subsets stratified on the label column.
///
/// The test subset is carved out first; the validate subset is then carved
/// out of the remaining rows with the same seed. Every subset keeps the
/// source's columns and relative row order.
pub fn split(table: &Table, options: &SplitOptions) -> Result<Split, SplitError> {
    let (rest, test) =
        stratified_partition(table, &options.label, options.test_fraction, options.seed)?;
    let rest = table.take_rows(&rest);
    let test = table.take_rows(&test);

    let (train, validate) =
        stratified_partition(&rest, &options.label, options.validate_fraction, options.seed)?;
    let train = rest.take_rows(&train);
    let validate = rest.take_rows(&validate);

    tracing::debug!(
        train = train.rows_len(),
        validate = validate.rows_len(),
        test = test.rows_len(),
        seed = options.seed,
        "split table"
    );
    Ok(Split {
        train,
        validate,
        test,
    })
}

/// Partitions the row positions of `table` into kept and held-out positions.
///
/// `ceil(fraction * rows)` rows are held out. Each label value contributes to
/// the held-out side in proportion to its frequency; within a label value the
/// rows are chosen by a shuffle seeded with `seed`. Both position lists are
/// ascending.
pub fn stratified_partition(
    table: &Table,
    label: &str,
    fraction: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>), SplitError> {
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(SplitError::InvalidFraction { fraction });
    }

    let mut classes: BTreeMap<&Value, Vec<usize>> = BTreeMap::new();
    for (i, v) in table.column(label)?.iter().enumerate() {
        classes.entry(v).or_default().push(i);
    }

    if let Some((value, rows)) = classes
        .iter()
        .filter(|(_, rows)| rows.len() < 2)
        .min_by_key(|(_, rows)| rows.len())
    {
        return Err(SplitError::Stratification {
            label: label.to_owned(),
            value: value.to_string(),
            count: rows.len(),
        });
    }

    let rows_len = table.rows_len();
    let held_out_len = functions::held_out_len(rows_len, fraction);
    let kept_len = rows_len - held_out_len.min(rows_len);
    if classes.is_empty() || held_out_len < classes.len() || kept_len < classes.len() {
        return Err(SplitError::TooFewRows {
            rows: rows_len,
            classes: classes.len(),
            fraction,
        });
    }

    let sizes = classes.values().map(|rows| rows.len()).collect::<Vec<_>>();
    let allocation = functions::allocate(&sizes, held_out_len);

    let mut rng = seeded_rng(seed);
    let mut kept = Vec::with_capacity(kept_len);
    let mut held_out = Vec::with_capacity(held_out_len);
    for (mut rows, n) in classes.into_iter().map(|(_, rows)| rows).zip(allocation) {
        rows.shuffle(&mut rng);
        held_out.extend_from_slice(&rows[..n]);
        kept.extend_from_slice(&rows[n..]);
    }
    kept.sort_unstable();
    held_out.sort_unstable();
    Ok((kept, held_out))
}

fn seeded_rng(seed: u64) -> StdRng {
    let mut bytes = [0u8; 32];
    (&mut bytes[0..8]).copy_from_slice(&seed.to_be_bytes()[..]);
    StdRng::from_seed(bytes)
}

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplitError {
    #[error("cannot split table: {0}")]
    Schema(#[from] TableError),

    #[error("value {value:?} of label {label:?} occurs {count} time(s); stratification needs at least 2")]
    Stratification {
        label: String,
        value: String,
        count: usize,
    },

    #[error("{rows} rows cannot be split by fraction {fraction} across {classes} classes")]
    TooFewRows {
        rows: usize,
        classes: usize,
        fraction: f64,
    },

    #[error("split fraction must be in the open interval (0, 1), got {fraction}")]
    InvalidFraction { fraction: f64 },
}
