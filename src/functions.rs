use itertools::Itertools as _;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Distributes `draws` slots over groups proportionally to their sizes.
///
/// Each group first gets the floor of its exact share; the leftover slots go
/// to the groups with the largest fractional remainder, ties broken by the
/// larger group and then by the lower index.
pub fn allocate(sizes: &[usize], draws: usize) -> Vec<usize> {
    let total = sizes.iter().sum::<usize>();
    assert!(draws <= total);
    if total == 0 {
        return vec![0; sizes.len()];
    }

    let shares = sizes
        .iter()
        .map(|&n| n as f64 * draws as f64 / total as f64)
        .collect::<Vec<_>>();
    let mut allocation = shares.iter().map(|s| s.floor() as usize).collect::<Vec<_>>();
    let leftover = draws - allocation.iter().sum::<usize>();

    let order = (0..sizes.len())
        .sorted_by_key(|&i| {
            (
                Reverse(OrderedFloat(shares[i] - shares[i].floor())),
                Reverse(sizes[i]),
                i,
            )
        })
        .collect::<Vec<_>>();
    for &i in order.iter().take(leftover) {
        allocation[i] += 1;
    }
    allocation
}

/// Number of rows to hold out of `rows` for the given fraction.
pub fn held_out_len(rows: usize, fraction: f64) -> usize {
    (fraction * rows as f64).ceil() as usize
}
